use std::cmp::Ordering;

/// Compares strings the way a human would order them: digit runs compare by
/// numeric value, so `infra2 < infra10`. Digits sort before other characters,
/// everything else compares bytewise.
///
/// For numerically equal runs, the one with fewer leading zeros sorts first.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let (ca, cb) = (a[i], b[j]);
        match (ca.is_ascii_digit(), cb.is_ascii_digit()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {
                if ca != cb {
                    return ca.cmp(&cb);
                }
                i += 1;
                j += 1;
            }
            (true, true) => {
                while i < a.len() && a[i] == b'0' {
                    i += 1;
                }
                while j < b.len() && b[j] == b'0' {
                    j += 1;
                }
                let (start_a, start_b) = (i, j);
                while i < a.len() && a[i].is_ascii_digit() {
                    i += 1;
                }
                while j < b.len() && b[j].is_ascii_digit() {
                    j += 1;
                }
                let (num_a, num_b) = (&a[start_a..i], &b[start_b..j]);
                let ord = num_a
                    .len()
                    .cmp(&num_b.len())
                    .then_with(|| num_a.cmp(num_b))
                    .then_with(|| start_a.cmp(&start_b));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}
