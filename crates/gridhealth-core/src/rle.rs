use crate::model::RowResult;

/// Lazily expands a flat run-length encoded result list.
///
/// `[1, 3, 12, 2]` decodes to `Pass, Pass, Pass, Fail, Fail`. Pairs with a
/// non-positive count contribute nothing; a dangling trailing code is ignored.
#[derive(Debug, Clone)]
pub struct RunLengthResults<'a> {
    pairs: std::slice::ChunksExact<'a, i32>,
    current: Option<RowResult>,
    remaining: i32,
}

impl<'a> RunLengthResults<'a> {
    pub fn new(encoded: &'a [i32]) -> Self {
        Self {
            pairs: encoded.chunks_exact(2),
            current: None,
            remaining: 0,
        }
    }
}

impl Iterator for RunLengthResults<'_> {
    type Item = RowResult;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining <= 0 {
            let pair = self.pairs.next()?;
            self.current = Some(RowResult::from_code(pair[0]));
            self.remaining = pair[1];
        }
        self.remaining -= 1;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RowResult::*;

    #[test]
    fn expands_pairs_in_order() {
        let decoded: Vec<_> = RunLengthResults::new(&[0, 3, 1, 4]).collect();
        assert_eq!(
            decoded,
            vec![NoResult, NoResult, NoResult, Pass, Pass, Pass, Pass]
        );
    }

    #[test]
    fn skips_empty_runs_and_dangling_code() {
        let decoded: Vec<_> = RunLengthResults::new(&[12, 0, 13, 1, 1, -2, 4]).collect();
        assert_eq!(decoded, vec![Flaky]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(RunLengthResults::new(&[]).count(), 0);
    }
}
