//! Genuine vs infrastructure failure classification.
//!
//! Infra failures are reported by the grid with a bare token message
//! (e.g. `pod_evicted`); anything else, including no message, is the test's fault.

use lazy_static::lazy_static;
use regex::Regex;

use crate::grid::RowCounts;

lazy_static! {
    /// ASCII word characters only; non-ASCII messages are genuine failures.
    static ref INFRA_MESSAGE: Regex = Regex::new(r"^[0-9A-Za-z_]+$").unwrap();
}

/// Returns the infra cause tag for `message`, or `None` for a genuine failure.
pub fn infra_cause(message: &str) -> Option<&str> {
    if message.is_empty() || !INFRA_MESSAGE.is_match(message) {
        return None;
    }
    Some(message)
}

pub fn categorize_failure(counts: &mut RowCounts, message: &str) {
    match infra_cause(message) {
        None => counts.failed += 1,
        Some(cause) => {
            counts.failed_infra_count += 1;
            *counts.infra_failures.entry(cause.to_string()).or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_genuine_failure() {
        let mut counts = RowCounts::default();
        categorize_failure(&mut counts, "");
        assert_eq!(counts.failed, 1);
        assert_eq!(counts.failed_infra_count, 0);
        assert!(counts.infra_failures.is_empty());
    }

    #[test]
    fn sentence_message_is_genuine_failure() {
        let mut counts = RowCounts::default();
        categorize_failure(&mut counts, "expected 3 got 4");
        categorize_failure(&mut counts, "timeout-waiting");
        assert_eq!(counts.failed, 2);
        assert_eq!(counts.failed_infra_count, 0);
    }

    #[test]
    fn bare_token_is_infra_failure() {
        let mut counts = RowCounts::default();
        categorize_failure(&mut counts, "infra_fail_1");
        categorize_failure(&mut counts, "infra_fail_1");
        categorize_failure(&mut counts, "NodeLost");
        assert_eq!(counts.failed, 0);
        assert_eq!(counts.failed_infra_count, 3);
        assert_eq!(counts.infra_failures["infra_fail_1"], 2);
        assert_eq!(counts.infra_failures["NodeLost"], 1);
    }

    #[test]
    fn non_ascii_token_is_genuine_failure() {
        assert_eq!(infra_cause("réseau_perdu"), None);
        assert_eq!(infra_cause("节点丢失"), None);

        let mut counts = RowCounts::default();
        categorize_failure(&mut counts, "réseau_perdu");
        assert_eq!(counts.failed, 1);
        assert_eq!(counts.failed_infra_count, 0);
        assert!(counts.infra_failures.is_empty());
    }

    #[test]
    fn trailing_newline_is_not_a_bare_token() {
        assert_eq!(infra_cause("oom\n"), None);
        assert_eq!(infra_cause("oom"), Some("oom"));
    }
}
