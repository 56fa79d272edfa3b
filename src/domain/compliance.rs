//! The single compliance rule: observed use must match permitted use.

/// Violation messages for a parcel with the given permitted and observed use.
///
/// An absent or empty observed use is never a violation. The result is a
/// function of its inputs only, so assessing the same state twice yields the
/// same messages.
pub fn assess_use(permitted_use: &str, actual_use: Option<&str>) -> Vec<String> {
    match actual_use {
        Some(actual) if !actual.is_empty() && actual != permitted_use => {
            vec![use_mismatch_message(permitted_use, actual)]
        }
        _ => Vec::new(),
    }
}

pub fn use_mismatch_message(permitted_use: &str, actual_use: &str) -> String {
    format!(
        "mismatch of use: permitted '{}', actual '{}'",
        permitted_use, actual_use
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_use_has_no_violations() {
        assert!(assess_use("farming", Some("farming")).is_empty());
    }

    #[test]
    fn test_mismatched_use_yields_single_message() {
        let violations = assess_use("farming", Some("warehouse"));
        assert_eq!(
            violations,
            vec!["mismatch of use: permitted 'farming', actual 'warehouse'".to_string()]
        );
    }

    #[test]
    fn test_absent_or_empty_actual_use_is_not_checked() {
        assert!(assess_use("farming", None).is_empty());
        assert!(assess_use("farming", Some("")).is_empty());
    }

    #[test]
    fn test_comparison_is_exact() {
        assert_eq!(assess_use("Farming", Some("farming")).len(), 1);
        assert_eq!(assess_use("farming", Some("farming ")).len(), 1);
    }

    #[test]
    fn test_assessment_is_idempotent() {
        let first = assess_use("ИЖС", Some("склад"));
        let second = assess_use("ИЖС", Some("склад"));
        assert_eq!(first, second);
        assert!(first[0].contains("ИЖС") && first[0].contains("склад"));
    }
}
