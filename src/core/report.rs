use crate::core::Parcel;
use chrono::NaiveDateTime;
use std::fmt::Write;

pub const NOT_SPECIFIED: &str = "not specified";
pub const NO_VIOLATIONS: &str = "no violations found";
pub const NO_VIOLATIONS_SUMMARY: &str = "no violations found across all parcels";

const SEPARATOR_WIDTH: usize = 50;

/// Render the plain-text report for `parcels` in registry order.
///
/// The closing summary line appears only when no parcel carries a violation,
/// which includes the empty registry.
pub fn render(parcels: &[Parcel], generated_at: NaiveDateTime) -> String {
    let mut report = String::new();
    let _ = writeln!(
        report,
        "Land parcel report ({})",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    report.push('\n');

    for parcel in parcels {
        write_parcel(&mut report, parcel);
    }

    if parcels.iter().all(|p| !p.has_violations()) {
        let _ = writeln!(report, "\nSummary: {}", NO_VIOLATIONS_SUMMARY);
    }

    report
}

fn write_parcel(report: &mut String, parcel: &Parcel) {
    let actual_use = parcel
        .actual_use
        .as_deref()
        .filter(|u| !u.is_empty())
        .unwrap_or(NOT_SPECIFIED);

    let _ = writeln!(report, "Cadastral number: {}", parcel.cadastral_number);
    let _ = writeln!(report, "Area: {} ha", format_area(parcel.area));
    let _ = writeln!(report, "Category: {}", parcel.category);
    let _ = writeln!(report, "Permitted use: {}", parcel.permitted_use);
    let _ = writeln!(report, "Actual use: {}", actual_use);

    if parcel.violations.is_empty() {
        let _ = writeln!(report, "Violations: {}", NO_VIOLATIONS);
    } else {
        report.push_str("Violations:\n");
        for violation in &parcel.violations {
            let _ = writeln!(report, "- {}", violation);
        }
    }

    report.push_str(&"-".repeat(SEPARATOR_WIDTH));
    report.push('\n');
}

/// Whole hectares keep one decimal place (`3.0`), others print as stored.
pub fn format_area(area: f64) -> String {
    if area.is_finite() && area.fract() == 0.0 {
        format!("{:.1}", area)
    } else {
        area.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    fn assessed(number: &str, permitted: &str, actual: &str) -> Parcel {
        let mut parcel = Parcel::new(number, 2.5, "agricultural", permitted);
        parcel.actual_use = Some(actual.to_string());
        parcel.check_violations();
        parcel
    }

    #[test]
    fn test_empty_registry_has_header_and_summary() {
        let report = render(&[], timestamp());
        assert_eq!(
            report,
            "Land parcel report (2024-03-15 09:05:07)\n\n\nSummary: no violations found across all parcels\n"
        );
    }

    #[test]
    fn test_parcel_block_layout() {
        let parcels = vec![assessed("77:01:0001001:1", "farming", "warehouse")];
        let report = render(&parcels, timestamp());

        let expected_block = "Cadastral number: 77:01:0001001:1\n\
Area: 2.5 ha\n\
Category: agricultural\n\
Permitted use: farming\n\
Actual use: warehouse\n\
Violations:\n\
- mismatch of use: permitted 'farming', actual 'warehouse'\n";
        assert!(report.contains(expected_block));
        assert!(report.contains(&format!("{}\n", "-".repeat(50))));
        assert!(!report.contains(NO_VIOLATIONS_SUMMARY));
    }

    #[test]
    fn test_unassessed_parcel_shows_placeholder() {
        let parcels = vec![Parcel::new("1", 4.0, "forest", "logging")];
        let report = render(&parcels, timestamp());

        assert!(report.contains("Area: 4.0 ha\n"));
        assert!(report.contains("Actual use: not specified\n"));
        assert!(report.contains("Violations: no violations found\n"));
        assert!(report.ends_with("\nSummary: no violations found across all parcels\n"));
    }

    #[test]
    fn test_parcels_keep_registry_order() {
        let parcels = vec![
            assessed("B", "farming", "farming"),
            assessed("A", "farming", "mining"),
        ];
        let report = render(&parcels, timestamp());

        let b = report.find("Cadastral number: B").unwrap();
        let a = report.find("Cadastral number: A").unwrap();
        assert!(b < a);
        assert!(!report.contains("Summary:"));
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(3.0), "3.0");
        assert_eq!(format_area(2.5), "2.5");
        assert_eq!(format_area(0.125), "0.125");
    }
}
