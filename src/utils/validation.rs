use crate::utils::error::{RegistryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_distinct_paths(field_name: &str, first: &str, second: &str) -> Result<()> {
    if first == second {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: second.to_string(),
            reason: "Report file must differ from the data file".to_string(),
        });
    }
    Ok(())
}

/// Parse an operator-typed area in hectares. Accepts a decimal comma.
pub fn parse_area(value: &str) -> Result<f64> {
    let normalized = value.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|area| area.is_finite())
        .ok_or_else(|| RegistryError::InvalidInputError {
            field: "area".to_string(),
            value: value.to_string(),
            reason: "Expected a number of hectares".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_file", "land_data.json").is_ok());
        assert!(validate_path("data_file", "").is_err());
        assert!(validate_path("data_file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("report_file", "a.json", "b.txt").is_ok());
        assert!(validate_distinct_paths("report_file", "a.json", "a.json").is_err());
    }

    #[test]
    fn test_parse_area() {
        assert_eq!(parse_area("2.5").unwrap(), 2.5);
        assert_eq!(parse_area(" 3,75 ").unwrap(), 3.75);
        assert_eq!(parse_area("-1").unwrap(), -1.0);
        assert!(parse_area("two").is_err());
        assert!(parse_area("").is_err());
        assert!(parse_area("inf").is_err());
    }
}
