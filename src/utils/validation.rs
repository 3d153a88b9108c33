use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::InvalidBook {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 年份必須嚴格大於 0 且不超過 `max_year`
pub fn validate_year(field_name: &str, year: i64, max_year: i64) -> Result<()> {
    if year <= 0 || year > max_year {
        return Err(DemoError::InvalidBook {
            field: field_name.to_string(),
            reason: format!("Year {} must be greater than 0 and at most {}", year, max_year),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("title", "Dune").is_ok());
        assert!(validate_non_empty_string("title", "").is_err());
        assert!(validate_non_empty_string("title", "   \t").is_err());
    }

    #[test]
    fn test_validate_year_bounds() {
        assert!(validate_year("year", 1, 2024).is_ok());
        assert!(validate_year("year", 2024, 2024).is_ok());
        assert!(validate_year("year", 0, 2024).is_err());
        assert!(validate_year("year", -5, 2024).is_err());
        assert!(validate_year("year", 2025, 2024).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("validation.max_year", 2024, 1, 9999).is_ok());
        assert!(validate_range("validation.max_year", 0, 1, 9999).is_err());
        assert!(validate_range("validation.max_year", 10000, 1, 9999).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.format", "json", &["compact", "json"]).is_ok());
        assert!(validate_one_of("logging.format", "xml", &["compact", "json"]).is_err());
    }
}
