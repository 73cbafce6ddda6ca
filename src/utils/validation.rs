use crate::utils::error::{RecipeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| RecipeError::MissingInput {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecipeError::invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_positive_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RecipeError::invalid(field_name, value, "Value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(RecipeError::invalid(field_name, value, "Value must be greater than 0"));
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
        return Err(RecipeError::invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// `value` must sit on the grid `min + k * step`.
pub fn validate_step(field_name: &str, value: f64, min: f64, step: f64) -> Result<()> {
    let offset = (value - min) / step;
    if (offset - offset.round()).abs() > 1e-9 {
        return Err(RecipeError::invalid(
            field_name,
            value,
            format!("Value must be a multiple of {} starting from {}", step, min),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_finite() {
        assert!(validate_positive_finite("target_water_cc", 300.0).is_ok());
        assert!(validate_positive_finite("target_water_cc", 0.0).is_err());
        assert!(validate_positive_finite("target_water_cc", -10.0).is_err());
        assert!(validate_positive_finite("target_water_cc", f64::NAN).is_err());
        assert!(validate_positive_finite("target_water_cc", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("target_water_cc", 150.0, 150.0, 1000.0).is_ok());
        assert!(validate_range("target_water_cc", 1000.0, 150.0, 1000.0).is_ok());
        assert!(validate_range("target_water_cc", 140.0, 150.0, 1000.0).is_err());
        assert!(validate_range("target_water_cc", 1010.0, 150.0, 1000.0).is_err());
    }

    #[test]
    fn test_validate_step() {
        assert!(validate_step("target_water_cc", 300.0, 150.0, 10.0).is_ok());
        assert!(validate_step("target_water_cc", 155.0, 150.0, 10.0).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("V60".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("brewer", &present).unwrap(), "V60");
        assert!(matches!(
            validate_required_field("brewer", &missing),
            Err(RecipeError::MissingInput { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("origin", "Kenya AA").is_ok());
        assert!(validate_non_empty_string("origin", "   ").is_err());
    }
}
