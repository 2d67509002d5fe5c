use crate::utils::error::{GreetError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| GreetError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GreetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(GreetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("greeting.text", "Hola").is_ok());
        assert!(validate_non_empty_string("greeting.text", "").is_err());
        assert!(validate_non_empty_string("greeting.text", "   ").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("greeting.source", "dao", &["dao", "static"]).is_ok());
        assert!(validate_one_of("greeting.source", "http", &["dao", "static"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("Hola".to_string());
        let absent: Option<String> = None;
        assert_eq!(validate_required_field("greeting.text", &present).unwrap(), "Hola");
        assert!(matches!(
            validate_required_field("greeting.text", &absent),
            Err(GreetError::MissingConfigError { .. })
        ));
    }
}
