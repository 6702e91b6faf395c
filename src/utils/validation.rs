use crate::utils::error::{ArrayError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// RFC 6901 shape: the empty string (whole element) or a `/`-prefixed path.
pub fn is_json_pointer(pointer: &str) -> bool {
    pointer.is_empty() || pointer.starts_with('/')
}

pub fn validate_json_pointer(field_name: &str, pointer: &str) -> Result<()> {
    if is_json_pointer(pointer) {
        return Ok(());
    }

    Err(ArrayError::ValidationError {
        field: field_name.to_string(),
        value: pointer.to_string(),
        reason: "JSON pointer must be empty or start with '/'".to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ArrayError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_optional_non_empty(field_name: &str, value: &Option<String>) -> Result<()> {
    match value {
        Some(value) => validate_non_empty_string(field_name, value),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_json_pointer() {
        assert!(validate_json_pointer("key", "").is_ok());
        assert!(validate_json_pointer("key", "/job").is_ok());
        assert!(validate_json_pointer("key", "/address/city").is_ok());
        assert!(validate_json_pointer("key", "job").is_err());
        assert!(is_json_pointer("/a~1b"));
        assert!(!is_json_pointer("a/b"));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("input", "[1]").is_ok());
        assert!(validate_non_empty_string("input", "   ").is_err());
        assert!(validate_optional_non_empty("input", &None).is_ok());
        assert!(validate_optional_non_empty("input", &Some(String::new())).is_err());
    }
}
