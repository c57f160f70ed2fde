use crate::utils::error::{QuoteLexError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QuoteLexError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QuoteLexError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(QuoteLexError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("lexer.input", "samples/input.js").is_ok());
        assert!(validate_path("lexer.input", "").is_err());
        assert!(validate_path("lexer.input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["text", "json"]).is_ok());

        let err = validate_one_of("output.format", "yaml", &["text", "json"]).unwrap_err();
        assert_eq!(err.recovery_suggestion(), "Valid values: text, json");
    }
}
