use email_address::EmailAddress;
use thiserror::Error;

/// A field value failed a built-in rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Require a valid email address. Empty input is valid.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || EmailAddress::is_valid(trimmed) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert_eq!(validate_email("ada@example.com"), Ok(()));
        assert_eq!(validate_email(" ada@example.com "), Ok(()));
        assert_eq!(validate_email(""), Ok(()));
    }

    #[test]
    fn test_invalid_addresses() {
        assert_eq!(
            validate_email("not-an-email"),
            Err(ValidationError::InvalidEmail("not-an-email".to_string()))
        );
        assert!(validate_email("a@").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = validate_email("nope").unwrap_err();
        assert_eq!(err.to_string(), "'nope' is not a valid email address");
    }
}
