//! Form input helpers shared by the account use cases

use crate::error::{BankError, BankResult};

/// Non-blank value, trimmed
pub(crate) fn required(value: &str, field: &'static str) -> BankResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BankError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Blank input counts as absent
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required("  bob ", "Username").unwrap(), "bob");
        assert!(matches!(
            required("   ", "Username"),
            Err(BankError::MissingField("Username"))
        ));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("p2".into())), Some("p2".to_string()));
    }
}
