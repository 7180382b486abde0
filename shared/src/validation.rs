//! Validation utilities for report inputs

use validator::ValidationError;

/// Maximum length of a link value (item code, warehouse, supplier name)
pub const MAX_LINK_NAME_LEN: usize = 140;

/// Validate a link value used as a report filter.
///
/// Names are free text in the host application, at most
/// [`MAX_LINK_NAME_LEN`] characters and without control characters.
pub fn validate_link_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > MAX_LINK_NAME_LEN {
        let mut error = ValidationError::new("length");
        error.message =
            Some(format!("Value must be at most {} characters", MAX_LINK_NAME_LEN).into());
        return Err(error);
    }
    if name.chars().any(char::is_control) {
        let mut error = ValidationError::new("control_characters");
        error.message = Some("Value must not contain control characters".into());
        return Err(error);
    }
    Ok(())
}

/// Check that a selected quantity can be ordered
pub fn is_orderable_qty(qty: Option<rust_decimal::Decimal>) -> bool {
    matches!(qty, Some(q) if !q.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_validate_link_name_plain() {
        assert!(validate_link_name("Stores - WH1").is_ok());
        assert!(validate_link_name("ITM-0001/Größe M").is_ok());
    }

    #[test]
    fn test_validate_link_name_length() {
        assert!(validate_link_name(&"a".repeat(MAX_LINK_NAME_LEN)).is_ok());
        // counted in characters, not bytes
        assert!(validate_link_name(&"ä".repeat(MAX_LINK_NAME_LEN)).is_ok());

        let err = validate_link_name(&"a".repeat(MAX_LINK_NAME_LEN + 1)).unwrap_err();
        assert_eq!(err.code, "length");
    }

    #[test]
    fn test_validate_link_name_control_characters() {
        assert!(validate_link_name("WH1\n").is_err());
        assert!(validate_link_name("A\u{0}B").is_err());
    }

    #[test]
    fn test_orderable_qty() {
        assert!(is_orderable_qty(Some(Decimal::new(-5, 0))));
        assert!(is_orderable_qty(Some(Decimal::new(25, 1))));
        assert!(!is_orderable_qty(Some(Decimal::ZERO)));
        assert!(!is_orderable_qty(None));
    }
}
