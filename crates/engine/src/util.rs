//! Internal helpers for input validation.
//!
//! These utilities are **not** part of the public API, apart from
//! [`DATE_FORMAT`] and the front-end rule [`require_details`]. They centralize validation so the engine enforces the same
//! rules whichever front end calls it.

use crate::{EngineError, ResultEngine};

/// Format used to persist expense dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Warning shown when a purchase detail is empty or zero.
pub const MISSING_DETAILS: &str = "Please enter all details!";

/// Front-end rule shared by the form and the command line: a zero quantity
/// or amount counts as a missing detail, like an empty field. The engine
/// itself stores zero amounts.
pub fn require_details(quantity: i64, amount: f64) -> ResultEngine<()> {
    if quantity == 0 || amount == 0.0 {
        return Err(EngineError::Validation(MISSING_DETAILS.to_string()));
    }
    Ok(())
}

pub(crate) fn normalize_required_text(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(format!("{label} must not be empty")));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn validate_quantity(quantity: i64) -> ResultEngine<()> {
    if quantity < 1 {
        return Err(EngineError::Validation(format!(
            "quantity must be >= 1, got {quantity}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_amount(amount: f64) -> ResultEngine<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(EngineError::Validation(format!(
            "amount must be a non-negative number, got {amount}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_id(id: i64) -> ResultEngine<()> {
    if id < 1 {
        return Err(EngineError::Validation(format!(
            "id must be a positive integer, got {id}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed_and_required() {
        assert_eq!(normalize_required_text("  Rice ", "item").unwrap(), "Rice");
        assert_eq!(
            normalize_required_text("   ", "item"),
            Err(EngineError::Validation("item must not be empty".to_string()))
        );
    }

    #[test]
    fn amount_rejects_negative_and_nan() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(-0.01).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn zero_details_count_as_missing() {
        assert!(require_details(2, 50.0).is_ok());
        assert_eq!(
            require_details(2, 0.0),
            Err(EngineError::Validation(MISSING_DETAILS.to_string()))
        );
        assert!(require_details(0, 50.0).unwrap_err().is_validation());
    }

    #[test]
    fn quantity_and_id_must_be_positive() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_id(1).is_ok());
        assert!(validate_id(0).is_err());
        assert!(validate_id(-4).is_err());
    }
}
