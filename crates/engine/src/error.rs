//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`Validation`] thrown when an input field is missing or out of range.
//! - [`InvalidCategory`] thrown when a label is not one of the fixed categories.
//! - [`StorageUnavailable`] thrown when the store cannot be opened, read or written.
//! - [`ConstraintViolation`] thrown when the store rejects a row.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`InvalidCategory`]: EngineError::InvalidCategory
//!  [`StorageUnavailable`]: EngineError::StorageUnavailable
//!  [`ConstraintViolation`]: EngineError::ConstraintViolation
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("\"{0}\" is not a known category")]
    InvalidCategory(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(DbErr),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// `true` for errors the user can fix by correcting the input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidCategory(_))
    }
}

impl From<DbErr> for EngineError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(sql_err) => Self::ConstraintViolation(sql_err.to_string()),
            None => Self::StorageUnavailable(err),
        }
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::InvalidCategory(a), Self::InvalidCategory(b)) => a == b,
            (Self::ConstraintViolation(a), Self::ConstraintViolation(b)) => a == b,
            (Self::StorageUnavailable(a), Self::StorageUnavailable(b)) => {
                a.to_string() == b.to_string()
            }
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            (Self::Io(a), Self::Io(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_are_storage_unavailable() {
        let err = EngineError::from(DbErr::Custom("disk gone".to_string()));
        assert!(matches!(err, EngineError::StorageUnavailable(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn validation_errors_are_flagged() {
        assert!(EngineError::Validation("item".to_string()).is_validation());
        assert!(EngineError::InvalidCategory("Rent".to_string()).is_validation());
    }
}
