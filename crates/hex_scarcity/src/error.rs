//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! malformed board shapes, out-of-range scarcity and bad category lists.
//! Every validation error is raised before any random draw takes place.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid board shape: {0}")]
    InvalidShape(String),

    #[error("invalid scarcity {0}: must be within [0, 100]")]
    InvalidScarcity(f64),

    #[error("invalid resource categories: {0}")]
    InvalidCategories(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_scarcity_message_names_value() {
        let err = Error::InvalidScarcity(150.0);
        assert_eq!(
            err.to_string(),
            "invalid scarcity 150: must be within [0, 100]"
        );
    }

    #[test]
    fn shape_and_category_messages_carry_detail() {
        let err = Error::InvalidShape("radius must be >= 0, got -1".into());
        assert_eq!(
            err.to_string(),
            "invalid board shape: radius must be >= 0, got -1"
        );
        let err = Error::InvalidCategories("duplicate category 'Ore'".into());
        assert!(err.to_string().ends_with("duplicate category 'Ore'"));
    }
}
