//! Error types for rod-cutting instances.
//!
//! Both variants are precondition violations. They are detected before any
//! table is allocated and surface to the caller unchanged.

use thiserror::Error;

/// Reasons a `(length, prices)` pair is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CutError {
    /// The rod length was zero or negative.
    #[error("rod length must be positive, got {0}")]
    InvalidLength(i64),

    /// The price table does not carry exactly one entry per piece length.
    #[error("price table has {prices} entries but rod length is {length}")]
    PriceTableMismatch { length: usize, prices: usize },
}

/// Returned when a [`Strategy`](crate::builder::Strategy) name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy '{0}' (expected 'memoized' or 'tabulated')")]
pub struct ParseStrategyError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        assert_eq!(
            CutError::InvalidLength(-3).to_string(),
            "rod length must be positive, got -3"
        );
        let mismatch = CutError::PriceTableMismatch {
            length: 5,
            prices: 4,
        };
        assert_eq!(
            mismatch.to_string(),
            "price table has 4 entries but rod length is 5"
        );
    }
}
