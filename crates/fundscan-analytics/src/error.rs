//! Error types for the analytics engine.
//!
//! Per-fund solve failures are not errors here; they surface as
//! [`fundscan_core::types::ReturnStatus`] values on the fund record. The only
//! fatal condition is a statement that yields no analyzable funds at all.

use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors produced by the analytics engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// The statement contained no scheme with a positive valuation.
    ///
    /// Callers must surface this to the user; it is distinct from a
    /// statement that could not be parsed at all.
    #[error("No valid fund data found in the statement")]
    NoValidFunds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(AnalyticsError::NoValidFunds
            .to_string()
            .contains("No valid fund data"));
    }
}
