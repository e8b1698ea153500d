//! Factorization error types

use thiserror::Error;

/// Errors raised by factorization and accumulation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactorError {
    /// Operand is zero, negative, or not a decimal integer
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A product of factors does not fit in `u128`
    #[error("Product overflow: {0}")]
    Overflow(String),
}

/// Result type for factorization operations
pub type Result<T> = std::result::Result<T, FactorError>;

/// Reject zero operands.
pub(crate) fn ensure_positive(n: u64) -> Result<u64> {
    if n == 0 {
        return Err(FactorError::InvalidInput(
            "operand must be a positive integer, got 0".to_string(),
        ));
    }
    Ok(n)
}

/// Parse a positive decimal operand from user-supplied text.
///
/// Surrounding whitespace is ignored. Zero, negative values and anything
/// that does not fit in a `u64` are rejected.
pub fn parse_operand(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    if trimmed.starts_with('-') {
        return Err(FactorError::InvalidInput(format!(
            "operand must be a positive integer, got {trimmed}"
        )));
    }
    let value = trimmed.parse::<u64>().map_err(|e| {
        FactorError::InvalidInput(format!("cannot parse {trimmed:?} as an integer: {e}"))
    })?;
    ensure_positive(value)
}
