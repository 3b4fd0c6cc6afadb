//! Error types for token lookups and theme parsing.

use thiserror::Error;

/// Result alias for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;

/// Errors raised when a caller hands the token layer something it cannot resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Theme selector was not one of the supported values.
    #[error("invalid theme `{value}`; expected `light` or `dark`")]
    InvalidTheme {
        /// Selector payload provided by the caller.
        value: String,
    },
    /// Semantic token name does not exist in the table.
    #[error("unknown token `{path}`")]
    UnknownToken {
        /// Dotted semantic path that failed to resolve.
        path: String,
    },
}
