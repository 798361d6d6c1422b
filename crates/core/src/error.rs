//! Error types for the transcoder
//!
//! The transformation itself is total: given well-typed input it cannot
//! fail, so no engine operation returns a `Result`. The only fallible
//! surface is strict selector-operator parsing.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use thiserror::Error;

/// Result type alias for entitext operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the entitext transcoder
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Selector operator token was neither "+" nor "-"
    #[error("invalid selector operator: {0:?} (expected \"+\" or \"-\")")]
    InvalidOperator(String),
}
