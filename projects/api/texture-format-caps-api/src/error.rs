//! Error types for format translation.

use alloc::string::String;
use thiserror::Error;

/// Result type for format translation.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors returned when a format cannot be translated to a native token.
///
/// Capability queries never produce this; they answer `false` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The identifier is not in the catalog, or has no native GL equivalent.
    #[error("Unsupported texture format: {0}")]
    UnsupportedFormat(String),
}
