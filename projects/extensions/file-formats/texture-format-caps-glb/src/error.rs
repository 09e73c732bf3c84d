//! Error types for GLB decoding and buffer unpacking.

use alloc::string::String;
use thiserror::Error;

/// Result type for GLB operations
pub type GlbResult<T> = Result<T, GlbError>;

/// Result type for buffer unpacking
pub type UnpackResult<T> = Result<T, UnpackError>;

/// Errors raised while decoding the GLB container.
#[derive(Debug, Error)]
pub enum GlbError {
    /// The input does not start with the `glTF` magic.
    #[error("Not a GLB container: magic {0:#010X}")]
    BadMagic(u32),

    /// The container version is not 2.
    #[error("Unsupported GLB version {0}")]
    UnsupportedVersion(u32),

    /// The input ends before the declared container or chunk does.
    #[error("Input buffer too short: required at least {required} bytes, got {actual} bytes")]
    TruncatedBuffer { required: usize, actual: usize },

    /// A chunk header is invalid.
    #[error("Malformed chunk at offset {offset}: {reason}")]
    MalformedChunk { offset: usize, reason: &'static str },

    /// The metadata chunk is not valid UTF-8 JSON.
    #[error("Invalid JSON metadata: {0}")]
    InvalidMetadata(serde_json::Error),

    /// Unpacking binary views from the metadata failed.
    #[error("Unpack error: {0}")]
    Unpack(#[from] UnpackError),
}

/// Errors raised while materializing buffer views and accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnpackError {
    /// A view or accessor reaches past the end of the bytes backing it.
    #[error("View {index} out of bounds: {length} bytes at offset {offset}, but only {available} bytes available")]
    OutOfBoundsView {
        index: usize,
        offset: usize,
        length: usize,
        available: usize,
    },

    /// An accessor refers to a buffer view that does not exist.
    #[error("Missing buffer view {0}")]
    MissingBufferView(usize),

    /// A descriptor field is missing or has the wrong type.
    #[error("Invalid descriptor at {path}: {reason}")]
    InvalidDescriptor { path: String, reason: &'static str },
}
