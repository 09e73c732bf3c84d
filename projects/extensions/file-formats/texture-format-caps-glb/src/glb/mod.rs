/// Shared constants between modules.
pub(crate) mod constants;

/// Determine if a buffer is a GLB container.
pub mod likely_glb;

/// Split a GLB container into its metadata and binary chunks.
pub mod decode;

pub use decode::*;
pub use likely_glb::*;
