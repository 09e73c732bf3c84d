#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod api;
pub mod error;
pub mod glb;
pub mod options;
pub mod unpack;

#[cfg(test)]
pub mod test_prelude;

pub use api::{parse_glb, GlbAsset};
pub use error::{GlbError, GlbResult, UnpackError, UnpackResult};
pub use glb::{decode_glb, likely_glb, BinaryChunk, GlbContainer};
pub use options::{GlbOptions, GlbOptionsBuilder};
pub use unpack::{
    Component, ComponentType, ElementArray, ElementType, ImageView, TypedView, UnpackedNode,
};
