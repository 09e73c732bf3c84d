#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod catalog;
pub mod descriptor;
pub mod extensions;
pub mod features;
pub mod gl;
pub mod legacy_formats;
pub mod texture_format;

pub use descriptor::{FormatDescriptor, GenerationSupport, Support};
pub use features::DeviceFeature;
pub use gl::GLenum;
pub use legacy_formats::LegacyFormatInfo;
pub use texture_format::{TextureFormat, UnknownTextureFormat};
