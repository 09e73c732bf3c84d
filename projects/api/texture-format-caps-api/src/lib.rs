#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod context;
pub mod error;
pub mod probe;
pub mod query;
pub mod resolver;

#[cfg(test)]
pub mod test_prelude;

pub use context::{CapabilityContext, ExtensionSet};
pub use error::{FormatError, FormatResult};
pub use probe::FeatureProbe;
pub use query::FormatQuery;
