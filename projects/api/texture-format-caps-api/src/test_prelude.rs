//! Common test imports and utilities for the capability API tests.
#![allow(unused_imports)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

pub use rstest::rstest;

use crate::context::CapabilityContext;
use core::cell::RefCell;

/// A [`CapabilityContext`] with a fixed extension list that records every
/// probe it receives.
#[derive(Debug)]
pub struct MockContext {
    modern: bool,
    extensions: &'static [&'static str],
    probes: RefCell<Vec<String>>,
}

impl MockContext {
    /// A legacy context exposing `extensions`.
    pub fn legacy(extensions: &'static [&'static str]) -> Self {
        Self {
            modern: false,
            extensions,
            probes: RefCell::new(Vec::new()),
        }
    }

    /// A modern context exposing `extensions`.
    pub fn modern(extensions: &'static [&'static str]) -> Self {
        Self {
            modern: true,
            ..Self::legacy(extensions)
        }
    }

    /// How often `extension` was probed.
    pub fn probe_count(&self, extension: &str) -> usize {
        self.probes
            .borrow()
            .iter()
            .filter(|probed| probed.as_str() == extension)
            .count()
    }

    /// Total number of probes received.
    pub fn total_probes(&self) -> usize {
        self.probes.borrow().len()
    }
}

impl CapabilityContext for MockContext {
    fn is_modern_generation(&self) -> bool {
        self.modern
    }

    fn probe_extension(&self, extension: &str) -> bool {
        self.probes.borrow_mut().push(String::from(extension));
        self.extensions.iter().any(|present| *present == extension)
    }
}
