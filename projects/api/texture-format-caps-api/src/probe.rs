//! Memoized extension and feature probing.

use crate::context::CapabilityContext;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use log::{debug, trace};
use texture_format_caps_common::DeviceFeature;

/// Wraps a [`CapabilityContext`] and remembers every extension probe result.
///
/// Each probe owns its own cache; a new context means a new cache. The cache
/// lives in a [`RefCell`], which makes the probe `!Sync`: it is meant to stay
/// on the thread that owns the graphics context.
#[derive(Debug)]
pub struct FeatureProbe<C> {
    context: C,
    cache: RefCell<BTreeMap<String, bool>>,
}

impl<C: CapabilityContext> FeatureProbe<C> {
    /// Creates a probe with an empty cache.
    pub fn new(context: C) -> Self {
        Self {
            context,
            cache: RefCell::new(BTreeMap::new()),
        }
    }

    /// The wrapped context.
    #[inline]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Unwraps the probe, discarding the cache.
    pub fn into_inner(self) -> C {
        self.context
    }

    /// Returns `true` for modern (WebGL 2 class) contexts.
    #[inline]
    pub fn is_modern_generation(&self) -> bool {
        self.context.is_modern_generation()
    }

    /// Returns `true` if the extension is available.
    ///
    /// The context is asked at most once per extension name; later calls
    /// are answered from the cache.
    pub fn probe_extension(&self, extension: &str) -> bool {
        let cached = self.cache.borrow().get(extension).copied();
        if let Some(available) = cached {
            return available;
        }

        let available = self.context.probe_extension(extension);
        debug!("Probed extension {extension}: available = {available}");
        self.cache.borrow_mut().insert(String::from(extension), available);
        available
    }

    /// Returns the cached result for an extension without probing.
    pub fn cached(&self, extension: &str) -> Option<bool> {
        self.cache.borrow().get(extension).copied()
    }

    /// Returns `true` if every member extension of `feature` is available.
    ///
    /// Stops at the first missing extension, so later members stay unprobed.
    pub fn has_feature(&self, feature: DeviceFeature) -> bool {
        let supported = feature
            .extensions()
            .iter()
            .all(|extension| self.probe_extension(extension));
        trace!("Feature {feature}: supported = {supported}");
        supported
    }

    /// Every [`DeviceFeature`] the context supports, in declaration order.
    pub fn texture_features(&self) -> Vec<DeviceFeature> {
        DeviceFeature::all_values()
            .iter()
            .copied()
            .filter(|&feature| self.has_feature(feature))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use texture_format_caps_common::extensions::*;

    #[test]
    fn probes_are_memoized() {
        let probe = FeatureProbe::new(MockContext::legacy(&[EXT_SRGB]));
        assert_eq!(probe.cached(EXT_SRGB), None);

        for _ in 0..3 {
            assert!(probe.probe_extension(EXT_SRGB));
            assert!(!probe.probe_extension(EXT_TEXTURE_NORM16));
        }

        assert_eq!(probe.context().probe_count(EXT_SRGB), 1);
        assert_eq!(probe.context().probe_count(EXT_TEXTURE_NORM16), 1);
        assert_eq!(probe.cached(EXT_SRGB), Some(true));
        assert_eq!(probe.cached(EXT_TEXTURE_NORM16), Some(false));
    }

    #[test]
    fn separate_probes_do_not_share_a_cache() {
        let context = MockContext::legacy(&[EXT_SRGB]);
        let first = FeatureProbe::new(&context);
        let second = FeatureProbe::new(&context);
        assert!(first.probe_extension(EXT_SRGB));
        assert!(second.probe_extension(EXT_SRGB));
        assert_eq!(context.probe_count(EXT_SRGB), 2);
    }

    #[rstest]
    #[case(&[WEBGL_COMPRESSED_TEXTURE_S3TC, WEBGL_COMPRESSED_TEXTURE_S3TC_SRGB, EXT_TEXTURE_COMPRESSION_RGTC, EXT_TEXTURE_COMPRESSION_BPTC], true)]
    #[case(&[WEBGL_COMPRESSED_TEXTURE_S3TC, WEBGL_COMPRESSED_TEXTURE_S3TC_SRGB, EXT_TEXTURE_COMPRESSION_RGTC], false)]
    #[case(&[WEBGL_COMPRESSED_TEXTURE_S3TC], false)]
    #[case(&[], false)]
    fn feature_requires_every_member(#[case] extensions: &'static [&'static str], #[case] expected: bool) {
        let probe = FeatureProbe::new(MockContext::modern(extensions));
        assert_eq!(probe.has_feature(DeviceFeature::TextureCompressionBc), expected);
    }

    #[test]
    fn feature_check_stops_at_first_missing_member() {
        let probe = FeatureProbe::new(MockContext::modern(&[]));
        assert!(!probe.has_feature(DeviceFeature::TextureCompressionBc));
        assert_eq!(probe.context().total_probes(), 1);
        assert_eq!(probe.context().probe_count(WEBGL_COMPRESSED_TEXTURE_S3TC), 1);
        assert_eq!(probe.cached(EXT_TEXTURE_COMPRESSION_BPTC), None);
    }

    #[test]
    fn texture_features_lists_supported_groups() {
        let probe = FeatureProbe::new(MockContext::modern(&[
            WEBGL_COMPRESSED_TEXTURE_S3TC,
            WEBGL_COMPRESSED_TEXTURE_S3TC_SRGB,
            EXT_TEXTURE_COMPRESSION_RGTC,
            WEBGL_COMPRESSED_TEXTURE_ASTC,
        ]));
        assert_eq!(
            probe.texture_features(),
            vec![
                DeviceFeature::TextureCompressionBc5Webgl,
                DeviceFeature::TextureCompressionAstc,
            ]
        );
    }

    #[test]
    fn into_inner_returns_context() {
        let probe = FeatureProbe::new(MockContext::legacy(&[EXT_SRGB]));
        probe.probe_extension(EXT_SRGB);
        let context = probe.into_inner();
        assert_eq!(context.total_probes(), 1);
    }
}
