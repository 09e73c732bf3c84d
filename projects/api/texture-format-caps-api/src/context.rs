//! The host side of capability probing.

use alloc::boxed::Box;

/// A live graphics context that can be asked about its capabilities.
///
/// Implementations are expected to forward to the driver (e.g. `getExtension`
/// in WebGL). Results are cached by [`FeatureProbe`], so implementations do not
/// need to cache themselves.
///
/// [`FeatureProbe`]: crate::FeatureProbe
pub trait CapabilityContext {
    /// Returns `true` for modern (WebGL 2 class) contexts.
    fn is_modern_generation(&self) -> bool;

    /// Returns `true` if the named extension is available.
    ///
    /// May have side effects on the host, such as enabling the extension.
    fn probe_extension(&self, extension: &str) -> bool;
}

impl<T: CapabilityContext + ?Sized> CapabilityContext for &T {
    #[inline]
    fn is_modern_generation(&self) -> bool {
        (**self).is_modern_generation()
    }

    #[inline]
    fn probe_extension(&self, extension: &str) -> bool {
        (**self).probe_extension(extension)
    }
}

impl<T: CapabilityContext + ?Sized> CapabilityContext for Box<T> {
    #[inline]
    fn is_modern_generation(&self) -> bool {
        (**self).is_modern_generation()
    }

    #[inline]
    fn probe_extension(&self, extension: &str) -> bool {
        (**self).probe_extension(extension)
    }
}

/// A context described by a fixed list of extension names.
///
/// Useful when the host enumerates its extensions once up front, and for
/// offline checks against a known device profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionSet<'a> {
    modern: bool,
    extensions: &'a [&'a str],
}

impl<'a> ExtensionSet<'a> {
    /// A legacy (WebGL 1 class) context exposing `extensions`.
    pub const fn legacy(extensions: &'a [&'a str]) -> Self {
        Self {
            modern: false,
            extensions,
        }
    }

    /// A modern (WebGL 2 class) context exposing `extensions`.
    pub const fn modern(extensions: &'a [&'a str]) -> Self {
        Self {
            modern: true,
            extensions,
        }
    }

    /// The extension names this context reports as present.
    pub const fn extensions(&self) -> &'a [&'a str] {
        self.extensions
    }
}

impl CapabilityContext for ExtensionSet<'_> {
    fn is_modern_generation(&self) -> bool {
        self.modern
    }

    fn probe_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|present| *present == extension)
    }
}
