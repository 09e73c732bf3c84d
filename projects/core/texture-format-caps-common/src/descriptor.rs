//! Per-format capability descriptors.

use crate::features::DeviceFeature;
use crate::gl::GLenum;
use crate::TextureFormat;

/// Whether a format is available on one API generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    /// Never available on this generation.
    Never,
    /// Always available on this generation.
    Always,
    /// Available when the named extension is present.
    Extension(&'static str),
}

/// Support flags for the legacy and the modern API generation.
///
/// A missing flag means "no information" rather than "unsupported"; how that is
/// interpreted is described on [`GenerationSupport::for_generation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSupport {
    /// Flag for legacy (WebGL 1 class) contexts.
    pub legacy: Option<Support>,
    /// Flag for modern (WebGL 2 class) contexts.
    pub modern: Option<Support>,
}

impl GenerationSupport {
    /// No flags on either generation; the format is not gated at all.
    pub const UNGATED: Self = Self {
        legacy: None,
        modern: None,
    };

    /// Returns `true` when neither generation carries a flag.
    #[inline]
    pub const fn is_ungated(&self) -> bool {
        self.legacy.is_none() && self.modern.is_none()
    }

    /// Selects the flag that applies to a context of the given generation.
    ///
    /// Modern contexts use the modern flag and fall back to the legacy one.
    /// Legacy contexts only ever look at the legacy flag.
    #[inline]
    pub const fn for_generation(&self, modern_context: bool) -> Option<Support> {
        if modern_context {
            match self.modern {
                Some(support) => Some(support),
                None => self.legacy,
            }
        } else {
            self.legacy
        }
    }
}

/// Capability descriptor of a single [`TextureFormat`].
///
/// Block compressed formats carry no per-texel size or channel data, only a
/// native token and the extension they require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// The format this descriptor belongs to.
    pub format: TextureFormat,
    /// GL internal format token, if the format has a 1:1 native equivalent.
    pub native_token: Option<GLenum>,
    /// Bytes per texel, used for memory usage estimates.
    pub bytes_per_texel: Option<u8>,
    /// Number of channels.
    pub channels: Option<u8>,
    /// Channels are packed into a single word (e.g. `rgb10a2unorm`).
    pub packed: bool,
    /// Extension without which the format cannot be used at all.
    pub required_extension: Option<&'static str>,
    /// Generation specific support flags.
    pub support: GenerationSupport,
}

impl FormatDescriptor {
    /// Uncompressed format with a native token.
    pub(crate) const fn texel(
        format: TextureFormat,
        native_token: GLenum,
        bytes_per_texel: u8,
        channels: u8,
    ) -> Self {
        Self {
            format,
            native_token: Some(native_token),
            bytes_per_texel: Some(bytes_per_texel),
            channels: Some(channels),
            packed: false,
            required_extension: None,
            support: GenerationSupport::UNGATED,
        }
    }

    /// Uncompressed format without any GL equivalent; unsupported everywhere.
    pub(crate) const fn foreign(format: TextureFormat, bytes_per_texel: u8, channels: u8) -> Self {
        Self {
            format,
            native_token: None,
            bytes_per_texel: Some(bytes_per_texel),
            channels: Some(channels),
            packed: false,
            required_extension: None,
            support: GenerationSupport {
                legacy: Some(Support::Never),
                modern: Some(Support::Never),
            },
        }
    }

    /// Block compressed format gated behind `extension`.
    pub(crate) const fn compressed(
        format: TextureFormat,
        native_token: GLenum,
        extension: &'static str,
    ) -> Self {
        Self {
            format,
            native_token: Some(native_token),
            bytes_per_texel: None,
            channels: None,
            packed: false,
            required_extension: Some(extension),
            support: GenerationSupport::UNGATED,
        }
    }

    pub(crate) const fn packed(mut self) -> Self {
        self.packed = true;
        self
    }

    pub(crate) const fn legacy(mut self, support: Support) -> Self {
        self.support.legacy = Some(support);
        self
    }

    pub(crate) const fn modern(mut self, support: Support) -> Self {
        self.support.modern = Some(support);
        self
    }

    /// Identifier string of the described format.
    #[inline]
    pub const fn id(&self) -> &'static str {
        self.format.as_str()
    }

    /// Returns `true` for block compressed formats.
    #[inline]
    pub const fn is_compressed(&self) -> bool {
        self.required_extension.is_some() && self.bytes_per_texel.is_none()
    }

    /// The hardware feature that must be present to use this format, if any.
    ///
    /// This is the first [`DeviceFeature`] whose member extensions include
    /// [`FormatDescriptor::required_extension`].
    pub fn required_feature(&self) -> Option<DeviceFeature> {
        self.required_extension.and_then(DeviceFeature::for_extension)
    }
}
