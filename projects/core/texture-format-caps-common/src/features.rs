//! Named hardware features and the extensions that make them up.

use crate::extensions::*;
use derive_enum_all_values::AllValues;

/// A named hardware capability, usually a block compression family.
///
/// A feature is available when *all* of its member extensions are. See
/// [`DeviceFeature::extensions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum DeviceFeature {
    /// BC1 to BC7.
    TextureCompressionBc,
    /// BC1 to BC5, for contexts exposing RGTC but not BPTC.
    TextureCompressionBc5Webgl,
    /// ETC2 and EAC.
    TextureCompressionEtc2,
    /// ASTC.
    TextureCompressionAstc,
    /// ETC1.
    TextureCompressionEtc1Webgl,
    /// PVRTC.
    TextureCompressionPvrtcWebgl,
    /// ATC.
    TextureCompressionAtcWebgl,
}

impl DeviceFeature {
    /// Returns the feature name, e.g. `"texture-compression-bc"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextureCompressionBc => "texture-compression-bc",
            Self::TextureCompressionBc5Webgl => "texture-compression-bc5-webgl",
            Self::TextureCompressionEtc2 => "texture-compression-etc2",
            Self::TextureCompressionAstc => "texture-compression-astc",
            Self::TextureCompressionEtc1Webgl => "texture-compression-etc1-webgl",
            Self::TextureCompressionPvrtcWebgl => "texture-compression-pvrtc-webgl",
            Self::TextureCompressionAtcWebgl => "texture-compression-atc-webgl",
        }
    }

    /// Parses a feature name.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|feature| feature.as_str() == id)
    }

    /// The extensions that must all be present for this feature.
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::TextureCompressionBc => &[
                WEBGL_COMPRESSED_TEXTURE_S3TC,
                WEBGL_COMPRESSED_TEXTURE_S3TC_SRGB,
                EXT_TEXTURE_COMPRESSION_RGTC,
                EXT_TEXTURE_COMPRESSION_BPTC,
            ],
            Self::TextureCompressionBc5Webgl => &[
                WEBGL_COMPRESSED_TEXTURE_S3TC,
                WEBGL_COMPRESSED_TEXTURE_S3TC_SRGB,
                EXT_TEXTURE_COMPRESSION_RGTC,
            ],
            Self::TextureCompressionEtc2 => &[WEBGL_COMPRESSED_TEXTURE_ETC],
            Self::TextureCompressionAstc => &[WEBGL_COMPRESSED_TEXTURE_ASTC],
            Self::TextureCompressionEtc1Webgl => &[WEBGL_COMPRESSED_TEXTURE_ETC1],
            Self::TextureCompressionPvrtcWebgl => &[WEBGL_COMPRESSED_TEXTURE_PVRTC],
            Self::TextureCompressionAtcWebgl => &[WEBGL_COMPRESSED_TEXTURE_ATC],
        }
    }

    /// Returns the first feature whose member list contains `extension`.
    pub fn for_extension(extension: &str) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|feature| feature.extensions().iter().any(|member| *member == extension))
    }
}

impl core::fmt::Display for DeviceFeature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
