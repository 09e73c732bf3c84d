//! Unsized and legacy GL format tokens.
//!
//! Callers occasionally pass a raw GL token instead of a [`crate::TextureFormat`].
//! This table covers the tokens that have no catalog entry of their own, plus
//! the float formats whose filtering support depends on their data type.

use crate::descriptor::{GenerationSupport, Support};
use crate::gl::{self, GLenum};

/// Description of a raw GL internal format token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyFormatInfo {
    /// The internal format token.
    pub token: GLenum,
    /// The matching pixel data format.
    pub data_format: GLenum,
    /// Accepted pixel data types, in order of preference.
    pub types: &'static [GLenum],
    /// Generation specific support flags.
    pub support: GenerationSupport,
}

const UNGATED: GenerationSupport = GenerationSupport::UNGATED;
const MODERN_ONLY: GenerationSupport = GenerationSupport {
    legacy: None,
    modern: Some(Support::Always),
};

/// Every raw token the resolver understands.
pub static LEGACY_FORMATS: &[LegacyFormatInfo] = &[
    LegacyFormatInfo {
        token: gl::RGB,
        data_format: gl::RGB,
        types: &[gl::UNSIGNED_BYTE, gl::UNSIGNED_SHORT_5_6_5],
        support: UNGATED,
    },
    LegacyFormatInfo {
        token: gl::RGBA,
        data_format: gl::RGBA,
        types: &[
            gl::UNSIGNED_BYTE,
            gl::UNSIGNED_SHORT_4_4_4_4,
            gl::UNSIGNED_SHORT_5_5_5_1,
        ],
        support: UNGATED,
    },
    LegacyFormatInfo {
        token: gl::ALPHA,
        data_format: gl::ALPHA,
        types: &[gl::UNSIGNED_BYTE],
        support: UNGATED,
    },
    LegacyFormatInfo {
        token: gl::LUMINANCE,
        data_format: gl::LUMINANCE,
        types: &[gl::UNSIGNED_BYTE],
        support: UNGATED,
    },
    LegacyFormatInfo {
        token: gl::LUMINANCE_ALPHA,
        data_format: gl::LUMINANCE_ALPHA,
        types: &[gl::UNSIGNED_BYTE],
        support: UNGATED,
    },
    LegacyFormatInfo {
        token: gl::R32F,
        data_format: gl::RED,
        types: &[gl::FLOAT],
        support: MODERN_ONLY,
    },
    LegacyFormatInfo {
        token: gl::RG32F,
        data_format: gl::RG,
        types: &[gl::FLOAT],
        support: MODERN_ONLY,
    },
    LegacyFormatInfo {
        token: gl::RGB32F,
        data_format: gl::RGB,
        types: &[gl::FLOAT],
        support: MODERN_ONLY,
    },
    LegacyFormatInfo {
        token: gl::RGBA32F,
        data_format: gl::RGBA,
        types: &[gl::FLOAT],
        support: MODERN_ONLY,
    },
];

/// Looks up a raw token.
pub fn lookup_token(token: GLenum) -> Option<&'static LegacyFormatInfo> {
    LEGACY_FORMATS.iter().find(|info| info.token == token)
}

/// Number of components described by a pixel data format, if known.
pub const fn data_format_channels(data_format: GLenum) -> Option<u8> {
    match data_format {
        gl::RED | gl::RED_INTEGER | gl::ALPHA | gl::LUMINANCE | gl::DEPTH_COMPONENT => Some(1),
        gl::RG | gl::RG_INTEGER | gl::LUMINANCE_ALPHA | gl::DEPTH_STENCIL => Some(2),
        gl::RGB | gl::RGB_INTEGER => Some(3),
        gl::RGBA | gl::RGBA_INTEGER => Some(4),
        _ => None,
    }
}

/// Size in bytes of one component of a pixel data type.
///
/// Packed types report the size of the whole packed word.
pub const fn type_size(data_type: GLenum) -> Option<u8> {
    match data_type {
        gl::BYTE | gl::UNSIGNED_BYTE => Some(1),
        gl::SHORT
        | gl::UNSIGNED_SHORT
        | gl::HALF_FLOAT
        | gl::UNSIGNED_SHORT_4_4_4_4
        | gl::UNSIGNED_SHORT_5_5_5_1
        | gl::UNSIGNED_SHORT_5_6_5 => Some(2),
        gl::INT | gl::UNSIGNED_INT | gl::FLOAT => Some(4),
        _ => None,
    }
}
