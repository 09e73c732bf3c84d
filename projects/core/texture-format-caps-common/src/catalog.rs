//! The static format catalog.
//!
//! [`FORMAT_TABLE`] holds one [`FormatDescriptor`] per [`TextureFormat`], in
//! declaration order, so a lookup is a single index operation.

use crate::descriptor::{FormatDescriptor, Support};
use crate::extensions::*;
use crate::gl;
use crate::TextureFormat::{self, *};

const ALWAYS: Support = Support::Always;

/// Descriptor for every [`TextureFormat`], indexed by discriminant.
pub static FORMAT_TABLE: [FormatDescriptor; TextureFormat::COUNT] = [
    // 8-bit formats
    FormatDescriptor::texel(R8Unorm, gl::R8, 1, 1).modern(ALWAYS),
    FormatDescriptor::texel(R8Snorm, gl::R8_SNORM, 1, 1).modern(ALWAYS),
    FormatDescriptor::texel(R8Uint, gl::R8UI, 1, 1).modern(ALWAYS),
    FormatDescriptor::texel(R8Sint, gl::R8I, 1, 1).modern(ALWAYS),
    // 16-bit formats
    FormatDescriptor::texel(R16Uint, gl::R16UI, 2, 1).modern(ALWAYS),
    FormatDescriptor::texel(R16Sint, gl::R16I, 2, 1).modern(ALWAYS),
    FormatDescriptor::texel(R16Float, gl::R16F, 2, 1)
        .modern(Support::Extension(EXT_COLOR_BUFFER_FLOAT)),
    FormatDescriptor::texel(R16UnormWebgl, gl::R16_EXT, 2, 1)
        .modern(Support::Extension(EXT_TEXTURE_NORM16)),
    FormatDescriptor::texel(R16SnormWebgl, gl::R16_SNORM_EXT, 2, 1)
        .modern(Support::Extension(EXT_TEXTURE_NORM16)),
    FormatDescriptor::texel(Rg8Unorm, gl::RG8, 2, 2).modern(ALWAYS),
    FormatDescriptor::texel(Rg8Snorm, gl::RG8_SNORM, 2, 2).modern(ALWAYS),
    FormatDescriptor::texel(Rg8Uint, gl::RG8UI, 2, 2).modern(ALWAYS),
    FormatDescriptor::texel(Rg8Sint, gl::RG8I, 2, 2).modern(ALWAYS),
    // Packed 16-bit formats, core on both generations
    FormatDescriptor::texel(Rgba4UnormWebgl, gl::RGBA4, 2, 4).packed(),
    FormatDescriptor::texel(Rgb565UnormWebgl, gl::RGB565, 2, 3).packed(),
    FormatDescriptor::texel(Rgb5a1UnormWebgl, gl::RGB5_A1, 2, 4).packed(),
    // 24-bit formats
    FormatDescriptor::texel(Rgb8UnormWebgl, gl::RGB8, 3, 3).modern(ALWAYS),
    // 32-bit formats
    FormatDescriptor::texel(R32Uint, gl::R32UI, 4, 1).modern(ALWAYS),
    FormatDescriptor::texel(R32Sint, gl::R32I, 4, 1).modern(ALWAYS),
    FormatDescriptor::texel(R32Float, gl::R32F, 4, 1)
        .modern(Support::Extension(EXT_COLOR_BUFFER_FLOAT)),
    FormatDescriptor::texel(Rg16Uint, gl::RG16UI, 4, 2).modern(ALWAYS),
    FormatDescriptor::texel(Rg16Sint, gl::RG16I, 4, 2).modern(ALWAYS),
    FormatDescriptor::texel(Rg16Float, gl::RG16F, 4, 2)
        .modern(Support::Extension(EXT_COLOR_BUFFER_FLOAT)),
    FormatDescriptor::texel(Rg16UnormWebgl, gl::RG16_EXT, 4, 2)
        .modern(Support::Extension(EXT_TEXTURE_NORM16)),
    FormatDescriptor::texel(Rg16SnormWebgl, gl::RG16_SNORM_EXT, 4, 2)
        .modern(Support::Extension(EXT_TEXTURE_NORM16)),
    FormatDescriptor::texel(Rgba8Unorm, gl::RGBA8, 4, 4).modern(ALWAYS),
    FormatDescriptor::texel(Rgba8UnormSrgb, gl::SRGB8_ALPHA8, 4, 4)
        .modern(ALWAYS)
        .legacy(Support::Extension(EXT_SRGB)),
    FormatDescriptor::texel(Rgba8Snorm, gl::RGBA8_SNORM, 4, 4).modern(ALWAYS),
    FormatDescriptor::texel(Rgba8Uint, gl::RGBA8UI, 4, 4).modern(ALWAYS),
    FormatDescriptor::texel(Rgba8Sint, gl::RGBA8I, 4, 4).modern(ALWAYS),
    // No GL equivalent
    FormatDescriptor::foreign(Bgra8Unorm, 4, 4),
    FormatDescriptor::foreign(Bgra8UnormSrgb, 4, 4),
    // Unsized placeholders, usable everywhere
    FormatDescriptor::texel(UnsizedRgb, gl::RGB, 3, 3)
        .legacy(ALWAYS)
        .modern(ALWAYS),
    FormatDescriptor::texel(UnsizedRgba, gl::RGBA, 4, 4)
        .legacy(ALWAYS)
        .modern(ALWAYS),
    // Packed 32-bit formats
    FormatDescriptor::texel(Rgb9e5Ufloat, gl::RGB9_E5, 4, 3)
        .packed()
        .modern(ALWAYS)
        .legacy(Support::Extension(WEBGL_COLOR_BUFFER_HALF_FLOAT)),
    FormatDescriptor::texel(Rg11b10Ufloat, gl::R11F_G11F_B10F, 4, 3)
        .packed()
        .modern(Support::Extension(EXT_COLOR_BUFFER_FLOAT)),
    FormatDescriptor::texel(Rgb10a2Unorm, gl::RGB10_A2, 4, 4)
        .packed()
        .modern(ALWAYS),
    FormatDescriptor::texel(Rgb10a2UintWebgl, gl::RGB10_A2UI, 4, 4)
        .packed()
        .modern(ALWAYS),
    // 48-bit formats
    FormatDescriptor::texel(Rgb16UnormWebgl, gl::RGB16_EXT, 6, 3)
        .modern(Support::Extension(EXT_TEXTURE_NORM16)),
    FormatDescriptor::texel(Rgb16SnormWebgl, gl::RGB16_SNORM_EXT, 6, 3)
        .modern(Support::Extension(EXT_TEXTURE_NORM16)),
    // 64-bit formats
    FormatDescriptor::texel(Rg32Uint, gl::RG32UI, 8, 2).modern(ALWAYS),
    FormatDescriptor::texel(Rg32Sint, gl::RG32I, 8, 2).modern(ALWAYS),
    FormatDescriptor::texel(Rg32Float, gl::RG32F, 8, 2)
        .modern(Support::Extension(EXT_COLOR_BUFFER_FLOAT)),
    FormatDescriptor::texel(Rgba16Uint, gl::RGBA16UI, 8, 4).modern(ALWAYS),
    FormatDescriptor::texel(Rgba16Sint, gl::RGBA16I, 8, 4).modern(ALWAYS),
    FormatDescriptor::texel(Rgba16Float, gl::RGBA16F, 8, 4)
        .modern(Support::Extension(EXT_COLOR_BUFFER_FLOAT)),
    FormatDescriptor::texel(Rgba16UnormWebgl, gl::RGBA16_EXT, 8, 4)
        .modern(Support::Extension(EXT_TEXTURE_NORM16)),
    FormatDescriptor::texel(Rgba16SnormWebgl, gl::RGBA16_SNORM_EXT, 8, 4)
        .modern(Support::Extension(EXT_TEXTURE_NORM16)),
    // 96-bit formats
    FormatDescriptor::texel(Rgb32FloatWebgl, gl::RGB32F, 12, 3).modern(ALWAYS),
    // 128-bit formats
    FormatDescriptor::texel(Rgba32Uint, gl::RGBA32UI, 16, 4).modern(ALWAYS),
    FormatDescriptor::texel(Rgba32Sint, gl::RGBA32I, 16, 4).modern(ALWAYS),
    FormatDescriptor::texel(Rgba32Float, gl::RGBA32F, 16, 4)
        .modern(Support::Extension(EXT_COLOR_BUFFER_FLOAT)),
    // Depth and stencil formats
    FormatDescriptor::texel(Stencil8, gl::STENCIL_INDEX8, 1, 1),
    FormatDescriptor::texel(Depth16Unorm, gl::DEPTH_COMPONENT16, 2, 1),
    FormatDescriptor::texel(Depth24Plus, gl::DEPTH_COMPONENT24, 3, 1).modern(ALWAYS),
    FormatDescriptor::texel(Depth24PlusStencil8, gl::DEPTH24_STENCIL8, 4, 2)
        .packed()
        .modern(ALWAYS),
    FormatDescriptor::texel(Depth32Float, gl::DEPTH_COMPONENT32F, 4, 1).modern(ALWAYS),
    FormatDescriptor::texel(Depth24UnormStencil8, gl::DEPTH_STENCIL, 4, 2).packed(),
    FormatDescriptor::texel(Depth32FloatStencil8, gl::DEPTH32F_STENCIL8, 5, 2)
        .packed()
        .modern(ALWAYS),
    // BC compressed formats
    FormatDescriptor::compressed(
        Bc1RgbUnormWebgl,
        gl::COMPRESSED_RGB_S3TC_DXT1_EXT,
        WEBGL_COMPRESSED_TEXTURE_S3TC,
    ),
    FormatDescriptor::compressed(
        Bc1RgbUnormSrgbWebgl,
        gl::COMPRESSED_SRGB_S3TC_DXT1_EXT,
        WEBGL_COMPRESSED_TEXTURE_S3TC_SRGB,
    ),
    FormatDescriptor::compressed(
        Bc1RgbaUnorm,
        gl::COMPRESSED_RGBA_S3TC_DXT1_EXT,
        WEBGL_COMPRESSED_TEXTURE_S3TC,
    ),
    FormatDescriptor::compressed(
        Bc1RgbaUnormSrgb,
        gl::COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT,
        WEBGL_COMPRESSED_TEXTURE_S3TC_SRGB,
    ),
    FormatDescriptor::compressed(
        Bc2RgbaUnorm,
        gl::COMPRESSED_RGBA_S3TC_DXT3_EXT,
        WEBGL_COMPRESSED_TEXTURE_S3TC,
    ),
    FormatDescriptor::compressed(
        Bc2RgbaUnormSrgb,
        gl::COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT,
        WEBGL_COMPRESSED_TEXTURE_S3TC_SRGB,
    ),
    FormatDescriptor::compressed(
        Bc3RgbaUnorm,
        gl::COMPRESSED_RGBA_S3TC_DXT5_EXT,
        WEBGL_COMPRESSED_TEXTURE_S3TC,
    ),
    FormatDescriptor::compressed(
        Bc3RgbaUnormSrgb,
        gl::COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT,
        WEBGL_COMPRESSED_TEXTURE_S3TC_SRGB,
    ),
    FormatDescriptor::compressed(
        Bc4RUnorm,
        gl::COMPRESSED_RED_RGTC1_EXT,
        EXT_TEXTURE_COMPRESSION_RGTC,
    ),
    FormatDescriptor::compressed(
        Bc4RSnorm,
        gl::COMPRESSED_SIGNED_RED_RGTC1_EXT,
        EXT_TEXTURE_COMPRESSION_RGTC,
    ),
    FormatDescriptor::compressed(
        Bc5RgUnorm,
        gl::COMPRESSED_RED_GREEN_RGTC2_EXT,
        EXT_TEXTURE_COMPRESSION_RGTC,
    ),
    FormatDescriptor::compressed(
        Bc5RgSnorm,
        gl::COMPRESSED_SIGNED_RED_GREEN_RGTC2_EXT,
        EXT_TEXTURE_COMPRESSION_RGTC,
    ),
    FormatDescriptor::compressed(
        Bc6hRgbUfloat,
        gl::COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT_EXT,
        EXT_TEXTURE_COMPRESSION_BPTC,
    ),
    FormatDescriptor::compressed(
        Bc6hRgbFloat,
        gl::COMPRESSED_RGB_BPTC_SIGNED_FLOAT_EXT,
        EXT_TEXTURE_COMPRESSION_BPTC,
    ),
    FormatDescriptor::compressed(
        Bc7RgbaUnorm,
        gl::COMPRESSED_RGBA_BPTC_UNORM_EXT,
        EXT_TEXTURE_COMPRESSION_BPTC,
    ),
    FormatDescriptor::compressed(
        Bc7RgbaUnormSrgb,
        gl::COMPRESSED_SRGB_ALPHA_BPTC_UNORM_EXT,
        EXT_TEXTURE_COMPRESSION_BPTC,
    ),
    // ETC2 / EAC compressed formats
    FormatDescriptor::compressed(
        Etc2Rgb8Unorm,
        gl::COMPRESSED_RGB8_ETC2,
        WEBGL_COMPRESSED_TEXTURE_ETC,
    ),
    FormatDescriptor::compressed(
        Etc2Rgb8UnormSrgb,
        gl::COMPRESSED_SRGB8_ETC2,
        WEBGL_COMPRESSED_TEXTURE_ETC,
    ),
    FormatDescriptor::compressed(
        Etc2Rgb8a1Unorm,
        gl::COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2,
        WEBGL_COMPRESSED_TEXTURE_ETC,
    ),
    FormatDescriptor::compressed(
        Etc2Rgb8a1UnormSrgb,
        gl::COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2,
        WEBGL_COMPRESSED_TEXTURE_ETC,
    ),
    FormatDescriptor::compressed(
        Etc2Rgba8Unorm,
        gl::COMPRESSED_RGBA8_ETC2_EAC,
        WEBGL_COMPRESSED_TEXTURE_ETC,
    ),
    FormatDescriptor::compressed(
        Etc2Rgba8UnormSrgb,
        gl::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC,
        WEBGL_COMPRESSED_TEXTURE_ETC,
    ),
    FormatDescriptor::compressed(EacR11Unorm, gl::COMPRESSED_R11_EAC, WEBGL_COMPRESSED_TEXTURE_ETC),
    FormatDescriptor::compressed(
        EacR11Snorm,
        gl::COMPRESSED_SIGNED_R11_EAC,
        WEBGL_COMPRESSED_TEXTURE_ETC,
    ),
    FormatDescriptor::compressed(
        EacRg11Unorm,
        gl::COMPRESSED_RG11_EAC,
        WEBGL_COMPRESSED_TEXTURE_ETC,
    ),
    FormatDescriptor::compressed(
        EacRg11Snorm,
        gl::COMPRESSED_SIGNED_RG11_EAC,
        WEBGL_COMPRESSED_TEXTURE_ETC,
    ),
    // ASTC compressed formats
    astc(Astc4x4Unorm, gl::COMPRESSED_RGBA_ASTC_4X4_KHR),
    astc(Astc4x4UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_4X4_KHR),
    astc(Astc5x4Unorm, gl::COMPRESSED_RGBA_ASTC_5X4_KHR),
    astc(Astc5x4UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_5X4_KHR),
    astc(Astc5x5Unorm, gl::COMPRESSED_RGBA_ASTC_5X5_KHR),
    astc(Astc5x5UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_5X5_KHR),
    astc(Astc6x5Unorm, gl::COMPRESSED_RGBA_ASTC_6X5_KHR),
    astc(Astc6x5UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_6X5_KHR),
    astc(Astc6x6Unorm, gl::COMPRESSED_RGBA_ASTC_6X6_KHR),
    astc(Astc6x6UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_6X6_KHR),
    astc(Astc8x5Unorm, gl::COMPRESSED_RGBA_ASTC_8X5_KHR),
    astc(Astc8x5UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_8X5_KHR),
    astc(Astc8x6Unorm, gl::COMPRESSED_RGBA_ASTC_8X6_KHR),
    astc(Astc8x6UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_8X6_KHR),
    astc(Astc8x8Unorm, gl::COMPRESSED_RGBA_ASTC_8X8_KHR),
    astc(Astc8x8UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_8X8_KHR),
    astc(Astc10x5Unorm, gl::COMPRESSED_RGBA_ASTC_10X5_KHR),
    astc(Astc10x5UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_10X5_KHR),
    astc(Astc10x6Unorm, gl::COMPRESSED_RGBA_ASTC_10X6_KHR),
    astc(Astc10x6UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_10X6_KHR),
    astc(Astc10x8Unorm, gl::COMPRESSED_RGBA_ASTC_10X8_KHR),
    astc(Astc10x8UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_10X8_KHR),
    astc(Astc10x10Unorm, gl::COMPRESSED_RGBA_ASTC_10X10_KHR),
    astc(Astc10x10UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_10X10_KHR),
    astc(Astc12x10Unorm, gl::COMPRESSED_RGBA_ASTC_12X10_KHR),
    astc(Astc12x10UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_12X10_KHR),
    astc(Astc12x12Unorm, gl::COMPRESSED_RGBA_ASTC_12X12_KHR),
    astc(Astc12x12UnormSrgb, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_12X12_KHR),
    // PVRTC compressed formats
    FormatDescriptor::compressed(
        PvrtcRgb4UnormWebgl,
        gl::COMPRESSED_RGB_PVRTC_4BPPV1_IMG,
        WEBGL_COMPRESSED_TEXTURE_PVRTC,
    ),
    FormatDescriptor::compressed(
        PvrtcRgba4UnormWebgl,
        gl::COMPRESSED_RGBA_PVRTC_4BPPV1_IMG,
        WEBGL_COMPRESSED_TEXTURE_PVRTC,
    ),
    FormatDescriptor::compressed(
        PvrtcRgb2UnormWebgl,
        gl::COMPRESSED_RGB_PVRTC_2BPPV1_IMG,
        WEBGL_COMPRESSED_TEXTURE_PVRTC,
    ),
    FormatDescriptor::compressed(
        PvrtcRgba2UnormWebgl,
        gl::COMPRESSED_RGBA_PVRTC_2BPPV1_IMG,
        WEBGL_COMPRESSED_TEXTURE_PVRTC,
    ),
    // ETC1 compressed formats
    FormatDescriptor::compressed(
        Etc1RgbUnormWebgl,
        gl::COMPRESSED_RGB_ETC1_WEBGL,
        WEBGL_COMPRESSED_TEXTURE_ETC1,
    ),
    // ATC compressed formats
    FormatDescriptor::compressed(
        AtcRgbUnormWebgl,
        gl::COMPRESSED_RGB_ATC_WEBGL,
        WEBGL_COMPRESSED_TEXTURE_ATC,
    ),
    FormatDescriptor::compressed(
        AtcRgbaUnormWebgl,
        gl::COMPRESSED_RGBA_ATC_EXPLICIT_ALPHA_WEBGL,
        WEBGL_COMPRESSED_TEXTURE_ATC,
    ),
    FormatDescriptor::compressed(
        AtcRgbaiUnormWebgl,
        gl::COMPRESSED_RGBA_ATC_INTERPOLATED_ALPHA_WEBGL,
        WEBGL_COMPRESSED_TEXTURE_ATC,
    ),
];

const fn astc(format: TextureFormat, native_token: gl::GLenum) -> FormatDescriptor {
    FormatDescriptor::compressed(format, native_token, WEBGL_COMPRESSED_TEXTURE_ASTC)
}

/// Returns the descriptor of `format`.
#[inline]
pub fn lookup(format: TextureFormat) -> &'static FormatDescriptor {
    &FORMAT_TABLE[format as usize]
}

/// Returns the descriptor for an identifier string, or [`None`] if the
/// identifier is not part of the catalog.
#[inline]
pub fn lookup_id(id: &str) -> Option<&'static FormatDescriptor> {
    TextureFormat::from_id(id).map(lookup)
}

/// All descriptors, in [`TextureFormat`] declaration order.
#[inline]
pub fn descriptors() -> &'static [FormatDescriptor] {
    &FORMAT_TABLE
}
