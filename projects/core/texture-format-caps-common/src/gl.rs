//! GL / WebGL enum values.
//!
//! Values are passed straight to driver calls, so they must match the Khronos
//! registry exactly. Only the tokens referenced by the format tables are listed.
#![allow(missing_docs)]

/// Native GL enum value.
pub type GLenum = u32;

// Pixel data types
pub const BYTE: GLenum = 0x1400;
pub const UNSIGNED_BYTE: GLenum = 0x1401;
pub const SHORT: GLenum = 0x1402;
pub const UNSIGNED_SHORT: GLenum = 0x1403;
pub const INT: GLenum = 0x1404;
pub const UNSIGNED_INT: GLenum = 0x1405;
pub const FLOAT: GLenum = 0x1406;
pub const HALF_FLOAT: GLenum = 0x140B;
pub const UNSIGNED_SHORT_4_4_4_4: GLenum = 0x8033;
pub const UNSIGNED_SHORT_5_5_5_1: GLenum = 0x8034;
pub const UNSIGNED_SHORT_5_6_5: GLenum = 0x8363;

// Pixel data formats
pub const DEPTH_COMPONENT: GLenum = 0x1902;
pub const RED: GLenum = 0x1903;
pub const ALPHA: GLenum = 0x1906;
pub const RGB: GLenum = 0x1907;
pub const RGBA: GLenum = 0x1908;
pub const LUMINANCE: GLenum = 0x1909;
pub const LUMINANCE_ALPHA: GLenum = 0x190A;
pub const RG: GLenum = 0x8227;
pub const RG_INTEGER: GLenum = 0x8228;
pub const DEPTH_STENCIL: GLenum = 0x84F9;
pub const RED_INTEGER: GLenum = 0x8D94;
pub const RGB_INTEGER: GLenum = 0x8D98;
pub const RGBA_INTEGER: GLenum = 0x8D99;

// 8-bit sized formats
pub const R8: GLenum = 0x8229;
pub const R8_SNORM: GLenum = 0x8F94;
pub const R8I: GLenum = 0x8231;
pub const R8UI: GLenum = 0x8232;

// 16-bit sized formats
pub const R16F: GLenum = 0x822D;
pub const R16I: GLenum = 0x8233;
pub const R16UI: GLenum = 0x8234;
pub const R16_EXT: GLenum = 0x822A;
pub const R16_SNORM_EXT: GLenum = 0x8F98;
pub const RG8: GLenum = 0x822B;
pub const RG8_SNORM: GLenum = 0x8F95;
pub const RG8I: GLenum = 0x8237;
pub const RG8UI: GLenum = 0x8238;
pub const RGBA4: GLenum = 0x8056;
pub const RGB5_A1: GLenum = 0x8057;
pub const RGB565: GLenum = 0x8D62;

// 24-bit sized formats
pub const RGB8: GLenum = 0x8051;

// 32-bit sized formats
pub const R32F: GLenum = 0x822E;
pub const R32I: GLenum = 0x8235;
pub const R32UI: GLenum = 0x8236;
pub const RG16F: GLenum = 0x822F;
pub const RG16I: GLenum = 0x8239;
pub const RG16UI: GLenum = 0x823A;
pub const RG16_EXT: GLenum = 0x822C;
pub const RG16_SNORM_EXT: GLenum = 0x8F99;
pub const RGBA8: GLenum = 0x8058;
pub const RGBA8_SNORM: GLenum = 0x8F97;
pub const SRGB8_ALPHA8: GLenum = 0x8C43;
pub const RGBA8I: GLenum = 0x8D8E;
pub const RGBA8UI: GLenum = 0x8D7C;
pub const RGB9_E5: GLenum = 0x8C3D;
pub const R11F_G11F_B10F: GLenum = 0x8C3A;
pub const RGB10_A2: GLenum = 0x8059;
pub const RGB10_A2UI: GLenum = 0x906F;

// 48-bit sized formats
pub const RGB16_EXT: GLenum = 0x8054;
pub const RGB16_SNORM_EXT: GLenum = 0x8F9A;

// 64-bit sized formats
pub const RG32F: GLenum = 0x8230;
pub const RG32I: GLenum = 0x823B;
pub const RG32UI: GLenum = 0x823C;
pub const RGBA16F: GLenum = 0x881A;
pub const RGBA16I: GLenum = 0x8D88;
pub const RGBA16UI: GLenum = 0x8D76;
pub const RGBA16_EXT: GLenum = 0x805B;
pub const RGBA16_SNORM_EXT: GLenum = 0x8F9B;

// 96/128-bit sized formats
pub const RGB32F: GLenum = 0x8815;
pub const RGBA32F: GLenum = 0x8814;
pub const RGBA32I: GLenum = 0x8D82;
pub const RGBA32UI: GLenum = 0x8D70;

// Depth and stencil
pub const DEPTH_COMPONENT16: GLenum = 0x81A5;
pub const DEPTH_COMPONENT24: GLenum = 0x81A6;
pub const DEPTH24_STENCIL8: GLenum = 0x88F0;
pub const DEPTH_COMPONENT32F: GLenum = 0x8CAC;
pub const DEPTH32F_STENCIL8: GLenum = 0x8CAD;
pub const STENCIL_INDEX8: GLenum = 0x8D48;

// WEBGL_compressed_texture_s3tc
pub const COMPRESSED_RGB_S3TC_DXT1_EXT: GLenum = 0x83F0;
pub const COMPRESSED_RGBA_S3TC_DXT1_EXT: GLenum = 0x83F1;
pub const COMPRESSED_RGBA_S3TC_DXT3_EXT: GLenum = 0x83F2;
pub const COMPRESSED_RGBA_S3TC_DXT5_EXT: GLenum = 0x83F3;

// WEBGL_compressed_texture_s3tc_srgb
pub const COMPRESSED_SRGB_S3TC_DXT1_EXT: GLenum = 0x8C4C;
pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT: GLenum = 0x8C4D;
pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT: GLenum = 0x8C4E;
pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT: GLenum = 0x8C4F;

// EXT_texture_compression_rgtc
pub const COMPRESSED_RED_RGTC1_EXT: GLenum = 0x8DBB;
pub const COMPRESSED_SIGNED_RED_RGTC1_EXT: GLenum = 0x8DBC;
pub const COMPRESSED_RED_GREEN_RGTC2_EXT: GLenum = 0x8DBD;
pub const COMPRESSED_SIGNED_RED_GREEN_RGTC2_EXT: GLenum = 0x8DBE;

// EXT_texture_compression_bptc
pub const COMPRESSED_RGBA_BPTC_UNORM_EXT: GLenum = 0x8E8C;
pub const COMPRESSED_SRGB_ALPHA_BPTC_UNORM_EXT: GLenum = 0x8E8D;
pub const COMPRESSED_RGB_BPTC_SIGNED_FLOAT_EXT: GLenum = 0x8E8E;
pub const COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT_EXT: GLenum = 0x8E8F;

// WEBGL_compressed_texture_etc
pub const COMPRESSED_R11_EAC: GLenum = 0x9270;
pub const COMPRESSED_SIGNED_R11_EAC: GLenum = 0x9271;
pub const COMPRESSED_RG11_EAC: GLenum = 0x9272;
pub const COMPRESSED_SIGNED_RG11_EAC: GLenum = 0x9273;
pub const COMPRESSED_RGB8_ETC2: GLenum = 0x9274;
pub const COMPRESSED_SRGB8_ETC2: GLenum = 0x9275;
pub const COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2: GLenum = 0x9276;
pub const COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2: GLenum = 0x9277;
pub const COMPRESSED_RGBA8_ETC2_EAC: GLenum = 0x9278;
pub const COMPRESSED_SRGB8_ALPHA8_ETC2_EAC: GLenum = 0x9279;

// WEBGL_compressed_texture_astc
pub const COMPRESSED_RGBA_ASTC_4X4_KHR: GLenum = 0x93B0;
pub const COMPRESSED_RGBA_ASTC_5X4_KHR: GLenum = 0x93B1;
pub const COMPRESSED_RGBA_ASTC_5X5_KHR: GLenum = 0x93B2;
pub const COMPRESSED_RGBA_ASTC_6X5_KHR: GLenum = 0x93B3;
pub const COMPRESSED_RGBA_ASTC_6X6_KHR: GLenum = 0x93B4;
pub const COMPRESSED_RGBA_ASTC_8X5_KHR: GLenum = 0x93B5;
pub const COMPRESSED_RGBA_ASTC_8X6_KHR: GLenum = 0x93B6;
pub const COMPRESSED_RGBA_ASTC_8X8_KHR: GLenum = 0x93B7;
pub const COMPRESSED_RGBA_ASTC_10X5_KHR: GLenum = 0x93B8;
pub const COMPRESSED_RGBA_ASTC_10X6_KHR: GLenum = 0x93B9;
pub const COMPRESSED_RGBA_ASTC_10X8_KHR: GLenum = 0x93BA;
pub const COMPRESSED_RGBA_ASTC_10X10_KHR: GLenum = 0x93BB;
pub const COMPRESSED_RGBA_ASTC_12X10_KHR: GLenum = 0x93BC;
pub const COMPRESSED_RGBA_ASTC_12X12_KHR: GLenum = 0x93BD;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_4X4_KHR: GLenum = 0x93D0;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_5X4_KHR: GLenum = 0x93D1;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_5X5_KHR: GLenum = 0x93D2;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_6X5_KHR: GLenum = 0x93D3;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_6X6_KHR: GLenum = 0x93D4;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_8X5_KHR: GLenum = 0x93D5;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_8X6_KHR: GLenum = 0x93D6;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_8X8_KHR: GLenum = 0x93D7;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_10X5_KHR: GLenum = 0x93D8;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_10X6_KHR: GLenum = 0x93D9;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_10X8_KHR: GLenum = 0x93DA;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_10X10_KHR: GLenum = 0x93DB;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_12X10_KHR: GLenum = 0x93DC;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_12X12_KHR: GLenum = 0x93DD;

// WEBGL_compressed_texture_pvrtc
pub const COMPRESSED_RGB_PVRTC_4BPPV1_IMG: GLenum = 0x8C00;
pub const COMPRESSED_RGB_PVRTC_2BPPV1_IMG: GLenum = 0x8C01;
pub const COMPRESSED_RGBA_PVRTC_4BPPV1_IMG: GLenum = 0x8C02;
pub const COMPRESSED_RGBA_PVRTC_2BPPV1_IMG: GLenum = 0x8C03;

// WEBGL_compressed_texture_etc1
pub const COMPRESSED_RGB_ETC1_WEBGL: GLenum = 0x8D64;

// WEBGL_compressed_texture_atc
pub const COMPRESSED_RGB_ATC_WEBGL: GLenum = 0x8C92;
pub const COMPRESSED_RGBA_ATC_EXPLICIT_ALPHA_WEBGL: GLenum = 0x8C93;
pub const COMPRESSED_RGBA_ATC_INTERPOLATED_ALPHA_WEBGL: GLenum = 0x87EE;
