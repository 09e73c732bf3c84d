//! Names of the GL extensions that gate texture formats.
//!
//! These are the exact strings handed to the host's extension probe.

/// sRGB textures on legacy contexts.
pub const EXT_SRGB: &str = "EXT_sRGB";
/// 16-bit normalized formats.
pub const EXT_TEXTURE_NORM16: &str = "EXT_texture_norm16";
/// Float color attachments on legacy contexts.
pub const WEBGL_COLOR_BUFFER_FLOAT: &str = "WEBGL_color_buffer_float";
/// Float color attachments on modern contexts.
pub const EXT_COLOR_BUFFER_FLOAT: &str = "EXT_color_buffer_float";
/// Half float color attachments on legacy contexts.
pub const WEBGL_COLOR_BUFFER_HALF_FLOAT: &str = "WEBGL_color_buffer_half_float";

/// Linear filtering of 32-bit float textures.
pub const OES_TEXTURE_FLOAT_LINEAR: &str = "OES_texture_float_linear";
/// Linear filtering of 16-bit float textures.
pub const OES_TEXTURE_HALF_FLOAT_LINEAR: &str = "OES_texture_half_float_linear";

/// BC1, BC2, BC3.
pub const WEBGL_COMPRESSED_TEXTURE_S3TC: &str = "WEBGL_compressed_texture_s3tc";
/// sRGB variants of BC1, BC2, BC3.
pub const WEBGL_COMPRESSED_TEXTURE_S3TC_SRGB: &str = "WEBGL_compressed_texture_s3tc_srgb";
/// BC4, BC5.
pub const EXT_TEXTURE_COMPRESSION_RGTC: &str = "EXT_texture_compression_rgtc";
/// BC6H, BC7.
pub const EXT_TEXTURE_COMPRESSION_BPTC: &str = "EXT_texture_compression_bptc";
/// ETC2 and EAC.
pub const WEBGL_COMPRESSED_TEXTURE_ETC: &str = "WEBGL_compressed_texture_etc";
/// ASTC (LDR profile).
pub const WEBGL_COMPRESSED_TEXTURE_ASTC: &str = "WEBGL_compressed_texture_astc";
/// ETC1.
pub const WEBGL_COMPRESSED_TEXTURE_ETC1: &str = "WEBGL_compressed_texture_etc1";
/// PVRTC.
pub const WEBGL_COMPRESSED_TEXTURE_PVRTC: &str = "WEBGL_compressed_texture_pvrtc";
/// ATC.
pub const WEBGL_COMPRESSED_TEXTURE_ATC: &str = "WEBGL_compressed_texture_atc";
