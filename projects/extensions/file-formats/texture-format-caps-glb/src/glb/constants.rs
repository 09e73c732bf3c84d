//! GLB container constants.

/// Magic header for GLB files, `glTF` read as a little-endian u32.
pub(crate) const GLB_MAGIC: u32 = 0x46546C67;

/// The only container version understood.
pub(crate) const GLB_VERSION: u32 = 2;

/// Magic, version and total length.
pub(crate) const GLB_HEADER_SIZE: usize = 12;

/// Chunk length and chunk type.
pub(crate) const CHUNK_HEADER_SIZE: usize = 8;

/// Chunk lengths must be a multiple of this.
pub(crate) const CHUNK_ALIGNMENT: usize = 4;

pub(crate) const VERSION_OFFSET: usize = 4;
pub(crate) const LENGTH_OFFSET: usize = 8;

pub(crate) const CHUNK_TYPE_JSON: u32 = 0x4E4F534A; // 'JSON'
pub(crate) const CHUNK_TYPE_BIN: u32 = 0x004E4942; // 'BIN\0'
