use super::constants::*;

/// Determines if the given data likely represents a GLB container.
/// This is done by checking the `glTF` magic at offset 0 and the minimum size
/// of a header plus one chunk header.
/// For full validation, use [`decode_glb`].
///
/// [`decode_glb`]: crate::glb::decode::decode_glb
#[inline(always)]
pub fn likely_glb(data: &[u8]) -> bool {
    data.len() >= GLB_HEADER_SIZE + CHUNK_HEADER_SIZE
        && u32::from_le_bytes([data[0], data[1], data[2], data[3]]) == GLB_MAGIC
}
