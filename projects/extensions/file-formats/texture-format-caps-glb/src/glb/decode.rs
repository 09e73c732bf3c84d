use super::constants::*;
use crate::error::{GlbError, GlbResult};
use crate::options::GlbOptions;
use endian_writer::{EndianReader, LittleEndianReader};
use log::debug;
use serde_json::Value;

/// The binary (`BIN\0`) chunk of a GLB container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryChunk<'a> {
    /// Offset of the chunk payload from the start of the container.
    pub byte_offset: usize,
    /// The chunk payload, borrowed from the input.
    pub data: &'a [u8],
}

impl BinaryChunk<'_> {
    /// Length of the payload in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the payload is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A decoded GLB container.
#[derive(Debug, Clone, PartialEq)]
pub struct GlbContainer<'a> {
    /// Container version; always 2.
    pub version: u32,
    /// Total length declared in the header.
    pub byte_length: usize,
    /// The parsed metadata (JSON) chunk.
    pub metadata: Value,
    /// The binary chunk, if the container has one.
    pub binary: Option<BinaryChunk<'a>>,
}

impl<'a> GlbContainer<'a> {
    /// The binary payload, or an empty slice when there is none.
    #[inline]
    pub fn binary_data(&self) -> &'a [u8] {
        self.binary.map(|chunk| chunk.data).unwrap_or(&[])
    }
}

/// Header of a single chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChunkHeader {
    offset: usize,
    length: usize,
    chunk_type: u32,
}

impl ChunkHeader {
    #[inline]
    fn payload_start(&self) -> usize {
        self.offset + CHUNK_HEADER_SIZE
    }
}

/// Decodes a GLB container.
///
/// The container header is validated first, then the mandatory JSON chunk is
/// parsed. If bytes remain after it, the next chunk is read; a `BIN\0` chunk
/// becomes [`GlbContainer::binary`] and any other chunk type is skipped.
/// Bytes beyond the declared container length are ignored.
///
/// # Errors
///
/// - [`GlbError::BadMagic`] if the input does not start with `glTF`.
/// - [`GlbError::UnsupportedVersion`] for versions other than 2.
/// - [`GlbError::TruncatedBuffer`] if the container or a chunk extends past
///   the available bytes.
/// - [`GlbError::MalformedChunk`] if the first chunk is not JSON, or a chunk
///   length is unaligned while [`GlbOptions::strict_chunk_alignment`] is set.
/// - [`GlbError::InvalidMetadata`] if the JSON chunk does not parse.
pub fn decode_glb<'a>(data: &'a [u8], options: &GlbOptions) -> GlbResult<GlbContainer<'a>> {
    let (version, byte_length) = read_header(data)?;
    let data = &data[..byte_length];

    let json_chunk = read_chunk_header(data, GLB_HEADER_SIZE, options)?;
    if json_chunk.chunk_type != CHUNK_TYPE_JSON {
        return Err(GlbError::MalformedChunk {
            offset: json_chunk.offset,
            reason: "first chunk is not JSON",
        });
    }
    let metadata = parse_metadata(chunk_payload(data, &json_chunk)?)?;

    let mut next_offset = json_chunk.payload_start() + json_chunk.length;
    let mut binary = None;
    if next_offset < data.len() {
        let chunk = read_chunk_header(data, next_offset, options)?;
        let payload = chunk_payload(data, &chunk)?;
        if chunk.chunk_type == CHUNK_TYPE_BIN {
            binary = Some(BinaryChunk {
                byte_offset: chunk.payload_start(),
                data: payload,
            });
        } else {
            debug!(
                "Skipping GLB chunk of type {:#010X} at offset {}",
                chunk.chunk_type, chunk.offset
            );
        }
        next_offset = chunk.payload_start() + chunk.length;
    }

    if next_offset < data.len() {
        debug!(
            "Ignoring {} trailing bytes after the second GLB chunk",
            data.len() - next_offset
        );
    }

    Ok(GlbContainer {
        version,
        byte_length,
        metadata,
        binary,
    })
}

/// Validates the 12 byte header and returns the version and declared length.
fn read_header(data: &[u8]) -> GlbResult<(u32, usize)> {
    if data.len() < GLB_HEADER_SIZE {
        return Err(GlbError::TruncatedBuffer {
            required: GLB_HEADER_SIZE,
            actual: data.len(),
        });
    }

    // SAFETY: We checked data.len() >= GLB_HEADER_SIZE (12), so all header fields are in bounds
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let magic = unsafe { reader.read_u32_at(0) };
    if magic != GLB_MAGIC {
        return Err(GlbError::BadMagic(magic));
    }

    let version = unsafe { reader.read_u32_at(VERSION_OFFSET as isize) };
    if version != GLB_VERSION {
        return Err(GlbError::UnsupportedVersion(version));
    }

    let byte_length = unsafe { reader.read_u32_at(LENGTH_OFFSET as isize) } as usize;
    if byte_length > data.len() {
        return Err(GlbError::TruncatedBuffer {
            required: byte_length,
            actual: data.len(),
        });
    }

    // Room for at least the JSON chunk header.
    if byte_length < GLB_HEADER_SIZE + CHUNK_HEADER_SIZE {
        return Err(GlbError::TruncatedBuffer {
            required: GLB_HEADER_SIZE + CHUNK_HEADER_SIZE,
            actual: byte_length,
        });
    }

    Ok((version, byte_length))
}

/// Reads the chunk header at `offset`. `data` is already cut to the declared length.
fn read_chunk_header(data: &[u8], offset: usize, options: &GlbOptions) -> GlbResult<ChunkHeader> {
    let header_end = offset + CHUNK_HEADER_SIZE;
    if header_end > data.len() {
        return Err(GlbError::TruncatedBuffer {
            required: header_end,
            actual: data.len(),
        });
    }

    // SAFETY: We checked offset + CHUNK_HEADER_SIZE (8) <= data.len()
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr().add(offset)) };
    let length = unsafe { reader.read_u32_at(0) } as usize;
    let chunk_type = unsafe { reader.read_u32_at(4) };

    if options.strict_chunk_alignment && length % CHUNK_ALIGNMENT != 0 {
        return Err(GlbError::MalformedChunk {
            offset,
            reason: "chunk length is not 4-byte aligned",
        });
    }

    Ok(ChunkHeader {
        offset,
        length,
        chunk_type,
    })
}

fn chunk_payload<'a>(data: &'a [u8], chunk: &ChunkHeader) -> GlbResult<&'a [u8]> {
    let start = chunk.payload_start();
    let end = start
        .checked_add(chunk.length)
        .filter(|&end| end <= data.len())
        .ok_or(GlbError::TruncatedBuffer {
            required: start.saturating_add(chunk.length),
            actual: data.len(),
        })?;
    Ok(&data[start..end])
}

/// Parses the JSON chunk, skipping the space/NUL padding at its end.
fn parse_metadata(payload: &[u8]) -> GlbResult<Value> {
    let trimmed_length = payload
        .iter()
        .rposition(|&byte| byte != b' ' && byte != 0)
        .map_or(0, |last| last + 1);
    serde_json::from_slice(&payload[..trimmed_length]).map_err(GlbError::InvalidMetadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use endian_writer::{EndianWriter, LittleEndianWriter};

    #[test]
    fn decode_metadata_only_container() {
        let data = GlbBuilder::new(br#"{"asset":{"version":"2.0"}}"#).build();
        let container = decode_glb(&data, &GlbOptions::default()).unwrap();

        assert_eq!(container.version, 2);
        assert_eq!(container.byte_length, data.len());
        assert_eq!(container.metadata["asset"]["version"], "2.0");
        assert_eq!(container.binary, None);
        assert!(container.binary_data().is_empty());
    }

    #[test]
    fn decode_container_with_binary_chunk() {
        let payload = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let data = GlbBuilder::new(br#"{"buffers":[{"byteLength":8}]}"#)
            .binary(&payload)
            .build();
        let container = decode_glb(&data, &GlbOptions::default()).unwrap();

        let binary = container.binary.unwrap();
        assert_eq!(binary.data, &payload);
        assert_eq!(binary.len(), 8);
        assert_eq!(&data[binary.byte_offset..binary.byte_offset + 8], &payload);
    }

    #[rstest]
    #[case(b"GLTF")]
    #[case(b"\0\0\0\0")]
    #[case(b"DDS ")]
    fn decode_rejects_bad_magic(#[case] magic: &[u8; 4]) {
        let mut data = GlbBuilder::new(br#"{}"#).build();
        data[..4].copy_from_slice(magic);
        assert!(matches!(
            decode_glb(&data, &GlbOptions::default()),
            Err(GlbError::BadMagic(_))
        ));
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    fn decode_rejects_other_versions(#[case] version: u32) {
        let data = GlbBuilder::new(br#"{}"#).version(version).build();
        assert!(matches!(
            decode_glb(&data, &GlbOptions::default()),
            Err(GlbError::UnsupportedVersion(v)) if v == version
        ));
    }

    #[test]
    fn decode_rejects_declared_length_past_buffer() {
        let mut data = GlbBuilder::new(br#"{}"#).build();
        let declared = data.len() as u32 + 4;
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        unsafe { writer.write_u32_at(declared, LENGTH_OFFSET as isize) };

        assert!(matches!(
            decode_glb(&data, &GlbOptions::default()),
            Err(GlbError::TruncatedBuffer { required, actual })
                if required == declared as usize && actual == data.len()
        ));
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(11)]
    fn decode_rejects_short_input(#[case] size: usize) {
        let data = create_truncated_glb(size);
        assert!(matches!(
            decode_glb(&data, &GlbOptions::default()),
            Err(GlbError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn decode_ignores_bytes_past_declared_length() {
        let mut data = GlbBuilder::new(br#"{"a":1}"#).build();
        data.extend_from_slice(&[0xFF; 7]);
        let container = decode_glb(&data, &GlbOptions::default()).unwrap();
        assert_eq!(container.byte_length, data.len() - 7);
        assert_eq!(container.binary, None);
    }

    #[test]
    fn decode_rejects_binary_first_chunk() {
        let data = GlbBuilder::new(br#"{}"#)
            .json_chunk_type(CHUNK_TYPE_BIN)
            .build();
        assert!(matches!(
            decode_glb(&data, &GlbOptions::default()),
            Err(GlbError::MalformedChunk { offset: GLB_HEADER_SIZE, .. })
        ));
    }

    #[test]
    fn decode_rejects_json_chunk_overflowing_container() {
        let mut data = GlbBuilder::new(br#"{}"#).build();
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        unsafe { writer.write_u32_at(64, GLB_HEADER_SIZE as isize) };

        assert!(matches!(
            decode_glb(&data, &GlbOptions::default()),
            Err(GlbError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn decode_rejects_invalid_json() {
        let data = GlbBuilder::new(br#"{"asset":"#).build();
        assert!(matches!(
            decode_glb(&data, &GlbOptions::default()),
            Err(GlbError::InvalidMetadata(_))
        ));
    }

    #[test]
    fn decode_skips_nul_padding() {
        let data = GlbBuilder::new(br#"{"a":true}"#).json_padding(0).build();
        let container = decode_glb(&data, &GlbOptions::default()).unwrap();
        assert_eq!(container.metadata["a"], true);
    }

    #[test]
    fn decode_unaligned_chunk_depends_on_options() {
        let data = GlbBuilder::new(br#"{"a":1}"#).unpadded().build();
        assert!(matches!(
            decode_glb(&data, &GlbOptions::default()),
            Err(GlbError::MalformedChunk { .. })
        ));

        let lenient = GlbOptions::builder().strict_chunk_alignment(false).build();
        let container = decode_glb(&data, &lenient).unwrap();
        assert_eq!(container.metadata["a"], 1);
    }

    #[test]
    fn decode_skips_unknown_second_chunk() {
        let data = GlbBuilder::new(br#"{}"#)
            .chunk(*b"EXT\0", &[9, 9, 9, 9])
            .build();
        let container = decode_glb(&data, &GlbOptions::default()).unwrap();
        assert_eq!(container.binary, None);
    }

    #[test]
    fn decode_rejects_partial_second_chunk_header() {
        let mut data = GlbBuilder::new(br#"{}"#).build();
        data.extend_from_slice(&[0, 0, 0, 0]);
        let declared = data.len() as u32;
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        unsafe { writer.write_u32_at(declared, LENGTH_OFFSET as isize) };

        assert!(matches!(
            decode_glb(&data, &GlbOptions::default()),
            Err(GlbError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn decode_rejects_binary_chunk_overflowing_container() {
        let mut data = GlbBuilder::new(br#"{}"#).binary(&[0; 8]).build();
        let bin_header = data.len() - 8 - CHUNK_HEADER_SIZE;
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        unsafe { writer.write_u32_at(16, bin_header as isize) };

        assert!(matches!(
            decode_glb(&data, &GlbOptions::default()),
            Err(GlbError::TruncatedBuffer { .. })
        ));
    }
}
