//! Common test imports and utilities for GLB tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Common GLB test data helpers
pub(crate) use crate::glb::constants::*;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Builds GLB containers for tests.
///
/// By default the JSON chunk is padded with spaces to a multiple of 4 bytes
/// and no second chunk is written.
pub struct GlbBuilder<'a> {
    json: &'a [u8],
    json_chunk_type: u32,
    json_padding: u8,
    padded: bool,
    version: u32,
    second_chunk: Option<(u32, &'a [u8])>,
}

impl<'a> GlbBuilder<'a> {
    /// Start a container with the given JSON chunk payload.
    pub fn new(json: &'a [u8]) -> Self {
        Self {
            json,
            json_chunk_type: CHUNK_TYPE_JSON,
            json_padding: b' ',
            padded: true,
            version: GLB_VERSION,
            second_chunk: None,
        }
    }

    /// Append a `BIN\0` chunk, zero padded to a multiple of 4 bytes.
    pub fn binary(self, data: &'a [u8]) -> Self {
        self.chunk(*b"BIN\0", data)
    }

    /// Append a second chunk with an arbitrary type.
    pub fn chunk(mut self, chunk_type: [u8; 4], data: &'a [u8]) -> Self {
        self.second_chunk = Some((u32::from_le_bytes(chunk_type), data));
        self
    }

    /// Override the header version.
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Override the type of the first chunk.
    pub fn json_chunk_type(mut self, chunk_type: u32) -> Self {
        self.json_chunk_type = chunk_type;
        self
    }

    /// Pad the JSON chunk with `padding` instead of spaces.
    pub fn json_padding(mut self, padding: u8) -> Self {
        self.json_padding = padding;
        self
    }

    /// Write the JSON chunk without alignment padding.
    pub fn unpadded(mut self) -> Self {
        self.padded = false;
        self
    }

    /// Serialize the container.
    pub fn build(&self) -> Vec<u8> {
        let mut data = vec![0u8; GLB_HEADER_SIZE];
        let json_padding = if self.padded {
            padding_for(self.json.len())
        } else {
            0
        };
        write_chunk(
            &mut data,
            self.json_chunk_type,
            self.json,
            json_padding,
            self.json_padding,
        );
        if let Some((chunk_type, payload)) = self.second_chunk {
            write_chunk(&mut data, chunk_type, payload, padding_for(payload.len()), 0);
        }

        let total_length = data.len() as u32;
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        unsafe {
            writer.write_u32_at(GLB_MAGIC, 0);
            writer.write_u32_at(self.version, VERSION_OFFSET as isize);
            writer.write_u32_at(total_length, LENGTH_OFFSET as isize);
        }
        data
    }
}

fn padding_for(length: usize) -> usize {
    (CHUNK_ALIGNMENT - length % CHUNK_ALIGNMENT) % CHUNK_ALIGNMENT
}

fn write_chunk(data: &mut Vec<u8>, chunk_type: u32, payload: &[u8], padding: usize, fill: u8) {
    let header = data.len();
    data.resize(header + CHUNK_HEADER_SIZE, 0);
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr().add(header)) };
    unsafe {
        writer.write_u32_at((payload.len() + padding) as u32, 0);
        writer.write_u32_at(chunk_type, 4);
    }
    data.extend_from_slice(payload);
    data.extend(core::iter::repeat_n(fill, padding));
}

/// Creates a buffer that's too small to contain a complete GLB header
/// Use this to test error conditions for truncated files
pub fn create_truncated_glb(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];

    // Only set magic if there's room
    if size >= 4 {
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        unsafe { writer.write_u32_at(GLB_MAGIC, 0) };
    }

    data
}

/// Little endian bytes of `values`, as stored in a `BIN\0` chunk.
pub fn floats_to_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|value| value.to_le_bytes()).collect()
}
