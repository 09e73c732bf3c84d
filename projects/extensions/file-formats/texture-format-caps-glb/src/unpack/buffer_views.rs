use super::{invalid_field, optional_component_type, optional_usize, required_usize};
use super::{ComponentType, TypedView};
use crate::error::{UnpackError, UnpackResult};
use alloc::format;
use alloc::vec::Vec;
use serde_json::Value;

/// Resolves every `bufferViews` entry of `metadata` against `binary`.
///
/// Pass an empty slice when the container has no binary chunk. A document
/// without `bufferViews` yields no views.
///
/// # Errors
///
/// - [`UnpackError::OutOfBoundsView`] if a view reaches past the end of
///   `binary`. No views are returned in that case.
/// - [`UnpackError::InvalidDescriptor`] if an entry is not an object, lacks
///   `byteLength`, or has a field of the wrong type.
pub fn unpack_buffer_views<'a>(metadata: &Value, binary: &'a [u8]) -> UnpackResult<Vec<TypedView<'a>>> {
    let Some(entries) = metadata.get("bufferViews") else {
        return Ok(Vec::new());
    };

    let entries = entries
        .as_array()
        .ok_or_else(|| invalid_field("", "bufferViews", "expected an array"))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| unpack_view(index, entry, binary))
        .collect()
}

fn unpack_view<'a>(index: usize, entry: &Value, binary: &'a [u8]) -> UnpackResult<TypedView<'a>> {
    let path = format!("/bufferViews/{index}");
    let object = entry.as_object().ok_or_else(|| UnpackError::InvalidDescriptor {
        path: path.clone(),
        reason: "expected an object",
    })?;

    let byte_length = required_usize(object, "byteLength", &path)?;
    let byte_offset = optional_usize(object, "byteOffset", &path)?.unwrap_or(0);
    let byte_stride = optional_usize(object, "byteStride", &path)?;
    let component_type =
        optional_component_type(object, &path)?.unwrap_or(ComponentType::UnsignedByte);

    let end = byte_offset
        .checked_add(byte_length)
        .filter(|&end| end <= binary.len())
        .ok_or(UnpackError::OutOfBoundsView {
            index,
            offset: byte_offset,
            length: byte_length,
            available: binary.len(),
        })?;

    Ok(TypedView {
        index,
        byte_offset,
        byte_stride,
        component_type,
        data: &binary[byte_offset..end],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use serde_json::json;

    #[test]
    fn views_borrow_binary_ranges() {
        let binary: Vec<u8> = (0..16).collect();
        let metadata = json!({
            "bufferViews": [
                { "buffer": 0, "byteLength": 4 },
                { "buffer": 0, "byteOffset": 4, "byteLength": 12, "byteStride": 12, "componentType": 5126 }
            ]
        });

        let views = unpack_buffer_views(&metadata, &binary).unwrap();
        assert_eq!(views.len(), 2);

        assert_eq!(views[0].data, &binary[..4]);
        assert_eq!(views[0].component_type, ComponentType::UnsignedByte);
        assert_eq!(views[0].byte_stride, None);

        assert_eq!(views[1].index, 1);
        assert_eq!(views[1].byte_offset, 4);
        assert_eq!(views[1].data, &binary[4..16]);
        assert_eq!(views[1].byte_stride, Some(12));
        assert_eq!(views[1].component_type, ComponentType::Float);
        assert_eq!(views[1].data.as_ptr(), binary[4..].as_ptr());
    }

    #[test]
    fn missing_buffer_views_yields_nothing() {
        let views = unpack_buffer_views(&json!({ "asset": {} }), &[]).unwrap();
        assert!(views.is_empty());
    }

    #[rstest]
    #[case(json!({ "byteOffset": 12, "byteLength": 8 }))]
    #[case(json!({ "byteLength": 17 }))]
    #[case(json!({ "byteOffset": 17, "byteLength": 0 }))]
    fn out_of_bounds_views_fail(#[case] view: Value) {
        let binary = [0u8; 16];
        let metadata = json!({ "bufferViews": [{ "byteLength": 4 }, view] });
        assert!(matches!(
            unpack_buffer_views(&metadata, &binary),
            Err(UnpackError::OutOfBoundsView { index: 1, available: 16, .. })
        ));
    }

    #[test]
    fn views_without_binary_chunk_are_out_of_bounds() {
        let metadata = json!({ "bufferViews": [{ "byteLength": 4 }] });
        assert!(matches!(
            unpack_buffer_views(&metadata, &[]),
            Err(UnpackError::OutOfBoundsView { available: 0, .. })
        ));
    }

    #[rstest]
    #[case(json!({ "bufferViews": {} }), "/bufferViews")]
    #[case(json!({ "bufferViews": [4] }), "/bufferViews/0")]
    #[case(json!({ "bufferViews": [{ "byteOffset": 0 }] }), "/bufferViews/0/byteLength")]
    #[case(json!({ "bufferViews": [{ "byteLength": -1 }] }), "/bufferViews/0/byteLength")]
    #[case(json!({ "bufferViews": [{ "byteLength": 4, "byteOffset": "0" }] }), "/bufferViews/0/byteOffset")]
    #[case(json!({ "bufferViews": [{ "byteLength": 4, "componentType": 1 }] }), "/bufferViews/0/componentType")]
    fn invalid_descriptors_fail(#[case] metadata: Value, #[case] expected_path: &str) {
        match unpack_buffer_views(&metadata, &[0; 16]) {
            Err(UnpackError::InvalidDescriptor { path, .. }) => assert_eq!(path, expected_path),
            other => panic!("unexpected result {other:?}"),
        }
    }
}
