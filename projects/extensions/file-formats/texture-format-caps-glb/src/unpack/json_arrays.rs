use super::{invalid_field, optional_component_type, optional_usize, required_usize};
use super::{ElementArray, ElementType, ImageView, TypedView, UnpackedNode};
use crate::error::{UnpackError, UnpackResult};
use crate::options::GlbOptions;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use log::warn;
use serde_json::{Map, Value};

/// Converts `metadata` into an [`UnpackedNode`] tree over `views`.
///
/// Every object with an integer `bufferView`, an integer `count`, a
/// `componentType` and a `type` is an accessor and becomes an
/// [`UnpackedNode::Elements`]. Objects with a `bufferView` and a `mimeType`
/// become [`UnpackedNode::Image`].
///
/// With [`GlbOptions::resolve_json_pointers`] set, strings of the form
/// `#/accessors/N`, `#/bufferViews/N` (or any other `#/<collection>/N`) and
/// `$$$N` are replaced by the value they point at; `##/...` unescapes to the
/// literal `#/...`. Pointers inside a referenced value are resolved as well.
/// Pointers that cannot be resolved, or that point back into a value already
/// being expanded, stay strings.
///
/// # Errors
///
/// - [`UnpackError::MissingBufferView`] if an accessor or image refers to a
///   view that does not exist.
/// - [`UnpackError::OutOfBoundsView`] if an accessor reads past its view.
/// - [`UnpackError::InvalidDescriptor`] for unknown component or element
///   types, and strides smaller than one element.
pub fn unpack_json_arrays<'a>(
    metadata: &Value,
    views: &[TypedView<'a>],
    options: &GlbOptions,
) -> UnpackResult<UnpackedNode<'a>> {
    let mut path = String::new();
    let mut root = unpack_value(metadata, views, &mut path)?;

    if options.resolve_json_pointers {
        let snapshot = root.clone();
        resolve_pointers(&mut root, &snapshot, views, &mut Vec::new());
    }

    Ok(root)
}

fn unpack_value<'a>(
    value: &Value,
    views: &[TypedView<'a>],
    path: &mut String,
) -> UnpackResult<UnpackedNode<'a>> {
    let node = match value {
        Value::Null => UnpackedNode::Null,
        Value::Bool(value) => UnpackedNode::Bool(*value),
        Value::Number(number) => UnpackedNode::Number(number.clone()),
        Value::String(text) => UnpackedNode::String(text.clone()),
        Value::Array(items) => {
            let mut unpacked = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let parent_length = path.len();
                path.push_str(&format!("/{index}"));
                unpacked.push(unpack_value(item, views, path)?);
                path.truncate(parent_length);
            }
            UnpackedNode::Array(unpacked)
        }
        Value::Object(members) => {
            if let Some(elements) = unpack_accessor(members, views, path)? {
                return Ok(UnpackedNode::Elements(elements));
            }
            if let Some(image) = unpack_image(members, views)? {
                return Ok(UnpackedNode::Image(image));
            }

            let mut unpacked = BTreeMap::new();
            for (key, member) in members {
                let parent_length = path.len();
                path.push('/');
                path.push_str(key);
                unpacked.insert(key.clone(), unpack_value(member, views, path)?);
                path.truncate(parent_length);
            }
            UnpackedNode::Object(unpacked)
        }
    };
    Ok(node)
}

fn find_view<'v, 'a>(views: &'v [TypedView<'a>], index: u64) -> UnpackResult<&'v TypedView<'a>> {
    let index = usize::try_from(index).unwrap_or(usize::MAX);
    views.get(index).ok_or(UnpackError::MissingBufferView(index))
}

/// Builds the [`ElementArray`] for an accessor object, or returns [`None`] if
/// the object is not an accessor.
fn unpack_accessor<'a>(
    accessor: &Map<String, Value>,
    views: &[TypedView<'a>],
    path: &str,
) -> UnpackResult<Option<ElementArray<'a>>> {
    let (Some(view_index), Some(_), Some(_), Some(element_type)) = (
        accessor.get("bufferView").and_then(Value::as_u64),
        accessor.get("count").and_then(Value::as_u64),
        accessor.get("componentType"),
        accessor.get("type"),
    ) else {
        return Ok(None);
    };

    let count = required_usize(accessor, "count", path)?;
    let Some(component_type) = optional_component_type(accessor, path)? else {
        return Ok(None);
    };
    let element_type = element_type
        .as_str()
        .and_then(ElementType::from_name)
        .ok_or_else(|| invalid_field(path, "type", "unknown element type"))?;
    let byte_offset = optional_usize(accessor, "byteOffset", path)?.unwrap_or(0);
    let normalized = accessor
        .get("normalized")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let view = find_view(views, view_index)?;
    let element_size = component_type.size() * element_type.components();
    let stride = view.byte_stride.unwrap_or(element_size);
    if stride < element_size {
        return Err(UnpackError::InvalidDescriptor {
            path: format!("/bufferViews/{}/byteStride", view.index),
            reason: "stride is smaller than one element",
        });
    }

    // The last element only needs `element_size` bytes, not a full stride.
    let span = match count {
        0 => Some(0),
        count => (count - 1)
            .checked_mul(stride)
            .and_then(|span| span.checked_add(element_size)),
    };
    let end = span
        .and_then(|span| byte_offset.checked_add(span))
        .filter(|&end| end <= view.len())
        .ok_or(UnpackError::OutOfBoundsView {
            index: view.index,
            offset: byte_offset,
            length: span.unwrap_or(usize::MAX),
            available: view.len(),
        })?;

    Ok(Some(ElementArray {
        buffer_view: view.index,
        component_type,
        element_type,
        normalized,
        count,
        stride,
        data: &view.data[byte_offset..end],
    }))
}

fn unpack_image<'a>(
    image: &Map<String, Value>,
    views: &[TypedView<'a>],
) -> UnpackResult<Option<ImageView<'a>>> {
    let (Some(view_index), Some(mime_type)) = (
        image.get("bufferView").and_then(Value::as_u64),
        image.get("mimeType").and_then(Value::as_str),
    ) else {
        return Ok(None);
    };

    let view = find_view(views, view_index)?;
    Ok(Some(ImageView {
        buffer_view: view.index,
        mime_type: String::from(mime_type),
        data: view.data,
    }))
}

/// Replaces pointer strings below `node`. `active` holds the collection
/// entries currently being expanded; pointers back into them stay strings.
fn resolve_pointers<'a>(
    node: &mut UnpackedNode<'a>,
    snapshot: &UnpackedNode<'a>,
    views: &[TypedView<'a>],
    active: &mut Vec<(String, usize)>,
) {
    match node {
        UnpackedNode::String(text) => {
            if let Some(resolved) = resolve_pointer(text, snapshot, views, active) {
                *node = resolved;
            }
        }
        UnpackedNode::Array(items) => {
            for item in items {
                resolve_pointers(item, snapshot, views, active);
            }
        }
        UnpackedNode::Object(members) => {
            for member in members.values_mut() {
                resolve_pointers(member, snapshot, views, active);
            }
        }
        _ => {}
    }
}

/// A string that looks like a pointer.
enum Pointer<'t> {
    /// `##/rest`, the literal `#/rest`.
    Escaped(&'t str),
    /// `#/collection/N`, or `$$$N` for accessor N.
    Entry(&'t str, usize),
    /// Has a pointer prefix but no valid index.
    Malformed,
}

fn parse_pointer(text: &str) -> Option<Pointer<'_>> {
    if let Some(escaped) = text.strip_prefix("##/") {
        return Some(Pointer::Escaped(escaped));
    }

    let entry = if let Some(pointer) = text.strip_prefix("#/") {
        pointer
            .split_once('/')
            .and_then(|(collection, index)| Some((collection, index.parse::<usize>().ok()?)))
    } else if let Some(index) = text.strip_prefix("$$$") {
        index.parse::<usize>().ok().map(|index| ("accessors", index))
    } else {
        return None;
    };

    Some(entry.map_or(Pointer::Malformed, |(collection, index)| {
        Pointer::Entry(collection, index)
    }))
}

/// Returns the replacement for a pointer string, or [`None`] to keep the
/// string as is.
fn resolve_pointer<'a>(
    text: &str,
    snapshot: &UnpackedNode<'a>,
    views: &[TypedView<'a>],
    active: &mut Vec<(String, usize)>,
) -> Option<UnpackedNode<'a>> {
    let (collection, index) = match parse_pointer(text)? {
        Pointer::Escaped(rest) => return Some(UnpackedNode::String(format!("#/{rest}"))),
        Pointer::Entry(collection, index) => (collection, index),
        Pointer::Malformed => {
            warn!("Unresolved JSON pointer {text:?}");
            return None;
        }
    };

    if collection == "bufferViews" {
        let view = views.get(index).copied().map(UnpackedNode::View);
        if view.is_none() {
            warn!("Unresolved JSON pointer {text:?}");
        }
        return view;
    }

    if active
        .iter()
        .any(|(entry, entry_index)| entry == collection && *entry_index == index)
    {
        warn!("Cyclic JSON pointer {text:?} left unresolved");
        return None;
    }

    let Some(mut target) = snapshot
        .get(collection)
        .and_then(|entries| entries.at(index))
        .cloned()
    else {
        warn!("Unresolved JSON pointer {text:?}");
        return None;
    };

    active.push((String::from(collection), index));
    resolve_pointers(&mut target, snapshot, views, active);
    active.pop();
    Some(target)
}
