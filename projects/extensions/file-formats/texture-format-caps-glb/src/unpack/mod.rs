//! Materialization of binary views referenced by the GLB metadata.
//!
//! Unpacking happens in two passes:
//!
//! 1. [`unpack_buffer_views`] turns every `bufferViews` entry into a
//!    [`TypedView`] borrowing the binary chunk.
//! 2. [`unpack_json_arrays`] walks the metadata and replaces every accessor
//!    with an [`ElementArray`] over those views, and resolves JSON pointers.
//!
//! Nothing is copied; all views borrow the input buffer.

/// Accessor component and element types.
pub mod component;

/// First pass: buffer views.
pub mod buffer_views;

/// Second pass: accessors and JSON pointers.
pub mod json_arrays;

pub use buffer_views::unpack_buffer_views;
pub use component::{Component, ComponentType, ElementType};
pub use json_arrays::unpack_json_arrays;

use crate::error::{UnpackError, UnpackResult};
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde_json::{Map, Number, Value};

/// A `bufferViews` entry resolved against the binary chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedView<'a> {
    /// Index into `bufferViews`.
    pub index: usize,
    /// Offset of the view within the binary chunk.
    pub byte_offset: usize,
    /// Distance between element starts, if the view is interleaved.
    pub byte_stride: Option<usize>,
    /// Component type tag of the view, [`ComponentType::UnsignedByte`] unless given.
    pub component_type: ComponentType,
    /// The bytes covered by the view.
    pub data: &'a [u8],
}

impl<'a> TypedView<'a> {
    /// Length of the view in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the view covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads the whole view as consecutive little-endian `T` values.
    ///
    /// Returns [`None`] if `T` does not match [`TypedView::component_type`].
    /// Trailing bytes that do not fill a whole value are skipped.
    pub fn values<T: Component>(&self) -> Option<impl Iterator<Item = T> + 'a> {
        if T::COMPONENT_TYPE != self.component_type {
            return None;
        }
        Some(
            self.data
                .chunks_exact(T::COMPONENT_TYPE.size())
                .filter_map(T::read_le),
        )
    }
}

/// An accessor: `count` fixed size elements read from a [`TypedView`].
///
/// Elements are borrowed in their original order. Interleaved views are
/// honoured through [`ElementArray::stride`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementArray<'a> {
    /// Index of the buffer view the elements are read from.
    pub buffer_view: usize,
    /// Type of each component.
    pub component_type: ComponentType,
    /// Shape of each element.
    pub element_type: ElementType,
    /// Integer components are normalized to `[0, 1]` or `[-1, 1]`.
    pub normalized: bool,
    count: usize,
    stride: usize,
    data: &'a [u8],
}

impl<'a> ElementArray<'a> {
    /// Number of elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Size of one element in bytes.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.component_type.size() * self.element_type.components()
    }

    /// Distance in bytes between the starts of two consecutive elements.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The bytes of element `index`.
    pub fn element(&self, index: usize) -> Option<&'a [u8]> {
        if index >= self.count {
            return None;
        }
        let start = index * self.stride;
        self.data.get(start..start + self.element_size())
    }

    /// Iterates over the bytes of every element, in order.
    pub fn elements(&self) -> impl ExactSizeIterator<Item = &'a [u8]> {
        let array = *self;
        (0..array.count).map(move |index| {
            let start = index * array.stride;
            &array.data[start..start + array.element_size()]
        })
    }

    /// Component `component` of element `index`, decoded as [`f64`].
    ///
    /// Normalized integer accessors are mapped to `[0, 1]` or `[-1, 1]`.
    pub fn component_f64(&self, index: usize, component: usize) -> Option<f64> {
        if component >= self.element_type.components() {
            return None;
        }
        let size = self.component_type.size();
        let element = self.element(index)?;
        self.component_type
            .decode_f64(element.get(component * size..)?, self.normalized)
    }

    /// Every component of every element, in order, read as `T`.
    ///
    /// Yields `count * components` values. Returns [`None`] if `T` does not
    /// match [`ElementArray::component_type`].
    pub fn values<T: Component>(&self) -> Option<impl Iterator<Item = T> + 'a> {
        if T::COMPONENT_TYPE != self.component_type {
            return None;
        }
        Some(self.elements().flat_map(|element| {
            element
                .chunks_exact(T::COMPONENT_TYPE.size())
                .filter_map(T::read_le)
        }))
    }

    /// All bytes from the start of the first element to the end of the last,
    /// including any interleaved data in between.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }
}

/// An image whose encoded bytes live in a buffer view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView<'a> {
    /// Index of the buffer view holding the image.
    pub buffer_view: usize,
    /// Declared MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// The encoded image.
    pub data: &'a [u8],
}

/// The metadata document with binary references materialized.
#[derive(Debug, Clone, PartialEq)]
pub enum UnpackedNode<'a> {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number.
    Number(Number),
    /// JSON string that is not a resolvable pointer.
    String(String),
    /// JSON array.
    Array(Vec<UnpackedNode<'a>>),
    /// JSON object.
    Object(BTreeMap<String, UnpackedNode<'a>>),
    /// A buffer view, from a `#/bufferViews/N` pointer.
    View(TypedView<'a>),
    /// An accessor.
    Elements(ElementArray<'a>),
    /// An image stored in a buffer view.
    Image(ImageView<'a>),
}

impl<'a> UnpackedNode<'a> {
    /// Member `key` of an object node.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(members) => members.get(key),
            _ => None,
        }
    }

    /// Item `index` of an array node.
    pub fn at(&self, index: usize) -> Option<&Self> {
        self.as_array().and_then(|items| items.get(index))
    }

    /// The items of an array node.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The text of a string node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// The value of a number node, if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(number) => number.as_u64(),
            _ => None,
        }
    }

    /// The accessor of an elements node.
    pub fn as_elements(&self) -> Option<&ElementArray<'a>> {
        match self {
            Self::Elements(elements) => Some(elements),
            _ => None,
        }
    }

    /// The view of a view node.
    pub fn as_view(&self) -> Option<&TypedView<'a>> {
        match self {
            Self::View(view) => Some(view),
            _ => None,
        }
    }

    /// The image of an image node.
    pub fn as_image(&self) -> Option<&ImageView<'a>> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }
}

pub(crate) fn invalid_field(path: &str, field: &str, reason: &'static str) -> UnpackError {
    UnpackError::InvalidDescriptor {
        path: format!("{path}/{field}"),
        reason,
    }
}

/// Reads an optional non-negative integer member.
pub(crate) fn optional_usize(
    object: &Map<String, Value>,
    field: &str,
    path: &str,
) -> UnpackResult<Option<usize>> {
    match object.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|value| usize::try_from(value).ok())
            .map(Some)
            .ok_or_else(|| invalid_field(path, field, "expected a non-negative integer")),
    }
}

/// Reads a required non-negative integer member.
pub(crate) fn required_usize(
    object: &Map<String, Value>,
    field: &str,
    path: &str,
) -> UnpackResult<usize> {
    optional_usize(object, field, path)?
        .ok_or_else(|| invalid_field(path, field, "missing required field"))
}

/// Reads an optional component type tag.
pub(crate) fn optional_component_type(
    object: &Map<String, Value>,
    path: &str,
) -> UnpackResult<Option<ComponentType>> {
    match object.get("componentType") {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|tag| u32::try_from(tag).ok())
            .and_then(ComponentType::from_gl)
            .map(Some)
            .ok_or_else(|| invalid_field(path, "componentType", "unknown component type")),
    }
}
