//! One-call parsing of GLB assets.

use crate::error::GlbResult;
use crate::glb::decode::{decode_glb, GlbContainer};
use crate::options::GlbOptions;
use crate::unpack::{unpack_buffer_views, unpack_json_arrays, TypedView, UnpackedNode};
use alloc::vec::Vec;
use log::debug;

/// A fully parsed GLB asset.
///
/// All views borrow the input buffer passed to [`parse_glb`].
#[derive(Debug, Clone, PartialEq)]
pub struct GlbAsset<'a> {
    /// The decoded container, with the raw metadata.
    pub container: GlbContainer<'a>,
    /// Every `bufferViews` entry, in order.
    pub buffer_views: Vec<TypedView<'a>>,
    /// The metadata with accessors, images and pointers materialized.
    pub document: UnpackedNode<'a>,
}

/// Decodes a GLB container and unpacks its buffer views and accessors.
///
/// Equivalent to [`decode_glb`], followed by [`unpack_buffer_views`] over the
/// binary chunk and [`unpack_json_arrays`] over the resulting views.
///
/// # Errors
///
/// Any [`GlbError`] raised by [`decode_glb`], or [`GlbError::Unpack`] if a
/// view or accessor is invalid.
///
/// [`GlbError`]: crate::error::GlbError
/// [`GlbError::Unpack`]: crate::error::GlbError::Unpack
pub fn parse_glb<'a>(data: &'a [u8], options: &GlbOptions) -> GlbResult<GlbAsset<'a>> {
    let container = decode_glb(data, options)?;
    let buffer_views = unpack_buffer_views(&container.metadata, container.binary_data())?;
    let document = unpack_json_arrays(&container.metadata, &buffer_views, options)?;

    debug!(
        "Parsed GLB asset: {} bytes, {} buffer views",
        container.byte_length,
        buffer_views.len()
    );

    Ok(GlbAsset {
        container,
        buffer_views,
        document,
    })
}
