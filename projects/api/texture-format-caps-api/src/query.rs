//! Inputs accepted by the [`resolver`](crate::resolver) functions.

use texture_format_caps_common::{
    catalog, legacy_formats, FormatDescriptor, GLenum, LegacyFormatInfo, TextureFormat,
};

/// A texture format as a caller may name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatQuery<'a> {
    /// An identifier string such as `"rgba8unorm"`. May be unknown.
    Named(&'a str),
    /// A format from the catalog.
    Format(TextureFormat),
    /// A raw GL internal format token.
    Token(GLenum),
}

impl<'a> From<&'a str> for FormatQuery<'a> {
    fn from(id: &'a str) -> Self {
        Self::Named(id)
    }
}

impl From<TextureFormat> for FormatQuery<'_> {
    fn from(format: TextureFormat) -> Self {
        Self::Format(format)
    }
}

impl From<GLenum> for FormatQuery<'_> {
    fn from(token: GLenum) -> Self {
        Self::Token(token)
    }
}

/// What a [`FormatQuery`] refers to.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Resolved {
    Descriptor(&'static FormatDescriptor),
    Legacy(&'static LegacyFormatInfo),
    Unknown,
}

impl FormatQuery<'_> {
    pub(crate) fn resolve(self) -> Resolved {
        let found = match self {
            Self::Named(id) => catalog::lookup_id(id).map(Resolved::Descriptor),
            Self::Format(format) => Some(Resolved::Descriptor(catalog::lookup(format))),
            Self::Token(token) => legacy_formats::lookup_token(token).map(Resolved::Legacy),
        };
        found.unwrap_or(Resolved::Unknown)
    }
}

impl core::fmt::Display for FormatQuery<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Named(id) => f.write_str(id),
            Self::Format(format) => f.write_str(format.as_str()),
            Self::Token(token) => write!(f, "{token:#06X}"),
        }
    }
}
