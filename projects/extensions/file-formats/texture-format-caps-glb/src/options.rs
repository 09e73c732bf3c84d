//! Parsing options for GLB containers.

/// Options controlling how strictly a GLB container is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbOptions {
    /// Reject chunks whose length is not a multiple of 4.
    pub strict_chunk_alignment: bool,
    /// Replace `#/...` and `$$$N` pointer strings with the values they reference.
    pub resolve_json_pointers: bool,
}

impl Default for GlbOptions {
    fn default() -> Self {
        Self {
            strict_chunk_alignment: true,
            resolve_json_pointers: true,
        }
    }
}

impl GlbOptions {
    /// Create a builder starting from the defaults.
    pub fn builder() -> GlbOptionsBuilder {
        GlbOptionsBuilder::new()
    }
}

/// Builder for [`GlbOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GlbOptionsBuilder {
    strict_chunk_alignment: Option<bool>,
    resolve_json_pointers: Option<bool>,
}

impl GlbOptionsBuilder {
    /// Create a new options builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether unaligned chunk lengths are rejected.
    pub fn strict_chunk_alignment(mut self, strict: bool) -> Self {
        self.strict_chunk_alignment = Some(strict);
        self
    }

    /// Set whether JSON pointer strings are resolved.
    pub fn resolve_json_pointers(mut self, resolve: bool) -> Self {
        self.resolve_json_pointers = Some(resolve);
        self
    }

    /// Build the options using the configured values or defaults.
    pub fn build(self) -> GlbOptions {
        let default = GlbOptions::default();
        GlbOptions {
            strict_chunk_alignment: self
                .strict_chunk_alignment
                .unwrap_or(default.strict_chunk_alignment),
            resolve_json_pointers: self
                .resolve_json_pointers
                .unwrap_or(default.resolve_json_pointers),
        }
    }
}
