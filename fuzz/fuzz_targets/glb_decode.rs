#![no_main]

// Feeds arbitrary bytes through the full GLB pipeline. Every view handed back
// must lie inside the input buffer.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texture_format_caps_glb::{likely_glb, parse_glb, GlbOptions};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct GlbInput {
    pub strict_chunk_alignment: bool,
    pub resolve_json_pointers: bool,
    pub data: Vec<u8>,
}

fuzz_target!(|input: GlbInput| {
    let options = GlbOptions::builder()
        .strict_chunk_alignment(input.strict_chunk_alignment)
        .resolve_json_pointers(input.resolve_json_pointers)
        .build();

    let Ok(asset) = parse_glb(&input.data, &options) else {
        return;
    };

    assert!(likely_glb(&input.data), "Decoded a container that fails the quick check");
    assert!(asset.container.byte_length <= input.data.len());

    let input_range = input.data.as_ptr_range();
    for view in &asset.buffer_views {
        let view_range = view.data.as_ptr_range();
        assert!(view_range.start >= input_range.start && view_range.end <= input_range.end);
    }
});
