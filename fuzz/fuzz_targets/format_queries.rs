#![no_main]

// Checks the capability implications for arbitrary contexts and identifiers:
// filtering and rendering imply support, and each extension is probed once.

use libfuzzer_sys::{arbitrary, fuzz_target};
use std::cell::RefCell;
use std::collections::BTreeSet;
use texture_format_caps_api::{resolver, CapabilityContext, FeatureProbe, FormatQuery};
use texture_format_caps_common::TextureFormat;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct QueryInput {
    pub modern: bool,
    pub extension_mask: u32,
    pub identifier: String,
    pub format_index: u8,
    pub token: u32,
}

struct FuzzContext {
    modern: bool,
    extension_mask: u32,
    probed: RefCell<BTreeSet<String>>,
}

impl CapabilityContext for FuzzContext {
    fn is_modern_generation(&self) -> bool {
        self.modern
    }

    fn probe_extension(&self, extension: &str) -> bool {
        assert!(
            self.probed.borrow_mut().insert(extension.to_string()),
            "Extension {extension} probed twice"
        );
        let hash = extension.bytes().fold(0u32, |acc, byte| acc.wrapping_add(byte as u32));
        self.extension_mask & (1 << (hash % 32)) != 0
    }
}

fuzz_target!(|input: QueryInput| {
    let probe = FeatureProbe::new(FuzzContext {
        modern: input.modern,
        extension_mask: input.extension_mask,
        probed: RefCell::new(BTreeSet::new()),
    });

    let formats = TextureFormat::all_values();
    let format = formats[input.format_index as usize % formats.len()];

    let queries: [FormatQuery; 3] = [
        input.identifier.as_str().into(),
        format.into(),
        input.token.into(),
    ];
    for query in queries {
        let supported = resolver::is_supported(&probe, query);
        if resolver::is_linear_filtering_supported(&probe, query) {
            assert!(supported, "{query} filters linearly but is unsupported");
        }
        if resolver::is_renderable(&probe, query) {
            assert!(supported, "{query} renders but is unsupported");
        }
    }

    let _ = resolver::to_native_token(input.identifier.as_str());
});
