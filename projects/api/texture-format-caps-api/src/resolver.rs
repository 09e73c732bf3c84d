//! Format translation and capability checks.
//!
//! Every function accepts anything convertible into a [`FormatQuery`]: an
//! identifier string, a [`TextureFormat`](texture_format_caps_common::TextureFormat)
//! or a raw GL token.
//!
//! Unknown identifiers are an error for [`to_native_token`] and plain `false`
//! for every capability check.

use crate::context::CapabilityContext;
use crate::error::{FormatError, FormatResult};
use crate::probe::FeatureProbe;
use crate::query::{FormatQuery, Resolved};
use alloc::string::ToString;
use log::debug;
use texture_format_caps_common::extensions::{
    OES_TEXTURE_FLOAT_LINEAR, OES_TEXTURE_HALF_FLOAT_LINEAR,
};
use texture_format_caps_common::{gl, GLenum, GenerationSupport, Support};

/// Translates a format to its native GL internal format token.
///
/// Raw tokens are returned unchanged.
///
/// # Errors
///
/// [`FormatError::UnsupportedFormat`] if the identifier is unknown or the
/// format has no native GL equivalent (e.g. `bgra8unorm`).
pub fn to_native_token<'a>(format: impl Into<FormatQuery<'a>>) -> FormatResult<GLenum> {
    let query = format.into();
    if let FormatQuery::Token(token) = query {
        return Ok(token);
    }

    let native_token = match query.resolve() {
        Resolved::Descriptor(descriptor) => descriptor.native_token,
        _ => None,
    };
    native_token.ok_or_else(|| {
        debug!("No native token for texture format {query}");
        FormatError::UnsupportedFormat(query.to_string())
    })
}

/// Returns `true` if the format can be used as a texture on this context.
///
/// Formats gated by an extension are supported exactly when the extension is.
/// Otherwise the generation flags decide: modern contexts use the modern flag
/// and fall back to the legacy one, legacy contexts only consult the legacy
/// flag. A format without any flag is supported everywhere.
pub fn is_supported<'a, C: CapabilityContext>(
    probe: &FeatureProbe<C>,
    format: impl Into<FormatQuery<'a>>,
) -> bool {
    match format.into().resolve() {
        Resolved::Descriptor(descriptor) => match descriptor.required_extension {
            Some(extension) => probe.probe_extension(extension),
            None => check_generation_support(probe, &descriptor.support),
        },
        Resolved::Legacy(info) => check_generation_support(probe, &info.support),
        Resolved::Unknown => false,
    }
}

/// Returns `true` if the format supports linear filtering.
///
/// Always `false` for unsupported formats. 32-bit float formats need
/// `OES_texture_float_linear` and 16-bit float formats need
/// `OES_texture_half_float_linear`; for raw tokens the first accepted pixel
/// data type decides which.
pub fn is_linear_filtering_supported<'a, C: CapabilityContext>(
    probe: &FeatureProbe<C>,
    format: impl Into<FormatQuery<'a>>,
) -> bool {
    let query = format.into();
    if !is_supported(probe, query) {
        return false;
    }

    match query.resolve() {
        Resolved::Descriptor(descriptor) => {
            let id = descriptor.id();
            if id.ends_with("32float") {
                probe.probe_extension(OES_TEXTURE_FLOAT_LINEAR)
            } else if id.ends_with("16float") {
                probe.probe_extension(OES_TEXTURE_HALF_FLOAT_LINEAR)
            } else {
                true
            }
        }
        Resolved::Legacy(info) => match info.types.first().copied() {
            Some(gl::FLOAT) => probe.probe_extension(OES_TEXTURE_FLOAT_LINEAR),
            Some(gl::HALF_FLOAT) => probe.probe_extension(OES_TEXTURE_HALF_FLOAT_LINEAR),
            _ => true,
        },
        Resolved::Unknown => false,
    }
}

/// Returns `true` if the format can be rendered to.
///
/// Raw tokens are never reported as renderable, even when supported.
pub fn is_renderable<'a, C: CapabilityContext>(
    probe: &FeatureProbe<C>,
    format: impl Into<FormatQuery<'a>>,
) -> bool {
    let query = format.into();
    if !is_supported(probe, query) {
        return false;
    }
    !matches!(query, FormatQuery::Token(_))
}

fn check_generation_support<C: CapabilityContext>(
    probe: &FeatureProbe<C>,
    support: &GenerationSupport,
) -> bool {
    if support.is_ungated() {
        return true;
    }

    match support.for_generation(probe.is_modern_generation()) {
        Some(Support::Always) => true,
        Some(Support::Extension(extension)) => probe.probe_extension(extension),
        Some(Support::Never) | None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use texture_format_caps_common::extensions::*;
    use texture_format_caps_common::TextureFormat;

    fn legacy(extensions: &'static [&'static str]) -> FeatureProbe<MockContext> {
        FeatureProbe::new(MockContext::legacy(extensions))
    }

    fn modern(extensions: &'static [&'static str]) -> FeatureProbe<MockContext> {
        FeatureProbe::new(MockContext::modern(extensions))
    }

    #[rstest]
    #[case("r8unorm", gl::R8)]
    #[case("rgba8unorm-srgb", gl::SRGB8_ALPHA8)]
    #[case("unsized-rgba", gl::RGBA)]
    #[case("bc3-rgba-unorm", gl::COMPRESSED_RGBA_S3TC_DXT5_EXT)]
    #[case("rbg8norm-webgl", gl::RGB8)]
    #[case("rgba4norm-webgl", gl::RGBA4)]
    #[case("rgb10a2unorm-webgl", gl::RGB10_A2UI)]
    #[case("etc1-rbg-unorm-webgl", gl::COMPRESSED_RGB_ETC1_WEBGL)]
    fn to_native_token_translates_identifiers(#[case] id: &str, #[case] expected: GLenum) {
        assert_eq!(to_native_token(id), Ok(expected));
    }

    #[rstest]
    #[case("rgba8unorm-bogus")]
    #[case("bgra8unorm")]
    #[case("bgra8unorm-srgb")]
    #[case("")]
    fn to_native_token_rejects_unmapped(#[case] id: &str) {
        assert_eq!(
            to_native_token(id),
            Err(FormatError::UnsupportedFormat(id.to_string()))
        );
    }

    #[test]
    fn to_native_token_passes_tokens_through() {
        assert_eq!(to_native_token(0xDEAD_u32), Ok(0xDEAD));
        assert_eq!(to_native_token(TextureFormat::Rgba32Float), Ok(gl::RGBA32F));
    }

    #[rstest]
    #[case("r8unorm", false)]
    #[case("rgba4unorm-webgl", true)]
    #[case("rgba4norm-webgl", true)]
    #[case("rgb565norm-webgl", true)]
    #[case("stencil8", true)]
    #[case("unsized-rgb", true)]
    #[case("rgba8unorm-srgb", false)]
    #[case("bgra8unorm", false)]
    #[case("rgb9e5ufloat", false)]
    fn legacy_context_without_extensions(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(is_supported(&legacy(&[]), id), expected);
    }

    #[rstest]
    #[case("r8unorm", true)]
    #[case("rgba8unorm-srgb", true)]
    #[case("r16float", false)]
    #[case("rg16unorm-webgl", false)]
    #[case("bgra8unorm", false)]
    #[case("rgb9e5ufloat", true)]
    fn modern_context_without_extensions(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(is_supported(&modern(&[]), id), expected);
    }

    #[test]
    fn legacy_srgb_needs_extension() {
        assert!(is_supported(&legacy(&[EXT_SRGB]), "rgba8unorm-srgb"));
        assert!(!is_supported(&legacy(&[]), "rgba8unorm-srgb"));
    }

    #[test]
    fn modern_flag_takes_precedence_over_legacy() {
        let probe = modern(&[]);
        assert!(is_supported(&probe, TextureFormat::Rgba8UnormSrgb));
        assert_eq!(probe.context().probe_count(EXT_SRGB), 0);
    }

    #[test]
    fn required_extension_decides_compressed_support() {
        assert!(is_supported(&legacy(&[WEBGL_COMPRESSED_TEXTURE_ASTC]), "astc-8x8-unorm"));
        assert!(!is_supported(&modern(&[]), "astc-8x8-unorm"));
        assert!(!is_supported(&modern(&[WEBGL_COMPRESSED_TEXTURE_S3TC]), "bc7-rgba-unorm"));
    }

    #[rstest]
    #[case(gl::RGBA, false, true)]
    #[case(gl::LUMINANCE, false, true)]
    #[case(gl::RGBA32F, false, false)]
    #[case(gl::RGBA32F, true, true)]
    #[case(gl::RGBA8, true, false)]
    #[case(0, true, false)]
    fn raw_tokens_use_legacy_table(
        #[case] token: GLenum,
        #[case] modern_context: bool,
        #[case] expected: bool,
    ) {
        let probe = if modern_context { modern(&[]) } else { legacy(&[]) };
        assert_eq!(is_supported(&probe, token), expected);
    }

    #[test]
    fn unknown_identifiers_are_never_supported() {
        let probe = modern(&[EXT_COLOR_BUFFER_FLOAT, OES_TEXTURE_FLOAT_LINEAR]);
        assert!(!is_supported(&probe, "rgba64float"));
        assert!(!is_linear_filtering_supported(&probe, "rgba64float"));
        assert!(!is_renderable(&probe, "rgba64float"));
        assert_eq!(probe.context().total_probes(), 0);
    }

    #[rstest]
    #[case(&[EXT_COLOR_BUFFER_FLOAT], "rgba32float", false)]
    #[case(&[EXT_COLOR_BUFFER_FLOAT, OES_TEXTURE_FLOAT_LINEAR], "rgba32float", true)]
    #[case(&[EXT_COLOR_BUFFER_FLOAT], "rgba16float", false)]
    #[case(&[EXT_COLOR_BUFFER_FLOAT, OES_TEXTURE_HALF_FLOAT_LINEAR], "rgba16float", true)]
    #[case(&[OES_TEXTURE_FLOAT_LINEAR], "rgba32float", false)]
    #[case(&[], "rgba8unorm", true)]
    #[case(&[], "depth32float", false)]
    #[case(&[OES_TEXTURE_FLOAT_LINEAR], "depth32float", true)]
    fn linear_filtering(
        #[case] extensions: &'static [&'static str],
        #[case] id: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(is_linear_filtering_supported(&modern(extensions), id), expected);
    }

    #[rstest]
    #[case(&[], false)]
    #[case(&[OES_TEXTURE_FLOAT_LINEAR], true)]
    fn linear_filtering_for_float_tokens(
        #[case] extensions: &'static [&'static str],
        #[case] expected: bool,
    ) {
        assert_eq!(is_linear_filtering_supported(&modern(extensions), gl::RG32F), expected);
        assert!(is_linear_filtering_supported(&modern(extensions), gl::RGBA));
    }

    #[test]
    fn renderable_excludes_raw_tokens() {
        let probe = modern(&[]);
        assert!(is_supported(&probe, gl::RGBA));
        assert!(!is_renderable(&probe, gl::RGBA));
        assert!(is_renderable(&probe, "rgba8unorm"));
        assert!(!is_renderable(&probe, "bgra8unorm"));
        assert!(!is_renderable(&legacy(&[]), "r8unorm"));
    }
}
