//! API-neutral texture format identifiers.

use derive_enum_all_values::AllValues;

/// Declares [`TextureFormat`] together with its identifier strings, so the enum,
/// [`TextureFormat::as_str`] and [`TextureFormat::from_id`] cannot drift apart.
///
/// Extra literals after `|` are accepted by `from_id` but never produced by `as_str`.
macro_rules! texture_formats {
    ($( $(#[$meta:meta])* $variant:ident = $id:literal $(| $alias:literal)*, )*) => {
        /// An abstract texture format, named the way WebGPU names formats.
        ///
        /// Identifiers suffixed with `-webgl` only exist on GL backends.
        ///
        /// The discriminant doubles as the index into the static format table,
        /// see [`crate::catalog`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AllValues)]
        #[repr(u8)]
        pub enum TextureFormat {
            $( $(#[$meta])* $variant, )*
        }

        impl TextureFormat {
            /// Returns the identifier string of this format, e.g. `"rgba8unorm"`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $id, )*
                }
            }

            /// Parses an identifier string.
            ///
            /// Legacy spellings of a few identifiers are accepted as well.
            /// Returns [`None`] for identifiers that are not part of the catalog.
            pub fn from_id(id: &str) -> Option<Self> {
                match id {
                    $( $id $(| $alias)* => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

texture_formats! {
    // 8-bit formats
    R8Unorm = "r8unorm",
    R8Snorm = "r8snorm",
    R8Uint = "r8uint",
    R8Sint = "r8sint",

    // 16-bit formats
    R16Uint = "r16uint",
    R16Sint = "r16sint",
    R16Float = "r16float",
    R16UnormWebgl = "r16unorm-webgl",
    R16SnormWebgl = "r16snorm-webgl",
    Rg8Unorm = "rg8unorm",
    Rg8Snorm = "rg8snorm",
    Rg8Uint = "rg8uint",
    Rg8Sint = "rg8sint",

    // Packed 16-bit formats
    Rgba4UnormWebgl = "rgba4unorm-webgl" | "rgba4norm-webgl",
    Rgb565UnormWebgl = "rgb565unorm-webgl" | "rgb565norm-webgl",
    Rgb5a1UnormWebgl = "rgb5a1unorm-webgl" | "rgb5a1norm-webgl",

    // 24-bit formats
    Rgb8UnormWebgl = "rgb8unorm-webgl" | "rbg8norm-webgl",

    // 32-bit formats
    R32Uint = "r32uint",
    R32Sint = "r32sint",
    R32Float = "r32float",
    Rg16Uint = "rg16uint",
    Rg16Sint = "rg16sint",
    Rg16Float = "rg16float",
    Rg16UnormWebgl = "rg16unorm-webgl",
    Rg16SnormWebgl = "rg16snorm-webgl",
    Rgba8Unorm = "rgba8unorm",
    Rgba8UnormSrgb = "rgba8unorm-srgb",
    Rgba8Snorm = "rgba8snorm",
    Rgba8Uint = "rgba8uint",
    Rgba8Sint = "rgba8sint",
    Bgra8Unorm = "bgra8unorm",
    Bgra8UnormSrgb = "bgra8unorm-srgb",

    /// Unsized `RGB`; precision is left to the driver.
    UnsizedRgb = "unsized-rgb",
    /// Unsized `RGBA`; precision is left to the driver.
    UnsizedRgba = "unsized-rgba",

    // Packed 32-bit formats
    Rgb9e5Ufloat = "rgb9e5ufloat",
    Rg11b10Ufloat = "rg11b10ufloat",
    Rgb10a2Unorm = "rgb10a2unorm",
    Rgb10a2UintWebgl = "rgb10a2uint-webgl" | "rgb10a2unorm-webgl",

    // 48-bit formats
    Rgb16UnormWebgl = "rgb16unorm-webgl",
    Rgb16SnormWebgl = "rgb16snorm-webgl",

    // 64-bit formats
    Rg32Uint = "rg32uint",
    Rg32Sint = "rg32sint",
    Rg32Float = "rg32float",
    Rgba16Uint = "rgba16uint",
    Rgba16Sint = "rgba16sint",
    Rgba16Float = "rgba16float",
    Rgba16UnormWebgl = "rgba16unorm-webgl",
    Rgba16SnormWebgl = "rgba16snorm-webgl",

    // 96-bit formats
    Rgb32FloatWebgl = "rgb32float-webgl",

    // 128-bit formats
    Rgba32Uint = "rgba32uint",
    Rgba32Sint = "rgba32sint",
    Rgba32Float = "rgba32float",

    // Depth and stencil formats
    Stencil8 = "stencil8",
    Depth16Unorm = "depth16unorm",
    Depth24Plus = "depth24plus",
    Depth24PlusStencil8 = "depth24plus-stencil8",
    Depth32Float = "depth32float",
    Depth24UnormStencil8 = "depth24unorm-stencil8",
    Depth32FloatStencil8 = "depth32float-stencil8",

    // BC compressed formats
    Bc1RgbUnormWebgl = "bc1-rgb-unorm-webgl",
    Bc1RgbUnormSrgbWebgl = "bc1-rgb-unorm-srgb-webgl",
    Bc1RgbaUnorm = "bc1-rgba-unorm",
    Bc1RgbaUnormSrgb = "bc1-rgba-unorm-srgb",
    Bc2RgbaUnorm = "bc2-rgba-unorm",
    Bc2RgbaUnormSrgb = "bc2-rgba-unorm-srgb",
    Bc3RgbaUnorm = "bc3-rgba-unorm",
    Bc3RgbaUnormSrgb = "bc3-rgba-unorm-srgb",
    Bc4RUnorm = "bc4-r-unorm",
    Bc4RSnorm = "bc4-r-snorm",
    Bc5RgUnorm = "bc5-rg-unorm",
    Bc5RgSnorm = "bc5-rg-snorm",
    Bc6hRgbUfloat = "bc6h-rgb-ufloat",
    Bc6hRgbFloat = "bc6h-rgb-float",
    Bc7RgbaUnorm = "bc7-rgba-unorm",
    Bc7RgbaUnormSrgb = "bc7-rgba-unorm-srgb",

    // ETC2 / EAC compressed formats
    Etc2Rgb8Unorm = "etc2-rgb8unorm",
    Etc2Rgb8UnormSrgb = "etc2-rgb8unorm-srgb",
    Etc2Rgb8a1Unorm = "etc2-rgb8a1unorm",
    Etc2Rgb8a1UnormSrgb = "etc2-rgb8a1unorm-srgb",
    Etc2Rgba8Unorm = "etc2-rgba8unorm",
    Etc2Rgba8UnormSrgb = "etc2-rgba8unorm-srgb",
    EacR11Unorm = "eac-r11unorm",
    EacR11Snorm = "eac-r11snorm",
    EacRg11Unorm = "eac-rg11unorm",
    EacRg11Snorm = "eac-rg11snorm",

    // ASTC compressed formats
    Astc4x4Unorm = "astc-4x4-unorm",
    Astc4x4UnormSrgb = "astc-4x4-unorm-srgb",
    Astc5x4Unorm = "astc-5x4-unorm",
    Astc5x4UnormSrgb = "astc-5x4-unorm-srgb",
    Astc5x5Unorm = "astc-5x5-unorm",
    Astc5x5UnormSrgb = "astc-5x5-unorm-srgb",
    Astc6x5Unorm = "astc-6x5-unorm",
    Astc6x5UnormSrgb = "astc-6x5-unorm-srgb",
    Astc6x6Unorm = "astc-6x6-unorm",
    Astc6x6UnormSrgb = "astc-6x6-unorm-srgb",
    Astc8x5Unorm = "astc-8x5-unorm",
    Astc8x5UnormSrgb = "astc-8x5-unorm-srgb",
    Astc8x6Unorm = "astc-8x6-unorm",
    Astc8x6UnormSrgb = "astc-8x6-unorm-srgb",
    Astc8x8Unorm = "astc-8x8-unorm",
    Astc8x8UnormSrgb = "astc-8x8-unorm-srgb",
    Astc10x5Unorm = "astc-10x5-unorm",
    Astc10x5UnormSrgb = "astc-10x5-unorm-srgb",
    Astc10x6Unorm = "astc-10x6-unorm",
    Astc10x6UnormSrgb = "astc-10x6-unorm-srgb",
    Astc10x8Unorm = "astc-10x8-unorm",
    Astc10x8UnormSrgb = "astc-10x8-unorm-srgb",
    Astc10x10Unorm = "astc-10x10-unorm",
    Astc10x10UnormSrgb = "astc-10x10-unorm-srgb",
    Astc12x10Unorm = "astc-12x10-unorm",
    Astc12x10UnormSrgb = "astc-12x10-unorm-srgb",
    Astc12x12Unorm = "astc-12x12-unorm",
    Astc12x12UnormSrgb = "astc-12x12-unorm-srgb",

    // PVRTC compressed formats
    PvrtcRgb4UnormWebgl = "pvrtc-rgb4unorm-webgl",
    PvrtcRgba4UnormWebgl = "pvrtc-rgba4unorm-webgl",
    PvrtcRgb2UnormWebgl = "pvrtc-rgb2unorm-webgl" | "pvrtc-rbg2unorm-webgl",
    PvrtcRgba2UnormWebgl = "pvrtc-rgba2unorm-webgl",

    // ETC1 compressed formats
    Etc1RgbUnormWebgl = "etc1-rgb-unorm-webgl" | "etc1-rbg-unorm-webgl",

    // ATC compressed formats
    AtcRgbUnormWebgl = "atc-rgb-unorm-webgl",
    AtcRgbaUnormWebgl = "atc-rgba-unorm-webgl",
    AtcRgbaiUnormWebgl = "atc-rgbai-unorm-webgl",
}

impl TextureFormat {
    /// Number of formats in the catalog.
    pub const COUNT: usize = Self::all_values().len();
}

impl core::fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for TextureFormat {
    type Err = UnknownTextureFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or(UnknownTextureFormat)
    }
}

/// Returned by [`TextureFormat::from_str`](core::str::FromStr::from_str) for
/// identifiers outside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownTextureFormat;

impl core::fmt::Display for UnknownTextureFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown texture format identifier")
    }
}
