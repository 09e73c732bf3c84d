//! Accessor component and element types.

use derive_enum_all_values::AllValues;
use texture_format_caps_common::gl::{self, GLenum};

/// Type of a single component, tagged with its GL enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ComponentType {
    /// `i8`
    Byte,
    /// `u8`
    UnsignedByte,
    /// `i16`
    Short,
    /// `u16`
    UnsignedShort,
    /// `i32`
    Int,
    /// `u32`
    UnsignedInt,
    /// `f32`
    Float,
}

impl ComponentType {
    /// Parses a GL enum tag (`5120..=5126`).
    pub const fn from_gl(tag: GLenum) -> Option<Self> {
        match tag {
            gl::BYTE => Some(Self::Byte),
            gl::UNSIGNED_BYTE => Some(Self::UnsignedByte),
            gl::SHORT => Some(Self::Short),
            gl::UNSIGNED_SHORT => Some(Self::UnsignedShort),
            gl::INT => Some(Self::Int),
            gl::UNSIGNED_INT => Some(Self::UnsignedInt),
            gl::FLOAT => Some(Self::Float),
            _ => None,
        }
    }

    /// The GL enum tag of this type.
    pub const fn gl_tag(self) -> GLenum {
        match self {
            Self::Byte => gl::BYTE,
            Self::UnsignedByte => gl::UNSIGNED_BYTE,
            Self::Short => gl::SHORT,
            Self::UnsignedShort => gl::UNSIGNED_SHORT,
            Self::Int => gl::INT,
            Self::UnsignedInt => gl::UNSIGNED_INT,
            Self::Float => gl::FLOAT,
        }
    }

    /// Size of one component in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::Byte | Self::UnsignedByte => 1,
            Self::Short | Self::UnsignedShort => 2,
            Self::Int | Self::UnsignedInt | Self::Float => 4,
        }
    }

    /// Decodes one little-endian component of this type from the start of `bytes`.
    ///
    /// With `normalized` set, integer values are mapped to `[0, 1]` (unsigned)
    /// or `[-1, 1]` (signed). Returns [`None`] if `bytes` is shorter than
    /// [`ComponentType::size`].
    pub fn decode_f64(self, bytes: &[u8], normalized: bool) -> Option<f64> {
        let (value, max) = match self {
            Self::Byte => (f64::from(i8::read_le(bytes)?), f64::from(i8::MAX)),
            Self::UnsignedByte => (f64::from(u8::read_le(bytes)?), f64::from(u8::MAX)),
            Self::Short => (f64::from(i16::read_le(bytes)?), f64::from(i16::MAX)),
            Self::UnsignedShort => (f64::from(u16::read_le(bytes)?), f64::from(u16::MAX)),
            Self::Int => (f64::from(i32::read_le(bytes)?), f64::from(i32::MAX)),
            Self::UnsignedInt => (f64::from(u32::read_le(bytes)?), f64::from(u32::MAX)),
            Self::Float => return f32::read_le(bytes).map(f64::from),
        };
        Some(if normalized {
            (value / max).max(-1.0)
        } else {
            value
        })
    }
}

mod private {
    pub trait Sealed {}
}

/// A Rust type that an accessor component can be read as.
///
/// Implemented for `i8`, `u8`, `i16`, `u16`, `i32`, `u32` and `f32`.
pub trait Component: Copy + 'static + private::Sealed {
    /// The component type this Rust type corresponds to.
    const COMPONENT_TYPE: ComponentType;

    /// Reads one little-endian value from the start of `bytes`.
    fn read_le(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_component {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Component for $ty {
                const COMPONENT_TYPE: ComponentType = ComponentType::$variant;

                #[inline]
                fn read_le(bytes: &[u8]) -> Option<Self> {
                    let raw = bytes.get(..core::mem::size_of::<$ty>())?;
                    raw.try_into().ok().map(<$ty>::from_le_bytes)
                }
            }
        )*
    };
}

impl_component! {
    i8 => Byte,
    u8 => UnsignedByte,
    i16 => Short,
    u16 => UnsignedShort,
    i32 => Int,
    u32 => UnsignedInt,
    f32 => Float,
}

/// Shape of one accessor element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ElementType {
    /// One component.
    Scalar,
    /// Two components.
    Vec2,
    /// Three components.
    Vec3,
    /// Four components.
    Vec4,
    /// 2x2 matrix.
    Mat2,
    /// 3x3 matrix.
    Mat3,
    /// 4x4 matrix.
    Mat4,
}

impl ElementType {
    /// Parses the accessor `type` string, e.g. `"VEC3"`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|element| element.as_str() == name)
    }

    /// The accessor `type` string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Vec2 => "VEC2",
            Self::Vec3 => "VEC3",
            Self::Vec4 => "VEC4",
            Self::Mat2 => "MAT2",
            Self::Mat3 => "MAT3",
            Self::Mat4 => "MAT4",
        }
    }

    /// Number of components per element.
    pub const fn components(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 | Self::Mat2 => 4,
            Self::Mat3 => 9,
            Self::Mat4 => 16,
        }
    }
}
