//! Value-only field types with a fixed packed byte representation.
//!
//! Only types whose value is fully described by their bytes implement
//! [`PackedField`], so a packed image never carries pointers or handles.

use crate::error::RecordError;

use super::FieldList;

/// Scalar type that can be written to and read from packed bytes.
///
/// `encode` must append exactly `size_of::<Self>()` bytes in native byte
/// order, and `decode` must accept a slice of exactly that length.
pub trait PackedField: Copy + 'static {
    /// Type identifier (e.g., "u64", "bool")
    const TYPE_ID: &'static str;

    /// Appends the packed bytes of this value to `dst`.
    fn encode(&self, dst: &mut Vec<u8>);

    /// Reads a value from its packed bytes.
    ///
    /// Returns `None` if `src` has the wrong length or holds a bit pattern
    /// that is not a valid value of this type.
    fn decode(src: &[u8]) -> Option<Self>;
}

/// Field list whose every field is a [`PackedField`].
pub trait PackedFields: FieldList {
    /// Appends exactly `PACKED_SIZE` bytes, field `i` at `OFFSETS[i]`.
    fn encode_packed(&self, dst: &mut Vec<u8>);

    /// Reads a field list back from exactly `PACKED_SIZE` bytes.
    fn decode_packed(src: &[u8]) -> Result<Self, RecordError>;
}

macro_rules! impl_packed_numeric {
    ($($ty:ty => $id:literal),+ $(,)?) => {
        $(
            impl PackedField for $ty {
                const TYPE_ID: &'static str = $id;

                #[inline]
                fn encode(&self, dst: &mut Vec<u8>) {
                    dst.extend_from_slice(&self.to_ne_bytes());
                }

                #[inline]
                fn decode(src: &[u8]) -> Option<Self> {
                    let bytes = <[u8; std::mem::size_of::<$ty>()]>::try_from(src).ok()?;
                    Some(<$ty>::from_ne_bytes(bytes))
                }
            }
        )+
    };
}

impl_packed_numeric! {
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    f32 => "f32",
    f64 => "f64",
}

/// 1 byte, 0=false, 1=true.
impl PackedField for bool {
    const TYPE_ID: &'static str = "bool";

    fn encode(&self, dst: &mut Vec<u8>) {
        dst.push(u8::from(*self));
    }

    fn decode(src: &[u8]) -> Option<Self> {
        match src {
            [0] => Some(false),
            [1] => Some(true),
            _ => None,
        }
    }
}

/// Unicode scalar value stored as its `u32` code point.
impl PackedField for char {
    const TYPE_ID: &'static str = "char";

    fn encode(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(&u32::from(*self).to_ne_bytes());
    }

    fn decode(src: &[u8]) -> Option<Self> {
        u32::decode(src).and_then(char::from_u32)
    }
}
