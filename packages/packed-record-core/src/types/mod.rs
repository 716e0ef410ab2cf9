//! Field lists, per-index field access, and packed layout calculation.
//!
//! A record's field types are a tuple. Every tuple of arity 1 through 12
//! implements [`FieldList`], and [`FieldAt<I>`] for each `I` below its arity,
//! so an out-of-range index has no impl and fails to type-check.

mod field_layout;
mod packed_field;

use std::mem::size_of;

use crate::error::RecordError;

pub use field_layout::{FieldLayout, RecordLayout};
pub use packed_field::{PackedField, PackedFields};

/// Ordered list of field types with compile-time layout constants.
pub trait FieldList: Sized {
    /// Number of fields
    const COUNT: usize;
    /// Size of each field in bytes, in declaration order
    const SIZES: &'static [usize];
    /// Packed byte offset of each field (sum of the preceding sizes)
    const OFFSETS: &'static [usize];
    /// Sum of all field sizes
    const PACKED_SIZE: usize;

    /// Returns the type name of each field, in declaration order.
    fn type_names() -> Vec<&'static str>;
}

/// Typed access to field `I` of a field list.
pub trait FieldAt<const I: usize>: FieldList {
    /// Declared type of field `I`
    type Output;
    /// Packed byte offset of field `I`
    const OFFSET: usize;

    fn field(&self) -> &Self::Output;

    fn field_mut(&mut self) -> &mut Self::Output;

    fn into_field(self) -> Self::Output;
}

/// Computes packed offsets as running sums of `sizes`.
pub const fn packed_offsets<const N: usize>(sizes: [usize; N]) -> [usize; N] {
    let mut offsets = [0; N];
    let mut i = 1;
    while i < N {
        offsets[i] = offsets[i - 1] + sizes[i - 1];
        i += 1;
    }
    offsets
}

macro_rules! impl_field_list {
    ($($idx:tt : $name:ident),+) => {
        impl<$($name),+> FieldList for ($($name,)+) {
            const COUNT: usize = [$(size_of::<$name>()),+].len();
            const SIZES: &'static [usize] = &[$(size_of::<$name>()),+];
            const OFFSETS: &'static [usize] = &packed_offsets([$(size_of::<$name>()),+]);
            const PACKED_SIZE: usize = 0 $(+ size_of::<$name>())+;

            fn type_names() -> Vec<&'static str> {
                vec![$(std::any::type_name::<$name>()),+]
            }
        }

        impl<$($name: PackedField),+> PackedFields for ($($name,)+) {
            fn encode_packed(&self, dst: &mut Vec<u8>) {
                dst.reserve(<Self as FieldList>::PACKED_SIZE);
                $(self.$idx.encode(dst);)+
            }

            fn decode_packed(src: &[u8]) -> Result<Self, RecordError> {
                if src.len() != <Self as FieldList>::PACKED_SIZE {
                    return Err(RecordError::RecordSizeMismatch {
                        expected: <Self as FieldList>::PACKED_SIZE,
                        got: src.len(),
                    });
                }
                Ok(($(
                    {
                        let start = <Self as FieldList>::OFFSETS[$idx];
                        let end = start + <Self as FieldList>::SIZES[$idx];
                        $name::decode(&src[start..end]).ok_or(RecordError::InvalidFieldValue {
                            index: $idx,
                            type_id: $name::TYPE_ID,
                        })?
                    },
                )+))
            }
        }

        impl_field_list!(@access [$($name),+] $($idx : $name),+);
    };
    (@access $all:tt $($idx:tt : $name:ident),+) => {
        $(impl_field_list!(@field $all $idx $name);)+
    };
    (@field [$($all:ident),+] $idx:tt $name:ident) => {
        impl<$($all),+> FieldAt<$idx> for ($($all,)+) {
            type Output = $name;
            const OFFSET: usize = <Self as FieldList>::OFFSETS[$idx];

            #[inline]
            fn field(&self) -> &$name {
                &self.$idx
            }

            #[inline]
            fn field_mut(&mut self) -> &mut $name {
                &mut self.$idx
            }

            #[inline]
            fn into_field(self) -> $name {
                self.$idx
            }
        }
    };
}

impl_field_list!(0: A);
impl_field_list!(0: A, 1: B);
impl_field_list!(0: A, 1: B, 2: C);
impl_field_list!(0: A, 1: B, 2: C, 3: D);
impl_field_list!(0: A, 1: B, 2: C, 3: D, 4: E);
impl_field_list!(0: A, 1: B, 2: C, 3: D, 4: E, 5: G);
impl_field_list!(0: A, 1: B, 2: C, 3: D, 4: E, 5: G, 6: H);
impl_field_list!(0: A, 1: B, 2: C, 3: D, 4: E, 5: G, 6: H, 7: J);
impl_field_list!(0: A, 1: B, 2: C, 3: D, 4: E, 5: G, 6: H, 7: J, 8: K);
impl_field_list!(0: A, 1: B, 2: C, 3: D, 4: E, 5: G, 6: H, 7: J, 8: K, 9: L);
impl_field_list!(0: A, 1: B, 2: C, 3: D, 4: E, 5: G, 6: H, 7: J, 8: K, 9: L, 10: M);
impl_field_list!(0: A, 1: B, 2: C, 3: D, 4: E, 5: G, 6: H, 7: J, 8: K, 9: L, 10: M, 11: N);
