//! Fixed-layout heterogeneous record.
//!
//! A [`PackedRecord`] holds exactly one value per declared field type. Field
//! boundaries come from the field tuple itself, so access needs no offset
//! arithmetic, and copies and moves go through each field's own `Clone` and
//! move rather than a raw byte copy.

use crate::error::RecordError;
use crate::types::{FieldAt, FieldList, PackedFields, RecordLayout};

/// Record over the field types of `F`, e.g. `PackedRecord<(i32, f64, bool)>`.
///
/// There is no `Default`: a record only exists with every field set.
///
/// ```
/// use packed_record_core::PackedRecord;
///
/// let record = PackedRecord::new((3i32, 2.5f64, true));
/// assert_eq!(*record.get::<0>(), 3);
/// assert_eq!(*record.get::<1>(), 2.5);
/// assert_eq!(record.size(), 3);
/// ```
///
/// Field indices are checked by the type system:
///
/// ```compile_fail
/// use packed_record_core::PackedRecord;
///
/// let record = PackedRecord::new((1u8, 2u16));
/// let _ = record.get::<2>();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedRecord<F: FieldList> {
    fields: F,
}

impl<F: FieldList> PackedRecord<F> {
    /// Number of fields.
    pub const FIELD_COUNT: usize = F::COUNT;

    /// Packed size in bytes (sum of field sizes, no padding).
    pub const PACKED_SIZE: usize = F::PACKED_SIZE;

    /// Creates a record from one value per field, in declaration order.
    ///
    /// The tuple must match the declared field types exactly:
    ///
    /// ```compile_fail
    /// use packed_record_core::PackedRecord;
    ///
    /// let _record: PackedRecord<(u8, u16)> = PackedRecord::new((1u8,));
    /// ```
    ///
    /// ```compile_fail
    /// use packed_record_core::PackedRecord;
    ///
    /// let _record: PackedRecord<(u8, u16)> = PackedRecord::new((1u8, "two"));
    /// ```
    #[inline]
    pub fn new(fields: F) -> Self {
        Self { fields }
    }

    /// Returns a reference to field `I`.
    #[inline]
    pub fn get<const I: usize>(&self) -> &<F as FieldAt<I>>::Output
    where
        F: FieldAt<I>,
    {
        <F as FieldAt<I>>::field(&self.fields)
    }

    /// Returns a mutable reference to field `I`.
    #[inline]
    pub fn get_mut<const I: usize>(&mut self) -> &mut <F as FieldAt<I>>::Output
    where
        F: FieldAt<I>,
    {
        <F as FieldAt<I>>::field_mut(&mut self.fields)
    }

    /// Replaces field `I`, returning the previous value.
    pub fn set<const I: usize>(
        &mut self,
        value: <F as FieldAt<I>>::Output,
    ) -> <F as FieldAt<I>>::Output
    where
        F: FieldAt<I>,
    {
        std::mem::replace(<F as FieldAt<I>>::field_mut(&mut self.fields), value)
    }

    /// Returns the number of fields. Constant for the record type.
    #[inline]
    pub const fn size(&self) -> usize {
        F::COUNT
    }

    /// Returns the field tuple.
    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Consumes the record and returns its field tuple.
    pub fn into_fields(self) -> F {
        self.fields
    }

    /// Returns the packed layout of this record type.
    pub fn layout() -> RecordLayout {
        RecordLayout::of::<F>()
    }

    /// Builds a `U` from a copy of every field, in declaration order.
    ///
    /// ```
    /// use packed_record_core::PackedRecord;
    ///
    /// struct Point {
    ///     x: i32,
    ///     y: f64,
    /// }
    ///
    /// impl From<(i32, f64)> for Point {
    ///     fn from((x, y): (i32, f64)) -> Self {
    ///         Self { x, y }
    ///     }
    /// }
    ///
    /// let record = PackedRecord::new((1i32, 2.5f64));
    /// let point: Point = record.to_user_type();
    /// assert_eq!(point.x, 1);
    /// assert_eq!(point.y, 2.5);
    /// ```
    ///
    /// A `U` without a matching `From` impl is rejected:
    ///
    /// ```compile_fail
    /// use packed_record_core::PackedRecord;
    ///
    /// struct Point {
    ///     x: i32,
    ///     y: i32,
    /// }
    ///
    /// let record = PackedRecord::new((1i32, 2.5f64));
    /// let _point: Point = record.to_user_type();
    /// ```
    pub fn to_user_type<U>(&self) -> U
    where
        F: Clone,
        U: From<F>,
    {
        U::from(self.fields.clone())
    }

    /// Consumes the record and builds a `U` from its fields.
    pub fn into_user_type<U>(self) -> U
    where
        U: From<F>,
    {
        U::from(self.fields)
    }
}

impl<F: PackedFields> PackedRecord<F> {
    /// Appends the packed image of this record to `dst`.
    pub fn write_packed(&self, dst: &mut Vec<u8>) {
        self.fields.encode_packed(dst);
    }

    /// Returns the packed image of this record.
    pub fn to_packed_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(F::PACKED_SIZE);
        self.write_packed(&mut bytes);
        bytes
    }

    /// Reads a record back from its packed image.
    pub fn from_packed_bytes(src: &[u8]) -> Result<Self, RecordError> {
        F::decode_packed(src).map(Self::new)
    }
}

impl<F: FieldList> From<F> for PackedRecord<F> {
    fn from(fields: F) -> Self {
        Self::new(fields)
    }
}
