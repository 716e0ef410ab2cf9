//! Growable, insertion-ordered collection of packed records.
//!
//! Records are only ever appended. Bulk export converts every record into a
//! caller-chosen user type, preserving insertion order.

use crate::config::CollectionConfig;
use crate::error::RecordError;
use crate::packed_buffer::PackedBuffer;
use crate::record::PackedRecord;
use crate::types::{FieldList, PackedFields};

/// Collection of `PackedRecord<F>` values in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCollection<F: FieldList> {
    /// Records in insertion order
    records: Vec<PackedRecord<F>>,
}

impl<F: FieldList> RecordCollection<F> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates an empty collection with room for `capacity` records.
    ///
    /// The capacity is a hint only; appends past it still succeed.
    pub fn with_capacity(capacity: usize) -> Self {
        tracing::trace!(capacity, "Reserving record collection");
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Creates an empty collection from a configuration.
    pub fn with_config(config: &CollectionConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Appends a record built from one value per field.
    ///
    /// ```compile_fail
    /// use packed_record_core::RecordCollection;
    ///
    /// let mut collection = RecordCollection::<(u8, u16)>::new();
    /// collection.push((1u8,));
    /// ```
    ///
    /// ```compile_fail
    /// use packed_record_core::RecordCollection;
    ///
    /// let mut collection = RecordCollection::<(u8, u16)>::new();
    /// collection.push((1u8, 2u32));
    /// ```
    #[inline]
    pub fn push(&mut self, fields: F) {
        self.records.push(PackedRecord::new(fields));
    }

    /// Appends an existing record.
    #[inline]
    pub fn push_record(&mut self, record: PackedRecord<F>) {
        self.records.push(record);
    }

    /// Returns the number of records. O(1).
    #[inline]
    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no record has been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records the collection can hold without growing.
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Returns the record at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&PackedRecord<F>> {
        self.records.get(index)
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PackedRecord<F>> {
        self.records.iter()
    }

    /// Converts every record into `U` and stores the results in `target`.
    ///
    /// Previous contents of `target` are discarded. Exactly `size()` slots
    /// are reserved before the records are appended in insertion order.
    ///
    /// ```
    /// use packed_record_core::RecordCollection;
    ///
    /// struct Flagged(u32, bool);
    ///
    /// impl From<(u32, bool)> for Flagged {
    ///     fn from((id, flag): (u32, bool)) -> Self {
    ///         Self(id, flag)
    ///     }
    /// }
    ///
    /// let mut collection = RecordCollection::new();
    /// collection.push((1u32, true));
    /// let mut target: Vec<Flagged> = vec![Flagged(9, false)];
    /// collection.export_to(&mut target);
    /// assert_eq!(target.len(), 1);
    /// assert_eq!(target[0].0, 1);
    /// ```
    ///
    /// A `U` without a matching `From` impl is rejected:
    ///
    /// ```compile_fail
    /// use packed_record_core::RecordCollection;
    ///
    /// struct Label(String);
    ///
    /// let mut collection = RecordCollection::new();
    /// collection.push((1u32, true));
    /// let mut target: Vec<Label> = Vec::new();
    /// collection.export_to(&mut target);
    /// ```
    pub fn export_to<U>(&self, target: &mut Vec<U>)
    where
        F: Clone,
        U: From<F>,
    {
        if !target.is_empty() {
            tracing::trace!(discarded = target.len(), "Clearing export target");
            target.clear();
        }
        target.reserve_exact(self.records.len());
        target.extend(self.records.iter().map(PackedRecord::to_user_type));

        tracing::debug!(
            records = self.records.len(),
            target = std::any::type_name::<U>(),
            "Exported record collection"
        );
    }

    /// Converts every record into `U`, returning a new vector.
    pub fn to_user_vec<U>(&self) -> Vec<U>
    where
        F: Clone,
        U: From<F>,
    {
        let mut target = Vec::new();
        self.export_to(&mut target);
        target
    }

    /// Consumes the collection and converts every record into `U`.
    pub fn into_user_vec<U>(self) -> Vec<U>
    where
        U: From<F>,
    {
        self.records
            .into_iter()
            .map(PackedRecord::into_user_type)
            .collect()
    }
}

impl<F: PackedFields> RecordCollection<F> {
    /// Writes every record into a contiguous packed buffer.
    pub fn to_packed_buffer(&self) -> Result<PackedBuffer, RecordError> {
        let mut buffer = PackedBuffer::new(F::PACKED_SIZE, self.records.len())?;
        for record in &self.records {
            buffer.push_record(record)?;
        }

        tracing::debug!(
            records = buffer.record_count(),
            bytes = buffer.len(),
            "Packed record collection"
        );
        Ok(buffer)
    }

    /// Reads every record back from a packed buffer.
    ///
    /// Fails on a record size mismatch or on the first field holding an
    /// invalid value; no partial collection is returned.
    pub fn from_packed_buffer(buffer: &PackedBuffer) -> Result<Self, RecordError> {
        if buffer.record_size() != F::PACKED_SIZE {
            return Err(RecordError::RecordSizeMismatch {
                expected: F::PACKED_SIZE,
                got: buffer.record_size(),
            });
        }

        let records = buffer
            .records()
            .map(PackedRecord::<F>::from_packed_bytes)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(records = records.len(), "Unpacked record collection");
        Ok(Self { records })
    }
}

impl<F: FieldList> Default for RecordCollection<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldList> Extend<F> for RecordCollection<F> {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        self.records.extend(iter.into_iter().map(PackedRecord::new));
    }
}

impl<F: FieldList> FromIterator<F> for RecordCollection<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(PackedRecord::new).collect(),
        }
    }
}

impl<F: FieldList> IntoIterator for RecordCollection<F> {
    type Item = PackedRecord<F>;
    type IntoIter = std::vec::IntoIter<PackedRecord<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, F: FieldList> IntoIterator for &'a RecordCollection<F> {
    type Item = &'a PackedRecord<F>;
    type IntoIter = std::slice::Iter<'a, PackedRecord<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
