//! Run-time description of a record's packed layout.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

use super::FieldList;

/// Placement of one field within the packed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLayout {
    /// Field position in declaration order
    pub index: usize,
    /// Byte offset within the packed record
    pub offset: usize,
    /// Field size in bytes
    pub size: usize,
    /// Rust type name of the field
    pub type_name: String,
}

impl FieldLayout {
    /// Returns the end offset of this field (offset + size).
    pub fn end_offset(&self) -> usize {
        self.offset + self.size
    }
}

/// Packed layout of every field in a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLayout {
    /// Size of the packed record in bytes
    pub record_size: usize,
    /// Field layouts in declaration order
    pub fields: Vec<FieldLayout>,
}

impl RecordLayout {
    /// Builds the layout of field list `F` from its compile-time constants.
    pub fn of<F: FieldList>() -> Self {
        let fields = F::type_names()
            .into_iter()
            .enumerate()
            .map(|(index, type_name)| FieldLayout {
                index,
                offset: F::OFFSETS[index],
                size: F::SIZES[index],
                type_name: type_name.to_string(),
            })
            .collect();

        Self {
            record_size: F::PACKED_SIZE,
            fields,
        }
    }

    /// Returns the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Looks up the layout of the field at `index`.
    pub fn field(&self, index: usize) -> Result<&FieldLayout, RecordError> {
        self.fields
            .get(index)
            .ok_or(RecordError::FieldIndexOutOfRange {
                index,
                count: self.fields.len(),
            })
    }

    /// Validates that fields are back-to-back in declaration order and
    /// together span exactly `record_size` bytes.
    pub fn validate(&self) -> Result<(), RecordError> {
        let mut expected_offset = 0usize;

        for (position, field) in self.fields.iter().enumerate() {
            if field.index != position {
                return Err(RecordError::FieldOutOfOrder {
                    position,
                    index: field.index,
                });
            }

            // Gaps and overlaps both show up as an offset mismatch
            if field.offset != expected_offset {
                return Err(RecordError::RecordSizeMismatch {
                    expected: expected_offset,
                    got: field.offset,
                });
            }

            expected_offset =
                expected_offset
                    .checked_add(field.size)
                    .ok_or(RecordError::CapacityOverflow {
                        operation: "field bounds calculation",
                    })?;
        }

        if expected_offset != self.record_size {
            return Err(RecordError::RecordSizeMismatch {
                expected: self.record_size,
                got: expected_offset,
            });
        }

        Ok(())
    }
}
