//! Record error types.
//!
//! Arity, field type, field index and conversion mismatches are rejected by
//! the type checker and never reach this enum. It only covers the run-time
//! paths: layout metadata lookup and the packed byte image.

use thiserror::Error;

/// Record operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Layout lookup past the last field
    #[error("Field index {index} out of range for record with {count} fields")]
    FieldIndexOutOfRange { index: usize, count: usize },

    /// Packed bytes do not match the record size
    #[error("Record size mismatch: expected {expected} bytes, got {got}")]
    RecordSizeMismatch { expected: usize, got: usize },

    /// Packed bytes end in a partial record
    #[error("Packed buffer of {len} bytes is not a whole number of {record_size}-byte records")]
    PartialRecord { record_size: usize, len: usize },

    /// Field layout listed out of declaration order
    #[error("Field with index {index} found at position {position}")]
    FieldOutOfOrder { position: usize, index: usize },

    /// Packed bytes hold an invalid bit pattern for the field type
    #[error("Invalid value for field {index} of type '{type_id}'")]
    InvalidFieldValue { index: usize, type_id: &'static str },

    /// Capacity calculation overflow
    #[error("Capacity overflow during {operation}")]
    CapacityOverflow { operation: &'static str },
}
