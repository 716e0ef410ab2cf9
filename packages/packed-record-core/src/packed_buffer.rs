//! Contiguous buffer of packed records.
//!
//! Records are stored back-to-back, each exactly `record_size` bytes, with
//! no per-record or per-field overhead.

use crate::error::RecordError;
use crate::record::PackedRecord;
use crate::types::PackedFields;

/// Byte buffer holding fixed-size packed records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBuffer {
    /// Packed record bytes
    data: Vec<u8>,
    /// Record size in bytes for offset calculations
    record_size: usize,
}

impl PackedBuffer {
    /// Creates an empty buffer with room for `capacity_records` records.
    ///
    /// # Arguments
    /// * `record_size` - Size of each record in bytes
    /// * `capacity_records` - Number of records to reserve space for
    ///
    /// # Panics
    /// Panics if `record_size` is 0.
    pub fn new(record_size: usize, capacity_records: usize) -> Result<Self, RecordError> {
        assert!(record_size > 0, "record_size must be > 0");

        let capacity_bytes =
            capacity_records
                .checked_mul(record_size)
                .ok_or(RecordError::CapacityOverflow {
                    operation: "packed buffer allocation",
                })?;

        Ok(Self {
            data: Vec::with_capacity(capacity_bytes),
            record_size,
        })
    }

    /// Wraps existing packed bytes.
    ///
    /// # Returns
    /// `Err(RecordError::PartialRecord)` if `data` is not a whole number
    /// of records.
    ///
    /// # Panics
    /// Panics if `record_size` is 0.
    pub fn from_bytes(record_size: usize, data: Vec<u8>) -> Result<Self, RecordError> {
        assert!(record_size > 0, "record_size must be > 0");

        if data.len() % record_size != 0 {
            return Err(RecordError::PartialRecord {
                record_size,
                len: data.len(),
            });
        }

        Ok(Self { data, record_size })
    }

    /// Returns the byte offset for a record at the given index.
    pub fn record_offset(&self, record_index: usize) -> Result<usize, RecordError> {
        record_index
            .checked_mul(self.record_size)
            .ok_or(RecordError::CapacityOverflow {
                operation: "record offset calculation",
            })
    }

    /// Appends the packed image of `record`.
    pub fn push_record<F: PackedFields>(
        &mut self,
        record: &PackedRecord<F>,
    ) -> Result<(), RecordError> {
        if F::PACKED_SIZE != self.record_size {
            return Err(RecordError::RecordSizeMismatch {
                expected: self.record_size,
                got: F::PACKED_SIZE,
            });
        }

        record.write_packed(&mut self.data);
        Ok(())
    }

    /// Returns the bytes of the record at `record_index`, if present.
    pub fn record_bytes(&self, record_index: usize) -> Option<&[u8]> {
        let start = self.record_offset(record_index).ok()?;
        let end = start.checked_add(self.record_size)?;
        self.data.get(start..end)
    }

    /// Iterates over the bytes of each record in order.
    pub fn records(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.record_size)
    }

    /// Returns the record size in bytes.
    pub fn record_size(&self) -> usize {
        self.record_size
    }

    /// Returns the number of records in the buffer.
    pub fn record_count(&self) -> usize {
        self.data.len() / self.record_size
    }

    /// Returns the current buffer length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the current buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the buffer contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns its bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}
