//! Fixed-layout heterogeneous records.
//!
//! Provides a compile-time typed record over a field tuple, a growable
//! collection of such records with bulk export into user types, layout
//! description, and a packed byte image for value-only field types.

pub mod collection;
pub mod config;
pub mod error;
pub mod packed_buffer;
pub mod record;
pub mod types;

pub use collection::RecordCollection;
pub use config::CollectionConfig;
pub use error::RecordError;
pub use packed_buffer::PackedBuffer;
pub use record::PackedRecord;
pub use types::{FieldAt, FieldLayout, FieldList, PackedField, PackedFields, RecordLayout};
