//! Integration test suite for packed records and record collections.
//!
//! 1. Record field access, conversion and copy behavior
//! 2. Collection append and bulk export
//! 3. Packed byte image of records and collections

pub mod collection_tests;
pub mod helpers;
pub mod packed_image_tests;
pub mod record_tests;
