//! Packed byte image of records and collections.

use ntest::timeout;
use packed_record_core::{PackedBuffer, PackedRecord, RecordCollection, RecordError};

use super::helpers::random_tuples;

#[test]
#[timeout(1000)]
fn test_collection_packed_roundtrip_random() {
    let collection: RecordCollection<(i32, f64, bool)> = random_tuples(128).into_iter().collect();
    let buffer = collection.to_packed_buffer().unwrap();

    assert_eq!(buffer.len(), 128 * 13);
    for (index, record) in collection.iter().enumerate() {
        assert_eq!(buffer.record_bytes(index), Some(record.to_packed_bytes().as_slice()));
    }

    let restored = RecordCollection::from_packed_buffer(&buffer).unwrap();
    assert_eq!(restored, collection);
}

#[test]
#[timeout(1000)]
fn test_restore_from_raw_bytes() {
    let mut bytes = Vec::new();
    PackedRecord::new((10u16, 'x')).write_packed(&mut bytes);
    PackedRecord::new((20u16, 'y')).write_packed(&mut bytes);

    let buffer = PackedBuffer::from_bytes(6, bytes).unwrap();
    let collection = RecordCollection::<(u16, char)>::from_packed_buffer(&buffer).unwrap();
    let exported: Vec<(u16, char)> = collection.into_user_vec();
    assert_eq!(exported, vec![(10, 'x'), (20, 'y')]);
}

#[test]
#[timeout(1000)]
fn test_invalid_char_reports_field_index() {
    let mut bytes = PackedRecord::new((1u8, 'a')).to_packed_bytes();
    bytes[1..5].copy_from_slice(&0xDFFFu32.to_ne_bytes());

    assert_eq!(
        PackedRecord::<(u8, char)>::from_packed_bytes(&bytes),
        Err(RecordError::InvalidFieldValue {
            index: 1,
            type_id: "char"
        })
    );
}
