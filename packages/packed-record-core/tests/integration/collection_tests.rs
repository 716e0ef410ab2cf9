//! Collection append and bulk export.

use ntest::timeout;
use packed_record_core::{CollectionConfig, PackedRecord, RecordCollection};

use super::helpers::{random_tuples, Measurement};

#[test]
#[timeout(1000)]
fn test_example_scenario() {
    let mut collection = RecordCollection::new();
    collection.push((1i32, 1.0f64, false));
    collection.push((2, 2.0, true));
    collection.push((3, 3.0, false));

    let mut exported: Vec<Measurement> = Vec::new();
    collection.export_to(&mut exported);

    let expected: Vec<Measurement> = [(1i32, 1.0f64, false), (2, 2.0, true), (3, 3.0, false)]
        .into_iter()
        .map(|fields| PackedRecord::new(fields).to_user_type())
        .collect();
    assert_eq!(exported, expected);
}

/// n distinct appends give size n and an export of the same order.
#[test]
#[timeout(1000)]
fn test_order_and_count() {
    let tuples = random_tuples(500);
    let mut collection = RecordCollection::with_capacity(16);
    for fields in &tuples {
        collection.push(*fields);
    }
    assert_eq!(collection.size(), tuples.len());

    let exported: Vec<Measurement> = collection.to_user_vec();
    assert_eq!(exported.len(), tuples.len());
    for (measurement, fields) in exported.iter().zip(&tuples) {
        assert_eq!(measurement, &Measurement::from(*fields));
    }
}

#[test]
#[timeout(1000)]
fn test_capacity_hint_neutrality() {
    for hint in [0, 1, 7, 1024] {
        let config = CollectionConfig {
            initial_capacity: hint,
        };
        let collection = RecordCollection::<(i32, f64, bool)>::with_config(&config);
        assert_eq!(collection.size(), 0);
        assert!(collection.capacity() >= hint);
    }
}

/// Exporting twice into the same target never leaves earlier elements.
#[test]
#[timeout(1000)]
fn test_export_target_reuse() {
    let mut first = RecordCollection::new();
    first.extend(random_tuples(10));
    let mut second = RecordCollection::new();
    second.extend(random_tuples(3));

    let mut target: Vec<Measurement> = Vec::new();
    first.export_to(&mut target);
    assert_eq!(target.len(), 10);

    second.export_to(&mut target);
    assert_eq!(target, second.to_user_vec::<Measurement>());
}

#[test]
#[timeout(1000)]
fn test_borrowed_iteration() {
    let collection: RecordCollection<(u32, char)> =
        [(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();

    let letters: String = (&collection).into_iter().map(|r| *r.get::<1>()).collect();
    assert_eq!(letters, "abc");

    let total: u32 = collection.into_iter().map(|r| *r.get::<0>()).sum();
    assert_eq!(total, 6);
}
