//! Record field access, conversion and copy behavior.

use ntest::timeout;
use packed_record_core::{FieldList, PackedRecord, RecordLayout};

use super::helpers::{random_tuples, Measurement};

/// Reading every field returns the value it was built from.
#[test]
#[timeout(1000)]
fn test_field_roundtrip_random() {
    for (a, b, c) in random_tuples(256) {
        let record = PackedRecord::new((a, b, c));
        assert_eq!(*record.get::<0>(), a);
        assert_eq!(*record.get::<1>(), b);
        assert_eq!(*record.get::<2>(), c);
    }
}

/// Offsets are prefix sums of sizes and the fields exactly span the record.
#[test]
#[timeout(1000)]
fn test_offsets_span_record() {
    fn check<F: FieldList>() {
        let layout = RecordLayout::of::<F>();
        layout.validate().unwrap();

        let mut expected = 0;
        for field in &layout.fields {
            assert_eq!(field.offset, expected);
            expected += field.size;
        }
        assert_eq!(expected, F::PACKED_SIZE);
    }

    check::<(u8,)>();
    check::<(i32, f64, bool)>();
    check::<(u8, u64, u16, char)>();
    check::<(String, Vec<u8>, Option<u32>)>();
    check::<(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64)>();
}

/// Converting a record matches building the user type directly.
#[test]
#[timeout(1000)]
fn test_conversion_fidelity() {
    for fields in random_tuples(64) {
        let record = PackedRecord::new(fields);
        let converted: Measurement = record.to_user_type();
        assert_eq!(converted, Measurement::from(fields));
    }
}

#[test]
#[timeout(1000)]
fn test_example_scenario() {
    let record = PackedRecord::new((3i32, 2.5f64, true));
    assert_eq!(*record.get::<0>(), 3);
    assert_eq!(*record.get::<1>(), 2.5);
    assert!(*record.get::<2>());

    let converted: Measurement = record.to_user_type();
    assert_eq!(
        converted,
        Measurement {
            sensor: 3,
            reading: 2.5,
            calibrated: true
        }
    );
}

/// Mutating a copy leaves the original untouched and vice versa.
#[test]
#[timeout(1000)]
fn test_copy_independence_both_ways() {
    let mut original = PackedRecord::new((1i32, 1.0f64, false));
    let mut copy = original;

    *copy.get_mut::<0>() = 2;
    assert_eq!(*original.get::<0>(), 1);

    *original.get_mut::<2>() = true;
    assert!(!*copy.get::<2>());
}

/// Resource-owning fields are cloned and moved field by field.
#[test]
#[timeout(1000)]
fn test_owned_fields_clone_and_drop() {
    use std::rc::Rc;

    let shared = Rc::new(5u32);
    let record = PackedRecord::new((Rc::clone(&shared), 1u8));
    assert_eq!(Rc::strong_count(&shared), 2);

    let copy = record.clone();
    assert_eq!(Rc::strong_count(&shared), 3);

    let moved = record;
    assert_eq!(Rc::strong_count(&shared), 3);

    drop(copy);
    drop(moved);
    assert_eq!(Rc::strong_count(&shared), 1);
}
