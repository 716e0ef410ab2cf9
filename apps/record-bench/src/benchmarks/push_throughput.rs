use crate::utils::{create_benchmark_collection, per_second};
use std::time::Instant;

/// Run append throughput test
pub fn run_push_throughput_test(record_count: usize, capacity_hint: usize) {
    println!("Running push throughput test...");
    println!(
        "Records: {}, Capacity hint: {}",
        record_count, capacity_hint
    );

    let start = Instant::now();
    let collection = create_benchmark_collection(record_count, capacity_hint);
    let elapsed = start.elapsed();

    let collection = std::hint::black_box(collection);
    tracing::debug!(
        size = collection.size(),
        capacity = collection.capacity(),
        "Push throughput collection built"
    );

    println!("Results:");
    println!("  Total time: {:?}", elapsed);
    println!("  Records appended: {}", collection.size());
    println!("  Appends per second: {:.2}", per_second(record_count, elapsed));
}
