use crate::utils::{create_benchmark_collection, per_second, BenchRow};
use std::time::Instant;

/// Run bulk export throughput test
pub fn run_export_throughput_test(record_count: usize, passes: usize) -> anyhow::Result<()> {
    println!("Running export throughput test...");
    println!("Records: {}, Passes: {}", record_count, passes);

    if passes == 0 {
        anyhow::bail!("passes must be greater than 0");
    }

    let collection = create_benchmark_collection(record_count, record_count);
    let mut target: Vec<BenchRow> = Vec::new();

    let start = Instant::now();
    for _ in 0..passes {
        collection.export_to(&mut target);
        std::hint::black_box(&target);
    }
    let elapsed = start.elapsed();

    if target.len() != collection.size() {
        anyhow::bail!(
            "export produced {} rows for {} records",
            target.len(),
            collection.size()
        );
    }

    let start_packed = Instant::now();
    let buffer = collection.to_packed_buffer()?;
    let packed_elapsed = start_packed.elapsed();

    println!("Results:");
    println!("  Export time ({} passes): {:?}", passes, elapsed);
    println!(
        "  Records exported per second: {:.2}",
        per_second(record_count * passes, elapsed)
    );
    println!("  Packed buffer time: {:?}", packed_elapsed);
    println!(
        "  Packed buffer size: {} bytes ({} bytes/record)",
        buffer.len(),
        buffer.record_size()
    );
    Ok(())
}
