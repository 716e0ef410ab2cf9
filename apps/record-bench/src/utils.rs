use packed_record_core::{CollectionConfig, RecordCollection};
use rand::Rng;

/// Field types of the benchmark record.
pub type BenchFields = (u64, f64, bool, char);

/// Export target for the benchmark record.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRow {
    pub id: u64,
    pub score: f64,
    pub active: bool,
    pub grade: char,
}

impl From<BenchFields> for BenchRow {
    fn from((id, score, active, grade): BenchFields) -> Self {
        Self {
            id,
            score,
            active,
            grade,
        }
    }
}

/// Builds a collection of `record_count` random benchmark records.
pub fn create_benchmark_collection(
    record_count: usize,
    capacity_hint: usize,
) -> RecordCollection<BenchFields> {
    let config = CollectionConfig::default().with_initial_capacity(capacity_hint);
    let mut collection = RecordCollection::with_config(&config);
    let mut rng = rand::thread_rng();

    for i in 0..record_count {
        collection.push((
            i as u64,
            rng.gen::<f64>(),
            rng.gen::<bool>(),
            rng.gen_range('a'..='z'),
        ));
    }
    collection
}

/// Returns `count / seconds`, or 0 for an empty interval.
pub fn per_second(count: usize, elapsed: std::time::Duration) -> f64 {
    if elapsed.as_secs_f64() == 0.0 {
        0.0
    } else {
        count as f64 / elapsed.as_secs_f64()
    }
}

/// Runs every test with its default arguments.
pub fn run_all_benchmarks() -> anyhow::Result<()> {
    use crate::benchmarks;

    println!("Running all record collection tests...");
    println!("{}", "=".repeat(60));

    println!("\n1. Packed Layout");
    println!("{}", "-".repeat(40));
    benchmarks::layout::run_layout_dump()?;

    println!("\n2. Push Throughput Test");
    println!("{}", "-".repeat(40));
    benchmarks::push_throughput::run_push_throughput_test(1_000_000, 0);

    println!("\n3. Push Throughput Test (with capacity hint)");
    println!("{}", "-".repeat(40));
    benchmarks::push_throughput::run_push_throughput_test(1_000_000, 1_000_000);

    println!("\n4. Export Throughput Test");
    println!("{}", "-".repeat(40));
    benchmarks::export_throughput::run_export_throughput_test(1_000_000, 5)?;

    println!("\n{}", "=".repeat(60));
    println!("All tests completed.");
    Ok(())
}
