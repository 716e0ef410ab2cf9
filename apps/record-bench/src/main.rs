//! Throughput and layout tool for packed record collections.
//!
//! CLI tool for:
//! - Append throughput with and without a capacity hint
//! - Bulk export and packed buffer throughput
//! - Packed layout inspection

mod benchmarks;
mod cli;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::PushThroughput {
            record_count,
            capacity_hint,
        } => {
            benchmarks::push_throughput::run_push_throughput_test(record_count, capacity_hint);
        }
        Commands::ExportThroughput {
            record_count,
            passes,
        } => {
            benchmarks::export_throughput::run_export_throughput_test(record_count, passes)?;
        }
        Commands::Layout => {
            benchmarks::layout::run_layout_dump()?;
        }
        Commands::All => {
            utils::run_all_benchmarks()?;
        }
    }

    Ok(())
}
