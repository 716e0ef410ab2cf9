use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run append throughput test
    PushThroughput {
        /// Number of records to append
        #[arg(short, long, default_value_t = 1_000_000)]
        record_count: usize,

        /// Capacity hint for the collection (0 = none)
        #[arg(long, default_value_t = 0)]
        capacity_hint: usize,
    },

    /// Run bulk export throughput test
    ExportThroughput {
        /// Number of records to export
        #[arg(short, long, default_value_t = 1_000_000)]
        record_count: usize,

        /// Number of export passes over the same target
        #[arg(short, long, default_value_t = 5)]
        passes: usize,
    },

    /// Print the packed layout of the benchmark record as JSON
    Layout,

    /// Run all tests
    All,
}
