pub mod export_throughput;
pub mod layout;
pub mod push_throughput;
