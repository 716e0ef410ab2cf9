use crate::utils::BenchFields;
use packed_record_core::PackedRecord;

/// Print the packed layout of the benchmark record
pub fn run_layout_dump() -> anyhow::Result<()> {
    let layout = PackedRecord::<BenchFields>::layout();
    layout.validate()?;
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}
