use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;

use crate::schema::v1::AnalysisResult;

pub mod summary;

pub fn write_json(path: &Path, result: &AnalysisResult) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, result)?;
    Ok(())
}
