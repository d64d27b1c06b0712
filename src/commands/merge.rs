use crate::error::Result;
use crate::pdf::{merge, PdfDocument};
use std::path::PathBuf;

/// Resolved parameters for one merge invocation.
pub struct MergeRequest {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
}

pub fn run(request: &MergeRequest) -> Result<()> {
    // All inputs are opened before anything is written, so a bad input on
    // position k never leaves a truncated output behind.
    let mut sources = Vec::with_capacity(request.inputs.len());
    for input in &request.inputs {
        sources.push(PdfDocument::open(input)?);
    }

    let total_pages: usize = sources.iter().map(|s| s.page_count()).sum();

    let mut merged = merge::concatenate(sources)?;
    PdfDocument::save(&mut merged, &request.output)?;

    println!(
        "Merged {} file(s) ({} pages) into {}",
        request.inputs.len(),
        total_pages,
        request.output.display()
    );

    Ok(())
}
