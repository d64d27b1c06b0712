use crate::error::{Error, Result};
use crate::page_range::PageIndexSet;
use crate::pdf::PdfDocument;
use std::path::PathBuf;

/// Resolved parameters for one delete invocation.
pub struct DeleteRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pages: PageIndexSet,
}

pub fn run(request: &DeleteRequest) -> Result<()> {
    let doc = PdfDocument::open(&request.input)?;
    let total = doc.page_count();

    // Keep the complement; deleting an index past the end is a no-op.
    let keep: Vec<u32> = (0..total)
        .filter(|index| !request.pages.contains(*index))
        .map(|index| index as u32 + 1)
        .collect();

    if keep.is_empty() {
        return Err(Error::EmptyResult {
            path: request.output.clone(),
        });
    }

    let mut new_doc = doc.extract_pages(&keep);
    PdfDocument::save(&mut new_doc, &request.output)?;

    println!(
        "Deleted {} page(s) from {}, wrote {}",
        total - keep.len(),
        request.input.display(),
        request.output.display()
    );

    Ok(())
}
