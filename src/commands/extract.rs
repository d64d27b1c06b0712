use crate::error::{Error, Result};
use crate::page_range::PageIndexSet;
use crate::pdf::PdfDocument;
use std::path::PathBuf;

/// Resolved parameters for one extract invocation.
pub struct ExtractRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pages: PageIndexSet,
}

pub fn run(request: &ExtractRequest) -> Result<()> {
    let doc = PdfDocument::open(&request.input)?;

    // Ascending source order, regardless of token order; indices past the
    // end of the document are never visited.
    let keep: Vec<u32> = (0..doc.page_count())
        .filter(|index| request.pages.contains(*index))
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
        "Extracted {} page(s) from {} into {}",
        keep.len(),
        request.input.display(),
        request.output.display()
    );

    Ok(())
}
