use crate::error::Result;
use crate::page_range::PageIndexSet;
use crate::pdf::PdfDocument;
use std::path::PathBuf;

/// Resolved parameters for one rotate invocation.
pub struct RotateRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pages: PageIndexSet,
}

pub fn run(request: &RotateRequest) -> Result<()> {
    let mut doc = PdfDocument::open(&request.input)?;

    // Every page is kept; membership decides which get the extra quarter
    // turn. Each page is rotated at most once even if tokens overlap.
    let mut rotated = 0;
    for (number, page_id) in doc.page_ids() {
        if request.pages.contains(number as usize - 1) {
            doc.rotate_page(page_id)?;
            rotated += 1;
        }
    }

    PdfDocument::save(&mut doc.doc, &request.output)?;

    println!(
        "Rotated {} page(s) in {}, wrote {}",
        rotated,
        request.input.display(),
        request.output.display()
    );

    Ok(())
}
