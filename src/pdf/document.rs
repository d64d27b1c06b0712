use crate::error::{Error, Result};
use lopdf::{Document, ObjectId};
use std::fs;
use std::path::{Path, PathBuf};

/// One open input document plus the path it came from, kept for error
/// messages. Handles are per-operation; nothing is shared across invocations
/// and the file on disk is never mutated.
pub struct PdfDocument {
    pub doc: Document,
    pub path: PathBuf,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let doc = Document::load(&path).map_err(|e| Error::SourceUnreadable {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Ok(PdfDocument { doc, path })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// 1-based page numbers with their object IDs, in page order.
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Build a new document containing exactly the given 1-based pages, in
    /// their original ascending order. Callers pass only page numbers that
    /// exist in this document.
    pub fn extract_pages(&self, keep: &[u32]) -> Document {
        let mut new_doc = self.doc.clone();

        let delete: Vec<u32> = self
            .page_ids()
            .iter()
            .filter(|(num, _)| !keep.contains(num))
            .map(|(num, _)| *num)
            .collect();

        if !delete.is_empty() {
            new_doc.delete_pages(&delete);
        }

        new_doc
    }

    /// Add 90 degrees clockwise to the page's /Rotate entry, normalized to
    /// 0..360 so four applications return to the original orientation.
    pub fn rotate_page(&mut self, page_id: ObjectId) -> Result<()> {
        let current = self
            .doc
            .get_dictionary(page_id)
            .ok()
            .and_then(|dict| dict.get(b"Rotate").ok())
            .and_then(|obj| obj.as_i64().ok())
            .unwrap_or(0);

        let dict = self
            .doc
            .get_dictionary_mut(page_id)
            .map_err(|e| Error::SourceUnreadable {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        dict.set("Rotate", (current + 90).rem_euclid(360));
        Ok(())
    }

    /// Serialize to memory first, then write a temp sibling and rename it
    /// over the target, so a failed run never leaves a partial output file.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();
        let unwritable = |reason: String| Error::DestinationUnwritable {
            path: path.to_path_buf(),
            reason,
        };

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| unwritable(e.to_string()))?;

        let file_name = path
            .file_name()
            .ok_or_else(|| unwritable("path has no file name".to_string()))?;
        let mut tmp_name = file_name.to_os_string();
        tmp_name.push(".tmp");
        let tmp = path.with_file_name(tmp_name);

        fs::write(&tmp, &bytes).map_err(|e| unwritable(e.to_string()))?;
        fs::rename(&tmp, path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            unwritable(e.to_string())
        })
    }
}
