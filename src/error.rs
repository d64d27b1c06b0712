use std::path::PathBuf;
use thiserror::Error;

/// Failure modes for one invocation. Every variant names the token or path
/// that caused it so the message is actionable on its own.
#[derive(Debug, Error)]
pub enum Error {
    /// A `--pages` token is neither `"N"` nor `"N-M"` with 1-based bounds.
    /// Raised during resolution, before any file is touched.
    #[error("invalid page range {token:?} (expected a page number like \"7\" or a range like \"2-5\")")]
    InvalidRangeFormat { token: String },

    /// An input path could not be opened or parsed as a PDF.
    #[error("cannot read {}: {reason}", .path.display())]
    SourceUnreadable { path: PathBuf, reason: String },

    /// The output path could not be serialized, written, or renamed into place.
    #[error("cannot write {}: {reason}", .path.display())]
    DestinationUnwritable { path: PathBuf, reason: String },

    /// Extract/delete would leave zero pages; most PDF consumers reject a
    /// zero-page file, so we refuse to write one.
    #[error("refusing to write {}: no pages would remain", .path.display())]
    EmptyResult { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
