use std::path::Path;

use mupdf::{Document, TextPageFlags};

use leadsift_core::{BackendError, DocumentBackend};

/// MuPDF-based implementation of [`DocumentBackend`] for PDF files.
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency so
/// that DOCX/CSV code paths do not transitively depend on it.
///
/// Every text line of every page is emitted in reading order, ending in
/// `'\n'`. Pages follow each other with no separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

fn extraction_error(e: mupdf::Error) -> BackendError {
    BackendError::ExtractionError(e.to_string())
}

impl DocumentBackend for MupdfBackend {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut text = String::new();
        let mut page_count = 0usize;

        for page_result in document.pages().map_err(extraction_error)? {
            let page = page_result.map_err(extraction_error)?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(extraction_error)?;

            for block in text_page.blocks() {
                for line in block.lines() {
                    text.extend(line.chars().map(|c| c.char().unwrap_or('\u{FFFD}')));
                    text.push('\n');
                }
            }
            page_count += 1;
        }

        tracing::debug!(path = %path.display(), pages = page_count, chars = text.len(), "pdf text extracted");
        Ok(text)
    }
}
