use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod docx;
pub mod table;

// Re-export domain types for convenience
pub use leadsift_core::{BackendError, DocumentBackend};

/// Prefixes of the legacy error strings produced by [`extract_text_or_sentinel`].
pub const SENTINEL_PREFIXES: &[&str] = &["Error:", "Error processing"];

/// A document format the loader can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Csv,
}

impl DocumentKind {
    /// Detect the kind from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "csv" => Some(DocumentKind::Csv),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
            DocumentKind::Csv => "CSV",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("unsupported file type: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("failed to decode {kind} {}: {detail}", .path.display())]
    DecodeFailure {
        kind: DocumentKind,
        path: PathBuf,
        detail: String,
    },
    #[cfg(not(feature = "pdf"))]
    #[error("PDF support not compiled in (enable the `pdf` feature of leadsift-ingest)")]
    NoPdfSupport { path: PathBuf },
}

impl IngestError {
    /// Render this error as the legacy in-band error text.
    pub fn to_sentinel(&self) -> String {
        match self {
            IngestError::FileNotFound { .. } => "Error: File not found.".to_string(),
            IngestError::UnsupportedFormat { .. } => "Error: Unsupported file type.".to_string(),
            IngestError::DecodeFailure { kind, path, detail } => {
                format!("Error processing {} {}: {}", kind, path.display(), detail)
            }
            #[cfg(not(feature = "pdf"))]
            IngestError::NoPdfSupport { path } => format!(
                "Error processing PDF {}: PDF support not compiled in",
                path.display()
            ),
        }
    }

    /// True if `text` looks like a legacy error string rather than content.
    pub fn is_sentinel(text: &str) -> bool {
        SENTINEL_PREFIXES.iter().any(|p| text.starts_with(p))
    }
}

/// Extract plain text from a PDF, DOCX, or CSV file.
///
/// Existence is checked first, then the extension decides the decoder:
/// - `.pdf` → page text via the MuPDF backend (requires `pdf` feature)
/// - `.docx` → body paragraphs, one per line
/// - `.csv` → a text table, one row per line
///
/// Decoder failures never panic; they surface as
/// [`IngestError::DecodeFailure`] carrying the underlying description.
pub fn extract_text(path: &Path) -> Result<String, IngestError> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let kind = DocumentKind::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let decoded = match kind {
        DocumentKind::Pdf => return extract_pdf(path),
        DocumentKind::Docx => docx::extract_docx(path),
        DocumentKind::Csv => table::extract_csv(path),
    };

    decoded
        .inspect(|text| tracing::info!(path = %path.display(), %kind, chars = text.len(), "document decoded"))
        .map_err(|detail| decode_failure(kind, path, detail))
}

/// Extract text, folding any error into the legacy sentinel string.
///
/// For callers that scan whatever comes back: sentinel strings contain no
/// email address, so they produce no leads.
pub fn extract_text_or_sentinel(path: &Path) -> String {
    extract_text(path).unwrap_or_else(|e| e.to_sentinel())
}

fn decode_failure(kind: DocumentKind, path: &Path, detail: String) -> IngestError {
    tracing::warn!(path = %path.display(), %kind, error = %detail, "document decode failed");
    IngestError::DecodeFailure {
        kind,
        path: path.to_path_buf(),
        detail,
    }
}

#[cfg(feature = "pdf")]
fn extract_pdf(path: &Path) -> Result<String, IngestError> {
    let backend = leadsift_pdf_mupdf::MupdfBackend::new();
    extract_with_backend(path, DocumentKind::Pdf, &backend)
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(path: &Path) -> Result<String, IngestError> {
    Err(IngestError::NoPdfSupport {
        path: path.to_path_buf(),
    })
}

/// Decode `path` with an arbitrary [`DocumentBackend`], mapping its errors
/// to [`IngestError::DecodeFailure`].
pub fn extract_with_backend(
    path: &Path,
    kind: DocumentKind,
    backend: &dyn DocumentBackend,
) -> Result<String, IngestError> {
    match backend.extract_text(path) {
        Ok(text) => {
            tracing::info!(path = %path.display(), %kind, chars = text.len(), "document decoded");
            Ok(text)
        }
        Err(e) => Err(decode_failure(kind, path, e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingBackend;

    impl DocumentBackend for FailingBackend {
        fn extract_text(&self, _path: &Path) -> Result<String, BackendError> {
            Err(BackendError::ExtractionError("no pages".into()))
        }
    }

    struct FixedBackend(&'static str);

    impl DocumentBackend for FixedBackend {
        fn extract_text(&self, _path: &Path) -> Result<String, BackendError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_path(Path::new("a.PDF")), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_path(Path::new("b.docx")), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_path(Path::new("dir.v2/c.Csv")), Some(DocumentKind::Csv));
        assert_eq!(DocumentKind::from_path(Path::new("d.doc")), None);
        assert_eq!(DocumentKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_sentinels() {
        let not_found = IngestError::FileNotFound {
            path: PathBuf::from("x.pdf"),
        };
        assert_eq!(not_found.to_sentinel(), "Error: File not found.");

        let unsupported = IngestError::UnsupportedFormat {
            path: PathBuf::from("x.txt"),
        };
        assert_eq!(unsupported.to_sentinel(), "Error: Unsupported file type.");

        let failure = IngestError::DecodeFailure {
            kind: DocumentKind::Csv,
            path: PathBuf::from("leads.csv"),
            detail: "No columns to parse from file".into(),
        };
        assert_eq!(
            failure.to_sentinel(),
            "Error processing CSV leads.csv: No columns to parse from file"
        );

        for e in [not_found, unsupported, failure] {
            assert!(IngestError::is_sentinel(&e.to_sentinel()));
        }
        assert!(!IngestError::is_sentinel("Jane, jane@acme.com"));
    }

    #[test]
    fn test_backend_failure_becomes_decode_failure() {
        let err = extract_with_backend(Path::new("r.pdf"), DocumentKind::Pdf, &FailingBackend)
            .unwrap_err();
        match err {
            IngestError::DecodeFailure { kind, detail, .. } => {
                assert_eq!(kind, DocumentKind::Pdf);
                assert_eq!(detail, "failed to extract text: no pages");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_backend_success_passes_text_through() {
        let text = extract_with_backend(Path::new("r.pdf"), DocumentKind::Pdf, &FixedBackend("hi\n"))
            .unwrap();
        assert_eq!(text, "hi\n");
    }
}
