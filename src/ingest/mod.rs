pub mod docx;
pub mod pdf;
pub mod text;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a document could not be turned into text
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file type: {0} (allowed: pdf, txt, docx)")]
    UnsupportedFile(String),

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse PDF: {0}")]
    Pdf(String),

    #[error("failed to parse DOCX: {0}")]
    Docx(String),

    #[error("document is not valid UTF-8 text")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("no text could be extracted from the document")]
    Empty,
}

/// Supported document types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
    Docx,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("pdf") => Some(DocumentKind::Pdf),
            Some("txt") => Some(DocumentKind::Text),
            Some("docx") => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    /// Extension check applied to uploads before any extraction is attempted
    pub fn from_file_name(name: &str) -> Result<Self, ExtractionError> {
        Self::from_path(Path::new(name))
            .ok_or_else(|| ExtractionError::UnsupportedFile(name.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Text => "text",
            DocumentKind::Docx => "docx",
        }
    }
}

/// An uploaded or on-disk document, held only for the duration of one extraction
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ExtractionError> {
        let name = name.into();
        let kind = DocumentKind::from_file_name(&name)?;
        Ok(Self { name, kind, bytes })
    }
}

/// Extracted content from a file
#[derive(Debug, Clone)]
pub struct ExtractedContent {
    pub source: String,
    pub kind: DocumentKind,
    pub text: String,
}

/// Extract plain text from raw document bytes.
///
/// Empty or whitespace-only output is reported as [`ExtractionError::Empty`]
/// so callers never go on to generate a quiz from nothing.
pub fn extract(bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractionError> {
    let text = match kind {
        DocumentKind::Pdf => pdf::extract(bytes)?,
        DocumentKind::Docx => docx::extract(bytes)?,
        DocumentKind::Text => text::extract(bytes)?,
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }

    Ok(text)
}

pub fn extract_document(document: &Document) -> Result<String, ExtractionError> {
    extract(&document.bytes, document.kind)
}

/// Read a file from disk and extract its text
pub fn extract_from_file(path: &Path) -> Result<ExtractedContent, ExtractionError> {
    let name = path.display().to_string();
    let kind = DocumentKind::from_file_name(&name)?;

    let bytes = std::fs::read(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = extract(&bytes, kind)?;
    tracing::debug!(source = %name, kind = kind.as_str(), chars = text.len(), "extracted text");

    Ok(ExtractedContent {
        source: name,
        kind,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(DocumentKind::from_file_name("notes.pdf").unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_file_name("notes.TXT").unwrap(), DocumentKind::Text);
        assert_eq!(DocumentKind::from_file_name("essay.Docx").unwrap(), DocumentKind::Docx);
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        assert!(matches!(
            DocumentKind::from_file_name("slides.pptx"),
            Err(ExtractionError::UnsupportedFile(_))
        ));
        assert!(DocumentKind::from_file_name("README").is_err());
        assert!(Document::new("archive.tar.gz", b"hello".to_vec()).is_err());
    }

    #[test]
    fn test_plain_text_extracted_verbatim() {
        let doc = Document::new("hello.txt", b"hello world".to_vec()).unwrap();
        assert_eq!(extract_document(&doc).unwrap(), "hello world");
    }

    #[test]
    fn test_empty_text_is_failure() {
        assert!(matches!(
            extract(b"   \n\t", DocumentKind::Text),
            Err(ExtractionError::Empty)
        ));
        assert!(matches!(extract(b"", DocumentKind::Text), Err(ExtractionError::Empty)));
    }

    #[test]
    fn test_garbage_pdf_is_failure() {
        assert!(extract(b"definitely not a pdf", DocumentKind::Pdf).is_err());
    }

    #[test]
    fn test_extract_from_file() {
        let path = std::env::temp_dir().join(format!("docquiz_test_{}.txt", std::process::id()));
        std::fs::write(&path, "The cat sat on the mat.").unwrap();

        let content = extract_from_file(&path).unwrap();
        assert_eq!(content.kind, DocumentKind::Text);
        assert_eq!(content.text, "The cat sat on the mat.");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_extract_from_missing_file() {
        let path = Path::new("/nonexistent/docquiz/missing.txt");
        assert!(matches!(
            extract_from_file(path),
            Err(ExtractionError::Io { .. })
        ));
    }
}
