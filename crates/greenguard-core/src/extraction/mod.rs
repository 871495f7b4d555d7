pub mod pdftotext;
pub mod spreadsheet;
pub mod tesseract;

use crate::config::ExtractionConfig;
use crate::error::GreenGuardError;
use pdftotext::PdftotextExtractor;
use serde::{Deserialize, Serialize};
use spreadsheet::SpreadsheetExtractor;
use std::fmt;
use std::path::Path;
use tesseract::TesseractExtractor;
use tracing::{debug, warn};

/// Declared kind of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Image,
    PlainText,
    Spreadsheet,
    Unknown,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> DocumentKind {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => DocumentKind::Pdf,
            "png" | "jpg" | "jpeg" | "tif" | "tiff" | "bmp" | "gif" | "webp" => DocumentKind::Image,
            "txt" | "text" | "csv" | "md" | "log" => DocumentKind::PlainText,
            "xlsx" | "xlsm" => DocumentKind::Spreadsheet,
            _ => DocumentKind::Unknown,
        }
    }

    /// Map a MIME type such as "application/pdf" or "image/png".
    pub fn from_mime(mime: &str) -> DocumentKind {
        let mime = mime.trim().to_lowercase();
        if mime.contains("pdf") {
            DocumentKind::Pdf
        } else if mime.starts_with("image/") {
            DocumentKind::Image
        } else if mime.contains("spreadsheetml") {
            DocumentKind::Spreadsheet
        } else if mime.starts_with("text/") {
            DocumentKind::PlainText
        } else {
            DocumentKind::Unknown
        }
    }

    pub fn from_str_loose(s: &str) -> Option<DocumentKind> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "image" | "img" | "png" | "jpg" | "jpeg" => Some(DocumentKind::Image),
            "text" | "txt" | "plain" => Some(DocumentKind::PlainText),
            "xlsx" | "spreadsheet" => Some(DocumentKind::Spreadsheet),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "pdf"),
            DocumentKind::Image => write!(f, "image"),
            DocumentKind::PlainText => write!(f, "text"),
            DocumentKind::Spreadsheet => write!(f, "spreadsheet"),
            DocumentKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// An uploaded document: raw bytes plus what it claims to be.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, kind: DocumentKind, bytes: Vec<u8>) -> Self {
        Document {
            name: name.into(),
            kind,
            bytes,
        }
    }

    /// Read a file, inferring the kind from its extension.
    pub fn from_path(path: &Path) -> Result<Document, GreenGuardError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Document::new(name, DocumentKind::from_path(path), bytes))
    }
}

/// Trait for text extraction backends.
pub trait TextExtractor: Send + Sync {
    /// Extract the text content of a document.
    fn extract(&self, bytes: &[u8]) -> Result<String, GreenGuardError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Lossy UTF-8 decoding.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, GreenGuardError> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    fn backend_name(&self) -> &str {
        "plain-text"
    }
}

/// Routes documents to the backend for their kind.
pub struct DocumentReader {
    pdf: Box<dyn TextExtractor>,
    image: Option<Box<dyn TextExtractor>>,
    plain: Box<dyn TextExtractor>,
    spreadsheet: Box<dyn TextExtractor>,
}

impl DocumentReader {
    /// Build the default backends. Images need a resolvable OCR binary;
    /// without one, image documents extract to empty text.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        let image: Option<Box<dyn TextExtractor>> = match config.resolve_tesseract() {
            Some(binary) => Some(Box::new(TesseractExtractor::new(
                binary,
                config.ocr_language.clone(),
            ))),
            None => {
                warn!("tesseract not found; OCR of images is disabled");
                None
            }
        };

        DocumentReader {
            pdf: Box::new(PdftotextExtractor::new(config.pdftotext.clone())),
            image,
            plain: Box::new(PlainTextExtractor),
            spreadsheet: Box::new(SpreadsheetExtractor),
        }
    }

    /// Replace the backend used for `kind`. `Unknown` is not routable and
    /// is ignored.
    pub fn with_extractor(mut self, kind: DocumentKind, extractor: Box<dyn TextExtractor>) -> Self {
        match kind {
            DocumentKind::Pdf => self.pdf = extractor,
            DocumentKind::Image => self.image = Some(extractor),
            DocumentKind::PlainText => self.plain = extractor,
            DocumentKind::Spreadsheet => self.spreadsheet = extractor,
            DocumentKind::Unknown => {}
        }
        self
    }

    pub fn has_ocr(&self) -> bool {
        self.image.is_some()
    }

    /// Extract text, surfacing backend errors.
    pub fn try_extract(&self, document: &Document) -> Result<String, GreenGuardError> {
        match document.kind {
            DocumentKind::Pdf => self.pdf.extract(&document.bytes),
            DocumentKind::Image => self.ocr(&document.bytes),
            DocumentKind::PlainText => self.plain.extract(&document.bytes),
            DocumentKind::Spreadsheet => self.spreadsheet.extract(&document.bytes),
            // Unknown binaries are most often photos; fall back to raw text.
            DocumentKind::Unknown => self
                .ocr(&document.bytes)
                .or_else(|_| self.plain.extract(&document.bytes)),
        }
    }

    /// Extract text, returning an empty string on any failure.
    pub fn extract_text(&self, document: &Document) -> String {
        match self.try_extract(document) {
            Ok(text) => {
                debug!(
                    document = %document.name,
                    kind = %document.kind,
                    chars = text.len(),
                    "extracted text"
                );
                text
            }
            Err(e) => {
                warn!(
                    document = %document.name,
                    kind = %document.kind,
                    error = %e,
                    "text extraction failed"
                );
                String::new()
            }
        }
    }

    fn ocr(&self, bytes: &[u8]) -> Result<String, GreenGuardError> {
        match &self.image {
            Some(extractor) => extractor.extract(bytes),
            None => Err(GreenGuardError::ToolNotFound {
                tool: "tesseract".into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedExtractor(&'static str);

    impl TextExtractor for FixedExtractor {
        fn extract(&self, _bytes: &[u8]) -> Result<String, GreenGuardError> {
            Ok(self.0.to_string())
        }

        fn backend_name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingExtractor;

    impl TextExtractor for FailingExtractor {
        fn extract(&self, _bytes: &[u8]) -> Result<String, GreenGuardError> {
            Err(GreenGuardError::Extraction("corrupt".into()))
        }

        fn backend_name(&self) -> &str {
            "failing"
        }
    }

    fn reader_without_ocr() -> DocumentReader {
        DocumentReader {
            pdf: Box::new(FailingExtractor),
            image: None,
            plain: Box::new(PlainTextExtractor),
            spreadsheet: Box::new(FailingExtractor),
        }
    }

    #[test]
    fn test_kind_from_path() {
        assert_eq!(DocumentKind::from_path(Path::new("bill.PDF")), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("scan.jpeg")), DocumentKind::Image);
        assert_eq!(DocumentKind::from_path(Path::new("notes.txt")), DocumentKind::PlainText);
        assert_eq!(
            DocumentKind::from_path(Path::new("meter.xlsx")),
            DocumentKind::Spreadsheet
        );
        assert_eq!(DocumentKind::from_path(Path::new("blob")), DocumentKind::Unknown);
    }

    #[test]
    fn test_kind_from_mime() {
        assert_eq!(DocumentKind::from_mime("application/pdf"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_mime("image/png"), DocumentKind::Image);
        assert_eq!(DocumentKind::from_mime("text/plain"), DocumentKind::PlainText);
        assert_eq!(
            DocumentKind::from_mime(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            DocumentKind::Spreadsheet
        );
        assert_eq!(
            DocumentKind::from_mime("application/octet-stream"),
            DocumentKind::Unknown
        );
    }

    #[test]
    fn test_plain_text_is_lossy() {
        let text = PlainTextExtractor.extract(b"water \xff 100").unwrap();
        assert!(text.starts_with("water "));
        assert!(text.ends_with(" 100"));
    }

    #[test]
    fn test_failure_yields_empty_string() {
        let reader = reader_without_ocr();
        let doc = Document::new("bill.pdf", DocumentKind::Pdf, vec![1, 2, 3]);
        assert!(reader.try_extract(&doc).is_err());
        assert_eq!(reader.extract_text(&doc), "");
    }

    #[test]
    fn test_image_without_ocr_is_empty() {
        let reader = reader_without_ocr();
        assert!(!reader.has_ocr());
        let doc = Document::new("scan.png", DocumentKind::Image, vec![0x89, 0x50]);
        assert_eq!(reader.extract_text(&doc), "");
    }

    #[test]
    fn test_unknown_falls_back_to_plain_text() {
        let reader = reader_without_ocr();
        let doc = Document::new("blob", DocumentKind::Unknown, b"diesel 40".to_vec());
        assert_eq!(reader.extract_text(&doc), "diesel 40");
    }

    #[test]
    fn test_unknown_prefers_ocr() {
        let reader =
            reader_without_ocr().with_extractor(DocumentKind::Image, Box::new(FixedExtractor("ocr")));
        let doc = Document::new("blob", DocumentKind::Unknown, b"raw".to_vec());
        assert_eq!(reader.extract_text(&doc), "ocr");
    }
}
