pub mod categories;
pub mod estimate;
pub mod estimators;
pub mod extract;
pub mod total;

use greenguard_core::error::GreenGuardError;
use greenguard_core::extraction::{Document, DocumentKind};
use std::path::Path;

/// Read a document, taking its kind from `kind` or else the extension.
fn load_document(path: &Path, kind: Option<&str>) -> Result<Document, GreenGuardError> {
    let mut document = Document::from_path(path)?;
    if let Some(kind) = kind {
        document.kind = DocumentKind::from_str_loose(kind)
            .ok_or_else(|| GreenGuardError::UnknownDocumentKind(kind.to_string()))?;
    }
    Ok(document)
}
