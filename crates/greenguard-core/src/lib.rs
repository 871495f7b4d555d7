pub mod classify;
pub mod config;
pub mod error;
pub mod estimators;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod registry;
pub mod report;
pub mod trace;

use classify::outcome::{DashboardResult, EstimateResult};
use estimators::schema::EstimatorDef;
use extraction::{Document, DocumentReader};
use tracing::warn;

/// Run the multi-category aggregator over already-extracted text.
pub fn analyze_text(text: &str) -> DashboardResult {
    classify::aggregate(text)
}

/// Main API entry point: extract a document and aggregate every category.
///
/// Extraction failures are not errors here; the document is treated as
/// empty text and the result reports no matches.
pub fn analyze_document(document: &Document, reader: &DocumentReader) -> DashboardResult {
    let text = reader.extract_text(document);
    if text.trim().is_empty() {
        warn!(document = %document.name, "no text extracted");
    }
    classify::aggregate(&text)
}

/// Extract a document and run a single estimator over it.
pub fn estimate_document(
    document: &Document,
    reader: &DocumentReader,
    estimator: &EstimatorDef,
) -> EstimateResult {
    let text = reader.extract_text(document);
    if text.trim().is_empty() {
        warn!(document = %document.name, "no text extracted");
    }
    classify::run_estimator(&text, estimator)
}
