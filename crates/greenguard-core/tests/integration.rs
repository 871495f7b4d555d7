//! Integration tests for the document -> dashboard / estimate pipeline.
//!
//! Uses a MockExtractor that returns fixed text without invoking
//! pdftotext or tesseract, so these tests run without either installed.

use greenguard_core::config::ExtractionConfig;
use greenguard_core::error::GreenGuardError;
use greenguard_core::estimators::builtin::load_preset;
use greenguard_core::estimators::parse_estimator_str;
use greenguard_core::extraction::{Document, DocumentKind, DocumentReader, TextExtractor};
use greenguard_core::model::Category;
use greenguard_core::report::{EmissionReport, ReportRenderer, TextReportRenderer};
use greenguard_core::{analyze_document, analyze_text, estimate_document};
use std::path::PathBuf;

struct MockExtractor {
    text: String,
}

impl TextExtractor for MockExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<String, GreenGuardError> {
        Ok(self.text.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct BrokenExtractor;

impl TextExtractor for BrokenExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<String, GreenGuardError> {
        Err(GreenGuardError::Extraction("damaged file".into()))
    }

    fn backend_name(&self) -> &str {
        "broken"
    }
}

/// A reader whose OCR binary is configured but never run.
fn base_reader() -> DocumentReader {
    DocumentReader::from_config(&ExtractionConfig {
        pdftotext: PathBuf::from("/nonexistent/pdftotext"),
        tesseract: Some(PathBuf::from("/nonexistent/tesseract")),
        ocr_language: None,
    })
}

fn reader_with(kind: DocumentKind, lines: &[&str]) -> DocumentReader {
    base_reader().with_extractor(
        kind,
        Box::new(MockExtractor {
            text: lines.join("\n"),
        }),
    )
}

fn pdf(name: &str) -> Document {
    Document::new(name, DocumentKind::Pdf, b"%PDF-1.4".to_vec())
}

// ---------------------------------------------------------------------------
// Electricity bill: one line, two numbers, Carbon
// ---------------------------------------------------------------------------
#[test]
fn electricity_bill_pdf() {
    let reader = reader_with(
        DocumentKind::Pdf,
        &["Electricity bill: total units 100 kWh, amount due 500"],
    );

    let result = analyze_document(&pdf("bill.pdf"), &reader);

    assert!(result.has_matches());
    assert_eq!(result.usage.get(Category::Carbon), 600.0);
    assert_eq!(result.emissions.get(Category::Carbon), 492.0);
    // Nothing else picked up
    assert_eq!(result.total_usage(), 600.0);
    assert_eq!(result.total_emission(), 492.0);
}

// ---------------------------------------------------------------------------
// Fuel receipt photo: label and quantity on separate OCR lines
// ---------------------------------------------------------------------------
#[test]
fn fuel_receipt_image_uses_neighbor_lines() {
    let reader = reader_with(DocumentKind::Image, &["Fuel station", "Diesel", "42.5"]);
    let doc = Document::new("receipt.jpg", DocumentKind::Image, vec![0xff, 0xd8]);

    let result = analyze_document(&doc, &reader);

    // "Fuel station" finds 42.5 two lines down, "Diesel" one line down.
    assert_eq!(result.usage.get(Category::FuelEmission), 85.0);
    assert_eq!(result.emissions.get(Category::FuelEmission), 227.8);

    let fuel = result
        .outcomes()
        .into_iter()
        .find(|o| o.category == Category::FuelEmission)
        .unwrap();
    assert_eq!(fuel.matched_lines, 2);
    assert_eq!(fuel.unit_label, "litres");
}

// ---------------------------------------------------------------------------
// Plain text goes through the real UTF-8 backend
// ---------------------------------------------------------------------------
#[test]
fn plain_text_document() {
    let reader = base_reader();
    let doc = Document::new(
        "farm-log.txt",
        DocumentKind::PlainText,
        b"Trees planted 10\nSteam boiler output 500".to_vec(),
    );

    let result = analyze_document(&doc, &reader);

    assert_eq!(result.usage.get(Category::PlantIntake), 10.0);
    assert_eq!(result.emissions.get(Category::PlantIntake), -217.7);
    assert_eq!(result.emissions.get(Category::Vapor), 3.5);
    assert_eq!(result.total_emission(), -214.2);
}

// ---------------------------------------------------------------------------
// No keywords at all
// ---------------------------------------------------------------------------
#[test]
fn unrelated_document_reports_no_match() {
    let reader = reader_with(
        DocumentKind::Pdf,
        &["Dear customer,", "Your order #1234 has shipped.", "Thanks!"],
    );

    let result = analyze_document(&pdf("letter.pdf"), &reader);

    assert!(result.no_match);
    assert!(result.outcomes().iter().all(|o| !o.has_data()));
    let series = result.chart_series();
    assert_eq!(series.categories.len(), Category::COUNT);
    assert!(series.usage.iter().all(|v| *v == 0.0));
}

// ---------------------------------------------------------------------------
// Failed extraction is empty text, not an error
// ---------------------------------------------------------------------------
#[test]
fn broken_pdf_is_treated_as_empty() {
    let reader = base_reader().with_extractor(DocumentKind::Pdf, Box::new(BrokenExtractor));

    let result = analyze_document(&pdf("corrupt.pdf"), &reader);

    assert!(result.no_match);
    assert!(result.trace.lines.is_empty());
}

// ---------------------------------------------------------------------------
// Single-category estimators
// ---------------------------------------------------------------------------
#[test]
fn plant_intake_estimator() {
    let reader = reader_with(DocumentKind::Pdf, &["Trees planted: 50"]);
    let preset = load_preset("plant-intake").unwrap();

    let result = estimate_document(&pdf("plantation.pdf"), &reader, &preset);

    let estimate = result.estimate.unwrap();
    assert_eq!(estimate.total_units, 50.0);
    assert_eq!(estimate.emission, -1088.5);
}

#[test]
fn estimator_sums_whole_document() {
    // Every number counts once a keyword is present, including the year.
    let reader = reader_with(
        DocumentKind::Pdf,
        &["Electricity statement 2024", "Units consumed 100"],
    );
    let carbon = load_preset("carbon").unwrap();

    let result = estimate_document(&pdf("statement.pdf"), &reader, &carbon);

    let estimate = result.estimate.unwrap();
    assert_eq!(estimate.total_units, 2124.0);
    assert_eq!(estimate.emission, 1741.68);
}

#[test]
fn estimator_not_applicable() {
    let reader = reader_with(DocumentKind::Pdf, &["Diesel 40 litres"]);
    let methane = load_preset("methane").unwrap();

    let result = estimate_document(&pdf("receipt.pdf"), &reader, &methane);

    assert!(!result.is_applicable());
    assert!(EmissionReport::for_estimate(&result).is_none());
}

#[test]
fn custom_estimator_from_json() {
    let def = parse_estimator_str(
        r#"{
            "name": "lpg",
            "title": "LPG Emission Report",
            "keywords": ["lpg", "cylinder"],
            "factor": 2.98,
            "precision": 2,
            "unit_label": "kg"
        }"#,
    )
    .unwrap();
    let reader = reader_with(DocumentKind::PlainText, &["LPG cylinder refill", "14.2 kg"]);
    let doc = Document::new("lpg.txt", DocumentKind::PlainText, Vec::new());

    let result = estimate_document(&doc, &reader, &def);

    let estimate = result.estimate.unwrap();
    assert_eq!(estimate.total_units, 14.2);
    assert_eq!(estimate.emission, 42.32);
    assert_eq!(result.gas_label, "kg CO2");
}

// ---------------------------------------------------------------------------
// Dashboard summary report
// ---------------------------------------------------------------------------
#[test]
fn dashboard_report_written_to_disk() {
    let result = analyze_text("Electricity bill: total units 100 kWh, amount due 500");
    let report = EmissionReport::for_dashboard(&result);
    let dir = tempfile::tempdir().unwrap();

    let path = TextReportRenderer::new(dir.path()).render(&report).unwrap();

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("Total_Emission_Summary_Report_"));
    let body = std::fs::read_to_string(&path).unwrap();
    assert!(body.contains("Total Units Detected: 600.0 units"));
    assert!(body.contains("Estimated Emissions: 492.0 kg CO2"));
}
