//! Optional TOML configuration.
//!
//! Looked up at `greenguard.toml` in the working directory unless a path is
//! given explicitly. Every section and key has a default, so an empty file
//! is valid.
//!
//! ```toml
//! [extraction]
//! pdftotext = "/usr/bin/pdftotext"
//! tesseract = "/usr/bin/tesseract"
//! ocr_language = "eng"
//!
//! [report]
//! output_dir = "reports"
//! format = "json"
//!
//! [logging]
//! filter = "greenguard_core=debug"
//! ```

use crate::error::GreenGuardError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "greenguard.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub extraction: ExtractionConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    /// pdftotext binary (name on PATH or absolute path).
    pub pdftotext: PathBuf,
    /// tesseract binary; resolved on PATH when unset.
    pub tesseract: Option<PathBuf>,
    /// Passed to tesseract as `-l`.
    pub ocr_language: Option<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            pdftotext: PathBuf::from("pdftotext"),
            tesseract: None,
            ocr_language: None,
        }
    }
}

impl ExtractionConfig {
    /// The configured OCR binary, or the first `tesseract` on PATH.
    pub fn resolve_tesseract(&self) -> Option<PathBuf> {
        self.tesseract
            .clone()
            .or_else(|| which::which("tesseract").ok())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            format: ReportFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load a config file; a missing file is an error.
    pub fn load(path: &Path) -> Result<Self, GreenGuardError> {
        let content = std::fs::read_to_string(path).map_err(|e| GreenGuardError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    pub fn parse(content: &str, source: &Path) -> Result<Self, GreenGuardError> {
        toml::from_str(content).map_err(|e| GreenGuardError::Config {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load `explicit` if given, otherwise the default file when present,
    /// otherwise defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, GreenGuardError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
