use crate::error::GreenGuardError;
use crate::extraction::TextExtractor;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so that a label and its value printed on the
/// same row of a bill stay on the same line of text.
pub struct PdftotextExtractor {
    binary: PathBuf,
}

impl PdftotextExtractor {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        PdftotextExtractor {
            binary: binary.into(),
        }
    }

    /// Check if the configured pdftotext binary runs.
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new("pdftotext")
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, GreenGuardError> {
        // Write PDF bytes to a temp file
        let mut tmpfile = tempfile::NamedTempFile::new()
            .map_err(|e| GreenGuardError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(bytes)
            .map_err(|e| GreenGuardError::Extraction(e.to_string()))?;

        let output = Command::new(&self.binary)
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GreenGuardError::ToolNotFound {
                        tool: "pdftotext".into(),
                    }
                } else {
                    GreenGuardError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(GreenGuardError::ToolFailed {
                tool: "pdftotext".into(),
                code,
                stderr,
            });
        }

        Ok(join_pages(&String::from_utf8_lossy(&output.stdout)))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// pdftotext separates pages with form feeds; join them with newlines and
/// drop the empty page after the final separator.
fn join_pages(raw: &str) -> String {
    let mut pages: Vec<&str> = raw.split('\x0c').collect();
    while pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
        .iter()
        .map(|p| p.trim_end_matches('\n'))
        .collect::<Vec<_>>()
        .join("\n")
}
