use crate::error::GreenGuardError;
use crate::extraction::TextExtractor;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Image OCR backend using the tesseract binary.
///
/// The binary path is fixed at construction; nothing is looked up per call.
pub struct TesseractExtractor {
    binary: PathBuf,
    language: Option<String>,
}

impl TesseractExtractor {
    pub fn new(binary: impl Into<PathBuf>, language: Option<String>) -> Self {
        TesseractExtractor {
            binary: binary.into(),
            language,
        }
    }

    fn command(&self, image_path: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg(image_path).arg("stdout");
        if let Some(lang) = &self.language {
            cmd.arg("-l").arg(lang);
        }
        cmd
    }
}

impl TextExtractor for TesseractExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, GreenGuardError> {
        let mut tmpfile = tempfile::NamedTempFile::new()
            .map_err(|e| GreenGuardError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(bytes)
            .map_err(|e| GreenGuardError::Extraction(e.to_string()))?;

        let output = self.command(tmpfile.path()).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GreenGuardError::ToolNotFound {
                    tool: "tesseract".into(),
                }
            } else {
                GreenGuardError::Extraction(format!("tesseract failed: {}", e))
            }
        })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(GreenGuardError::ToolFailed {
                tool: "tesseract".into(),
                code,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_includes_language() {
        let extractor = TesseractExtractor::new("/usr/bin/tesseract", Some("eng+hin".into()));
        let cmd = extractor.command(Path::new("/tmp/scan.png"));
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, vec!["/tmp/scan.png", "stdout", "-l", "eng+hin"]);
        assert_eq!(cmd.get_program(), "/usr/bin/tesseract");
    }

    #[test]
    fn test_missing_binary_reports_not_found() {
        let extractor = TesseractExtractor::new("/nonexistent/tesseract", None);
        assert!(matches!(
            extractor.extract(&[0x89, 0x50, 0x4e, 0x47]),
            Err(GreenGuardError::ToolNotFound { .. })
        ));
    }
}
