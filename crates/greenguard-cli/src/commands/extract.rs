use greenguard_core::config::AppConfig;
use greenguard_core::error::GreenGuardError;
use greenguard_core::extraction::DocumentReader;
use std::path::Path;

pub fn run(input_file: &Path, kind: Option<&str>, config: &AppConfig) -> Result<(), GreenGuardError> {
    let document = super::load_document(input_file, kind)?;
    let reader = DocumentReader::from_config(&config.extraction);

    // Unlike the analysis commands, surface extraction failures here.
    let text = reader.try_extract(&document)?;
    println!("{text}");
    Ok(())
}
