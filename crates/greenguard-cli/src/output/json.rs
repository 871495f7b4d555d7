use greenguard_core::error::GreenGuardError;
use serde::Serialize;

pub fn print<T: Serialize>(result: &T) -> Result<(), GreenGuardError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
