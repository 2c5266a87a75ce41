//! Snapshot persistence between runs

use std::fs;
use std::path::Path;

use pocketcalc::prelude::{Calculator, Snapshot};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Loads the calculator from `path`.
///
/// No path, or a path that does not exist yet, gives a fresh calculator.
pub fn load_calculator(path: Option<&Path>) -> CliResult<Calculator> {
    let Some(path) = path else {
        return Ok(Calculator::new());
    };
    if !path.exists() {
        debug!(path = %path.display(), "no state file, starting fresh");
        return Ok(Calculator::new());
    }

    let text = fs::read_to_string(path)?;
    let calculator = Snapshot::from_json(&text)
        .and_then(|snapshot| Calculator::from_snapshot(&snapshot))
        .map_err(|e| CliError::snapshot(path, e))?;
    info!(path = %path.display(), "state restored");
    Ok(calculator)
}

/// Saves the calculator's snapshot to `path`, creating parent directories
pub fn save_calculator(path: Option<&Path>, calculator: &Calculator) -> CliResult<()> {
    let Some(path) = path else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = calculator.snapshot().to_json()?;
    fs::write(path, json)?;
    info!(path = %path.display(), "state saved");
    Ok(())
}
