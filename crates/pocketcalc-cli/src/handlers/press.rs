//! Press command handler

use console::style;
use pocketcalc::prelude::{CalcError, Calculator};
use tracing::debug;

use super::state::{load_calculator, save_calculator};
use crate::commands::PressArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Execute the press command.
///
/// Restores state, runs the key script, prints the result and saves state.
/// Calculator notices go to stderr and do not fail the command.
pub fn execute_press(config: &CliConfig, args: &PressArgs) -> CliResult<()> {
    let mut calculator = load_calculator(config.state_path())?;

    let notices = calculator
        .press_keys(&args.keys)
        .map_err(|key| CliError::invalid_key(&args.keys, key))?;
    debug!(keys = %args.keys, notices = notices.len(), "key script applied");

    if !config.verbosity.is_quiet() {
        for notice in &notices {
            eprintln!("{}", format_notice(*notice));
        }
    }

    println!("{}", render_output(&calculator, args.json)?);
    save_calculator(config.state_path(), &calculator)
}

/// Renders what the press command prints: the display, or the snapshot JSON
pub fn render_output(calculator: &Calculator, json: bool) -> CliResult<String> {
    if json {
        Ok(calculator.snapshot().to_json()?)
    } else {
        Ok(calculator.display())
    }
}

/// Formats a notice as a styled warning line
#[must_use]
pub fn format_notice(notice: CalcError) -> String {
    format!("{} {}", style("warning:").for_stderr().yellow().bold(), notice.notice())
}
