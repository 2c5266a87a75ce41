//! pocketcalc: a pocket calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc press "5+3="                   # prints 5 +  3 = 8.0
//! pocketcalc press "9s" --json              # prints the state snapshot
//! pocketcalc --state calc.json press "12×"  # resume later with the same file
//! pocketcalc tui                            # interactive keypad
//! ```

use clap::Parser;
use pocketcalc_cli::{
    handlers::{execute_press, execute_tui},
    logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    config.color.apply();
    logging::init(&config, matches!(cli.command, Commands::Tui));

    match cli.command {
        Commands::Press(args) => execute_press(&config, &args),
        Commands::Tui => execute_tui(&config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(color)
        .with_state_path(cli.state.clone())
}
