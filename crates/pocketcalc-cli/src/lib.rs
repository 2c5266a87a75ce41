//! pocketcalc CLI library
//!
//! Command-line host for the calculator engine: key scripts, the terminal
//! front-end and snapshot persistence between runs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;

pub use commands::{Cli, ColorArg, Commands, PressArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
