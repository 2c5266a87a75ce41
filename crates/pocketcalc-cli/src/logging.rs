//! Log subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Builds the log filter: `RUST_LOG` when set, otherwise the verbosity default.
///
/// The interactive front-end owns the terminal, so its default is `off`.
#[must_use]
pub fn env_filter(config: &CliConfig, interactive: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if interactive {
            EnvFilter::new("off")
        } else {
            EnvFilter::new(config.verbosity.log_filter())
        }
    })
}

/// Installs the global `fmt` subscriber writing to stderr.
///
/// A second call is a no-op.
pub fn init(config: &CliConfig, interactive: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config, interactive))
        .with_writer(std::io::stderr)
        .with_ansi(config.color.should_color())
        .with_target(false)
        .try_init();
}
