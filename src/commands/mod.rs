//! Command handlers
//!
//! Each handler resolves settings (file, environment, flags), wires the
//! infrastructure adapters into a use case and reports the outcome.

pub mod ico;
pub mod resx;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use icopack::config::{Config, ConfigWarning, Verbosity};
use icopack::domain::ports::BuildEventSink;
use icopack::infrastructure::{ConsoleEventSink, JsonEventSink};
use icopack::ui::primitives::icon::Icon;
use icopack::ui::primitives::text::ColoredText;
use icopack::ui::terminal::detect_capabilities;

pub use ico::cmd_ico;
pub use resx::cmd_resx;

/// Flags shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub json: bool,
    pub verbose: u8,
    pub config: Option<PathBuf>,
}

/// Config after file discovery and environment overrides
pub(crate) struct Settings {
    pub config: Config,
    pub verbosity: Verbosity,
}

impl Settings {
    /// Load the config for the working directory; unknown keys are reported.
    pub fn load(global: &GlobalArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let (config, warnings) = Config::discover(global.config.as_deref(), &cwd)?;
        let config = config.with_env_overrides();
        let verbosity = config.output.verbosity.raised_by(global.verbose);

        if verbosity > Verbosity::Quiet {
            print_config_warnings(&warnings);
        }

        Ok(Self { config, verbosity })
    }

    /// `--json` streams NDJSON on stdout; otherwise themed console output
    pub fn event_sink(&self, json: bool) -> Arc<dyn BuildEventSink> {
        if json {
            Arc::new(JsonEventSink::stdout())
        } else {
            Arc::new(ConsoleEventSink::new(self.verbosity))
        }
    }

    /// Report a settings problem on stderr unless quiet
    pub fn warn(&self, message: &str) {
        if self.verbosity > Verbosity::Quiet {
            print_warning(message);
        }
    }
}

pub(crate) fn print_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        print_warning(&format!("{}: {}", warning.location(), warning));
    }
}

pub(crate) fn print_warning(message: &str) {
    let caps = detect_capabilities();
    eprintln!(
        "{} {}",
        Icon::Warning.colored(caps.supports_color, caps.supports_unicode),
        ColoredText::warning(message).render(caps.supports_color)
    );
}
