//! ICO command handler

use std::path::PathBuf;

use anyhow::Result;

use icopack::application::{IcoBuildOptions, IcoBuildUseCase};
use icopack::config::SizesSetting;
use icopack::infrastructure::{LocalFs, SvgIcoConverter};

use super::{GlobalArgs, Settings};
use crate::cli::Overrides;

/// Flags of `icopack ico`
#[derive(Debug, Clone, Default)]
pub struct IcoArgs {
    pub overrides: Vec<String>,
    pub color: Option<String>,
    pub sizes: Option<String>,
    pub source: Option<PathBuf>,
    pub metadata: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub aliases: bool,
    pub jobs: Option<usize>,
}

/// Execute the ico command.
///
/// Per-icon failures are reported but do not fail the command.
pub fn cmd_ico(global: &GlobalArgs, args: IcoArgs) -> Result<()> {
    let mut settings = Settings::load(global)?;

    // Explicit flags beat positional shorthand
    let positional = Overrides::classify(&args.overrides);
    for ignored in &positional.ignored {
        settings.warn(&format!(
            "ignoring argument '{}' (expected #RGB, #RRGGBB or a size list like 16,32,48)",
            ignored
        ));
    }
    if let Some(color) = args.color.or(positional.color) {
        settings.config.ico.color = Some(color);
    }
    if let Some(sizes) = args.sizes.or(positional.sizes) {
        settings.config.ico.sizes = Some(SizesSetting::Text(sizes));
    }

    let (conversion, fallbacks) = settings.config.conversion();
    for fallback in &fallbacks {
        settings.warn(fallback);
    }

    let config = &settings.config;
    let source = args.source.unwrap_or_else(|| config.paths.icons.clone());
    let output = args
        .output
        .unwrap_or_else(|| config.ico_output_dir(conversion.color.as_ref()));

    let mut options = IcoBuildOptions::new(source, output)
        .with_config(conversion)
        .with_package(config.ico_package())
        .with_aliases(args.aliases)
        .with_jobs(args.jobs.or(config.build.jobs));
    if let Some(metadata) = args.metadata {
        options = options.with_metadata(metadata);
    }

    let fs = LocalFs::new();
    let converter = SvgIcoConverter::new();
    IcoBuildUseCase::new(&converter, &fs)
        .with_events(settings.event_sink(global.json))
        .execute(&options)?;

    Ok(())
}
