//! Resx command handler

use std::path::PathBuf;

use anyhow::Result;

use icopack::application::{ResxBuildOptions, ResxBuildUseCase};
use icopack::infrastructure::LocalFs;

use super::{GlobalArgs, Settings};

/// Flags of `icopack resx`
#[derive(Debug, Clone, Default)]
pub struct ResxArgs {
    pub source: Option<PathBuf>,
    pub metadata: Option<PathBuf>,
    pub categories: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub prefix: Option<String>,
    pub jobs: Option<usize>,
}

/// Execute the resx command.
///
/// Reads the ICO directory written by `icopack ico`; invalid `.ico` files
/// are reported and left out of every bundle.
pub fn cmd_resx(global: &GlobalArgs, args: ResxArgs) -> Result<()> {
    let settings = Settings::load(global)?;
    let config = &settings.config;

    let options = ResxBuildOptions::new(
        args.source.unwrap_or_else(|| config.resx_source_dir()),
        args.metadata.unwrap_or_else(|| config.paths.icons.clone()),
        args.categories
            .unwrap_or_else(|| config.paths.categories.clone()),
        args.output.unwrap_or_else(|| config.paths.output.clone()),
    )
    .with_package(config.resx_package())
    .with_prefix(args.prefix.unwrap_or_else(|| config.resx.prefix.clone()))
    .with_jobs(args.jobs.or(config.build.jobs));

    let fs = LocalFs::new();
    ResxBuildUseCase::new(&fs)
        .with_events(settings.event_sink(global.json))
        .execute(&options)?;

    Ok(())
}
