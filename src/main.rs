//! icopack CLI - SVG icon set to ICO files and WinForms resource bundles
//!
//! Usage: icopack <COMMAND>
//!
//! Commands:
//!   ico   Convert every SVG icon into a multi-resolution .ico file
//!   resx  Bundle .ico files into WinForms .resx files, one per category

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::ico::IcoArgs;
use commands::resx::ResxArgs;
use commands::GlobalArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global = GlobalArgs {
        json: cli.json,
        verbose: cli.verbose,
        config: cli.config,
    };

    match cli.command {
        Commands::Ico {
            overrides,
            color,
            sizes,
            source,
            metadata,
            output,
            aliases,
            jobs,
        } => commands::cmd_ico(
            &global,
            IcoArgs {
                overrides,
                color,
                sizes,
                source,
                metadata,
                output,
                aliases,
                jobs,
            },
        ),
        Commands::Resx {
            source,
            metadata,
            categories,
            output,
            prefix,
            jobs,
        } => commands::cmd_resx(
            &global,
            ResxArgs {
                source,
                metadata,
                categories,
                output,
                prefix,
                jobs,
            },
        ),
    }
}
