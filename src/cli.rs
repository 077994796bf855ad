use std::path::PathBuf;

use clap::{Parser, Subcommand};

use icopack::domain::value_objects::{HexColor, RasterSizes};

/// icopack - SVG icon set to ICO files and WinForms resource bundles
#[derive(Parser, Debug)]
#[command(name = "icopack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'icopack ico' first; 'icopack resx' bundles its output.")]
pub struct Cli {
    /// Output format for CI (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: icopack.toml in the working directory, if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every SVG icon into a multi-resolution .ico file
    Ico {
        /// Shorthand overrides: a color (#RGB, #RRGGBB) and/or a size list (16,32,48)
        #[arg(value_name = "OVERRIDES")]
        overrides: Vec<String>,

        /// Replace currentColor with this color
        #[arg(long, value_name = "HEX")]
        color: Option<String>,

        /// Comma-separated raster sizes in 1..=256
        #[arg(long, value_name = "LIST")]
        sizes: Option<String>,

        /// Directory of SVG icons
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Directory of per-icon JSON metadata (default: the source directory)
        #[arg(long, value_name = "DIR")]
        metadata: Option<PathBuf>,

        /// Output directory (default: <paths.output>/<color>)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Also write a copy of each icon under its alias names
        #[arg(long)]
        aliases: bool,

        /// Conversion threads
        #[arg(short, long, value_name = "N", value_parser = parse_jobs)]
        jobs: Option<usize>,
    },

    /// Bundle .ico files into WinForms .resx files, one per category
    Resx {
        /// Directory of .ico files (default: <paths.output>/#000000)
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Directory of per-icon JSON metadata
        #[arg(long, value_name = "DIR")]
        metadata: Option<PathBuf>,

        /// Directory of category definitions
        #[arg(long, value_name = "DIR")]
        categories: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Bundle file prefix
        #[arg(long, value_name = "NAME")]
        prefix: Option<String>,

        /// Validation threads
        #[arg(short, long, value_name = "N", value_parser = parse_jobs)]
        jobs: Option<usize>,
    },
}

fn parse_jobs(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Positional `ico` overrides, sorted into what they select
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub color: Option<String>,
    pub sizes: Option<String>,
    pub ignored: Vec<String>,
}

impl Overrides {
    /// The first color-shaped argument selects the color; the first size
    /// list with a valid size selects the sizes. Everything else is ignored.
    pub fn classify(args: &[String]) -> Self {
        let mut overrides = Overrides::default();

        for arg in args {
            if overrides.color.is_none() && HexColor::parse(arg).is_some() {
                overrides.color = Some(arg.clone());
            } else if overrides.sizes.is_none() && RasterSizes::parse(arg).is_some() {
                overrides.sizes = Some(arg.clone());
            } else {
                overrides.ignored.push(arg.clone());
            }
        }

        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classify_picks_color_and_sizes() {
        let overrides = Overrides::classify(&args(&["#abc", "32,16"]));
        assert_eq!(overrides.color.as_deref(), Some("#abc"));
        assert_eq!(overrides.sizes.as_deref(), Some("32,16"));
        assert!(overrides.ignored.is_empty());
    }

    #[test]
    fn classify_ignores_unrecognized_arguments() {
        let overrides = Overrides::classify(&args(&["notacolor", "#12", "#fff"]));
        assert_eq!(overrides.color.as_deref(), Some("#fff"));
        assert_eq!(overrides.sizes, None);
        assert_eq!(overrides.ignored, args(&["notacolor", "#12"]));
    }

    #[test]
    fn classify_first_color_wins() {
        let overrides = Overrides::classify(&args(&["#111", "#222"]));
        assert_eq!(overrides.color.as_deref(), Some("#111"));
        assert_eq!(overrides.ignored, args(&["#222"]));
    }

    #[test]
    fn classify_skips_lists_without_valid_sizes() {
        let overrides = Overrides::classify(&args(&["0,999", "48"]));
        assert_eq!(overrides.sizes.as_deref(), Some("48"));
        assert_eq!(overrides.ignored, args(&["0,999"]));
    }

    #[test]
    fn parse_jobs_rejects_zero() {
        assert!(parse_jobs("0").is_err());
        assert!(parse_jobs("many").is_err());
        assert_eq!(parse_jobs("4"), Ok(4));
    }
}
