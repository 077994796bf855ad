//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{HexColor, RasterSizes};
use crate::error::{IcopackError, IcopackResult};

use super::env::{closest, parse_env_value, Accepted};
use super::types::{Config, SizesSetting, Verbosity};

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "icopack.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}'", self.key)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

impl ConfigWarning {
    /// `file:line` location for reporting
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}", self.file.display(), line),
            None => self.file.display().to_string(),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> IcopackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| IcopackError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for reporting.
pub fn parse_with_warnings(content: &str, path: &Path) -> IcopackResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| IcopackError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit file, else `icopack.toml` in `dir`, else defaults
pub fn discover(explicit: Option<&Path>, dir: &Path) -> IcopackResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        return load_with_warnings(path);
    }

    let implicit = dir.join(CONFIG_FILE_NAME);
    if implicit.is_file() {
        return load_with_warnings(&implicit);
    }

    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (ICOPACK_* prefix)
///
/// Invalid values are reported on stderr and leave the config unchanged.
pub fn with_env_overrides(config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    with_env_overrides_to(config, get_env, &mut std::io::stderr())
}

pub(crate) fn with_env_overrides_to<W: std::io::Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    // ICOPACK_COLOR
    if let Some(raw) = get_env("ICOPACK_COLOR") {
        let accepted = Accepted::Format("#RGB or #RRGGBB");
        let parse = |s: &str| HexColor::parse(s).map(|_| s.to_string());
        if let Some(color) = parse_env_value("ICOPACK_COLOR", &raw, accepted, parse, warnings) {
            config.ico.color = Some(color);
        }
    }

    // ICOPACK_SIZES (comma-separated)
    if let Some(raw) = get_env("ICOPACK_SIZES") {
        let accepted = Accepted::Format("comma-separated sizes in 1..=256, e.g. 16,32,48");
        let parse = |s: &str| RasterSizes::parse(s).map(|_| SizesSetting::Text(s.to_string()));
        if let Some(sizes) = parse_env_value("ICOPACK_SIZES", &raw, accepted, parse, warnings) {
            config.ico.sizes = Some(sizes);
        }
    }

    // ICOPACK_JOBS
    if let Some(raw) = get_env("ICOPACK_JOBS") {
        let parse = |s: &str| s.trim().parse::<usize>().ok().filter(|n| *n > 0);
        if let Some(jobs) = parse_env_value("ICOPACK_JOBS", &raw, Accepted::Count, parse, warnings) {
            config.build.jobs = Some(jobs);
        }
    }

    // ICOPACK_VERBOSITY
    if let Some(raw) = get_env("ICOPACK_VERBOSITY") {
        let accepted = Accepted::OneOf(Verbosity::NAMES);
        if let Some(verbosity) =
            parse_env_value("ICOPACK_VERBOSITY", &raw, accepted, Verbosity::parse, warnings)
        {
            config.output.verbosity = verbosity;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "package",
        "name",
        "version",
        "ico",
        "sizes",
        "color",
        "resx",
        "prefix",
        "paths",
        "icons",
        "categories",
        "output",
        "build",
        "jobs",
        "verbosity",
    ];

    closest(unknown, CANDIDATES, 2).map(str::to_string)
}
