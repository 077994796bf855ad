//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::ports::ConversionConfig;
use crate::domain::services::PackageInfo;
use crate::domain::value_objects::{HexColor, RasterSizes};
use crate::error::IcopackResult;

use super::loader::{self, ConfigWarning};

pub const DEFAULT_ICO_PACKAGE: &str = "lucide-ico";
pub const DEFAULT_RESX_PACKAGE: &str = "lucide-winforms";
pub const DEFAULT_VERSION: &str = "0.0.1";
pub const DEFAULT_RESX_PREFIX: &str = "LucideIcons";

/// Manifest identity of the ICO run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageConfig {
    #[serde(default = "default_ico_package")]
    pub name: String,

    /// Shared by both manifests
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: default_ico_package(),
            version: default_version(),
        }
    }
}

fn default_ico_package() -> String {
    DEFAULT_ICO_PACKAGE.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

/// Raster sizes as written by the user.
///
/// Accepts both `sizes = [16, 32]` and `sizes = "16,32"`; CLI and
/// environment values always arrive as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizesSetting {
    List(Vec<u64>),
    Text(String),
}

impl SizesSetting {
    pub fn resolve(&self) -> Option<RasterSizes> {
        match self {
            SizesSetting::List(values) => RasterSizes::from_values(values.iter().copied()),
            SizesSetting::Text(text) => RasterSizes::parse(text),
        }
    }
}

impl std::fmt::Display for SizesSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizesSetting::List(values) => {
                let parts: Vec<String> = values.iter().map(u64::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            SizesSetting::Text(text) => f.write_str(text),
        }
    }
}

/// `[ico]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcoConfig {
    #[serde(default)]
    pub sizes: Option<SizesSetting>,

    /// `#RGB` / `#RRGGBB` replacement for `currentColor`
    #[serde(default)]
    pub color: Option<String>,
}

/// `[resx]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResxConfig {
    #[serde(default = "default_resx_package")]
    pub name: String,

    /// Bundle file prefix: `<prefix>.resx`, `<prefix>.<Category>.resx`
    #[serde(default = "default_resx_prefix")]
    pub prefix: String,
}

impl Default for ResxConfig {
    fn default() -> Self {
        Self {
            name: default_resx_package(),
            prefix: default_resx_prefix(),
        }
    }
}

fn default_resx_package() -> String {
    DEFAULT_RESX_PACKAGE.to_string()
}

fn default_resx_prefix() -> String {
    DEFAULT_RESX_PREFIX.to_string()
}

/// `[paths]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// SVG sources and their metadata
    #[serde(default = "default_icons_dir")]
    pub icons: PathBuf,

    #[serde(default = "default_categories_dir")]
    pub categories: PathBuf,

    /// ICO input of the bundle run; defaults to `<output>/#000000`
    #[serde(default)]
    pub ico: Option<PathBuf>,

    #[serde(default = "default_output_dir")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            icons: default_icons_dir(),
            categories: default_categories_dir(),
            ico: None,
            output: default_output_dir(),
        }
    }
}

fn default_icons_dir() -> PathBuf {
    PathBuf::from("icons")
}

fn default_categories_dir() -> PathBuf {
    PathBuf::from("categories")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

/// `[build]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Conversion threads; rayon's default when unset
    #[serde(default)]
    pub jobs: Option<usize>,
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const NAMES: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Raise the level by the number of `-v` flags
    pub fn raised_by(self, count: u8) -> Self {
        match count {
            0 => self,
            1 => self.max(Verbosity::Verbose),
            _ => Verbosity::Debug,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub ico: IcoConfig,

    #[serde(default)]
    pub resx: ResxConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> IcopackResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> IcopackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `explicit`, else `icopack.toml` in `dir`, else defaults.
    ///
    /// An explicit path that does not exist is an error; the implicit file is optional.
    pub fn discover(
        explicit: Option<&Path>,
        dir: &Path,
    ) -> IcopackResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, dir)
    }

    /// Apply environment variable overrides (ICOPACK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Resolve the `[ico]` section into conversion settings.
    ///
    /// Invalid values fall back to defaults; each fallback yields a warning message.
    pub fn conversion(&self) -> (ConversionConfig, Vec<String>) {
        let mut warnings = Vec::new();

        let color = match self.ico.color.as_deref() {
            None => None,
            Some(raw) => {
                let parsed = HexColor::parse(raw);
                if parsed.is_none() {
                    warnings.push(format!(
                        "invalid color '{}' (expected #RGB or #RRGGBB); keeping {}",
                        raw,
                        HexColor::CURRENT_COLOR
                    ));
                }
                parsed
            }
        };

        let sizes = match &self.ico.sizes {
            None => RasterSizes::default(),
            Some(setting) => setting.resolve().unwrap_or_else(|| {
                let defaults = RasterSizes::default();
                warnings.push(format!(
                    "no valid sizes in '{}' (expected integers in 1..=256); using {}",
                    setting, defaults
                ));
                defaults
            }),
        };

        (ConversionConfig { sizes, color }, warnings)
    }

    pub fn ico_package(&self) -> PackageInfo {
        PackageInfo::new(&self.package.name, &self.package.version)
    }

    pub fn resx_package(&self) -> PackageInfo {
        PackageInfo::new(&self.resx.name, &self.package.version)
    }

    /// ICO directory for a color: `<output>/<color>` (`#000000` without override)
    pub fn ico_output_dir(&self, color: Option<&HexColor>) -> PathBuf {
        let label = color
            .map(HexColor::as_str)
            .unwrap_or(HexColor::DEFAULT_DIR_LABEL);
        self.paths.output.join(label)
    }

    /// ICO input of the bundle run
    pub fn resx_source_dir(&self) -> PathBuf {
        self.paths
            .ico
            .clone()
            .unwrap_or_else(|| self.ico_output_dir(None))
    }
}
