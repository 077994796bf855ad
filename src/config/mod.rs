//! Configuration module for icopack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ICOPACK_*)
//! 3. Config file (`--config PATH`, else `./icopack.toml`)
//! 4. Built-in defaults (lowest priority)

mod env;
mod loader;
mod types;

pub use env::{closest, parse_env_value, Accepted};
pub use loader::{parse_with_warnings, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{
    BuildConfig, Config, IcoConfig, OutputConfig, PackageConfig, PathsConfig, ResxConfig,
    SizesSetting, Verbosity, DEFAULT_ICO_PACKAGE, DEFAULT_RESX_PACKAGE, DEFAULT_RESX_PREFIX,
    DEFAULT_VERSION,
};
