//! Configuration file loading.
//!
//! The file is TOML holding an [`AnalyticsConfig`]; every key is optional.
//!
//! ```toml
//! tax_treatment = "CouponOnly"
//! duration_epsilon = 1e-9
//!
//! [solver]
//! tolerance = 1e-6
//! max_iterations = 100
//! ```

use std::path::{Path, PathBuf};

use yieldrank_analytics::config::AnalyticsConfig;

use crate::error::{CliError, CliResult};

/// Default config file location: `<config dir>/yieldrank/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("yieldrank").join("config.toml"))
}

/// Loads the effective configuration.
///
/// An explicit path must exist. Without one, the default location is used
/// when present, otherwise built-in defaults apply.
pub fn load(explicit: Option<&Path>) -> CliResult<AnalyticsConfig> {
    if let Some(path) = explicit {
        return from_file(path);
    }

    match default_path() {
        Some(path) if path.exists() => from_file(&path),
        _ => {
            tracing::debug!("no config file, using defaults");
            Ok(AnalyticsConfig::default())
        }
    }
}

/// Loads configuration from a TOML file.
pub fn from_file(path: &Path) -> CliResult<AnalyticsConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
    let config: AnalyticsConfig = toml::from_str(&content)
        .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Renders a configuration as TOML.
pub fn to_toml(config: &AnalyticsConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::Config(e.to_string()))
}
