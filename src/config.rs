//! Application configuration.
//!
//! Settings come from three layers merged by figment, later layers winning:
//! built-in defaults, an optional TOML file at the platform config dir
//! (`{config_dir}/roledoc/config.toml`), and `ROLEDOC_`-prefixed environment
//! variables (nested keys split on `__`, e.g. `ROLEDOC_BACKEND__BASE_URL`).
//!
//! Loading never fails: a missing file is silently skipped and a malformed
//! layer logs a warning and falls back to defaults. The TUI must come up even
//! with a broken config on disk.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub tui: TuiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

/// Backend endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the question-answering backend.
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Render/poll tick interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Splash screen duration in milliseconds. 0 disables the splash.
    pub splash_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            splash_ms: 1500,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default file location plus environment.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration merging defaults, the given TOML file (if any),
    /// and `ROLEDOC_` environment variables.
    pub fn load_from(path: &Path) -> Self {
        let figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("ROLEDOC_").split("__"));

        match figment.extract() {
            Ok(config) => {
                if path.exists() {
                    log::info!("Loaded configuration from {}", path.display());
                } else {
                    log::debug!("No config file at {}; using defaults", path.display());
                }
                config
            }
            Err(e) => {
                log::warn!("Invalid configuration ({e}); falling back to defaults");
                Self::default()
            }
        }
    }

    /// Platform config file path: `{config_dir}/roledoc/config.toml`.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("roledoc")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert_eq!(config.tui.splash_ms, 1500);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/roledoc/config.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[backend]\nbase_url = \"http://10.0.0.2:9000\"").unwrap();

        let config = AppConfig::load_from(file.path());
        assert_eq!(config.backend.base_url, "http://10.0.0.2:9000");
        // Unmentioned sections keep their defaults
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "tick_rate_ms = \"not a number\"\n[tui").unwrap();

        let config = AppConfig::load_from(file.path());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[tui]\nsplash_ms = 900").unwrap();

        std::env::set_var("ROLEDOC_TUI__SPLASH_MS", "0");
        let config = AppConfig::load_from(file.path());
        std::env::remove_var("ROLEDOC_TUI__SPLASH_MS");

        assert_eq!(config.tui.splash_ms, 0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let raw = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }
}
