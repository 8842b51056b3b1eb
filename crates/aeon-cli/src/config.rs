//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.
//! The CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, see `InitRequest::into_options`)
//! 2. `AEON_*` environment variables, `__` between sections and keys
//!    (e.g. `AEON_DEFAULTS__TEMPLATE=full`)
//! 3. Config file: `AEON_CONFIG`, else `config.toml` in the platform config dir
//! 4. Built-in defaults

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Variable naming an explicit config file.
pub const CONFIG_ENV: &str = "AEON_CONFIG";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `init` when the matching flag is absent.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Defaults {
    pub template: Option<String>,
    pub package_manager: Option<String>,
    pub skip_install: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load from the default locations and the process environment.
    ///
    /// A file named by `AEON_CONFIG` must exist; the platform default may not.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            Some(path) => Self::load_from(Some(Path::new(&path)), true, None),
            None => Self::load_from(Self::config_path().as_deref(), false, None),
        }
    }

    /// Load with an explicit file and, for tests, an explicit environment.
    ///
    /// `env: None` reads the real process environment.
    pub fn load_from(
        file: Option<&Path>,
        required: bool,
        env: Option<HashMap<String, String>>,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = file {
            tracing::debug!(path = %path.display(), required, "Reading config file");
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("AEON")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize::<Self>()
            .context("Invalid configuration")?;

        Ok(config)
    }

    /// Path to the default configuration file, if a home directory exists.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("ai", "affectively", "aeon-foundation")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn empty_env() -> Option<HashMap<String, String>> {
        Some(HashMap::new())
    }

    #[test]
    fn defaults_leave_everything_unset() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.template, None);
        assert!(!cfg.defaults.skip_install);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg =
            AppConfig::load_from(Some(dir.path().join("absent.toml").as_path()), false, empty_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(Some(dir.path().join("absent.toml").as_path()), true, empty_env()).is_err());
    }

    #[test]
    fn file_values_are_read() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[defaults]\ntemplate = \"edge-ai\"\npackage_manager = \"bun\"\n\n[output]\nno_color = true"
        )
        .unwrap();

        let cfg = AppConfig::load_from(Some(file.path()), true, empty_env()).unwrap();
        assert_eq!(cfg.defaults.template.as_deref(), Some("edge-ai"));
        assert_eq!(cfg.defaults.package_manager.as_deref(), Some("bun"));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[defaults]\ntemplate = \"full\"").unwrap();

        let env = HashMap::from([
            ("AEON_DEFAULTS__TEMPLATE".to_string(), "minimal".to_string()),
            ("AEON_DEFAULTS__SKIP_INSTALL".to_string(), "true".to_string()),
        ]);
        let cfg = AppConfig::load_from(Some(file.path()), true, Some(env)).unwrap();
        assert_eq!(cfg.defaults.template.as_deref(), Some("minimal"));
        assert!(cfg.defaults.skip_install);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[defaults\ntemplate = ").unwrap();
        assert!(AppConfig::load_from(Some(file.path()), true, empty_env()).is_err());
    }

    #[test]
    fn config_path_ends_with_file_name() {
        if let Some(path) = AppConfig::config_path() {
            assert!(path.ends_with("config.toml"));
        }
    }
}
