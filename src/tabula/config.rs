use crate::error::{Result, TabulaError};
use crate::printer::DEFAULT_INDENT_WIDTH;
use crate::style::StyleOptions;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "TABULA_CONFIG_DIR";

/// Persistent defaults, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TabulaConfig {
    /// Table options used when no command-line flag overrides them
    #[serde(default)]
    pub table: StyleOptions,

    /// Spaces per indent level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

impl Default for TabulaConfig {
    fn default() -> Self {
        Self {
            table: StyleOptions::default(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl TabulaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TabulaError::Io)?;
        let config: TabulaConfig =
            serde_json::from_str(&content).map_err(TabulaError::Serialization)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TabulaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TabulaError::Serialization)?;
        fs::write(config_path, content).map_err(TabulaError::Io)?;
        Ok(())
    }
}

/// Picks the config directory: explicit path, then `TABULA_CONFIG_DIR`, then the
/// platform config dir. `None` when no home directory can be determined.
pub fn config_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "tabula", "tabula").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Border, Justify};
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempdir().unwrap();
        let config = TabulaConfig::load(dir.path()).unwrap();
        assert_eq!(config, TabulaConfig::default());
        assert_eq!(config.indent_width, 2);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");
        let config = TabulaConfig {
            table: StyleOptions::default()
                .with_border(Border::custom("line", [("horizontal", "=")]))
                .with_justify(Justify::Center)
                .with_separate_rows(true),
            indent_width: 4,
        };
        config.save(&nested).unwrap();
        assert_eq!(TabulaConfig::load(&nested).unwrap(), config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"table": {"border": "ascii"}}"#,
        )
        .unwrap();
        let config = TabulaConfig::load(dir.path()).unwrap();
        assert_eq!(config.table.border, Border::from("ascii"));
        assert_eq!(config.table.padding, 1);
        assert_eq!(config.table.justify_header, Justify::Center);
        assert_eq!(config.indent_width, 2);
    }

    #[test]
    fn test_malformed_config_is_serialization_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        let err = TabulaConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, TabulaError::Serialization(_)));
    }

    #[test]
    fn test_explicit_config_dir_wins() {
        let dir = tempdir().unwrap();
        assert_eq!(config_dir(Some(dir.path())), Some(dir.path().to_path_buf()));
    }
}
