//! # Configuration Management
//!
//! Optional TOML file for the CLI: where the state lives and the engine constants.

use risk_engine::EngineCfg;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the state file
pub const DEFAULT_STATE_PATH: &str = "./fx_state.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// State file path; the `--state` flag takes precedence
    pub state_path: Option<PathBuf>,
    /// Engine constants
    pub engine: EngineCfg,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&content)?;
        config.engine.validate()?;
        Ok(config)
    }

    /// State file to use, preferring an explicit override
    pub fn resolve_state_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.state_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: CliConfig = toml::from_str("[engine]\ntick = 0.01\n").unwrap();
        assert_eq!(config.engine.tick, 0.01);
        assert_eq!(config.engine.default_unit, 100_000.0);
        assert_eq!(config.state_path, None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("risk.toml");
        let config = CliConfig {
            state_path: Some(PathBuf::from("/tmp/book.json")),
            engine: EngineCfg::default(),
        };

        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(CliConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_engine_cfg_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("risk.toml");
        std::fs::write(&path, "[engine]\ntick = -1.0\n").unwrap();

        assert!(CliConfig::load_from_file(&path).is_err());
    }

    #[test]
    fn test_state_path_precedence() {
        let config = CliConfig { state_path: Some(PathBuf::from("from_config.json")), ..Default::default() };
        assert_eq!(config.resolve_state_path(Some(Path::new("flag.json"))), PathBuf::from("flag.json"));
        assert_eq!(config.resolve_state_path(None), PathBuf::from("from_config.json"));
        assert_eq!(CliConfig::default().resolve_state_path(None), PathBuf::from(DEFAULT_STATE_PATH));
    }
}
