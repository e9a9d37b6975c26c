use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "sheeplingo.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub splash_ms: u64,
    pub quiz_reveal_ms: u64,
    pub quiz_redirect_ms: u64,
    pub log_filter: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("sheeplingo-data"),
            splash_ms: 2000,
            quiz_reveal_ms: 2000,
            quiz_redirect_ms: 3000,
            log_filter: "info".to_string(),
            window_width: 1100.0,
            window_height: 800.0,
        }
    }
}

impl Config {
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    pub fn quiz_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.quiz_reveal_ms)
    }

    pub fn quiz_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.quiz_redirect_ms)
    }
}

pub fn parse_config(path: &Path, contents: &str) -> Result<Config, ConfigError> {
    toml::from_str::<Config>(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses the config file, `None` when it does not exist. Does not
/// log, so it can run before the subscriber is installed.
pub fn read_config_file(path: &Path) -> Result<Option<Config>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(path, &contents).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads the config file. A missing file yields the defaults.
pub fn load_config_from_file(path: &Path) -> Result<Config, ConfigError> {
    Ok(read_config_file(path)?.unwrap_or_else(|| {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        Config::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg = parse_config(Path::new("t.toml"), "splash_ms = 10\ndata_dir = \"/tmp/x\"").unwrap();
        assert_eq!(cfg.splash_ms, 10);
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/x"));
        assert_eq!(cfg.quiz_reveal_ms, 2000);
        assert_eq!(cfg.quiz_redirect_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_bad_config_is_error() {
        let err = parse_config(Path::new("t.toml"), "splash_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = Path::new("/definitely/not/here/sheeplingo.toml");
        assert_eq!(read_config_file(path).unwrap(), None);
        let cfg = load_config_from_file(path).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
