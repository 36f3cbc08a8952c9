use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

use anyhow::{ensure, Context};

pub const API_URL: &str = "https://api.aladhan.com/v1/timingsByCity";
/// Kementerian Agama Republik Indonesia
pub const CALCULATION_METHOD: u8 = 20;
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub method: u8,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            method: CALCULATION_METHOD,
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Built-in defaults, or the given TOML file layered over them.
    /// Nothing is read unless a path is passed explicitly.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        ensure!(
            config.timeout_secs > 0,
            "invalid config file {}: timeout_secs must be at least 1",
            path.display()
        );
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.api_url, API_URL);
        assert_eq!(config.method, 20);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("method = 3").unwrap();
        assert_eq!(config.method, 3);
        assert_eq!(config.api_url, API_URL);
        assert_eq!(config.timeout_secs, REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn loads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("jadwal-sholat-{}.toml", std::process::id()));
        fs::write(&path, "api_url = \"http://127.0.0.1:9/v1\"\ntimeout_secs = 2\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:9/v1");
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.method, CALCULATION_METHOD);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let path = std::env::temp_dir().join(format!("jadwal-sholat-zero-{}.toml", std::process::id()));
        fs::write(&path, "timeout_secs = 0\n").unwrap();
        let result = Config::load(Some(&path));
        fs::remove_file(&path).unwrap();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("timeout_secs"), "{err}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = Path::new("/definitely/not/here/jadwal.toml");
        assert!(Config::load(Some(path)).is_err());
    }
}
