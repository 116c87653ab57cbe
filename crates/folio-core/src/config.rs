//! Site configuration read from an inline JSON blob.

use crate::scene::{DEFAULT_RUNTIME_URL, DEFAULT_SCENE_URL};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "snake_case")]
pub struct SiteConfig {
    pub scene_url: String,
    pub runtime_url: String,
    /// Custom cursor and particle trail.
    pub cursor: bool,
    pub smooth_scroll: bool,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scene_url: DEFAULT_SCENE_URL.to_string(),
            runtime_url: DEFAULT_RUNTIME_URL.to_string(),
            cursor: true,
            smooth_scroll: true,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let c = SiteConfig::from_json(r#"{ "cursor": false }"#).unwrap();
        assert!(!c.cursor);
        assert!(c.smooth_scroll);
        assert_eq!(c.scene_url, DEFAULT_SCENE_URL);
        assert_eq!(SiteConfig::from_json("  ").unwrap(), SiteConfig::default());
    }

    #[test]
    fn log_level_is_validated() {
        let mut c = SiteConfig::default();
        assert_eq!(c.level_filter().unwrap(), log::LevelFilter::Info);
        c.log_level = "debug".into();
        assert_eq!(c.level_filter().unwrap(), log::LevelFilter::Debug);
        c.log_level = "chatty".into();
        assert!(matches!(c.level_filter(), Err(ConfigError::LogLevel(_))));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            SiteConfig::from_json("{cursor:"),
            Err(ConfigError::Json(_))
        ));
    }
}
