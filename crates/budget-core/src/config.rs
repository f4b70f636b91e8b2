//! Page Configuration
//!
//! Settings the host page may override. Every field has a default, so an
//! absent or partial config is fine.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long a notice stays on screen
    pub notice_duration_ms: u32,
    /// `log` level name: off, error, warn, info, debug, trace
    pub log_level: String,
    pub page_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notice_duration_ms: 3500,
            log_level: "info".to_string(),
            page_title: "Home | OrçaAqui.dev".to_string(),
        }
    }
}

impl AppConfig {
    /// Parsed log level, `Info` when unrecognised
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.notice_duration_ms, 3500);
        assert_eq!(config.level_filter(), LevelFilter::Info);
        assert_eq!(config.page_title, "Home | OrçaAqui.dev");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.notice_duration_ms, 3500);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
