//! Host Page Config
//!
//! The host page may embed overrides as
//! `<script id="app-config" type="application/json">{...}</script>`.

use budget_core::AppConfig;

const CONFIG_ELEMENT_ID: &str = "app-config";

fn read_config_json() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

pub fn parse_config(json: &str) -> Result<AppConfig, String> {
    if json.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {}", e))
}

/// Config from the host page, or defaults when absent or broken
pub fn load_config() -> AppConfig {
    let Some(json) = read_config_json() else {
        return AppConfig::default();
    };
    parse_config(&json).unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        AppConfig::default()
    })
}
