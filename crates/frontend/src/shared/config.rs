//! Page-level configuration of the order form script.
//!
//! Defaults match the markup rendered by the order page. A page may override
//! any subset of them with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="order-form-config">
//!     { "cutoff_hour": 12, "add_line_id": "new_line" }
//! </script>
//! ```

use contracts::domain::a002_order_date::DEFAULT_CUTOFF_HOUR;
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional inline override block
pub const CONFIG_ELEMENT_ID: &str = "order-form-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// `name` of the `<input type="date">` to pre-fill
    pub date_field: String,
    /// Selector of the order table
    pub table_selector: String,
    /// Id of the "add line" trigger
    pub add_line_id: String,
    /// Selector of the order form whose submission is summarised
    pub form_selector: String,
    /// Local hour from which the default date moves one more day ahead
    pub cutoff_hour: u32,
    pub log_level: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            date_field: "date".to_string(),
            table_selector: "table".to_string(),
            add_line_id: "add_line".to_string(),
            form_selector: "form".to_string(),
            cutoff_hour: DEFAULT_CUTOFF_HOUR,
            log_level: "debug".to_string(),
        }
    }
}

impl FormConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }

    /// Read the override block if the page has one.
    ///
    /// Returns the defaults when the block is absent or cannot be parsed;
    /// parse failures are logged, not raised.
    pub fn load(document: &Document) -> Self {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let json = element.text_content().unwrap_or_default();

        match Self::from_json(&json) {
            Ok(config) => {
                log::debug!("order form config: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = FormConfig::from_json(r#"{ "cutoff_hour": 12 }"#).unwrap();
        assert_eq!(config.cutoff_hour, 12);
        assert_eq!(config.date_field, "date");
        assert_eq!(config.add_line_id, "add_line");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(FormConfig::from_json("{}").unwrap(), FormConfig::default());
    }

    #[test]
    fn test_invalid_override() {
        assert!(FormConfig::from_json(r#"{ "cutoff_hour": "noon" }"#).is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = FormConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "warn".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
