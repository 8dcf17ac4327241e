//! App Configuration
//!
//! Read once at startup from `<meta name="checklist-config" content="{...}">`.

use serde::Deserialize;

const CONFIG_META_SELECTOR: &str = "meta[name='checklist-config']";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shown for committed lists with an empty title
    pub untitled_label: String,
    /// Editor panel starts expanded
    pub start_expanded: bool,
    /// Item-entry row starts shown
    pub item_entry: bool,
    /// Sub-item field starts in use
    pub sub_field: bool,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// How long a delete confirmation stays armed
    pub delete_confirm_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            untitled_label: "Untitled note".to_string(),
            start_expanded: false,
            item_entry: false,
            sub_field: false,
            log_level: "info".to_string(),
            delete_confirm_ms: 3000,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from the page, returning the parse error (if any) alongside the
    /// defaults so it can be logged once the logger is up.
    pub fn load() -> (Self, Option<serde_json::Error>) {
        match read_meta_content() {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
            None => (Self::default(), None),
        }
    }
}

fn read_meta_content() -> Option<String> {
    web_sys::window()?
        .document()?
        .query_selector(CONFIG_META_SELECTOR)
        .ok()
        .flatten()?
        .get_attribute("content")
}
