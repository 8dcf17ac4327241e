//! Application Context
//!
//! View state and configuration shared via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Editor panel expanded - read
    pub panel_open: ReadSignal<bool>,
    /// Editor panel expanded - write
    set_panel_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(config: AppConfig, panel_open: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            config: StoredValue::new(config),
            panel_open: panel_open.0,
            set_panel_open: panel_open.1,
        }
    }

    pub fn untitled_label(&self) -> String {
        self.config.with_value(|config| config.untitled_label.clone())
    }

    pub fn delete_confirm_ms(&self) -> u32 {
        self.config.with_value(|config| config.delete_confirm_ms)
    }

    pub fn set_panel_open(&self, open: bool) {
        self.set_panel_open.set(open);
    }
}
