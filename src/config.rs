//! Dialog Configuration

use serde::{Deserialize, Serialize};

/// Per-dialog configuration, passed once at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Window title.
    pub title: String,
    /// Heading shown above the fields.
    pub header: String,
    /// Error banner shown under the heading; hidden when `None`.
    pub error_message: Option<String>,
    /// Points of spacing around rows and widgets.
    pub padding: f32,
    /// Label for the confirm button; "OK" when unset.
    pub ok_label: Option<String>,
    /// Style preset name. Names outside the registry keep the current style.
    pub theme: Option<String>,
}

impl FormConfig {
    pub fn ok_label(&self) -> &str {
        self.ok_label.as_deref().unwrap_or("OK")
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            header: String::new(),
            error_message: None,
            padding: 5.0,
            ok_label: None,
            theme: None,
        }
    }
}
