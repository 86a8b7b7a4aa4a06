use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{action::DEFAULT_SCHEME, errors::WidgetError};

/// Presentation settings for the widget. Every field is optional in the file
/// form; omitted fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "WidgetConfig::default_scheme")]
    pub scheme: String,
    #[serde(default = "WidgetConfig::default_title")]
    pub title: String,
    #[serde(default = "WidgetConfig::default_fallback_category_label")]
    pub fallback_category_label: String,
    #[serde(default = "WidgetConfig::default_zero_amount_placeholder")]
    pub zero_amount_placeholder: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            scheme: Self::default_scheme(),
            title: Self::default_title(),
            fallback_category_label: Self::default_fallback_category_label(),
            zero_amount_placeholder: Self::default_zero_amount_placeholder(),
        }
    }
}

impl WidgetConfig {
    fn default_scheme() -> String {
        DEFAULT_SCHEME.into()
    }

    fn default_title() -> String {
        "Quick Add".into()
    }

    fn default_fallback_category_label() -> String {
        "Select".into()
    }

    fn default_zero_amount_placeholder() -> String {
        "0.00".into()
    }

    pub fn from_json(raw: &str) -> Result<Self, WidgetError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads the config file, or the defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, WidgetError> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            Self::from_json(&data)
        } else {
            tracing::debug!(path = %path.display(), "no widget config file; using defaults");
            Ok(Self::default())
        }
    }
}
