//! Read-only view over the key-value store the host app shares with the widget.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::WidgetError;

pub const KEY_CATEGORIES_JSON: &str = "categories_json";
pub const KEY_CATEGORY_INDEX: &str = "cat_index";
pub const KEY_AMOUNT: &str = "amount_str";
pub const KEY_CATEGORY_LIST_VISIBLE: &str = "cat_list_visible";

/// Typed read access to persisted widget preferences.
///
/// Implementations return `None` both for missing keys and for values stored
/// under a different type, so callers can apply their per-key default.
pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn get_int(&self, key: &str) -> Option<i64>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        (**self).get_int(key)
    }
}

/// A single stored preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

/// In-memory preference store, also used for JSON snapshots of the platform
/// store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: HashMap<String, PreferenceValue>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, PreferenceValue::Text(value.into()));
        self
    }

    pub fn with_int(mut self, key: impl Into<String>, value: i64) -> Self {
        self.insert(key, PreferenceValue::Int(value));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: PreferenceValue) {
        self.values.insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses a snapshot: a JSON object whose members are strings, integers or
    /// booleans. Members of any other shape are skipped.
    pub fn from_json(raw: &str) -> Result<Self, WidgetError> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(members) = value else {
            return Err(WidgetError::InvalidSnapshot(
                "expected a JSON object of preference values".into(),
            ));
        };

        let mut prefs = Self::new();
        for (key, value) in members {
            let stored = match value {
                Value::String(text) => PreferenceValue::Text(text),
                Value::Bool(flag) => PreferenceValue::Bool(flag),
                Value::Number(number) => match number.as_i64() {
                    Some(int) => PreferenceValue::Int(int),
                    None => {
                        tracing::debug!(%key, %number, "skipping non-integer preference");
                        continue;
                    }
                },
                other => {
                    tracing::debug!(%key, value = %other, "skipping unsupported preference");
                    continue;
                }
            };
            prefs.insert(key, stored);
        }
        Ok(prefs)
    }

    /// Loads a snapshot file written by [`MemoryPreferences::from_json`]'s format.
    pub fn load(path: &Path) -> Result<Self, WidgetError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            PreferenceValue::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        match self.values.get(key)? {
            PreferenceValue::Int(int) => Some(*int),
            _ => None,
        }
    }
}

/// Snapshot of everything the renderer reads from the preference store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub categories_json: Option<String>,
    pub selected_category_index: i64,
    pub amount_text: String,
    pub category_list_visible: bool,
}

impl WidgetState {
    /// Reads the widget keys, substituting the default for anything missing
    /// or stored under the wrong type.
    pub fn from_store<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        Self {
            categories_json: store.get_string(KEY_CATEGORIES_JSON),
            selected_category_index: store.get_int(KEY_CATEGORY_INDEX).unwrap_or(0),
            amount_text: store.get_string(KEY_AMOUNT).unwrap_or_default(),
            category_list_visible: store.get_int(KEY_CATEGORY_LIST_VISIBLE).unwrap_or(0) == 1,
        }
    }
}
