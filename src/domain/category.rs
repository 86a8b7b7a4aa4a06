//! Category records shared by the host app through `categories_json`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::WidgetError;

/// A spending category as the widget sees it: only the display name matters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Placeholder for array entries that carry no usable name.
    pub fn unnamed() -> Self {
        Self { name: None }
    }

    /// Builds a category from one element of the shared JSON array.
    ///
    /// Strings are taken verbatim, numbers and booleans use their JSON text,
    /// every other shape leaves the name unset.
    pub fn from_value(value: &Value) -> Self {
        let name = match value.get("name") {
            Some(Value::String(name)) => Some(name.clone()),
            Some(Value::Number(number)) => Some(number.to_string()),
            Some(Value::Bool(flag)) => Some(flag.to_string()),
            _ => None,
        };
        Self { name }
    }

    /// Name to print on a button; unnamed categories show an empty label.
    pub fn button_label(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Ordered category list decoded from the host's JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryList {
    categories: Vec<Category>,
}

impl CategoryList {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Strictly decodes a JSON array of `{ "name": ... }` objects.
    ///
    /// Elements that are not objects keep their position as unnamed entries so
    /// that indices emitted by the widget line up with the host's array.
    pub fn from_json(raw: &str) -> Result<Self, WidgetError> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Array(items) = value else {
            return Err(WidgetError::InvalidCategories(
                "expected a JSON array of categories".into(),
            ));
        };
        Ok(Self::new(items.iter().map(Category::from_value).collect()))
    }

    /// Decodes the stored value, treating absence and any decode failure as an
    /// empty list.
    pub fn decode_lenient(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(list) => list,
            Err(err) => {
                tracing::debug!(error = %err, "categories_json unreadable; using empty list");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Wraps an arbitrary stored index into `[0, len)`, negative values
    /// included. `None` when the list is empty.
    pub fn normalize_index(&self, index: i64) -> Option<usize> {
        if self.categories.is_empty() {
            return None;
        }
        let len = self.categories.len() as i64;
        // Same result as ((index % len) + len) % len without the intermediate sum.
        Some(index.rem_euclid(len) as usize)
    }

    /// Category selected by a possibly out-of-range stored index.
    pub fn resolve(&self, index: i64) -> Option<&Category> {
        self.normalize_index(index)
            .and_then(|idx| self.categories.get(idx))
    }
}
