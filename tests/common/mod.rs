#![allow(dead_code)]

use quick_add_widget::preferences::{
    KEY_AMOUNT, KEY_CATEGORIES_JSON, KEY_CATEGORY_INDEX, KEY_CATEGORY_LIST_VISIBLE,
};
use quick_add_widget::{MemoryPreferences, RenderedWidget, WidgetRenderer};

/// Category names used by the fixtures, in host order.
pub const SAMPLE_NAMES: [&str; 15] = [
    "Groceries",
    "Dining",
    "Transport",
    "Rent",
    "Utilities",
    "Health",
    "Gifts",
    "Travel",
    "Books",
    "Pets",
    "Coffee",
    "Fuel",
    "Games",
    "Gym",
    "Savings",
];

/// JSON array of the first `count` sample categories, as the host app stores it.
pub fn categories_json(count: usize) -> String {
    let items: Vec<serde_json::Value> = SAMPLE_NAMES
        .iter()
        .cycle()
        .take(count)
        .map(|name| serde_json::json!({ "name": name }))
        .collect();
    serde_json::Value::Array(items).to_string()
}

/// Preference snapshot with the four widget keys set.
pub fn prefs(categories: &str, index: i64, amount: &str, list_visible: bool) -> MemoryPreferences {
    MemoryPreferences::new()
        .with_string(KEY_CATEGORIES_JSON, categories)
        .with_int(KEY_CATEGORY_INDEX, index)
        .with_string(KEY_AMOUNT, amount)
        .with_int(KEY_CATEGORY_LIST_VISIBLE, i64::from(list_visible))
}

pub fn render(prefs: &MemoryPreferences) -> RenderedWidget {
    WidgetRenderer::default().render_store(prefs)
}
