use crate::action::{KeypadValue, WidgetAction};
use crate::config::WidgetConfig;
use crate::domain::CategoryList;
use crate::preferences::{PreferenceStore, WidgetState};
use crate::render::layout::{CATEGORY_LIST_SLOTS, QUICK_CATEGORY_SLOTS};
use crate::render::widget::{RenderedWidget, Slot};

/// Rebuilds the quick-add widget from a [`WidgetState`] snapshot.
///
/// Holds only immutable presentation settings, so a single renderer can serve
/// any number of widget instances from any thread. Rendering never fails:
/// unreadable category data, out-of-range indices and missing values all fall
/// back to the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct WidgetRenderer {
    config: WidgetConfig,
}

impl WidgetRenderer {
    pub fn new(config: WidgetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Reads the widget keys from `store` and renders them.
    pub fn render_store<S: PreferenceStore + ?Sized>(&self, store: &S) -> RenderedWidget {
        self.render(&WidgetState::from_store(store))
    }

    pub fn render(&self, state: &WidgetState) -> RenderedWidget {
        let categories = CategoryList::decode_lenient(state.categories_json.as_deref());

        // Item buttons are only meaningful while the panel is shown.
        let (category_panel, category_items): (Slot, [Slot; CATEGORY_LIST_SLOTS]) =
            if state.category_list_visible {
                (Slot::container(true), category_buttons(&categories))
            } else {
                (Slot::hidden(), std::array::from_fn(|_| Slot::hidden()))
            };

        tracing::trace!(
            categories = categories.len(),
            index = state.selected_category_index,
            list_visible = state.category_list_visible,
            "rendering quick add widget"
        );

        RenderedWidget {
            title: Slot::text(self.config.title.as_str()),
            category_label: Slot::text(self.category_label(&categories, state)),
            amount_label: Slot::text(self.amount_label(state)),
            quick_categories: category_buttons::<QUICK_CATEGORY_SLOTS>(&categories),
            category_panel,
            category_items,
            category_select: Slot::control(WidgetAction::ToggleCategoryList),
            keypad: KeypadValue::ALL.map(|key| Slot::control(WidgetAction::PressKey(key))),
            clear: Slot::control(WidgetAction::Clear),
            backspace: Slot::control(WidgetAction::Backspace),
            save: Slot::control(WidgetAction::Save),
        }
    }

    fn category_label(&self, categories: &CategoryList, state: &WidgetState) -> String {
        categories
            .resolve(state.selected_category_index)
            .and_then(|category| category.name.clone())
            .unwrap_or_else(|| self.config.fallback_category_label.clone())
    }

    fn amount_label(&self, state: &WidgetState) -> String {
        if state.amount_text.is_empty() {
            self.config.zero_amount_placeholder.clone()
        } else {
            state.amount_text.clone()
        }
    }
}

/// Fills `N` button slots with the leading categories; slots past the end of
/// the list are hidden. Categories beyond `N` are not reachable from this row.
fn category_buttons<const N: usize>(categories: &CategoryList) -> [Slot; N] {
    std::array::from_fn(|idx| match categories.get(idx) {
        Some(category) => Slot::button(category.button_label(), WidgetAction::SelectCategory(idx)),
        None => Slot::hidden(),
    })
}
