use crate::action::{KeypadValue, WidgetAction};
use crate::render::layout::{SlotId, CATEGORY_LIST_SLOTS, QUICK_CATEGORY_SLOTS};

/// State of one layout view after a render pass.
///
/// `label: None` leaves the text declared by the layout untouched (keypad and
/// command buttons); `on_click: None` means no action is bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub visible: bool,
    pub label: Option<String>,
    pub on_click: Option<WidgetAction>,
}

impl Slot {
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            visible: true,
            label: Some(label.into()),
            on_click: None,
        }
    }

    pub fn button(label: impl Into<String>, action: WidgetAction) -> Self {
        Self {
            visible: true,
            label: Some(label.into()),
            on_click: Some(action),
        }
    }

    pub fn control(action: WidgetAction) -> Self {
        Self {
            visible: true,
            label: None,
            on_click: Some(action),
        }
    }

    pub fn container(visible: bool) -> Self {
        Self {
            visible,
            label: None,
            on_click: None,
        }
    }

    pub fn hidden() -> Self {
        Self::container(false)
    }

    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

/// Complete view state of one widget instance, recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWidget {
    pub title: Slot,
    pub category_label: Slot,
    pub amount_label: Slot,
    pub quick_categories: [Slot; QUICK_CATEGORY_SLOTS],
    pub category_panel: Slot,
    pub category_items: [Slot; CATEGORY_LIST_SLOTS],
    pub category_select: Slot,
    /// Keypad keys in [`KeypadValue::ALL`] order.
    pub keypad: [Slot; 11],
    pub clear: Slot,
    pub backspace: Slot,
    pub save: Slot,
}

impl RenderedWidget {
    /// Every slot paired with its id, in layout order.
    pub fn slots(&self) -> Vec<(SlotId, &Slot)> {
        let mut slots = vec![
            (SlotId::Title, &self.title),
            (SlotId::CategoryLabel, &self.category_label),
        ];
        slots.extend(
            self.quick_categories
                .iter()
                .enumerate()
                .map(|(idx, slot)| (SlotId::QuickCategory(idx), slot)),
        );
        slots.push((SlotId::AmountLabel, &self.amount_label));
        slots.push((SlotId::CategorySelect, &self.category_select));
        slots.push((SlotId::CategoryListPanel, &self.category_panel));
        slots.extend(
            self.category_items
                .iter()
                .enumerate()
                .map(|(idx, slot)| (SlotId::CategoryItem(idx), slot)),
        );
        slots.extend(
            KeypadValue::ALL
                .iter()
                .zip(self.keypad.iter())
                .map(|(key, slot)| (SlotId::Key(*key), slot)),
        );
        slots.push((SlotId::Clear, &self.clear));
        slots.push((SlotId::Backspace, &self.backspace));
        slots.push((SlotId::Save, &self.save));
        slots
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        match id {
            SlotId::Title => Some(&self.title),
            SlotId::CategoryLabel => Some(&self.category_label),
            SlotId::AmountLabel => Some(&self.amount_label),
            SlotId::QuickCategory(idx) => self.quick_categories.get(idx),
            SlotId::CategoryListPanel => Some(&self.category_panel),
            SlotId::CategoryItem(idx) => self.category_items.get(idx),
            SlotId::CategorySelect => Some(&self.category_select),
            SlotId::Key(key) => self.key(key),
            SlotId::Clear => Some(&self.clear),
            SlotId::Backspace => Some(&self.backspace),
            SlotId::Save => Some(&self.save),
        }
    }

    pub fn key(&self, key: KeypadValue) -> Option<&Slot> {
        KeypadValue::ALL
            .iter()
            .position(|candidate| *candidate == key)
            .and_then(|idx| self.keypad.get(idx))
    }

    /// Labels of the visible quick-row buttons, left to right.
    pub fn visible_quick_categories(&self) -> Vec<&str> {
        visible_labels(&self.quick_categories)
    }

    /// Labels of the visible list-panel buttons, top to bottom.
    pub fn visible_category_items(&self) -> Vec<&str> {
        visible_labels(&self.category_items)
    }
}

fn visible_labels(slots: &[Slot]) -> Vec<&str> {
    slots
        .iter()
        .filter(|slot| slot.visible)
        .map(Slot::label_text)
        .collect()
}
