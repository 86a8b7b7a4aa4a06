use std::fmt;

use crate::action::KeypadValue;

/// Quick-row buttons declared in the widget layout.
pub const QUICK_CATEGORY_SLOTS: usize = 3;
/// Category buttons declared in the expandable list panel.
pub const CATEGORY_LIST_SLOTS: usize = 10;

/// Identifies one view of the widget layout.
///
/// Indices are zero-based; [`SlotId::resource_name`] yields the one-based
/// names used by the layout resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    Title,
    CategoryLabel,
    AmountLabel,
    QuickCategory(usize),
    CategoryListPanel,
    CategoryItem(usize),
    CategorySelect,
    Key(KeypadValue),
    Clear,
    Backspace,
    Save,
}

impl SlotId {
    pub fn resource_name(&self) -> String {
        match self {
            SlotId::Title => "widget_title".into(),
            SlotId::CategoryLabel => "txt_category".into(),
            SlotId::AmountLabel => "txt_amount".into(),
            SlotId::QuickCategory(idx) => format!("btn_quick_cat_{}", idx + 1),
            SlotId::CategoryListPanel => "cat_list_panel".into(),
            SlotId::CategoryItem(idx) => format!("btn_cat_item_{}", idx + 1),
            SlotId::CategorySelect => "btn_cat_select".into(),
            SlotId::Key(key) => format!("btn_k{key}"),
            SlotId::Clear => "btn_clear".into(),
            SlotId::Backspace => "btn_backspace".into(),
            SlotId::Save => "btn_save".into(),
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resource_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_names_are_one_based() {
        assert_eq!(SlotId::QuickCategory(0).resource_name(), "btn_quick_cat_1");
        assert_eq!(SlotId::CategoryItem(9).resource_name(), "btn_cat_item_10");
        assert_eq!(SlotId::Key(KeypadValue::Digit(0)).to_string(), "btn_k0");
        assert_eq!(SlotId::Key(KeypadValue::DoubleZero).to_string(), "btn_k00");
    }
}
