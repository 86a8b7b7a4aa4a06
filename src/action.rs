//! Actions bound to widget controls and their URI form at the host boundary.
//!
//! The background handler receives clicks as
//! `<scheme>://widget?action=<name>[&<param>=<value>]`; inside the crate the
//! same information travels as a [`WidgetAction`].

use std::fmt;
use std::str::FromStr;

use crate::errors::WidgetError;

/// URI scheme the host app registers for widget broadcasts.
pub const DEFAULT_SCHEME: &str = "rminder";

const URI_HOST: &str = "widget";

/// A keypad key: a single digit or the double-zero key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadValue {
    Digit(u8),
    DoubleZero,
}

impl KeypadValue {
    /// All keys in keypad order: `1`-`9`, `0`, then `00`.
    pub const ALL: [KeypadValue; 11] = [
        KeypadValue::Digit(1),
        KeypadValue::Digit(2),
        KeypadValue::Digit(3),
        KeypadValue::Digit(4),
        KeypadValue::Digit(5),
        KeypadValue::Digit(6),
        KeypadValue::Digit(7),
        KeypadValue::Digit(8),
        KeypadValue::Digit(9),
        KeypadValue::Digit(0),
        KeypadValue::DoubleZero,
    ];

    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(KeypadValue::Digit(value))
    }
}

impl fmt::Display for KeypadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeypadValue::Digit(digit) => write!(f, "{digit}"),
            KeypadValue::DoubleZero => f.write_str("00"),
        }
    }
}

impl FromStr for KeypadValue {
    type Err = WidgetError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw == "00" {
            return Ok(KeypadValue::DoubleZero);
        }
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => ch
                .to_digit(10)
                .map(|digit| KeypadValue::Digit(digit as u8))
                .ok_or_else(|| WidgetError::InvalidAction(format!("unknown key `{raw}`"))),
            _ => Err(WidgetError::InvalidAction(format!("unknown key `{raw}`"))),
        }
    }
}

/// Background action triggered by tapping a widget control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetAction {
    SelectCategory(usize),
    ToggleCategoryList,
    PressKey(KeypadValue),
    Clear,
    Backspace,
    Save,
}

impl WidgetAction {
    /// Value of the `action` query parameter.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetAction::SelectCategory(_) => "cat_select",
            WidgetAction::ToggleCategoryList => "cat_toggle",
            WidgetAction::PressKey(_) => "key",
            WidgetAction::Clear => "clear",
            WidgetAction::Backspace => "backspace",
            WidgetAction::Save => "save",
        }
    }

    pub fn to_uri(&self, scheme: &str) -> String {
        let mut uri = format!("{scheme}://{URI_HOST}?action={}", self.name());
        match self {
            WidgetAction::SelectCategory(index) => uri.push_str(&format!("&index={index}")),
            WidgetAction::PressKey(key) => uri.push_str(&format!("&value={key}")),
            _ => {}
        }
        uri
    }

    /// Parses a URI produced by [`WidgetAction::to_uri`] for the given scheme.
    ///
    /// `action` must be the first query parameter; the remaining parameters may
    /// come in any order and unknown ones are ignored.
    pub fn from_uri(scheme: &str, uri: &str) -> Result<Self, WidgetError> {
        let invalid = || WidgetError::InvalidAction(uri.to_string());

        let query = uri
            .strip_prefix(scheme)
            .and_then(|rest| rest.strip_prefix("://"))
            .and_then(|rest| rest.strip_prefix(URI_HOST))
            .and_then(|rest| rest.strip_prefix('?'))
            .ok_or_else(invalid)?;

        let mut params = query.split('&').map(|pair| pair.split_once('=').unwrap_or((pair, "")));
        let action = match params.next() {
            Some(("action", name)) => name,
            _ => return Err(invalid()),
        };
        let params: Vec<(&str, &str)> = params.collect();
        let param = |key: &str| {
            params
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| *value)
        };

        match action {
            "cat_select" => {
                let index = param("index")
                    .and_then(|raw| raw.parse::<usize>().ok())
                    .ok_or_else(invalid)?;
                Ok(WidgetAction::SelectCategory(index))
            }
            "cat_toggle" => Ok(WidgetAction::ToggleCategoryList),
            "key" => {
                let key = param("value").ok_or_else(invalid)?.parse()?;
                Ok(WidgetAction::PressKey(key))
            }
            "clear" => Ok(WidgetAction::Clear),
            "backspace" => Ok(WidgetAction::Backspace),
            "save" => Ok(WidgetAction::Save),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_fixed_uris() {
        let cases = [
            (WidgetAction::SelectCategory(4), "rminder://widget?action=cat_select&index=4"),
            (WidgetAction::ToggleCategoryList, "rminder://widget?action=cat_toggle"),
            (
                WidgetAction::PressKey(KeypadValue::Digit(7)),
                "rminder://widget?action=key&value=7",
            ),
            (
                WidgetAction::PressKey(KeypadValue::DoubleZero),
                "rminder://widget?action=key&value=00",
            ),
            (WidgetAction::Clear, "rminder://widget?action=clear"),
            (WidgetAction::Backspace, "rminder://widget?action=backspace"),
            (WidgetAction::Save, "rminder://widget?action=save"),
        ];
        for (action, uri) in cases {
            assert_eq!(action.to_uri(DEFAULT_SCHEME), uri);
        }
    }

    #[test]
    fn decodes_with_reordered_and_extra_params() {
        let action =
            WidgetAction::from_uri("rminder", "rminder://widget?action=cat_select&src=list&index=12")
                .unwrap();
        assert_eq!(action, WidgetAction::SelectCategory(12));
    }

    #[test]
    fn rejects_malformed_uris() {
        for uri in [
            "other://widget?action=save",
            "rminder://app?action=save",
            "rminder://widget?index=1&action=cat_select",
            "rminder://widget?action=cat_select",
            "rminder://widget?action=cat_select&index=-1",
            "rminder://widget?action=key&value=12",
            "rminder://widget?action=launch",
        ] {
            assert!(
                matches!(WidgetAction::from_uri("rminder", uri), Err(WidgetError::InvalidAction(_))),
                "{uri} should be rejected"
            );
        }
    }

    #[test]
    fn keypad_values_parse_strictly() {
        assert_eq!("00".parse::<KeypadValue>().unwrap(), KeypadValue::DoubleZero);
        assert_eq!("5".parse::<KeypadValue>().unwrap(), KeypadValue::Digit(5));
        assert!("000".parse::<KeypadValue>().is_err());
        assert!("a".parse::<KeypadValue>().is_err());
        assert_eq!(KeypadValue::digit(10), None);
    }
}
