//! Host boundary: the serialisable view update and the per-cycle driver that
//! renders every placed widget instance.

use serde::{Deserialize, Serialize};

use crate::errors::WidgetError;
use crate::preferences::PreferenceStore;
use crate::render::renderer::WidgetRenderer;
use crate::render::widget::RenderedWidget;

/// One layout view as handed to the host, actions already encoded as URIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub id: String,
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub on_click: Option<String>,
}

/// Complete update for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewUpdate {
    pub widget_id: i32,
    pub slots: Vec<SlotView>,
}

impl ViewUpdate {
    pub fn from_rendered(widget_id: i32, widget: &RenderedWidget, scheme: &str) -> Self {
        let slots = widget
            .slots()
            .into_iter()
            .map(|(id, slot)| SlotView {
                id: id.resource_name(),
                visible: slot.visible,
                label: slot.label.clone(),
                on_click: slot.on_click.map(|action| action.to_uri(scheme)),
            })
            .collect();
        Self { widget_id, slots }
    }

    pub fn slot(&self, id: &str) -> Option<&SlotView> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn to_json(&self) -> Result<String, WidgetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Applies rendered views to the platform's widget surface.
pub trait WidgetHost {
    fn update_widget(&mut self, update: ViewUpdate) -> Result<(), WidgetError>;
}

/// Outcome of one update cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub updated: Vec<i32>,
    pub failed: Vec<(i32, String)>,
}

/// Renders and pushes every instance in `widget_ids`.
///
/// Instances are independent: a host failure for one id is recorded and the
/// cycle moves on to the next.
pub fn update_widgets<S, H>(
    renderer: &WidgetRenderer,
    store: &S,
    host: &mut H,
    widget_ids: &[i32],
) -> UpdateReport
where
    S: PreferenceStore + ?Sized,
    H: WidgetHost + ?Sized,
{
    let mut report = UpdateReport::default();
    for &widget_id in widget_ids {
        let widget = renderer.render_store(store);
        let update = ViewUpdate::from_rendered(widget_id, &widget, &renderer.config().scheme);
        match host.update_widget(update) {
            Ok(()) => {
                tracing::debug!(widget_id, "widget updated");
                report.updated.push(widget_id);
            }
            Err(err) => {
                tracing::warn!(widget_id, error = %err, "widget update failed");
                report.failed.push((widget_id, err.to_string()));
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryPreferences;

    #[derive(Default)]
    struct RecordingHost {
        updates: Vec<ViewUpdate>,
    }

    impl WidgetHost for RecordingHost {
        fn update_widget(&mut self, update: ViewUpdate) -> Result<(), WidgetError> {
            self.updates.push(update);
            Ok(())
        }
    }

    #[test]
    fn view_update_lists_every_slot() {
        let widget = WidgetRenderer::default().render_store(&MemoryPreferences::new());
        let update = ViewUpdate::from_rendered(7, &widget, "rminder");
        // title, category, 3 quick, amount, select, panel, 10 items, 11 keys, 3 commands
        assert_eq!(update.slots.len(), 32);
        assert_eq!(
            update.slot("btn_k00").and_then(|s| s.on_click.as_deref()),
            Some("rminder://widget?action=key&value=00")
        );
        assert_eq!(update.slot("txt_amount").and_then(|s| s.label.as_deref()), Some("0.00"));
    }

    #[test]
    fn updates_each_instance() {
        let mut host = RecordingHost::default();
        let report = update_widgets(
            &WidgetRenderer::default(),
            &MemoryPreferences::new(),
            &mut host,
            &[3, 9],
        );
        assert_eq!(report.updated, vec![3, 9]);
        assert!(report.failed.is_empty());
        let ids: Vec<i32> = host.updates.iter().map(|u| u.widget_id).collect();
        assert_eq!(ids, vec![3, 9]);
    }

    #[test]
    fn json_omits_untouched_labels() {
        let widget = WidgetRenderer::default().render_store(&MemoryPreferences::new());
        let json = ViewUpdate::from_rendered(1, &widget, "rminder").to_json().unwrap();
        let parsed: ViewUpdate = serde_json::from_str(&json).unwrap();
        let save = parsed.slot("btn_save").unwrap();
        assert!(save.label.is_none());
        assert!(save.visible);
    }
}
