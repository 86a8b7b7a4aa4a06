mod common;

use common::{categories_json, prefs};
use quick_add_widget::{update_widgets, ViewUpdate, WidgetError, WidgetHost, WidgetRenderer};

/// Host that refuses updates for a chosen set of widget ids.
#[derive(Default)]
struct FlakyHost {
    reject: Vec<i32>,
    applied: Vec<ViewUpdate>,
}

impl WidgetHost for FlakyHost {
    fn update_widget(&mut self, update: ViewUpdate) -> Result<(), WidgetError> {
        if self.reject.contains(&update.widget_id) {
            return Err(WidgetError::Host(format!(
                "widget {} was removed",
                update.widget_id
            )));
        }
        self.applied.push(update);
        Ok(())
    }
}

#[test]
fn failing_instance_does_not_block_the_others() {
    quick_add_widget::init();

    let store = prefs(&categories_json(4), 1, "20", false);
    let mut host = FlakyHost {
        reject: vec![2],
        ..FlakyHost::default()
    };

    let report = update_widgets(&WidgetRenderer::default(), &store, &mut host, &[1, 2, 3]);

    assert_eq!(report.updated, vec![1, 3]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, 2);
    assert!(report.failed[0].1.contains("widget 2 was removed"));

    let applied: Vec<i32> = host.applied.iter().map(|u| u.widget_id).collect();
    assert_eq!(applied, vec![1, 3]);
    assert_eq!(host.applied[0].slots, host.applied[1].slots);
    assert_eq!(
        host.applied[0]
            .slot("txt_category")
            .and_then(|s| s.label.as_deref()),
        Some("Dining")
    );
}

#[test]
fn empty_cycle_reports_nothing() {
    let mut host = FlakyHost::default();
    let report = update_widgets(
        &WidgetRenderer::default(),
        &prefs("[]", 0, "", false),
        &mut host,
        &[],
    );
    assert!(report.updated.is_empty());
    assert!(report.failed.is_empty());
    assert!(host.applied.is_empty());
}

#[test]
fn works_through_trait_objects() {
    let store = prefs(&categories_json(2), 0, "", true);
    let mut host = FlakyHost::default();
    let dyn_host: &mut dyn WidgetHost = &mut host;
    let dyn_store: &dyn quick_add_widget::PreferenceStore = &store;

    let report = update_widgets(&WidgetRenderer::default(), dyn_store, dyn_host, &[42]);
    assert_eq!(report.updated, vec![42]);
    assert_eq!(
        host.applied[0]
            .slot("btn_cat_item_2")
            .and_then(|s| s.label.as_deref()),
        Some("Dining")
    );
}
