use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quick_add_widget::preferences::{
    KEY_AMOUNT, KEY_CATEGORIES_JSON, KEY_CATEGORY_INDEX, KEY_CATEGORY_LIST_VISIBLE,
};
use quick_add_widget::{MemoryPreferences, ViewUpdate, WidgetRenderer};

fn sample_prefs(category_count: usize, list_visible: bool) -> MemoryPreferences {
    let categories: Vec<serde_json::Value> = (0..category_count)
        .map(|idx| serde_json::json!({ "name": format!("Category {idx}") }))
        .collect();
    MemoryPreferences::new()
        .with_string(KEY_CATEGORIES_JSON, serde_json::Value::Array(categories).to_string())
        .with_int(KEY_CATEGORY_INDEX, -7)
        .with_string(KEY_AMOUNT, "125.40")
        .with_int(KEY_CATEGORY_LIST_VISIBLE, i64::from(list_visible))
}

fn bench_render(c: &mut Criterion) {
    let renderer = WidgetRenderer::default();

    let collapsed = sample_prefs(15, false);
    c.bench_function("render_collapsed_15", |b| {
        b.iter(|| renderer.render_store(black_box(&collapsed)))
    });

    let expanded = sample_prefs(200, true);
    c.bench_function("render_expanded_200", |b| {
        b.iter(|| renderer.render_store(black_box(&expanded)))
    });

    let widget = renderer.render_store(&expanded);
    c.bench_function("view_update_json", |b| {
        b.iter(|| {
            ViewUpdate::from_rendered(1, black_box(&widget), "rminder")
                .to_json()
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
