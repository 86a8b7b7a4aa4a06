//! Projection of [`WidgetState`](crate::preferences::WidgetState) onto the
//! widget's fixed layout, plus the host-facing update path.

pub mod host;
pub mod layout;
pub mod renderer;
pub mod table;
pub mod widget;

pub use host::{update_widgets, SlotView, UpdateReport, ViewUpdate, WidgetHost};
pub use layout::{SlotId, CATEGORY_LIST_SLOTS, QUICK_CATEGORY_SLOTS};
pub use renderer::WidgetRenderer;
pub use widget::{RenderedWidget, Slot};
