// Section Reorder Engine: derives the visible section order from resume content and
// applies drag-and-drop intents to it. Pure functions over section identifiers; the
// engine never holds resume content.

pub mod drag;
pub mod engine;

pub use drag::{DragEvent, DragState};
pub use engine::{add_custom_section, compute_active_order};
