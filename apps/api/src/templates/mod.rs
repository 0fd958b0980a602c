// Template catalog: read-only list of visual templates the editor can select.

pub mod catalog;
pub mod handlers;
