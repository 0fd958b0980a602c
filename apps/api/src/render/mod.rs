// Template Renderer: (ResumeData, TemplateSettings) -> DisplayDocument.
// Rendering is pure and order-independent; `arrange` applies the section order as a
// final pass over renderer output.

pub mod arrange;
pub mod document;
pub mod renderer;
pub mod theme;

pub use arrange::arrange;
pub use document::SectionBlock;
pub use renderer::render;
pub use theme::{TemplateSettings, Theme};
