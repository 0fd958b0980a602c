// Editing session and live preview: applies user edits to the resume, keeps the section
// order in step with the content, and re-renders on every request.

pub mod edits;
pub mod handlers;
pub mod preview;
pub mod session;
