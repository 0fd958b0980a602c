// Resume document model: content, section catalog, activity predicate, persistence.
// The predicate in `sections` is the single source of truth for section visibility.

pub mod completeness;
pub mod data;
pub mod handlers;
pub mod sections;
pub mod store;
pub mod validation;
