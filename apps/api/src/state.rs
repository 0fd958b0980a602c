use std::sync::Arc;

use crate::config::Config;
use crate::resume::store::ResumeStore;
use crate::templates::catalog::TemplateCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Resume persistence. Default: PgResumeStore.
    pub resumes: Arc<dyn ResumeStore>,
    /// Template catalog. Default: PgTemplateCatalog.
    pub templates: Arc<dyn TemplateCatalog>,
}
