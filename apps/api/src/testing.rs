//! In-memory stand-ins for the Postgres-backed stores, used by unit and router tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::resume::store::{ResumeStore, StoredResume};
use crate::state::AppState;
use crate::templates::catalog::{Template, TemplateCatalog, TemplateCategory};

#[derive(Default)]
pub struct InMemoryResumeStore {
    resumes: Mutex<HashMap<Uuid, StoredResume>>,
}

impl InMemoryResumeStore {
    pub fn with(resumes: impl IntoIterator<Item = StoredResume>) -> Self {
        Self {
            resumes: Mutex::new(resumes.into_iter().map(|r| (r.id, r)).collect()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.resumes.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn load_resume(&self, id: Uuid) -> Result<Option<StoredResume>, AppError> {
        Ok(self.resumes.lock().unwrap().get(&id).cloned())
    }

    async fn save_resume(&self, resume: &StoredResume) -> Result<(), AppError> {
        let mut resumes = self.resumes.lock().unwrap();
        if let Some(existing) = resumes.get(&resume.id) {
            if existing.user_id != resume.user_id {
                return Err(AppError::NotFound(format!("Resume {} not found", resume.id)));
            }
        }
        resumes.insert(resume.id, resume.clone());
        Ok(())
    }
}

/// A backend that is down: every load and save fails.
pub struct FailingResumeStore;

#[async_trait]
impl ResumeStore for FailingResumeStore {
    async fn load_resume(&self, id: Uuid) -> Result<Option<StoredResume>, AppError> {
        Err(AppError::Storage(format!("load of resume {id} failed: connection refused")))
    }

    async fn save_resume(&self, resume: &StoredResume) -> Result<(), AppError> {
        Err(AppError::Storage(format!("save of resume {} failed: connection reset", resume.id)))
    }
}

pub struct InMemoryTemplateCatalog {
    templates: Vec<Template>,
}

impl Default for InMemoryTemplateCatalog {
    fn default() -> Self {
        Self {
            templates: vec![
                sample_template(),
                template("classic-01", "Classic", TemplateCategory::Classic, false),
                template("exec-01", "Boardroom", TemplateCategory::Executive, true),
            ],
        }
    }
}

#[async_trait]
impl TemplateCatalog for InMemoryTemplateCatalog {
    async fn list_templates(
        &self,
        category: Option<TemplateCategory>,
    ) -> Result<Vec<Template>, AppError> {
        Ok(self
            .templates
            .iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .cloned()
            .collect())
    }

    async fn get_template(&self, id: &str) -> Result<Option<Template>, AppError> {
        Ok(self.templates.iter().find(|t| t.id == id).cloned())
    }
}

pub fn sample_template() -> Template {
    template("modern-01", "Modern", TemplateCategory::Modern, false)
}

fn template(id: &str, name: &str, category: TemplateCategory, is_premium: bool) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: format!("{name} template"),
        is_premium,
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/resume_test".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
        db_max_connections: 1,
        default_template_id: "modern-01".to_string(),
    }
}

/// App state over in-memory stores. The store is returned so tests can inspect it.
pub fn test_state(resumes: impl IntoIterator<Item = StoredResume>) -> (AppState, Arc<InMemoryResumeStore>) {
    let store = Arc::new(InMemoryResumeStore::with(resumes));
    let state = AppState {
        config: test_config(),
        resumes: store.clone(),
        templates: Arc::new(InMemoryTemplateCatalog::default()),
    };
    (state, store)
}
