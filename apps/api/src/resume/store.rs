//! Resume persistence boundary.
//!
//! Both operations are all-or-nothing: a save is a single upsert statement and a load
//! either returns a fully decoded resume or nothing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::ordering::compute_active_order;
use crate::resume::data::ResumeData;
use crate::resume::sections::SectionId;

/// A resume as held by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResume {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub template_id: Option<String>,
    pub data: ResumeData,
    pub section_order: Vec<SectionId>,
}

impl StoredResume {
    /// Builds a stored resume from its row, decoding leniently and recomputing the
    /// section order against the decoded data.
    pub fn from_row(row: ResumeRow) -> Self {
        let data = ResumeData::from_value(&row.data);
        let previous = decode_order(row.section_order.as_ref());
        let section_order = compute_active_order(&data, &previous);
        StoredResume {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            template_id: row.template_id,
            data,
            section_order,
        }
    }
}

/// Persistence trait. Carried in `AppState` as `Arc<dyn ResumeStore>`.
///
/// Backend failures on either operation surface as `AppError::Storage`.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn load_resume(&self, id: Uuid) -> Result<Option<StoredResume>, AppError>;

    /// Inserts or replaces the resume. Fails with `NotFound` when the id belongs to a
    /// different user.
    async fn save_resume(&self, resume: &StoredResume) -> Result<(), AppError>;
}

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn load_resume(&self, id: Uuid) -> Result<Option<StoredResume>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Storage(format!("load of resume {id} failed: {e}")))?;
        Ok(row.map(StoredResume::from_row))
    }

    async fn save_resume(&self, resume: &StoredResume) -> Result<(), AppError> {
        let data = serde_json::to_value(&resume.data)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize resume data: {e}")))?;
        let order = serde_json::to_value(&resume.section_order)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize section order: {e}")))?;

        let result = sqlx::query(
            r#"
            INSERT INTO resumes (id, user_id, title, template_id, data, section_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
               SET title = EXCLUDED.title,
                   template_id = EXCLUDED.template_id,
                   data = EXCLUDED.data,
                   section_order = EXCLUDED.section_order,
                   updated_at = NOW()
             WHERE resumes.user_id = EXCLUDED.user_id
            "#,
        )
        .bind(resume.id)
        .bind(resume.user_id)
        .bind(&resume.title)
        .bind(&resume.template_id)
        .bind(&data)
        .bind(&order)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Storage(format!("save of resume {} failed: {e}", resume.id)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Resume {} not found", resume.id)));
        }

        info!("Saved resume {} for user {}", resume.id, resume.user_id);
        Ok(())
    }
}

/// Loads a resume owned by `user_id`. Someone else's resume is reported as missing.
pub async fn load_owned(
    store: &dyn ResumeStore,
    id: Uuid,
    user_id: Uuid,
) -> Result<StoredResume, AppError> {
    match store.load_resume(id).await? {
        Some(resume) if resume.user_id == user_id => Ok(resume),
        _ => Err(AppError::NotFound(format!("Resume {id} not found"))),
    }
}

/// Reads a persisted order. Anything other than an array of strings is ignored.
pub fn decode_order(value: Option<&Value>) -> Vec<SectionId> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(SectionId::from))
            .collect(),
        Some(_) => {
            warn!("section_order is not a list, ignoring it");
            Vec::new()
        }
    }
}
