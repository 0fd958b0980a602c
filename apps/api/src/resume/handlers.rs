use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::errors::AppError;
use crate::ordering::compute_active_order;
use crate::resume::data::ResumeData;
use crate::resume::sections::SectionId;
use crate::resume::store::{load_owned, StoredResume};
use crate::state::AppState;

const UNTITLED: &str = "Untitled resume";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResumeRequest {
    pub title: Option<String>,
    pub template_id: Option<String>,
    #[serde(default)]
    pub data: ResumeData,
    #[serde(default)]
    pub section_order: Vec<SectionId>,
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredResume>, AppError> {
    let user_id = auth.require_user()?;
    let resume = load_owned(state.resumes.as_ref(), id, user_id).await?;
    Ok(Json(resume))
}

/// PUT /api/v1/resumes/:id
///
/// Creates or replaces the resume. The posted order is only a hint; the stored order
/// is recomputed against the posted data.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
    Json(req): Json<SaveResumeRequest>,
) -> Result<Json<StoredResume>, AppError> {
    let user_id = auth.require_user()?;

    let existing = state.resumes.load_resume(id).await?;
    if existing.as_ref().is_some_and(|r| r.user_id != user_id) {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }

    let template_id = match req.template_id {
        Some(template_id) => {
            if state.templates.get_template(&template_id).await?.is_none() {
                return Err(AppError::Validation(format!("unknown template '{template_id}'")));
            }
            Some(template_id)
        }
        None => existing.as_ref().and_then(|r| r.template_id.clone()),
    };

    let title = req
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| existing.map(|r| r.title))
        .unwrap_or_else(|| UNTITLED.to_string());

    let section_order = compute_active_order(&req.data, &req.section_order);
    let resume = StoredResume {
        id,
        user_id,
        title,
        template_id,
        data: req.data,
        section_order,
    };
    state.resumes.save_resume(&resume).await?;
    Ok(Json(resume))
}
