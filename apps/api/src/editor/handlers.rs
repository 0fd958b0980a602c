use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::editor::edits::ResumeEdit;
use crate::editor::preview::{build_preview, Preview};
use crate::editor::session::{EditorSession, SaveOutcome};
use crate::errors::AppError;
use crate::ordering::{compute_active_order, DragEvent};
use crate::resume::data::ResumeData;
use crate::resume::sections::SectionId;
use crate::resume::store::load_owned;
use crate::state::AppState;
use crate::templates::catalog::{resolve_template, Template};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    #[serde(default)]
    pub data: ResumeData,
    pub template_id: Option<String>,
    #[serde(default)]
    pub previous_order: Vec<SectionId>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRequest {
    #[serde(default)]
    pub edits: Vec<ResumeEdit>,
    /// Created after the edits and placed at the end of the order.
    #[serde(default)]
    pub new_sections: Vec<NewCustomSection>,
    /// Applied last, in sequence.
    #[serde(default)]
    pub drag: Vec<DragEvent>,
    pub template_id: Option<String>,
}

#[derive(Deserialize)]
pub struct NewCustomSection {
    pub title: String,
    pub content: Option<String>,
}

#[derive(Serialize)]
pub struct EditResponse {
    pub saved: SaveOutcome,
    pub applied: usize,
    pub created: Vec<SectionId>,
    pub preview: Preview,
}

/// POST /api/v1/preview
///
/// Stateless: renders the posted data without touching storage.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<Preview>, AppError> {
    let template = resolve_template(
        state.templates.as_ref(),
        req.template_id.as_deref(),
        &state.config.default_template_id,
    )
    .await?;
    let order = compute_active_order(&req.data, &req.previous_order);
    Ok(Json(build_preview(&req.data, &template, &order)))
}

/// POST /api/v1/resumes/:id/edits
pub async fn handle_apply_edits(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
    Json(req): Json<EditRequest>,
) -> Result<Json<EditResponse>, AppError> {
    let user_id = auth.require_user()?;
    let stored = load_owned(state.resumes.as_ref(), id, user_id).await?;

    let template = stored_template(&state, stored.template_id.as_deref()).await?;
    let mut session = EditorSession::open(stored, template, auth);

    if let Some(template_id) = req.template_id.as_deref() {
        let template = resolve_template(
            state.templates.as_ref(),
            Some(template_id),
            &state.config.default_template_id,
        )
        .await?;
        session.select_template(template);
    }

    let applied = session.apply_edits(req.edits);
    let created: Vec<SectionId> = req
        .new_sections
        .into_iter()
        .map(|s| session.add_custom_section(&s.title, s.content))
        .collect();
    for event in req.drag {
        session.handle_drag(event);
    }
    if !session.drag_state().is_idle() {
        debug!("Edit batch for resume {id} ended mid-drag, discarding the drag");
    }

    let saved = session.save(state.resumes.as_ref()).await?;
    info!("Applied {applied} edits to resume {id}");

    Ok(Json(EditResponse {
        saved,
        applied,
        created,
        preview: session.preview(),
    }))
}

/// The template a stored resume was saved with. A template that has since left the
/// catalog falls back to the configured default.
async fn stored_template(state: &AppState, template_id: Option<&str>) -> Result<Template, AppError> {
    let catalog = state.templates.as_ref();
    let default_id = &state.config.default_template_id;
    if let Some(id) = template_id {
        if let Some(template) = catalog.get_template(id).await? {
            return Ok(template);
        }
        warn!("Template {id} no longer in catalog, using {default_id}");
    }
    resolve_template(catalog, None, default_id).await
}
