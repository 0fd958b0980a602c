use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::templates::catalog::{Template, TemplateCategory};

#[derive(Deserialize)]
pub struct TemplateQuery {
    pub category: Option<String>,
}

/// GET /api/v1/templates?category=
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(params): Query<TemplateQuery>,
) -> Result<Json<Vec<Template>>, AppError> {
    let category = params
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(str::parse::<TemplateCategory>)
        .transpose()?;
    let templates = state.templates.list_templates(category).await?;
    Ok(Json(templates))
}
