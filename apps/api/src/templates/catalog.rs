//! Template catalog: pluggable, trait-based source of selectable templates.
//!
//! `AppState` holds an `Arc<dyn TemplateCatalog>`; Postgres backs it in production.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::warn;

use crate::errors::AppError;
use crate::models::template::TemplateRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Modern,
    Classic,
    Creative,
    Minimal,
    Executive,
    Professional,
}

impl TemplateCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            TemplateCategory::Modern => "modern",
            TemplateCategory::Classic => "classic",
            TemplateCategory::Creative => "creative",
            TemplateCategory::Minimal => "minimal",
            TemplateCategory::Executive => "executive",
            TemplateCategory::Professional => "professional",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(TemplateCategory::Modern),
            "classic" => Ok(TemplateCategory::Classic),
            "creative" => Ok(TemplateCategory::Creative),
            "minimal" => Ok(TemplateCategory::Minimal),
            "executive" => Ok(TemplateCategory::Executive),
            "professional" => Ok(TemplateCategory::Professional),
            other => Err(AppError::Validation(format!("unknown template category '{other}'"))),
        }
    }
}

/// Catalog entry. Immutable from the editor's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: TemplateCategory,
    pub description: String,
    pub is_premium: bool,
}

impl TryFrom<TemplateRow> for Template {
    type Error = AppError;

    fn try_from(row: TemplateRow) -> Result<Self, Self::Error> {
        Ok(Template {
            category: row.category.parse()?,
            id: row.id,
            name: row.name,
            description: row.description,
            is_premium: row.is_premium,
        })
    }
}

#[async_trait]
pub trait TemplateCatalog: Send + Sync {
    async fn list_templates(
        &self,
        category: Option<TemplateCategory>,
    ) -> Result<Vec<Template>, AppError>;

    async fn get_template(&self, id: &str) -> Result<Option<Template>, AppError>;
}

pub struct PgTemplateCatalog {
    pool: PgPool,
}

impl PgTemplateCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateCatalog for PgTemplateCatalog {
    async fn list_templates(
        &self,
        category: Option<TemplateCategory>,
    ) -> Result<Vec<Template>, AppError> {
        let rows = sqlx::query_as::<_, TemplateRow>(
            r#"
            SELECT id, name, category, description, is_premium
            FROM templates
            WHERE $1::TEXT IS NULL OR category = $1
            ORDER BY category, name
            "#,
        )
        .bind(category.map(|c| c.as_str()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().filter_map(row_to_template).collect())
    }

    async fn get_template(&self, id: &str) -> Result<Option<Template>, AppError> {
        let row = sqlx::query_as::<_, TemplateRow>(
            "SELECT id, name, category, description, is_premium FROM templates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.and_then(row_to_template))
    }
}

/// Picks the requested template, or `fallback` when none was requested.
///
/// An unknown requested id is a caller error. A missing fallback means the catalog is
/// out of step with configuration.
pub async fn resolve_template(
    catalog: &dyn TemplateCatalog,
    requested: Option<&str>,
    fallback: &str,
) -> Result<Template, AppError> {
    if let Some(id) = requested {
        return catalog
            .get_template(id)
            .await?
            .ok_or_else(|| AppError::Validation(format!("unknown template '{id}'")));
    }
    catalog.get_template(fallback).await?.ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "default template '{fallback}' is missing from the catalog"
        ))
    })
}

/// Rows with an unknown category are skipped rather than failing the whole listing.
fn row_to_template(row: TemplateRow) -> Option<Template> {
    let id = row.id.clone();
    match Template::try_from(row) {
        Ok(t) => Some(t),
        Err(e) => {
            warn!("Skipping template {id}: {e}");
            None
        }
    }
}
