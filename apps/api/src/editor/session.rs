//! Editing session.
//!
//! Owns one resume for the duration of an edit. Every content change recomputes the
//! section order from scratch; drag events go through the drag state machine and only
//! a completed drop touches the order. Nothing here runs concurrently.

use serde::Serialize;
use slug::slugify;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::editor::edits::ResumeEdit;
use crate::editor::preview::{build_preview, Preview};
use crate::errors::AppError;
use crate::ordering::{add_custom_section, compute_active_order, DragEvent, DragState};
use crate::resume::data::{CustomSection, ResumeData};
use crate::resume::sections::{SectionId, SectionKey};
use crate::resume::store::{ResumeStore, StoredResume};
use crate::templates::catalog::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    Saved,
    /// Anonymous sessions never persist.
    Skipped,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    resume_id: Uuid,
    title: String,
    data: ResumeData,
    order: Vec<SectionId>,
    drag: DragState,
    template: Template,
    auth: AuthContext,
    dirty: bool,
}

impl EditorSession {
    /// Starts an empty resume.
    pub fn new(resume_id: Uuid, title: impl Into<String>, template: Template, auth: AuthContext) -> Self {
        Self {
            resume_id,
            title: title.into(),
            data: ResumeData::default(),
            order: Vec::new(),
            drag: DragState::Idle,
            template,
            auth,
            dirty: false,
        }
    }

    /// Resumes editing a persisted resume.
    pub fn open(stored: StoredResume, template: Template, auth: AuthContext) -> Self {
        let order = compute_active_order(&stored.data, &stored.section_order);
        Self {
            resume_id: stored.id,
            title: stored.title,
            data: stored.data,
            order,
            drag: DragState::Idle,
            template,
            auth,
            dirty: false,
        }
    }

    pub fn resume_id(&self) -> Uuid {
        self.resume_id
    }

    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    pub fn order(&self) -> &[SectionId] {
        &self.order
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Applies one edit. Returns whether anything changed.
    pub fn apply_edit(&mut self, edit: ResumeEdit) -> bool {
        if !edit.apply(&mut self.data) {
            return false;
        }
        self.dirty = true;
        self.refresh_order();
        true
    }

    pub fn apply_edits(&mut self, edits: impl IntoIterator<Item = ResumeEdit>) -> usize {
        edits.into_iter().map(|e| self.apply_edit(e)).filter(|changed| *changed).count()
    }

    /// Creates a custom section named `title` and places it at the end of the order.
    pub fn add_custom_section(&mut self, title: &str, content: Option<String>) -> SectionId {
        let id = self.unique_custom_id(title);
        let title = title.trim();
        self.data.upsert_custom_section(CustomSection {
            id: id.clone(),
            title: (!title.is_empty()).then(|| title.to_string()),
            content,
        });
        let key = SectionId::Custom(id);
        self.order = compute_active_order(&self.data, &add_custom_section(&self.order, key.clone()));
        self.dirty = true;
        key
    }

    /// Feeds a drag event to the state machine. Returns whether the order changed.
    pub fn handle_drag(&mut self, event: DragEvent) -> bool {
        let state = std::mem::take(&mut self.drag);
        let (next, reordered) = state.handle(event, &self.order);
        self.drag = next;
        match reordered {
            Some(order) => {
                debug!(resume_id = %self.resume_id, "sections reordered");
                self.order = order;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn select_template(&mut self, template: Template) {
        if template.id != self.template.id {
            self.template = template;
            self.dirty = true;
        }
    }

    pub fn preview(&self) -> Preview {
        build_preview(&self.data, &self.template, &self.order)
    }

    /// Persists the session. A failed save leaves data and the dirty flag untouched so
    /// the caller can retry.
    pub async fn save(&mut self, store: &dyn ResumeStore) -> Result<SaveOutcome, AppError> {
        let Some(user_id) = self.auth.user_id() else {
            debug!(resume_id = %self.resume_id, "anonymous session, edits not persisted");
            return Ok(SaveOutcome::Skipped);
        };

        let stored = StoredResume {
            id: self.resume_id,
            user_id,
            title: self.title.clone(),
            template_id: Some(self.template.id.clone()),
            data: self.data.clone(),
            section_order: self.order.clone(),
        };

        match store.save_resume(&stored).await {
            Ok(()) => {
                self.dirty = false;
                info!("Resume {} saved ({} sections)", self.resume_id, self.order.len());
                Ok(SaveOutcome::Saved)
            }
            Err(e) => {
                warn!("Save of resume {} failed, keeping edits in memory: {e}", self.resume_id);
                Err(e)
            }
        }
    }

    fn refresh_order(&mut self) {
        self.order = compute_active_order(&self.data, &self.order);

        // A section that disappeared mid-drag cancels the drag (source) or the hover (target).
        self.drag = match std::mem::take(&mut self.drag) {
            DragState::Dragging { source } | DragState::Hovering { source, .. }
                if !self.order.contains(&source) =>
            {
                DragState::Idle
            }
            DragState::Hovering { source, target } if !self.order.contains(&target) => {
                DragState::Dragging { source }
            }
            other => other,
        };
    }

    fn unique_custom_id(&self, title: &str) -> String {
        let base = match slugify(title) {
            s if s.is_empty() => "custom".to_string(),
            s => s,
        };
        let taken = |id: &str| self.data.custom_section(id).is_some() || SectionKey::parse(id).is_some();
        if !taken(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}
