//! Drag-and-drop interaction state.
//!
//! `Idle -> Dragging(source) -> Hovering(source, target) -> Idle`. Only a drop while
//! hovering produces a new order; cancellation from any state returns to `Idle` with
//! the order untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ordering::engine::reorder;
use crate::resume::sections::SectionId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: SectionId,
    },
    Hovering {
        source: SectionId,
        target: SectionId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "section", rename_all = "snake_case")]
pub enum DragEvent {
    /// Pointer picked up a section.
    Start(SectionId),
    /// Pointer moved over a section.
    Over(SectionId),
    /// Pointer left the hovered section.
    Leave,
    /// Pointer released.
    Drop,
    /// Drag aborted (escape key, source unmounted, released outside the list).
    Cancel,
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// Advances the machine. The second element is `Some` only when a drop changed
    /// the order.
    pub fn handle(self, event: DragEvent, order: &[SectionId]) -> (DragState, Option<Vec<SectionId>>) {
        match (self, event) {
            (_, DragEvent::Cancel) => (DragState::Idle, None),

            (DragState::Idle, DragEvent::Start(source)) => {
                if order.contains(&source) {
                    (DragState::Dragging { source }, None)
                } else {
                    debug!(%source, "drag started on a section outside the order");
                    (DragState::Idle, None)
                }
            }

            (
                DragState::Dragging { source } | DragState::Hovering { source, .. },
                DragEvent::Over(target),
            ) => {
                if target == source || !order.contains(&target) {
                    (DragState::Dragging { source }, None)
                } else {
                    (DragState::Hovering { source, target }, None)
                }
            }

            (DragState::Hovering { source, .. }, DragEvent::Leave) => {
                (DragState::Dragging { source }, None)
            }

            (DragState::Hovering { source, target }, DragEvent::Drop) => {
                let next = reorder(order, &source, &target);
                if next.as_slice() == order {
                    (DragState::Idle, None)
                } else {
                    (DragState::Idle, Some(next))
                }
            }

            // Released without a valid target.
            (DragState::Dragging { .. }, DragEvent::Drop) => (DragState::Idle, None),

            (state, event) => {
                debug!(?state, ?event, "ignoring drag event");
                (state, None)
            }
        }
    }
}
