//! Order operations.
//!
//! Every function returns a permutation, without duplicates, of the section ids that
//! are active for the data it was derived from. Invalid requests return the input
//! unchanged.

use tracing::debug;

use crate::resume::data::{CustomSection, ResumeData};
use crate::resume::sections::{is_section_active, SectionId, SectionKey};

/// Derives the order for `data`, keeping the relative order the user chose.
///
/// Ids from `previous_order` that are still active come first, in their previous order.
/// Built-in sections that became active are appended in catalog order. Custom ids are
/// kept while active but are only placed through `add_custom_section`; the
/// `customSections` key stands for the custom sections without a slot of their own and
/// is left out once there are none.
pub fn compute_active_order(data: &ResumeData, previous_order: &[SectionId]) -> Vec<SectionId> {
    let mut order: Vec<SectionId> = Vec::with_capacity(SectionKey::CATALOG.len());

    for id in previous_order {
        if is_section_active(data, id) && !order.contains(id) {
            order.push(id.clone());
        }
    }

    for key in SectionKey::CATALOG {
        let id = SectionId::Builtin(key);
        if is_section_active(data, &id) && !order.contains(&id) {
            order.push(id);
        }
    }

    let group = SectionId::Builtin(SectionKey::CustomSections);
    if order.contains(&group) && grouped_custom_sections(data, &order).next().is_none() {
        order.retain(|id| *id != group);
    }

    order
}

/// Custom sections drawn inside the `customSections` group: those without their own slot
/// in `order`.
pub fn grouped_custom_sections<'a>(
    data: &'a ResumeData,
    order: &'a [SectionId],
) -> impl Iterator<Item = &'a CustomSection> + 'a {
    data.custom_sections.iter().filter(move |section| {
        !order
            .iter()
            .any(|id| matches!(id, SectionId::Custom(placed) if *placed == section.id))
    })
}

/// Moves `dragged` into the slot `target` occupied, shifting everything in between by one.
pub fn reorder(order: &[SectionId], dragged: &SectionId, target: &SectionId) -> Vec<SectionId> {
    if dragged == target {
        return order.to_vec();
    }

    let from = order.iter().position(|id| id == dragged);
    let to = order.iter().position(|id| id == target);
    let (Some(from), Some(to)) = (from, to) else {
        debug!(%dragged, %target, "ignoring reorder with a key outside the order");
        return order.to_vec();
    };

    let mut next = order.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

/// Appends a newly created custom section. Already-present keys are left where they are.
pub fn add_custom_section(order: &[SectionId], key: SectionId) -> Vec<SectionId> {
    let mut next = order.to_vec();
    if !next.contains(&key) {
        next.push(key);
    }
    next
}
