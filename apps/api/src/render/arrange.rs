use std::collections::HashSet;

use crate::render::document::{DisplayBlock, DisplayDocument, SectionBlock};
use crate::resume::sections::{SectionId, SectionKey};

/// Lays rendered sections out in `order`.
///
/// Ids without a rendered block are skipped. Custom sections placed on their own are
/// left out of the grouped `customSections` block, which is dropped if nothing remains.
pub fn arrange(document: &DisplayDocument, order: &[SectionId]) -> Vec<SectionBlock> {
    let placed_custom: HashSet<&str> = order
        .iter()
        .filter(|id| matches!(id, SectionId::Custom(_)) && document.section(id).is_some())
        .map(SectionId::as_str)
        .collect();

    let mut seen = HashSet::new();
    let mut arranged = Vec::with_capacity(order.len());

    for id in order {
        if !seen.insert(id) {
            continue;
        }
        let Some(block) = document.section(id) else {
            continue;
        };

        if *id != SectionId::Builtin(SectionKey::CustomSections) {
            arranged.push(block.clone());
            continue;
        }

        let blocks: Vec<DisplayBlock> = block
            .blocks
            .iter()
            .filter(|b| match b {
                DisplayBlock::Subsection(sub) => !placed_custom.contains(sub.id.as_str()),
                _ => true,
            })
            .cloned()
            .collect();
        if !blocks.is_empty() {
            arranged.push(SectionBlock {
                id: block.id.clone(),
                title: block.title.clone(),
                blocks,
            });
        }
    }

    arranged
}
