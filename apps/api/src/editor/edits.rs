use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resume::data::{CustomSection, ResumeData, ResumeSettings};
use crate::resume::sections::SectionKey;

/// One field-level change made in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ResumeEdit {
    SetPersonalField { field: String, value: String },
    RemovePersonalField { field: String },
    SetSummary { text: String },
    AddEntry { section: SectionKey, entry: Value },
    UpdateEntry { section: SectionKey, index: usize, entry: Value },
    RemoveEntry { section: SectionKey, index: usize },
    UpsertCustomSection { section: CustomSection },
    RemoveCustomSection { id: String },
    UpdateSettings { settings: ResumeSettings },
}

impl ResumeEdit {
    /// Applies the edit. Returns false when it was ignored (bad index, wrong section
    /// kind, undecodable entry) or changed nothing.
    pub fn apply(self, data: &mut ResumeData) -> bool {
        match self {
            ResumeEdit::SetPersonalField { field, value } => {
                if data.personal_info.raw(&field) == Some(value.as_str()) {
                    return false;
                }
                data.personal_info.set(field, value);
                true
            }
            ResumeEdit::RemovePersonalField { field } => data.personal_info.remove(&field).is_some(),
            ResumeEdit::SetSummary { text } => {
                if data.summary == text {
                    return false;
                }
                data.summary = text;
                true
            }
            ResumeEdit::AddEntry { section, entry } => data.push_entry(section, &entry),
            ResumeEdit::UpdateEntry {
                section,
                index,
                entry,
            } => data.replace_entry(section, index, &entry),
            ResumeEdit::RemoveEntry { section, index } => data.remove_entry(section, index),
            ResumeEdit::UpsertCustomSection { section } => {
                if data.custom_section(&section.id) == Some(&section) {
                    return false;
                }
                data.upsert_custom_section(section);
                true
            }
            ResumeEdit::RemoveCustomSection { id } => data.remove_custom_section(&id),
            ResumeEdit::UpdateSettings { settings } => {
                if data.settings == settings {
                    return false;
                }
                data.settings = settings;
                true
            }
        }
    }
}
