//! Resume document model.
//!
//! `ResumeData` is the root aggregate handed wholesale to the renderer on every change.
//! Decoding is lenient: a section whose JSON has the wrong shape decodes as empty, and a
//! malformed entry inside a list is dropped. Decoding never fails.

use std::collections::{BTreeMap, HashSet};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::resume::sections::SectionKey;

/// Keyed contact record (`name`, `email`, `phone`, ...). Blank values are stored as
/// given; accessors treat them as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalInfo(BTreeMap<String, String>);

impl PersonalInfo {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the trimmed value of `field`, or `None` when absent or blank.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Returns the stored value untouched, blank or not.
    pub fn raw(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name").or_else(|| self.get("fullName"))
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title").or_else(|| self.get("jobTitle"))
    }

    pub fn email(&self) -> Option<&str> {
        self.get("email")
    }

    fn from_json(value: Option<&Value>) -> Self {
        let mut info = PersonalInfo::default();
        match value {
            None | Some(Value::Null) => {}
            Some(Value::Object(map)) => {
                for (field, v) in map {
                    match scalar_text(v) {
                        Some(text) => info.set(field.clone(), text),
                        None => warn!(field = %field, "personalInfo field is not a scalar, dropping"),
                    }
                }
            }
            Some(_) => warn!("personalInfo is not an object, treating section as empty"),
        }
        info
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Grade average; numbers in persisted JSON are kept as text.
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VolunteerEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterestEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// User-defined section. `id` is what section orders refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Presentation preferences. Only the renderer reads these and unknown values fall
/// back to template defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeSettings {
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
}

/// Root aggregate of a resume's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub languages: Vec<LanguageEntry>,
    pub awards: Vec<AwardEntry>,
    pub volunteering: Vec<VolunteerEntry>,
    pub interests: Vec<InterestEntry>,
    pub custom_sections: Vec<CustomSection>,
    pub settings: ResumeSettings,
}

/// Binds `$items` to the `Vec` backing a sequence section and evaluates `$body`.
macro_rules! with_sequence_mut {
    ($data:expr, $key:expr, $items:ident => $body:expr, else $fallback:expr) => {
        match $key {
            SectionKey::Experiences => {
                let $items = &mut $data.experiences;
                $body
            }
            SectionKey::Education => {
                let $items = &mut $data.education;
                $body
            }
            SectionKey::Skills => {
                let $items = &mut $data.skills;
                $body
            }
            SectionKey::Projects => {
                let $items = &mut $data.projects;
                $body
            }
            SectionKey::CustomSections => {
                let $items = &mut $data.custom_sections;
                $body
            }
            SectionKey::Certifications => {
                let $items = &mut $data.certifications;
                $body
            }
            SectionKey::Languages => {
                let $items = &mut $data.languages;
                $body
            }
            SectionKey::Awards => {
                let $items = &mut $data.awards;
                $body
            }
            SectionKey::Volunteering => {
                let $items = &mut $data.volunteering;
                $body
            }
            SectionKey::Interests => {
                let $items = &mut $data.interests;
                $body
            }
            SectionKey::PersonalInfo | SectionKey::Summary => $fallback,
        }
    };
}

impl ResumeData {
    /// Decodes persisted or client-supplied JSON. Never fails; see the module docs.
    pub fn from_value(value: &Value) -> Self {
        if !(value.is_object() || value.is_null()) {
            warn!("resume data is not an object, starting from an empty resume");
        }
        let mut data = ResumeData {
            personal_info: PersonalInfo::from_json(value.get(SectionKey::PersonalInfo.as_str())),
            summary: decode_text(value.get(SectionKey::Summary.as_str())),
            experiences: decode_sequence(value, SectionKey::Experiences),
            education: decode_sequence(value, SectionKey::Education),
            skills: decode_sequence(value, SectionKey::Skills),
            projects: decode_sequence(value, SectionKey::Projects),
            certifications: decode_sequence(value, SectionKey::Certifications),
            languages: decode_sequence(value, SectionKey::Languages),
            awards: decode_sequence(value, SectionKey::Awards),
            volunteering: decode_sequence(value, SectionKey::Volunteering),
            interests: decode_sequence(value, SectionKey::Interests),
            custom_sections: decode_sequence(value, SectionKey::CustomSections),
            settings: value
                .get("settings")
                .and_then(|v| decode_entry("settings", 0, v))
                .unwrap_or_default(),
        };
        data.normalize_custom_ids();
        data
    }

    /// Length of a sequence-valued section; `None` for any other kind.
    pub fn sequence_len(&self, key: SectionKey) -> Option<usize> {
        match key {
            SectionKey::Experiences => Some(self.experiences.len()),
            SectionKey::Education => Some(self.education.len()),
            SectionKey::Skills => Some(self.skills.len()),
            SectionKey::Projects => Some(self.projects.len()),
            SectionKey::CustomSections => Some(self.custom_sections.len()),
            SectionKey::Certifications => Some(self.certifications.len()),
            SectionKey::Languages => Some(self.languages.len()),
            SectionKey::Awards => Some(self.awards.len()),
            SectionKey::Volunteering => Some(self.volunteering.len()),
            SectionKey::Interests => Some(self.interests.len()),
            SectionKey::PersonalInfo | SectionKey::Summary => None,
        }
    }

    /// Text of a text-valued section; `None` for any other kind.
    pub fn text(&self, key: SectionKey) -> Option<&str> {
        match key {
            SectionKey::Summary => Some(&self.summary),
            _ => None,
        }
    }

    /// Key count of a record-valued section; `None` for any other kind.
    pub fn record_len(&self, key: SectionKey) -> Option<usize> {
        match key {
            SectionKey::PersonalInfo => Some(self.personal_info.len()),
            _ => None,
        }
    }

    pub fn custom_section(&self, id: &str) -> Option<&CustomSection> {
        self.custom_sections.iter().find(|s| s.id == id)
    }

    /// Appends a decoded entry to a sequence section. Returns false when the key is not
    /// a sequence or the entry does not decode.
    pub fn push_entry(&mut self, key: SectionKey, entry: &Value) -> bool {
        let pushed = with_sequence_mut!(self, key, items => {
            let index = items.len();
            match decode_entry(key.as_str(), index, entry) {
                Some(decoded) => {
                    items.push(decoded);
                    true
                }
                None => false,
            }
        }, else false);
        if pushed && key == SectionKey::CustomSections {
            self.normalize_custom_ids();
        }
        pushed
    }

    /// Replaces the entry at `index`. Out-of-range indices are ignored.
    pub fn replace_entry(&mut self, key: SectionKey, index: usize, entry: &Value) -> bool {
        let replaced = with_sequence_mut!(self, key, items => {
            match (items.get_mut(index), decode_entry(key.as_str(), index, entry)) {
                (Some(slot), Some(decoded)) => {
                    *slot = decoded;
                    true
                }
                _ => false,
            }
        }, else false);
        if replaced && key == SectionKey::CustomSections {
            self.normalize_custom_ids();
        }
        replaced
    }

    /// Removes the entry at `index`. Out-of-range indices are ignored.
    pub fn remove_entry(&mut self, key: SectionKey, index: usize) -> bool {
        with_sequence_mut!(self, key, items => {
            if index < items.len() {
                items.remove(index);
                true
            } else {
                false
            }
        }, else false)
    }

    /// Inserts or replaces the custom section with the same id.
    pub fn upsert_custom_section(&mut self, section: CustomSection) {
        match self.custom_sections.iter_mut().find(|s| s.id == section.id) {
            Some(existing) => *existing = section,
            None => self.custom_sections.push(section),
        }
        self.normalize_custom_ids();
    }

    pub fn remove_custom_section(&mut self, id: &str) -> bool {
        let before = self.custom_sections.len();
        self.custom_sections.retain(|s| s.id != id);
        self.custom_sections.len() != before
    }

    /// Custom sections are addressed by id, so every id must be unique and must not
    /// spell a catalog key. A blank id becomes `custom-<n>`; a repeated or reserved id
    /// becomes `<id>-<n>`, in both cases with the first free `n`.
    fn normalize_custom_ids(&mut self) {
        let mut taken = HashSet::new();
        let mut pending = Vec::new();
        for (i, section) in self.custom_sections.iter().enumerate() {
            let id = section.id.trim();
            if id.is_empty() || SectionKey::parse(id).is_some() || !taken.insert(id.to_string()) {
                pending.push(i);
            }
        }

        for i in pending {
            let id = self.custom_sections[i].id.trim().to_string();
            let (base, first) = if id.is_empty() { ("custom".to_string(), 1) } else { (id, 2) };
            let mut n = first;
            let fresh = loop {
                let candidate = format!("{base}-{n}");
                if !taken.contains(&candidate) && SectionKey::parse(&candidate).is_none() {
                    break candidate;
                }
                n += 1;
            };
            if !self.custom_sections[i].id.trim().is_empty() {
                warn!(id = %self.custom_sections[i].id, %fresh, "custom section id already in use, renaming");
            }
            taken.insert(fresh.clone());
            self.custom_sections[i].id = fresh;
        }
    }
}

impl From<Value> for ResumeData {
    fn from(value: Value) -> Self {
        ResumeData::from_value(&value)
    }
}

fn decode_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(v) => scalar_text(v).unwrap_or_else(|| {
            warn!("summary is not text, treating section as empty");
            String::new()
        }),
    }
}

fn decode_sequence<T: DeserializeOwned>(root: &Value, key: SectionKey) -> Vec<T> {
    match root.get(key.as_str()) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| decode_entry(key.as_str(), i, item))
            .collect(),
        Some(_) => {
            warn!(section = key.as_str(), "section is not a list, treating it as empty");
            Vec::new()
        }
    }
}

fn decode_entry<T: DeserializeOwned>(section: &str, index: usize, value: &Value) -> Option<T> {
    match T::deserialize(value) {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!(section, index, "dropping malformed entry: {e}");
            None
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Accepts strings, numbers and booleans as text; anything else is `None`.
fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_camel_case_document() {
        let data = ResumeData::from_value(&json!({
            "personalInfo": { "name": "Ada Lovelace", "email": "ada@example.com" },
            "summary": "Analyst",
            "experiences": [{ "position": "Engineer", "company": "Acme", "startDate": "2020-01" }],
            "skills": [{ "name": "Rust" }],
            "customSections": [{ "id": "talks", "title": "Talks", "content": "RustConf" }],
            "settings": { "colorScheme": "blue", "fontFamily": "Inter" }
        }));
        assert_eq!(data.personal_info.name(), Some("Ada Lovelace"));
        assert_eq!(data.summary, "Analyst");
        assert_eq!(data.experiences[0].company.as_deref(), Some("Acme"));
        assert_eq!(data.experiences[0].start_date.as_deref(), Some("2020-01"));
        assert_eq!(data.skills[0].level, None);
        assert_eq!(data.custom_sections[0].id, "talks");
        assert_eq!(data.settings.color_scheme.as_deref(), Some("blue"));
    }

    #[test]
    fn test_wrong_shapes_decode_as_empty() {
        let data = ResumeData::from_value(&json!({
            "personalInfo": "not a record",
            "summary": ["not", "text"],
            "experiences": { "position": "not a list" },
            "skills": null,
            "education": 42
        }));
        assert!(data.personal_info.is_empty());
        assert!(data.summary.is_empty());
        assert!(data.experiences.is_empty());
        assert!(data.skills.is_empty());
        assert!(data.education.is_empty());
    }

    #[test]
    fn test_malformed_list_element_is_dropped() {
        let data = ResumeData::from_value(&json!({
            "skills": [{ "name": "Rust" }, "oops", { "name": ["bad"] }, { "name": "SQL" }]
        }));
        let names: Vec<_> = data.skills.iter().filter_map(|s| s.name.as_deref()).collect();
        assert_eq!(names, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_non_object_root_is_empty() {
        assert_eq!(ResumeData::from_value(&json!("nope")), ResumeData::default());
        assert_eq!(ResumeData::from_value(&Value::Null), ResumeData::default());
    }

    #[test]
    fn test_numeric_gpa_kept_as_text() {
        let data = ResumeData::from_value(&json!({
            "education": [{ "institution": "MIT", "gpa": 3.9 }]
        }));
        assert_eq!(data.education[0].gpa.as_deref(), Some("3.9"));
    }

    #[test]
    fn test_missing_custom_ids_are_assigned() {
        let data = ResumeData::from_value(&json!({
            "customSections": [
                { "title": "A" },
                { "id": "custom-1", "title": "B" },
                { "title": "C" }
            ]
        }));
        let ids: Vec<_> = data.custom_sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["custom-2", "custom-1", "custom-3"]);
    }

    #[test]
    fn test_serde_deserialize_is_lenient_too() {
        let data: ResumeData =
            serde_json::from_str(r#"{"summary": 5, "skills": "x", "languages": [{"language": "French"}]}"#)
                .unwrap();
        assert_eq!(data.summary, "5");
        assert!(data.skills.is_empty());
        assert_eq!(data.languages.len(), 1);
    }

    #[test]
    fn test_serialize_uses_camel_case_keys() {
        let mut data = ResumeData::default();
        data.personal_info.set("name", "Ada");
        let v = serde_json::to_value(&data).unwrap();
        assert_eq!(v["personalInfo"]["name"], "Ada");
        assert!(v.get("customSections").is_some());
        assert_eq!(ResumeData::from_value(&v), data);
    }

    #[test]
    fn test_entry_mutations() {
        let mut data = ResumeData::default();
        assert!(data.push_entry(SectionKey::Skills, &json!({ "name": "Rust" })));
        assert!(data.push_entry(SectionKey::Skills, &json!({ "name": "Go" })));
        assert!(!data.push_entry(SectionKey::Summary, &json!({ "name": "x" })));
        assert!(!data.push_entry(SectionKey::Skills, &json!("not an entry")));
        assert!(data.replace_entry(SectionKey::Skills, 1, &json!({ "name": "Zig", "level": "Beginner" })));
        assert!(!data.replace_entry(SectionKey::Skills, 7, &json!({ "name": "C" })));
        assert_eq!(data.skills[1].name.as_deref(), Some("Zig"));
        assert!(data.remove_entry(SectionKey::Skills, 0));
        assert!(!data.remove_entry(SectionKey::Skills, 5));
        assert_eq!(data.skills.len(), 1);
    }

    #[test]
    fn test_repeated_and_reserved_custom_ids_are_renamed() {
        let data = ResumeData::from_value(&json!({
            "customSections": [
                { "id": "talks", "content": "RustConf" },
                { "id": "talks", "content": "EuroRust" },
                { "id": "talks-2", "content": "Oxidize" },
                { "id": "summary", "content": "Not the summary" }
            ]
        }));
        let ids: Vec<_> = data.custom_sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["talks", "talks-3", "talks-2", "summary-2"]);
        assert_eq!(
            data.custom_section("talks-3").and_then(|s| s.content.as_deref()),
            Some("EuroRust")
        );
    }

    #[test]
    fn test_upsert_and_remove_custom_section() {
        let mut data = ResumeData::default();
        data.upsert_custom_section(CustomSection {
            id: "talks".into(),
            title: Some("Talks".into()),
            content: None,
        });
        data.upsert_custom_section(CustomSection {
            id: "talks".into(),
            title: Some("Conference Talks".into()),
            content: Some("RustConf 2024".into()),
        });
        assert_eq!(data.custom_sections.len(), 1);
        assert_eq!(data.custom_sections[0].title.as_deref(), Some("Conference Talks"));
        assert!(data.remove_custom_section("talks"));
        assert!(!data.remove_custom_section("talks"));
    }

    #[test]
    fn test_personal_info_blank_values_read_as_missing() {
        let mut info = PersonalInfo::default();
        info.set("phone", "   ");
        assert_eq!(info.len(), 1);
        assert_eq!(info.get("phone"), None);
    }
}
