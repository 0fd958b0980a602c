//! Section catalog and the activity predicate.
//!
//! # Invariants
//! - Every `SectionKey` maps to exactly one `SectionKind`; that mapping is the only
//!   place the emptiness rule for a section is decided.
//! - `is_section_active` is shared by the reorder engine and the renderer. Neither may
//!   inspect section data directly to decide visibility.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resume::data::ResumeData;

/// Built-in resume sections, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    PersonalInfo,
    Summary,
    Experiences,
    Education,
    Skills,
    Projects,
    CustomSections,
    Certifications,
    Languages,
    Awards,
    Volunteering,
    Interests,
}

/// Storage category of a section, used to pick its emptiness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Ordered list of entries. Active iff non-empty.
    Sequence,
    /// Free text. Active iff the trimmed text is non-empty.
    Text,
    /// Keyed record. Active iff it has at least one key.
    Record,
}

impl SectionKey {
    /// The fixed catalog. Freshly activated sections are appended in this order.
    pub const CATALOG: [SectionKey; 12] = [
        SectionKey::PersonalInfo,
        SectionKey::Summary,
        SectionKey::Experiences,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::CustomSections,
        SectionKey::Certifications,
        SectionKey::Languages,
        SectionKey::Awards,
        SectionKey::Volunteering,
        SectionKey::Interests,
    ];

    pub const fn kind(self) -> SectionKind {
        match self {
            SectionKey::PersonalInfo => SectionKind::Record,
            SectionKey::Summary => SectionKind::Text,
            SectionKey::Experiences
            | SectionKey::Education
            | SectionKey::Skills
            | SectionKey::Projects
            | SectionKey::CustomSections
            | SectionKey::Certifications
            | SectionKey::Languages
            | SectionKey::Awards
            | SectionKey::Volunteering
            | SectionKey::Interests => SectionKind::Sequence,
        }
    }

    /// Identifier used in persisted JSON and in section orders.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionKey::PersonalInfo => "personalInfo",
            SectionKey::Summary => "summary",
            SectionKey::Experiences => "experiences",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::CustomSections => "customSections",
            SectionKey::Certifications => "certifications",
            SectionKey::Languages => "languages",
            SectionKey::Awards => "awards",
            SectionKey::Volunteering => "volunteering",
            SectionKey::Interests => "interests",
        }
    }

    /// Default heading shown above the section.
    pub const fn title(self) -> &'static str {
        match self {
            SectionKey::PersonalInfo => "Personal Information",
            SectionKey::Summary => "Summary",
            SectionKey::Experiences => "Experience",
            SectionKey::Education => "Education",
            SectionKey::Skills => "Skills",
            SectionKey::Projects => "Projects",
            SectionKey::CustomSections => "Additional Information",
            SectionKey::Certifications => "Certifications",
            SectionKey::Languages => "Languages",
            SectionKey::Awards => "Awards",
            SectionKey::Volunteering => "Volunteering",
            SectionKey::Interests => "Interests",
        }
    }

    pub fn parse(s: &str) -> Option<SectionKey> {
        SectionKey::CATALOG.into_iter().find(|k| k.as_str() == s)
    }
}

/// A position-able section: either a catalog entry or a user-defined custom section.
///
/// Serialized as a plain string. Strings naming a catalog entry decode as `Builtin`;
/// anything else is the id of a custom section.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionId {
    Builtin(SectionKey),
    Custom(String),
}

impl SectionId {
    pub fn as_str(&self) -> &str {
        match self {
            SectionId::Builtin(key) => key.as_str(),
            SectionId::Custom(id) => id,
        }
    }
}

impl From<SectionKey> for SectionId {
    fn from(key: SectionKey) -> Self {
        SectionId::Builtin(key)
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        match SectionKey::parse(&s) {
            Some(key) => SectionId::Builtin(key),
            None => SectionId::Custom(s),
        }
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        SectionId::from(s.to_string())
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        match id {
            SectionId::Builtin(key) => key.as_str().to_string(),
            SectionId::Custom(id) => id,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true when the section has content to show.
///
/// Total over every identifier: absent data, or a key whose kind does not match the
/// view the data model exposes, is inactive.
pub fn is_section_active(data: &ResumeData, id: &SectionId) -> bool {
    match id {
        SectionId::Builtin(key) => match key.kind() {
            SectionKind::Sequence => data.sequence_len(*key).is_some_and(|len| len > 0),
            SectionKind::Text => data.text(*key).is_some_and(|s| !s.trim().is_empty()),
            SectionKind::Record => data.record_len(*key).is_some_and(|len| len > 0),
        },
        SectionId::Custom(custom_id) => data.custom_section(custom_id).is_some(),
    }
}
