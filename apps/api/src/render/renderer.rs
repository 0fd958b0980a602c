//! Resume renderer.
//!
//! # Contract
//! - Pure: same `(data, settings)` always yields the same document.
//! - A section is drawn iff `is_section_active` says so; no other emptiness check
//!   decides inclusion.
//! - Missing sub-fields are omitted, never rendered as placeholders.

use crate::render::document::{
    ContactItem, DisplayBlock, DisplayDocument, EntryBlock, HeaderBlock, SectionBlock,
    SubsectionBlock, Tag, TagListBlock, DOCUMENT_VERSION,
};
use crate::render::theme::{TemplateSettings, Theme};
use crate::resume::data::{CustomSection, PersonalInfo, ResumeData};
use crate::resume::sections::{is_section_active, SectionId, SectionKey};

/// Contact fields shown in the header, in display order. Other keys follow
/// alphabetically.
const CONTACT_FIELDS: &[(&str, &str)] = &[
    ("email", "Email"),
    ("phone", "Phone"),
    ("address", "Address"),
    ("website", "Website"),
    ("linkedin", "LinkedIn"),
    ("github", "GitHub"),
];

/// Keys rendered as the header name/headline rather than as contacts.
const HEADER_FIELDS: &[&str] = &["name", "fullName", "title", "jobTitle"];

pub fn render(data: &ResumeData, settings: &TemplateSettings) -> DisplayDocument {
    let mut sections = Vec::new();

    for key in SectionKey::CATALOG {
        let id = SectionId::Builtin(key);
        if !is_section_active(data, &id) {
            continue;
        }
        sections.push(SectionBlock {
            id,
            title: key.title().to_string(),
            blocks: render_builtin(data, key),
        });
    }

    for custom in &data.custom_sections {
        // A custom id spelled like a catalog key cannot be placed on its own.
        let id = SectionId::from(custom.id.clone());
        if matches!(id, SectionId::Builtin(_))
            || !is_section_active(data, &id)
            || sections.iter().any(|s| s.id == id)
        {
            continue;
        }
        sections.push(SectionBlock {
            id,
            title: clean(custom.title.as_deref()).unwrap_or(custom.id.as_str()).to_string(),
            blocks: vec![DisplayBlock::Subsection(subsection(custom))],
        });
    }

    DisplayDocument {
        version: DOCUMENT_VERSION,
        template_id: settings.template_id.clone(),
        theme: Theme::resolve(settings),
        sections,
    }
}

fn render_builtin(data: &ResumeData, key: SectionKey) -> Vec<DisplayBlock> {
    match key {
        SectionKey::PersonalInfo => vec![DisplayBlock::Header(header(&data.personal_info))],
        SectionKey::Summary => vec![DisplayBlock::Paragraph {
            text: data.summary.trim().to_string(),
        }],
        SectionKey::Experiences => entries(data.experiences.iter().map(|e| EntryBlock {
            heading: owned(e.position.as_deref()),
            subheading: owned(e.company.as_deref()),
            dates: date_range(e.start_date.as_deref(), e.end_date.as_deref(), e.current),
            location: owned(e.location.as_deref()),
            body: owned(e.description.as_deref()),
            bullets: non_blank(&e.highlights),
            ..Default::default()
        })),
        SectionKey::Education => entries(data.education.iter().map(|e| EntryBlock {
            heading: degree_line(e.degree.as_deref(), e.field.as_deref()),
            subheading: owned(e.institution.as_deref()),
            dates: date_range(e.start_date.as_deref(), e.end_date.as_deref(), false),
            location: owned(e.location.as_deref()),
            body: owned(e.description.as_deref()),
            bullets: clean(e.gpa.as_deref())
                .map(|gpa| vec![format!("GPA: {gpa}")])
                .unwrap_or_default(),
            ..Default::default()
        })),
        SectionKey::Skills => {
            let mut groups: Vec<(Option<String>, Vec<Tag>)> = Vec::new();
            for skill in &data.skills {
                let Some(label) = clean(skill.name.as_deref()) else {
                    continue;
                };
                let tag = Tag {
                    label: label.to_string(),
                    detail: owned(skill.level.as_deref()),
                };
                let category = owned(skill.category.as_deref());
                match groups.iter_mut().find(|(c, _)| *c == category) {
                    Some((_, tags)) => tags.push(tag),
                    None => groups.push((category, vec![tag])),
                }
            }
            groups
                .into_iter()
                .map(|(title, items)| DisplayBlock::TagList(TagListBlock { title, items }))
                .collect()
        }
        SectionKey::Projects => entries(data.projects.iter().map(|p| EntryBlock {
            heading: owned(p.name.as_deref()),
            subheading: owned(p.role.as_deref()),
            dates: date_range(p.start_date.as_deref(), p.end_date.as_deref(), false),
            link: owned(p.url.as_deref()),
            body: owned(p.description.as_deref()),
            tags: non_blank(&p.technologies),
            ..Default::default()
        })),
        SectionKey::CustomSections => data
            .custom_sections
            .iter()
            .map(|c| DisplayBlock::Subsection(subsection(c)))
            .collect(),
        SectionKey::Certifications => entries(data.certifications.iter().map(|c| EntryBlock {
            heading: owned(c.name.as_deref()),
            subheading: owned(c.issuer.as_deref()),
            dates: owned(c.date.as_deref()),
            link: owned(c.url.as_deref()),
            bullets: clean(c.credential_id.as_deref())
                .map(|id| vec![format!("Credential ID: {id}")])
                .unwrap_or_default(),
            ..Default::default()
        })),
        SectionKey::Languages => tag_list(
            data.languages
                .iter()
                .map(|l| (l.language.as_deref(), l.proficiency.as_deref())),
        ),
        SectionKey::Awards => entries(data.awards.iter().map(|a| EntryBlock {
            heading: owned(a.title.as_deref()),
            subheading: owned(a.issuer.as_deref()),
            dates: owned(a.date.as_deref()),
            body: owned(a.description.as_deref()),
            ..Default::default()
        })),
        SectionKey::Volunteering => entries(data.volunteering.iter().map(|v| EntryBlock {
            heading: owned(v.role.as_deref()),
            subheading: owned(v.organization.as_deref()),
            dates: date_range(v.start_date.as_deref(), v.end_date.as_deref(), v.current),
            body: owned(v.description.as_deref()),
            ..Default::default()
        })),
        SectionKey::Interests => tag_list(
            data.interests
                .iter()
                .map(|i| (i.name.as_deref(), i.description.as_deref())),
        ),
    }
}

fn header(info: &PersonalInfo) -> HeaderBlock {
    let mut contacts: Vec<ContactItem> = CONTACT_FIELDS
        .iter()
        .filter_map(|(field, label)| {
            info.get(field).map(|value| ContactItem {
                label: label.to_string(),
                value: value.to_string(),
            })
        })
        .collect();

    for (field, _) in info.iter() {
        if HEADER_FIELDS.contains(&field) || CONTACT_FIELDS.iter().any(|(f, _)| *f == field) {
            continue;
        }
        if let Some(value) = info.get(field) {
            contacts.push(ContactItem {
                label: label_for(field),
                value: value.to_string(),
            });
        }
    }

    HeaderBlock {
        name: info.name().map(str::to_string),
        headline: info.title().map(str::to_string),
        contacts,
    }
}

fn subsection(custom: &CustomSection) -> SubsectionBlock {
    SubsectionBlock {
        id: custom.id.clone(),
        title: owned(custom.title.as_deref()),
        body: owned(custom.content.as_deref()),
    }
}

fn entries(blocks: impl Iterator<Item = EntryBlock>) -> Vec<DisplayBlock> {
    blocks
        .filter(|b| !b.is_empty())
        .map(DisplayBlock::Entry)
        .collect()
}

fn tag_list<'a>(pairs: impl Iterator<Item = (Option<&'a str>, Option<&'a str>)>) -> Vec<DisplayBlock> {
    let items: Vec<Tag> = pairs
        .filter_map(|(label, detail)| {
            clean(label).map(|label| Tag {
                label: label.to_string(),
                detail: owned(detail),
            })
        })
        .collect();
    if items.is_empty() {
        Vec::new()
    } else {
        vec![DisplayBlock::TagList(TagListBlock { title: None, items })]
    }
}

fn clean(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn owned(value: Option<&str>) -> Option<String> {
    clean(value).map(str::to_string)
}

fn non_blank(items: &[String]) -> Vec<String> {
    items
        .iter()
        .filter_map(|s| clean(Some(s)))
        .map(str::to_string)
        .collect()
}

fn degree_line(degree: Option<&str>, field: Option<&str>) -> Option<String> {
    match (clean(degree), clean(field)) {
        (Some(d), Some(f)) => Some(format!("{d} in {f}")),
        (Some(d), None) => Some(d.to_string()),
        (None, Some(f)) => Some(f.to_string()),
        (None, None) => None,
    }
}

fn date_range(start: Option<&str>, end: Option<&str>, current: bool) -> Option<String> {
    let end = if current { Some("Present") } else { clean(end) };
    match (clean(start), end) {
        (Some(s), Some(e)) => Some(format!("{s} – {e}")),
        (Some(s), None) => Some(s.to_string()),
        (None, Some(e)) => Some(e.to_string()),
        (None, None) => None,
    }
}

/// `linkedinUrl` -> `Linkedin Url`, `portfolio` -> `Portfolio`.
fn label_for(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 4);
    for (i, c) in field.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else if c == '_' || c == '-' {
            label.push(' ');
        } else {
            label.push(c);
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::data::{EducationEntry, ExperienceEntry, ResumeSettings, SkillEntry};
    use crate::templates::catalog::TemplateCategory;

    fn settings() -> TemplateSettings {
        TemplateSettings {
            template_id: "modern-01".into(),
            category: TemplateCategory::Modern,
            settings: ResumeSettings::default(),
        }
    }

    fn sample() -> ResumeData {
        let mut data = ResumeData {
            summary: " Systems engineer. ".into(),
            experiences: vec![ExperienceEntry {
                position: Some("Engineer".into()),
                company: Some("Acme".into()),
                start_date: Some("2020-01".into()),
                current: true,
                highlights: vec!["Shipped v2".into(), "  ".into()],
                ..Default::default()
            }],
            skills: vec![
                SkillEntry {
                    name: Some("Rust".into()),
                    level: Some("Expert".into()),
                    ..Default::default()
                },
                SkillEntry {
                    name: Some("SQL".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        data.personal_info.set("name", "Ada Lovelace");
        data.personal_info.set("email", "ada@example.com");
        data.personal_info.set("portfolio", "ada.dev");
        data.personal_info.set("phone", "");
        data
    }

    #[test]
    fn test_render_is_deterministic() {
        let data = sample();
        let a = serde_json::to_vec(&render(&data, &settings())).unwrap();
        let b = serde_json::to_vec(&render(&data.clone(), &settings())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rendered_sections_match_activity_predicate() {
        let data = sample();
        let doc = render(&data, &settings());
        let rendered: Vec<_> = doc.section_ids().cloned().collect();
        let active: Vec<_> = SectionKey::CATALOG
            .into_iter()
            .map(SectionId::Builtin)
            .filter(|id| is_section_active(&data, id))
            .collect();
        assert_eq!(rendered, active);
    }

    #[test]
    fn test_empty_resume_renders_no_sections() {
        let doc = render(&ResumeData::default(), &settings());
        assert!(doc.sections.is_empty());
        assert_eq!(doc.version, DOCUMENT_VERSION);
        assert_eq!(doc.template_id, "modern-01");
    }

    #[test]
    fn test_header_skips_blank_and_orders_contacts() {
        let doc = render(&sample(), &settings());
        let DisplayBlock::Header(header) = &doc.sections[0].blocks[0] else {
            panic!("expected header");
        };
        assert_eq!(header.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(header.headline, None);
        let labels: Vec<_> = header.contacts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Email", "Portfolio"]);
    }

    #[test]
    fn test_current_experience_dates_and_blank_highlights() {
        let doc = render(&sample(), &settings());
        let section = doc.section(&SectionKey::Experiences.into()).unwrap();
        let DisplayBlock::Entry(entry) = &section.blocks[0] else {
            panic!("expected entry");
        };
        assert_eq!(entry.dates.as_deref(), Some("2020-01 – Present"));
        assert_eq!(entry.bullets, vec!["Shipped v2".to_string()]);
        assert_eq!(entry.location, None);
    }

    #[test]
    fn test_skill_without_level_omits_detail() {
        let doc = render(&sample(), &settings());
        let section = doc.section(&SectionKey::Skills.into()).unwrap();
        let DisplayBlock::TagList(list) = &section.blocks[0] else {
            panic!("expected tag list");
        };
        assert_eq!(list.items[0].detail.as_deref(), Some("Expert"));
        assert_eq!(list.items[1].detail, None);
        let json = serde_json::to_value(&list.items[1]).unwrap();
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn test_skills_grouped_by_category() {
        let data = ResumeData {
            skills: vec![
                SkillEntry {
                    name: Some("Rust".into()),
                    category: Some("Languages".into()),
                    ..Default::default()
                },
                SkillEntry {
                    name: Some("Postgres".into()),
                    category: Some("Databases".into()),
                    ..Default::default()
                },
                SkillEntry {
                    name: Some("Go".into()),
                    category: Some("Languages".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let doc = render(&data, &settings());
        let blocks = &doc.section(&SectionKey::Skills.into()).unwrap().blocks;
        assert_eq!(blocks.len(), 2);
        let DisplayBlock::TagList(first) = &blocks[0] else {
            panic!("expected tag list");
        };
        assert_eq!(first.title.as_deref(), Some("Languages"));
        assert_eq!(first.items.len(), 2);
    }

    #[test]
    fn test_entirely_blank_entries_are_skipped_but_section_kept() {
        let data = ResumeData {
            education: vec![EducationEntry::default()],
            ..Default::default()
        };
        let doc = render(&data, &settings());
        let section = doc.section(&SectionKey::Education.into()).unwrap();
        assert!(section.blocks.is_empty());
    }

    #[test]
    fn test_custom_sections_get_group_and_own_blocks() {
        let mut data = ResumeData::default();
        data.upsert_custom_section(CustomSection {
            id: "talks".into(),
            title: Some("Talks".into()),
            content: Some("RustConf".into()),
        });
        data.upsert_custom_section(CustomSection {
            id: "summary".into(),
            title: None,
            content: Some("shadowing".into()),
        });
        let doc = render(&data, &settings());
        let ids: Vec<_> = doc.section_ids().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["customSections", "talks"]);
        assert_eq!(doc.section(&"talks".into()).unwrap().title, "Talks");
        assert_eq!(doc.section(&SectionKey::CustomSections.into()).unwrap().blocks.len(), 2);
    }

    #[test]
    fn test_date_range_forms() {
        assert_eq!(date_range(Some("2019"), Some("2021"), false).as_deref(), Some("2019 – 2021"));
        assert_eq!(date_range(Some("2019"), None, false).as_deref(), Some("2019"));
        assert_eq!(date_range(None, Some("2021"), false).as_deref(), Some("2021"));
        assert_eq!(date_range(None, Some("2021"), true).as_deref(), Some("Present"));
        assert_eq!(date_range(Some(" "), None, false), None);
    }

    #[test]
    fn test_label_for_field_names() {
        assert_eq!(label_for("portfolio"), "Portfolio");
        assert_eq!(label_for("linkedinUrl"), "Linkedin Url");
        assert_eq!(label_for("personal_site"), "Personal site");
    }
}
