//! Advisory checks on entered resume data. Issues never block saving or rendering.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resume::data::ResumeData;
use crate::resume::sections::SectionKey;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    InvalidEmail,
    MissingField,
    DateOrder,
    DuplicateCustomId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub section: SectionKey,
    pub index: Option<usize>,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(
        &mut self,
        kind: IssueKind,
        section: SectionKey,
        index: Option<usize>,
        field: &str,
        message: String,
    ) {
        self.issues.push(ValidationIssue {
            kind,
            section,
            index,
            field: field.to_string(),
            message,
        });
    }

    fn require(&mut self, section: SectionKey, index: usize, field: &str, value: Option<&str>) {
        if blank(value) {
            self.push(
                IssueKind::MissingField,
                section,
                Some(index),
                field,
                format!("{} entry {} has no {}", section.title(), index + 1, field),
            );
        }
    }

    fn date_order(
        &mut self,
        section: SectionKey,
        index: usize,
        start: Option<&str>,
        end: Option<&str>,
    ) {
        if let (Some(s), Some(e)) = (start.and_then(parse_date), end.and_then(parse_date)) {
            if e < s {
                self.push(
                    IssueKind::DateOrder,
                    section,
                    Some(index),
                    "endDate",
                    format!(
                        "{} entry {} ends before it starts",
                        section.title(),
                        index + 1
                    ),
                );
            }
        }
    }
}

/// Collects every advisory issue in the resume, in catalog order.
pub fn validate_resume(data: &ResumeData) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Some(email) = data.personal_info.email() {
        if !looks_like_email(email) {
            report.push(
                IssueKind::InvalidEmail,
                SectionKey::PersonalInfo,
                None,
                "email",
                format!("'{email}' does not look like an email address"),
            );
        }
    }

    for (i, e) in data.experiences.iter().enumerate() {
        report.require(SectionKey::Experiences, i, "company", e.company.as_deref());
        report.require(SectionKey::Experiences, i, "position", e.position.as_deref());
        if !e.current {
            report.date_order(SectionKey::Experiences, i, e.start_date.as_deref(), e.end_date.as_deref());
        }
    }

    for (i, e) in data.education.iter().enumerate() {
        report.require(SectionKey::Education, i, "institution", e.institution.as_deref());
        report.date_order(SectionKey::Education, i, e.start_date.as_deref(), e.end_date.as_deref());
    }

    for (i, s) in data.skills.iter().enumerate() {
        report.require(SectionKey::Skills, i, "name", s.name.as_deref());
    }

    for (i, p) in data.projects.iter().enumerate() {
        report.require(SectionKey::Projects, i, "name", p.name.as_deref());
        report.date_order(SectionKey::Projects, i, p.start_date.as_deref(), p.end_date.as_deref());
    }

    let mut seen = HashSet::new();
    for (i, c) in data.custom_sections.iter().enumerate() {
        if !seen.insert(c.id.as_str()) {
            report.push(
                IssueKind::DuplicateCustomId,
                SectionKey::CustomSections,
                Some(i),
                "id",
                format!("custom section id '{}' is used more than once", c.id),
            );
        }
    }

    for (i, c) in data.certifications.iter().enumerate() {
        report.require(SectionKey::Certifications, i, "name", c.name.as_deref());
    }

    for (i, l) in data.languages.iter().enumerate() {
        report.require(SectionKey::Languages, i, "language", l.language.as_deref());
    }

    for (i, a) in data.awards.iter().enumerate() {
        report.require(SectionKey::Awards, i, "title", a.title.as_deref());
    }

    for (i, v) in data.volunteering.iter().enumerate() {
        report.require(SectionKey::Volunteering, i, "organization", v.organization.as_deref());
        if !v.current {
            report.date_order(SectionKey::Volunteering, i, v.start_date.as_deref(), v.end_date.as_deref());
        }
    }

    report
}

fn blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !s.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Parses `YYYY`, `YYYY-MM` or `YYYY-MM-DD`. Partial dates resolve to the first day.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
        return Some(d);
    }
    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        return NaiveDate::parse_from_str(&format!("{s}-01-01"), "%Y-%m-%d").ok();
    }
    None
}
