use serde::{Deserialize, Serialize};

use crate::resume::data::ResumeData;
use crate::resume::sections::{is_section_active, SectionKey};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Complete,
    Partial,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHealth {
    pub section: SectionKey,
    pub score: f64,
    pub entry_count: usize,
    pub incomplete_entries: usize,
    pub status: SectionStatus,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub overall_score: f64,
    pub sections: Vec<SectionHealth>,
    pub missing_sections: Vec<SectionKey>,
}

const SECTION_WEIGHTS: &[(SectionKey, f64)] = &[
    (SectionKey::PersonalInfo, 0.20),
    (SectionKey::Summary, 0.10),
    (SectionKey::Experiences, 0.30),
    (SectionKey::Education, 0.15),
    (SectionKey::Skills, 0.15),
    (SectionKey::Projects, 0.05),
    (SectionKey::Certifications, 0.03),
    (SectionKey::Languages, 0.02),
];

const CONTACT_FIELDS: &[&str] = &["name", "email", "phone"];

/// Scores how much of a typical resume has been filled in. Advisory only.
pub fn compute_completeness_report(data: &ResumeData) -> CompletenessReport {
    let mut sections = Vec::new();
    let mut weighted_score_sum = 0.0;
    let mut missing_sections = Vec::new();

    for &(key, weight) in SECTION_WEIGHTS {
        if !is_section_active(data, &key.into()) {
            missing_sections.push(key);
            sections.push(SectionHealth {
                section: key,
                score: 0.0,
                entry_count: 0,
                incomplete_entries: 0,
                status: SectionStatus::Missing,
                recommendations: vec![format!(
                    "Add your {} to strengthen your resume",
                    key.title().to_lowercase()
                )],
            });
            continue;
        }

        let filled = entry_fill(data, key);
        let entry_count = filled.len();
        let incomplete_entries = filled.iter().filter(|&&f| f < 1.0).count();
        let score = if entry_count == 0 {
            0.0
        } else {
            (filled.iter().sum::<f64>() / entry_count as f64).clamp(0.0, 1.0)
        };

        let status = if score >= 0.999 {
            SectionStatus::Complete
        } else {
            SectionStatus::Partial
        };

        let mut recommendations = Vec::new();
        if incomplete_entries > 0 {
            recommendations.push(match key {
                SectionKey::PersonalInfo => {
                    "Add your name, email and phone so recruiters can reach you".to_string()
                }
                SectionKey::Summary => {
                    "Expand your summary to at least two sentences".to_string()
                }
                _ => format!(
                    "{} {} entries are missing key details",
                    incomplete_entries,
                    key.title().to_lowercase()
                ),
            });
        }
        if key == SectionKey::Experiences && entry_count < 2 {
            recommendations.push("Add more experience entries to build a complete picture".to_string());
        }

        weighted_score_sum += score * weight;
        sections.push(SectionHealth {
            section: key,
            score,
            entry_count,
            incomplete_entries,
            status,
            recommendations,
        });
    }

    let total_weight: f64 = SECTION_WEIGHTS.iter().map(|(_, w)| w).sum();
    let overall_score = if total_weight > 0.0 {
        (weighted_score_sum / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    CompletenessReport {
        overall_score,
        sections,
        missing_sections,
    }
}

/// Per-entry fill fraction (1.0 means every key field is present).
fn entry_fill(data: &ResumeData, key: SectionKey) -> Vec<f64> {
    fn frac(fields: &[Option<&str>]) -> f64 {
        let present = fields
            .iter()
            .filter(|f| f.is_some_and(|s| !s.trim().is_empty()))
            .count();
        present as f64 / fields.len() as f64
    }

    match key {
        SectionKey::PersonalInfo => {
            let fields: Vec<_> = CONTACT_FIELDS
                .iter()
                .map(|f| data.personal_info.get(f))
                .collect();
            vec![frac(&fields)]
        }
        SectionKey::Summary => {
            let sentences = data
                .summary
                .split_terminator(['.', '!', '?'])
                .filter(|s| !s.trim().is_empty())
                .count();
            vec![if sentences >= 2 { 1.0 } else { 0.5 }]
        }
        SectionKey::Experiences => data
            .experiences
            .iter()
            .map(|e| {
                frac(&[
                    e.position.as_deref(),
                    e.company.as_deref(),
                    e.start_date.as_deref(),
                    e.description.as_deref(),
                ])
            })
            .collect(),
        SectionKey::Education => data
            .education
            .iter()
            .map(|e| frac(&[e.institution.as_deref(), e.degree.as_deref(), e.end_date.as_deref()]))
            .collect(),
        SectionKey::Skills => data
            .skills
            .iter()
            .map(|s| frac(&[s.name.as_deref()]))
            .collect(),
        SectionKey::Projects => data
            .projects
            .iter()
            .map(|p| frac(&[p.name.as_deref(), p.description.as_deref()]))
            .collect(),
        SectionKey::Certifications => data
            .certifications
            .iter()
            .map(|c| frac(&[c.name.as_deref(), c.issuer.as_deref()]))
            .collect(),
        SectionKey::Languages => data
            .languages
            .iter()
            .map(|l| frac(&[l.language.as_deref(), l.proficiency.as_deref()]))
            .collect(),
        _ => Vec::new(),
    }
}
