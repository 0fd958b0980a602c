use serde::Serialize;

use crate::render::{arrange, render, SectionBlock, TemplateSettings, Theme};
use crate::resume::completeness::{compute_completeness_report, CompletenessReport};
use crate::resume::data::ResumeData;
use crate::resume::sections::SectionId;
use crate::resume::validation::{validate_resume, ValidationReport};
use crate::templates::catalog::Template;

/// What the live preview surface displays after each change.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub template_id: String,
    pub premium_template: bool,
    pub document_version: u32,
    pub theme: Theme,
    pub order: Vec<SectionId>,
    pub sections: Vec<SectionBlock>,
    pub validation: ValidationReport,
    pub completeness: CompletenessReport,
}

/// Renders `data` with `template` and lays it out in `order`. Nothing is cached; the
/// preview is rebuilt from scratch on every call.
pub fn build_preview(data: &ResumeData, template: &Template, order: &[SectionId]) -> Preview {
    let settings = TemplateSettings::new(template, data.settings.clone());
    let document = render(data, &settings);
    let sections = arrange(&document, order);
    Preview {
        template_id: document.template_id,
        premium_template: template.is_premium,
        document_version: document.version,
        theme: document.theme,
        order: order.to_vec(),
        sections,
        validation: validate_resume(data),
        completeness: compute_completeness_report(data),
    }
}
