//! Template settings and the resolved visual theme.
//!
//! The template category supplies defaults; the resume's own settings override them
//! when they name a known colour scheme, a hex colour, a known font or a sane size.
//! Anything else falls back silently.

use serde::{Deserialize, Serialize};

use crate::resume::data::ResumeSettings;
use crate::templates::catalog::{Template, TemplateCategory};

/// Everything the renderer needs to know about the selected template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSettings {
    pub template_id: String,
    pub category: TemplateCategory,
    #[serde(default)]
    pub settings: ResumeSettings,
}

impl TemplateSettings {
    pub fn new(template: &Template, settings: ResumeSettings) -> Self {
        Self {
            template_id: template.id.clone(),
            category: template.category,
            settings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    SingleColumn,
    TwoColumn,
    Sidebar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingStyle {
    Underlined,
    Uppercase,
    Accent,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub layout: Layout,
    pub accent_color: String,
    pub font_family: String,
    pub font_size_pt: u8,
    pub heading_style: HeadingStyle,
}

const COLOR_SCHEMES: &[(&str, &str)] = &[
    ("blue", "#2563eb"),
    ("navy", "#1e3a8a"),
    ("teal", "#0d9488"),
    ("green", "#059669"),
    ("red", "#dc2626"),
    ("orange", "#ea580c"),
    ("purple", "#7c3aed"),
    ("gray", "#4b5563"),
    ("black", "#111827"),
];

const FONT_FAMILIES: &[&str] = &[
    "Inter",
    "Roboto",
    "Open Sans",
    "Lato",
    "Source Sans Pro",
    "Helvetica",
    "Georgia",
    "Garamond",
    "Merriweather",
    "Playfair Display",
];

const FONT_SIZE_RANGE: std::ops::RangeInclusive<u8> = 9..=14;

impl Theme {
    pub fn defaults_for(category: TemplateCategory) -> Theme {
        let (layout, color, font, size, heading_style) = match category {
            TemplateCategory::Modern => (Layout::Sidebar, "blue", "Inter", 11, HeadingStyle::Accent),
            TemplateCategory::Classic => {
                (Layout::SingleColumn, "black", "Georgia", 11, HeadingStyle::Underlined)
            }
            TemplateCategory::Creative => {
                (Layout::TwoColumn, "purple", "Playfair Display", 11, HeadingStyle::Accent)
            }
            TemplateCategory::Minimal => (Layout::SingleColumn, "gray", "Helvetica", 10, HeadingStyle::Plain),
            TemplateCategory::Executive => {
                (Layout::SingleColumn, "navy", "Garamond", 12, HeadingStyle::Uppercase)
            }
            TemplateCategory::Professional => {
                (Layout::SingleColumn, "teal", "Source Sans Pro", 11, HeadingStyle::Underlined)
            }
        };
        Theme {
            layout,
            accent_color: named_color(color).unwrap_or("#111827").to_string(),
            font_family: font.to_string(),
            font_size_pt: size,
            heading_style,
        }
    }

    pub fn resolve(settings: &TemplateSettings) -> Theme {
        let mut theme = Theme::defaults_for(settings.category);
        let prefs = &settings.settings;

        if let Some(color) = prefs.color_scheme.as_deref().and_then(resolve_color) {
            theme.accent_color = color;
        }
        if let Some(font) = prefs.font_family.as_deref().and_then(resolve_font) {
            theme.font_family = font.to_string();
        }
        if let Some(size) = prefs
            .font_size
            .as_deref()
            .and_then(|s| s.trim().trim_end_matches("pt").trim().parse::<u8>().ok())
            .filter(|s| FONT_SIZE_RANGE.contains(s))
        {
            theme.font_size_pt = size;
        }
        theme
    }
}

fn named_color(name: &str) -> Option<&'static str> {
    COLOR_SCHEMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
}

fn resolve_color(value: &str) -> Option<String> {
    let value = value.trim();
    if let Some(hex) = named_color(value) {
        return Some(hex.to_string());
    }
    let digits = value.strip_prefix('#')?;
    let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    valid.then(|| format!("#{}", digits.to_ascii_lowercase()))
}

fn resolve_font(value: &str) -> Option<&'static str> {
    let value = value.trim();
    FONT_FAMILIES
        .iter()
        .copied()
        .find(|f| f.eq_ignore_ascii_case(value))
}
