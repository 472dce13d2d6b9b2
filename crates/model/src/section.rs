//! Sections and competencies.

use repdoc_narrative::NarrativeText;
use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::constants::{DEFAULT_BACKGROUND_COLOR, DEFAULT_COLOR};

/// A standalone name/equation pair, independent of section layout.
///
/// Equations are opaque strings; the model stores them without evaluating.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Competency {
    pub name: String,
    pub equation: String,
}

/// Indicator strip shown in a section header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionIndicators {
    pub label: NarrativeText,
    pub color: String,
}

/// Chip shown in a section header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionChip {
    pub label: NarrativeText,
    pub color: String,
    pub background_color: String,
}

impl Default for SectionChip {
    fn default() -> Self {
        Self {
            label: NarrativeText::default(),
            color: DEFAULT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

/// An ordered group of components with its own header metadata.
///
/// `id` is an opaque unique string assigned at creation and never
/// reassigned. `order` is a 1-based position hint; reordering components or
/// sections does not renumber it — callers that care keep it consistent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub header: NarrativeText,
    pub sub_header: NarrativeText,
    pub description: NarrativeText,
    pub badge: NarrativeText,
    pub order: u32,
    pub indicators: SectionIndicators,
    pub chip: SectionChip,
    pub image_url: String,
    pub components: Vec<Component>,
}

impl Section {
    /// Create an empty section with a fresh id and the given order hint.
    pub fn new(order: u32) -> Self {
        Self {
            id: generate_id(),
            header: NarrativeText::default(),
            sub_header: NarrativeText::default(),
            description: NarrativeText::default(),
            badge: NarrativeText::default(),
            order,
            indicators: SectionIndicators::default(),
            chip: SectionChip::default(),
            image_url: String::new(),
            components: Vec::new(),
        }
    }
}

/// Opaque section id: a v4 UUID in simple (32 hex chars) form.
fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_section_is_empty_with_fresh_id() {
        let a = Section::new(1);
        let b = Section::new(2);

        assert_eq!(a.id.len(), 32);
        assert_ne!(a.id, b.id);
        assert_eq!(a.order, 1);
        assert!(a.components.is_empty());
        assert_eq!(a.header.as_str(), "");
        assert_eq!(a.chip.color, DEFAULT_COLOR);
        assert_eq!(a.chip.background_color, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(a.indicators.color, "");
    }

    #[test]
    fn section_serializes_with_camel_case_keys() {
        let section = Section::new(3);
        let value = serde_json::to_value(&section).expect("serialize");
        assert!(value.get("subHeader").is_some());
        assert!(value.get("imageUrl").is_some());
        assert_eq!(value["order"], 3);
        assert_eq!(value["components"], serde_json::json!([]));
    }
}
