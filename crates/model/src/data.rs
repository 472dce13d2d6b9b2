//! Per-type component data schemas and their dataset item records.
//!
//! Each component type owns a `data` struct whose shape is fixed by the type
//! tag. Most data structs carry a `dataset`: an ordered sequence of
//! type-specific item records, which defaults to exactly one default item —
//! a freshly built component is always renderable without further input.
//!
//! Narrative-capable fields are typed [`NarrativeText`]; plain text fields
//! are `String`. The two composite types (`PANEL_LAYOUT`,
//! `CHART_TABLE_INDICATOR`) nest full [`Component`] subtrees inside their
//! dataset items; those nested components are exclusively owned by their
//! containing item.

use repdoc_narrative::NarrativeText;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::{Component, ComponentType};
use crate::constants::{DEFAULT_BACKGROUND_COLOR, DEFAULT_COLOR, DEFAULT_GRADE};

/// One chip: a small labelled badge with colours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChipItem {
    pub text: NarrativeText,
    pub icon: String,
    pub color: String,
    pub background_color: String,
}

impl Default for ChipItem {
    fn default() -> Self {
        Self {
            text: NarrativeText::default(),
            icon: String::new(),
            color: DEFAULT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardItem {
    pub header: NarrativeText,
    pub percentage: String,
    pub icon_url: String,
    pub progress: f64,
    pub body: NarrativeText,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardData {
    pub dataset: Vec<CardItem>,
    pub header: NarrativeText,
    pub definition: NarrativeText,
}

impl Default for CardData {
    fn default() -> Self {
        Self {
            dataset: vec![CardItem::default()],
            header: NarrativeText::default(),
            definition: NarrativeText::default(),
        }
    }
}

/// One named, scored range of an indicator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndicatorItem {
    pub dataset_id: i64,
    pub name: NarrativeText,
    pub scoring_rate: String,
    pub value_from: f64,
    pub value_to: f64,
    pub is_selected: bool,
    pub selected_value: f64,
    pub background_color: String,
    pub color: String,
}

impl Default for IndicatorItem {
    fn default() -> Self {
        Self {
            dataset_id: 0,
            name: NarrativeText::default(),
            scoring_rate: String::new(),
            value_from: 0.0,
            value_to: 0.0,
            is_selected: false,
            selected_value: 0.0,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndicatorData {
    pub dataset: Vec<IndicatorItem>,
    pub header: NarrativeText,
    pub definition: NarrativeText,
    pub left_label: NarrativeText,
    pub right_label: NarrativeText,
}

impl Default for IndicatorData {
    fn default() -> Self {
        Self {
            dataset: vec![IndicatorItem::default()],
            header: NarrativeText::default(),
            definition: NarrativeText::default(),
            left_label: NarrativeText::default(),
            right_label: NarrativeText::default(),
        }
    }
}

/// One chart series: values plus per-point colours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSeries {
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub color: Vec<String>,
    pub border_radius: f64,
    pub bar_thickness: f64,
}

impl Default for ChartSeries {
    fn default() -> Self {
        Self {
            data: vec![0.0],
            background_color: Vec::new(),
            color: Vec::new(),
            border_radius: 0.0,
            bar_thickness: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartData {
    pub dataset: Vec<ChartSeries>,
    pub header: NarrativeText,
    pub definition: NarrativeText,
    pub labels: NarrativeText,
}

impl Default for ChartData {
    fn default() -> Self {
        Self {
            dataset: vec![ChartSeries::default()],
            header: NarrativeText::default(),
            definition: NarrativeText::default(),
            labels: NarrativeText::default(),
        }
    }
}

/// One table row: a heterogeneous keyed record, preserved verbatim.
///
/// Rows are the one genuinely schema-less record in the model — column names
/// are document-defined. The default row carries the conventional
/// `Label`/`Score`/`color` columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableRow(pub serde_json::Map<String, Value>);

impl Default for TableRow {
    fn default() -> Self {
        let mut row = serde_json::Map::new();
        row.insert("Label".to_string(), Value::String(String::new()));
        row.insert("Score".to_string(), Value::from(0));
        row.insert("color".to_string(), Value::String(String::new()));
        Self(row)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableData {
    pub dataset: Vec<TableRow>,
    pub chips: Vec<ChipItem>,
    pub headers: NarrativeText,
    pub header: NarrativeText,
    pub definition: NarrativeText,
}

impl Default for TableData {
    fn default() -> Self {
        Self {
            dataset: vec![TableRow::default()],
            chips: vec![ChipItem::default()],
            headers: NarrativeText::default(),
            header: NarrativeText::default(),
            definition: NarrativeText::default(),
        }
    }
}

/// Badge sub-group of a list item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListBadge {
    pub value: String,
    pub color: String,
    pub background_color: String,
}

impl Default for ListBadge {
    fn default() -> Self {
        Self {
            value: String::new(),
            color: DEFAULT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

/// One list entry. A list item may embed the data of an indicator, a bar
/// indicator and a range so the rendering surface can inline them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListItem {
    pub header: NarrativeText,
    pub definition: NarrativeText,
    pub chips: Vec<ChipItem>,
    pub indicator: IndicatorData,
    pub bar_indicator: BarIndicatorData,
    pub range: RangeData,
    pub body: String,
    pub indentation: u32,
    pub badge: ListBadge,
    pub color: String,
    pub background_color: String,
}

impl Default for ListItem {
    fn default() -> Self {
        Self {
            header: NarrativeText::default(),
            definition: NarrativeText::default(),
            chips: vec![ChipItem::default()],
            indicator: IndicatorData::default(),
            bar_indicator: BarIndicatorData::default(),
            range: RangeData::default(),
            body: String::new(),
            indentation: 0,
            badge: ListBadge::default(),
            color: DEFAULT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListData {
    pub dataset: Vec<ListItem>,
    pub chips: Vec<ChipItem>,
    pub header: NarrativeText,
    pub definition: NarrativeText,
}

impl Default for ListData {
    fn default() -> Self {
        Self {
            dataset: vec![ListItem::default()],
            chips: vec![ChipItem::default()],
            header: NarrativeText::default(),
            definition: NarrativeText::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChipData {
    pub dataset: Vec<ChipItem>,
    pub header: NarrativeText,
    pub definition: NarrativeText,
}

impl Default for ChipData {
    fn default() -> Self {
        Self {
            dataset: vec![ChipItem::default()],
            header: NarrativeText::default(),
            definition: NarrativeText::default(),
        }
    }
}

/// One chart-table-indicator entry: up to three nested sub-components
/// rendered as a unit. Each slot holds a full component subtree of the
/// matching type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartTableIndicatorItem {
    pub chart: Component,
    pub table: Component,
    pub indicator: Component,
}

impl Default for ChartTableIndicatorItem {
    fn default() -> Self {
        Self {
            chart: Component::new(ComponentType::Chart),
            table: Component::new(ComponentType::Table),
            indicator: Component::new(ComponentType::Indicator),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartTableIndicatorData {
    pub dataset: Vec<ChartTableIndicatorItem>,
}

impl Default for ChartTableIndicatorData {
    fn default() -> Self {
        Self {
            dataset: vec![ChartTableIndicatorItem::default()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionAnswer {
    pub text: String,
    /// Answer payload; documents use both strings and numbers here.
    pub value: Value,
}

impl Default for QuestionAnswer {
    fn default() -> Self {
        Self {
            text: String::new(),
            value: Value::String(String::new()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionItem {
    pub question: String,
    pub answers: Vec<QuestionAnswer>,
    pub selected_values: Vec<Value>,
    pub answer_text: String,
    pub is_correct: bool,
}

impl Default for QuestionItem {
    fn default() -> Self {
        Self {
            question: String::new(),
            answers: vec![QuestionAnswer::default()],
            selected_values: Vec::new(),
            answer_text: String::new(),
            is_correct: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionData {
    pub dataset: Vec<QuestionItem>,
    pub header: NarrativeText,
    pub definition: NarrativeText,
}

impl Default for QuestionData {
    fn default() -> Self {
        Self {
            dataset: vec![QuestionItem::default()],
            header: NarrativeText::default(),
            definition: NarrativeText::default(),
        }
    }
}

/// One range band plus the score marker drawn against it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeItem {
    pub from: f64,
    pub to: f64,
    pub color: String,
    pub text_color: String,
    pub range_from: f64,
    pub range_to: f64,
    pub range_color: String,
    pub range_text_color: String,
    pub score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeData {
    pub dataset: Vec<RangeItem>,
}

impl Default for RangeData {
    fn default() -> Self {
        Self {
            dataset: vec![RangeItem::default()],
        }
    }
}

/// Page-break marker; carries no data of its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfBreakItem {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PdfBreakData {
    pub dataset: Vec<PdfBreakItem>,
}

impl Default for PdfBreakData {
    fn default() -> Self {
        Self {
            dataset: vec![PdfBreakItem::default()],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageItem {
    pub url: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageData {
    pub dataset: Vec<ImageItem>,
}

impl Default for ImageData {
    fn default() -> Self {
        Self {
            dataset: vec![ImageItem::default()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarIndicatorItem {
    pub background_color: String,
    pub label: NarrativeText,
    pub value: f64,
    pub total: f64,
}

impl Default for BarIndicatorItem {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            label: NarrativeText::default(),
            value: 0.0,
            total: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarIndicatorData {
    pub dataset: Vec<BarIndicatorItem>,
    pub header: NarrativeText,
    pub definition: NarrativeText,
}

impl Default for BarIndicatorData {
    fn default() -> Self {
        Self {
            dataset: vec![BarIndicatorItem::default()],
            header: NarrativeText::default(),
            definition: NarrativeText::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelItem {
    pub header: NarrativeText,
    pub body: NarrativeText,
    pub explanations: NarrativeText,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelData {
    pub dataset: Vec<PanelItem>,
}

impl Default for PanelData {
    fn default() -> Self {
        Self {
            dataset: vec![PanelItem::default()],
        }
    }
}

/// One side-by-side layout entry: two nested components, panel on the left
/// and panel-or-card on the right.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelLayoutItem {
    pub left: Component,
    pub right: Component,
}

impl Default for PanelLayoutItem {
    fn default() -> Self {
        Self {
            left: Component::new(ComponentType::Panel),
            right: Component::new(ComponentType::Card),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelLayoutData {
    pub dataset: Vec<PanelLayoutItem>,
}

impl Default for PanelLayoutData {
    fn default() -> Self {
        Self {
            dataset: vec![PanelLayoutItem::default()],
        }
    }
}

/// Wrapped items hold a flat list of narrative strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WrappedItemsData {
    pub dataset: Vec<NarrativeText>,
}

impl Default for WrappedItemsData {
    fn default() -> Self {
        Self {
            dataset: vec![NarrativeText::default()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaticTableData {
    pub dataset: Vec<TableRow>,
    pub header: NarrativeText,
    pub definition: NarrativeText,
    pub headers: NarrativeText,
}

impl Default for StaticTableData {
    fn default() -> Self {
        Self {
            dataset: vec![TableRow::default()],
            header: NarrativeText::default(),
            definition: NarrativeText::default(),
            headers: NarrativeText::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradeItem {
    /// Grade tag, a free-form label ("HIGH" by default).
    #[serde(rename = "type")]
    pub grade: String,
    pub label: NarrativeText,
}

impl Default for GradeItem {
    fn default() -> Self {
        Self {
            grade: DEFAULT_GRADE.to_string(),
            label: NarrativeText::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradeIndicatorData {
    pub dataset: Vec<GradeItem>,
}

impl Default for GradeIndicatorData {
    fn default() -> Self {
        Self {
            dataset: vec![GradeItem::default()],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaticNoteItem {
    pub label: NarrativeText,
    pub value: NarrativeText,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaticNoteData {
    pub dataset: Vec<StaticNoteItem>,
    pub header: NarrativeText,
    pub definition: NarrativeText,
}

impl Default for StaticNoteData {
    fn default() -> Self {
        Self {
            dataset: vec![StaticNoteItem::default()],
            header: NarrativeText::default(),
            definition: NarrativeText::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyItem {
    pub key: String,
    pub value: String,
    pub color: String,
}

impl Default for PropertyItem {
    fn default() -> Self {
        Self {
            key: String::new(),
            value: String::new(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyData {
    pub dataset: Vec<PropertyItem>,
    pub header: NarrativeText,
    pub definition: NarrativeText,
}

impl Default for PropertyData {
    fn default() -> Self {
        Self {
            dataset: vec![PropertyItem::default()],
            header: NarrativeText::default(),
            definition: NarrativeText::default(),
        }
    }
}
