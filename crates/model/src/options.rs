//! Per-type component display options.
//!
//! Every component type owns an options schema, independent of its data
//! schema. Options are plain value structs with static defaults; the wire
//! representation uses camelCase keys and SCREAMING_SNAKE_CASE vocabulary
//! tags. Unknown option keys arriving from external JSON are dropped during
//! deserialisation.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BACKGROUND_COLOR, DEFAULT_COLOR};

/// Body rendering mode for text-bearing components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    #[default]
    #[serde(rename = "STRING")]
    Plain,
    #[serde(rename = "HTML")]
    Html,
}

/// Ordering glyph style for list-like components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListOrderType {
    Bullet,
    Numeric,
    Alphabet,
    #[default]
    Plain,
}

/// Horizontal placement of a rendered component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Left,
    #[default]
    Center,
    Right,
}

/// Index axis for charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    #[default]
    #[serde(rename = "x")]
    X,
    #[serde(rename = "y")]
    Y,
}

/// Chart rendering family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartKind {
    #[default]
    Bar,
    Bubble,
    Line,
    Pie,
    #[serde(rename = "POLARAREA")]
    PolarArea,
    Doughnut,
    Radar,
    Scatter,
}

/// Table layout direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Property rendering style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyKind {
    #[default]
    Plain,
    Badge,
}

/// Question interaction style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    SingleChoice,
    MultiChoices,
    #[default]
    Text,
}

/// Unit interpretation for indicator values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorUnit {
    #[default]
    Percentage,
    Absolute,
}

/// Visual style for indicator components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorDisplay {
    #[default]
    Chips,
    Bar,
    Balance,
    Bullets,
}

/// Blocks of a chart-table-indicator component, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CtiBlock {
    Chart,
    Table,
    Indicator,
    Wrap,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardOptions {
    pub body_type: BodyType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndicatorOptions {
    pub indentation_level: u32,
    pub unit: IndicatorUnit,
    pub display: IndicatorDisplay,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    pub indentation_level: u32,
    pub position: Position,
    pub index_axis: Axis,
    pub chart_type: ChartKind,
    pub chart_max_axis: Option<f64>,
    pub chart_min_axis: Option<f64>,
    pub show_values: bool,
    pub chart_step_size: Option<f64>,
    pub chart_show_chart_plugins: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    pub table_type: TableOrientation,
    pub is_header_visible: bool,
    pub indentation_level: u32,
    pub colored_column: Option<String>,
    pub is_secondary_table: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            table_type: TableOrientation::default(),
            is_header_visible: true,
            indentation_level: 0,
            colored_column: None,
            is_secondary_table: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyOptions {
    pub indentation_level: u32,
    pub property_type: PropertyKind,
    pub scroll: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionOptions {
    pub question_type: QuestionKind,
    pub indentation_level: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListOptions {
    pub indentation_level: u32,
    pub body_type: BodyType,
    pub list_order_type: ListOrderType,
    pub has_side_border: bool,
    pub list_color: String,
    pub list_background_color: String,
    pub show_badge: bool,
    pub badge_value: String,
    pub badge_color: String,
    pub badge_background_color: String,
    pub show_indicator: bool,
    pub show_bar_indicator: bool,
    pub show_range: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            indentation_level: 0,
            body_type: BodyType::default(),
            list_order_type: ListOrderType::default(),
            has_side_border: false,
            list_color: DEFAULT_COLOR.to_string(),
            list_background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            show_badge: false,
            badge_value: String::new(),
            badge_color: DEFAULT_COLOR.to_string(),
            badge_background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            show_indicator: false,
            show_bar_indicator: false,
            show_range: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelOptions {
    pub body_type: BodyType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChipOptions {
    pub indentation_level: u32,
    pub list_order_type: ListOrderType,
}

/// Options for the composite chart-table-indicator component. The nested
/// chart/table/indicator option keys are flattened onto one struct, the way
/// the rendering surface consumes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartTableIndicatorOptions {
    pub indentation_level: u32,
    pub display_order: Vec<CtiBlock>,
    pub chart_position: Position,
    pub chart_index_axis: Axis,
    pub chart_type: ChartKind,
    pub chart_max_axis: Option<f64>,
    pub chart_show_values: bool,
    pub table_type: TableOrientation,
    pub is_header_visible: bool,
    pub colored_column: Option<String>,
    pub indicator_unit: IndicatorUnit,
    pub indicator_display: IndicatorDisplay,
}

impl Default for ChartTableIndicatorOptions {
    fn default() -> Self {
        Self {
            indentation_level: 0,
            display_order: vec![
                CtiBlock::Chart,
                CtiBlock::Table,
                CtiBlock::Indicator,
                CtiBlock::Wrap,
            ],
            chart_position: Position::default(),
            chart_index_axis: Axis::default(),
            chart_type: ChartKind::default(),
            chart_max_axis: None,
            chart_show_values: false,
            table_type: TableOrientation::default(),
            is_header_visible: true,
            colored_column: None,
            indicator_unit: IndicatorUnit::default(),
            indicator_display: IndicatorDisplay::default(),
        }
    }
}

// Types below carry no display options; the empty struct keeps the `{}` wire
// shape stable.

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarIndicatorOptions {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrappedItemsOptions {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOptions {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeOptions {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfBreakOptions {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelLayoutOptions {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticTableOptions {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeIndicatorOptions {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticNoteOptions {}
