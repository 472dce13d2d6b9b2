//! The closed component vocabulary and the typed component tree.
//!
//! A report document is assembled out of typed content blocks. The set of
//! block types is closed: every component in a tree is one of the nineteen
//! [`ComponentType`] tags, and [`Component`] pairs each tag with that type's
//! own data and options schemas. Because the pairing is carried by the enum
//! variant, a component whose data shape disagrees with its type tag cannot
//! be constructed, and adding a new type forces every dispatch site to be
//! extended.
//!
//! Changing a component's type is not a mutation: callers replace the whole
//! subtree with a freshly built component of the new type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::data::{
    BarIndicatorData, BarIndicatorItem, CardData, CardItem, ChartData, ChartSeries, ChartTableIndicatorData,
    ChartTableIndicatorItem, ChipData, ChipItem, GradeIndicatorData, GradeItem, ImageData,
    ImageItem, IndicatorData, IndicatorItem, ListData, ListItem, PanelData, PanelItem,
    PanelLayoutData, PanelLayoutItem, PdfBreakData, PdfBreakItem, PropertyData, PropertyItem,
    QuestionData, QuestionItem, RangeData, RangeItem, StaticNoteData, StaticNoteItem,
    StaticTableData, TableData, TableRow, WrappedItemsData,
};
use crate::options::{
    BarIndicatorOptions, CardOptions, ChartOptions, ChartTableIndicatorOptions, ChipOptions,
    GradeIndicatorOptions, ImageOptions, IndicatorOptions, ListOptions, PanelLayoutOptions,
    PanelOptions, PdfBreakOptions, PropertyOptions, QuestionOptions, RangeOptions,
    StaticNoteOptions, StaticTableOptions, TableOptions, WrappedItemsOptions,
};
use crate::{DocumentError, DocumentResult};
use repdoc_narrative::NarrativeText;

/// Error returned when a string is not one of the component type tags.
#[derive(Debug, thiserror::Error)]
#[error("unknown component type: {0}")]
pub struct ParseComponentTypeError(pub String);

/// The closed set of component type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Card,
    Indicator,
    Chart,
    Table,
    List,
    Chip,
    ChartTableIndicator,
    Question,
    Range,
    PdfBreak,
    Image,
    BarIndicator,
    Panel,
    PanelLayout,
    WrappedItems,
    StaticTable,
    GradeIndicator,
    StaticNote,
    Property,
}

impl ComponentType {
    /// Every component type, in the vocabulary's canonical order.
    pub const ALL: [ComponentType; 19] = [
        ComponentType::Indicator,
        ComponentType::Property,
        ComponentType::Chart,
        ComponentType::Table,
        ComponentType::List,
        ComponentType::Chip,
        ComponentType::ChartTableIndicator,
        ComponentType::Question,
        ComponentType::Range,
        ComponentType::PdfBreak,
        ComponentType::Image,
        ComponentType::BarIndicator,
        ComponentType::Panel,
        ComponentType::PanelLayout,
        ComponentType::WrappedItems,
        ComponentType::Card,
        ComponentType::StaticTable,
        ComponentType::GradeIndicator,
        ComponentType::StaticNote,
    ];

    /// The wire tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Card => "CARD",
            ComponentType::Indicator => "INDICATOR",
            ComponentType::Chart => "CHART",
            ComponentType::Table => "TABLE",
            ComponentType::List => "LIST",
            ComponentType::Chip => "CHIP",
            ComponentType::ChartTableIndicator => "CHART_TABLE_INDICATOR",
            ComponentType::Question => "QUESTION",
            ComponentType::Range => "RANGE",
            ComponentType::PdfBreak => "PDF_BREAK",
            ComponentType::Image => "IMAGE",
            ComponentType::BarIndicator => "BAR_INDICATOR",
            ComponentType::Panel => "PANEL",
            ComponentType::PanelLayout => "PANEL_LAYOUT",
            ComponentType::WrappedItems => "WRAPPED_ITEMS",
            ComponentType::StaticTable => "STATIC_TABLE",
            ComponentType::GradeIndicator => "GRADE_INDICATOR",
            ComponentType::StaticNote => "STATIC_NOTE",
            ComponentType::Property => "PROPERTY",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = ParseComponentTypeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "CARD" => Ok(ComponentType::Card),
            "INDICATOR" => Ok(ComponentType::Indicator),
            "CHART" => Ok(ComponentType::Chart),
            "TABLE" => Ok(ComponentType::Table),
            "LIST" => Ok(ComponentType::List),
            "CHIP" => Ok(ComponentType::Chip),
            "CHART_TABLE_INDICATOR" => Ok(ComponentType::ChartTableIndicator),
            "QUESTION" => Ok(ComponentType::Question),
            "RANGE" => Ok(ComponentType::Range),
            "PDF_BREAK" => Ok(ComponentType::PdfBreak),
            "IMAGE" => Ok(ComponentType::Image),
            "BAR_INDICATOR" => Ok(ComponentType::BarIndicator),
            "PANEL" => Ok(ComponentType::Panel),
            "PANEL_LAYOUT" => Ok(ComponentType::PanelLayout),
            "WRAPPED_ITEMS" => Ok(ComponentType::WrappedItems),
            "STATIC_TABLE" => Ok(ComponentType::StaticTable),
            "GRADE_INDICATOR" => Ok(ComponentType::GradeIndicator),
            "STATIC_NOTE" => Ok(ComponentType::StaticNote),
            "PROPERTY" => Ok(ComponentType::Property),
            other => Err(ParseComponentTypeError(other.to_string())),
        }
    }
}

impl Serialize for ComponentType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComponentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One typed content block.
///
/// The wire shape is `{"type": TAG, "data": {...}, "options": {...}}`; the
/// tag selects the variant and with it both schemas. Missing `data` or
/// `options` deserialize to the type's defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    #[serde(rename = "CARD")]
    Card {
        #[serde(default)]
        data: CardData,
        #[serde(default)]
        options: CardOptions,
    },
    #[serde(rename = "INDICATOR")]
    Indicator {
        #[serde(default)]
        data: IndicatorData,
        #[serde(default)]
        options: IndicatorOptions,
    },
    #[serde(rename = "CHART")]
    Chart {
        #[serde(default)]
        data: ChartData,
        #[serde(default)]
        options: ChartOptions,
    },
    #[serde(rename = "TABLE")]
    Table {
        #[serde(default)]
        data: TableData,
        #[serde(default)]
        options: TableOptions,
    },
    #[serde(rename = "LIST")]
    List {
        #[serde(default)]
        data: ListData,
        #[serde(default)]
        options: ListOptions,
    },
    #[serde(rename = "CHIP")]
    Chip {
        #[serde(default)]
        data: ChipData,
        #[serde(default)]
        options: ChipOptions,
    },
    #[serde(rename = "CHART_TABLE_INDICATOR")]
    ChartTableIndicator {
        #[serde(default)]
        data: ChartTableIndicatorData,
        #[serde(default)]
        options: ChartTableIndicatorOptions,
    },
    #[serde(rename = "QUESTION")]
    Question {
        #[serde(default)]
        data: QuestionData,
        #[serde(default)]
        options: QuestionOptions,
    },
    #[serde(rename = "RANGE")]
    Range {
        #[serde(default)]
        data: RangeData,
        #[serde(default)]
        options: RangeOptions,
    },
    #[serde(rename = "PDF_BREAK")]
    PdfBreak {
        #[serde(default)]
        data: PdfBreakData,
        #[serde(default)]
        options: PdfBreakOptions,
    },
    #[serde(rename = "IMAGE")]
    Image {
        #[serde(default)]
        data: ImageData,
        #[serde(default)]
        options: ImageOptions,
    },
    #[serde(rename = "BAR_INDICATOR")]
    BarIndicator {
        #[serde(default)]
        data: BarIndicatorData,
        #[serde(default)]
        options: BarIndicatorOptions,
    },
    #[serde(rename = "PANEL")]
    Panel {
        #[serde(default)]
        data: PanelData,
        #[serde(default)]
        options: PanelOptions,
    },
    #[serde(rename = "PANEL_LAYOUT")]
    PanelLayout {
        #[serde(default)]
        data: PanelLayoutData,
        #[serde(default)]
        options: PanelLayoutOptions,
    },
    #[serde(rename = "WRAPPED_ITEMS")]
    WrappedItems {
        #[serde(default)]
        data: WrappedItemsData,
        #[serde(default)]
        options: WrappedItemsOptions,
    },
    #[serde(rename = "STATIC_TABLE")]
    StaticTable {
        #[serde(default)]
        data: StaticTableData,
        #[serde(default)]
        options: StaticTableOptions,
    },
    #[serde(rename = "GRADE_INDICATOR")]
    GradeIndicator {
        #[serde(default)]
        data: GradeIndicatorData,
        #[serde(default)]
        options: GradeIndicatorOptions,
    },
    #[serde(rename = "STATIC_NOTE")]
    StaticNote {
        #[serde(default)]
        data: StaticNoteData,
        #[serde(default)]
        options: StaticNoteOptions,
    },
    #[serde(rename = "PROPERTY")]
    Property {
        #[serde(default)]
        data: PropertyData,
        #[serde(default)]
        options: PropertyOptions,
    },
}

impl Component {
    /// Build the fully-populated default subtree for `kind`.
    ///
    /// Every dataset starts with exactly one default item; the composite
    /// types build their nested components recursively (a panel layout gets
    /// a default panel and card, a chart-table-indicator gets a default
    /// chart, table and indicator).
    pub fn new(kind: ComponentType) -> Self {
        match kind {
            ComponentType::Card => Component::Card {
                data: CardData::default(),
                options: CardOptions::default(),
            },
            ComponentType::Indicator => Component::Indicator {
                data: IndicatorData::default(),
                options: IndicatorOptions::default(),
            },
            ComponentType::Chart => Component::Chart {
                data: ChartData::default(),
                options: ChartOptions::default(),
            },
            ComponentType::Table => Component::Table {
                data: TableData::default(),
                options: TableOptions::default(),
            },
            ComponentType::List => Component::List {
                data: ListData::default(),
                options: ListOptions::default(),
            },
            ComponentType::Chip => Component::Chip {
                data: ChipData::default(),
                options: ChipOptions::default(),
            },
            ComponentType::ChartTableIndicator => Component::ChartTableIndicator {
                data: ChartTableIndicatorData::default(),
                options: ChartTableIndicatorOptions::default(),
            },
            ComponentType::Question => Component::Question {
                data: QuestionData::default(),
                options: QuestionOptions::default(),
            },
            ComponentType::Range => Component::Range {
                data: RangeData::default(),
                options: RangeOptions::default(),
            },
            ComponentType::PdfBreak => Component::PdfBreak {
                data: PdfBreakData::default(),
                options: PdfBreakOptions::default(),
            },
            ComponentType::Image => Component::Image {
                data: ImageData::default(),
                options: ImageOptions::default(),
            },
            ComponentType::BarIndicator => Component::BarIndicator {
                data: BarIndicatorData::default(),
                options: BarIndicatorOptions::default(),
            },
            ComponentType::Panel => Component::Panel {
                data: PanelData::default(),
                options: PanelOptions::default(),
            },
            ComponentType::PanelLayout => Component::PanelLayout {
                data: PanelLayoutData::default(),
                options: PanelLayoutOptions::default(),
            },
            ComponentType::WrappedItems => Component::WrappedItems {
                data: WrappedItemsData::default(),
                options: WrappedItemsOptions::default(),
            },
            ComponentType::StaticTable => Component::StaticTable {
                data: StaticTableData::default(),
                options: StaticTableOptions::default(),
            },
            ComponentType::GradeIndicator => Component::GradeIndicator {
                data: GradeIndicatorData::default(),
                options: GradeIndicatorOptions::default(),
            },
            ComponentType::StaticNote => Component::StaticNote {
                data: StaticNoteData::default(),
                options: StaticNoteOptions::default(),
            },
            ComponentType::Property => Component::Property {
                data: PropertyData::default(),
                options: PropertyOptions::default(),
            },
        }
    }

    /// The type tag of this component.
    pub fn component_type(&self) -> ComponentType {
        match self {
            Component::Card { .. } => ComponentType::Card,
            Component::Indicator { .. } => ComponentType::Indicator,
            Component::Chart { .. } => ComponentType::Chart,
            Component::Table { .. } => ComponentType::Table,
            Component::List { .. } => ComponentType::List,
            Component::Chip { .. } => ComponentType::Chip,
            Component::ChartTableIndicator { .. } => ComponentType::ChartTableIndicator,
            Component::Question { .. } => ComponentType::Question,
            Component::Range { .. } => ComponentType::Range,
            Component::PdfBreak { .. } => ComponentType::PdfBreak,
            Component::Image { .. } => ComponentType::Image,
            Component::BarIndicator { .. } => ComponentType::BarIndicator,
            Component::Panel { .. } => ComponentType::Panel,
            Component::PanelLayout { .. } => ComponentType::PanelLayout,
            Component::WrappedItems { .. } => ComponentType::WrappedItems,
            Component::StaticTable { .. } => ComponentType::StaticTable,
            Component::GradeIndicator { .. } => ComponentType::GradeIndicator,
            Component::StaticNote { .. } => ComponentType::StaticNote,
            Component::Property { .. } => ComponentType::Property,
        }
    }

    /// Number of items in this component's dataset.
    pub fn dataset_len(&self) -> usize {
        match self {
            Component::Card { data, .. } => data.dataset.len(),
            Component::Indicator { data, .. } => data.dataset.len(),
            Component::Chart { data, .. } => data.dataset.len(),
            Component::Table { data, .. } => data.dataset.len(),
            Component::List { data, .. } => data.dataset.len(),
            Component::Chip { data, .. } => data.dataset.len(),
            Component::ChartTableIndicator { data, .. } => data.dataset.len(),
            Component::Question { data, .. } => data.dataset.len(),
            Component::Range { data, .. } => data.dataset.len(),
            Component::PdfBreak { data, .. } => data.dataset.len(),
            Component::Image { data, .. } => data.dataset.len(),
            Component::BarIndicator { data, .. } => data.dataset.len(),
            Component::Panel { data, .. } => data.dataset.len(),
            Component::PanelLayout { data, .. } => data.dataset.len(),
            Component::WrappedItems { data, .. } => data.dataset.len(),
            Component::StaticTable { data, .. } => data.dataset.len(),
            Component::GradeIndicator { data, .. } => data.dataset.len(),
            Component::StaticNote { data, .. } => data.dataset.len(),
            Component::Property { data, .. } => data.dataset.len(),
        }
    }

    /// Append one default dataset item of this component's own item shape.
    pub fn push_dataset_item(&mut self) {
        match self {
            Component::Card { data, .. } => data.dataset.push(CardItem::default()),
            Component::Indicator { data, .. } => data.dataset.push(IndicatorItem::default()),
            Component::Chart { data, .. } => data.dataset.push(ChartSeries::default()),
            Component::Table { data, .. } => data.dataset.push(TableRow::default()),
            Component::List { data, .. } => data.dataset.push(ListItem::default()),
            Component::Chip { data, .. } => data.dataset.push(ChipItem::default()),
            Component::ChartTableIndicator { data, .. } => {
                data.dataset.push(ChartTableIndicatorItem::default())
            }
            Component::Question { data, .. } => data.dataset.push(QuestionItem::default()),
            Component::Range { data, .. } => data.dataset.push(RangeItem::default()),
            Component::PdfBreak { data, .. } => data.dataset.push(PdfBreakItem::default()),
            Component::Image { data, .. } => data.dataset.push(ImageItem::default()),
            Component::BarIndicator { data, .. } => data.dataset.push(BarIndicatorItem::default()),
            Component::Panel { data, .. } => data.dataset.push(PanelItem::default()),
            Component::PanelLayout { data, .. } => data.dataset.push(PanelLayoutItem::default()),
            Component::WrappedItems { data, .. } => data.dataset.push(NarrativeText::default()),
            Component::StaticTable { data, .. } => data.dataset.push(TableRow::default()),
            Component::GradeIndicator { data, .. } => data.dataset.push(GradeItem::default()),
            Component::StaticNote { data, .. } => data.dataset.push(StaticNoteItem::default()),
            Component::Property { data, .. } => data.dataset.push(PropertyItem::default()),
        }
    }

    /// Remove the dataset item at `index`.
    pub fn remove_dataset_item(&mut self, index: usize) -> DocumentResult<()> {
        let len = self.dataset_len();
        if index >= len {
            return Err(DocumentError::DatasetIndexOutOfRange { index, len });
        }

        match self {
            Component::Card { data, .. } => {
                data.dataset.remove(index);
            }
            Component::Indicator { data, .. } => {
                data.dataset.remove(index);
            }
            Component::Chart { data, .. } => {
                data.dataset.remove(index);
            }
            Component::Table { data, .. } => {
                data.dataset.remove(index);
            }
            Component::List { data, .. } => {
                data.dataset.remove(index);
            }
            Component::Chip { data, .. } => {
                data.dataset.remove(index);
            }
            Component::ChartTableIndicator { data, .. } => {
                data.dataset.remove(index);
            }
            Component::Question { data, .. } => {
                data.dataset.remove(index);
            }
            Component::Range { data, .. } => {
                data.dataset.remove(index);
            }
            Component::PdfBreak { data, .. } => {
                data.dataset.remove(index);
            }
            Component::Image { data, .. } => {
                data.dataset.remove(index);
            }
            Component::BarIndicator { data, .. } => {
                data.dataset.remove(index);
            }
            Component::Panel { data, .. } => {
                data.dataset.remove(index);
            }
            Component::PanelLayout { data, .. } => {
                data.dataset.remove(index);
            }
            Component::WrappedItems { data, .. } => {
                data.dataset.remove(index);
            }
            Component::StaticTable { data, .. } => {
                data.dataset.remove(index);
            }
            Component::GradeIndicator { data, .. } => {
                data.dataset.remove(index);
            }
            Component::StaticNote { data, .. } => {
                data.dataset.remove(index);
            }
            Component::Property { data, .. } => {
                data.dataset.remove(index);
            }
        }

        Ok(())
    }

    /// The component-level chips array, for the types that carry one.
    fn chips_mut(&mut self) -> Option<&mut Vec<ChipItem>> {
        match self {
            Component::Table { data, .. } => Some(&mut data.chips),
            Component::List { data, .. } => Some(&mut data.chips),
            _ => None,
        }
    }

    /// Append one default chip. Only TABLE and LIST carry a chips array;
    /// calling this on any other type is a caller bug.
    pub fn push_chip(&mut self) -> DocumentResult<()> {
        let kind = self.component_type();
        let chips = self
            .chips_mut()
            .ok_or(DocumentError::ChipsUnsupported(kind))?;
        chips.push(ChipItem::default());
        Ok(())
    }

    /// Remove the chip at `index`.
    pub fn remove_chip(&mut self, index: usize) -> DocumentResult<()> {
        let kind = self.component_type();
        let chips = self
            .chips_mut()
            .ok_or(DocumentError::ChipsUnsupported(kind))?;
        let len = chips.len();
        if index >= len {
            return Err(DocumentError::DatasetIndexOutOfRange { index, len });
        }
        chips.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trips_for_every_type() {
        for kind in ComponentType::ALL {
            let parsed: ComponentType = kind.as_str().parse().expect("parse tag");
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "GAUGE".parse::<ComponentType>().expect_err("unknown tag");
        assert_eq!(err.to_string(), "unknown component type: GAUGE");
    }

    #[test]
    fn every_type_builds_a_one_item_dataset() {
        for kind in ComponentType::ALL {
            let component = Component::new(kind);
            assert_eq!(component.component_type(), kind);
            assert_eq!(component.dataset_len(), 1, "{kind} default dataset");
        }
    }

    #[test]
    fn wire_shape_carries_type_tag() {
        for kind in ComponentType::ALL {
            let value = serde_json::to_value(Component::new(kind)).expect("serialize");
            assert_eq!(value["type"], kind.as_str(), "{kind} tag");
            assert!(value["data"].is_object(), "{kind} data");
            assert!(value["options"].is_object(), "{kind} options");
        }
    }

    #[test]
    fn wire_shape_round_trips_for_every_type() {
        for kind in ComponentType::ALL {
            let component = Component::new(kind);
            let value = serde_json::to_value(&component).expect("serialize");
            let back: Component = serde_json::from_value(value).expect("deserialize");
            assert_eq!(back, component, "{kind} round trip");
        }
    }

    #[test]
    fn panel_layout_nests_panel_and_card() {
        let component = Component::new(ComponentType::PanelLayout);
        let Component::PanelLayout { data, .. } = &component else {
            panic!("expected PANEL_LAYOUT");
        };
        let item = &data.dataset[0];
        assert_eq!(item.left.component_type(), ComponentType::Panel);
        assert_eq!(item.right.component_type(), ComponentType::Card);
    }

    #[test]
    fn chart_table_indicator_nests_all_three_slots() {
        let component = Component::new(ComponentType::ChartTableIndicator);
        let Component::ChartTableIndicator { data, .. } = &component else {
            panic!("expected CHART_TABLE_INDICATOR");
        };
        let item = &data.dataset[0];
        assert_eq!(item.chart.component_type(), ComponentType::Chart);
        assert_eq!(item.table.component_type(), ComponentType::Table);
        assert_eq!(item.indicator.component_type(), ComponentType::Indicator);
    }

    #[test]
    fn dataset_items_append_and_remove() {
        let mut component = Component::new(ComponentType::Question);
        component.push_dataset_item();
        assert_eq!(component.dataset_len(), 2);

        component.remove_dataset_item(0).expect("remove first");
        assert_eq!(component.dataset_len(), 1);

        let err = component.remove_dataset_item(5).expect_err("out of range");
        assert!(matches!(
            err,
            DocumentError::DatasetIndexOutOfRange { index: 5, len: 1 }
        ));
    }

    #[test]
    fn chips_are_restricted_to_table_and_list() {
        let mut table = Component::new(ComponentType::Table);
        table.push_chip().expect("table carries chips");

        let mut chart = Component::new(ComponentType::Chart);
        let err = chart.push_chip().expect_err("chart has no chips");
        assert!(matches!(
            err,
            DocumentError::ChipsUnsupported(ComponentType::Chart)
        ));
    }

    #[test]
    fn missing_data_and_options_deserialize_to_defaults() {
        let component: Component =
            serde_json::from_value(serde_json::json!({ "type": "CARD" })).expect("deserialize");
        assert_eq!(component, Component::new(ComponentType::Card));
    }
}
