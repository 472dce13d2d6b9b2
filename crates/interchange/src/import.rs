//! Tolerant JSON document import.
//!
//! Import is transactional at the top level only: the target document is
//! cleared before repopulating, and there is no rollback if a later step
//! fails. Below the root, the policy is per-item isolation — one bad
//! competency, section, component or dataset item is skipped with a recorded
//! [`ImportWarning`] and the remaining items still import. Sections and
//! components are populated strictly in input-array order, so the resulting
//! tree is deterministic for a given input.

use serde::de::DeserializeOwned;
use serde_json::Value;

use repdoc_model::component::{Component, ComponentType};
use repdoc_model::data::{
    BarIndicatorData, BarIndicatorItem, CardData, CardItem, ChartData, ChartSeries,
    ChartTableIndicatorData, ChartTableIndicatorItem, ChipData, ChipItem, GradeIndicatorData,
    GradeItem, ImageData, ImageItem, IndicatorData, IndicatorItem, ListData, ListItem, PanelData,
    PanelItem, PanelLayoutData, PanelLayoutItem, PdfBreakData, PdfBreakItem, PropertyData,
    PropertyItem, QuestionData, QuestionItem, RangeData, RangeItem, StaticNoteData,
    StaticNoteItem, StaticTableData, TableData, TableRow, WrappedItemsData,
};
use repdoc_model::{Competency, Document, Section};
use repdoc_narrative::{encode, NarrativeText};

use crate::{ImportError, ParseError};

type JsonMap = serde_json::Map<String, Value>;

/// One skipped or defaulted item, with the JSON path it was found at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportWarning {
    pub path: String,
    pub reason: String,
}

impl std::fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Parse interchange JSON text.
///
/// Parsing happens before any document mutation, so a syntax error leaves
/// the caller's document untouched.
pub fn parse_json(text: &str) -> Result<Value, ParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Rebuild `doc` in place from an interchange JSON value.
///
/// Clears all existing sections and competencies first, then repopulates
/// from the input. Returns the warnings collected while skipping malformed
/// items; each warning is also logged. The only fatal case is a root value
/// that is not a JSON object.
pub fn import_document(
    doc: &mut Document,
    json: &Value,
) -> Result<Vec<ImportWarning>, ImportError> {
    let root = json.as_object().ok_or(ImportError::RootNotAnObject)?;

    doc.clear();
    let mut warnings = Vec::new();

    match root.get("competencies") {
        None => {}
        Some(Value::Array(items)) => import_competencies(doc, items, &mut warnings),
        Some(_) => record(&mut warnings, "competencies", "expected an array; ignored"),
    }

    match root.get("sections") {
        None => {}
        Some(Value::Array(items)) => import_sections(doc, items, &mut warnings),
        Some(_) => record(&mut warnings, "sections", "expected an array; ignored"),
    }

    Ok(warnings)
}

fn record(warnings: &mut Vec<ImportWarning>, path: impl Into<String>, reason: impl Into<String>) {
    let warning = ImportWarning {
        path: path.into(),
        reason: reason.into(),
    };
    tracing::warn!(path = %warning.path, "import: {}", warning.reason);
    warnings.push(warning);
}

fn import_competencies(doc: &mut Document, items: &[Value], warnings: &mut Vec<ImportWarning>) {
    for (index, item) in items.iter().enumerate() {
        let Some(obj) = item.as_object() else {
            record(
                warnings,
                format!("competencies[{index}]"),
                "not an object; skipped",
            );
            continue;
        };

        doc.competencies.push(Competency {
            name: string_field(obj, "name"),
            equation: string_field(obj, "equation"),
        });
    }
}

fn import_sections(doc: &mut Document, items: &[Value], warnings: &mut Vec<ImportWarning>) {
    for (index, item) in items.iter().enumerate() {
        let path = format!("sections[{index}]");
        let Some(obj) = item.as_object() else {
            record(warnings, path, "not an object; skipped");
            continue;
        };

        let mut section = Section::new(index as u32 + 1);
        patch_section_scalars(&mut section, obj);

        match obj.get("components") {
            None => {}
            Some(Value::Array(components)) => {
                for (component_index, component) in components.iter().enumerate() {
                    let component_path = format!("{path}.components[{component_index}]");
                    if let Some(built) =
                        import_component_entry(component, &component_path, warnings)
                    {
                        section.components.push(built);
                    }
                }
            }
            Some(_) => record(
                warnings,
                format!("{path}.components"),
                "expected an array; ignored",
            ),
        }

        doc.sections.push(section);
    }
}

/// Patch the scalar section fields present in the input; everything else
/// keeps the freshly built defaults. The `components` key is handled by the
/// caller, never patched as a scalar.
fn patch_section_scalars(section: &mut Section, obj: &JsonMap) {
    if let Some(id) = obj.get("id").and_then(Value::as_str) {
        if !id.is_empty() {
            section.id = id.to_string();
        }
    }
    if let Some(header) = obj.get("header").and_then(Value::as_str) {
        section.header = NarrativeText::new(header);
    }
    if let Some(sub_header) = obj.get("subHeader").and_then(Value::as_str) {
        section.sub_header = NarrativeText::new(sub_header);
    }
    if let Some(description) = obj.get("description").and_then(Value::as_str) {
        section.description = NarrativeText::new(description);
    }
    if let Some(badge) = obj.get("badge").and_then(Value::as_str) {
        section.badge = NarrativeText::new(badge);
    }
    if let Some(order) = obj.get("order").and_then(Value::as_u64).filter(|o| *o > 0) {
        section.order = order as u32;
    }
    if let Some(indicators) = obj.get("indicators").and_then(Value::as_object) {
        if let Some(label) = indicators.get("label").and_then(Value::as_str) {
            section.indicators.label = NarrativeText::new(label);
        }
        if let Some(color) = indicators.get("color").and_then(Value::as_str) {
            section.indicators.color = color.to_string();
        }
    }
    if let Some(chip) = obj.get("chip").and_then(Value::as_object) {
        if let Some(label) = chip.get("label").and_then(Value::as_str) {
            section.chip.label = NarrativeText::new(label);
        }
        if let Some(color) = chip.get("color").and_then(Value::as_str) {
            section.chip.color = color.to_string();
        }
        if let Some(background) = chip.get("backgroundColor").and_then(Value::as_str) {
            section.chip.background_color = background.to_string();
        }
    }
    if let Some(image_url) = obj.get("imageUrl").and_then(Value::as_str) {
        section.image_url = image_url.to_string();
    }
}

fn string_field(obj: &JsonMap, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Import one entry of a `components` array. Returns `None` (with a
/// warning) for entries that cannot identify a component type.
fn import_component_entry(
    value: &Value,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) -> Option<Component> {
    let Some(obj) = value.as_object() else {
        record(warnings, path, "not an object; skipped");
        return None;
    };

    let Some(tag) = obj.get("type").and_then(Value::as_str) else {
        record(warnings, path, "missing component type; skipped");
        return None;
    };

    let kind = match tag.parse::<ComponentType>() {
        Ok(kind) => kind,
        Err(err) => {
            record(warnings, path, format!("{err}; skipped"));
            return None;
        }
    };

    Some(import_component(
        kind,
        obj.get("data"),
        obj.get("options"),
        path,
        warnings,
    ))
}

/// Gives the generic importer access to a data struct's `dataset` sequence.
trait DatasetCarrier<I> {
    fn dataset_mut(&mut self) -> &mut Vec<I>;
}

macro_rules! dataset_carrier {
    ($data:ty, $item:ty) => {
        impl DatasetCarrier<$item> for $data {
            fn dataset_mut(&mut self) -> &mut Vec<$item> {
                &mut self.dataset
            }
        }
    };
}

dataset_carrier!(CardData, CardItem);
dataset_carrier!(IndicatorData, IndicatorItem);
dataset_carrier!(ChartData, ChartSeries);
dataset_carrier!(TableData, TableRow);
dataset_carrier!(ListData, ListItem);
dataset_carrier!(ChipData, ChipItem);
dataset_carrier!(QuestionData, QuestionItem);
dataset_carrier!(RangeData, RangeItem);
dataset_carrier!(PdfBreakData, PdfBreakItem);
dataset_carrier!(ImageData, ImageItem);
dataset_carrier!(BarIndicatorData, BarIndicatorItem);
dataset_carrier!(PanelData, PanelItem);
dataset_carrier!(StaticTableData, TableRow);
dataset_carrier!(GradeIndicatorData, GradeItem);
dataset_carrier!(StaticNoteData, StaticNoteItem);
dataset_carrier!(PropertyData, PropertyItem);

/// Build a component of `kind` from external `data`/`options` values,
/// merging seed fields over the type's defaults.
fn import_component(
    kind: ComponentType,
    data_val: Option<&Value>,
    options_val: Option<&Value>,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) -> Component {
    match kind {
        ComponentType::Card => Component::Card {
            data: import_simple_data::<CardData, CardItem>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::Indicator => Component::Indicator {
            data: import_simple_data::<IndicatorData, IndicatorItem>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::Chart => Component::Chart {
            data: import_simple_data::<ChartData, ChartSeries>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::Table => {
            let mut data = import_simple_data::<TableData, TableRow>(data_val, path, warnings);
            rebuild_chips(&mut data.chips, data_val, path, warnings);
            Component::Table {
                data,
                options: options_or_default(options_val, path, warnings),
            }
        }
        ComponentType::List => {
            let mut data = import_simple_data::<ListData, ListItem>(data_val, path, warnings);
            rebuild_chips(&mut data.chips, data_val, path, warnings);
            Component::List {
                data,
                options: options_or_default(options_val, path, warnings),
            }
        }
        ComponentType::Chip => Component::Chip {
            data: import_simple_data::<ChipData, ChipItem>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::ChartTableIndicator => {
            import_chart_table_indicator(data_val, options_val, path, warnings)
        }
        ComponentType::Question => Component::Question {
            data: import_simple_data::<QuestionData, QuestionItem>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::Range => Component::Range {
            data: import_simple_data::<RangeData, RangeItem>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::PdfBreak => Component::PdfBreak {
            data: import_simple_data::<PdfBreakData, PdfBreakItem>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::Image => Component::Image {
            data: import_simple_data::<ImageData, ImageItem>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::BarIndicator => Component::BarIndicator {
            data: import_simple_data::<BarIndicatorData, BarIndicatorItem>(
                data_val, path, warnings,
            ),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::Panel => Component::Panel {
            data: import_simple_data::<PanelData, PanelItem>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::PanelLayout => import_panel_layout(data_val, options_val, path, warnings),
        ComponentType::WrappedItems => import_wrapped_items(data_val, options_val, path, warnings),
        ComponentType::StaticTable => Component::StaticTable {
            data: import_simple_data::<StaticTableData, TableRow>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::GradeIndicator => Component::GradeIndicator {
            data: import_simple_data::<GradeIndicatorData, GradeItem>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::StaticNote => Component::StaticNote {
            data: import_simple_data::<StaticNoteData, StaticNoteItem>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
        ComponentType::Property => Component::Property {
            data: import_simple_data::<PropertyData, PropertyItem>(data_val, path, warnings),
            options: options_or_default(options_val, path, warnings),
        },
    }
}

/// The shared data import path: deserialize scalar fields with defaults
/// (with `dataset`/`chips` stripped first), then, if the input carries a
/// dataset array, rebuild the dataset item by item.
fn import_simple_data<D, I>(
    data_val: Option<&Value>,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) -> D
where
    D: DeserializeOwned + Default + DatasetCarrier<I>,
    I: DeserializeOwned,
{
    let obj = data_object(data_val, path, warnings);

    let mut stripped = obj.clone();
    stripped.remove("dataset");
    stripped.remove("chips");
    let mut data: D = from_value_or_default(
        Value::Object(stripped),
        &format!("{path}.data"),
        warnings,
    );

    if let Some(items) = obj.get("dataset").and_then(Value::as_array) {
        *data.dataset_mut() = rebuild_items(items, &format!("{path}.data.dataset"), warnings);
    }

    data
}

fn rebuild_chips(
    chips: &mut Vec<ChipItem>,
    data_val: Option<&Value>,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) {
    let items = data_val
        .and_then(Value::as_object)
        .and_then(|obj| obj.get("chips"))
        .and_then(Value::as_array);
    if let Some(items) = items {
        *chips = rebuild_items(items, &format!("{path}.data.chips"), warnings);
    }
}

/// The input `data` value as an object; anything else falls back to empty
/// (all defaults) with a warning when a value was present.
fn data_object(data_val: Option<&Value>, path: &str, warnings: &mut Vec<ImportWarning>) -> JsonMap {
    match data_val {
        None => JsonMap::new(),
        Some(Value::Object(obj)) => obj.clone(),
        Some(_) => {
            record(
                warnings,
                format!("{path}.data"),
                "expected an object; using defaults",
            );
            JsonMap::new()
        }
    }
}

fn options_or_default<T: DeserializeOwned + Default>(
    options_val: Option<&Value>,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) -> T {
    match options_val {
        None => T::default(),
        Some(value) if value.is_object() => from_value_or_default(
            value.clone(),
            &format!("{path}.options"),
            warnings,
        ),
        Some(_) => {
            record(
                warnings,
                format!("{path}.options"),
                "expected an object; using defaults",
            );
            T::default()
        }
    }
}

/// Deserialize with per-field defaults; on schema mismatch record the
/// failing path and fall back to the type's defaults.
fn from_value_or_default<T: DeserializeOwned + Default>(
    value: Value,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) -> T {
    match serde_path_to_error::deserialize(value) {
        Ok(parsed) => parsed,
        Err(err) => {
            let full_path = join_path(path, &err.path().to_string());
            record(
                warnings,
                full_path,
                format!("schema mismatch: {}; using defaults", err.into_inner()),
            );
            T::default()
        }
    }
}

/// Rebuild a dataset (or chips) sequence item by item, skipping items that
/// do not match the item schema.
fn rebuild_items<T: DeserializeOwned>(
    items: &[Value],
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let item_path = format!("{path}[{index}]");
        match serde_path_to_error::deserialize(item.clone()) {
            Ok(parsed) => out.push(parsed),
            Err(err) => {
                let full_path = join_path(&item_path, &err.path().to_string());
                record(
                    warnings,
                    full_path,
                    format!("schema mismatch: {}; item skipped", err.into_inner()),
                );
            }
        }
    }
    out
}

fn join_path(base: &str, inner: &str) -> String {
    if inner.is_empty() || inner == "." {
        base.to_string()
    } else {
        format!("{base}.{inner}")
    }
}

// ---------------------------------------------------------------------------
// WRAPPED_ITEMS
// ---------------------------------------------------------------------------

/// Wrapped items accept three historical dataset spellings: a bare string,
/// an array of strings, or an array of `{title, traitName, traitValue}`
/// objects (encoded into narrative tokens on the way in).
fn import_wrapped_items(
    data_val: Option<&Value>,
    options_val: Option<&Value>,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) -> Component {
    let obj = data_object(data_val, path, warnings);
    let mut data = WrappedItemsData::default();

    match obj.get("dataset") {
        None => {}
        Some(Value::String(raw)) => data.dataset = vec![NarrativeText::new(raw.clone())],
        Some(Value::Array(items)) => {
            let mut rebuilt = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match wrapped_item(item) {
                    Some(text) => rebuilt.push(text),
                    None => record(
                        warnings,
                        format!("{path}.data.dataset[{index}]"),
                        "expected a string or narrative parts object; item skipped",
                    ),
                }
            }
            data.dataset = rebuilt;
        }
        Some(_) => record(
            warnings,
            format!("{path}.data.dataset"),
            "expected a string or an array; using defaults",
        ),
    }

    Component::WrappedItems {
        data,
        options: options_or_default(options_val, path, warnings),
    }
}

fn wrapped_item(value: &Value) -> Option<NarrativeText> {
    match value {
        Value::String(raw) => Some(NarrativeText::new(raw.clone())),
        Value::Object(obj) => {
            if let Some(raw) = obj.get("dataset").and_then(Value::as_str) {
                return Some(NarrativeText::new(raw));
            }
            if obj.contains_key("title") || obj.contains_key("traitName") {
                let title = string_field(obj, "title");
                let trait_name = string_field(obj, "traitName");
                let trait_value = obj
                    .get("traitValue")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                return Some(NarrativeText::new(encode(
                    &title,
                    &trait_name,
                    trait_value.as_deref(),
                )));
            }
            None
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// PANEL_LAYOUT
// ---------------------------------------------------------------------------

fn import_panel_layout(
    data_val: Option<&Value>,
    options_val: Option<&Value>,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) -> Component {
    let obj = data_object(data_val, path, warnings);
    let mut data = PanelLayoutData::default();

    if let Some(items) = obj.get("dataset").and_then(Value::as_array) {
        let mut rebuilt = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let item_path = format!("{path}.data.dataset[{index}]");
            let Some(item_obj) = item.as_object() else {
                record(warnings, item_path, "not an object; item skipped");
                continue;
            };

            rebuilt.push(PanelLayoutItem {
                left: import_nested_panel_card(
                    ComponentType::Panel,
                    item_obj.get("left"),
                    &format!("{item_path}.left"),
                    warnings,
                ),
                right: import_nested_panel_card(
                    ComponentType::Card,
                    item_obj.get("right"),
                    &format!("{item_path}.right"),
                    warnings,
                ),
            });
        }
        data.dataset = rebuilt;
    }

    Component::PanelLayout {
        data,
        options: options_or_default(options_val, path, warnings),
    }
}

/// Build one nested panel-layout slot. The slot is restricted to PANEL or
/// CARD: a seed `type` naming either is honoured, anything else falls back
/// to the slot default. Seeds are accepted in both the full component shape
/// (`{type, data, options}`) and the flattened shape (`{dataset: ...}`,
/// where the dataset may be a single item or an array).
fn import_nested_panel_card(
    slot_default: ComponentType,
    value: Option<&Value>,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) -> Component {
    let Some(obj) = value.and_then(Value::as_object) else {
        return Component::new(slot_default);
    };

    let kind = obj
        .get("type")
        .and_then(Value::as_str)
        .and_then(|tag| tag.parse::<ComponentType>().ok())
        .filter(|kind| matches!(kind, ComponentType::Panel | ComponentType::Card))
        .unwrap_or(slot_default);

    let data_val = match obj.get("data") {
        Some(data) if data.is_object() => data.clone(),
        _ => {
            let mut flattened = JsonMap::new();
            if let Some(dataset) = obj.get("dataset") {
                let dataset = match dataset {
                    Value::Array(_) => dataset.clone(),
                    single => Value::Array(vec![single.clone()]),
                };
                flattened.insert("dataset".to_string(), dataset);
            }
            Value::Object(flattened)
        }
    };

    import_component(kind, Some(&data_val), obj.get("options"), path, warnings)
}

// ---------------------------------------------------------------------------
// CHART_TABLE_INDICATOR
// ---------------------------------------------------------------------------

/// The composite component's schema is recursive, so its nested
/// chart/table/indicator data blocks are populated field by field over
/// freshly built defaults instead of going through the generic path.
fn import_chart_table_indicator(
    data_val: Option<&Value>,
    options_val: Option<&Value>,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) -> Component {
    let obj = data_object(data_val, path, warnings);
    let mut data = ChartTableIndicatorData::default();

    if let Some(items) = obj.get("dataset").and_then(Value::as_array) {
        let mut rebuilt = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let item_path = format!("{path}.data.dataset[{index}]");
            let Some(item_obj) = item.as_object() else {
                record(warnings, item_path, "not an object; item skipped");
                continue;
            };

            let mut built = ChartTableIndicatorItem::default();

            if let Some(chart_data) = item_obj.get("chart").and_then(|slot| slot.get("data")) {
                if let Component::Chart { data: chart, .. } = &mut built.chart {
                    populate_chart_data(
                        chart,
                        chart_data,
                        &format!("{item_path}.chart.data"),
                        warnings,
                    );
                }
            }
            if let Some(table_data) = item_obj.get("table").and_then(|slot| slot.get("data")) {
                if let Component::Table { data: table, .. } = &mut built.table {
                    populate_table_data(
                        table,
                        table_data,
                        &format!("{item_path}.table.data"),
                        warnings,
                    );
                }
            }
            if let Some(indicator_data) =
                item_obj.get("indicator").and_then(|slot| slot.get("data"))
            {
                if let Component::Indicator {
                    data: indicator, ..
                } = &mut built.indicator
                {
                    populate_indicator_data(
                        indicator,
                        indicator_data,
                        &format!("{item_path}.indicator.data"),
                        warnings,
                    );
                }
            }

            rebuilt.push(built);
        }
        data.dataset = rebuilt;
    }

    Component::ChartTableIndicator {
        data,
        options: options_or_default(options_val, path, warnings),
    }
}

fn populate_chart_data(
    data: &mut ChartData,
    value: &Value,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) {
    let Some(obj) = value.as_object() else {
        record(warnings, path, "expected an object; using defaults");
        return;
    };

    patch_narrative(&mut data.header, obj, "header");
    patch_narrative(&mut data.definition, obj, "definition");
    patch_narrative(&mut data.labels, obj, "labels");

    if let Some(items) = obj.get("dataset").and_then(Value::as_array) {
        data.dataset = rebuild_items(items, &format!("{path}.dataset"), warnings);
    }
}

fn populate_table_data(
    data: &mut TableData,
    value: &Value,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) {
    let Some(obj) = value.as_object() else {
        record(warnings, path, "expected an object; using defaults");
        return;
    };

    patch_narrative(&mut data.headers, obj, "headers");
    patch_narrative(&mut data.header, obj, "header");
    patch_narrative(&mut data.definition, obj, "definition");

    if let Some(items) = obj.get("dataset").and_then(Value::as_array) {
        data.dataset = rebuild_items(items, &format!("{path}.dataset"), warnings);
    }
    if let Some(items) = obj.get("chips").and_then(Value::as_array) {
        data.chips = rebuild_items(items, &format!("{path}.chips"), warnings);
    }
}

fn populate_indicator_data(
    data: &mut IndicatorData,
    value: &Value,
    path: &str,
    warnings: &mut Vec<ImportWarning>,
) {
    let Some(obj) = value.as_object() else {
        record(warnings, path, "expected an object; using defaults");
        return;
    };

    patch_narrative(&mut data.header, obj, "header");
    patch_narrative(&mut data.definition, obj, "definition");
    patch_narrative(&mut data.left_label, obj, "leftLabel");
    patch_narrative(&mut data.right_label, obj, "rightLabel");

    if let Some(items) = obj.get("dataset").and_then(Value::as_array) {
        data.dataset = rebuild_items(items, &format!("{path}.dataset"), warnings);
    }
}

/// Overwrite a narrative field when the input carries a non-empty string;
/// an empty or absent input keeps the built default.
fn patch_narrative(target: &mut NarrativeText, obj: &JsonMap, key: &str) {
    if let Some(raw) = obj.get(key).and_then(Value::as_str) {
        if !raw.is_empty() {
            *target = NarrativeText::new(raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export_document;
    use serde_json::json;

    #[test]
    fn root_must_be_an_object() {
        let mut doc = Document::new();
        let err = import_document(&mut doc, &json!([1, 2, 3])).expect_err("fatal");
        assert!(matches!(err, ImportError::RootNotAnObject));
    }

    #[test]
    fn import_replaces_existing_content() {
        let mut doc = Document::new();
        doc.add_section();
        doc.add_competency();

        let warnings = import_document(&mut doc, &json!({})).expect("import");
        assert!(warnings.is_empty());
        assert!(doc.sections.is_empty());
        assert!(doc.competencies.is_empty());
    }

    #[test]
    fn competencies_default_missing_fields() {
        let mut doc = Document::new();
        let warnings = import_document(
            &mut doc,
            &json!({
                "competencies": [
                    {"name": "endurance", "equation": "a + b"},
                    {"name": "grip"},
                    42,
                ],
            }),
        )
        .expect("import");

        assert_eq!(doc.competencies.len(), 2);
        assert_eq!(doc.competencies[0].name, "endurance");
        assert_eq!(doc.competencies[0].equation, "a + b");
        assert_eq!(doc.competencies[1].equation, "");

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, "competencies[2]");
    }

    #[test]
    fn sections_default_order_from_position() {
        let mut doc = Document::new();
        import_document(
            &mut doc,
            &json!({
                "sections": [
                    {"header": "first"},
                    {"header": "second", "order": 9},
                ],
            }),
        )
        .expect("import");

        assert_eq!(doc.sections[0].order, 1);
        assert_eq!(doc.sections[1].order, 9);
        // Missing ids are freshly generated, not blanked.
        assert_eq!(doc.sections[0].id.len(), 32);
    }

    #[test]
    fn narrative_section_header_and_card_dataset_import_verbatim() {
        let mut doc = Document::new();
        import_document(
            &mut doc,
            &json!({
                "sections": [{
                    "header": "$narrative(Intro,score)",
                    "components": [{
                        "type": "CARD",
                        "data": {"dataset": [{"header": "Hi", "body": "World"}]},
                    }],
                }],
            }),
        )
        .expect("import");

        assert_eq!(doc.sections[0].header.as_str(), "$narrative(Intro,score)");
        let Component::Card { data, .. } = &doc.sections[0].components[0] else {
            panic!("expected CARD");
        };
        assert_eq!(data.dataset.len(), 1);
        assert_eq!(data.dataset[0].header.as_str(), "Hi");
        assert_eq!(data.dataset[0].body.as_str(), "World");
    }

    #[test]
    fn component_without_type_is_skipped_in_isolation() {
        let mut doc = Document::new();
        let warnings = import_document(
            &mut doc,
            &json!({
                "sections": [{
                    "components": [
                        {"type": "CHART"},
                        {"data": {"dataset": []}},
                        {"type": "TABLE"},
                    ],
                }],
            }),
        )
        .expect("import");

        let kinds: Vec<ComponentType> = doc.sections[0]
            .components
            .iter()
            .map(Component::component_type)
            .collect();
        assert_eq!(kinds, vec![ComponentType::Chart, ComponentType::Table]);

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, "sections[0].components[1]");
        assert!(warnings[0].reason.contains("missing component type"));
    }

    #[test]
    fn unknown_component_type_is_skipped_with_warning() {
        let mut doc = Document::new();
        let warnings = import_document(
            &mut doc,
            &json!({
                "sections": [{"components": [{"type": "GAUGE"}]}],
            }),
        )
        .expect("import");

        assert!(doc.sections[0].components.is_empty());
        assert!(warnings[0].reason.contains("unknown component type: GAUGE"));
    }

    #[test]
    fn bad_dataset_item_is_skipped_not_fatal() {
        let mut doc = Document::new();
        let warnings = import_document(
            &mut doc,
            &json!({
                "sections": [{
                    "components": [{
                        "type": "IMAGE",
                        "data": {"dataset": [
                            {"url": "a.png"},
                            "not an item",
                            {"url": "b.png"},
                        ]},
                    }],
                }],
            }),
        )
        .expect("import");

        let Component::Image { data, .. } = &doc.sections[0].components[0] else {
            panic!("expected IMAGE");
        };
        let urls: Vec<&str> = data.dataset.iter().map(|item| item.url.as_str()).collect();
        assert_eq!(urls, vec!["a.png", "b.png"]);
        assert_eq!(
            warnings[0].path,
            "sections[0].components[0].data.dataset[1]"
        );
    }

    #[test]
    fn options_merge_over_defaults_and_drop_unknown_keys() {
        let mut doc = Document::new();
        import_document(
            &mut doc,
            &json!({
                "sections": [{
                    "components": [{
                        "type": "CHART",
                        "options": {"chartType": "PIE", "mystery": 1},
                    }],
                }],
            }),
        )
        .expect("import");

        let Component::Chart { options, .. } = &doc.sections[0].components[0] else {
            panic!("expected CHART");
        };
        assert_eq!(
            options.chart_type,
            repdoc_model::options::ChartKind::Pie
        );
        assert_eq!(options.position, repdoc_model::options::Position::Center);
    }

    #[test]
    fn panel_layout_nested_seed_reaches_the_nested_dataset() {
        let mut doc = Document::new();
        import_document(
            &mut doc,
            &json!({
                "sections": [{
                    "components": [{
                        "type": "PANEL_LAYOUT",
                        "data": {"dataset": [{
                            "left": {"dataset": [{"header": "Summary", "body": "All good"}]},
                        }]},
                    }],
                }],
            }),
        )
        .expect("import");

        let Component::PanelLayout { data, .. } = &doc.sections[0].components[0] else {
            panic!("expected PANEL_LAYOUT");
        };
        let item = &data.dataset[0];
        assert_eq!(item.left.component_type(), ComponentType::Panel);
        let Component::Panel { data: left, .. } = &item.left else {
            panic!("expected nested PANEL");
        };
        assert_eq!(left.dataset[0].header.as_str(), "Summary");
        assert_eq!(left.dataset[0].body.as_str(), "All good");

        // The untouched right slot keeps its default CARD.
        assert_eq!(item.right.component_type(), ComponentType::Card);
    }

    #[test]
    fn chart_table_indicator_populates_nested_blocks() {
        let mut doc = Document::new();
        import_document(
            &mut doc,
            &json!({
                "sections": [{
                    "components": [{
                        "type": "CHART_TABLE_INDICATOR",
                        "data": {"dataset": [{
                            "chart": {"data": {
                                "header": "$narrative(Spread,reach)",
                                "dataset": [{"data": [1.0, 2.0], "backgroundColor": ["#112233"]}],
                            }},
                            "indicator": {"data": {
                                "leftLabel": "low",
                                "dataset": [{"name": "band", "valueTo": 10}],
                            }},
                        }]},
                    }],
                }],
            }),
        )
        .expect("import");

        let Component::ChartTableIndicator { data, .. } = &doc.sections[0].components[0] else {
            panic!("expected CHART_TABLE_INDICATOR");
        };
        let item = &data.dataset[0];

        let Component::Chart { data: chart, .. } = &item.chart else {
            panic!("expected nested CHART");
        };
        assert_eq!(chart.header.as_str(), "$narrative(Spread,reach)");
        assert_eq!(chart.dataset[0].data, vec![1.0, 2.0]);

        let Component::Indicator { data: indicator, .. } = &item.indicator else {
            panic!("expected nested INDICATOR");
        };
        assert_eq!(indicator.left_label.as_str(), "low");
        assert_eq!(indicator.dataset[0].name.as_str(), "band");
        assert_eq!(indicator.dataset[0].value_to, 10.0);

        // The untouched table slot stays a default TABLE.
        assert_eq!(item.table.component_type(), ComponentType::Table);
        assert_eq!(item.table.dataset_len(), 1);
    }

    #[test]
    fn wrapped_items_accept_string_and_array_spellings() {
        let mut doc = Document::new();
        import_document(
            &mut doc,
            &json!({
                "sections": [{
                    "components": [
                        {"type": "WRAPPED_ITEMS", "data": {"dataset": "$narrative(a,b)"}},
                        {"type": "WRAPPED_ITEMS", "data": {"dataset": [
                            "plain",
                            {"title": "T", "traitName": "n", "traitValue": "5"},
                        ]}},
                    ],
                }],
            }),
        )
        .expect("import");

        let Component::WrappedItems { data: first, .. } = &doc.sections[0].components[0] else {
            panic!("expected WRAPPED_ITEMS");
        };
        assert_eq!(first.dataset[0].as_str(), "$narrative(a,b)");

        let Component::WrappedItems { data: second, .. } = &doc.sections[0].components[1] else {
            panic!("expected WRAPPED_ITEMS");
        };
        assert_eq!(second.dataset[0].as_str(), "plain");
        assert_eq!(second.dataset[1].as_str(), "$narrative(T,n,5)");
    }

    #[test]
    fn table_rows_and_chips_rebuild_from_input() {
        let mut doc = Document::new();
        import_document(
            &mut doc,
            &json!({
                "sections": [{
                    "components": [{
                        "type": "TABLE",
                        "data": {
                            "headers": "$narrative(Results,table)",
                            "dataset": [
                                {"Label": "Push", "Score": 7, "color": "#ff0000"},
                                {"Region": "North", "Q1": 41.5},
                            ],
                            "chips": [{"text": "done", "color": "#00ff00"}],
                        },
                    }],
                }],
            }),
        )
        .expect("import");

        let Component::Table { data, .. } = &doc.sections[0].components[0] else {
            panic!("expected TABLE");
        };
        assert_eq!(data.headers.as_str(), "$narrative(Results,table)");
        assert_eq!(data.dataset.len(), 2);
        assert_eq!(data.dataset[1].0.get("Region"), Some(&json!("North")));
        assert_eq!(data.chips.len(), 1);
        assert_eq!(data.chips[0].text.as_str(), "done");
        assert_eq!(data.chips[0].background_color, "#ffffff");
    }

    #[test]
    fn import_export_is_idempotent_for_builder_documents() {
        let mut doc = Document::new();
        doc.sections[0].header = "$narrative(Intro,score)".into();
        for kind in ComponentType::ALL {
            doc.add_component(0, kind).expect("add");
        }

        let first = export_document(&doc).expect("export");

        let mut reimported = Document::new();
        let warnings = import_document(&mut reimported, &first).expect("import");
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

        let second = export_document(&reimported).expect("re-export");
        assert_eq!(first, second);
    }

    #[test]
    fn parse_json_reports_syntax_errors() {
        let err = parse_json("{not json").expect_err("syntax error");
        assert!(err.to_string().starts_with("invalid JSON:"));

        let value = parse_json("{\"sections\": []}").expect("valid");
        assert!(value.is_object());
    }
}
