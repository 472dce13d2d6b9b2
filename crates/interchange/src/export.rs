//! Document export.

use repdoc_model::Document;
use serde_json::Value;

use crate::ExportError;

/// Serialize the live tree to a plain JSON value.
///
/// One generic serializer covers the whole tree: groups become objects,
/// sequences become arrays, leaves their raw values. Narrative-capable
/// fields are exported as their raw string (token or literal), never
/// pre-decoded.
pub fn export_document(doc: &Document) -> Result<Value, ExportError> {
    serde_json::to_value(doc).map_err(ExportError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use repdoc_model::ComponentType;

    #[test]
    fn exports_fresh_document_shape() {
        let doc = Document::new();
        let value = export_document(&doc).expect("export");

        assert!(value["competencies"].is_array());
        assert_eq!(value["competencies"].as_array().expect("array").len(), 1);
        assert_eq!(value["sections"][0]["order"], 1);
        assert_eq!(value["sections"][0]["components"], serde_json::json!([]));
    }

    #[test]
    fn narrative_fields_are_exported_raw() {
        let mut doc = Document::new();
        doc.sections[0].header = "$narrative(Intro,score)".into();
        let value = export_document(&doc).expect("export");
        assert_eq!(value["sections"][0]["header"], "$narrative(Intro,score)");
    }

    #[test]
    fn components_export_with_type_tags() {
        let mut doc = Document::new();
        doc.add_component(0, ComponentType::GradeIndicator)
            .expect("add");
        let value = export_document(&doc).expect("export");
        let component = &value["sections"][0]["components"][0];
        assert_eq!(component["type"], "GRADE_INDICATOR");
        assert_eq!(component["data"]["dataset"][0]["type"], "HIGH");
    }
}
