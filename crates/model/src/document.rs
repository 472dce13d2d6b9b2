//! The document aggregate and its container operations.
//!
//! All operations are synchronous, in-place tree edits invoked one at a time
//! by the presentation surface. Ownership is strictly tree-shaped: no section
//! or component is referenced from more than one parent.

use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentType};
use crate::section::{Competency, Section};
use crate::{DocumentError, DocumentResult};

/// The root aggregate: an ordered list of sections plus a flat list of
/// competencies unrelated to layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub competencies: Vec<Competency>,
    pub sections: Vec<Section>,
}

impl Document {
    /// A fresh document: one default section and one default competency.
    pub fn new() -> Self {
        Self {
            competencies: vec![Competency::default()],
            sections: vec![Section::new(1)],
        }
    }

    /// Remove every section and competency. Bulk import starts from this.
    pub fn clear(&mut self) {
        self.competencies.clear();
        self.sections.clear();
    }

    /// Append a new default section with `order = section count + 1`.
    pub fn add_section(&mut self) -> &mut Section {
        let order = self.sections.len() as u32 + 1;
        self.sections.push(Section::new(order));
        self.sections.last_mut().expect("just pushed")
    }

    /// Append a new default competency.
    pub fn add_competency(&mut self) -> &mut Competency {
        self.competencies.push(Competency::default());
        self.competencies.last_mut().expect("just pushed")
    }

    /// Remove the competency at `index`.
    pub fn remove_competency(&mut self, index: usize) -> DocumentResult<Competency> {
        let len = self.competencies.len();
        if index >= len {
            return Err(DocumentError::CompetencyIndexOutOfRange { index, len });
        }
        Ok(self.competencies.remove(index))
    }

    /// Borrow the section at `index`.
    pub fn section(&self, index: usize) -> DocumentResult<&Section> {
        let len = self.sections.len();
        self.sections
            .get(index)
            .ok_or(DocumentError::SectionIndexOutOfRange { index, len })
    }

    /// Mutably borrow the section at `index`.
    pub fn section_mut(&mut self, index: usize) -> DocumentResult<&mut Section> {
        let len = self.sections.len();
        self.sections
            .get_mut(index)
            .ok_or(DocumentError::SectionIndexOutOfRange { index, len })
    }

    /// Append a freshly built default component of `kind` to a section.
    pub fn add_component(
        &mut self,
        section_index: usize,
        kind: ComponentType,
    ) -> DocumentResult<&mut Component> {
        let section = self.section_mut(section_index)?;
        section.components.push(Component::new(kind));
        Ok(section.components.last_mut().expect("just pushed"))
    }

    /// Remove and return the component at `component_index`.
    pub fn remove_component(
        &mut self,
        section_index: usize,
        component_index: usize,
    ) -> DocumentResult<Component> {
        let section = self.section_mut(section_index)?;
        let len = section.components.len();
        if component_index >= len {
            return Err(DocumentError::ComponentIndexOutOfRange {
                section: section_index,
                index: component_index,
                len,
            });
        }
        Ok(section.components.remove(component_index))
    }

    /// Move the component at `from` to position `to` within one section.
    ///
    /// A section with fewer than two components is left untouched. Section
    /// `order` hints are deliberately not renumbered.
    pub fn reorder_components(
        &mut self,
        section_index: usize,
        from: usize,
        to: usize,
    ) -> DocumentResult<()> {
        let section = self.section_mut(section_index)?;
        let len = section.components.len();
        if len < 2 {
            return Ok(());
        }
        if from >= len {
            return Err(DocumentError::ComponentIndexOutOfRange {
                section: section_index,
                index: from,
                len,
            });
        }
        if to >= len {
            return Err(DocumentError::ComponentIndexOutOfRange {
                section: section_index,
                index: to,
                len,
            });
        }

        let component = section.components.remove(from);
        section.components.insert(to, component);
        Ok(())
    }

    /// Mutably borrow one component for data/options edits.
    pub fn component_mut(
        &mut self,
        section_index: usize,
        component_index: usize,
    ) -> DocumentResult<&mut Component> {
        let section = self.section_mut(section_index)?;
        let len = section.components.len();
        section
            .components
            .get_mut(component_index)
            .ok_or(DocumentError::ComponentIndexOutOfRange {
                section: section_index,
                index: component_index,
                len,
            })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_document_has_one_section_and_one_competency() {
        let doc = Document::new();
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].order, 1);
        assert_eq!(doc.competencies.len(), 1);
        assert_eq!(doc.competencies[0], Competency::default());
    }

    #[test]
    fn added_sections_receive_sequential_orders() {
        let mut doc = Document::new();
        doc.add_section();
        doc.add_section();

        assert_eq!(doc.sections.len(), 3);
        let orders: Vec<u32> = doc.sections.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn add_component_validates_section_index() {
        let mut doc = Document::new();
        doc.add_component(0, ComponentType::Card)
            .expect("in range");
        assert_eq!(doc.sections[0].components.len(), 1);

        let err = doc
            .add_component(4, ComponentType::Card)
            .expect_err("out of range");
        assert!(matches!(
            err,
            DocumentError::SectionIndexOutOfRange { index: 4, len: 1 }
        ));
    }

    #[test]
    fn remove_component_returns_the_removed_subtree() {
        let mut doc = Document::new();
        doc.add_component(0, ComponentType::Chart).expect("add");
        doc.add_component(0, ComponentType::Table).expect("add");

        let removed = doc.remove_component(0, 0).expect("remove");
        assert_eq!(removed.component_type(), ComponentType::Chart);
        assert_eq!(doc.sections[0].components.len(), 1);

        let err = doc.remove_component(0, 7).expect_err("out of range");
        assert!(matches!(
            err,
            DocumentError::ComponentIndexOutOfRange { index: 7, .. }
        ));
    }

    #[test]
    fn reorder_moves_component_between_positions() {
        let mut doc = Document::new();
        doc.add_component(0, ComponentType::Chart).expect("add");
        doc.add_component(0, ComponentType::Table).expect("add");
        doc.add_component(0, ComponentType::Image).expect("add");

        doc.reorder_components(0, 0, 2).expect("reorder");
        let kinds: Vec<ComponentType> = doc.sections[0]
            .components
            .iter()
            .map(Component::component_type)
            .collect();
        assert_eq!(
            kinds,
            vec![
                ComponentType::Table,
                ComponentType::Image,
                ComponentType::Chart
            ]
        );
    }

    #[test]
    fn reorder_is_a_no_op_below_two_components() {
        let mut doc = Document::new();
        doc.add_component(0, ComponentType::Chart).expect("add");

        // Indices are not even inspected when there is nothing to move.
        doc.reorder_components(0, 5, 9).expect("no-op");
        assert_eq!(doc.sections[0].components.len(), 1);
    }

    #[test]
    fn reorder_validates_indices_when_it_would_move() {
        let mut doc = Document::new();
        doc.add_component(0, ComponentType::Chart).expect("add");
        doc.add_component(0, ComponentType::Table).expect("add");

        let err = doc.reorder_components(0, 0, 2).expect_err("to out of range");
        assert!(matches!(
            err,
            DocumentError::ComponentIndexOutOfRange { index: 2, len: 2, .. }
        ));
    }

    #[test]
    fn competencies_append_and_remove() {
        let mut doc = Document::new();
        doc.add_competency().name = "endurance".to_string();
        assert_eq!(doc.competencies.len(), 2);

        let removed = doc.remove_competency(1).expect("remove");
        assert_eq!(removed.name, "endurance");

        let err = doc.remove_competency(3).expect_err("out of range");
        assert!(matches!(
            err,
            DocumentError::CompetencyIndexOutOfRange { index: 3, len: 1 }
        ));
    }

    #[test]
    fn clear_empties_both_lists() {
        let mut doc = Document::new();
        doc.clear();
        assert!(doc.sections.is_empty());
        assert!(doc.competencies.is_empty());
    }
}
