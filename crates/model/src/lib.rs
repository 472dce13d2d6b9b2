//! # Report document model
//!
//! Typed in-memory model for drag-and-drop report documents: a tree of
//! sections, each holding an ordered list of typed components, plus a flat
//! list of competencies.
//!
//! This crate contains pure data operations only:
//! - The closed component vocabulary and per-type data/options schemas
//! - Default subtree builders (every new component is fully populated)
//! - Container operations: add/remove/reorder sections, components,
//!   competencies and dataset items
//!
//! **No boundary concerns**: JSON interchange lives in `repdoc-interchange`,
//! and rendering, dialogs and input capture belong to whatever presentation
//! surface consumes the tree.

pub mod component;
pub mod constants;
pub mod data;
pub mod document;
pub mod options;
pub mod section;

pub use component::{Component, ComponentType, ParseComponentTypeError};
pub use document::Document;
pub use section::{Competency, Section, SectionChip, SectionIndicators};

/// Errors returned by container operations on the document tree.
///
/// These indicate caller bugs (the presentation surface is responsible for
/// passing validated indices), so every operation reports them explicitly
/// instead of panicking or silently clamping.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("section index {index} out of range (document has {len} sections)")]
    SectionIndexOutOfRange { index: usize, len: usize },

    #[error("component index {index} out of range in section {section} (section has {len} components)")]
    ComponentIndexOutOfRange {
        section: usize,
        index: usize,
        len: usize,
    },

    #[error("competency index {index} out of range (document has {len} competencies)")]
    CompetencyIndexOutOfRange { index: usize, len: usize },

    #[error("dataset index {index} out of range (dataset has {len} items)")]
    DatasetIndexOutOfRange { index: usize, len: usize },

    #[error("component type {0} does not carry a chips array")]
    ChipsUnsupported(ComponentType),
}

pub type DocumentResult<T> = std::result::Result<T, DocumentError>;
