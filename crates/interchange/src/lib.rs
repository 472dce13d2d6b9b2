//! JSON interchange boundary.
//!
//! This crate translates between the plain-JSON document interchange format
//! (the format a user pastes in or exports) and the typed tree in
//! `repdoc-model`. The document model owns meaning; this crate handles
//! format tolerance and diagnostics only.
//!
//! Import is deliberately best-effort: a malformed competency, section,
//! component or dataset item is skipped with a recorded warning, and the
//! rest of the document is still imported. Only a root value that is not a
//! JSON object aborts the call. Export is the structural inverse and is
//! pure.

mod export;
mod import;

pub use export::export_document;
pub use import::{import_document, parse_json, ImportWarning};

use thiserror::Error;

/// JSON syntax errors, surfaced before any mutation of the target document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Fatal import errors. Everything below the root is handled per-item.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("document root must be a JSON object")]
    RootNotAnObject,
}

/// Export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize document: {0}")]
    Serialization(#[source] serde_json::Error),
}
