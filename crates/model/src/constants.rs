//! Shared default values for the document model.

/// Default foreground colour for colour-bearing fields.
pub const DEFAULT_COLOR: &str = "#000000";

/// Default background colour for colour-bearing fields.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Default grade tag for grade-indicator dataset items.
pub const DEFAULT_GRADE: &str = "HIGH";
