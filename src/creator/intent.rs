//! Intents for the character creator.

use crate::catalog::TemplateId;
use crate::mvi::Intent;

/// Edits a user can make to the character being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatorIntent {
    NameChanged(String),
    ClassChanged(String),
    DescriptionChanged(String),

    /// Add `delta` to a stat. Negative deltas clamp at the stat's floor;
    /// positive deltas that overrun the budget are rejected.
    StatChanged { key: String, delta: i32 },

    /// Adopt a template. An id with no template (e.g. "Custom") clears the
    /// selection and keeps the current edits.
    TemplateSelected(TemplateId),
}

impl Intent for CreatorIntent {}
