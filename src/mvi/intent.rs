//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user edits (typing a name, pressing `+` on a stat)
/// and selections (picking a template). They are processed by reducers
/// to produce new states.
pub trait Intent: Send + 'static {}
