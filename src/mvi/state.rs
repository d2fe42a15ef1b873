//! Base trait for observable state in MVI architecture.

/// Marker trait for state snapshots.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes before publishing)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
