//! Character creator feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Immutable snapshot (character, selection, derived values)
//! - `intent.rs` - User edits (name, class, description, stat, template)
//! - `reducer.rs` - State transitions with the floor clamp and budget check
//!
//! The reducer is driven by [`crate::store::CreatorStore`], which owns the
//! current snapshot and publishes changes.

mod intent;
mod reducer;
mod state;

pub use intent::CreatorIntent;
pub use reducer::CreatorReducer;
pub use state::CreatorState;
