//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for unidirectional data flow between
//! a rendering layer and the state it displays.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of everything an observer can see
//! - **Intent**: User edits or selections
//! - **Reducer**: Transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
