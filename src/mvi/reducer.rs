//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::State;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen:
/// (State, Intent) -> State. A reducer may carry read-only context
/// (rules, lookup tables) but never mutates it.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// An intent that cannot be applied returns the input state unchanged.
    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State;
}
