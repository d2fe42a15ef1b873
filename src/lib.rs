//! State-management core for an interactive character creator.
//!
//! A UI layer reads immutable [`CreatorState`] snapshots from a
//! [`CreatorStore`] and calls its mutation operations; the store applies
//! the point-budget rules and notifies subscribers synchronously.

pub mod catalog;
pub mod character;
pub mod cli;
pub mod config;
pub mod creator;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod points;
pub mod stats;
pub mod store;

pub use catalog::{Template, TemplateCatalog, TemplateId, CUSTOM};
pub use character::Character;
pub use creator::{CreatorIntent, CreatorReducer, CreatorState};
pub use error::Rejection;
pub use points::{DerivedAttributes, PointRules};
pub use store::{CreatorStore, Subscription};
