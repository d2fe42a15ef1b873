use std::sync::Arc;

use serde::Serialize;

use crate::catalog::TemplateId;
use crate::character::Character;
use crate::mvi::State;
use crate::points::{DerivedAttributes, PointRules};

/// One immutable snapshot of everything the UI displays.
///
/// Derived attributes are computed once, when the snapshot is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatorState {
    character: Character,
    /// `None` in custom mode.
    selected_template: Option<TemplateId>,
    attributes: DerivedAttributes,
    #[serde(skip)]
    rules: Arc<PointRules>,
}

impl Default for CreatorState {
    fn default() -> Self {
        Self::new(Character::default(), None, Arc::new(PointRules::default()))
    }
}

impl State for CreatorState {}

impl CreatorState {
    pub fn new(
        character: Character,
        selected_template: Option<TemplateId>,
        rules: Arc<PointRules>,
    ) -> Self {
        let attributes = rules.derive(&character);
        Self {
            character,
            selected_template,
            attributes,
            rules,
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn selected_template(&self) -> Option<&TemplateId> {
        self.selected_template.as_ref()
    }

    pub fn is_custom(&self) -> bool {
        self.selected_template.is_none()
    }

    pub fn attributes(&self) -> DerivedAttributes {
        self.attributes
    }

    pub fn remaining_points(&self) -> i32 {
        self.attributes.remaining_points
    }

    pub fn rules(&self) -> &PointRules {
        &self.rules
    }

    /// Whether a `+1` on `key` would be accepted.
    pub fn can_increase(&self, key: &str) -> bool {
        self.character.has_stat(key) && self.remaining_points() >= self.rules.weight(key)
    }

    /// Whether a `-1` on `key` would change anything.
    pub fn can_decrease(&self, key: &str) -> bool {
        self.character
            .points_above_base(key)
            .is_some_and(|above| above > 0)
    }
}
