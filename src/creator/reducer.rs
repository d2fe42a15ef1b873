//! Reducer for the character creator.

use std::sync::Arc;

use crate::catalog::{TemplateCatalog, TemplateId};
use crate::character::Character;
use crate::error::Rejection;
use crate::mvi::Reducer;
use crate::points::PointRules;

use super::intent::CreatorIntent;
use super::state::CreatorState;

/// Applies creator intents under a fixed set of point rules and templates.
///
/// Floor violations clamp and still commit. Budget violations and unknown
/// stats are rejected, leaving the input state untouched.
#[derive(Debug, Clone)]
pub struct CreatorReducer {
    rules: Arc<PointRules>,
    catalog: Arc<TemplateCatalog>,
}

impl Default for CreatorReducer {
    fn default() -> Self {
        Self::new(PointRules::default(), TemplateCatalog::builtin())
    }
}

impl CreatorReducer {
    pub fn new(rules: PointRules, catalog: Arc<TemplateCatalog>) -> Self {
        Self {
            rules: Arc::new(rules),
            catalog,
        }
    }

    pub fn rules(&self) -> &PointRules {
        &self.rules
    }

    pub fn catalog(&self) -> &Arc<TemplateCatalog> {
        &self.catalog
    }

    /// Custom-mode snapshot of `character` under these rules.
    pub fn initial_state(&self, character: Character) -> CreatorState {
        self.snapshot(character, None)
    }

    fn snapshot(&self, character: Character, selected: Option<TemplateId>) -> CreatorState {
        CreatorState::new(character, selected, Arc::clone(&self.rules))
    }

    /// Compute the next snapshot, or the reason the intent was refused.
    pub fn apply(
        &self,
        state: &CreatorState,
        intent: CreatorIntent,
    ) -> Result<CreatorState, Rejection> {
        let selected = state.selected_template().cloned();
        let character = state.character();

        match intent {
            CreatorIntent::NameChanged(name) => {
                Ok(self.snapshot(character.with_name(name), selected))
            }
            CreatorIntent::ClassChanged(char_class) => {
                Ok(self.snapshot(character.with_class(char_class), selected))
            }
            CreatorIntent::DescriptionChanged(description) => {
                Ok(self.snapshot(character.with_description(description), selected))
            }
            CreatorIntent::StatChanged { key, delta } => {
                if !character.has_stat(&key) {
                    return Err(Rejection::InvalidStatKey { key });
                }

                let proposed = character.with_stat_delta(&key, delta);
                let remaining = self.rules.remaining_points(&proposed);
                if delta > 0 && remaining < 0 {
                    return Err(Rejection::BudgetExceeded {
                        key,
                        delta,
                        remaining,
                    });
                }

                Ok(self.snapshot(proposed, selected))
            }
            CreatorIntent::TemplateSelected(id) => match self.catalog.find(&id) {
                Some(template) => {
                    let remaining = self.rules.remaining_points(template.character());
                    if remaining < 0 {
                        return Err(Rejection::TemplateOverBudget { id, remaining });
                    }
                    Ok(self.snapshot(template.character().clone(), Some(id)))
                }
                // Custom: keep the in-progress edits, drop the selection.
                None => Ok(self.snapshot(character.clone(), None)),
            },
        }
    }
}

impl Reducer for CreatorReducer {
    type State = CreatorState;
    type Intent = CreatorIntent;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State {
        match self.apply(&state, intent) {
            Ok(next) => next,
            Err(rejection) => {
                tracing::debug!(%rejection, "Intent rejected");
                state
            }
        }
    }
}
