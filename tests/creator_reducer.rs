mod common;

use std::sync::Arc;

use character_creator::mvi::Reducer;
use character_creator::stats::{stat_map, FOCUS, POWER, SPEED};
use character_creator::{
    Character, CreatorIntent, CreatorReducer, CreatorState, PointRules, Rejection, Template,
    TemplateCatalog, TemplateId,
};

fn stat(key: &str, delta: i32) -> CreatorIntent {
    CreatorIntent::StatChanged {
        key: key.to_string(),
        delta,
    }
}

fn select(id: &str) -> CreatorIntent {
    CreatorIntent::TemplateSelected(TemplateId::new(id))
}

fn small_catalog() -> Arc<TemplateCatalog> {
    Arc::new(TemplateCatalog::new(vec![
        Template::new("Kit", "Scout", "Light on their feet.", stat_map(1, 1, 3, 0)),
        Template::new("Oona", "Oracle", "Sees too much.", stat_map(0, 1, 0, 4)),
    ]))
}

#[test]
fn initial_state_is_custom() {
    let reducer = CreatorReducer::default();
    let state = reducer.initial_state(Character::default());
    assert!(state.is_custom());
    assert_eq!(state.remaining_points(), 10);
}

#[test]
fn select_adopts_template_from_injected_catalog() {
    let reducer = CreatorReducer::new(PointRules::new(12), small_catalog());
    let state = reducer.reduce(CreatorState::default(), select("Oracle"));
    assert_eq!(state.character().name(), "Oona");
    assert_eq!(state.character().stat(FOCUS), Some(4));
    assert_eq!(state.remaining_points(), 7);
    assert_eq!(state.selected_template(), Some(&TemplateId::new("Oracle")));
}

#[test]
fn builtin_class_is_unknown_to_injected_catalog() {
    let reducer = CreatorReducer::new(PointRules::new(12), small_catalog());
    let state = reducer.reduce(CreatorState::default(), select("Scout"));
    let state = reducer.reduce(state, select("Mage"));
    assert!(state.is_custom());
    assert_eq!(state.character().name(), "Kit");
}

#[test]
fn switching_templates_replaces_stat_floor() {
    let reducer = CreatorReducer::new(PointRules::new(12), small_catalog());
    let state = reducer.reduce(CreatorState::default(), select("Scout"));
    let state = reducer.reduce(state, stat(SPEED, 2));
    let state = reducer.reduce(state, select("Oracle"));
    let state = reducer.reduce(state, stat(SPEED, -5));
    assert_eq!(state.character().stat(SPEED), Some(0));
    assert_eq!(state.character().base_stat(FOCUS), Some(4));
}

#[test]
fn weighted_cost_tightens_budget() {
    let mut weights = std::collections::BTreeMap::new();
    weights.insert(POWER.to_string(), 3);
    let reducer = CreatorReducer::new(PointRules::new(10).with_weights(weights), small_catalog());

    let state = reducer.reduce(CreatorState::default(), stat(POWER, 3));
    assert_eq!(state.remaining_points(), 1);
    assert!(!state.can_increase(POWER));
    assert!(state.can_increase(SPEED));

    assert!(matches!(
        reducer.apply(&state, stat(POWER, 1)),
        Err(Rejection::BudgetExceeded { remaining: -2, .. })
    ));
}

#[test]
fn negative_delta_is_never_a_budget_rejection() {
    let reducer = CreatorReducer::default();
    let state = reducer.reduce(CreatorState::default(), stat(POWER, 10));
    let lowered = reducer.apply(&state, stat(POWER, -4));
    assert_eq!(lowered.map(|s| s.remaining_points()), Ok(4));
}

#[test]
fn rejection_messages_name_the_cause() {
    let unknown = Rejection::InvalidStatKey {
        key: "Luck".into(),
    };
    assert_eq!(unknown.to_string(), "Unknown stat 'Luck'");

    let over = Rejection::BudgetExceeded {
        key: "Power".into(),
        delta: 3,
        remaining: -1,
    };
    assert!(over.to_string().contains("'Power' by 3"));
}
