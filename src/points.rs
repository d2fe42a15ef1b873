//! Point budget and derived attributes.
//!
//! Formulas:
//! - `cost    = Σ weight(k) * current[k]` (points above zero, weight defaults to 1)
//! - `attack  = 2 * Power + Speed / 2`
//! - `defense = 2 * Endurance + Speed / 2`
//! - `remaining_points = total_budget - cost`
//!
//! Missing stats count as zero, so every formula is total over any stat map.
//! Weights are positive, which makes cost strictly increasing in every stat.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::character::Character;
use crate::stats::{StatMap, ENDURANCE, POWER, SPEED};

/// Point pool shared by every character.
pub const DEFAULT_TOTAL_BUDGET: i32 = 10;

/// Cost weight applied to stats without an explicit entry.
pub const DEFAULT_WEIGHT: i32 = 1;

/// Budget and cost weights applied to every character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointRules {
    total_budget: i32,
    weights: BTreeMap<String, i32>,
}

impl Default for PointRules {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_BUDGET)
    }
}

impl PointRules {
    /// Uniform weight 1 for every stat.
    pub fn new(total_budget: i32) -> Self {
        Self {
            total_budget,
            weights: BTreeMap::new(),
        }
    }

    /// Override per-stat weights. Non-positive weights are raised to 1 so
    /// the cost stays strictly monotonic; config validation reports them
    /// before they get here.
    pub fn with_weights(mut self, weights: BTreeMap<String, i32>) -> Self {
        self.weights = weights
            .into_iter()
            .map(|(key, weight)| (key, weight.max(1)))
            .collect();
        self
    }

    pub fn total_budget(&self) -> i32 {
        self.total_budget
    }

    pub fn weight(&self, key: &str) -> i32 {
        self.weights.get(key).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Total points spent by a stat map.
    pub fn cost_of(&self, stats: &StatMap) -> i32 {
        stats.iter().fold(0i32, |acc, (key, &value)| {
            acc.saturating_add(self.weight(key).saturating_mul(value))
        })
    }

    pub fn cost(&self, character: &Character) -> i32 {
        self.cost_of(character.current_stats())
    }

    pub fn remaining_points(&self, character: &Character) -> i32 {
        self.total_budget.saturating_sub(self.cost(character))
    }

    pub fn derive(&self, character: &Character) -> DerivedAttributes {
        let stats = character.current_stats();
        let cost = self.cost_of(stats);
        DerivedAttributes {
            attack: attack(stats),
            defense: defense(stats),
            cost,
            remaining_points: self.total_budget.saturating_sub(cost),
        }
    }
}

/// Values computed from a character's current stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DerivedAttributes {
    pub attack: i32,
    pub defense: i32,
    pub cost: i32,
    pub remaining_points: i32,
}

fn stat_or_zero(stats: &StatMap, key: &str) -> i32 {
    stats.get(key).copied().unwrap_or(0)
}

pub fn attack(stats: &StatMap) -> i32 {
    let power = stat_or_zero(stats, POWER);
    let speed = stat_or_zero(stats, SPEED);
    power.saturating_mul(2).saturating_add(speed / 2)
}

pub fn defense(stats: &StatMap) -> i32 {
    let endurance = stat_or_zero(stats, ENDURANCE);
    let speed = stat_or_zero(stats, SPEED);
    endurance.saturating_mul(2).saturating_add(speed / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{stat_map, STATS};

    #[test]
    fn default_rules_use_original_pool() {
        let rules = PointRules::default();
        assert_eq!(rules.total_budget(), 10);
        assert_eq!(rules.weight("Power"), 1);
    }

    #[test]
    fn cost_is_weighted_sum() {
        let mut weights = BTreeMap::new();
        weights.insert(POWER.to_string(), 3);
        let rules = PointRules::new(50).with_weights(weights);
        // 3*4 + 3 + 2 + 1
        assert_eq!(rules.cost_of(&stat_map(4, 3, 2, 1)), 18);
    }

    #[test]
    fn non_positive_weights_are_raised() {
        let mut weights = BTreeMap::new();
        weights.insert(POWER.to_string(), 0);
        weights.insert(SPEED.to_string(), -4);
        let rules = PointRules::new(10).with_weights(weights);
        assert_eq!(rules.weight(POWER), 1);
        assert_eq!(rules.weight(SPEED), 1);
    }

    #[test]
    fn attributes_for_templates() {
        let rules = PointRules::default();
        let mage = Character::default().with_base_and_current_stats(stat_map(1, 1, 1, 7));
        let derived = rules.derive(&mage);
        assert_eq!(derived.attack, 2);
        assert_eq!(derived.defense, 2);
        assert_eq!(derived.cost, 10);
        assert_eq!(derived.remaining_points, 0);

        let rogue = Character::default().with_base_and_current_stats(stat_map(2, 2, 4, 2));
        let derived = rules.derive(&rogue);
        assert_eq!(derived.attack, 6);
        assert_eq!(derived.defense, 6);
    }

    #[test]
    fn formulas_are_total_over_foreign_stat_sets() {
        let mut stats = StatMap::new();
        stats.insert("strength".to_string(), 5);
        stats.insert("agility".to_string(), 5);
        assert_eq!(attack(&stats), 0);
        assert_eq!(defense(&stats), 0);
        assert_eq!(PointRules::new(20).cost_of(&stats), 10);
    }

    #[test]
    fn raising_any_stat_raises_cost_and_never_lowers_attributes() {
        let rules = PointRules::new(100);
        let start = Character::default().with_base_and_current_stats(stat_map(2, 2, 3, 2));
        let before = rules.derive(&start);
        for info in STATS {
            let after = rules.derive(&start.with_stat_delta(info.name, 1));
            assert!(after.cost > before.cost, "cost must rise for {}", info.name);
            assert!(after.attack >= before.attack);
            assert!(after.defense >= before.defense);
            assert!(after.remaining_points < before.remaining_points);
        }
    }
}
