//! The character entity.
//!
//! A [`Character`] is an immutable value. Every edit goes through one of the
//! `with_*` methods, which return a fresh copy and leave the receiver alone.

use serde::Serialize;

use crate::stats::{default_stats, StatMap};

/// One character's identity and stats.
///
/// Invariants maintained by every constructor and `with_*` method:
/// - `current_stats` and `base_stats` have exactly the same keys
/// - `current_stats[k] >= base_stats[k]` for every key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    name: String,
    char_class: String,
    description: String,
    /// Floor for each stat, fixed when the character is created or a
    /// template is adopted.
    base_stats: StatMap,
    current_stats: StatMap,
}

impl Default for Character {
    fn default() -> Self {
        Self::with_stats(default_stats())
    }
}

impl Character {
    /// Blank character whose base and current stats are both `stats`.
    pub fn with_stats(stats: StatMap) -> Self {
        Self {
            name: String::new(),
            char_class: String::new(),
            description: String::new(),
            base_stats: stats.clone(),
            current_stats: stats,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn char_class(&self) -> &str {
        &self.char_class
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn base_stats(&self) -> &StatMap {
        &self.base_stats
    }

    pub fn current_stats(&self) -> &StatMap {
        &self.current_stats
    }

    /// Current value of a stat, `None` for an unknown key.
    pub fn stat(&self, key: &str) -> Option<i32> {
        self.current_stats.get(key).copied()
    }

    /// Floor value of a stat, `None` for an unknown key.
    pub fn base_stat(&self, key: &str) -> Option<i32> {
        self.base_stats.get(key).copied()
    }

    pub fn has_stat(&self, key: &str) -> bool {
        self.current_stats.contains_key(key)
    }

    /// Points spent on `key` above its floor.
    pub fn points_above_base(&self, key: &str) -> Option<i32> {
        let current = self.stat(key)?;
        let base = self.base_stat(key)?;
        Some(current.saturating_sub(base))
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_class(&self, char_class: impl Into<String>) -> Self {
        Self {
            char_class: char_class.into(),
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self.clone()
        }
    }

    /// Adds `delta` to one stat, clamping the result to the stat's floor.
    ///
    /// The budget ceiling is not checked here: it spans every stat, so the
    /// caller enforces it. An unknown key returns an unchanged copy.
    pub fn with_stat_delta(&self, key: &str, delta: i32) -> Self {
        let (Some(current), Some(base)) = (self.stat(key), self.base_stat(key)) else {
            return self.clone();
        };

        let proposed = current.saturating_add(delta).max(base);
        if proposed == current {
            return self.clone();
        }

        let mut current_stats = self.current_stats.clone();
        current_stats.insert(key.to_string(), proposed);
        Self {
            current_stats,
            ..self.clone()
        }
    }

    /// Replaces the stat set wholesale, with current equal to base.
    ///
    /// Used when adopting a template; this is the only way the key set of a
    /// character can change.
    pub fn with_base_and_current_stats(&self, stats: StatMap) -> Self {
        Self {
            base_stats: stats.clone(),
            current_stats: stats,
            ..self.clone()
        }
    }
}
