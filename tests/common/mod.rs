//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use character_creator::{
    Character, CreatorReducer, CreatorState, CreatorStore, PointRules, Subscription,
    TemplateCatalog,
};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub type Published = Arc<Mutex<Vec<Arc<CreatorState>>>>;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Subscribe a recorder that keeps every published snapshot.
pub fn record(store: &CreatorStore) -> (Published, Subscription) {
    let published: Published = Arc::default();
    let sink = Arc::clone(&published);
    let subscription = store.subscribe(move |state| sink.lock().push(Arc::clone(state)));
    (published, subscription)
}

/// Store over `{strength: 5, agility: 5}` with uniform weight 1.
pub fn strength_agility_store(total_budget: i32) -> CreatorStore {
    let mut stats = BTreeMap::new();
    stats.insert("strength".to_string(), 5);
    stats.insert("agility".to_string(), 5);
    let reducer = CreatorReducer::new(
        PointRules::new(total_budget),
        Arc::new(TemplateCatalog::default()),
    );
    CreatorStore::new(reducer, Character::with_stats(stats)).expect("start fits the budget")
}

/// Tiny deterministic generator so invariant sweeps are reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    pub fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }

    /// Delta in `-range..=range`.
    pub fn delta(&mut self, range: i32) -> i32 {
        self.below((2 * range + 1) as u32) as i32 - range
    }
}
