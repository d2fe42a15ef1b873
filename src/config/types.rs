use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{Template, TemplateCatalog};
use crate::points::{PointRules, DEFAULT_TOTAL_BUDGET};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub points: PointsConfig,
    /// Replaces the built-in templates when non-empty.
    #[serde(default)]
    pub templates: Vec<TemplateConfig>,
}

/// Point budget shared by every character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsConfig {
    /// Total points available across all stats (default: 10).
    #[serde(default = "default_total_budget")]
    pub total_budget: i32,
    /// Cost per point for individual stats. Missing stats cost 1.
    #[serde(default)]
    pub weights: BTreeMap<String, i32>,
}

/// A pre-made character offered for selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Character name (e.g., "Thorin").
    pub name: String,
    /// Class label shown in the selection list (e.g., "Warrior"). Unique.
    pub char_class: String,
    #[serde(default)]
    pub description: String,
    /// Starting stats, which also become the floor for each stat.
    pub stats: BTreeMap<String, i32>,
}

fn default_total_budget() -> i32 {
    DEFAULT_TOTAL_BUDGET
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            total_budget: default_total_budget(),
            weights: BTreeMap::new(),
        }
    }
}

impl TemplateConfig {
    pub fn to_template(&self) -> Template {
        Template::new(
            self.name.clone(),
            self.char_class.clone(),
            self.description.clone(),
            self.stats.clone(),
        )
    }
}

impl Config {
    pub fn rules(&self) -> PointRules {
        PointRules::new(self.points.total_budget).with_weights(self.points.weights.clone())
    }

    /// Configured templates, or the built-in set when none are configured.
    pub fn catalog(&self) -> Arc<TemplateCatalog> {
        if self.templates.is_empty() {
            return TemplateCatalog::builtin();
        }
        let templates = self.templates.iter().map(TemplateConfig::to_template).collect();
        Arc::new(TemplateCatalog::new(templates))
    }
}
