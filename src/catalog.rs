//! Read-only catalog of pre-made character templates.
//!
//! The built-in catalog is initialised once per process and shared through
//! an `Arc`; a catalog read from configuration is built the same way at
//! startup and never changes afterwards.

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::character::Character;
use crate::stats::{stat_map, StatMap};

/// Dropdown entry that keeps the current custom edits.
pub const CUSTOM: &str = "Custom";

/// Opaque identifier handed to the UI and passed back on selection.
///
/// Templates are keyed by their class label, which is unique per catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, pre-made character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    id: TemplateId,
    character: Character,
}

impl Template {
    /// Template whose id is its class label and whose base stats equal its
    /// current stats.
    pub fn new(
        name: impl Into<String>,
        char_class: impl Into<String>,
        description: impl Into<String>,
        stats: StatMap,
    ) -> Self {
        let char_class = char_class.into();
        let character = Character::default()
            .with_name(name)
            .with_class(char_class.clone())
            .with_description(description)
            .with_base_and_current_stats(stats);
        Self {
            id: TemplateId(char_class),
            character,
        }
    }

    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    /// Display label for selection lists.
    pub fn char_class(&self) -> &str {
        self.character.char_class()
    }

    pub fn character(&self) -> &Character {
        &self.character
    }
}

/// Ordered, immutable collection of templates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

static BUILTIN: OnceLock<Arc<TemplateCatalog>> = OnceLock::new();

impl TemplateCatalog {
    /// Catalog in the given order. Later duplicates of a class label are
    /// unreachable through lookups; config validation rejects them.
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// The process-wide default catalog.
    pub fn builtin() -> Arc<TemplateCatalog> {
        Arc::clone(BUILTIN.get_or_init(|| {
            let catalog = Self::new(builtin_templates());
            tracing::info!(templates = catalog.len(), "Built-in template catalog initialised");
            Arc::new(catalog)
        }))
    }

    /// Templates in insertion order.
    pub fn list_all(&self) -> &[Template] {
        &self.templates
    }

    pub fn find_by_class(&self, char_class: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.char_class() == char_class)
    }

    pub fn find(&self, id: &TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| &t.id == id)
    }

    /// Selection list contents: every class label, then [`CUSTOM`].
    pub fn options(&self) -> Vec<&str> {
        self.templates
            .iter()
            .map(Template::char_class)
            .chain(std::iter::once(CUSTOM))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "Thorin",
            "Warrior",
            "A battle-hardened fighter who relies on brute strength and endurance.",
            stat_map(4, 3, 2, 1),
        ),
        Template::new(
            "Lyra",
            "Rogue",
            "A quick and cunning thief who strikes from the shadows.",
            stat_map(2, 2, 4, 2),
        ),
        Template::new(
            "Seraphine",
            "Paladin",
            "A holy knight devoted to protecting allies and vanquishing evil.",
            stat_map(3, 3, 2, 2),
        ),
        Template::new(
            "Eldrin",
            "Mage",
            "A master of arcane arts who channels focus into devastating spells.",
            stat_map(1, 1, 1, 7),
        ),
    ]
}
