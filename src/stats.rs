//! Stat and attribute catalogues.
//!
//! Stats are the raw numbers a player spends points on. Attributes are
//! derived from stats (see [`crate::points`]) and are never edited directly.

use std::collections::BTreeMap;

/// Mapping from stat name to value.
pub type StatMap = BTreeMap<String, i32>;

pub const POWER: &str = "Power";
pub const ENDURANCE: &str = "Endurance";
pub const SPEED: &str = "Speed";
pub const FOCUS: &str = "Focus";

/// Display metadata for a stat or derived attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Stats in display order.
pub const STATS: [StatInfo; 4] = [
    StatInfo {
        name: POWER,
        description: "Increases attack damage",
    },
    StatInfo {
        name: ENDURANCE,
        description: "Improves defense",
    },
    StatInfo {
        name: SPEED,
        description: "Boosts agility",
    },
    StatInfo {
        name: FOCUS,
        description: "Reduces cost",
    },
];

/// Derived attributes in display order.
pub const ATTRIBUTES: [StatInfo; 3] = [
    StatInfo {
        name: "Attack",
        description: "Amount of damage done",
    },
    StatInfo {
        name: "Defense",
        description: "Amount of damage blocked",
    },
    StatInfo {
        name: "Cost",
        description: "Points spent on stats",
    },
];

/// Look up display metadata for a stat name.
pub fn stat_info(name: &str) -> Option<&'static StatInfo> {
    STATS.iter().find(|info| info.name == name)
}

/// Every catalogued stat at zero. The stat set of a fresh custom character.
pub fn default_stats() -> StatMap {
    STATS
        .iter()
        .map(|info| (info.name.to_string(), 0))
        .collect()
}

/// Build a map over the four catalogued stats, in catalogue order.
pub fn stat_map(power: i32, endurance: i32, speed: i32, focus: i32) -> StatMap {
    [
        (POWER, power),
        (ENDURANCE, endurance),
        (SPEED, speed),
        (FOCUS, focus),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_cover_catalogue_at_zero() {
        let stats = default_stats();
        assert_eq!(stats.len(), STATS.len());
        assert!(stats.values().all(|&v| v == 0));
        for info in STATS {
            assert!(stats.contains_key(info.name));
        }
    }

    #[test]
    fn stat_info_lookup() {
        assert_eq!(stat_info(SPEED).map(|i| i.description), Some("Boosts agility"));
        assert!(stat_info("Charisma").is_none());
    }

    #[test]
    fn stat_map_assigns_by_name() {
        let stats = stat_map(1, 2, 3, 4);
        assert_eq!(stats[POWER], 1);
        assert_eq!(stats[ENDURANCE], 2);
        assert_eq!(stats[SPEED], 3);
        assert_eq!(stats[FOCUS], 4);
    }
}
