//! LoadoutSummary - Serializable snapshot of a loadout's totals

use super::Loadout;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All totals of a loadout, computed at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutSummary {
    pub total_defence: u64,
    /// Always tiers 1-4
    pub decoration_slots_by_level: BTreeMap<u8, u64>,
    pub skill_levels: BTreeMap<String, u64>,
}

impl LoadoutSummary {
    pub fn from_loadout(loadout: &Loadout<'_>) -> Self {
        let summary = LoadoutSummary {
            total_defence: loadout.total_defence(),
            decoration_slots_by_level: loadout.total_decoration_slots_by_level().to_map(),
            skill_levels: loadout.total_skill_levels().into_iter().collect(),
        };
        tracing::debug!(
            defence = summary.total_defence,
            skills = summary.skill_levels.len(),
            "loadout summary computed"
        );
        summary
    }
}
