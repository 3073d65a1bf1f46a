//! Fold functions behind the loadout totals
//!
//! Every total is a fold with addition, so the order records or skills are
//! visited in never changes the result. Record values are `u32` and totals
//! accumulate in `u64` with saturating adds, so no input can panic or wrap.

use crate::decoration::DecorationSlots;
use crate::record::EquipmentRecord;
use crate::types::SkillContribution;
use std::collections::HashMap;

/// Sum of defence over the given records
pub fn total_defence<'r, I>(records: I) -> u64
where
    I: IntoIterator<Item = &'r dyn EquipmentRecord>,
{
    records
        .into_iter()
        .fold(0, |total: u64, record| total.saturating_add(u64::from(record.defence())))
}

/// Per-tier sum of decoration sockets over the given records
pub fn total_decoration_slots<'r, I>(records: I) -> DecorationSlots
where
    I: IntoIterator<Item = &'r dyn EquipmentRecord>,
{
    records
        .into_iter()
        .map(|record| record.decoration_slots())
        .sum()
}

/// Accumulate skill levels by name
///
/// Every occurrence counts, including a name repeated within one record.
/// No cap is applied.
pub fn total_skill_levels<'s, I>(skills: I) -> HashMap<String, u64>
where
    I: IntoIterator<Item = &'s SkillContribution>,
{
    skills
        .into_iter()
        .fold(HashMap::new(), |mut totals, skill| {
            let level = totals.entry(skill.name.clone()).or_insert(0u64);
            *level = level.saturating_add(u64::from(skill.level));
            totals
        })
}
