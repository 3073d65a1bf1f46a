//! Loadout - Six equipped records and the totals derived from them

mod builder;
mod summary;
pub mod totals;

pub use builder::LoadoutBuilder;
pub use summary::LoadoutSummary;

use crate::decoration::DecorationSlots;
use crate::record::EquipmentRecord;
use crate::types::Role;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Loadout construction error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadoutError {
    #[error("Incomplete loadout: no record for the {0} role")]
    MissingRole(Role),
    #[error("Role {0} was assigned more than once")]
    DuplicateRole(Role),
}

/// Exactly one record per role, fixed for the lifetime of the loadout
///
/// All queries are computed fresh from the held records on every call.
/// Armor totals exclude whatever occupies the accessory role, regardless
/// of what kind of record it is.
#[derive(Debug, Clone, Copy)]
pub struct Loadout<'a> {
    head: &'a dyn EquipmentRecord,
    body: &'a dyn EquipmentRecord,
    arms: &'a dyn EquipmentRecord,
    waist: &'a dyn EquipmentRecord,
    legs: &'a dyn EquipmentRecord,
    accessory: &'a dyn EquipmentRecord,
}

impl<'a> Loadout<'a> {
    /// Create a loadout from one record per role
    pub fn new(
        head: &'a dyn EquipmentRecord,
        body: &'a dyn EquipmentRecord,
        arms: &'a dyn EquipmentRecord,
        waist: &'a dyn EquipmentRecord,
        legs: &'a dyn EquipmentRecord,
        accessory: &'a dyn EquipmentRecord,
    ) -> Self {
        let loadout = Loadout {
            head,
            body,
            arms,
            waist,
            legs,
            accessory,
        };
        loadout.warn_on_kind_mismatch();
        tracing::debug!(
            head = head.name(),
            body = body.name(),
            arms = arms.name(),
            waist = waist.name(),
            legs = legs.name(),
            accessory = accessory.name(),
            "loadout assembled"
        );
        loadout
    }

    /// Start building a loadout role by role
    pub fn builder() -> LoadoutBuilder<'a> {
        LoadoutBuilder::new()
    }

    fn warn_on_kind_mismatch(&self) {
        for &role in Role::all() {
            let record = self.get(role);
            if record.kind() != role.expected_kind() {
                tracing::warn!(
                    %role,
                    record = record.name(),
                    kind = ?record.kind(),
                    "record kind does not match its role; totals follow the role"
                );
            }
        }
    }

    /// Record assigned to a role
    pub fn get(&self, role: Role) -> &'a dyn EquipmentRecord {
        match role {
            Role::Head => self.head,
            Role::Body => self.body,
            Role::Arms => self.arms,
            Role::Waist => self.waist,
            Role::Legs => self.legs,
            Role::Accessory => self.accessory,
        }
    }

    /// Role -> record view with all six roles present
    pub fn equipment(&self) -> BTreeMap<Role, &'a dyn EquipmentRecord> {
        Role::all().iter().map(|&role| (role, self.get(role))).collect()
    }

    /// The five armor records in role order
    pub fn armor_pieces(&self) -> [&'a dyn EquipmentRecord; 5] {
        [self.head, self.body, self.arms, self.waist, self.legs]
    }

    pub fn accessory(&self) -> &'a dyn EquipmentRecord {
        self.accessory
    }

    /// Sum of defence over the armor pieces
    pub fn total_defence(&self) -> u64 {
        totals::total_defence(self.armor_pieces())
    }

    /// Decoration sockets per tier summed over the armor pieces
    pub fn total_decoration_slots_by_level(&self) -> DecorationSlots {
        totals::total_decoration_slots(self.armor_pieces())
    }

    /// Accumulated level per skill across all six records
    ///
    /// Armor skills are folded in role order, then the accessory's.
    pub fn total_skill_levels(&self) -> HashMap<String, u64> {
        let armor_skills = self
            .armor_pieces()
            .into_iter()
            .flat_map(|record| record.skills());
        totals::total_skill_levels(armor_skills.chain(self.accessory.skills()))
    }

    /// Accumulated level of one skill (zero if nothing grants it)
    pub fn skill_level(&self, name: &str) -> u64 {
        self.total_skill_levels().get(name).copied().unwrap_or(0)
    }

    /// Snapshot of every total
    pub fn summary(&self) -> LoadoutSummary {
        LoadoutSummary::from_loadout(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Accessory, ArmorPiece};
    use crate::types::PieceKind;

    fn pieces() -> (Vec<ArmorPiece>, Accessory) {
        let armor = vec![
            ArmorPiece::new("Helm", 20)
                .with_decorations(DecorationSlots::from_counts([1, 0, 0, 0]))
                .with_skill("Attack Boost", 2),
            ArmorPiece::new("Mail", 25)
                .with_decorations(DecorationSlots::from_counts([0, 1, 0, 0]))
                .with_skill("Attack Boost", 3),
            ArmorPiece::new("Braces", 15).with_skill("Weakness Exploit", 1),
            ArmorPiece::new("Coil", 10),
            ArmorPiece::new("Greaves", 18),
        ];
        let charm = Accessory::new("Attack Charm").with_skill("Attack Boost", 1);
        (armor, charm)
    }

    fn loadout<'a>(armor: &'a [ArmorPiece], charm: &'a Accessory) -> Loadout<'a> {
        Loadout::new(&armor[0], &armor[1], &armor[2], &armor[3], &armor[4], charm)
    }

    #[test]
    fn test_equipment_view_has_every_role() {
        let (armor, charm) = pieces();
        let loadout = loadout(&armor, &charm);
        let view = loadout.equipment();

        assert_eq!(view.len(), 6);
        assert_eq!(view[&Role::Head].name(), "Helm");
        assert_eq!(view[&Role::Legs].name(), "Greaves");
        assert_eq!(view[&Role::Accessory].name(), "Attack Charm");
    }

    #[test]
    fn test_armor_pieces_exclude_accessory() {
        let (armor, charm) = pieces();
        let loadout = loadout(&armor, &charm);
        let names: Vec<_> = loadout.armor_pieces().iter().map(|r| r.name()).collect();

        assert_eq!(names, ["Helm", "Mail", "Braces", "Coil", "Greaves"]);
        assert_eq!(loadout.accessory().kind(), PieceKind::Accessory);
    }

    #[test]
    fn test_totals() {
        let (armor, charm) = pieces();
        let loadout = loadout(&armor, &charm);

        assert_eq!(loadout.total_defence(), 88);
        assert_eq!(
            loadout.total_decoration_slots_by_level(),
            DecorationSlots::from_counts([1, 1, 0, 0])
        );

        let skills = loadout.total_skill_levels();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills["Attack Boost"], 6);
        assert_eq!(skills["Weakness Exploit"], 1);
    }

    #[test]
    fn test_skill_level_absent_is_zero() {
        let (armor, charm) = pieces();
        let loadout = loadout(&armor, &charm);
        assert_eq!(loadout.skill_level("Critical Eye"), 0);
        assert_eq!(loadout.skill_level("Attack Boost"), 6);
    }

    #[test]
    fn test_armor_in_accessory_role_is_excluded_by_role() {
        let (armor, _) = pieces();
        let impostor = ArmorPiece::new("Spare Helm", 100)
            .with_decorations(DecorationSlots::from_counts([0, 0, 0, 3]))
            .with_skill("Guard", 1);
        let loadout = Loadout::new(&armor[0], &armor[1], &armor[2], &armor[3], &armor[4], &impostor);

        assert_eq!(loadout.total_defence(), 88);
        assert_eq!(loadout.total_decoration_slots_by_level().get(4), 0);
        assert_eq!(loadout.skill_level("Guard"), 1);
    }

    #[test]
    fn test_accessory_in_armor_role_adds_only_skills() {
        let (armor, charm) = pieces();
        let stray = Accessory::new("Stray Charm").with_skill("Guard", 2);
        let loadout = Loadout::new(&armor[0], &armor[1], &stray, &armor[3], &armor[4], &charm);

        assert_eq!(loadout.get(Role::Arms).kind(), PieceKind::Accessory);
        assert_eq!(loadout.total_defence(), 88 - 15);
        assert_eq!(
            loadout.total_decoration_slots_by_level(),
            DecorationSlots::from_counts([1, 1, 0, 0])
        );
        assert_eq!(loadout.skill_level("Guard"), 2);
        assert_eq!(loadout.skill_level("Weakness Exploit"), 0);
    }

    #[test]
    fn test_totals_past_u32_max_do_not_overflow() {
        let big = ArmorPiece::new("Big", u32::MAX).with_skill("Attack Boost", u32::MAX);
        let small = ArmorPiece::new("Small", 1);
        let charm = Accessory::new("Charm").with_skill("Attack Boost", 1);
        let loadout = Loadout::new(&big, &small, &small, &small, &small, &charm);

        assert_eq!(loadout.total_defence(), u64::from(u32::MAX) + 4);
        assert_eq!(loadout.skill_level("Attack Boost"), u64::from(u32::MAX) + 1);
        assert_eq!(loadout.summary().total_defence, u64::from(u32::MAX) + 4);
    }

    #[test]
    fn test_queries_do_not_change_between_calls() {
        let (armor, charm) = pieces();
        let loadout = loadout(&armor, &charm);
        assert_eq!(loadout.total_skill_levels(), loadout.total_skill_levels());
        assert_eq!(loadout.total_defence(), loadout.total_defence());
    }
}
