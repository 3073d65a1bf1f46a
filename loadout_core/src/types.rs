//! Core types shared by records and loadouts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot a record occupies in a loadout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Head,
    Body,
    Arms,
    Waist,
    Legs,
    Accessory,
}

impl Role {
    /// Get all roles, armor first, accessory last
    pub fn all() -> &'static [Role] {
        &[
            Role::Head,
            Role::Body,
            Role::Arms,
            Role::Waist,
            Role::Legs,
            Role::Accessory,
        ]
    }

    /// Get the five armor roles in loadout order
    pub fn armor() -> &'static [Role] {
        &Self::all()[..5]
    }

    pub fn is_accessory(self) -> bool {
        matches!(self, Role::Accessory)
    }

    /// The kind of record this role is meant to hold
    pub fn expected_kind(self) -> PieceKind {
        if self.is_accessory() {
            PieceKind::Accessory
        } else {
            PieceKind::Armor
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Head => "head",
            Role::Body => "body",
            Role::Arms => "arms",
            Role::Waist => "waist",
            Role::Legs => "legs",
            Role::Accessory => "accessory",
        };
        f.write_str(name)
    }
}

/// Whether a record is an armor piece or an accessory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    /// Contributes defence, decoration slots and skills
    Armor,
    /// Contributes skills only
    Accessory,
}

/// A named skill granted by a record at some level
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillContribution {
    /// Skill identifier, e.g. "Attack Boost"
    pub name: String,
    /// Levels granted by this source
    pub level: u32,
}

impl SkillContribution {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        SkillContribution {
            name: name.into(),
            level,
        }
    }
}

impl<S: Into<String>> From<(S, u32)> for SkillContribution {
    fn from((name, level): (S, u32)) -> Self {
        SkillContribution::new(name, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_roles_unique_and_ordered() {
        let roles = Role::all();
        assert_eq!(roles.len(), 6);
        assert_eq!(roles[0], Role::Head);
        assert_eq!(roles[5], Role::Accessory);

        let mut sorted = roles.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 6);
    }

    #[test]
    fn test_armor_roles_exclude_accessory() {
        assert_eq!(Role::armor().len(), 5);
        assert!(Role::armor().iter().all(|r| !r.is_accessory()));
    }

    #[test]
    fn test_expected_kind() {
        assert_eq!(Role::Waist.expected_kind(), PieceKind::Armor);
        assert_eq!(Role::Accessory.expected_kind(), PieceKind::Accessory);
    }

    #[test]
    fn test_skill_from_tuple() {
        let skill: SkillContribution = ("Attack Boost", 2).into();
        assert_eq!(skill.name, "Attack Boost");
        assert_eq!(skill.level, 2);
    }

    #[test]
    fn test_role_serde_snake_case() {
        let json = serde_json::to_string(&Role::Accessory).unwrap();
        assert_eq!(json, "\"accessory\"");
    }
}
