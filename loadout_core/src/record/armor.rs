//! ArmorPiece - Head, body, arms, waist or legs equipment

use crate::decoration::DecorationSlots;
use crate::record::EquipmentRecord;
use crate::types::{PieceKind, SkillContribution};
use serde::{Deserialize, Serialize};

/// An armor piece with defence, decoration sockets and skills
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorPiece {
    pub name: String,
    #[serde(default)]
    pub defence: u32,
    /// Sockets, written as one tier per socket: `decorations = [1, 2]`
    #[serde(default)]
    pub decorations: DecorationSlots,
    #[serde(default)]
    pub skills: Vec<SkillContribution>,
}

impl ArmorPiece {
    /// Create a bare armor piece with the given defence
    pub fn new(name: impl Into<String>, defence: u32) -> Self {
        ArmorPiece {
            name: name.into(),
            defence,
            decorations: DecorationSlots::none(),
            skills: Vec::new(),
        }
    }

    pub fn with_decorations(mut self, decorations: DecorationSlots) -> Self {
        self.decorations = decorations;
        self
    }

    /// Add a skill at the given level
    pub fn with_skill(mut self, name: impl Into<String>, level: u32) -> Self {
        self.skills.push(SkillContribution::new(name, level));
        self
    }
}

impl EquipmentRecord for ArmorPiece {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PieceKind {
        PieceKind::Armor
    }

    fn defence(&self) -> u32 {
        self.defence
    }

    fn decoration_slots(&self) -> DecorationSlots {
        self.decorations
    }

    fn skills(&self) -> &[SkillContribution] {
        &self.skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armor_piece_record() {
        let piece = ArmorPiece::new("Rathalos Helm", 20)
            .with_decorations(DecorationSlots::from_counts([1, 0, 0, 0]))
            .with_skill("Attack Boost", 2);

        assert_eq!(piece.name(), "Rathalos Helm");
        assert_eq!(piece.kind(), PieceKind::Armor);
        assert_eq!(piece.defence(), 20);
        assert_eq!(piece.decoration_slots().get(1), 1);
        assert_eq!(piece.skills(), &[SkillContribution::new("Attack Boost", 2)]);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let piece: ArmorPiece = toml::from_str(r#"name = "Leather Belt""#).unwrap();
        assert_eq!(piece.defence, 0);
        assert!(piece.decorations.is_empty());
        assert!(piece.skills.is_empty());
    }
}
