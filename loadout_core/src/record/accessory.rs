//! Accessory - The skills-only sixth piece of a loadout

use crate::record::EquipmentRecord;
use crate::types::{PieceKind, SkillContribution};
use serde::{Deserialize, Serialize};

/// An accessory (charm) that grants skills only
///
/// Defence is always zero and there are never any decoration sockets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<SkillContribution>,
}

impl Accessory {
    pub fn new(name: impl Into<String>) -> Self {
        Accessory {
            name: name.into(),
            skills: Vec::new(),
        }
    }

    /// Add a skill at the given level
    pub fn with_skill(mut self, name: impl Into<String>, level: u32) -> Self {
        self.skills.push(SkillContribution::new(name, level));
        self
    }
}

impl EquipmentRecord for Accessory {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PieceKind {
        PieceKind::Accessory
    }

    fn skills(&self) -> &[SkillContribution] {
        &self.skills
    }
}
