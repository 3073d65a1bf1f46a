//! EquipmentRecord - Trait and stock implementations for equippable records

mod accessory;
mod armor;

pub use accessory::Accessory;
pub use armor::ArmorPiece;

use crate::decoration::DecorationSlots;
use crate::types::{PieceKind, SkillContribution};
use std::fmt;

/// Trait for anything that can occupy a loadout role
///
/// Records are read-only from the aggregator's point of view. A single record
/// is expected to list each skill name at most once, but duplicates are
/// summed rather than rejected.
pub trait EquipmentRecord: fmt::Debug + Send + Sync {
    /// Display name / identifier for this record
    fn name(&self) -> &str;

    /// Armor or accessory
    fn kind(&self) -> PieceKind;

    /// Defence granted. Accessories grant none.
    fn defence(&self) -> u32 {
        0
    }

    /// Decoration sockets by tier. Accessories have none.
    fn decoration_slots(&self) -> DecorationSlots {
        DecorationSlots::none()
    }

    /// Skills granted, in listing order
    fn skills(&self) -> &[SkillContribution];
}
