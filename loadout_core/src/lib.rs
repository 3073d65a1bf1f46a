//! loadout_core - Equipment loadout aggregation
//!
//! This library provides:
//! - Loadout: Six equipped records (five armor pieces plus an accessory)
//! - EquipmentRecord: The seam for anything that can be equipped
//! - Totals: Defence, decoration slots by tier, and stacked skill levels
//! - Config: Loadouts described in TOML or JSON

pub mod config;
pub mod decoration;
pub mod loadout;
pub mod prelude;
pub mod record;
pub mod types;

// Re-export core types for convenience
pub use config::{ConfigError, LoadoutFile};
pub use decoration::{DecorationSlots, DECORATION_TIERS};
pub use loadout::{Loadout, LoadoutBuilder, LoadoutError, LoadoutSummary};
pub use record::{Accessory, ArmorPiece, EquipmentRecord};
pub use types::{PieceKind, Role, SkillContribution};
