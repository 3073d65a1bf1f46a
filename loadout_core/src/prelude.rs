//! Prelude module for convenient imports
//!
//! ```rust
//! use loadout_core::prelude::*;
//! ```

// Core types
pub use crate::types::{PieceKind, Role, SkillContribution};
pub use crate::decoration::DecorationSlots;

// Records
pub use crate::record::{Accessory, ArmorPiece, EquipmentRecord};

// Aggregation
pub use crate::loadout::{Loadout, LoadoutBuilder, LoadoutError, LoadoutSummary};

// Config
pub use crate::config::{ConfigError, LoadoutFile};
