//! LoadoutFile - A loadout described in a TOML or JSON file

use super::ConfigError;
use crate::loadout::Loadout;
use crate::record::{Accessory, ArmorPiece};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Owned records for all six roles
///
/// ```toml
/// [head]
/// name = "Rathalos Helm"
/// defence = 20
/// decorations = [1]
///
/// [[head.skills]]
/// name = "Attack Boost"
/// level = 2
///
/// [accessory]
/// name = "Attack Charm"
/// skills = [{ name = "Attack Boost", level = 1 }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutFile {
    pub head: ArmorPiece,
    pub body: ArmorPiece,
    pub arms: ArmorPiece,
    pub waist: ArmorPiece,
    pub legs: ArmorPiece,
    pub accessory: Accessory,
}

impl LoadoutFile {
    /// Load from a file, picking the format by extension (`.json`, otherwise TOML)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file: LoadoutFile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => super::load_json(path)?,
            _ => super::load_toml(path)?,
        };
        file.validate()?;
        tracing::debug!(path = %path.display(), "loaded loadout file");
        Ok(file)
    }

    /// Parse from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: LoadoutFile = super::parse_toml(content)?;
        file.validate()?;
        Ok(file)
    }

    /// Check names are present and every skill level is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (role, record) in self.loadout().equipment() {
            let name = record.name();
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{} record has an empty name",
                    role
                )));
            }
            if let Some(skill) = record
                .skills()
                .iter()
                .find(|skill| skill.name.trim().is_empty() || skill.level == 0)
            {
                return Err(ConfigError::ValidationError(format!(
                    "{} ({}) grants an invalid skill {:?} at level {}",
                    name, role, skill.name, skill.level
                )));
            }
        }
        Ok(())
    }

    /// Borrow the records as a loadout
    pub fn loadout(&self) -> Loadout<'_> {
        Loadout::new(
            &self.head,
            &self.body,
            &self.arms,
            &self.waist,
            &self.legs,
            &self.accessory,
        )
    }
}
