//! LoadoutBuilder - Assemble a loadout one role at a time

use super::{Loadout, LoadoutError};
use crate::record::EquipmentRecord;
use crate::types::Role;
use std::collections::BTreeMap;

/// Collects records by role and refuses to build an incomplete loadout
#[derive(Debug, Default)]
pub struct LoadoutBuilder<'a> {
    slots: BTreeMap<Role, &'a dyn EquipmentRecord>,
}

impl<'a> LoadoutBuilder<'a> {
    pub fn new() -> Self {
        LoadoutBuilder {
            slots: BTreeMap::new(),
        }
    }

    /// Assign a record to a role
    ///
    /// Each role may be assigned once. A second assignment is rejected and
    /// the record already equipped there stays.
    pub fn equip(
        &mut self,
        role: Role,
        record: &'a dyn EquipmentRecord,
    ) -> Result<&mut Self, LoadoutError> {
        if self.slots.contains_key(&role) {
            return Err(LoadoutError::DuplicateRole(role));
        }
        self.slots.insert(role, record);
        Ok(self)
    }

    /// Roles that still have no record, in role order
    pub fn missing_roles(&self) -> Vec<Role> {
        Role::all()
            .iter()
            .copied()
            .filter(|role| !self.slots.contains_key(role))
            .collect()
    }

    fn slot(&self, role: Role) -> Result<&'a dyn EquipmentRecord, LoadoutError> {
        self.slots
            .get(&role)
            .copied()
            .ok_or(LoadoutError::MissingRole(role))
    }

    /// Build the loadout, failing on the first role without a record
    pub fn build(&self) -> Result<Loadout<'a>, LoadoutError> {
        Ok(Loadout::new(
            self.slot(Role::Head)?,
            self.slot(Role::Body)?,
            self.slot(Role::Arms)?,
            self.slot(Role::Waist)?,
            self.slot(Role::Legs)?,
            self.slot(Role::Accessory)?,
        ))
    }
}
