//! The in-memory roster of user records.
//!
//! Insertion order is preserved and names are not required to be unique;
//! every by-name operation resolves to the first match. Resolution goes
//! through a single lookup primitive so each operation handles a miss
//! the same way.

use crate::types::{BmiChange, FieldUpdate, FoodEntry, UserRecord};
use crate::{Error, Result};

/// Ordered collection of all user records for the process lifetime
#[derive(Clone, Debug, Default)]
pub struct Roster {
    records: Vec<UserRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Duplicate names are allowed; lookups return the
    /// first match in insertion order.
    pub fn add(&mut self, record: UserRecord) {
        tracing::debug!("Added user {}", record.name);
        self.records.push(record);
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// First record whose name matches exactly, in insertion order
    pub fn find_by_name(&self, name: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Shared lookup primitive for the by-name operations
    fn resolve_mut(&mut self, name: &str) -> Result<&mut UserRecord> {
        self.records
            .iter_mut()
            .find(|r| r.name == name)
            .ok_or_else(|| Error::UserNotFound(name.to_string()))
    }

    /// Apply a field update to the named record.
    ///
    /// Propagates the BMI-change report when the update produced one.
    pub fn update_by_name(
        &mut self,
        name: &str,
        update: FieldUpdate,
    ) -> Result<Option<BmiChange>> {
        Ok(self.resolve_mut(name)?.apply(update))
    }

    /// Log today's water and sleep for the named record
    pub fn log_water_and_sleep_by_name(
        &mut self,
        name: &str,
        liters: f32,
        hours: i32,
    ) -> Result<()> {
        self.resolve_mut(name)?.log_water_and_sleep(liters, hours);
        Ok(())
    }

    /// Total today's calorie log for the named record.
    ///
    /// The total is returned for display only; nothing is stored.
    pub fn log_calories_by_name(&mut self, name: &str, entries: &[FoodEntry]) -> Result<f32> {
        self.resolve_mut(name)?;
        Ok(UserRecord::total_calories(entries))
    }
}
