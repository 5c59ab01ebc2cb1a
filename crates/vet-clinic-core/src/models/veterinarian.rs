//! Veterinarian model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::{AppointmentId, VeterinarianId};
use crate::config::ClinicConfig;

/// A veterinarian with a fixed specialty and daily capacity.
///
/// Accepted appointments are keyed by [`AppointmentId`], so two requests with
/// identical fields still count as two appointments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "VeterinarianRecord")]
pub struct Veterinarian {
    pub id: VeterinarianId,
    /// Display name (informational only)
    pub name: String,
    specialty: String,
    max_daily_appointments: u32,
    appointments: BTreeSet<AppointmentId>,
}

/// A deserialized veterinarian holding more appointments than its capacity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("veterinarian {veterinarian_id} holds {load} appointments, capacity is {capacity}")]
pub struct CapacityExceeded {
    pub veterinarian_id: VeterinarianId,
    pub load: usize,
    pub capacity: u32,
}

/// Unchecked wire form of [`Veterinarian`].
#[derive(Deserialize)]
struct VeterinarianRecord {
    id: VeterinarianId,
    name: String,
    specialty: String,
    max_daily_appointments: u32,
    #[serde(default)]
    appointments: BTreeSet<AppointmentId>,
}

impl TryFrom<VeterinarianRecord> for Veterinarian {
    type Error = CapacityExceeded;

    fn try_from(record: VeterinarianRecord) -> Result<Self, Self::Error> {
        if record.appointments.len() > record.max_daily_appointments as usize {
            return Err(CapacityExceeded {
                veterinarian_id: record.id,
                load: record.appointments.len(),
                capacity: record.max_daily_appointments,
            });
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            specialty: record.specialty,
            max_daily_appointments: record.max_daily_appointments,
            appointments: record.appointments,
        })
    }
}

impl Veterinarian {
    /// Create a veterinarian with no appointments.
    ///
    /// A capacity of zero yields a veterinarian that never accepts anything.
    pub fn new(
        name: impl Into<String>,
        specialty: impl Into<String>,
        max_daily_appointments: u32,
    ) -> Self {
        Self::with_id(VeterinarianId::new(), name, specialty, max_daily_appointments)
    }

    /// Create a veterinarian with a caller-supplied ID.
    pub fn with_id(
        id: VeterinarianId,
        name: impl Into<String>,
        specialty: impl Into<String>,
        max_daily_appointments: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
            max_daily_appointments,
            appointments: BTreeSet::new(),
        }
    }

    /// Create a veterinarian using the configured default capacity.
    pub fn with_default_capacity(
        name: impl Into<String>,
        specialty: impl Into<String>,
        config: &ClinicConfig,
    ) -> Self {
        Self::new(name, specialty, config.default_max_daily_appointments)
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn max_daily_appointments(&self) -> u32 {
        self.max_daily_appointments
    }

    /// Number of appointments currently held.
    pub fn load(&self) -> usize {
        self.appointments.len()
    }

    pub fn remaining_capacity(&self) -> usize {
        (self.max_daily_appointments as usize).saturating_sub(self.load())
    }

    pub fn is_full(&self) -> bool {
        self.remaining_capacity() == 0
    }

    pub fn has_appointment(&self, id: AppointmentId) -> bool {
        self.appointments.contains(&id)
    }

    /// IDs of held appointments, in ID order.
    pub fn appointments(&self) -> impl Iterator<Item = AppointmentId> + '_ {
        self.appointments.iter().copied()
    }

    /// Record an appointment. Callers check eligibility first.
    pub(crate) fn hold(&mut self, id: AppointmentId) -> bool {
        self.appointments.insert(id)
    }

    /// Drop an appointment, freeing its slot. Returns whether it was held.
    pub fn release(&mut self, id: AppointmentId) -> bool {
        self.appointments.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_veterinarian() {
        let vet = Veterinarian::new("Dra. López", "canina", 3);
        assert_eq!(vet.name, "Dra. López");
        assert_eq!(vet.specialty(), "canina");
        assert_eq!(vet.max_daily_appointments(), 3);
        assert_eq!(vet.load(), 0);
        assert_eq!(vet.remaining_capacity(), 3);
        assert!(!vet.is_full());
    }

    #[test]
    fn test_default_capacity_from_config() {
        let config = ClinicConfig::default();
        let vet = Veterinarian::with_default_capacity("Dr. Gómez", "Aves", &config);
        assert_eq!(vet.max_daily_appointments(), 3);
    }

    #[test]
    fn test_hold_and_release() {
        let mut vet = Veterinarian::new("Dra. López", "canina", 1);
        let id = AppointmentId::new();

        assert!(vet.hold(id));
        assert!(!vet.hold(id)); // same ID is held once
        assert_eq!(vet.load(), 1);
        assert!(vet.is_full());
        assert!(vet.has_appointment(id));

        assert!(vet.release(id));
        assert!(!vet.release(id));
        assert_eq!(vet.load(), 0);
    }

    #[test]
    fn test_zero_capacity_is_always_full() {
        let vet = Veterinarian::new("Dr. Nobody", "canina", 0);
        assert!(vet.is_full());
        assert_eq!(vet.remaining_capacity(), 0);
    }

    #[test]
    fn test_snapshot_restores_held_appointments() {
        let mut vet = Veterinarian::new("Dra. López", "canina", 2);
        vet.hold(AppointmentId::new());

        let json = serde_json::to_string(&vet).unwrap();
        let restored: Veterinarian = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, vet);
        assert_eq!(restored.load(), 1);
    }

    #[test]
    fn test_snapshot_over_capacity_is_rejected() {
        let json = format!(
            r#"{{"id": "{}", "name": "Dra. López", "specialty": "canina",
                "max_daily_appointments": 1, "appointments": ["{}", "{}"]}}"#,
            VeterinarianId::new(),
            AppointmentId::new(),
            AppointmentId::new(),
        );

        let err = serde_json::from_str::<Veterinarian>(&json).unwrap_err();

        assert!(err.to_string().contains("capacity is 1"));
    }
}
