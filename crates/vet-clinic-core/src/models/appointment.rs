//! Appointment models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::{AppointmentId, PetId, VeterinarianId};
use super::pet::Pet;

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Requested, waiting for a veterinarian
    Pending,
    /// Held by a veterinarian
    Assigned,
    /// The visit took place
    Attended,
    /// Released by the veterinarian before the visit
    Cancelled,
}

impl AppointmentStatus {
    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!(
            (self, next),
            (Pending, Assigned) | (Assigned, Attended) | (Assigned, Cancelled)
        )
    }

    /// Terminal states accept no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, AppointmentStatus::Attended | AppointmentStatus::Cancelled)
    }

    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Assigned => "assigned",
            AppointmentStatus::Attended => "attended",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected lifecycle transition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("appointment {appointment_id} cannot move from {from} to {to}")]
pub struct TransitionError {
    pub appointment_id: AppointmentId,
    pub from: AppointmentStatus,
    pub to: AppointmentStatus,
}

/// An appointment request and its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Unique appointment ID
    pub id: AppointmentId,
    /// Client (owner) name
    pub client_name: String,
    /// Pet name
    pub pet_name: String,
    /// Registered pet, when the request was made for one
    pub pet_id: Option<PetId>,
    /// Requested specialty or species (e.g., "canina", "felina")
    pub specialty: String,
    /// Requested date, stored as given
    pub date: NaiveDate,
    status: AppointmentStatus,
    veterinarian_id: Option<VeterinarianId>,
    /// Creation timestamp
    pub created_at: String,
}

impl Appointment {
    /// Create a pending appointment request.
    pub fn new(
        client_name: impl Into<String>,
        pet_name: impl Into<String>,
        specialty: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::with_id(AppointmentId::new(), client_name, pet_name, specialty, date)
    }

    /// Create a pending appointment request with a caller-supplied ID.
    pub fn with_id(
        id: AppointmentId,
        client_name: impl Into<String>,
        pet_name: impl Into<String>,
        specialty: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            client_name: client_name.into(),
            pet_name: pet_name.into(),
            pet_id: None,
            specialty: specialty.into(),
            date,
            status: AppointmentStatus::Pending,
            veterinarian_id: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Request an appointment for a registered pet.
    ///
    /// The pet's species is the requested specialty and its owner is the client.
    pub fn for_pet(pet: &Pet, date: NaiveDate) -> Self {
        let mut appointment = Self::new(
            pet.owner_name.clone(),
            pet.name.clone(),
            pet.species.clone(),
            date,
        );
        appointment.pet_id = Some(pet.id);
        appointment
    }

    /// Current lifecycle status.
    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    /// Veterinarian holding this appointment, once assigned.
    pub fn veterinarian_id(&self) -> Option<VeterinarianId> {
        self.veterinarian_id
    }

    pub fn is_pending(&self) -> bool {
        self.status == AppointmentStatus::Pending
    }

    /// Fail unless the appointment may move to `next`. Never mutates.
    pub fn check_transition(&self, next: AppointmentStatus) -> Result<(), TransitionError> {
        if self.status.can_transition_to(next) {
            Ok(())
        } else {
            Err(TransitionError {
                appointment_id: self.id,
                from: self.status,
                to: next,
            })
        }
    }

    /// `Pending → Assigned`, recording the veterinarian.
    pub(crate) fn mark_assigned(
        &mut self,
        veterinarian_id: VeterinarianId,
    ) -> Result<(), TransitionError> {
        self.check_transition(AppointmentStatus::Assigned)?;
        self.status = AppointmentStatus::Assigned;
        self.veterinarian_id = Some(veterinarian_id);
        Ok(())
    }

    /// `Assigned → Attended`. Freeing the slot is up to the caller; see
    /// [`VeterinaryService::attend_appointment`](crate::VeterinaryService::attend_appointment).
    pub fn attend(&mut self) -> Result<(), TransitionError> {
        self.check_transition(AppointmentStatus::Attended)?;
        self.status = AppointmentStatus::Attended;
        Ok(())
    }

    /// `Assigned → Cancelled`. The veterinarian back-reference is kept for history.
    pub(crate) fn mark_cancelled(&mut self) -> Result<(), TransitionError> {
        self.check_transition(AppointmentStatus::Cancelled)?;
        self.status = AppointmentStatus::Cancelled;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 18).unwrap()
    }

    #[test]
    fn test_new_appointment_is_pending() {
        let appointment = Appointment::new("Marcos", "Firulais", "canina", date());
        assert_eq!(appointment.status(), AppointmentStatus::Pending);
        assert!(appointment.is_pending());
        assert!(appointment.veterinarian_id().is_none());
        assert!(appointment.pet_id.is_none());
    }

    #[test]
    fn test_for_pet_uses_species_and_owner() {
        let pet = Pet::new("Mittens", "felina", "Ana");
        let appointment = Appointment::for_pet(&pet, date());

        assert_eq!(appointment.specialty, "felina");
        assert_eq!(appointment.client_name, "Ana");
        assert_eq!(appointment.pet_name, "Mittens");
        assert_eq!(appointment.pet_id, Some(pet.id));
    }

    #[test]
    fn test_lifecycle_transitions() {
        use AppointmentStatus::*;

        assert!(Pending.can_transition_to(Assigned));
        assert!(Assigned.can_transition_to(Attended));
        assert!(Assigned.can_transition_to(Cancelled));

        assert!(!Pending.can_transition_to(Attended));
        assert!(!Assigned.can_transition_to(Pending));
        assert!(!Attended.can_transition_to(Assigned));
        assert!(!Cancelled.can_transition_to(Assigned));

        assert!(Attended.is_terminal());
        assert!(Cancelled.is_terminal());
        assert!(!Assigned.is_terminal());
    }

    #[test]
    fn test_attend_requires_assignment() {
        let mut appointment = Appointment::new("Marcos", "Firulais", "canina", date());

        let err = appointment.attend().unwrap_err();
        assert_eq!(err.from, AppointmentStatus::Pending);
        assert_eq!(err.to, AppointmentStatus::Attended);
        assert_eq!(appointment.status(), AppointmentStatus::Pending);

        appointment.mark_assigned(VeterinarianId::new()).unwrap();
        appointment.attend().unwrap();
        assert_eq!(appointment.status(), AppointmentStatus::Attended);
    }

    #[test]
    fn test_transition_error_message() {
        let appointment = Appointment::new("Marcos", "Firulais", "canina", date());
        let err = appointment
            .check_transition(AppointmentStatus::Cancelled)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("appointment {} cannot move from pending to cancelled", appointment.id)
        );
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&AppointmentStatus::Assigned).unwrap();
        assert_eq!(json, "\"assigned\"");
    }
}
