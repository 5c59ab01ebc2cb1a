//! Eligibility and single-veterinarian assignment.

use tracing::debug;

use super::{AllocationError, AllocationResult};
use crate::models::{Appointment, AppointmentStatus, Veterinarian};

/// Whether `veterinarian` can take `appointment` right now.
pub fn can_accept(veterinarian: &Veterinarian, appointment: &Appointment) -> bool {
    veterinarian.can_accept(appointment)
}

impl Veterinarian {
    /// Exact, case-sensitive specialty match and at least one free slot.
    pub fn can_accept(&self, appointment: &Appointment) -> bool {
        self.specialty() == appointment.specialty
            && self.load() < self.max_daily_appointments() as usize
    }

    /// Assign a pending appointment to this veterinarian.
    ///
    /// On success the appointment is held here and moves to `Assigned`.
    /// On failure neither side changes.
    pub fn assign(&mut self, appointment: &mut Appointment) -> AllocationResult<()> {
        appointment.check_transition(AppointmentStatus::Assigned)?;

        if self.has_appointment(appointment.id) {
            return Err(AllocationError::DuplicateAppointment {
                veterinarian_id: self.id,
                appointment_id: appointment.id,
            });
        }

        if !self.can_accept(appointment) {
            return Err(AllocationError::IneligibleAssignment {
                veterinarian_id: self.id,
                appointment_id: appointment.id,
            });
        }

        appointment.mark_assigned(self.id)?;
        self.hold(appointment.id);

        debug!(
            veterinarian_id = %self.id,
            appointment_id = %appointment.id,
            load = self.load(),
            capacity = self.max_daily_appointments(),
            "appointment assigned"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(specialty: &str) -> Appointment {
        Appointment::new(
            "Marcos",
            "Firulais",
            specialty,
            NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(),
        )
    }

    #[test]
    fn test_can_accept_matching_specialty() {
        let vet = Veterinarian::new("Dra. López", "canina", 3);
        assert!(can_accept(&vet, &request("canina")));
        assert!(!can_accept(&vet, &request("felina")));
    }

    #[test]
    fn test_specialty_match_is_case_sensitive() {
        let vet = Veterinarian::new("Dra. López", "canina", 3);
        assert!(!vet.can_accept(&request("Canina")));
    }

    #[test]
    fn test_can_accept_is_stable_without_mutation() {
        let vet = Veterinarian::new("Dra. López", "canina", 1);
        let appointment = request("canina");
        let first = vet.can_accept(&appointment);
        for _ in 0..5 {
            assert_eq!(vet.can_accept(&appointment), first);
        }
    }

    #[test]
    fn test_assigning_to_a_vet_reduces_available_slots() {
        let mut vet = Veterinarian::new("Dra. López", "canina", 3);
        let mut appointment = request("canina");

        vet.assign(&mut appointment).unwrap();

        assert_eq!(vet.load(), 1);
        assert_eq!(vet.remaining_capacity(), 2);
        assert!(vet.has_appointment(appointment.id));
        assert_eq!(appointment.status(), AppointmentStatus::Assigned);
        assert_eq!(appointment.veterinarian_id(), Some(vet.id));
    }

    #[test]
    fn test_assigning_specialty_mismatch_fails() {
        let mut vet = Veterinarian::new("Dra. López", "canina", 3);
        let mut appointment = request("felina");

        let err = vet.assign(&mut appointment).unwrap_err();

        assert!(matches!(err, AllocationError::IneligibleAssignment { .. }));
        assert_eq!(vet.load(), 0);
        assert!(appointment.is_pending());
    }

    #[test]
    fn test_assigning_to_a_full_vet_fails() {
        let mut vet = Veterinarian::new("Dra. López", "canina", 1);
        let mut first = request("canina");
        let mut second = request("canina");

        vet.assign(&mut first).unwrap();
        let err = vet.assign(&mut second).unwrap_err();

        assert!(matches!(err, AllocationError::IneligibleAssignment { .. }));
        assert_eq!(vet.load(), 1);
        assert!(second.is_pending());
    }

    #[test]
    fn test_identical_requests_count_separately() {
        let mut vet = Veterinarian::new("Dra. López", "canina", 3);
        let mut first = request("canina");
        let mut second = request("canina");

        vet.assign(&mut first).unwrap();
        vet.assign(&mut second).unwrap();

        assert_eq!(vet.load(), 2);
    }

    #[test]
    fn test_reassigning_an_assigned_appointment_fails() {
        let mut vet = Veterinarian::new("Dra. López", "canina", 3);
        let mut other = Veterinarian::new("Dr. Ramírez", "canina", 3);
        let mut appointment = request("canina");

        vet.assign(&mut appointment).unwrap();
        let err = other.assign(&mut appointment).unwrap_err();

        match err {
            AllocationError::InvalidStateTransition(transition) => {
                assert_eq!(transition.from, AppointmentStatus::Assigned);
                assert_eq!(transition.to, AppointmentStatus::Assigned);
            }
            e => panic!("unexpected error: {e:?}"),
        }
        assert_eq!(appointment.status(), AppointmentStatus::Assigned);
        assert_eq!(appointment.veterinarian_id(), Some(vet.id));
        assert_eq!(other.load(), 0);
    }

    #[test]
    fn test_pending_copy_of_held_appointment_is_rejected() {
        let mut vet = Veterinarian::new("Dra. López", "canina", 3);
        let mut appointment = request("canina");
        let mut copy = appointment.clone();

        vet.assign(&mut appointment).unwrap();
        let err = vet.assign(&mut copy).unwrap_err();

        assert!(matches!(err, AllocationError::DuplicateAppointment { .. }));
        assert_eq!(vet.load(), 1);
        assert!(copy.is_pending());
    }
}
