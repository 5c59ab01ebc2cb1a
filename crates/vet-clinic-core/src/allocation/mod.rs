//! Appointment allocation.
//!
//! Pipeline: Status Guard → Duplicate Guard → Eligibility Filter → Least-Loaded Pick → Assign
//!
//! A veterinarian is eligible for an appointment when the specialties match
//! exactly and it still has capacity left. Allocation picks the eligible
//! candidate holding the fewest appointments; among equals the one listed
//! first wins. Nothing is mutated unless an assignment happens.

mod allocator;
mod eligibility;

pub use allocator::*;
pub use eligibility::*;

use thiserror::Error;

use crate::models::{AppointmentId, TransitionError, VeterinarianId};

/// Allocation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("No available veterinarian for specialty '{specialty}'")]
    NoAvailableVeterinarian { specialty: String },

    #[error("Veterinarian {veterinarian_id} cannot accept appointment {appointment_id}")]
    IneligibleAssignment {
        veterinarian_id: VeterinarianId,
        appointment_id: AppointmentId,
    },

    #[error("Veterinarian {veterinarian_id} already holds appointment {appointment_id}")]
    DuplicateAppointment {
        veterinarian_id: VeterinarianId,
        appointment_id: AppointmentId,
    },

    #[error("Appointment {appointment_id} is assigned but names no veterinarian")]
    UnassignedAppointment { appointment_id: AppointmentId },

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(#[from] TransitionError),
}

pub type AllocationResult<T> = Result<T, AllocationError>;
