//! Greedy least-loaded allocation.

use tracing::{debug, info, warn};

use super::{AllocationError, AllocationResult};
use crate::config::{CandidateOrdering, ClinicConfig};
use crate::models::{Appointment, AppointmentStatus, Veterinarian, VeterinarianId};

/// Allocate with the default configuration (least loaded, input-order ties).
pub fn allocate<'a, I>(appointment: &mut Appointment, candidates: I) -> AllocationResult<VeterinarianId>
where
    I: IntoIterator<Item = &'a mut Veterinarian>,
{
    Allocator::default().allocate(appointment, candidates)
}

/// Picks a veterinarian for each appointment request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Allocator {
    ordering: CandidateOrdering,
}

impl Allocator {
    /// Create an allocator from the clinic configuration.
    pub fn new(config: &ClinicConfig) -> Self {
        Self::with_ordering(config.candidate_ordering)
    }

    pub fn with_ordering(ordering: CandidateOrdering) -> Self {
        Self { ordering }
    }

    pub fn ordering(&self) -> CandidateOrdering {
        self.ordering
    }

    /// Index of the candidate that would receive `appointment`, if any.
    ///
    /// Ineligible candidates (wrong specialty or full) are skipped in the same
    /// pass that ranks the rest, so a full veterinarian never wins on load.
    pub fn select<'v, I>(&self, appointment: &Appointment, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'v Veterinarian>,
    {
        let mut eligible = candidates
            .into_iter()
            .enumerate()
            .filter(|(_, vet)| vet.can_accept(appointment));

        match self.ordering {
            // min_by_key keeps the first of several equal minimums.
            CandidateOrdering::LeastLoaded => eligible
                .min_by_key(|(_, vet)| vet.load())
                .map(|(index, _)| index),
            CandidateOrdering::InputOrder => eligible.next().map(|(index, _)| index),
        }
    }

    /// Assign `appointment` to the selected candidate and return its ID.
    ///
    /// Fails without touching any veterinarian when the appointment is not
    /// pending, when a candidate already holds its ID, or when no candidate
    /// is eligible.
    pub fn allocate<'a, I>(
        &self,
        appointment: &mut Appointment,
        candidates: I,
    ) -> AllocationResult<VeterinarianId>
    where
        I: IntoIterator<Item = &'a mut Veterinarian>,
    {
        appointment.check_transition(AppointmentStatus::Assigned)?;

        let mut candidates: Vec<&mut Veterinarian> = candidates.into_iter().collect();
        debug!(
            appointment_id = %appointment.id,
            specialty = %appointment.specialty,
            candidates = candidates.len(),
            ordering = ?self.ordering,
            "allocating appointment"
        );

        // An appointment is held by at most one veterinarian.
        if let Some(holder) = candidates
            .iter()
            .find(|vet| vet.has_appointment(appointment.id))
        {
            return Err(AllocationError::DuplicateAppointment {
                veterinarian_id: holder.id,
                appointment_id: appointment.id,
            });
        }

        let Some(index) = self.select(appointment, candidates.iter().map(|vet| &**vet)) else {
            warn!(
                appointment_id = %appointment.id,
                specialty = %appointment.specialty,
                "no available veterinarian"
            );
            return Err(AllocationError::NoAvailableVeterinarian {
                specialty: appointment.specialty.clone(),
            });
        };

        let chosen = &mut *candidates[index];
        chosen.assign(appointment)?;

        info!(
            appointment_id = %appointment.id,
            veterinarian_id = %chosen.id,
            veterinarian = %chosen.name,
            load = chosen.load(),
            "appointment allocated"
        );
        Ok(chosen.id)
    }
}
