//! Vet-Clinic Core Library
//!
//! Veterinary appointment allocation: match each appointment request to the
//! least-loaded veterinarian of the requested specialty.
//!
//! # Architecture
//!
//! ```text
//! Appointment request (Pending)
//!           │
//!           ▼
//!   ┌──────────────────────────────┐
//!   │          Allocator           │
//!   │  status guard (Pending only) │
//!   │  duplicate guard (held IDs)  │
//!   │  eligibility filter          │     NoAvailableVeterinarian
//!   │   specialty == specialty ────┼───────────────────────────▶ caller
//!   │   load < max_daily           │
//!   │  least-loaded pick           │
//!   │   (ties: first listed)       │
//!   └──────────────┬───────────────┘
//!                  │ assign
//!                  ▼
//!   Veterinarian holds the ID, appointment → Assigned
//!                  │
//!          ┌───────┴────────┐
//!          ▼                ▼
//!      Attended         Cancelled
//!          (slot released either way)
//! ```
//!
//! # Core Principle
//!
//! **A failed allocation changes nothing.** Every check runs before the first
//! mutation, on both the appointment and the veterinarians.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Veterinarian, Appointment, Pet, Visit, IDs)
//! - [`allocation`]: Eligibility, assignment and the allocator
//! - [`repository`]: Repository trait with an in-memory implementation
//! - [`service`]: Clinic use cases over the repositories
//! - [`config`]: Allocation settings

pub mod allocation;
pub mod config;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use allocation::{allocate, can_accept, AllocationError, AllocationResult, Allocator};
pub use config::{CandidateOrdering, ClinicConfig, ConfigError};
pub use models::{
    Appointment, AppointmentId, AppointmentStatus, CapacityExceeded, Pet, PetId, TransitionError,
    Veterinarian, VeterinarianId, Visit, VisitId,
};
pub use repository::{Entity, InMemoryRepository, Repository, RepositoryError};
pub use service::VeterinaryService;

// =========================================================================
// Crate Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<TransitionError> for ClinicError {
    fn from(e: TransitionError) -> Self {
        ClinicError::Allocation(AllocationError::InvalidStateTransition(e))
    }
}

impl ClinicError {
    /// True when no veterinarian could take the appointment.
    pub fn is_no_available_veterinarian(&self) -> bool {
        matches!(
            self,
            ClinicError::Allocation(AllocationError::NoAvailableVeterinarian { .. })
        )
    }

    /// True for a rejected lifecycle transition.
    pub fn is_invalid_state_transition(&self) -> bool {
        matches!(
            self,
            ClinicError::Allocation(AllocationError::InvalidStateTransition(_))
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClinicError::Repository(RepositoryError::NotFound(_)))
    }
}

pub type ClinicResult<T> = Result<T, ClinicError>;
