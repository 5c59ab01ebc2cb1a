//! Repository layer for clinic entities.

mod memory;

pub use memory::*;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use thiserror::Error;

use crate::models::{
    Appointment, AppointmentId, Pet, PetId, Veterinarian, VeterinarianId,
};

/// Repository errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    Conflict(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Anything stored by identifier.
pub trait Entity {
    type Id: Copy + Eq + Hash + Debug + Display;

    fn id(&self) -> Self::Id;
}

impl Entity for Veterinarian {
    type Id = VeterinarianId;

    fn id(&self) -> VeterinarianId {
        self.id
    }
}

impl Entity for Appointment {
    type Id = AppointmentId;

    fn id(&self) -> AppointmentId {
        self.id
    }
}

impl Entity for Pet {
    type Id = PetId;

    fn id(&self) -> PetId {
        self.id
    }
}

/// Store by identifier, retrieve by identifier, enumerate all.
pub trait Repository<T: Entity> {
    /// Store a new entity. Fails with `Conflict` if the ID is taken.
    fn add(&mut self, entity: T) -> RepositoryResult<()>;

    /// Look up an entity. Fails with `NotFound` on a miss.
    fn get(&self, id: &T::Id) -> RepositoryResult<&T>;

    fn get_mut(&mut self, id: &T::Id) -> RepositoryResult<&mut T>;

    /// All entities, in insertion order.
    fn list(&self) -> Vec<&T>;

    fn list_mut(&mut self) -> Vec<&mut T>;

    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_ok()
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
