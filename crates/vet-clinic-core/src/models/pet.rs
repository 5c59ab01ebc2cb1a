//! Pet and visit history models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{PetId, VisitId};

/// A visit recorded in a pet's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    pub id: VisitId,
    /// Date of the visit
    pub date: NaiveDate,
    /// Reason for the visit (e.g., "Checkup")
    pub reason: String,
    /// Attending veterinarian
    pub veterinarian_name: String,
}

impl Visit {
    pub fn new(
        date: NaiveDate,
        reason: impl Into<String>,
        veterinarian_name: impl Into<String>,
    ) -> Self {
        Self {
            id: VisitId::new(),
            date,
            reason: reason.into(),
            veterinarian_name: veterinarian_name.into(),
        }
    }
}

/// A registered pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    /// Species; doubles as the specialty requested for its appointments
    pub species: String,
    pub owner_name: String,
    /// Visits in the order they were recorded
    pub visits: Vec<Visit>,
}

impl Pet {
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        owner_name: impl Into<String>,
    ) -> Self {
        Self {
            id: PetId::new(),
            name: name.into(),
            species: species.into(),
            owner_name: owner_name.into(),
            visits: Vec::new(),
        }
    }

    /// Append a visit to the history.
    pub fn add_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
    }

    /// Most recent visit, if any.
    pub fn last_visit(&self) -> Option<&Visit> {
        self.visits.last()
    }
}
