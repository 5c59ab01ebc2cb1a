//! Domain models for the clinic.

mod appointment;
mod ids;
mod pet;
mod veterinarian;

pub use appointment::*;
pub use ids::*;
pub use pet::*;
pub use veterinarian::*;
