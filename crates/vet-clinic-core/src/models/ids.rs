//! Typed identifiers.
//!
//! Every entity is keyed by a v4 UUID wrapped in its own newtype so a
//! veterinarian id can never be passed where an appointment id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// The underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Veterinarian`](super::Veterinarian).
    VeterinarianId
);
entity_id!(
    /// Identifier of an [`Appointment`](super::Appointment).
    AppointmentId
);
entity_id!(
    /// Identifier of a [`Pet`](super::Pet).
    PetId
);
entity_id!(
    /// Identifier of a [`Visit`](super::Visit).
    VisitId
);
