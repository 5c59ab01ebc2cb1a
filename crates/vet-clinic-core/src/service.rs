//! Clinic use cases on top of the repositories.

use tracing::{info, warn};

use crate::allocation::{AllocationError, Allocator};
use crate::config::ClinicConfig;
use crate::models::{
    Appointment, AppointmentId, AppointmentStatus, Veterinarian, VeterinarianId, Visit,
};
use crate::repository::{Repository, RepositoryError};
use crate::ClinicResult;

/// Schedules, assigns, attends and cancels appointments.
pub struct VeterinaryService<V, A>
where
    V: Repository<Veterinarian>,
    A: Repository<Appointment>,
{
    veterinarians: V,
    appointments: A,
    allocator: Allocator,
    config: ClinicConfig,
}

impl<V, A> VeterinaryService<V, A>
where
    V: Repository<Veterinarian>,
    A: Repository<Appointment>,
{
    /// Create a new service.
    pub fn new(veterinarians: V, appointments: A, config: ClinicConfig) -> Self {
        Self {
            veterinarians,
            appointments,
            allocator: Allocator::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    /// Register a veterinarian as an allocation candidate.
    pub fn register_veterinarian(&mut self, veterinarian: Veterinarian) -> ClinicResult<VeterinarianId> {
        let id = veterinarian.id;
        self.veterinarians.add(veterinarian)?;
        Ok(id)
    }

    /// Allocate a new appointment among all registered veterinarians and store it.
    ///
    /// The appointment is stored only if a veterinarian takes it.
    pub fn schedule_appointment(&mut self, mut appointment: Appointment) -> ClinicResult<VeterinarianId> {
        if self.appointments.contains(&appointment.id) {
            return Err(RepositoryError::Conflict(appointment.id.to_string()).into());
        }

        let veterinarian_id = self
            .allocator
            .allocate(&mut appointment, self.veterinarians.list_mut())?;
        self.appointments.add(appointment)?;
        Ok(veterinarian_id)
    }

    /// Assign a stored appointment to a specific veterinarian.
    pub fn assign_appointment(
        &mut self,
        appointment_id: AppointmentId,
        veterinarian_id: VeterinarianId,
    ) -> ClinicResult<&Appointment> {
        let appointment = self.appointments.get_mut(&appointment_id)?;
        let veterinarian = self.veterinarians.get_mut(&veterinarian_id)?;
        veterinarian.assign(appointment)?;
        Ok(&*appointment)
    }

    /// Mark an assigned appointment as attended and return the visit record.
    ///
    /// The visit is over, so the veterinarian's slot is freed.
    pub fn attend_appointment(
        &mut self,
        appointment_id: AppointmentId,
        reason: impl Into<String>,
    ) -> ClinicResult<Visit> {
        let appointment = self.appointments.get_mut(&appointment_id)?;
        appointment.check_transition(AppointmentStatus::Attended)?;

        let veterinarian = holder_of(&mut self.veterinarians, appointment)?;
        let veterinarian_name = veterinarian.name.clone();
        release_slot(veterinarian, appointment_id);
        appointment.attend()?;

        info!(appointment_id = %appointment_id, "appointment attended");
        Ok(Visit::new(appointment.date, reason, veterinarian_name))
    }

    /// Cancel an assigned appointment, freeing the veterinarian's slot.
    pub fn cancel_appointment(&mut self, appointment_id: AppointmentId) -> ClinicResult<()> {
        let appointment = self.appointments.get_mut(&appointment_id)?;
        appointment.check_transition(AppointmentStatus::Cancelled)?;

        let veterinarian = holder_of(&mut self.veterinarians, appointment)?;
        release_slot(veterinarian, appointment_id);
        appointment.mark_cancelled()?;

        info!(appointment_id = %appointment_id, "appointment cancelled");
        Ok(())
    }

    pub fn get_appointment(&self, appointment_id: AppointmentId) -> ClinicResult<&Appointment> {
        Ok(self.appointments.get(&appointment_id)?)
    }

    pub fn veterinarian(&self, veterinarian_id: VeterinarianId) -> ClinicResult<&Veterinarian> {
        Ok(self.veterinarians.get(&veterinarian_id)?)
    }

    pub fn list_appointments(&self) -> Vec<&Appointment> {
        self.appointments.list()
    }

    pub fn list_veterinarians(&self) -> Vec<&Veterinarian> {
        self.veterinarians.list()
    }
}

/// The veterinarian an assigned appointment points at.
fn holder_of<'v, V: Repository<Veterinarian>>(
    veterinarians: &'v mut V,
    appointment: &Appointment,
) -> ClinicResult<&'v mut Veterinarian> {
    let id = appointment
        .veterinarian_id()
        .ok_or(AllocationError::UnassignedAppointment {
            appointment_id: appointment.id,
        })?;
    Ok(veterinarians.get_mut(&id)?)
}

fn release_slot(veterinarian: &mut Veterinarian, appointment_id: AppointmentId) {
    if !veterinarian.release(appointment_id) {
        warn!(
            appointment_id = %appointment_id,
            veterinarian_id = %veterinarian.id,
            "appointment was not held by its veterinarian"
        );
    }
}
