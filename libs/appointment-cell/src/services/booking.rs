use std::sync::Arc;

use tracing::{debug, info};

use doctor_cell::services::DoctorService;
use shared_database::{CollectionKey, IdSource, Store};
use shared_models::{AppResult, RecordId};
use shared_utils::validation::{optional, required};

use crate::models::{Appointment, AppointmentListing, AppointmentStatus, BookAppointmentRequest};

pub struct AppointmentBookingService {
    store: Store,
    ids: Arc<dyn IdSource>,
    doctor_service: DoctorService,
}

impl AppointmentBookingService {
    pub fn new(store: Store, ids: Arc<dyn IdSource>) -> Self {
        let doctor_service = DoctorService::new(store.clone(), Arc::clone(&ids));
        Self {
            store,
            ids,
            doctor_service,
        }
    }

    /// Book a new appointment. Name, email and date are required; the doctor
    /// and note are optional and the doctor is not checked against the roster.
    pub fn book_appointment(&self, request: BookAppointmentRequest) -> AppResult<Appointment> {
        let name = required("name", &request.name)?;
        let email = required("email", &request.email)?;
        let date = required("date", &request.date)?;
        debug!("Booking appointment for {} on {}", email, date);

        let mut appointments = self.list_all();
        let appointment = Appointment {
            id: self.ids.next_id(),
            name,
            email,
            doctor_id: request.doctor_id,
            date,
            note: optional(&request.note),
            status: AppointmentStatus::Scheduled,
        };
        appointments.push(appointment.clone());
        self.store.save(CollectionKey::Appointments, &appointments)?;

        info!("Appointment {} booked for {}", appointment.id, appointment.email);
        Ok(appointment)
    }

    /// Every appointment booked under `email`, oldest first.
    pub fn list_for_patient(&self, email: &str) -> Vec<Appointment> {
        self.list_all()
            .into_iter()
            .filter(|a| a.email == email)
            .collect()
    }

    pub fn list_all(&self) -> Vec<Appointment> {
        self.store.load_or_default(CollectionKey::Appointments)
    }

    pub fn list_for_patient_with_doctors(&self, email: &str) -> Vec<AppointmentListing> {
        self.attach_doctors(self.list_for_patient(email))
    }

    pub fn list_all_with_doctors(&self) -> Vec<AppointmentListing> {
        self.attach_doctors(self.list_all())
    }

    fn attach_doctors(&self, appointments: Vec<Appointment>) -> Vec<AppointmentListing> {
        let doctors = self.doctor_service.list_doctors();
        appointments
            .into_iter()
            .map(|appointment| {
                let doctor = appointment
                    .doctor_id
                    .and_then(|id| doctors.iter().find(|d| d.id == id).cloned());
                AppointmentListing { appointment, doctor }
            })
            .collect()
    }

    /// Delete an appointment. Returns whether anything was removed; an
    /// unknown ID is not an error.
    pub fn delete_appointment(&self, appointment_id: RecordId) -> AppResult<bool> {
        let mut appointments = self.list_all();
        let before = appointments.len();
        appointments.retain(|a| a.id != appointment_id);

        if appointments.len() == before {
            debug!("No appointment with ID {} to delete", appointment_id);
            return Ok(false);
        }

        self.store.save(CollectionKey::Appointments, &appointments)?;
        info!("Appointment {} deleted", appointment_id);
        Ok(true)
    }
}
