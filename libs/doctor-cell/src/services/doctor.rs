use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{CollectionKey, IdSource, Store};
use shared_models::{AppResult, Doctor, RecordId};
use shared_utils::validation::required;

use crate::models::CreateDoctorRequest;

pub struct DoctorService {
    store: Store,
    ids: Arc<dyn IdSource>,
}

impl DoctorService {
    pub fn new(store: Store, ids: Arc<dyn IdSource>) -> Self {
        Self { store, ids }
    }

    /// Add a doctor to the end of the roster
    pub fn add_doctor(&self, request: CreateDoctorRequest) -> AppResult<Doctor> {
        let name = required("name", &request.name)?;
        let specialty = required("specialty", &request.specialty)?;
        debug!("Adding doctor: {} ({})", name, specialty);

        let mut doctors = self.list_doctors();
        let doctor = Doctor {
            id: self.ids.next_id(),
            name,
            specialty,
        };
        doctors.push(doctor.clone());
        self.store.save(CollectionKey::Doctors, &doctors)?;

        info!("Doctor {} added with ID: {}", doctor.name, doctor.id);
        Ok(doctor)
    }

    /// Full roster in insertion order
    pub fn list_doctors(&self) -> Vec<Doctor> {
        self.store.load_or_default(CollectionKey::Doctors)
    }

    /// Remove a doctor by ID. Returns whether anything was removed; an
    /// unknown ID is not an error. Appointments keep their `doctor_id`.
    pub fn remove_doctor(&self, doctor_id: RecordId) -> AppResult<bool> {
        let mut doctors = self.list_doctors();
        let before = doctors.len();
        doctors.retain(|d| d.id != doctor_id);

        if doctors.len() == before {
            debug!("No doctor with ID {} to remove", doctor_id);
            return Ok(false);
        }

        self.store.save(CollectionKey::Doctors, &doctors)?;
        info!("Doctor {} removed", doctor_id);
        Ok(true)
    }
}
