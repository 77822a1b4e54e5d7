use serde::{Deserialize, Serialize};

use shared_models::{Doctor, RecordId, ANY_DOCTOR_LABEL};

pub use shared_models::{Appointment, AppointmentStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub name: String,
    pub email: String,
    pub doctor_id: Option<RecordId>,
    pub date: String,
    pub note: String,
}

/// An appointment paired with its doctor, if that doctor is still listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentListing {
    pub appointment: Appointment,
    pub doctor: Option<Doctor>,
}

impl AppointmentListing {
    /// Label for the patient portal: the doctor's name.
    pub fn doctor_label(&self) -> String {
        self.doctor
            .as_ref()
            .map(|d| d.name.clone())
            .unwrap_or_else(|| ANY_DOCTOR_LABEL.to_string())
    }

    /// Label for the admin panel: name and specialty.
    pub fn admin_doctor_label(&self) -> String {
        self.doctor
            .as_ref()
            .map(Doctor::display_with_specialty)
            .unwrap_or_else(|| ANY_DOCTOR_LABEL.to_string())
    }
}
