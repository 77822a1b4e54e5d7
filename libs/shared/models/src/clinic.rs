use serde::{Deserialize, Serialize};
use std::fmt;

use crate::RecordId;

/// Label shown for an appointment whose doctor is unset or no longer listed.
pub const ANY_DOCTOR_LABEL: &str = "Any Doctor";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: RecordId,
    pub name: String,
    pub specialty: String,
}

impl Doctor {
    /// "name • specialty", as shown in the admin panel.
    pub fn display_with_specialty(&self) -> String {
        format!("{} • {}", self.name, self.specialty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    /// Weak reference to `Doctor::id`; may dangle once the doctor is removed.
    #[serde(default)]
    pub doctor_id: Option<RecordId>,
    pub date: String,
    #[serde(default)]
    pub note: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "Scheduled"),
        }
    }
}
