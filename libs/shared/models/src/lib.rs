pub mod auth;
pub mod clinic;
pub mod error;

pub use auth::{AdminCredential, User};
pub use clinic::{Appointment, AppointmentStatus, Doctor, ANY_DOCTOR_LABEL};
pub use error::{AppError, AppResult};

/// Identifier shared by every persisted record.
pub type RecordId = i64;
