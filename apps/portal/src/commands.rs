use clap::Subcommand;
use tracing::debug;

use appointment_cell::models::BookAppointmentRequest;
use auth_cell::models::{LoginRequest, RegisterRequest};
use doctor_cell::models::CreateDoctorRequest;
use shared_models::{AppResult, RecordId};

use crate::registry::AppRegistry;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a patient account
    Register { email: String, password: String },
    /// Log in as a patient
    Login { email: String, password: String },
    /// End the patient session
    Logout,
    /// Book an appointment
    Book {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Doctor ID as shown by `doctors`; omit for any doctor
        #[arg(long)]
        doctor: Option<RecordId>,
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Show the logged-in patient's appointments
    Portal,
    /// Log in to the admin panel
    AdminLogin { email: String, password: String },
    /// End the admin session
    AdminLogout,
    /// List every appointment (admin)
    Appointments,
    /// Delete an appointment (admin)
    DeleteAppointment {
        id: RecordId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List doctors
    Doctors,
    /// Add a doctor (admin)
    AddDoctor { name: String, specialty: String },
    /// Remove a doctor (admin)
    RemoveDoctor {
        id: RecordId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Runs one command and returns the lines to print.
pub fn execute(registry: &AppRegistry, command: Command) -> AppResult<Vec<String>> {
    debug!("Executing {:?}", command);

    match command {
        Command::Register { email, password } => {
            registry.accounts().register(RegisterRequest::new(email, password))?;
            Ok(vec!["Registration successful! You can log in now.".to_string()])
        }
        Command::Login { email, password } => {
            let mut session = registry.patient_session();
            registry.accounts().login(&mut session, LoginRequest::new(email, password))?;
            Ok(vec!["Login successful!".to_string()])
        }
        Command::Logout => {
            let mut session = registry.patient_session();
            registry.accounts().logout(&mut session)?;
            Ok(vec!["Logged out.".to_string()])
        }
        Command::Book { name, email, doctor, date, note } => {
            registry.appointments().book_appointment(BookAppointmentRequest {
                name,
                email,
                doctor_id: doctor,
                date,
                note,
            })?;
            Ok(vec!["Appointment booked!".to_string()])
        }
        Command::Portal => {
            let session = registry.patient_session();
            let user = session.require_user()?;
            let listings = registry.appointments().list_for_patient_with_doctors(&user.email);

            let mut lines = vec![format!("Logged in as {}", user.email)];
            if listings.is_empty() {
                lines.push("No appointments found".to_string());
            }
            for listing in listings {
                lines.push(format!(
                    "{} — {} with {} [{}]",
                    listing.appointment.date,
                    listing.appointment.name,
                    listing.doctor_label(),
                    listing.appointment.status,
                ));
            }
            Ok(lines)
        }
        Command::AdminLogin { email, password } => {
            let mut session = registry.admin_session();
            registry.admin().login(&mut session, LoginRequest::new(email, password))?;
            Ok(vec!["Admin login successful!".to_string()])
        }
        Command::AdminLogout => {
            let mut session = registry.admin_session();
            registry.admin().logout(&mut session)?;
            Ok(vec!["Admin logged out.".to_string()])
        }
        Command::Appointments => {
            registry.admin().require_authorized(&registry.admin_session())?;
            let listings = registry.appointments().list_all_with_doctors();

            if listings.is_empty() {
                return Ok(vec!["No appointments yet".to_string()]);
            }
            Ok(listings
                .into_iter()
                .map(|listing| {
                    format!(
                        "#{} {} — {} | {} | {}",
                        listing.appointment.id,
                        listing.appointment.name,
                        listing.appointment.email,
                        listing.admin_doctor_label(),
                        listing.appointment.date,
                    )
                })
                .collect())
        }
        Command::DeleteAppointment { id, yes } => {
            registry.admin().require_authorized(&registry.admin_session())?;
            if !yes {
                return Ok(vec!["Delete appointment? Re-run with --yes to confirm.".to_string()]);
            }
            registry.appointments().delete_appointment(id)?;
            Ok(vec!["Appointment deleted.".to_string()])
        }
        Command::Doctors => {
            let doctors = registry.doctors().list_doctors();
            if doctors.is_empty() {
                return Ok(vec!["No doctors yet".to_string()]);
            }
            Ok(doctors
                .iter()
                .map(|d| format!("#{} {} — {}", d.id, d.name, d.specialty))
                .collect())
        }
        Command::AddDoctor { name, specialty } => {
            registry.admin().require_authorized(&registry.admin_session())?;
            registry.doctors().add_doctor(CreateDoctorRequest::new(name, specialty))?;
            Ok(vec!["Doctor added".to_string()])
        }
        Command::RemoveDoctor { id, yes } => {
            registry.admin().require_authorized(&registry.admin_session())?;
            if !yes {
                return Ok(vec!["Remove doctor? Re-run with --yes to confirm.".to_string()]);
            }
            registry.doctors().remove_doctor(id)?;
            Ok(vec!["Doctor removed".to_string()])
        }
    }
}
