use tracing::{debug, info};

use shared_models::{AdminCredential, AppResult, Appointment, Doctor, User};

use crate::ids::IdSource;
use crate::store::{CollectionKey, Store};

/// Roster written on first run, as (name, specialty).
pub const DEFAULT_DOCTORS: [(&str, &str); 3] = [
    ("Dr. Aisha Mensah", "Cardiology"),
    ("Dr. Kwame Boateng", "Pediatrics"),
    ("Dr. Emelia Osei", "Neurology"),
];

/// Which entries a seeding run actually wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub doctors: bool,
    pub admin_credential: bool,
    pub users: bool,
    pub appointments: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        !(self.doctors || self.admin_credential || self.users || self.appointments)
    }
}

/// Fills in default data for every entry that is absent. Existing entries are
/// never touched, so this is safe to run on every start.
pub fn seed_defaults(
    store: &Store,
    ids: &dyn IdSource,
    admin: &AdminCredential,
) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    if !store.contains(CollectionKey::Doctors) {
        let doctors: Vec<Doctor> = DEFAULT_DOCTORS
            .iter()
            .map(|(name, specialty)| Doctor {
                id: ids.next_id(),
                name: name.to_string(),
                specialty: specialty.to_string(),
            })
            .collect();
        store.save(CollectionKey::Doctors, &doctors)?;
        report.doctors = true;
    }

    if !store.contains(CollectionKey::AdminCredential) {
        store.save(CollectionKey::AdminCredential, admin)?;
        report.admin_credential = true;
    }

    if !store.contains(CollectionKey::Users) {
        store.save(CollectionKey::Users, &Vec::<User>::new())?;
        report.users = true;
    }

    if !store.contains(CollectionKey::Appointments) {
        store.save(CollectionKey::Appointments, &Vec::<Appointment>::new())?;
        report.appointments = true;
    }

    if report.is_empty() {
        debug!("Store already initialised");
    } else {
        info!("Seeded default data: {:?}", report);
    }

    Ok(report)
}
