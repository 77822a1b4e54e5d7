use std::sync::Arc;

use appointment_cell::services::AppointmentBookingService;
use auth_cell::services::{AccountService, AdminService, AdminSession, PatientSession};
use doctor_cell::services::DoctorService;
use shared_config::AppConfig;
use shared_database::{
    largest_stored_id, seed_defaults, IdSource, MonotonicIdSource, SeedReport, Store,
};
use shared_models::{AdminCredential, AppResult};

/// Every service the portal talks to, over one shared store.
pub struct AppRegistry {
    store: Store,
    ids: Arc<dyn IdSource>,
    default_admin: AdminCredential,
    accounts: AccountService,
    admin: AdminService,
    doctors: DoctorService,
    appointments: AppointmentBookingService,
}

impl AppRegistry {
    pub fn new(store: Store, ids: Arc<dyn IdSource>, config: &AppConfig) -> Self {
        let default_admin =
            AdminCredential::new(config.admin_email.clone(), config.admin_password.clone());
        Self {
            accounts: AccountService::new(store.clone(), ids.clone()),
            admin: AdminService::new(store.clone()),
            doctors: DoctorService::new(store.clone(), ids.clone()),
            appointments: AppointmentBookingService::new(store.clone(), ids.clone()),
            store,
            ids,
            default_admin,
        }
    }

    /// Opens the configured store file and runs first-start seeding.
    pub fn open(config: &AppConfig) -> anyhow::Result<Self> {
        let store = Store::open(config)?;
        let ids = MonotonicIdSource::starting_after(largest_stored_id(&store));
        let registry = Self::new(store, Arc::new(ids), config);
        registry.seed()?;
        Ok(registry)
    }

    pub fn seed(&self) -> AppResult<SeedReport> {
        seed_defaults(&self.store, self.ids.as_ref(), &self.default_admin)
    }

    pub fn patient_session(&self) -> PatientSession {
        PatientSession::restore(&self.store)
    }

    pub fn admin_session(&self) -> AdminSession {
        AdminSession::restore(&self.store)
    }

    pub fn accounts(&self) -> &AccountService {
        &self.accounts
    }

    pub fn admin(&self) -> &AdminService {
        &self.admin
    }

    pub fn doctors(&self) -> &DoctorService {
        &self.doctors
    }

    pub fn appointments(&self) -> &AppointmentBookingService {
        &self.appointments
    }
}
