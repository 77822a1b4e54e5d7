use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::{seed_defaults, IdSource, SequentialIdSource, Store};
use shared_models::{AdminCredential, Appointment, AppointmentStatus, Doctor, RecordId, User};

pub struct TestConfig {
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            admin_email: "admin@hospital.com".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            admin_email: self.admin_email.clone(),
            admin_password: self.admin_password.clone(),
            ..AppConfig::default()
        }
    }

    pub fn admin_credential(&self) -> AdminCredential {
        AdminCredential::new(self.admin_email.clone(), self.admin_password.clone())
    }
}

/// Memory-backed store under a unique namespace with deterministic ids.
pub struct TestStore {
    pub store: Store,
    pub ids: Arc<dyn IdSource>,
    pub test_prefix: String,
    pub config: TestConfig,
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStore {
    pub fn new() -> Self {
        let test_prefix = format!("test_{}_", Uuid::new_v4().to_string().replace('-', ""));
        Self {
            store: Store::in_memory(test_prefix.clone()),
            ids: Arc::new(SequentialIdSource::new(1_000)),
            test_prefix,
            config: TestConfig::default(),
        }
    }

    /// A store that has already been through the first-run seeding.
    pub fn seeded() -> Self {
        let test_store = Self::new();
        seed_defaults(
            &test_store.store,
            test_store.ids.as_ref(),
            &test_store.config.admin_credential(),
        )
        .expect("seeding an in-memory store cannot fail");
        test_store
    }

    pub fn store(&self) -> Store {
        self.store.clone()
    }

    pub fn ids(&self) -> Arc<dyn IdSource> {
        self.ids.clone()
    }
}

pub struct TestRecords;

impl TestRecords {
    pub fn user(id: RecordId, email: &str, password: &str) -> User {
        User {
            id,
            email: email.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn doctor(id: RecordId, name: &str, specialty: &str) -> Doctor {
        Doctor {
            id,
            name: name.to_string(),
            specialty: specialty.to_string(),
        }
    }

    pub fn appointment(id: RecordId, email: &str, doctor_id: Option<RecordId>) -> Appointment {
        Appointment {
            id,
            name: "Test Patient".to_string(),
            email: email.to_string(),
            doctor_id,
            date: "2024-01-01".to_string(),
            note: String::new(),
            status: AppointmentStatus::Scheduled,
        }
    }
}
