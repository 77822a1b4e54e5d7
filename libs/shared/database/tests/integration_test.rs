use std::sync::Arc;

use tempfile::tempdir;

use shared_config::AppConfig;
use shared_database::{
    largest_stored_id, seed_defaults, CollectionKey, JsonFileBackend, SequentialIdSource, Store,
    DEFAULT_DOCTORS,
};
use shared_models::{AdminCredential, Appointment, Doctor, User};

fn default_admin() -> AdminCredential {
    AdminCredential::new("admin@hospital.com", "admin123")
}

#[test]
fn test_seed_populates_empty_store() {
    let store = Store::in_memory("hs_");
    let ids = SequentialIdSource::new(100);

    let report = seed_defaults(&store, &ids, &default_admin()).unwrap();

    assert!(report.doctors && report.admin_credential && report.users && report.appointments);

    let doctors: Vec<Doctor> = store.load_or_default(CollectionKey::Doctors);
    assert_eq!(doctors.len(), DEFAULT_DOCTORS.len());
    assert_eq!(doctors[0].name, "Dr. Aisha Mensah");
    assert_eq!(doctors[2].specialty, "Neurology");
    assert_eq!(doctors.iter().map(|d| d.id).collect::<Vec<_>>(), vec![100, 101, 102]);

    let admin: Option<AdminCredential> = store.load(CollectionKey::AdminCredential, None);
    assert_eq!(admin, Some(default_admin()));
    assert!(store.load_or_default::<Vec<User>>(CollectionKey::Users).is_empty());
    assert!(store.load_or_default::<Vec<Appointment>>(CollectionKey::Appointments).is_empty());
}

#[test]
fn test_seed_twice_is_idempotent() {
    let store = Store::in_memory("hs_");
    let ids = SequentialIdSource::default();

    seed_defaults(&store, &ids, &default_admin()).unwrap();
    let first: Vec<Doctor> = store.load_or_default(CollectionKey::Doctors);

    let report = seed_defaults(&store, &ids, &default_admin()).unwrap();
    let second: Vec<Doctor> = store.load_or_default(CollectionKey::Doctors);

    assert!(report.is_empty());
    assert_eq!(first.len(), second.len());
    assert_eq!(first, second);
}

#[test]
fn test_seed_never_overwrites_existing_data() {
    let store = Store::in_memory("hs_");
    let ids = SequentialIdSource::default();

    let roster = vec![Doctor {
        id: 9,
        name: "Dr. Only".to_string(),
        specialty: "Surgery".to_string(),
    }];
    store.save(CollectionKey::Doctors, &roster).unwrap();
    store
        .save(CollectionKey::AdminCredential, &AdminCredential::new("boss@x.com", "s3cret"))
        .unwrap();

    let report = seed_defaults(&store, &ids, &default_admin()).unwrap();

    assert!(!report.doctors);
    assert!(!report.admin_credential);
    assert_eq!(store.load_or_default::<Vec<Doctor>>(CollectionKey::Doctors), roster);

    let admin: Option<AdminCredential> = store.load(CollectionKey::AdminCredential, None);
    assert_eq!(admin.unwrap().email, "boss@x.com");
}

#[test]
fn test_seeded_file_store_persists_across_opens() {
    let dir = tempdir().unwrap();
    let config = AppConfig::default().with_store_path(dir.path().join("hospital.json"));
    let ids = SequentialIdSource::default();

    {
        let store = Store::open(&config).unwrap();
        seed_defaults(&store, &ids, &default_admin()).unwrap();
    }

    let reopened = Store::open(&config).unwrap();
    let report = seed_defaults(&reopened, &ids, &default_admin()).unwrap();
    assert!(report.is_empty());
    assert_eq!(reopened.load_or_default::<Vec<Doctor>>(CollectionKey::Doctors).len(), 3);
}

#[test]
fn test_stores_with_different_prefixes_do_not_share_entries() {
    let dir = tempdir().unwrap();
    let backend = Arc::new(JsonFileBackend::open(dir.path().join("shared.json")).unwrap());
    let ids = SequentialIdSource::default();

    let first = Store::new(backend.clone(), "a_");
    let second = Store::new(backend, "b_");

    seed_defaults(&first, &ids, &default_admin()).unwrap();

    assert!(first.contains(CollectionKey::Doctors));
    assert!(!second.contains(CollectionKey::Doctors));
}

#[test]
fn test_largest_stored_id_spans_all_collections() {
    let store = Store::in_memory("hs_");
    assert_eq!(largest_stored_id(&store), 0);

    let ids = SequentialIdSource::new(10);
    seed_defaults(&store, &ids, &default_admin()).unwrap();
    assert_eq!(largest_stored_id(&store), 12);

    let appointment: Appointment = serde_json::from_str(
        r#"{"id":500,"name":"Jane","email":"j@x.com","date":"2024-01-01","status":"Scheduled"}"#,
    )
    .unwrap();
    store.save(CollectionKey::Appointments, &vec![appointment]).unwrap();

    assert_eq!(largest_stored_id(&store), 500);
}
