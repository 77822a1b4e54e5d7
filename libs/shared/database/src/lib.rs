pub mod backend;
pub mod ids;
pub mod seed;
pub mod store;

pub use backend::{JsonFileBackend, KeyValueBackend, MemoryBackend};
pub use ids::{largest_stored_id, IdSource, MonotonicIdSource, SequentialIdSource};
pub use seed::{seed_defaults, SeedReport, DEFAULT_DOCTORS};
pub use store::{CollectionKey, Store, StoreError};
