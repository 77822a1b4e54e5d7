pub mod account;
pub mod admin;
pub mod session;

pub use account::AccountService;
pub use admin::AdminService;
pub use session::{AdminSession, PatientSession};
