use tracing::{debug, info, warn};

use shared_database::{CollectionKey, Store};
use shared_models::{AdminCredential, AppError, AppResult};

use crate::models::LoginRequest;
use crate::services::session::AdminSession;

/// Gate for the admin panel: one fixed credential, one boolean flag.
pub struct AdminService {
    store: Store,
}

impl AdminService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// The stored credential; `None` if it is missing or unreadable, in which
    /// case no admin login succeeds.
    pub fn credential(&self) -> Option<AdminCredential> {
        self.store.load(CollectionKey::AdminCredential, None)
    }

    pub fn login(&self, session: &mut AdminSession, request: LoginRequest) -> AppResult<()> {
        let email = request.email.trim();
        debug!("Admin login attempt for: {}", email);

        let accepted = self
            .credential()
            .is_some_and(|credential| credential.matches(email, &request.password));
        if !accepted {
            warn!("Rejected admin login for: {}", email);
            return Err(AppError::InvalidCredentials);
        }

        self.store.save(CollectionKey::AdminAuth, &true)?;
        session.set_authorized(true);
        info!("Admin session started");
        Ok(())
    }

    pub fn require_authorized(&self, session: &AdminSession) -> AppResult<()> {
        if session.is_authorized() {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }

    pub fn logout(&self, session: &mut AdminSession) -> AppResult<()> {
        self.store.remove(CollectionKey::AdminAuth)?;
        session.set_authorized(false);
        Ok(())
    }
}
