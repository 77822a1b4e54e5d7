use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use shared_database::{CollectionKey, IdSource, Store};
use shared_models::{AppError, AppResult, User};
use shared_utils::validation::{required, required_verbatim};

use crate::models::{LoginRequest, RegisterRequest};
use crate::services::session::PatientSession;

pub struct AccountService {
    store: Store,
    ids: Arc<dyn IdSource>,
}

impl AccountService {
    pub fn new(store: Store, ids: Arc<dyn IdSource>) -> Self {
        Self { store, ids }
    }

    pub fn users(&self) -> Vec<User> {
        self.store.load_or_default(CollectionKey::Users)
    }

    /// Create a patient account. Emails are unique (exact, case-sensitive).
    pub fn register(&self, request: RegisterRequest) -> AppResult<User> {
        let email = required("email", &request.email)?;
        required_verbatim("password", &request.password)?;
        debug!("Registering account for: {}", email);

        let mut users = self.users();
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::DuplicateEmail(email));
        }

        let user = User {
            id: self.ids.next_id(),
            email,
            password: request.password,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        self.store.save(CollectionKey::Users, &users)?;

        info!("Registered account {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Check credentials and make the matching user the session's current user.
    pub fn login(&self, session: &mut PatientSession, request: LoginRequest) -> AppResult<User> {
        let email = request.email.trim();
        debug!("Login attempt for: {}", email);

        let user = self
            .users()
            .into_iter()
            .find(|u| u.matches(email, &request.password))
            .ok_or_else(|| {
                warn!("Rejected login for: {}", email);
                AppError::InvalidCredentials
            })?;

        self.store.save(CollectionKey::CurrentUser, &user)?;
        session.set_user(user.clone());
        Ok(user)
    }

    pub fn logout(&self, session: &mut PatientSession) -> AppResult<()> {
        self.store.remove(CollectionKey::CurrentUser)?;
        session.clear();
        Ok(())
    }
}
