use shared_database::{CollectionKey, Store};
use shared_models::{AppError, AppResult, User};

/// The logged-in patient, held by whoever drives the UI.
///
/// The services mirror it into the store so a later run can pick it up again
/// with [`PatientSession::restore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientSession {
    current_user: Option<User>,
}

impl PatientSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restore(store: &Store) -> Self {
        Self {
            current_user: store.load(CollectionKey::CurrentUser, None),
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn require_user(&self) -> AppResult<&User> {
        self.current_user.as_ref().ok_or(AppError::NotLoggedIn)
    }

    pub(crate) fn set_user(&mut self, user: User) {
        self.current_user = Some(user);
    }

    pub(crate) fn clear(&mut self) {
        self.current_user = None;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminSession {
    authorized: bool,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the persisted flag; anything missing or unreadable means "no".
    pub fn restore(store: &Store) -> Self {
        Self {
            authorized: store.load(CollectionKey::AdminAuth, false),
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    pub(crate) fn set_authorized(&mut self, authorized: bool) {
        self.authorized = authorized;
    }
}
