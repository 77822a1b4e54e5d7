use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_STORE_PATH: &str = "hospital-store.json";
pub const DEFAULT_STORE_PREFIX: &str = "hs_";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@hospital.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub store_path_explicit: bool,
    pub store_prefix: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            store_path_explicit: false,
            store_prefix: DEFAULT_STORE_PREFIX.to_string(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let store_path = env::var("HOSPITAL_STORE_PATH").ok();

        let config = Self {
            store_path_explicit: store_path.is_some(),
            store_path: store_path
                .map(PathBuf::from)
                .unwrap_or_else(|| {
                    warn!("HOSPITAL_STORE_PATH not set, using {}", DEFAULT_STORE_PATH);
                    PathBuf::from(DEFAULT_STORE_PATH)
                }),
            store_prefix: env::var("HOSPITAL_STORE_PREFIX")
                .unwrap_or_else(|_| DEFAULT_STORE_PREFIX.to_string()),
            admin_email: env::var("HOSPITAL_ADMIN_EMAIL")
                .unwrap_or_else(|_| {
                    warn!("HOSPITAL_ADMIN_EMAIL not set, using demo default");
                    DEFAULT_ADMIN_EMAIL.to_string()
                }),
            admin_password: env::var("HOSPITAL_ADMIN_PASSWORD")
                .unwrap_or_else(|_| {
                    warn!("HOSPITAL_ADMIN_PASSWORD not set, using demo default");
                    DEFAULT_ADMIN_PASSWORD.to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Store location not configured - data is written to the working directory");
        }

        config
    }

    /// Replaces the store location, e.g. from a command-line override.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self.store_path_explicit = true;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.store_path_explicit && !self.store_path.as_os_str().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_demo_admin() {
        let config = AppConfig::default();
        assert_eq!(config.admin_email, "admin@hospital.com");
        assert_eq!(config.admin_password, "admin123");
        assert_eq!(config.store_prefix, "hs_");
        assert!(!config.is_configured());
    }

    #[test]
    fn store_path_override_marks_config_as_configured() {
        let config = AppConfig::default().with_store_path("/tmp/hospital.json");
        assert!(config.is_configured());
        assert_eq!(config.store_path, PathBuf::from("/tmp/hospital.json"));
    }
}
