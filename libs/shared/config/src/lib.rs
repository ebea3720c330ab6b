use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "https://dev.clinibooth.com";
pub const DEFAULT_TOKEN_STORE: &str = ".clinibooth/storage.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SESSION_TTL_SECS: u64 = 8 * 60 * 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_store_path: PathBuf,
    pub admin_email: String,
    pub admin_password: String,
    pub default_doctor_password: String,
    pub http_timeout_secs: Option<u64>,
    pub session_ttl_secs: u64,
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            token_store_path: PathBuf::from(DEFAULT_TOKEN_STORE),
            admin_email: "admin@clinibooth.com".to_string(),
            admin_password: "root".to_string(),
            default_doctor_password: "root".to_string(),
            http_timeout_secs: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            api_base_url: env::var("CLINIBOOTH_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| {
                    warn!("CLINIBOOTH_API_URL not set, using {}", DEFAULT_API_URL);
                    defaults.api_base_url
                }),
            token_store_path: env::var("CLINIBOOTH_TOKEN_STORE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("CLINIBOOTH_TOKEN_STORE not set, using {}", DEFAULT_TOKEN_STORE);
                    defaults.token_store_path
                }),
            admin_email: env::var("CLINIBOOTH_ADMIN_EMAIL")
                .unwrap_or_else(|_| {
                    warn!("CLINIBOOTH_ADMIN_EMAIL not set, using default admin account");
                    defaults.admin_email
                }),
            admin_password: env::var("CLINIBOOTH_ADMIN_PASSWORD")
                .unwrap_or_else(|_| {
                    warn!("CLINIBOOTH_ADMIN_PASSWORD not set, using default admin password");
                    defaults.admin_password
                }),
            default_doctor_password: env::var("CLINIBOOTH_DEFAULT_DOCTOR_PASSWORD")
                .unwrap_or(defaults.default_doctor_password),
            http_timeout_secs: match env::var("CLINIBOOTH_HTTP_TIMEOUT_SECS") {
                Ok(raw) => match raw.trim().parse::<u64>() {
                    Ok(secs) => Some(secs),
                    Err(_) => {
                        warn!("CLINIBOOTH_HTTP_TIMEOUT_SECS is not a number ({}), ignoring", raw);
                        None
                    }
                },
                Err(_) => None,
            },
            session_ttl_secs: match env::var("CLINIBOOTH_SESSION_TTL_SECS") {
                Ok(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                    warn!("CLINIBOOTH_SESSION_TTL_SECS is not a number ({}), using {}", raw, DEFAULT_SESSION_TTL_SECS);
                    DEFAULT_SESSION_TTL_SECS
                }),
                Err(_) => defaults.session_ttl_secs,
            },
            bind_addr: env::var("CLINIBOOTH_BIND_ADDR")
                .unwrap_or(defaults.bind_addr),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - API base URL is empty");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_dev_api() {
        let config = AppConfig::default();

        assert_eq!(config.api_base_url, "https://dev.clinibooth.com");
        assert_eq!(config.admin_email, "admin@clinibooth.com");
        assert!(config.http_timeout_secs.is_none());
        assert_eq!(config.session_ttl_secs, 28_800);
        assert!(config.is_configured());
    }
}
