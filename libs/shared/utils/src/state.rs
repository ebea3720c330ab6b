use std::sync::Arc;
use std::time::Duration;

use shared_api_client::{ApiClient, ApiError};
use shared_config::AppConfig;

use crate::session::SessionRegistry;

/// Shared state handed to every cell router.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub api: ApiClient,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config)?;
        let sessions = SessionRegistry::new(Duration::from_secs(config.session_ttl_secs));
        Ok(Self {
            config: Arc::new(config),
            api,
            sessions,
        })
    }
}
