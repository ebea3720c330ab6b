use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "clinibooth_session";

/// In-memory set of signed-in admin sessions. Each session lives for a fixed
/// time from login; expired entries are dropped on the next login.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Instant>>>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    fn expired(&self, created: Instant) -> bool {
        created.elapsed() >= self.ttl
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, created| !self.expired(*created));
        if sessions.len() < before {
            debug!("Dropped {} expired admin sessions", before - sessions.len());
        }

        sessions.insert(id, Instant::now());
        id
    }

    pub async fn is_active(&self, raw: &str) -> bool {
        let Ok(id) = Uuid::parse_str(raw) else {
            return false;
        };
        match self.sessions.read().await.get(&id) {
            Some(created) => !self.expired(*created),
            None => false,
        }
    }

    pub async fn revoke(&self, raw: &str) -> bool {
        match Uuid::parse_str(raw) {
            Ok(id) => self.sessions.write().await.remove(&id).is_some(),
            Err(_) => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
