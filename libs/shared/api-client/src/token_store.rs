//! Persisted client storage holding the API bearer token.
//!
//! The storage file is a flat JSON object; the token lives under
//! [`TOKEN_KEY`]. A missing file, a missing key or a blank value all mean
//! "not signed in to the API".

use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ApiError;

pub const TOKEN_KEY: &str = "access_token";

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_map(&self) -> Result<Map<String, Value>, ApiError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Map::new()),
            Ok(raw) => match serde_json::from_str::<Value>(&raw)? {
                Value::Object(map) => Ok(map),
                _ => Ok(Map::new()),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn load(&self) -> Result<Option<String>, ApiError> {
        let map = self.read_map().await?;
        let token = map
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        debug!("Token store {}: token present = {}", self.path.display(), token.is_some());
        Ok(token)
    }
}
