pub mod client;
pub mod endpoints;
pub mod error;
pub mod token_store;

pub use client::ApiClient;
pub use error::ApiError;
pub use token_store::{TokenStore, TOKEN_KEY};
