pub mod handlers;
pub mod router;
pub mod models;
pub mod services;
pub mod views;

pub use models::*;
pub use services::*;
