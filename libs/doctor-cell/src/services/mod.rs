pub mod directory;
pub mod validation;

pub use directory::{DirectoryPage, DirectoryService};
pub use validation::{build_create_payload, build_update_payload, ValidationError};
