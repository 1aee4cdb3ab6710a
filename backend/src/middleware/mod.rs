pub mod auth;
pub mod correlation_id;

pub use auth::*;
pub use correlation_id::*;
