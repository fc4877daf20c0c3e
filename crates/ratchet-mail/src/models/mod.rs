pub mod config;
pub mod delivery;
/// Data models for the mailer
pub mod email;

// Re-export commonly used types
pub use config::*;
pub use delivery::*;
pub use email::*;
