//! DevOps Info Service Library
//!
//! Small HTTP service reporting service metadata, host facts and uptime.

pub mod api;
pub mod config;
pub mod daemon;
pub mod error;
pub mod info;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
