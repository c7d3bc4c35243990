//! Utility modules for the info service.

pub mod logger;
