//! Publications Common Library
//!
//! Shared code for the publications service including:
//! - Database models, storage trait and repository
//! - Error types and handling
//! - Configuration management
//! - Metrics

pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;

// Re-export commonly used types
pub use errors::{AppError, Result};
pub use config::AppConfig;
pub use db::{PublicationStore, Repository};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
