//! Domain layer for Folio.
//!
//! Value objects for repositories, the public profile and per-project gains,
//! the traits remote sources implement, and the pure merge/reconcile logic.

pub mod config;
pub mod error;
pub mod gains;
pub mod home;
pub mod profile;
pub mod project;
pub mod repository;

// Re-export common types
pub use config::FolioConfig;
pub use error::{FolioError, Result};
pub use home::{HomeData, ProjectDetail};
