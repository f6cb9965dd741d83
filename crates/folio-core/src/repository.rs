//! Repository trait re-exports.
//!
//! This module provides centralized access to all repository traits.

// Re-export GainsRepository from gains module
pub use crate::gains::GainsRepository;

// Re-export FallbackProfileRepository from profile module
pub use crate::profile::FallbackProfileRepository;
