//! Infrastructure layer for Folio: configuration loading and local JSON files.

pub mod config_service;
pub mod json_fallback_profile_repository;
pub mod json_gains_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::json_fallback_profile_repository::JsonFallbackProfileRepository;
pub use crate::json_gains_repository::JsonGainsRepository;
