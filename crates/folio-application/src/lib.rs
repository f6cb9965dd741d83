//! Application layer for Folio.
//!
//! Use cases that wire the remote sources and local files together into the
//! page-level aggregates. Every entry point here is infallible towards the
//! render step: failures are logged and replaced by empty values.

pub mod home_service;

pub use home_service::HomeService;
