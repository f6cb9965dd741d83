//! Project domain module.
//!
//! Hosted repositories of the portfolio owner, as returned by the
//! source-control provider.
//!
//! # Module Structure
//!
//! - `model`: `ProjectRecord` value object and ordering helpers
//! - `source`: `RepositorySource` trait implemented by remote fetchers
//!
//! # Usage
//!
//! ```ignore
//! use folio_core::project::{ProjectRecord, RepositorySource};
//! ```

mod model;
pub mod source;

// Re-export public API
pub use model::{MAX_PROJECTS, ProjectRecord, sort_most_recent_first};
pub use source::RepositorySource;
