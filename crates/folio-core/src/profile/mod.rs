//! Profile domain module.
//!
//! The portfolio owner's public professional identity: the scraped record,
//! the partial results produced by each extraction stage, and the merge with a
//! locally curated fallback.
//!
//! # Module Structure
//!
//! - `model`: `ProfileRecord`, entries, diagnostics and the fallback file shape
//! - `partial`: `PartialProfile` and the left-biased fill used between stages
//! - `merge`: `merge_profiles` (primary first, fallback second)
//! - `source`: `ProfileSource` and `SectionExtractor` traits
//! - `repository`: `FallbackProfileRepository` trait for local files
//!
//! # Usage
//!
//! ```ignore
//! use folio_core::profile::{ProfileRecord, merge_profiles, ProfileSource};
//! ```

mod merge;
mod model;
mod partial;
pub mod repository;
pub mod source;

// Re-export public API
pub use merge::{merge_fallback, merge_profiles};
pub use model::{
    ExperienceEntry, FallbackProfile, ProfileDiagnostics, ProfileRecord, ProjectEntry,
};
pub use partial::{PartialProfile, non_empty};
pub use source::{ProfileSource, SectionExtractor, Sections};
pub use repository::FallbackProfileRepository;
