//! Profile source and section extraction traits.

use super::model::{ExperienceEntry, ProfileRecord, ProjectEntry};

/// A best-effort provider of the owner's public profile.
///
/// Never fails outward: every failure degrades to a [`ProfileRecord`] with
/// empty fields and a populated diagnostic bag.
#[async_trait::async_trait]
pub trait ProfileSource: Send + Sync {
    /// Resolves a bare handle or absolute URL into a profile.
    ///
    /// An absent or blank input returns `ProfileRecord::empty("")` without
    /// touching the network.
    async fn scrape(&self, input: Option<&str>) -> ProfileRecord;
}

/// Experience and project listings found in a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    pub experiences: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

/// Scans raw markup for experience/project blocks.
///
/// Pages that render these sections client-side yield empty sequences; that
/// is an accepted outcome, not an error.
pub trait SectionExtractor: Send + Sync {
    fn extract_sections(&self, markup: &str) -> Sections;
}
