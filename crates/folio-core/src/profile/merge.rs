//! Merge of a scraped profile with the local fallback record.

use super::model::{FallbackProfile, ProfileRecord};

/// Merges `primary` over `fallback`, field by field.
///
/// Scalars take the primary value when present, else the fallback value.
/// Sequences are taken whole from the primary when non-empty, else whole from
/// the fallback; they are never interleaved. `source_url` and the diagnostic
/// bag come from the primary unless its URL is empty.
pub fn merge_profiles(primary: ProfileRecord, fallback: ProfileRecord) -> ProfileRecord {
    ProfileRecord {
        source_url: if primary.source_url.is_empty() {
            fallback.source_url
        } else {
            primary.source_url
        },
        full_name: primary.full_name.or(fallback.full_name),
        headline: primary.headline.or(fallback.headline),
        location: primary.location.or(fallback.location),
        avatar_url: primary.avatar_url.or(fallback.avatar_url),
        summary: primary.summary.or(fallback.summary),
        experiences: if primary.experiences.is_empty() {
            fallback.experiences
        } else {
            primary.experiences
        },
        projects: if primary.projects.is_empty() {
            fallback.projects
        } else {
            primary.projects
        },
        raw: primary.raw,
    }
}

/// Merges with an optional fallback file; `None` returns `primary` unchanged.
pub fn merge_fallback(primary: ProfileRecord, fallback: Option<FallbackProfile>) -> ProfileRecord {
    match fallback {
        Some(fallback) => merge_profiles(primary, fallback.into()),
        None => primary,
    }
}

impl From<FallbackProfile> for ProfileRecord {
    fn from(fallback: FallbackProfile) -> Self {
        ProfileRecord {
            source_url: String::new(),
            full_name: fallback.full_name,
            headline: fallback.headline,
            location: fallback.location,
            avatar_url: fallback.avatar_url,
            summary: fallback.summary,
            experiences: fallback.experiences,
            projects: fallback.projects,
            raw: Default::default(),
        }
    }
}
