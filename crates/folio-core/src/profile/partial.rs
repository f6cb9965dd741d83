//! Partial profile produced by one extraction stage.

use super::model::{ExperienceEntry, ProfileDiagnostics, ProfileRecord, ProjectEntry};

/// Fields found by a single extractor. Unset fields stay `None`/empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialProfile {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub summary: Option<String>,
    pub experiences: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl PartialProfile {
    /// Left-biased fill: only fields still unset on `self` take `other`'s value.
    pub fn fill_from(&mut self, other: PartialProfile) {
        fill(&mut self.full_name, other.full_name);
        fill(&mut self.headline, other.headline);
        fill(&mut self.location, other.location);
        fill(&mut self.avatar_url, other.avatar_url);
        fill(&mut self.summary, other.summary);
        if self.experiences.is_empty() {
            self.experiences = other.experiences;
        }
        if self.projects.is_empty() {
            self.projects = other.projects;
        }
    }

    /// Folds stages in priority order; earlier stages win.
    pub fn fold(stages: impl IntoIterator<Item = PartialProfile>) -> Self {
        stages.into_iter().fold(Self::default(), |mut acc, stage| {
            acc.fill_from(stage);
            acc
        })
    }

    pub fn into_record(self, source_url: impl Into<String>, raw: ProfileDiagnostics) -> ProfileRecord {
        ProfileRecord {
            source_url: source_url.into(),
            full_name: self.full_name,
            headline: self.headline,
            location: self.location,
            avatar_url: self.avatar_url,
            summary: self.summary,
            experiences: self.experiences,
            projects: self.projects,
            raw,
        }
    }
}

/// Trims and drops empty strings.
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn fill(slot: &mut Option<String>, candidate: Option<String>) {
    if slot.is_none() {
        *slot = candidate.filter(|s| !s.trim().is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earlier_stage_wins() {
        let first = PartialProfile {
            full_name: Some("From Linked Data".into()),
            ..Default::default()
        };
        let second = PartialProfile {
            full_name: Some("From Meta".into()),
            headline: Some("Engineer".into()),
            ..Default::default()
        };

        let folded = PartialProfile::fold([first, second]);
        assert_eq!(folded.full_name.as_deref(), Some("From Linked Data"));
        assert_eq!(folded.headline.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_blank_candidate_does_not_fill() {
        let mut acc = PartialProfile::default();
        acc.fill_from(PartialProfile {
            summary: Some("   ".into()),
            ..Default::default()
        });
        assert_eq!(acc.summary, None);
    }

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty(Some("  Lisbon ")), Some("Lisbon".to_string()));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }
}
