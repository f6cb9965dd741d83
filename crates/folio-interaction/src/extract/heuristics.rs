//! Markup heuristics for headline and location.

use super::{Page, ProfileExtractor, collapsed_text, parse_selector};
use folio_core::profile::{PartialProfile, ProfileDiagnostics};

const HEADLINE_SELECTORS: &[&str] = &[
    r#"[data-field="headline"]"#,
    ".text-body-medium",
    ".pv-top-card--list .text-body-medium",
    ".top-card-layout__headline",
];

const LOCATION_SELECTORS: &[&str] = &[
    ".top-card__subline-item",
    ".pv-top-card--list-bullet .text-body-small",
];

/// Probes candidate selectors in order; the first non-empty text wins.
#[derive(Debug, Clone)]
pub struct MarkupHeuristics {
    pub headline_selectors: Vec<String>,
    pub location_selectors: Vec<String>,
}

impl Default for MarkupHeuristics {
    fn default() -> Self {
        Self {
            headline_selectors: HEADLINE_SELECTORS.iter().map(|s| s.to_string()).collect(),
            location_selectors: LOCATION_SELECTORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ProfileExtractor for MarkupHeuristics {
    fn name(&self) -> &'static str {
        "heuristics"
    }

    fn extract(
        &self,
        page: &Page<'_>,
        _found: &PartialProfile,
        _raw: &mut ProfileDiagnostics,
    ) -> PartialProfile {
        PartialProfile {
            headline: first_text(page, &self.headline_selectors),
            location: first_text(page, &self.location_selectors),
            ..Default::default()
        }
    }
}

fn first_text(page: &Page<'_>, selectors: &[String]) -> Option<String> {
    selectors
        .iter()
        .filter_map(|css| parse_selector(css))
        .find_map(|selector| {
            page.document
                .select(&selector)
                .map(|element| collapsed_text(&element))
                .find(|text| !text.is_empty())
        })
}
