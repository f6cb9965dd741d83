//! Layered profile extraction.
//!
//! Each stage implements [`ProfileExtractor`] and returns a [`PartialProfile`].
//! Stages run in priority order and are folded left-biased, so a later stage
//! only fills fields still unset by an earlier one:
//!
//! 1. `linked_data` - embedded `application/ld+json` block
//! 2. `meta_tags`   - `og:*` / `twitter:*` / `description` preview tags
//! 3. `heuristics`  - fixed selector lists for headline and location
//! 4. `sections`    - best-effort experience/project listings

mod heuristics;
mod linked_data;
mod meta_tags;
mod sections;

pub use heuristics::MarkupHeuristics;
pub use linked_data::LinkedDataExtractor;
pub use meta_tags::MetaTagExtractor;
pub use sections::{HtmlSectionExtractor, SectionStage};

use folio_core::config::SectionRules;
use folio_core::profile::{PartialProfile, ProfileDiagnostics};
use scraper::{ElementRef, Html, Selector};

/// A fetched page, parsed once and shared by every stage.
pub struct Page<'a> {
    pub markup: &'a str,
    pub document: Html,
}

impl<'a> Page<'a> {
    pub fn parse(markup: &'a str) -> Self {
        Self {
            markup,
            document: Html::parse_document(markup),
        }
    }
}

/// One extraction stage.
pub trait ProfileExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns what this stage found. `found` holds what earlier stages
    /// already set. Raw artifacts go into `raw`.
    fn extract(
        &self,
        page: &Page<'_>,
        found: &PartialProfile,
        raw: &mut ProfileDiagnostics,
    ) -> PartialProfile;
}

/// The standard stage order.
pub fn default_extractors(rules: &SectionRules) -> Vec<Box<dyn ProfileExtractor>> {
    vec![
        Box::new(LinkedDataExtractor),
        Box::new(MetaTagExtractor),
        Box::new(MarkupHeuristics::default()),
        Box::new(HtmlSectionExtractor::new(rules.clone())),
    ]
}

/// Runs every stage over `markup` and folds the results.
pub fn extract_profile(
    markup: &str,
    extractors: &[Box<dyn ProfileExtractor>],
) -> (PartialProfile, ProfileDiagnostics) {
    let page = Page::parse(markup);
    let mut raw = ProfileDiagnostics::default();
    let mut profile = PartialProfile::default();

    for extractor in extractors {
        let partial = extractor.extract(&page, &profile, &mut raw);
        tracing::trace!(stage = extractor.name(), ?partial, "Extraction stage finished");
        profile.fill_from(partial);
    }

    (profile, raw)
}

pub(crate) fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(err) => {
            tracing::warn!(css, "Invalid selector: {err}");
            None
        }
    }
}

/// Element text with runs of whitespace collapsed to one space.
pub(crate) fn collapsed_text(element: &ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
<html><head>
  <title>Jane Doe | LinkedIn</title>
  <script type="application/ld+json">{"@type": "Person", "name": "Jane Doe", "jobTitle": "Staff Engineer"}</script>
  <meta property="og:title" content="Someone Else | Meta Headline">
  <meta property="og:description" content="Builds resilient systems.">
  <meta property="og:image" content="https://cdn.example.com/jane.jpg">
</head><body>
  <div class="top-card-layout__headline">Markup Headline</div>
  <span class="top-card__subline-item">Porto, Portugal</span>
</body></html>"#;

    #[test]
    fn test_stages_fill_only_unset_fields() {
        let extractors = default_extractors(&SectionRules::default());
        let (profile, raw) = extract_profile(PAGE, &extractors);

        assert_eq!(profile.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.headline.as_deref(), Some("Staff Engineer"));
        assert_eq!(profile.summary.as_deref(), Some("Builds resilient systems."));
        assert_eq!(profile.avatar_url.as_deref(), Some("https://cdn.example.com/jane.jpg"));
        assert_eq!(profile.location.as_deref(), Some("Porto, Portugal"));
        assert!(raw.json_ld.is_some());
        assert_eq!(
            raw.meta.get("og:title").map(String::as_str),
            Some("Someone Else | Meta Headline")
        );
    }

    #[test]
    fn test_site_suffix_in_title_does_not_shadow_markup_headline() {
        let markup = r#"<html><head>
  <script type="application/ld+json">{"@type": "Person", "name": "Jane Doe"}</script>
  <meta property="og:title" content="Jane Doe | LinkedIn">
</head><body>
  <div class="top-card-layout__headline">Staff Engineer at Acme</div>
</body></html>"#;
        let extractors = default_extractors(&SectionRules::default());
        let (profile, _) = extract_profile(markup, &extractors);

        assert_eq!(profile.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.headline.as_deref(), Some("Staff Engineer at Acme"));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
    }
}
