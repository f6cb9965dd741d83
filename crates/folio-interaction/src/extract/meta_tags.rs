//! Social/meta preview tag stage.

use super::{Page, ProfileExtractor, parse_selector};
use folio_core::profile::{PartialProfile, ProfileDiagnostics, non_empty};
use std::collections::BTreeMap;

const META_SELECTOR: &str =
    r#"meta[property^="og:"], meta[name^="og:"], meta[name^="twitter:"], meta[name="description"]"#;

#[derive(Debug, Default, Clone, Copy)]
pub struct MetaTagExtractor;

impl ProfileExtractor for MetaTagExtractor {
    fn name(&self) -> &'static str {
        "meta_tags"
    }

    fn extract(
        &self,
        page: &Page<'_>,
        found: &PartialProfile,
        raw: &mut ProfileDiagnostics,
    ) -> PartialProfile {
        let tags = collect_tags(page);
        let stage = from_tags(&tags, found.full_name.is_some());
        raw.meta = tags;
        stage
    }
}

fn collect_tags(page: &Page<'_>) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();
    let Some(selector) = parse_selector(META_SELECTOR) else {
        return tags;
    };

    for element in page.document.select(&selector) {
        let attrs = element.value();
        let key = attrs
            .attr("property")
            .or_else(|| attrs.attr("name"))
            .map(str::trim)
            .unwrap_or_default();
        let content = attrs.attr("content").map(str::trim).unwrap_or_default();
        if key.is_empty() || content.is_empty() {
            continue;
        }
        // later tags override earlier ones
        tags.insert(key.to_string(), content.to_string());
    }
    tags
}

/// The title is only read while no earlier stage has set the name.
fn from_tags(tags: &BTreeMap<String, String>, has_name: bool) -> PartialProfile {
    let tag = |key: &str| tags.get(key).map(String::as_str);

    let (full_name, headline) = if has_name {
        (None, None)
    } else {
        tag("og:title")
            .or_else(|| tag("twitter:title"))
            .map(split_title)
            .unwrap_or_default()
    };

    PartialProfile {
        full_name,
        headline,
        summary: non_empty(tag("og:description").or_else(|| tag("description"))),
        avatar_url: non_empty(tag("og:image").or_else(|| tag("twitter:image"))),
        ..Default::default()
    }
}

/// `"Full Name | Headline | More"` becomes `("Full Name", "Headline | More")`.
fn split_title(title: &str) -> (Option<String>, Option<String>) {
    let mut parts = title.split('|').map(str::trim);
    let name = non_empty(parts.next());
    let rest: Vec<&str> = parts.collect();
    let headline = match rest.first() {
        Some(first) if !first.is_empty() => Some(rest.join(" | ")),
        _ => None,
    };
    (name, headline)
}
