//! Structured linked-data stage (`<script type="application/ld+json">`).

use super::{Page, ProfileExtractor, parse_selector};
use folio_core::profile::{PartialProfile, ProfileDiagnostics, non_empty};
use serde_json::Value;

#[derive(Debug, Default, Clone, Copy)]
pub struct LinkedDataExtractor;

impl ProfileExtractor for LinkedDataExtractor {
    fn name(&self) -> &'static str {
        "linked_data"
    }

    fn extract(
        &self,
        page: &Page<'_>,
        _found: &PartialProfile,
        raw: &mut ProfileDiagnostics,
    ) -> PartialProfile {
        let Some(block) = first_block(page) else {
            return PartialProfile::default();
        };

        let json: Value = match serde_json::from_str(block.trim()) {
            Ok(json) => json,
            Err(err) => {
                tracing::debug!("Ignoring malformed linked-data block: {err}");
                return PartialProfile::default();
            }
        };

        let found = subject(&json).map(person_fields).unwrap_or_default();
        raw.json_ld = Some(json);
        found
    }
}

fn first_block(page: &Page<'_>) -> Option<String> {
    let selector = parse_selector(r#"script[type="application/ld+json"]"#)?;
    let text: String = page.document.select(&selector).next()?.text().collect();
    if text.trim().is_empty() { None } else { Some(text) }
}

/// Picks the object describing the page subject: the first `Person` in an
/// array or `@graph`, else the first object, else the value itself.
fn subject(json: &Value) -> Option<&Value> {
    let items = match json {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("@graph") {
            Some(Value::Array(items)) => items,
            _ => return Some(json),
        },
        _ => return None,
    };

    items
        .iter()
        .find(|item| is_person(item))
        .or_else(|| items.iter().find(|item| item.is_object()))
}

fn is_person(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(t)) => t == "Person",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("Person")),
        _ => false,
    }
}

fn person_fields(person: &Value) -> PartialProfile {
    let text = |key: &str| non_empty(person.get(key).and_then(Value::as_str));

    let avatar_url = match person.get("image") {
        Some(Value::String(url)) => non_empty(Some(url.as_str())),
        Some(image @ Value::Object(_)) => non_empty(image.get("url").and_then(Value::as_str)),
        _ => None,
    };

    let location = person
        .get("address")
        .filter(|address| address.is_object())
        .and_then(|address| {
            non_empty(address.get("addressLocality").and_then(Value::as_str))
                .or_else(|| non_empty(address.get("addressRegion").and_then(Value::as_str)))
        });

    PartialProfile {
        full_name: text("name"),
        headline: text("jobTitle"),
        avatar_url,
        summary: text("description"),
        location,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(markup: &str) -> (PartialProfile, ProfileDiagnostics) {
        let page = Page::parse(markup);
        let mut raw = ProfileDiagnostics::default();
        let found = LinkedDataExtractor.extract(&page, &PartialProfile::default(), &mut raw);
        (found, raw)
    }

    #[test]
    fn test_reads_person_fields() {
        let (found, raw) = run(
            r#"<script type="application/ld+json">
            {"@type": "Person", "name": "Jane Doe", "jobTitle": "Engineer",
             "image": {"url": "https://cdn.example/j.png"}, "description": "Hello",
             "address": {"addressRegion": "Norte"}}
            </script>"#,
        );
        assert_eq!(found.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(found.headline.as_deref(), Some("Engineer"));
        assert_eq!(found.avatar_url.as_deref(), Some("https://cdn.example/j.png"));
        assert_eq!(found.summary.as_deref(), Some("Hello"));
        assert_eq!(found.location.as_deref(), Some("Norte"));
        assert!(raw.json_ld.is_some());
    }

    #[test]
    fn test_locality_preferred_over_region() {
        let (found, _) = run(
            r#"<script type="application/ld+json">{"name": "J", "address": {"addressLocality": "Porto", "addressRegion": "Norte"}}</script>"#,
        );
        assert_eq!(found.location.as_deref(), Some("Porto"));
    }

    #[test]
    fn test_graph_picks_person() {
        let (found, _) = run(
            r#"<script type="application/ld+json">{"@graph": [{"@type": "WebPage", "name": "Page"}, {"@type": "Person", "name": "Jane"}]}</script>"#,
        );
        assert_eq!(found.full_name.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_malformed_block_is_ignored() {
        let (found, raw) = run(r#"<script type="application/ld+json">{"name": </script>"#);
        assert_eq!(found, PartialProfile::default());
        assert!(raw.json_ld.is_none());
    }

    #[test]
    fn test_non_string_fields_are_ignored() {
        let (found, _) = run(r#"<script type="application/ld+json">{"name": 42, "jobTitle": ["a"]}</script>"#);
        assert_eq!(found.full_name, None);
        assert_eq!(found.headline, None);
    }
}
