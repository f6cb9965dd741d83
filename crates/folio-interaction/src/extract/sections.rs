//! Best-effort experience/project block scan.
//!
//! Looks for a `section`/`div` whose text mentions the keyword (English or
//! Portuguese) and that has list-like children, then reads each child as one
//! entry. Pages that render these blocks client-side yield nothing.

use super::{Page, ProfileExtractor, collapse_whitespace, parse_selector};
use folio_core::config::SectionRules;
use folio_core::profile::{
    ExperienceEntry, PartialProfile, ProfileDiagnostics, ProjectEntry, SectionExtractor, Sections,
};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

static EXPERIENCE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bexperience\b|experiênc").expect("valid experience keyword regex")
});

static PROJECTS_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bprojects\b|\bprojetos\b").expect("valid projects keyword regex")
});

const CONTAINER_SELECTOR: &str = "section, div";
const EXPERIENCE_ITEM_SELECTOR: &str = "li, div";
const PROJECT_ITEM_SELECTOR: &str = "a, li, div";

/// Selector-driven implementation of [`SectionExtractor`].
#[derive(Debug, Clone, Default)]
pub struct HtmlSectionExtractor {
    rules: SectionRules,
}

impl HtmlSectionExtractor {
    pub fn new(rules: SectionRules) -> Self {
        Self { rules }
    }

    pub fn scan_document(&self, document: &Html) -> Sections {
        Sections {
            experiences: self.experiences(document),
            projects: self.projects(document),
        }
    }

    fn experiences(&self, document: &Html) -> Vec<ExperienceEntry> {
        self.entries(
            document,
            &EXPERIENCE_KEYWORD,
            EXPERIENCE_ITEM_SELECTOR,
            self.rules.min_experience_chars,
        )
        .into_iter()
        .map(|item| {
            let mut parts = item.parts.into_iter();
            ExperienceEntry {
                title: parts.next().or_else(|| Some(item.text.clone())),
                company: parts.next(),
                description: Some(item.text),
                ..Default::default()
            }
        })
        .collect()
    }

    fn projects(&self, document: &Html) -> Vec<ProjectEntry> {
        self.entries(
            document,
            &PROJECTS_KEYWORD,
            PROJECT_ITEM_SELECTOR,
            self.rules.min_project_chars,
        )
        .into_iter()
        .map(|item| {
            let mut parts = item.parts.into_iter();
            let name = parts.next().unwrap_or_else(|| item.text.clone());
            let rest: Vec<String> = parts.collect();
            ProjectEntry {
                name: Some(name),
                description: if rest.is_empty() {
                    None
                } else {
                    Some(rest.join(" · "))
                },
                url: item.href,
                ..Default::default()
            }
        })
        .collect()
    }

    fn entries(
        &self,
        document: &Html,
        keyword: &Regex,
        item_css: &str,
        min_chars: usize,
    ) -> Vec<RawItem> {
        let (Some(containers), Some(items)) =
            (parse_selector(CONTAINER_SELECTOR), parse_selector(item_css))
        else {
            return Vec::new();
        };

        let Some(root) = find_container(document, &containers, &items, keyword) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        root.select(&items)
            .filter_map(|element| {
                let raw_text: String = element.text().collect();
                let text = collapse_whitespace(&raw_text);
                if text.chars().count() < min_chars || !seen.insert(text.clone()) {
                    return None;
                }
                Some(RawItem {
                    parts: self.split_parts(&raw_text),
                    href: link_of(&element),
                    text,
                })
            })
            .collect()
    }

    fn split_parts(&self, raw_text: &str) -> Vec<String> {
        raw_text
            .split(|c: char| self.rules.separators.contains(&c))
            .map(collapse_whitespace)
            .filter(|part| !part.is_empty())
            .collect()
    }
}

impl SectionExtractor for HtmlSectionExtractor {
    fn extract_sections(&self, markup: &str) -> Sections {
        self.scan_document(&Html::parse_document(markup))
    }
}

/// In the pipeline the already parsed document is scanned directly.
impl ProfileExtractor for HtmlSectionExtractor {
    fn name(&self) -> &'static str {
        "sections"
    }

    fn extract(
        &self,
        page: &Page<'_>,
        _found: &PartialProfile,
        _raw: &mut ProfileDiagnostics,
    ) -> PartialProfile {
        into_partial(self.scan_document(&page.document))
    }
}

fn into_partial(sections: Sections) -> PartialProfile {
    PartialProfile {
        experiences: sections.experiences,
        projects: sections.projects,
        ..Default::default()
    }
}

struct RawItem {
    text: String,
    parts: Vec<String>,
    href: Option<String>,
}

/// The tightest container mentioning `keyword` that has list-like children.
fn find_container<'a>(
    document: &'a Html,
    containers: &Selector,
    items: &Selector,
    keyword: &Regex,
) -> Option<ElementRef<'a>> {
    document
        .select(containers)
        .filter(|element| element.select(items).next().is_some())
        .filter_map(|element| {
            let text: String = element.text().collect();
            keyword.is_match(&text).then_some((text.len(), element))
        })
        .min_by_key(|(len, _)| *len)
        .map(|(_, element)| element)
}

fn link_of(element: &ElementRef<'_>) -> Option<String> {
    let own = element.value().attr("href");
    let nested = || {
        parse_selector("a[href]")
            .and_then(|a| element.select(&a).next())
            .and_then(|a| a.value().attr("href"))
    };
    own.or_else(nested)
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}

/// Adapts any [`SectionExtractor`] into the extraction pipeline.
pub struct SectionStage {
    inner: Box<dyn SectionExtractor>,
}

impl SectionStage {
    pub fn new(inner: Box<dyn SectionExtractor>) -> Self {
        Self { inner }
    }
}

impl ProfileExtractor for SectionStage {
    fn name(&self) -> &'static str {
        "sections"
    }

    fn extract(
        &self,
        page: &Page<'_>,
        _found: &PartialProfile,
        _raw: &mut ProfileDiagnostics,
    ) -> PartialProfile {
        into_partial(self.inner.extract_sections(page.markup))
    }
}
