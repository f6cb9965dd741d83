//! ProfileScraper - best-effort public profile resolution.
//!
//! One timed `GET` per call with a browser-like identification header, then
//! the layered extraction in [`crate::extract`]. Never fails outward: HTTP
//! rejections and network faults come back as empty records whose diagnostic
//! bag explains what happened.

use crate::extract::{ProfileExtractor, default_extractors, extract_profile};
use async_trait::async_trait;
use folio_core::config::ProfileSettings;
use folio_core::profile::{ProfileRecord, ProfileSource};
use reqwest::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use std::time::Duration;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const BODY_SNIPPET_CHARS: usize = 400;

/// Scraper for public professional-network profile pages.
pub struct ProfileScraper {
    client: Client,
    base_url: String,
    user_agent: String,
    timeout: Duration,
    extractors: Vec<Box<dyn ProfileExtractor>>,
}

impl ProfileScraper {
    pub fn new(settings: &ProfileSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.base_url.clone(),
            user_agent: settings.user_agent.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
            extractors: default_extractors(&settings.sections),
        }
    }

    /// Replaces the extraction stages, e.g. to stub the section scan.
    pub fn with_extractors(mut self, extractors: Vec<Box<dyn ProfileExtractor>>) -> Self {
        self.extractors = extractors;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches the page. `Err` carries the already-degraded record.
    async fn fetch_html(&self, url: &str) -> Result<String, Box<ProfileRecord>> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, ACCEPT_HTML)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(url, "Profile request failed: {err}");
                Box::new(ProfileRecord::failed(url, err.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(url, status = status.as_u16(), "Profile page rejected the request");
            return Err(Box::new(ProfileRecord::rejected(
                url,
                status.as_u16(),
                body.chars().take(BODY_SNIPPET_CHARS).collect(),
            )));
        }

        response.text().await.map_err(|err| {
            tracing::warn!(url, "Failed to read profile body: {err}");
            Box::new(ProfileRecord::failed(url, err.to_string()))
        })
    }
}

#[async_trait]
impl ProfileSource for ProfileScraper {
    async fn scrape(&self, input: Option<&str>) -> ProfileRecord {
        let Some(url) = normalize_profile_url(input, &self.base_url) else {
            return ProfileRecord::empty("");
        };

        let html = match self.fetch_html(&url).await {
            Ok(html) => html,
            Err(degraded) => return *degraded,
        };

        let (found, raw) = extract_profile(&html, &self.extractors);
        tracing::debug!(
            url = %url,
            has_name = found.full_name.is_some(),
            experiences = found.experiences.len(),
            projects = found.projects.len(),
            "Scraped profile"
        );
        found.into_record(url, raw)
    }
}

/// Turns a bare handle or absolute URL into the profile URL.
///
/// Absent or blank input yields `None`. Absolute `http(s)` URLs pass through
/// unchanged; anything else is treated as a handle under `base_url`.
pub fn normalize_profile_url(input: Option<&str>, base_url: &str) -> Option<String> {
    let trimmed = input?.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Some(trimmed.to_string());
    }

    let handle = trimmed.trim_matches('/');
    if handle.is_empty() {
        return None;
    }
    Some(format!("{}/{}/", base_url.trim_end_matches('/'), handle))
}
