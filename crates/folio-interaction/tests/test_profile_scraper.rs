use folio_core::config::ProfileSettings;
use folio_core::profile::{ProfileSource, ProjectEntry, SectionExtractor, Sections};
use folio_interaction::ProfileScraper;
use folio_interaction::extract::{LinkedDataExtractor, SectionStage};
use std::time::Duration;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROFILE_PAGE: &str = r#"<!doctype html>
<html>
<head>
  <title>Jane Doe | LinkedIn</title>
  <script type="application/ld+json">
    {"@context": "https://schema.org", "@type": "Person", "name": "Jane Doe",
     "jobTitle": "Staff Engineer", "image": {"url": "https://img.example.com/jane.png"},
     "address": {"addressLocality": "Lisbon"}}
  </script>
  <meta property="og:title" content="Someone Else | LinkedIn">
  <meta property="og:description" content="Builds reliable pipelines.">
</head>
<body>
  <section>
    <h2>Experience</h2>
    <ul>
      <li>Senior Engineer · Acme Corp · 2020 - Present</li>
    </ul>
  </section>
  <section>
    <h2>Projects</h2>
    <ul>
      <li><a href="https://example.com/folio">Folio · Portfolio pipeline</a></li>
    </ul>
  </section>
</body>
</html>"#;

fn scraper_for(server: &MockServer) -> ProfileScraper {
    let settings = ProfileSettings {
        base_url: format!("{}/in/", server.uri()),
        ..Default::default()
    };
    ProfileScraper::new(&settings)
}

#[tokio::test]
async fn test_scrape_handle_extracts_layers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/in/jane-doe/"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROFILE_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let profile = scraper_for(&server).scrape(Some("jane-doe")).await;

    assert_eq!(profile.source_url, format!("{}/in/jane-doe/", server.uri()));
    assert_eq!(profile.full_name.as_deref(), Some("Jane Doe"));
    assert_eq!(profile.headline.as_deref(), Some("Staff Engineer"));
    assert_eq!(profile.location.as_deref(), Some("Lisbon"));
    assert_eq!(
        profile.avatar_url.as_deref(),
        Some("https://img.example.com/jane.png")
    );
    assert_eq!(profile.summary.as_deref(), Some("Builds reliable pipelines."));
    assert_eq!(profile.experiences.len(), 1);
    assert_eq!(profile.experiences[0].company.as_deref(), Some("Acme Corp"));
    assert_eq!(profile.projects.len(), 1);
    assert_eq!(
        profile.projects[0].url.as_deref(),
        Some("https://example.com/folio")
    );
    assert!(profile.raw.json_ld.is_some());
    assert!(profile.raw.error_status.is_none());
}

#[tokio::test]
async fn test_scrape_rejected_records_status_and_snippet() {
    let server = MockServer::start().await;
    let body = "x".repeat(1000);
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string(body))
        .mount(&server)
        .await;

    let url = format!("{}/in/nobody/", server.uri());
    let profile = scraper_for(&server).scrape(Some(&url)).await;

    assert_eq!(profile.source_url, url);
    assert!(profile.is_blank());
    assert_eq!(profile.raw.error_status, Some(404));
    assert_eq!(profile.raw.body_snippet.as_deref().map(str::len), Some(400));
}

#[tokio::test]
async fn test_scrape_network_failure_is_recorded() {
    let server = MockServer::start().await;
    let url = format!("{}/in/gone/", server.uri());
    drop(server);

    let settings = ProfileSettings::default();
    let profile = ProfileScraper::new(&settings).scrape(Some(&url)).await;

    assert_eq!(profile.source_url, url);
    assert!(profile.is_blank());
    assert!(profile.raw.error.is_some());
}

#[tokio::test]
async fn test_scrape_blank_input_skips_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    for input in [None, Some(""), Some("   ")] {
        let profile = scraper.scrape(input).await;
        assert_eq!(profile.source_url, "");
        assert!(profile.is_blank());
    }
}

#[tokio::test]
async fn test_scrape_is_stable_across_runs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROFILE_PAGE))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let first = scraper.scrape(Some("jane-doe")).await;
    let second = scraper.scrape(Some("jane-doe")).await;
    assert_eq!(first.without_diagnostics(), second.without_diagnostics());
}

#[tokio::test]
async fn test_scrape_timeout_is_recorded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PROFILE_PAGE)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let profile = scraper_for(&server)
        .with_timeout(Duration::from_millis(100))
        .scrape(Some("jane-doe"))
        .await;

    assert_eq!(profile.source_url, format!("{}/in/jane-doe/", server.uri()));
    assert!(profile.is_blank());
    assert!(profile.raw.error.is_some());
    assert!(profile.raw.error_status.is_none());
}

struct FixedSections;

impl SectionExtractor for FixedSections {
    fn extract_sections(&self, _markup: &str) -> Sections {
        Sections {
            projects: vec![ProjectEntry {
                name: Some("Pinned".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }
}

#[tokio::test]
async fn test_custom_extractor_stages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROFILE_PAGE))
        .mount(&server)
        .await;

    let profile = scraper_for(&server)
        .with_extractors(vec![
            Box::new(LinkedDataExtractor),
            Box::new(SectionStage::new(Box::new(FixedSections))),
        ])
        .scrape(Some("jane-doe"))
        .await;

    assert_eq!(profile.full_name.as_deref(), Some("Jane Doe"));
    // meta stage not installed
    assert_eq!(profile.summary, None);
    assert!(profile.raw.meta.is_empty());
    assert!(profile.experiences.is_empty());
    assert_eq!(profile.projects.len(), 1);
    assert_eq!(profile.projects[0].name.as_deref(), Some("Pinned"));
}
