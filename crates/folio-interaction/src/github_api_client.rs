//! GithubApiClient - GraphQL client for the owner's public repositories.
//!
//! Issues one `POST` per call against the GraphQL endpoint, maps each node
//! into a [`ProjectRecord`] and returns them newest first. No retries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::project::{MAX_PROJECTS, ProjectRecord, RepositorySource, sort_most_recent_first};
use folio_core::{FolioConfig, FolioError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));
const ERROR_BODY_LIMIT: usize = 400;

const REPOSITORIES_QUERY: &str = r#"
query ($login: String!, $first: Int!) {
  user(login: $login) {
    repositories(first: $first, privacy: PUBLIC, orderBy: { field: UPDATED_AT, direction: DESC }) {
      nodes {
        id
        name
        description
        url
        stargazerCount
        forkCount
        primaryLanguage { name }
        updatedAt
      }
    }
  }
}"#;

/// Repository fetcher backed by the GitHub GraphQL API.
#[derive(Clone, Default)]
pub struct GithubApiClient {
    client: Client,
}

impl GithubApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    async fn send_query(
        &self,
        endpoint: &str,
        token: &str,
        login: &str,
        timeout: Duration,
    ) -> Result<GraphQlResponse> {
        let request = GraphQlRequest {
            query: REPOSITORIES_QUERY,
            variables: json!({ "login": login, "first": MAX_PROJECTS }),
        };

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(timeout)
            .json(&request)
            .send()
            .await
            .map_err(|err| FolioError::Network(format!("GitHub request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read GitHub error body".to_string());
            return Err(map_http_error(status, body));
        }

        response.json().await.map_err(|err| FolioError::Serialization {
            format: "JSON".to_string(),
            message: format!("Failed to parse GitHub response: {err}"),
        })
    }
}

#[async_trait]
impl RepositorySource for GithubApiClient {
    async fn fetch_repos(&self, config: &FolioConfig) -> Result<Vec<ProjectRecord>> {
        let login = config.github.user.trim();
        if login.is_empty() {
            return Ok(Vec::new());
        }

        let token = config
            .github_token()
            .ok_or_else(|| FolioError::missing_credential("GitHub token is not configured"))?;

        let timeout = Duration::from_secs(config.github.timeout_secs);
        let payload = self
            .send_query(&config.github.endpoint, token, login, timeout)
            .await?;

        let records = payload.into_records()?;
        tracing::debug!(login, count = records.len(), "Fetched repositories");
        Ok(records)
    }
}

#[derive(Serialize)]
struct GraphQlRequest {
    query: &'static str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct ResponseData {
    user: Option<UserNode>,
}

#[derive(Deserialize)]
struct UserNode {
    repositories: Option<RepositoryConnection>,
}

#[derive(Deserialize)]
struct RepositoryConnection {
    #[serde(default)]
    nodes: Vec<Option<RepositoryNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    description: Option<String>,
    #[serde(default)]
    url: String,
    stargazer_count: Option<u64>,
    fork_count: Option<u64>,
    primary_language: Option<LanguageNode>,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct LanguageNode {
    name: Option<String>,
}

impl GraphQlResponse {
    fn into_records(self) -> Result<Vec<ProjectRecord>> {
        if !self.errors.is_empty() {
            let message = self
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FolioError::upstream(None, message));
        }

        let nodes = self
            .data
            .and_then(|d| d.user)
            .and_then(|u| u.repositories)
            .map(|r| r.nodes)
            .unwrap_or_default();

        let mut records: Vec<ProjectRecord> = nodes
            .into_iter()
            .flatten()
            .filter_map(RepositoryNode::into_record)
            .collect();
        sort_most_recent_first(&mut records);
        Ok(records)
    }
}

impl RepositoryNode {
    fn into_record(self) -> Option<ProjectRecord> {
        if self.name.trim().is_empty() {
            tracing::debug!(id = %self.id, "Skipping repository node without a name");
            return None;
        }
        Some(ProjectRecord {
            id: self.id,
            name: self.name,
            description: self.description,
            url: self.url,
            stars: self.stargazer_count.unwrap_or(0),
            forks: self.fork_count.unwrap_or(0),
            language: self
                .primary_language
                .and_then(|l| l.name)
                .unwrap_or_default(),
            updated_at: self.updated_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        })
    }
}

fn map_http_error(status: StatusCode, body: String) -> FolioError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.chars().take(ERROR_BODY_LIMIT).collect());

    FolioError::upstream(Some(status.as_u16()), message)
}
