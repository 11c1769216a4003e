use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

const GITHUB_API: &str = "https://api.github.com";

/// Envelope of `GET /search/repositories`. Everything beyond the ranked
/// item list is ignored.
#[derive(Debug, Deserialize)]
pub struct RepositorySearchResponse {
    #[serde(default)]
    pub items: Vec<RawRepository>,
}

/// One repository descriptor as GitHub returns it. Every field is optional
/// here; normalization into the stored shape happens downstream and never
/// fails on missing data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRepository {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub html_url: Option<String>,
    pub description: Option<String>,
    pub stargazers_count: Option<u64>,
    pub language: Option<String>,
}

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_shared_client(Client::new(), GITHUB_API, None)
    }

    pub fn with_shared_client(
        client: Client,
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token,
        }
    }

    /// Top repositories matching `keyword`, ranked by star count descending.
    /// At most `limit` items; GitHub caps the page size at 100.
    pub async fn search_repositories(
        &self,
        keyword: &str,
        limit: u32,
    ) -> Result<Vec<RawRepository>> {
        let url = format!(
            "{}/search/repositories?q={}&sort=stars&order=desc&per_page={}",
            self.base_url,
            urlencoding::encode(keyword),
            limit
        );

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("GitHub API error: {} - {}", status, body));
        }

        let response: RepositorySearchResponse = response.json().await?;

        Ok(response.items)
    }
}
