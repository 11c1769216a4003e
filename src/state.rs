use crate::clients::github::GitHubClient;
use crate::config::Config;
use crate::db::Store;
use crate::services::{HistoryService, IngestService};

/// Build a shared HTTP client with reasonable defaults for API calls.
/// Reused across all HTTP-based services to enable connection pooling.
fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent(concat!("reposcout/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

#[derive(Clone)]
pub struct SharedState {
    pub config: Config,

    pub store: Store,

    pub github: GitHubClient,

    pub ingest: IngestService,

    pub history: HistoryService,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_url,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let http_client =
            build_shared_http_client(config.github.request_timeout_seconds.into())?;

        let github = GitHubClient::with_shared_client(
            http_client,
            &config.github.base_url,
            config.github.token.clone(),
        );

        let ingest = IngestService::new(
            store.clone(),
            github.clone(),
            config.github.per_search_limit,
        );
        let history = HistoryService::new(store.clone());

        Ok(Self {
            config,
            store,
            github,
            ingest,
            history,
        })
    }
}
