use std::time::Duration;

use crate::config::Config;

/// Shared application state.
///
/// Request handling is stateless: the only shared pieces are the read-only
/// configuration and the pooled outbound HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.ifixit.user_agent.clone())
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.llm.timeout_secs.max(config.ifixit.timeout_secs)))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }
}
