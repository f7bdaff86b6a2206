// HTTP implementation of the stats repository
use crate::application::stats_repository::{StatsError, StatsRepository};
use crate::domain::stats::{ActivityPoint, GlobalStats, TopUser, UserSummary};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpStatsRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStatsRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
    ) -> Result<T, StatsError> {
        let url = format!("{}/api/stats/messages/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| StatsError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Status { endpoint, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| StatsError::Decode { endpoint, source })
    }
}

#[async_trait]
impl StatsRepository for HttpStatsRepository {
    async fn fetch_summary(&self) -> Result<GlobalStats, StatsError> {
        self.get_json("summary").await
    }

    async fn fetch_user_summaries(&self) -> Result<Vec<UserSummary>, StatsError> {
        self.get_json("by-user").await
    }

    async fn fetch_activity(&self) -> Result<Vec<ActivityPoint>, StatsError> {
        self.get_json("by-day").await
    }

    async fn fetch_top_users(&self) -> Result<Vec<TopUser>, StatsError> {
        self.get_json("top-users").await
    }
}
