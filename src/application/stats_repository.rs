// Repository trait for reporting-service data access
use crate::domain::stats::{ActivityPoint, GlobalStats, TopUser, UserSummary};
use async_trait::async_trait;

/// Failure of a single dataset fetch. Both kinds are equally fatal to the
/// fetch cycle; the distinction exists for operator diagnostics only.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// The network call itself failed.
    #[error("transport failure for {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The request succeeded but returned a non-success HTTP status.
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    /// The response body does not match the expected structure.
    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Fetch the aggregate counters for the whole dataset.
    async fn fetch_summary(&self) -> Result<GlobalStats, StatsError>;

    /// Fetch the per-user breakdown, in service order.
    async fn fetch_user_summaries(&self) -> Result<Vec<UserSummary>, StatsError>;

    /// Fetch the per-day activity series, assumed chronological as delivered.
    async fn fetch_activity(&self) -> Result<Vec<ActivityPoint>, StatsError>;

    /// Fetch the top-users ranking, order determined by the service.
    async fn fetch_top_users(&self) -> Result<Vec<TopUser>, StatsError>;
}
