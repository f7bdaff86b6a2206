// Usage statistics domain models
use serde::Deserialize;

/// Aggregate counters for the whole dataset, as reported by the summary endpoint.
///
/// The service is responsible for keeping the counters consistent; this layer
/// passes them through unchanged and tolerates a sum that exceeds `total_messages`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub total_messages: i64,
    pub error_count: i64,
    pub message_count: i64,
    pub warning_count: i64,
    pub avg_magnitude: f64,
    pub unique_users: i64,
}

/// One row per user from the by-user endpoint. Service order is preserved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: i64,
    pub user_name: String,
    pub total_messages: i64,
    pub errors: i64,
    /// ISO-8601 timestamp of the user's most recent message.
    pub last_message: String,
}

/// One row per calendar day from the by-day endpoint.
///
/// `display_date` is not part of the wire format; the view model builder
/// derives it from `date` before the point reaches the presentation layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityPoint {
    pub date: String,
    pub messages: i64,
    pub errors: i64,
    pub warnings: i64,
    #[serde(skip)]
    pub display_date: String,
}

/// One row per ranked user from the top-users endpoint. Ranking order is
/// determined entirely by the service and preserved verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUser {
    pub user_id: i64,
    pub user_name: String,
    pub message_count: i64,
}

/// Pluggable date-display formatter, injected so tests can pin a fixed locale.
pub type DateFormatter = fn(&str) -> String;

/// Render an ISO-8601 date in the Czech convention, e.g. "2024-01-15" -> "15. 1. 2024".
///
/// Total over any input: a date that does not parse falls back to the raw
/// string rather than failing the whole build.
pub fn czech_display_date(date: &str) -> String {
    match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%-d. %-m. %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
