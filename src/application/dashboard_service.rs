// Dashboard service - Use case for one fetch cycle
use crate::application::stats_repository::{StatsError, StatsRepository};
use crate::domain::dashboard::DashboardViewModel;
use crate::domain::stats::{ActivityPoint, DateFormatter, GlobalStats, TopUser, UserSummary};
use std::sync::Arc;

/// The one message shown to the user for any failed cycle. Diagnostic detail
/// goes to the operator log, never into this string.
pub const LOAD_FAILED_MESSAGE: &str =
    "Could not load the dashboard data. Check that the reporting service is reachable.";

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn StatsRepository>,
    format_date: DateFormatter,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn StatsRepository>, format_date: DateFormatter) -> Self {
        Self {
            repository,
            format_date,
        }
    }

    /// Run one fetch cycle: acquire all four datasets concurrently and build
    /// the view model, or fail the cycle as a whole.
    ///
    /// The join waits for every request to settle before any result is
    /// inspected, and succeeds only if all four succeeded. There is no
    /// partial result: a view model missing a dataset has no well-defined
    /// rendering, so partial success is rejected rather than defaulted.
    pub async fn load_dashboard(&self) -> Result<DashboardViewModel, String> {
        let (summary, users, activity, top_users) = futures::join!(
            self.repository.fetch_summary(),
            self.repository.fetch_user_summaries(),
            self.repository.fetch_activity(),
            self.repository.fetch_top_users(),
        );

        let global = self.check(summary)?;
        let users = self.check(users)?;
        let activity = self.check(activity)?;
        let top_users = self.check(top_users)?;

        Ok(build_view_model(
            global,
            users,
            activity,
            top_users,
            self.format_date,
        ))
    }

    fn check<T>(&self, result: Result<T, StatsError>) -> Result<T, String> {
        result.map_err(|e| {
            tracing::error!("dashboard fetch cycle failed: {e}");
            LOAD_FAILED_MESSAGE.to_string()
        })
    }
}

/// Assemble the view model from one cycle's decoded payloads.
///
/// Pure and deterministic: every field passes through unchanged except
/// `display_date`, which is derived from each activity point's date. Records
/// with zero counts or empty names are valid and are never dropped.
pub fn build_view_model(
    global: GlobalStats,
    users: Vec<UserSummary>,
    mut activity: Vec<ActivityPoint>,
    top_users: Vec<TopUser>,
    format_date: DateFormatter,
) -> DashboardViewModel {
    for point in &mut activity {
        point.display_date = format_date(&point.date);
    }
    DashboardViewModel::new(global, users, activity, top_users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stats::czech_display_date;

    fn sample_global() -> GlobalStats {
        GlobalStats {
            total_messages: 100,
            error_count: 5,
            message_count: 90,
            warning_count: 5,
            avg_magnitude: 1.2,
            unique_users: 10,
        }
    }

    #[test]
    fn test_build_with_empty_sequences() {
        let vm = build_view_model(
            sample_global(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            czech_display_date,
        );

        assert_eq!(vm.global.total_messages, 100);
        assert!(vm.users.is_empty());
        assert!(vm.activity.is_empty());
        assert!(vm.top_users.is_empty());
    }

    #[test]
    fn test_build_passes_fields_through_unchanged() {
        let users = vec![UserSummary {
            user_id: 7,
            user_name: String::new(),
            total_messages: 0,
            errors: 0,
            last_message: "2024-01-15T10:30:00Z".to_string(),
        }];
        let top_users = vec![TopUser {
            user_id: 7,
            user_name: "alice".to_string(),
            message_count: 42,
        }];

        let vm = build_view_model(
            sample_global(),
            users.clone(),
            Vec::new(),
            top_users.clone(),
            czech_display_date,
        );

        // Zero counts and empty names pass through; nothing is renamed,
        // recomputed, or filtered.
        assert_eq!(vm.global, sample_global());
        assert_eq!(vm.users, users);
        assert_eq!(vm.top_users, top_users);
    }

    #[test]
    fn test_build_populates_display_dates() {
        let activity = vec![ActivityPoint {
            date: "2024-01-15".to_string(),
            messages: 3,
            errors: 0,
            warnings: 1,
            display_date: String::new(),
        }];

        let vm = build_view_model(
            sample_global(),
            Vec::new(),
            activity,
            Vec::new(),
            czech_display_date,
        );

        assert_eq!(vm.activity[0].display_date, "15. 1. 2024");
        assert_eq!(vm.activity[0].date, "2024-01-15");
        assert_eq!(vm.activity[0].messages, 3);
    }

    #[test]
    fn test_build_keeps_malformed_date_rows() {
        let activity = vec![
            ActivityPoint {
                date: "garbage".to_string(),
                messages: 1,
                errors: 0,
                warnings: 0,
                display_date: String::new(),
            },
            ActivityPoint {
                date: "2024-02-01".to_string(),
                messages: 2,
                errors: 1,
                warnings: 0,
                display_date: String::new(),
            },
        ];

        let vm = build_view_model(
            sample_global(),
            Vec::new(),
            activity,
            Vec::new(),
            czech_display_date,
        );

        // One bad date must not abort the build or drop the row.
        assert_eq!(vm.activity.len(), 2);
        assert_eq!(vm.activity[0].display_date, "garbage");
        assert_eq!(vm.activity[1].display_date, "1. 2. 2024");
    }
}
