// Dashboard view model
use super::stats::{ActivityPoint, GlobalStats, TopUser, UserSummary};

/// The single aggregate handed to the presentation layer.
///
/// Built wholesale from one fetch cycle's payloads and replaced, never
/// partially updated, on the next cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewModel {
    pub global: GlobalStats,
    pub users: Vec<UserSummary>,
    pub activity: Vec<ActivityPoint>,
    pub top_users: Vec<TopUser>,
}

impl DashboardViewModel {
    pub fn new(
        global: GlobalStats,
        users: Vec<UserSummary>,
        activity: Vec<ActivityPoint>,
        top_users: Vec<TopUser>,
    ) -> Self {
        Self {
            global,
            users,
            activity,
            top_users,
        }
    }
}
