// Text rendering of the dashboard
use crate::domain::dashboard::DashboardViewModel;
use crate::domain::load_state::LoadState;
use std::fmt::Write;

/// Render the current load state as text.
///
/// Pure function of the state: `Pending` yields only a loading indicator,
/// `Failed` only the reason, `Ready` the full dashboard. Mixed renderings
/// (partial data plus an error notice) are impossible by construction.
pub fn render(state: &LoadState) -> String {
    match state {
        LoadState::Pending => "Loading dashboard...".to_string(),
        LoadState::Failed(reason) => format!("Error: {reason}"),
        LoadState::Ready(view_model) => render_dashboard(view_model),
    }
}

fn render_dashboard(vm: &DashboardViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "MonoLogger Dashboard");
    let _ = writeln!(out);
    let _ = writeln!(out, "Total messages:  {}", vm.global.total_messages);
    let _ = writeln!(out, "Errors:          {}", vm.global.error_count);
    let _ = writeln!(out, "Warnings:        {}", vm.global.warning_count);
    let _ = writeln!(out, "Unique users:    {}", vm.global.unique_users);
    let _ = writeln!(out, "Avg magnitude:   {:.2}", vm.global.avg_magnitude);

    let _ = writeln!(out);
    let _ = writeln!(out, "Activity history");
    for point in &vm.activity {
        let _ = writeln!(
            out,
            "  {:<14} messages {:>6}  errors {:>4}  warnings {:>4}",
            point.display_date, point.messages, point.errors, point.warnings
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Most active users");
    for user in &vm.top_users {
        let _ = writeln!(out, "  {:<20} {}", user.user_name, user.message_count);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Users");
    for user in &vm.users {
        let _ = writeln!(
            out,
            "  #{:<6} {:<20} messages {:>6}  errors {:>4}  last {}",
            user.user_id, user.user_name, user.total_messages, user.errors, user.last_message
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stats::{ActivityPoint, GlobalStats};

    #[test]
    fn test_pending_renders_only_a_loading_indicator() {
        assert_eq!(render(&LoadState::Pending), "Loading dashboard...");
    }

    #[test]
    fn test_failed_renders_only_the_reason() {
        let rendered = render(&LoadState::Failed("service unreachable".to_string()));
        assert_eq!(rendered, "Error: service unreachable");
    }

    #[test]
    fn test_ready_renders_counters_and_display_dates() {
        let vm = DashboardViewModel::new(
            GlobalStats {
                total_messages: 100,
                error_count: 5,
                message_count: 90,
                warning_count: 5,
                avg_magnitude: 1.2,
                unique_users: 10,
            },
            Vec::new(),
            vec![ActivityPoint {
                date: "2024-01-15".to_string(),
                messages: 3,
                errors: 0,
                warnings: 1,
                display_date: "15. 1. 2024".to_string(),
            }],
            Vec::new(),
        );

        let rendered = render(&LoadState::Ready(vm));
        assert!(rendered.contains("Total messages:  100"));
        assert!(rendered.contains("15. 1. 2024"));
        assert!(!rendered.contains("Error:"));
    }
}
