// Load lifecycle state machine
use super::dashboard::DashboardViewModel;

/// Lifecycle of one fetch cycle. The presentation layer is a pure function of
/// this state: `Pending` renders a loading indicator, `Failed` the reason,
/// `Ready` the full dashboard. No state permits mixed rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Pending,
    Ready(DashboardViewModel),
    Failed(String),
}

impl LoadState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }
}

/// Events that drive the state machine.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// A fetch cycle has started (initial activation or manual refresh).
    Activated,
    /// The cycle completed with a built view model.
    Loaded(DashboardViewModel),
    /// The cycle failed; carries the user-visible reason.
    LoadFailed(String),
}

/// Pure reducer over the load lifecycle.
///
/// `Activated` always re-enters `Pending`, discarding whatever state preceded
/// it; there is no state that retains old data while a fetch is in flight.
/// `Ready` and `Failed` are both re-enterable, never terminal.
pub fn next_state(_current: LoadState, event: DashboardEvent) -> LoadState {
    match event {
        DashboardEvent::Activated => LoadState::Pending,
        DashboardEvent::Loaded(view_model) => LoadState::Ready(view_model),
        DashboardEvent::LoadFailed(reason) => LoadState::Failed(reason),
    }
}
