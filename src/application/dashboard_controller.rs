// Dashboard controller - Drives the load state machine across fetch cycles
use crate::application::dashboard_service::DashboardService;
use crate::domain::load_state::{DashboardEvent, LoadState, next_state};
use tokio::sync::Mutex;

struct Inner {
    state: LoadState,
    generation: u64,
}

/// Owns the current [`LoadState`] and runs fetch cycles against it.
///
/// Every refresh re-enters `Pending` first and bumps a cycle generation; a
/// cycle's outcome is applied only while it is still the newest cycle, so the
/// last cycle to start is the one whose result is rendered, regardless of
/// completion order. A superseded cycle never reaches `Ready`.
pub struct DashboardController {
    service: DashboardService,
    inner: Mutex<Inner>,
}

impl DashboardController {
    pub fn new(service: DashboardService) -> Self {
        Self {
            service,
            inner: Mutex::new(Inner {
                state: LoadState::Pending,
                generation: 0,
            }),
        }
    }

    /// Current state, for the presentation layer to render.
    pub async fn state(&self) -> LoadState {
        self.inner.lock().await.state.clone()
    }

    /// Run one fetch cycle and return the state it produced.
    pub async fn refresh(&self) -> LoadState {
        let cycle = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            inner.state = next_state(inner.state.clone(), DashboardEvent::Activated);
            inner.generation
        };

        let event = match self.service.load_dashboard().await {
            Ok(view_model) => DashboardEvent::Loaded(view_model),
            Err(reason) => DashboardEvent::LoadFailed(reason),
        };

        let mut inner = self.inner.lock().await;
        if inner.generation == cycle {
            inner.state = next_state(inner.state.clone(), event);
        } else {
            tracing::debug!("discarding result of superseded fetch cycle {cycle}");
        }
        inner.state.clone()
    }
}
