//! Headless host for a journey: state, celebration timer and observer.
//!
//! Embedders without a UI runtime of their own (tests, scripted
//! walkthroughs) drive a [`JourneySession`] instead of wiring the
//! timer by hand. The desktop view does the same work with Dioxus tasks.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::catalog::StepCatalog;
use crate::events::{JourneyEvent, JourneyObserver, TracingObserver};
use crate::journey::{CelebrationTicket, JourneyState, SelectOutcome, CELEBRATION_DURATION};
use crate::recommend::RecommendationPayload;
use crate::timer::CelebrationTimer;

/// A mounted journey without a view.
///
/// Dropping the session cancels any pending celebration dismissal.
pub struct JourneySession {
    state: Arc<Mutex<JourneyState>>,
    timer: CelebrationTimer,
    observer: Arc<dyn JourneyObserver>,
}

impl JourneySession {
    pub fn new(
        catalog: impl Into<Arc<StepCatalog>>,
        observer: impl JourneyObserver + 'static,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(JourneyState::new(catalog))),
            timer: CelebrationTimer::new(),
            observer: Arc::new(observer),
        }
    }

    /// Creates a session that logs its events.
    pub fn with_tracing(catalog: impl Into<Arc<StepCatalog>>) -> Self {
        Self::new(catalog, TracingObserver)
    }

    /// Selects a step. See [`JourneyState::select`].
    ///
    /// Must be called from within a tokio runtime when the step may be
    /// completed, since that arms the dismissal timer.
    pub fn select(&mut self, step_id: &str) -> SelectOutcome {
        let outcome = self.state.lock().select(step_id);
        self.dispatch(&outcome);
        outcome
    }

    /// Jumps back to the catalog's current step.
    pub fn select_current(&mut self) -> SelectOutcome {
        let outcome = self.state.lock().select_current();
        self.dispatch(&outcome);
        outcome
    }

    /// Presses the recommendation panel's action button: reports the tip
    /// that was showing, then jumps back to the current step.
    pub fn act_on_recommendation(&mut self) -> SelectOutcome {
        let event = {
            let state = self.state.lock();
            JourneyEvent::RecommendationAction {
                tip: state.recommendation().kind,
                step_id: state.catalog().current_step().map(|s| s.id.clone()),
            }
        };
        self.observer.notify(&event);
        self.select_current()
    }

    /// Presses "Continue" on the current step's card. Returns the step id,
    /// or `None` if the catalog has no current step.
    pub fn request_continue(&self) -> Option<String> {
        let step_id = self
            .state
            .lock()
            .catalog()
            .current_step()
            .map(|s| s.id.clone())?;
        self.observer.notify(&JourneyEvent::ContinueRequested {
            step_id: step_id.clone(),
        });
        Some(step_id)
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> JourneyState {
        self.state.lock().clone()
    }

    pub fn active_step_id(&self) -> Option<String> {
        self.state.lock().active_step_id().map(str::to_string)
    }

    pub fn celebration_visible(&self) -> bool {
        self.state.lock().celebration_visible()
    }

    pub fn recommendation(&self) -> RecommendationPayload {
        self.state.lock().recommendation()
    }

    /// Whether a celebration dismissal is scheduled.
    pub fn dismissal_pending(&self) -> bool {
        self.timer.is_pending()
    }

    fn dispatch(&mut self, outcome: &SelectOutcome) {
        for event in outcome.events() {
            self.observer.notify(&event);
        }
        if let Some(ticket) = outcome.ticket() {
            self.schedule_dismissal(ticket);
        }
    }

    fn schedule_dismissal(&mut self, ticket: CelebrationTicket) {
        let state: Weak<Mutex<JourneyState>> = Arc::downgrade(&self.state);
        let observer = Arc::clone(&self.observer);

        self.timer.arm(CELEBRATION_DURATION, move || {
            let Some(state) = state.upgrade() else {
                return;
            };
            let dismissed = state.lock().dismiss_celebration(ticket);
            if dismissed {
                observer.notify(&JourneyEvent::CelebrationDismissed);
            }
        });
    }
}

impl std::fmt::Debug for JourneySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JourneySession")
            .field("state", &*self.state.lock())
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ChannelObserver;
    use crate::recommend::TipKind;

    #[tokio::test]
    async fn test_select_reports_events() {
        let (observer, mut rx) = ChannelObserver::channel();
        let mut session = JourneySession::new(StepCatalog::builtin(), observer);

        session.select("webhooks");
        session.select("analytics");

        assert_eq!(rx.recv().await.unwrap().name(), "step_selected");
        assert_eq!(rx.recv().await.unwrap().name(), "selection_ignored");
        assert_eq!(session.active_step_id().as_deref(), Some("webhooks"));
    }

    #[tokio::test]
    async fn test_recommendation_action_jumps_to_current() {
        let (observer, mut rx) = ChannelObserver::channel();
        let mut session = JourneySession::new(StepCatalog::builtin(), observer);

        session.select("webhooks");
        assert_eq!(session.recommendation().kind, TipKind::Automation);

        let outcome = session.act_on_recommendation();
        assert!(outcome.is_selected());
        assert_eq!(session.active_step_id().as_deref(), Some("repositories"));

        let _ = rx.recv().await;
        assert_eq!(
            rx.recv().await,
            Some(JourneyEvent::RecommendationAction {
                tip: TipKind::Automation,
                step_id: Some("repositories".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_request_continue() {
        let (observer, mut rx) = ChannelObserver::channel();
        let session = JourneySession::new(StepCatalog::builtin(), observer);

        assert_eq!(session.request_continue().as_deref(), Some("repositories"));
        assert_eq!(
            rx.recv().await,
            Some(JourneyEvent::ContinueRequested {
                step_id: "repositories".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_debug_output() {
        let session = JourneySession::with_tracing(StepCatalog::builtin());
        assert!(format!("{:?}", session).contains("JourneySession"));
    }
}
