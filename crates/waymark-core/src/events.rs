//! Journey events and the observers that receive them.
//!
//! Every user interaction with the journey view is reported as a
//! [`JourneyEvent`] to a caller-supplied [`JourneyObserver`].

use serde::Serialize;
use tokio::sync::mpsc;

use crate::catalog::StepStatus;
use crate::recommend::TipKind;

/// Why a selection request changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The step is locked.
    Locked,
    /// A jump to the current step was requested but the catalog has none.
    NoCurrentStep,
}

/// Something that happened in the journey view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum JourneyEvent {
    StepSelected {
        step_id: String,
        status: StepStatus,
    },

    SelectionIgnored {
        step_id: Option<String>,
        reason: IgnoreReason,
    },

    ActiveStepCleared {
        step_id: String,
    },

    CelebrationStarted {
        step_id: String,
    },

    CelebrationDismissed,

    /// The "Continue" action on the current step's card.
    ContinueRequested {
        step_id: String,
    },

    /// The recommendation panel's action button.
    RecommendationAction {
        tip: TipKind,
        step_id: Option<String>,
    },
}

impl JourneyEvent {
    /// Returns the snake_case event name.
    pub fn name(&self) -> &'static str {
        match self {
            JourneyEvent::StepSelected { .. } => "step_selected",
            JourneyEvent::SelectionIgnored { .. } => "selection_ignored",
            JourneyEvent::ActiveStepCleared { .. } => "active_step_cleared",
            JourneyEvent::CelebrationStarted { .. } => "celebration_started",
            JourneyEvent::CelebrationDismissed => "celebration_dismissed",
            JourneyEvent::ContinueRequested { .. } => "continue_requested",
            JourneyEvent::RecommendationAction { .. } => "recommendation_action",
        }
    }

    /// Returns the step this event refers to, if any.
    pub fn step_id(&self) -> Option<&str> {
        match self {
            JourneyEvent::StepSelected { step_id, .. }
            | JourneyEvent::ActiveStepCleared { step_id }
            | JourneyEvent::CelebrationStarted { step_id }
            | JourneyEvent::ContinueRequested { step_id } => Some(step_id),
            JourneyEvent::SelectionIgnored { step_id, .. }
            | JourneyEvent::RecommendationAction { step_id, .. } => step_id.as_deref(),
            JourneyEvent::CelebrationDismissed => None,
        }
    }
}

/// Receives journey events.
pub trait JourneyObserver: Send + Sync {
    fn notify(&self, event: &JourneyEvent);
}

impl<F> JourneyObserver for F
where
    F: Fn(&JourneyEvent) + Send + Sync,
{
    fn notify(&self, event: &JourneyEvent) {
        self(event)
    }
}

/// Logs every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl JourneyObserver for TracingObserver {
    fn notify(&self, event: &JourneyEvent) {
        match event {
            JourneyEvent::SelectionIgnored { step_id, reason } => {
                tracing::debug!(step_id = ?step_id, reason = ?reason, "Selection ignored");
            }
            JourneyEvent::ActiveStepCleared { step_id } => {
                tracing::warn!(step_id = %step_id, "Unknown step selected, clearing active step");
            }
            JourneyEvent::CelebrationDismissed => {
                tracing::debug!("Celebration dismissed");
            }
            _ => {
                tracing::info!(
                    event = event.name(),
                    step_id = event.step_id().unwrap_or("-"),
                    "Journey event"
                );
            }
        }
    }
}

/// Forwards events over an unbounded tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<JourneyEvent>,
}

impl ChannelObserver {
    /// Creates the observer and the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<JourneyEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl JourneyObserver for ChannelObserver {
    fn notify(&self, event: &JourneyEvent) {
        if self.tx.send(event.clone()).is_err() {
            tracing::trace!(event = event.name(), "Event receiver dropped");
        }
    }
}
