//! Per-view journey state: the active step and the celebration flag.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{StepCatalog, StepDefinition, StepStatus};
use crate::events::{IgnoreReason, JourneyEvent};
use crate::recommend::{recommend, RecommendationPayload};

/// How long the celebration stays visible after a completed step is clicked.
pub const CELEBRATION_DURATION: Duration = Duration::from_millis(2000);

/// Identifies one celebration. A dismissal carrying an older ticket than
/// the latest celebration is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CelebrationTicket {
    generation: u64,
}

impl CelebrationTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of a selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The step became active.
    Selected { step_id: String, status: StepStatus },
    /// A completed step became active and a celebration started. The host
    /// must schedule [`JourneyState::dismiss_celebration`] with the ticket
    /// after [`CELEBRATION_DURATION`].
    Celebrating {
        step_id: String,
        ticket: CelebrationTicket,
    },
    /// Nothing changed.
    Ignored {
        step_id: Option<String>,
        reason: IgnoreReason,
    },
    /// The id is not in the catalog; there is no active step any more.
    Cleared { step_id: String },
}

impl SelectOutcome {
    /// Returns the celebration ticket, if this selection started one.
    pub fn ticket(&self) -> Option<CelebrationTicket> {
        match self {
            SelectOutcome::Celebrating { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }

    /// Whether the active step changed (or was re-confirmed).
    pub fn is_selected(&self) -> bool {
        matches!(
            self,
            SelectOutcome::Selected { .. } | SelectOutcome::Celebrating { .. }
        )
    }

    /// Events to report for this outcome, in order.
    pub fn events(&self) -> Vec<JourneyEvent> {
        match self {
            SelectOutcome::Selected { step_id, status } => vec![JourneyEvent::StepSelected {
                step_id: step_id.clone(),
                status: *status,
            }],
            SelectOutcome::Celebrating { step_id, .. } => vec![
                JourneyEvent::StepSelected {
                    step_id: step_id.clone(),
                    status: StepStatus::Completed,
                },
                JourneyEvent::CelebrationStarted {
                    step_id: step_id.clone(),
                },
            ],
            SelectOutcome::Ignored { step_id, reason } => vec![JourneyEvent::SelectionIgnored {
                step_id: step_id.clone(),
                reason: *reason,
            }],
            SelectOutcome::Cleared { step_id } => vec![JourneyEvent::ActiveStepCleared {
                step_id: step_id.clone(),
            }],
        }
    }
}

/// Selection state for one mounted journey view.
///
/// The catalog is shared and read-only. `active_step_id` and
/// `celebration_visible` change independently of each other.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyState {
    catalog: Arc<StepCatalog>,
    active_step_id: Option<String>,
    celebration_visible: bool,
    celebration_generation: u64,
}

impl JourneyState {
    /// Creates the state with the catalog's current step active.
    pub fn new(catalog: impl Into<Arc<StepCatalog>>) -> Self {
        let catalog = catalog.into();
        let active_step_id = catalog.current_step().map(|s| s.id.clone());
        Self {
            catalog,
            active_step_id,
            celebration_visible: false,
            celebration_generation: 0,
        }
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    /// Returns a shared handle to the catalog.
    pub fn catalog_handle(&self) -> Arc<StepCatalog> {
        Arc::clone(&self.catalog)
    }

    pub fn active_step_id(&self) -> Option<&str> {
        self.active_step_id.as_deref()
    }

    /// Returns the definition of the active step, if any.
    pub fn active_step(&self) -> Option<&StepDefinition> {
        self.active_step_id
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn is_active(&self, step_id: &str) -> bool {
        self.active_step_id.as_deref() == Some(step_id)
    }

    pub fn celebration_visible(&self) -> bool {
        self.celebration_visible
    }

    /// Handles a click on a step card or flow marker.
    ///
    /// Locked steps are ignored. Unknown ids clear the active step.
    /// Selecting a completed step (re)starts the celebration.
    pub fn select(&mut self, step_id: &str) -> SelectOutcome {
        let Some(step) = self.catalog.get(step_id) else {
            self.active_step_id = None;
            return SelectOutcome::Cleared {
                step_id: step_id.to_string(),
            };
        };

        let status = step.status;
        if !status.is_selectable() {
            return SelectOutcome::Ignored {
                step_id: Some(step_id.to_string()),
                reason: IgnoreReason::Locked,
            };
        }

        self.active_step_id = Some(step_id.to_string());

        if status == StepStatus::Completed {
            self.celebration_generation += 1;
            self.celebration_visible = true;
            SelectOutcome::Celebrating {
                step_id: step_id.to_string(),
                ticket: CelebrationTicket {
                    generation: self.celebration_generation,
                },
            }
        } else {
            SelectOutcome::Selected {
                step_id: step_id.to_string(),
                status,
            }
        }
    }

    /// Selects whichever step is current in the catalog, regardless of
    /// what is active now.
    pub fn select_current(&mut self) -> SelectOutcome {
        match self.catalog.current_step().map(|s| s.id.clone()) {
            Some(id) => self.select(&id),
            None => SelectOutcome::Ignored {
                step_id: None,
                reason: IgnoreReason::NoCurrentStep,
            },
        }
    }

    /// Hides the celebration if `ticket` belongs to the latest one.
    /// Returns whether the flag was cleared.
    pub fn dismiss_celebration(&mut self, ticket: CelebrationTicket) -> bool {
        if ticket.generation != self.celebration_generation || !self.celebration_visible {
            return false;
        }
        self.celebration_visible = false;
        true
    }

    /// Tip for the active step.
    pub fn recommendation(&self) -> RecommendationPayload {
        recommend(self.active_step())
    }
}
