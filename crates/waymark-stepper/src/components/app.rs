//! Root application component for the journey stepper.

use std::sync::Arc;

use dioxus::core::Task;
use dioxus::prelude::*;
use tokio::time::sleep;
use waymark_core::{JourneyEvent, JourneyState, SelectOutcome, StepCatalog, CELEBRATION_DURATION};

use crate::theme::{ThemeSwitcher, ThemedRoot};

use super::{
    CategoryStats, CelebrationBanner, FlowDiagram, ProgressSummary, RecommendationPanel, StepCards,
};

/// Root application component.
///
/// Owns the journey state for as long as it is mounted. Every interaction
/// is reported through `on_event`.
#[component]
pub fn App(catalog: Arc<StepCatalog>, on_event: EventHandler<JourneyEvent>) -> Element {
    let state = use_signal(move || JourneyState::new(catalog));
    // Pending celebration dismissal. Scope teardown cancels it on unmount.
    let dismissal = use_signal(|| None::<Task>);

    use_drop(|| {
        tracing::debug!("Journey view unmounted");
    });

    let on_select = use_callback(move |step_id: String| {
        let mut state = state;
        let outcome = state.write().select(&step_id);
        apply_outcome(outcome, state, dismissal, on_event);
    });

    let on_tip_action = use_callback(move |_: ()| {
        let mut state = state;
        let event = {
            let state_read = state.read();
            JourneyEvent::RecommendationAction {
                tip: state_read.recommendation().kind,
                step_id: state_read.catalog().current_step().map(|s| s.id.clone()),
            }
        };
        on_event.call(event);

        let outcome = state.write().select_current();
        apply_outcome(outcome, state, dismissal, on_event);
    });

    let on_continue = use_callback(move |step_id: String| {
        on_event.call(JourneyEvent::ContinueRequested { step_id });
    });

    let tip = state.read().recommendation();

    rsx! {
        ThemedRoot {
            div {
                class: "journey",

                Header {}

                CelebrationBanner { state }

                ProgressSummary { state }

                FlowDiagram { state, on_select }

                StepCards { state, on_select, on_continue }

                RecommendationPanel { tip, on_action: on_tip_action }

                CategoryStats { state }
            }
        }
    }
}

/// Reports an outcome and, for a celebration, (re)schedules its dismissal.
fn apply_outcome(
    outcome: SelectOutcome,
    state: Signal<JourneyState>,
    mut dismissal: Signal<Option<Task>>,
    on_event: EventHandler<JourneyEvent>,
) {
    for event in outcome.events() {
        on_event.call(event);
    }

    let Some(ticket) = outcome.ticket() else {
        return;
    };

    if let Some(task) = dismissal.write().take() {
        task.cancel();
    }

    let task = spawn(async move {
        let mut state = state;
        sleep(CELEBRATION_DURATION).await;
        if state.write().dismiss_celebration(ticket) {
            on_event.call(JourneyEvent::CelebrationDismissed);
        }
    });
    dismissal.set(Some(task));
}

/// Header with title and theme switcher.
#[component]
fn Header() -> Element {
    rsx! {
        header {
            class: "journey-header",

            div {
                class: "journey-header-left",
                h1 { class: "journey-title", "Getting Started" }
                span { class: "journey-subtitle", "Your setup journey, one step at a time" }
            }

            ThemeSwitcher {}
        }
    }
}
