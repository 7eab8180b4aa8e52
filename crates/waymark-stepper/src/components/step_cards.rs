//! Grid of step cards.

use dioxus::prelude::*;
use waymark_core::{JourneyState, StepDefinition, StepStatus};

use crate::icons::step_glyph;
use crate::view::{badge_label, card_class, status_class};

use super::{Avatar, Button, ButtonSize, Card};

#[component]
pub fn StepCards(
    state: Signal<JourneyState>,
    on_select: EventHandler<String>,
    on_continue: EventHandler<String>,
) -> Element {
    let state_read = state.read();

    rsx! {
        section {
            class: "step-grid",

            for (index, step) in state_read.catalog().iter().enumerate() {
                StepCard {
                    key: "{step.id}",
                    step: step.clone(),
                    index,
                    active: state_read.is_active(&step.id),
                    on_select,
                    on_continue,
                }
            }
        }
    }
}

#[component]
fn StepCard(
    step: StepDefinition,
    index: usize,
    active: bool,
    on_select: EventHandler<String>,
    on_continue: EventHandler<String>,
) -> Element {
    let select_id = step.id.clone();
    let continue_id = step.id.clone();
    let is_current = step.status == StepStatus::Current;

    rsx! {
        Card {
            class: card_class(&step, active),
            clickable: step.status.is_selectable(),
            onclick: move |_| on_select.call(select_id.clone()),

            Avatar {
                class: "step-badge {status_class(step.status)}",
                "{badge_label(&step, index)}"
            }

            div {
                class: "step-card-body",

                span { class: "step-icon {status_class(step.status)}", "{step_glyph(step.icon)}" }
                div { class: "step-title", "{step.title}" }
                div { class: "step-description", "{step.description}" }
                div { class: "step-time", "{step.estimated_time}" }
                div {
                    class: "step-meta",
                    span { class: "step-category", "{step.category.display_name()}" }
                    span { class: "step-priority priority-{step.priority.as_str()}", "{step.priority.as_str()}" }
                }

                if is_current {
                    Button {
                        label: "Continue".to_string(),
                        size: ButtonSize::Small,
                        onclick: move |evt: MouseEvent| {
                            // Keep the card's own click handler out of it.
                            evt.stop_propagation();
                            on_continue.call(continue_id.clone());
                        },
                    }
                }
            }
        }
    }
}
