//! Horizontal flow diagram: one marker per step, joined by connectors.

use dioxus::prelude::*;
use waymark_core::{JourneyState, StepDefinition};

use crate::icons::step_glyph;
use crate::view::status_class;

use super::Avatar;

#[component]
pub fn FlowDiagram(state: Signal<JourneyState>, on_select: EventHandler<String>) -> Element {
    let state_read = state.read();
    let catalog = state_read.catalog();
    let last = catalog.len().saturating_sub(1);

    rsx! {
        section {
            class: "flow-diagram",

            for (index, step) in catalog.iter().enumerate() {
                FlowSegment {
                    key: "{step.id}",
                    step: step.clone(),
                    active: state_read.is_active(&step.id),
                    // No connector after the last marker.
                    has_connector: index < last,
                    connector_filled: catalog.connector_filled(index),
                    on_select,
                }
            }
        }
    }
}

/// A marker and, unless it is the last one, the connector to its right.
#[component]
fn FlowSegment(
    step: StepDefinition,
    active: bool,
    has_connector: bool,
    connector_filled: bool,
    on_select: EventHandler<String>,
) -> Element {
    let selectable = step.status.is_selectable();
    let step_id = step.id.clone();
    let marker_class = format!(
        "flow-marker {}{}{}",
        status_class(step.status),
        if selectable { " flow-marker-clickable" } else { "" },
        if active { " flow-marker-active" } else { "" }
    );

    rsx! {
        div {
            class: "flow-segment",

            div {
                class: "{marker_class}",
                onclick: move |_| {
                    if selectable {
                        on_select.call(step_id.clone());
                    }
                },

                Avatar {
                    class: "flow-avatar {status_class(step.status)}",
                    span { class: "flow-glyph", "{step_glyph(step.icon)}" }
                }
                div { class: "flow-title", "{step.title}" }
            }

            if has_connector {
                div {
                    class: if connector_filled { "flow-connector flow-connector-filled" } else { "flow-connector" },
                }
            }
        }
    }
}
