//! Contextual tip box.

use dioxus::prelude::*;
use waymark_core::RecommendationPayload;

use crate::icons::tip_glyph;

use super::{Button, ButtonSize};

/// Shows the tip for the active step. The action button reports back to
/// the caller, which jumps to the current step.
#[component]
pub fn RecommendationPanel(tip: RecommendationPayload, on_action: EventHandler<()>) -> Element {
    rsx! {
        section {
            class: "recommendation-panel",

            div { class: "recommendation-icon", "{tip_glyph(tip.icon)}" }

            div {
                class: "recommendation-body",
                div { class: "recommendation-title", "{tip.title}" }
                p { class: "recommendation-message", "{tip.message}" }
                Button {
                    label: tip.action_label.to_string(),
                    size: ButtonSize::Small,
                    onclick: move |_| on_action.call(()),
                }
            }
        }
    }
}
