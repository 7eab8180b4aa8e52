//! Transient banner shown after re-selecting a completed step.

use dioxus::prelude::*;
use waymark_core::JourneyState;

#[component]
pub fn CelebrationBanner(state: Signal<JourneyState>) -> Element {
    let state_read = state.read();
    if !state_read.celebration_visible() {
        return rsx! {};
    }

    let title = state_read
        .active_step()
        .map(|s| s.title.clone())
        .unwrap_or_else(|| "This step".to_string());

    rsx! {
        div {
            class: "celebration-banner",
            role: "status",
            span { class: "celebration-glyph", "🎉" }
            span { class: "celebration-text", "{title} is already done. Nice work!" }
        }
    }
}
