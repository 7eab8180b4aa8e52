//! Progress header: "N of M complete" plus the progress bar.

use dioxus::prelude::*;
use waymark_core::JourneyState;

use crate::view::{percent_label, progress_label};

use super::ProgressBar;

#[component]
pub fn ProgressSummary(state: Signal<JourneyState>) -> Element {
    let state_read = state.read();
    let catalog = state_read.catalog();
    let percentage = catalog.completion_percentage();

    rsx! {
        section {
            class: "progress-summary",

            div {
                class: "progress-header",
                span { class: "progress-title", "Setup Progress" }
                span {
                    class: "progress-count",
                    "{progress_label(catalog)} · {percent_label(percentage)}"
                }
            }

            ProgressBar { value: percentage }
        }
    }
}
