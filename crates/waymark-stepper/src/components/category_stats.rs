//! Category statistics panel.

use dioxus::prelude::*;
use waymark_core::JourneyState;

use crate::view::category_cells;

/// Three-cell panel with step counts per category.
#[component]
pub fn CategoryStats(state: Signal<JourneyState>) -> Element {
    let cells = category_cells(state.read().catalog());

    rsx! {
        section {
            class: "stats-panel",

            div {
                class: "stats-grid",

                for (category, count) in cells {
                    StatItem {
                        key: "{category.display_name()}",
                        label: category.display_name().to_string(),
                        value: count.to_string(),
                    }
                }
            }
        }
    }
}

/// A single stat item.
#[component]
fn StatItem(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "stat-item",

            span {
                class: "stat-value",
                "{value}"
            }

            span {
                class: "stat-label",
                "{label}"
            }
        }
    }
}
