//! Plain-text rendering of a journey for `--summary`.

use std::fmt::Write;

use waymark_core::{JourneyState, StepStatus};

use crate::view::{badge_label, category_cells, percent_label, progress_label};

fn status_marker(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Completed => "[x]",
        StepStatus::Current => "[>]",
        StepStatus::Upcoming => "[ ]",
        StepStatus::Locked => "[-]",
    }
}

/// Renders progress, the step list, the active tip and category counts.
pub fn render_summary(state: &JourneyState) -> String {
    let catalog = state.catalog();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Setup Progress: {} ({})",
        progress_label(catalog),
        percent_label(catalog.completion_percentage())
    );

    match catalog.current_step() {
        Some(step) => {
            let _ = writeln!(out, "Current step: {} ({})", step.title, step.estimated_time);
        }
        None => {
            let _ = writeln!(out, "Current step: none");
        }
    }
    out.push('\n');

    for (index, step) in catalog.iter().enumerate() {
        let _ = writeln!(
            out,
            "{} {:>2} {} - {} [{}]",
            status_marker(step.status),
            badge_label(step, index),
            step.title,
            step.description,
            step.estimated_time
        );
    }
    out.push('\n');

    let tip = state.recommendation();
    let _ = writeln!(out, "{}: {}", tip.title, tip.message);
    let _ = writeln!(out, "  -> {}", tip.action_label);
    out.push('\n');

    let stats: Vec<String> = category_cells(catalog)
        .into_iter()
        .map(|(category, count)| format!("{} {}", category.display_name(), count))
        .collect();
    let _ = writeln!(out, "{}", stats.join(" | "));

    out
}
