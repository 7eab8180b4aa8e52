//! Presentation helpers shared by the components and the text summary.
//!
//! Kept free of Dioxus types so they can be tested directly.

use waymark_core::{StepCatalog, StepCategory, StepDefinition, StepStatus};

/// Categories shown in the statistics panel, in display order.
pub const STAT_CATEGORIES: [StepCategory; 3] = [
    StepCategory::Setup,
    StepCategory::Automation,
    StepCategory::Analytics,
];

/// CSS modifier for a step status, e.g. `status-current`.
pub fn status_class(status: StepStatus) -> String {
    format!("status-{}", status.as_str())
}

/// Badge content: a check for completed steps, otherwise the 1-based position.
pub fn badge_label(step: &StepDefinition, index: usize) -> String {
    if step.status == StepStatus::Completed {
        "✓".to_string()
    } else {
        (index + 1).to_string()
    }
}

/// Rounded percentage label, e.g. "17%".
pub fn percent_label(percentage: f64) -> String {
    format!("{:.0}%", percentage.clamp(0.0, 100.0))
}

/// "N of M complete".
pub fn progress_label(catalog: &StepCatalog) -> String {
    format!(
        "{} of {} complete",
        catalog.count_by_status(StepStatus::Completed),
        catalog.len()
    )
}

/// Class list for a step card.
pub fn card_class(step: &StepDefinition, active: bool) -> String {
    let mut class = format!("step-card {}", status_class(step.status));
    if step.status.is_selectable() {
        class.push_str(" step-card-clickable");
    }
    if active {
        class.push_str(" step-card-active");
    }
    class
}

/// Counts for the statistics panel.
pub fn category_cells(catalog: &StepCatalog) -> Vec<(StepCategory, usize)> {
    STAT_CATEGORIES
        .iter()
        .map(|category| (*category, catalog.count_by_category(*category)))
        .collect()
}
