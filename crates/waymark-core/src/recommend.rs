//! Contextual tips chosen from the active step.

use serde::{Deserialize, Serialize};

use crate::catalog::StepDefinition;

/// Which tip was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipKind {
    QuickStart,
    Automation,
    General,
}

/// Glyph shown next to a tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipIcon {
    Lightbulb,
    Zap,
    Sparkles,
}

/// Everything the recommendation panel renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationPayload {
    pub kind: TipKind,
    pub title: &'static str,
    pub message: &'static str,
    pub action_label: &'static str,
    pub icon: TipIcon,
}

const REPOSITORIES_MESSAGE: &str =
    "Select your most active repositories first to see results faster.";
const REPOSITORIES_ACTION: &str = "Choose 2–3 repositories";

const QUICK_START_TIP: RecommendationPayload = RecommendationPayload {
    kind: TipKind::QuickStart,
    title: "Quick Start Tip",
    message: REPOSITORIES_MESSAGE,
    action_label: REPOSITORIES_ACTION,
    icon: TipIcon::Lightbulb,
};

const AUTOMATION_TIP: RecommendationPayload = RecommendationPayload {
    kind: TipKind::Automation,
    title: "Automation Tip",
    message: "Enable webhooks so new commits show up in real time instead of on the next sync.",
    action_label: "Enable webhooks",
    icon: TipIcon::Zap,
};

// Shares its copy with the quick-start tip until per-step tips exist for
// the later stages.
const GENERAL_TIP: RecommendationPayload = RecommendationPayload {
    kind: TipKind::General,
    title: "Getting Started Tip",
    message: REPOSITORIES_MESSAGE,
    action_label: REPOSITORIES_ACTION,
    icon: TipIcon::Sparkles,
};

/// Picks the tip for the active step. Unknown ids and the absence of an
/// active step fall back to the general tip.
pub fn recommend(active: Option<&StepDefinition>) -> RecommendationPayload {
    match active.map(|step| step.id.as_str()) {
        Some("repositories") => QUICK_START_TIP,
        Some("webhooks") => AUTOMATION_TIP,
        _ => GENERAL_TIP,
    }
}
