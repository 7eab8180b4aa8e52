//! Glyphs for the opaque icon handles in the catalog.

use waymark_core::{StepIcon, TipIcon};

pub fn step_glyph(icon: StepIcon) -> &'static str {
    match icon {
        StepIcon::Check => "✓",
        StepIcon::Folder => "📁",
        StepIcon::Zap => "⚡",
        StepIcon::GitCommit => "◉",
        StepIcon::Share => "↗",
        StepIcon::BarChart => "📊",
    }
}

pub fn tip_glyph(icon: TipIcon) -> &'static str {
    match icon {
        TipIcon::Lightbulb => "💡",
        TipIcon::Zap => "⚡",
        TipIcon::Sparkles => "✨",
    }
}
