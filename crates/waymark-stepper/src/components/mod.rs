//! UI components for the journey stepper.

mod app;
mod category_stats;
mod celebration;
mod flow_diagram;
mod primitives;
mod progress_summary;
mod recommendation_panel;
mod step_cards;

pub use app::*;
pub use category_stats::*;
pub use celebration::*;
pub use flow_diagram::*;
pub use primitives::*;
pub use progress_summary::*;
pub use recommendation_panel::*;
pub use step_cards::*;
