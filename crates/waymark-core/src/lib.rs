//! Core logic for the Waymark onboarding stepper.
//!
//! This crate has no UI dependency. It provides:
//!
//! - [`StepCatalog`]: the immutable, ordered list of onboarding steps and
//!   the read-only queries the view needs (counts, percentage, current step)
//! - [`JourneyState`]: the per-view selection state and the transient
//!   celebration flag
//! - [`recommend`]: the pure mapping from the active step to a tip
//! - [`JourneyEvent`] and [`JourneyObserver`]: the notification contract
//!   for everything a user does in the view
//! - [`CelebrationTimer`] and [`JourneySession`]: a tokio-backed host for
//!   the state, for embedders that do not bring their own event loop
//!
//! # Quick Start
//!
//! ```
//! use waymark_core::{JourneyState, StepCatalog, TipKind};
//!
//! let mut state = JourneyState::new(StepCatalog::builtin());
//! assert_eq!(state.recommendation().kind, TipKind::QuickStart);
//!
//! state.select("webhooks");
//! assert_eq!(state.recommendation().kind, TipKind::Automation);
//! ```

pub mod catalog;
pub mod error;
pub mod events;
pub mod journey;
pub mod recommend;
pub mod session;
pub mod timer;

pub use catalog::{StepCatalog, StepCategory, StepDefinition, StepIcon, StepPriority, StepStatus};
pub use error::{CatalogError, CatalogResult};
pub use events::{ChannelObserver, IgnoreReason, JourneyEvent, JourneyObserver, TracingObserver};
pub use journey::{CelebrationTicket, JourneyState, SelectOutcome, CELEBRATION_DURATION};
pub use recommend::{recommend, RecommendationPayload, TipIcon, TipKind};
pub use session::JourneySession;
pub use timer::CelebrationTimer;
