//! End-to-end tests for waymark-core
//!
//! These tests drive a full journey through the headless session, with the
//! tokio clock paused so the two-second celebration window is exact.

use std::io::Write;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use waymark_core::{
    ChannelObserver, JourneyEvent, JourneySession, JourneyState, StepCatalog, StepCategory,
    StepStatus, TipKind, CELEBRATION_DURATION,
};

/// Lets spawned timer tasks run after the clock moved.
async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

fn drain(rx: &mut UnboundedReceiver<JourneyEvent>) -> Vec<JourneyEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

// ============================================================================
// Built-in catalog
// ============================================================================

#[test]
fn test_builtin_journey_summary() {
    let catalog = StepCatalog::builtin();

    let pct = catalog.completion_percentage();
    assert!((pct - 16.67).abs() < 0.01, "got {}", pct);
    assert_eq!(catalog.index_of_current(), Some(1));

    let state = JourneyState::new(catalog);
    assert!(state.recommendation().title.contains("Quick Start"));
}

#[test]
fn test_builtin_category_counts() {
    let catalog = StepCatalog::builtin();
    assert_eq!(catalog.count_by_category(StepCategory::Setup), 2);
    assert_eq!(catalog.count_by_category(StepCategory::Configuration), 1);
    assert_eq!(catalog.count_by_category(StepCategory::Automation), 2);
    assert_eq!(catalog.count_by_category(StepCategory::Analytics), 1);
}

#[test]
fn test_recommendation_follows_selection() {
    let mut state = JourneyState::new(StepCatalog::builtin());

    state.select("webhooks");
    assert_eq!(state.recommendation().kind, TipKind::Automation);

    // Locked: selection and tip stay put.
    state.select("analytics");
    assert_eq!(state.recommendation().kind, TipKind::Automation);

    state.select("auth");
    assert_eq!(state.recommendation().kind, TipKind::General);

    state.select("repositories");
    assert_eq!(state.recommendation().kind, TipKind::QuickStart);
}

// ============================================================================
// Celebration lifecycle
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_celebration_clears_after_two_seconds() {
    let (observer, mut rx) = ChannelObserver::channel();
    let mut session = JourneySession::new(StepCatalog::builtin(), observer);

    session.select("auth");
    assert!(session.celebration_visible());
    assert!(session.dismissal_pending());

    tokio::time::advance(CELEBRATION_DURATION - Duration::from_millis(1)).await;
    settle().await;
    assert!(session.celebration_visible());

    tokio::time::advance(Duration::from_millis(1)).await;
    settle().await;
    assert!(!session.celebration_visible());
    assert!(!session.dismissal_pending());

    let names: Vec<_> = drain(&mut rx).iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec!["step_selected", "celebration_started", "celebration_dismissed"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_reselect_restarts_window() {
    let (observer, mut rx) = ChannelObserver::channel();
    let mut session = JourneySession::new(StepCatalog::builtin(), observer);

    session.select("auth");
    tokio::time::advance(Duration::from_millis(1500)).await;
    session.select("auth");

    // The first window would have ended here.
    tokio::time::advance(Duration::from_millis(1000)).await;
    settle().await;
    assert!(session.celebration_visible());

    tokio::time::advance(Duration::from_millis(1000)).await;
    settle().await;
    assert!(!session.celebration_visible());

    let dismissals = drain(&mut rx)
        .into_iter()
        .filter(|e| *e == JourneyEvent::CelebrationDismissed)
        .count();
    assert_eq!(dismissals, 1);
}

#[tokio::test(start_paused = true)]
async fn test_selecting_other_steps_keeps_celebration_timer() {
    let mut session = JourneySession::with_tracing(StepCatalog::builtin());

    session.select("auth");
    tokio::time::advance(Duration::from_millis(500)).await;
    session.select("webhooks");
    session.select("posts");
    assert!(session.celebration_visible());

    tokio::time::advance(Duration::from_millis(1500)).await;
    settle().await;
    assert!(!session.celebration_visible());
    assert_eq!(session.active_step_id().as_deref(), Some("webhooks"));
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_dismissal() {
    let (observer, mut rx) = ChannelObserver::channel();
    let mut session = JourneySession::new(StepCatalog::builtin(), observer);

    session.select("auth");
    let snapshot = session.snapshot();
    drop(session);

    tokio::time::advance(CELEBRATION_DURATION * 2).await;
    settle().await;

    assert!(snapshot.celebration_visible());
    let events = drain(&mut rx);
    assert!(!events.contains(&JourneyEvent::CelebrationDismissed));
}

// ============================================================================
// Catalog files
// ============================================================================

#[test]
fn test_load_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "steps": [
                {{ "id": "connect", "title": "Connect", "description": "Link account",
                   "status": "completed", "estimatedTime": "done", "category": "setup",
                   "priority": "high", "icon": "check" }},
                {{ "id": "hooks", "title": "Hooks", "description": "Enable hooks",
                   "status": "current", "estimatedTime": "2 min", "category": "configuration",
                   "priority": "medium", "icon": "zap" }},
                {{ "id": "report", "title": "Report", "description": "See results",
                   "status": "locked", "estimatedTime": "—", "category": "analytics",
                   "priority": "low", "icon": "bar-chart" }}
            ]
        }}"#
    )
    .unwrap();

    let catalog = StepCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.index_of_current(), Some(1));
    assert_eq!(catalog.count_by_status(StepStatus::Locked), 1);

    let mut state = JourneyState::new(catalog);
    assert_eq!(state.active_step_id(), Some("hooks"));
    // Only the built-in ids have dedicated tips.
    assert_eq!(state.recommendation().kind, TipKind::General);
    assert!(state.select("connect").ticket().is_some());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = StepCatalog::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, waymark_core::CatalogError::Io { .. }));
}

#[test]
fn test_load_invalid_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "steps": [
            {{ "id": "a", "title": "A", "description": "", "status": "locked",
               "estimatedTime": "", "category": "setup", "priority": "low", "icon": "zap" }},
            {{ "id": "b", "title": "B", "description": "", "status": "completed",
               "estimatedTime": "", "category": "setup", "priority": "low", "icon": "zap" }}
        ] }}"#
    )
    .unwrap();

    let err = StepCatalog::load(file.path()).unwrap_err();
    assert!(matches!(err, waymark_core::CatalogError::OutOfOrder { .. }));
}
