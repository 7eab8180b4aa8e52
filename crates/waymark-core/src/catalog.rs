//! The ordered catalog of onboarding steps.
//!
//! A catalog is built once at startup, validated, and never mutated. All
//! queries here are read-only derivations over the step list.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Progress status of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
    Locked,
}

impl StepStatus {
    /// Returns all statuses in progress order.
    pub fn all() -> &'static [StepStatus] {
        &[
            StepStatus::Completed,
            StepStatus::Current,
            StepStatus::Upcoming,
            StepStatus::Locked,
        ]
    }

    /// Returns the lowercase name used in catalog files and CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Current => "current",
            StepStatus::Upcoming => "upcoming",
            StepStatus::Locked => "locked",
        }
    }

    /// Whether a step with this status reacts to clicks.
    pub fn is_selectable(&self) -> bool {
        *self != StepStatus::Locked
    }

    /// Position in the progress ordering. Upcoming and locked steps share
    /// a stage and may interleave.
    fn stage(&self) -> u8 {
        match self {
            StepStatus::Completed => 0,
            StepStatus::Current => 1,
            StepStatus::Upcoming | StepStatus::Locked => 2,
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Functional area a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepCategory {
    Setup,
    Configuration,
    Automation,
    Analytics,
}

impl StepCategory {
    /// Returns all categories.
    pub fn all() -> &'static [StepCategory] {
        &[
            StepCategory::Setup,
            StepCategory::Configuration,
            StepCategory::Automation,
            StepCategory::Analytics,
        ]
    }

    /// Returns the display label for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            StepCategory::Setup => "Setup",
            StepCategory::Configuration => "Configuration",
            StepCategory::Automation => "Automation",
            StepCategory::Analytics => "Analytics",
        }
    }
}

/// How important a step is for getting value out of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPriority {
    High,
    Medium,
    Low,
}

impl StepPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepPriority::High => "high",
            StepPriority::Medium => "medium",
            StepPriority::Low => "low",
        }
    }
}

/// Opaque icon handle. Only the view knows how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepIcon {
    Check,
    Folder,
    Zap,
    GitCommit,
    Share,
    BarChart,
}

/// A single step of the onboarding journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
    /// Free-form display string such as "1-2 min".
    pub estimated_time: String,
    pub category: StepCategory,
    pub priority: StepPriority,
    pub icon: StepIcon,
}

impl StepDefinition {
    /// Creates a step definition.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        status: StepStatus,
        estimated_time: impl Into<String>,
        category: StepCategory,
        priority: StepPriority,
        icon: StepIcon,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status,
            estimated_time: estimated_time.into(),
            category,
            priority,
            icon,
        }
    }
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    steps: Vec<StepDefinition>,
}

/// Validated, ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCatalog {
    steps: Vec<StepDefinition>,
}

impl StepCatalog {
    /// Builds a catalog, checking that ids are unique, that at most one step
    /// is current and that statuses never go backwards in sequence order.
    pub fn new(steps: Vec<StepDefinition>) -> CatalogResult<Self> {
        if steps.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(steps.len());
        let mut current: Option<&str> = None;
        let mut stage = 0u8;

        for (index, step) in steps.iter().enumerate() {
            if step.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(index));
            }
            if !seen.insert(step.id.as_str()) {
                return Err(CatalogError::DuplicateId(step.id.clone()));
            }
            if step.status == StepStatus::Current {
                if let Some(first) = current {
                    return Err(CatalogError::MultipleCurrent {
                        first: first.to_string(),
                        second: step.id.clone(),
                    });
                }
                current = Some(step.id.as_str());
            }
            if step.status.stage() < stage {
                return Err(CatalogError::OutOfOrder {
                    step_id: step.id.clone(),
                    status: step.status,
                });
            }
            stage = step.status.stage();
        }

        Ok(Self { steps })
    }

    /// The six-step GitHub onboarding journey.
    pub fn builtin() -> Self {
        use StepCategory::*;
        use StepIcon::*;
        use StepPriority::*;
        use StepStatus::*;

        Self {
            steps: vec![
                StepDefinition::new(
                    "auth",
                    "GitHub Connected",
                    "Authentication complete",
                    Completed,
                    "✓ Done",
                    Setup,
                    High,
                    Check,
                ),
                StepDefinition::new(
                    "repositories",
                    "Select Repositories",
                    "Choose repos to monitor",
                    Current,
                    "1-2 min",
                    Setup,
                    High,
                    Folder,
                ),
                StepDefinition::new(
                    "webhooks",
                    "Enable Webhooks",
                    "Listen for GitHub events",
                    Upcoming,
                    "2 min",
                    Configuration,
                    Medium,
                    Zap,
                ),
                StepDefinition::new(
                    "commits",
                    "Track Commits",
                    "Capture commit activity",
                    Locked,
                    "—",
                    Automation,
                    Medium,
                    GitCommit,
                ),
                StepDefinition::new(
                    "posts",
                    "Create Posts",
                    "Transform commits into content",
                    Locked,
                    "—",
                    Automation,
                    Low,
                    Share,
                ),
                StepDefinition::new(
                    "analytics",
                    "View Analytics",
                    "Track engagement",
                    Locked,
                    "—",
                    Analytics,
                    Low,
                    BarChart,
                ),
            ],
        }
    }

    /// Parses a catalog from its JSON document form.
    pub fn from_json(text: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(text)?;
        Self::new(document.steps)
    }

    /// Reads and parses a catalog file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text)?;
        tracing::debug!(
            path = %path.display(),
            steps = catalog.len(),
            "Loaded step catalog"
        );
        Ok(catalog)
    }

    /// Returns the steps in journey order.
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepDefinition> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Looks up a step by id.
    pub fn get(&self, id: &str) -> Option<&StepDefinition> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Returns the sequence index of a step.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    pub fn count_by_status(&self, status: StepStatus) -> usize {
        self.steps.iter().filter(|s| s.status == status).count()
    }

    pub fn count_by_category(&self, category: StepCategory) -> usize {
        self.steps.iter().filter(|s| s.category == category).count()
    }

    /// Share of completed steps, in `[0, 100]`.
    pub fn completion_percentage(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        100.0 * self.count_by_status(StepStatus::Completed) as f64 / self.steps.len() as f64
    }

    /// Index of the current step, if the catalog has one.
    pub fn index_of_current(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|s| s.status == StepStatus::Current)
    }

    pub fn current_step(&self) -> Option<&StepDefinition> {
        self.index_of_current().map(|i| &self.steps[i])
    }

    /// Whether the flow-diagram connector to the right of `left_index` is
    /// drawn as reached.
    pub fn connector_filled(&self, left_index: usize) -> bool {
        left_index < self.count_by_status(StepStatus::Completed)
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a StepCatalog {
    type Item = &'a StepDefinition;
    type IntoIter = std::slice::Iter<'a, StepDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str, status: StepStatus) -> StepDefinition {
        StepDefinition::new(
            id,
            id.to_uppercase(),
            "",
            status,
            "1 min",
            StepCategory::Setup,
            StepPriority::Medium,
            StepIcon::Check,
        )
    }

    /// Builds a valid catalog of `total` steps with the first `completed`
    /// steps completed and an optional current step right after them.
    fn progress_catalog(total: usize, completed: usize, with_current: bool) -> StepCatalog {
        let steps = (0..total)
            .map(|i| {
                let status = if i < completed {
                    StepStatus::Completed
                } else if with_current && i == completed {
                    StepStatus::Current
                } else if i % 2 == 0 {
                    StepStatus::Upcoming
                } else {
                    StepStatus::Locked
                };
                step(&format!("s{}", i), status)
            })
            .collect();
        StepCatalog::new(steps).unwrap()
    }

    #[test]
    fn test_builtin_is_valid() {
        let builtin = StepCatalog::builtin();
        let rebuilt = StepCatalog::new(builtin.steps().to_vec()).unwrap();
        assert_eq!(builtin, rebuilt);
        assert_eq!(builtin.len(), 6);
    }

    #[test]
    fn test_builtin_counts() {
        let catalog = StepCatalog::builtin();
        assert_eq!(catalog.count_by_status(StepStatus::Completed), 1);
        assert_eq!(catalog.count_by_status(StepStatus::Current), 1);
        assert_eq!(catalog.count_by_status(StepStatus::Upcoming), 1);
        assert_eq!(catalog.count_by_status(StepStatus::Locked), 3);

        assert_eq!(catalog.count_by_category(StepCategory::Setup), 2);
        assert_eq!(catalog.count_by_category(StepCategory::Configuration), 1);
        assert_eq!(catalog.count_by_category(StepCategory::Automation), 2);
        assert_eq!(catalog.count_by_category(StepCategory::Analytics), 1);
    }

    #[test]
    fn test_builtin_progress() {
        let catalog = StepCatalog::builtin();
        assert!((catalog.completion_percentage() - 100.0 / 6.0).abs() < 1e-9);
        assert_eq!(catalog.index_of_current(), Some(1));
        assert_eq!(catalog.current_step().unwrap().id, "repositories");
    }

    #[test]
    fn test_completion_percentage_for_every_split() {
        for total in 1..=6 {
            for completed in 0..=total {
                let with_current = completed < total;
                let catalog = progress_catalog(total, completed, with_current);
                let expected = 100.0 * completed as f64 / total as f64;
                assert!(
                    (catalog.completion_percentage() - expected).abs() < 1e-9,
                    "total={} completed={}",
                    total,
                    completed
                );
            }
        }
    }

    #[test]
    fn test_completion_bounds() {
        assert_eq!(progress_catalog(4, 0, true).completion_percentage(), 0.0);
        assert_eq!(progress_catalog(4, 4, false).completion_percentage(), 100.0);
    }

    #[test]
    fn test_index_of_current_absent() {
        let catalog = progress_catalog(3, 1, false);
        assert_eq!(catalog.index_of_current(), None);
        assert!(catalog.current_step().is_none());
    }

    #[test]
    fn test_lookup() {
        let catalog = StepCatalog::builtin();
        assert_eq!(catalog.get("webhooks").unwrap().title, "Enable Webhooks");
        assert_eq!(catalog.position("posts"), Some(4));
        assert!(catalog.get("missing").is_none());
        assert_eq!(catalog.position("missing"), None);
    }

    #[test]
    fn test_connector_filled() {
        let catalog = StepCatalog::builtin();
        assert!(catalog.connector_filled(0));
        assert!(!catalog.connector_filled(1));
        assert!(!catalog.connector_filled(4));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(StepCatalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_rejects_blank_id() {
        let steps = vec![step("a", StepStatus::Completed), step("  ", StepStatus::Current)];
        assert!(matches!(StepCatalog::new(steps), Err(CatalogError::EmptyId(1))));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let steps = vec![step("a", StepStatus::Completed), step("a", StepStatus::Current)];
        assert!(matches!(
            StepCatalog::new(steps),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_rejects_two_current_steps() {
        let steps = vec![step("a", StepStatus::Current), step("b", StepStatus::Current)];
        assert!(matches!(
            StepCatalog::new(steps),
            Err(CatalogError::MultipleCurrent { .. })
        ));
    }

    #[test]
    fn test_rejects_completed_after_current() {
        let steps = vec![step("a", StepStatus::Current), step("b", StepStatus::Completed)];
        assert!(matches!(
            StepCatalog::new(steps),
            Err(CatalogError::OutOfOrder { step_id, .. }) if step_id == "b"
        ));
    }

    #[test]
    fn test_rejects_current_after_locked() {
        let steps = vec![step("a", StepStatus::Locked), step("b", StepStatus::Current)];
        assert!(matches!(
            StepCatalog::new(steps),
            Err(CatalogError::OutOfOrder { status: StepStatus::Current, .. })
        ));
    }

    #[test]
    fn test_upcoming_and_locked_may_interleave() {
        let steps = vec![
            step("a", StepStatus::Current),
            step("b", StepStatus::Locked),
            step("c", StepStatus::Upcoming),
        ];
        assert!(StepCatalog::new(steps).is_ok());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "steps": [
                {
                    "id": "auth",
                    "title": "Connect",
                    "description": "Sign in",
                    "status": "completed",
                    "estimatedTime": "done",
                    "category": "setup",
                    "priority": "high",
                    "icon": "check"
                },
                {
                    "id": "stats",
                    "title": "Stats",
                    "description": "Look at numbers",
                    "status": "current",
                    "estimatedTime": "5 min",
                    "category": "analytics",
                    "priority": "low",
                    "icon": "bar-chart"
                }
            ]
        }"#;
        let catalog = StepCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.steps()[1].icon, StepIcon::BarChart);
        assert_eq!(catalog.steps()[1].estimated_time, "5 min");
        assert_eq!(catalog.completion_percentage(), 50.0);
    }

    #[test]
    fn test_from_json_unknown_status() {
        let json = r#"{"steps":[{"id":"a","title":"A","description":"","status":"skipped",
            "estimatedTime":"","category":"setup","priority":"low","icon":"zap"}]}"#;
        assert!(matches!(
            StepCatalog::from_json(json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(StepStatus::Upcoming.to_string(), "upcoming");
        assert!(StepStatus::Current.is_selectable());
        assert!(!StepStatus::Locked.is_selectable());
    }
}
