use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(pub u32);

impl StepId {
    /// Key under which the step's mutable state is stored.
    pub fn document_key(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checklist item status. Any status may move to any other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::NotStarted, Self::InProgress, Self::Completed]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl FromStr for ProgressStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}', expected one of not_started, in_progress, completed")]
pub struct UnknownStatus(pub String);

/// Either a numeric rank or a free-form label such as "high".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Priority {
    Rank(u32),
    Label(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub label: String,
    pub done: bool,
}

impl Subtask {
    pub fn open(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            done: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressItem {
    pub id: ItemId,
    pub user_id: String,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProgressStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    pub updated_at: DateTime<Utc>,
}

impl ProgressItem {
    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|subtask| subtask.done).count()
    }
}

/// Input for creating a checklist item; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProgressItem {
    pub user_id: String,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: ProgressStatus,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

fn default_status() -> ProgressStatus {
    ProgressStatus::NotStarted
}

/// Validated partial update. `None` leaves a field untouched; for `notes` and
/// `priority`, `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressPatch {
    pub status: Option<ProgressStatus>,
    pub notes: Option<Option<String>>,
    pub priority: Option<Option<Priority>>,
}

impl ProgressPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none() && self.priority.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFilter<'a> {
    pub category: Option<&'a str>,
    pub status: Option<ProgressStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineStep {
    pub id: StepId,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub week: u32,
    pub is_completed: bool,
    pub notes: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_only_enumerated_values() {
        assert_eq!(
            "in_progress".parse::<ProgressStatus>(),
            Ok(ProgressStatus::InProgress)
        );
        assert_eq!(
            "done".parse::<ProgressStatus>(),
            Err(UnknownStatus("done".to_string()))
        );
        assert!("Completed".parse::<ProgressStatus>().is_err());
    }

    #[test]
    fn priority_accepts_rank_or_label() {
        let rank: Priority = serde_json::from_str("2").expect("rank");
        let label: Priority = serde_json::from_str("\"high\"").expect("label");
        assert_eq!(rank, Priority::Rank(2));
        assert_eq!(label, Priority::Label("high".to_string()));
    }
}
