use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSearchSubmission {
    pub user_id: String,
    pub current_location: String,
    pub target_cities: Vec<String>,
    pub budget_range: BudgetRange,
    #[serde(default)]
    pub preferences: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSearch {
    pub id: String,
    pub user_id: String,
    pub current_location: String,
    pub target_cities: Vec<String>,
    pub budget_range: BudgetRange,
    pub preferences: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovingServiceType {
    FullService,
    SelfMove,
    Hybrid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovingServiceStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingServiceSubmission {
    pub user_id: String,
    pub service_type: MovingServiceType,
    pub from_location: String,
    pub to_location: String,
    pub moving_date: DateTime<Utc>,
    pub estimated_cost: f64,
    pub items_count: u32,
    #[serde(default)]
    pub special_requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingService {
    pub id: String,
    pub user_id: String,
    pub service_type: MovingServiceType,
    pub from_location: String,
    pub to_location: String,
    pub moving_date: DateTime<Utc>,
    pub estimated_cost: f64,
    pub items_count: u32,
    pub special_requirements: Vec<String>,
    pub status: MovingServiceStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemotePreference {
    FullyRemote,
    Hybrid,
    Onsite,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelocationStatus {
    #[default]
    Planning,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub current_location: String,
    #[serde(default)]
    pub work_preferences: Map<String, Value>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_level: String,
    pub remote_work_preference: RemotePreference,
    #[serde(default)]
    pub relocation_status: RelocationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub current_location: String,
    pub work_preferences: Map<String, Value>,
    pub skills: Vec<String>,
    pub experience_level: String,
    pub remote_work_preference: RemotePreference,
    pub relocation_status: RelocationStatus,
    pub timestamp: DateTime<Utc>,
}
