//! Follow-up check-in model
//!
//! One contact (call, visit, text, email) made with a convert during
//! follow-up, optionally scheduled ahead of time.

use serde::{Deserialize, Serialize};

/// Check-in entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CheckIn {
    pub id: i64,
    pub convert_id: i64,
    /// Contact method: "call" | "visit" | "text" | "email"
    pub method: String,
    pub note: Option<String>,
    /// Scheduled follow-up time (epoch millis), if planned ahead
    pub follow_up_at: Option<i64>,
    pub completed: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create check-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInCreate {
    pub method: String,
    pub note: Option<String>,
    pub follow_up_at: Option<i64>,
    #[serde(default)]
    pub completed: bool,
}

/// Update check-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInUpdate {
    pub method: Option<String>,
    pub note: Option<String>,
    pub follow_up_at: Option<i64>,
    pub completed: Option<bool>,
}
