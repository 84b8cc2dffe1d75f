//! Convert model
//!
//! A convert is a person captured from the public "convert" intake
//! form (or entered manually by a leader) who receives follow-up
//! check-ins.

use serde::{Deserialize, Serialize};

/// Convert entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Convert {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub age_group: Option<String>,
    pub address: Option<String>,
    pub prayer_request: Option<String>,
    /// Answers to church-authored custom fields, keyed by custom field id
    pub custom_responses: serde_json::Value,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create convert payload (leader-entered or intake submission)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertCreate {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub age_group: Option<String>,
    pub address: Option<String>,
    pub prayer_request: Option<String>,
    #[serde(default)]
    pub custom_responses: Option<serde_json::Value>,
}

/// Update convert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub age_group: Option<String>,
    pub address: Option<String>,
    pub prayer_request: Option<String>,
    pub custom_responses: Option<serde_json::Value>,
}
