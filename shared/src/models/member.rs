//! Member model

use serde::{Deserialize, Serialize};

/// Congregation member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
    pub member_since: Option<String>,
    pub ministry: Option<String>,
    /// Answers to church-authored custom fields, keyed by custom field id
    pub custom_responses: serde_json::Value,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreate {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
    pub member_since: Option<String>,
    pub ministry: Option<String>,
    #[serde(default)]
    pub custom_responses: Option<serde_json::Value>,
}

/// Update member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
    pub member_since: Option<String>,
    pub ministry: Option<String>,
    pub custom_responses: Option<serde_json::Value>,
    pub is_active: Option<bool>,
}
