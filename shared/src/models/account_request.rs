//! Account request model
//!
//! Prospective ministries apply through the public site; a platform
//! admin approves (creating the church account) or rejects.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRequest {
    pub id: i64,
    pub ministry_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub message: Option<String>,
    pub status: RequestStatus,
    pub created_at: i64,
    /// Set when approved or rejected
    pub decided_at: Option<i64>,
}

/// Public sign-up payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRequestCreate {
    pub ministry_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub message: Option<String>,
}
