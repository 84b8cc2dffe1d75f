//! Church (tenant) model

use serde::{Deserialize, Serialize};

/// Lifecycle status of a church account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChurchStatus {
    /// Created but not yet activated by a platform admin
    Pending,
    Active,
    Suspended,
}

impl ChurchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChurchStatus::Pending => "pending",
            ChurchStatus::Active => "active",
            ChurchStatus::Suspended => "suspended",
        }
    }
}

impl std::str::FromStr for ChurchStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ChurchStatus::Pending),
            "active" => Ok(ChurchStatus::Active),
            "suspended" => Ok(ChurchStatus::Suspended),
            _ => Err(()),
        }
    }
}

/// Billing plan assigned to a church account
///
/// Plain stored attribute; payment processing happens elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Starter,
    Growth,
    Multiply,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Starter => "starter",
            Plan::Growth => "growth",
            Plan::Multiply => "multiply",
        }
    }
}

impl std::str::FromStr for Plan {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(Plan::Starter),
            "growth" => Ok(Plan::Growth),
            "multiply" => Ok(Plan::Multiply),
            _ => Err(()),
        }
    }
}

/// Church (tenant) account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Church {
    /// UUID string
    pub id: String,
    pub name: String,
    pub contact_email: String,
    pub status: ChurchStatus,
    pub plan: Plan,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_plan_round_trip_as_str() {
        for status in [
            ChurchStatus::Pending,
            ChurchStatus::Active,
            ChurchStatus::Suspended,
        ] {
            assert_eq!(status.as_str().parse::<ChurchStatus>(), Ok(status));
        }
        for plan in [Plan::Starter, Plan::Growth, Plan::Multiply] {
            assert_eq!(plan.as_str().parse::<Plan>(), Ok(plan));
        }
        assert!("enterprise".parse::<Plan>().is_err());
    }
}
