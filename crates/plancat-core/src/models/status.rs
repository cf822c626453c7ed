//! Lifecycle status enumeration for plans.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan lifecycle statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Plan is on sale
    #[default]
    Active,

    /// Plan is kept for existing clients but not sold
    Inactive,

    /// Plan is archived and hidden from normal views
    Archived,

    /// Plan is being prepared and not yet published
    Draft,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PlanStatus::Active),
            "inactive" => Ok(PlanStatus::Inactive),
            "archived" => Ok(PlanStatus::Archived),
            "draft" => Ok(PlanStatus::Draft),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// All variants in declaration order.
    pub const ALL: [PlanStatus; 4] = [
        PlanStatus::Active,
        PlanStatus::Inactive,
        PlanStatus::Archived,
        PlanStatus::Draft,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Inactive => "inactive",
            PlanStatus::Archived => "archived",
            PlanStatus::Draft => "draft",
        }
    }
}
