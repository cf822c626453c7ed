//! Parameter structures for catalog operations
//!
//! Shared parameter structures passed from interfaces (the CLI today) into the
//! [`crate::Catalog`] handlers. They carry no framework derives; interface
//! layers define their own argument types and convert with `From`/`Into`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│ Catalog handler │
//! │  (clap derives) │    │ (minimal deps)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Creating and updating plans takes [`crate::models::NewPlan`] and
//! [`crate::models::PlanUpdate`] directly.

use serde::{Deserialize, Serialize};

use crate::models::{FilterQuery, PlanStatus, PlanType, SortStrategy, ViewMode};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show, archive and delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: String,
}

/// Parameters for moving a plan to another status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStatus {
    pub id: String,
    pub status: PlanStatus,
}

/// Parameters for copying a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DuplicatePlan {
    /// The plan to copy
    pub id: String,
    /// Id for the copy; generated when absent
    #[serde(default)]
    pub new_id: Option<String>,
}

/// Parameters for one browse pass over the catalog.
///
/// The fields are replayed as view events in a fixed order: filters, sort,
/// view mode, individual selections, select-all, then compare.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Browse {
    /// Case-insensitive substring matched against name and description
    #[serde(default)]
    pub text: Option<String>,
    /// Restrict to one plan type
    #[serde(default)]
    pub plan_type: Option<PlanType>,
    /// Restrict to one status
    #[serde(default)]
    pub status: Option<PlanStatus>,
    #[serde(default)]
    pub sort: SortStrategy,
    #[serde(default)]
    pub view_mode: ViewMode,
    /// Plan ids to toggle into the selection, in order
    #[serde(default)]
    pub select: Vec<String>,
    /// Toggle-all over the visible plans after individual selections
    #[serde(default)]
    pub select_all: bool,
    /// Open a comparison of the resulting selection
    #[serde(default)]
    pub compare: bool,
}

impl Browse {
    /// The filter query these parameters describe.
    pub fn query(&self) -> FilterQuery {
        FilterQuery {
            text: self.text.clone().filter(|t| !t.is_empty()),
            plan_type: self.plan_type,
            status: self.status,
        }
    }
}

/// Parameters for comparing specific plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Compare {
    /// Plan ids in column order
    pub ids: Vec<String>,
}
