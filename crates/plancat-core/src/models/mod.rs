//! Data models for catalog plans.
//!
//! This module contains the domain models the catalog engine reads: the
//! [`Plan`] record with its [`Feature`] list, the closed classification enums
//! ([`PlanType`], [`PlanStatus`], [`Periodicity`]) and the query types the
//! engine accepts ([`FilterQuery`], [`SortStrategy`]).
//!
//! Display implementations live in [`crate::display::models`] so that the data
//! structures stay free of presentation concerns. Labels and badges for the
//! enums are kept in [`crate::display::labels`].
//!
//! # Examples
//!
//! ```rust
//! use plancat_core::models::{Periodicity, Plan, PlanStatus, PlanType};
//! use jiff::Timestamp;
//!
//! let plan = Plan {
//!     id: "plan-001".to_string(),
//!     name: "Basic".to_string(),
//!     description: "Weights room and cardio".to_string(),
//!     plan_type: PlanType::Subscription,
//!     status: PlanStatus::Active,
//!     base_price: 35.0,
//!     currency: "EUR".to_string(),
//!     discount_percent: Some(10.0),
//!     periodicity: Periodicity::Monthly,
//! #   features: vec![],
//! #   benefits: vec![],
//! #   included_sessions: None,
//! #   is_popular: false,
//! #   is_recommended: false,
//! #   is_new: false,
//! #   display_order: 0,
//! #   created_at: Timestamp::UNIX_EPOCH,
//! #   updated_at: Timestamp::UNIX_EPOCH,
//!     // ... other fields
//! };
//! assert!((plan.final_price() - 31.5).abs() < f64::EPSILON);
//! ```

pub mod filters;
pub mod kinds;
pub mod plan;
pub mod requests;
pub mod status;

#[cfg(test)]
mod tests;

pub use filters::{FilterQuery, SortStrategy, ViewMode};
pub use kinds::{Periodicity, PlanType};
pub use plan::{Feature, Plan};
pub use requests::{NewPlan, PlanUpdate};
pub use status::PlanStatus;
