//! Display formatting for catalog output.
//!
//! Domain models implement `Display` directly; operation results and engine
//! outputs get wrapper types. Everything renders as markdown so the
//! CLI can hand it to the terminal renderer unchanged.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers and    │    │   Formatted     │
//! │  Engine outputs │───▶│ label helpers   │───▶│    Output       │
//! │                 │    │                 │    │   (markdown)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`comparison`]: Markdown table for a [`crate::engine::ComparisonMatrix`]
//! - [`datetime`]: Date/time formatting utilities
//! - [`labels`]: Human labels, badges and price formatting
//! - `lines`: One-line plan summaries for the list layout
//! - [`models`]: Display implementations for domain models
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status messages and selection notices
//! - [`view`]: The rendered catalog page, [`CatalogView`]
//!
//! ## Usage Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use plancat_core::{
//!     display::{CreateResult, UpdateResult},
//!     models::{Periodicity, Plan, PlanStatus, PlanType},
//! };
//!
//! let plan = Plan {
//!     id: "plan-001".to_string(),
//!     name: "Basic".to_string(),
//!     description: String::new(),
//!     plan_type: PlanType::Subscription,
//!     status: PlanStatus::Active,
//!     base_price: 35.0,
//!     currency: "EUR".to_string(),
//!     discount_percent: None,
//!     periodicity: Periodicity::Monthly,
//!     features: vec![],
//!     benefits: vec![],
//!     included_sessions: None,
//!     is_popular: false,
//!     is_recommended: false,
//!     is_new: false,
//!     display_order: 1,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//! };
//!
//! let output = CreateResult::new(plan.clone()).to_string();
//! assert!(output.contains("Created plan with ID: plan-001"));
//!
//! let changes = vec!["Updated base price".to_string()];
//! let output = UpdateResult::with_changes(plan, changes).to_string();
//! assert!(output.contains("Changes made:"));
//! ```

pub mod comparison;
pub mod datetime;
pub mod labels;
mod lines;
pub mod models;
pub mod results;
pub mod status;
pub mod view;

pub use datetime::{LocalDate, LocalDateTime};
pub use labels::PriceTag;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
pub use view::CatalogView;
