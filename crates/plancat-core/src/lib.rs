//! Core library for the plancat fitness plan catalog.
//!
//! The crate is split into a pure engine and the layers around it:
//!
//! - [`engine`]: filter, sort, bounded selection and comparison over an
//!   in-memory plan snapshot, threaded together by
//!   [`engine::CatalogViewState`]. No I/O.
//! - [`db`]: SQLite persistence for plans, their features and benefits.
//! - [`catalog`]: the async [`Catalog`] facade that loads snapshots and runs
//!   them through the engine.
//! - [`display`]: markdown `Display` implementations and wrapper types.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use plancat_core::{
//!     models::{NewPlan, Periodicity, PlanType},
//!     params::Compare,
//!     CatalogBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CatalogBuilder::new()
//!     .with_database_path(Some("catalog.db"))
//!     .build()
//!     .await?;
//!
//! let basic = catalog
//!     .create_plan(&NewPlan::new("Basic", PlanType::Subscription, 35.0, Periodicity::Monthly))
//!     .await?;
//! let premium = catalog
//!     .create_plan(&NewPlan::new("Premium", PlanType::Subscription, 55.0, Periodicity::Monthly))
//!     .await?;
//!
//! let compare = Compare {
//!     ids: vec![basic.id, premium.id],
//! };
//! match catalog.compare_plans(&compare).await? {
//!     Ok(matrix) => println!("{matrix}"),
//!     Err(notice) => println!("{notice}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogBuilder};
pub use config::CatalogConfig;
pub use db::Database;
pub use display::{CatalogView, CreateResult, DeleteResult, OperationStatus, UpdateResult};
pub use engine::{CatalogViewState, ComparisonMatrix, Selection, SelectionNotice, ViewEvent};
pub use error::{CatalogError, Result};
pub use models::{Feature, FilterQuery, NewPlan, Plan, PlanStatus, PlanUpdate, SortStrategy};
