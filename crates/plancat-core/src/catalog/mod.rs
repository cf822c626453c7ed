//! High-level catalog API.
//!
//! [`Catalog`] is the facade the interfaces talk to. It owns the database
//! location and the engine configuration, runs every SQLite call on a
//! blocking task and feeds snapshots through the engine.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (plan_handlers) │───▶│   (plan_ops)    │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Engine + display       Async CRUD             Data persistence
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use plancat_core::{
//!     params::{Browse, Compare},
//!     CatalogBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CatalogBuilder::new()
//!     .with_database_path(Some("/tmp/plancat.db"))
//!     .build()
//!     .await?;
//! catalog.seed_demo().await?;
//!
//! let view = catalog.browse(&Browse::default()).await?;
//! println!("{view}");
//!
//! let compare = Compare {
//!     ids: vec!["plan-001".to_string(), "plan-002".to_string()],
//! };
//! if let Ok(matrix) = catalog.compare_plans(&compare).await? {
//!     println!("{matrix}");
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    config::CatalogConfig,
    db::Database,
    error::{CatalogError, Result},
};

pub mod builder;
pub mod plan_handlers;
pub mod plan_ops;


pub use builder::CatalogBuilder;

/// Main catalog interface.
pub struct Catalog {
    pub(crate) db_path: PathBuf,
    pub(crate) config: CatalogConfig,
}

impl Catalog {
    pub(crate) fn new(db_path: PathBuf, config: CatalogConfig) -> Self {
        Self { db_path, config }
    }

    /// The engine configuration this catalog was built with.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(CatalogError::join)?
    }
}
