//! Builder for creating and configuring Catalog instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Catalog;
use crate::{
    config::CatalogConfig,
    db::Database,
    error::{CatalogError, Result},
};

/// Builder for creating and configuring Catalog instances.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    database_path: Option<PathBuf>,
    config: CatalogConfig,
}

impl CatalogBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            config: CatalogConfig::default(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/plancat/plancat.db` or `~/.local/share/plancat/plancat.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the selection and comparison configuration.
    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the configured catalog instance.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Configuration` if the config is invalid
    /// Returns `CatalogError::FileSystem` if the database path is invalid
    /// Returns `CatalogError::Database` if database initialization fails
    pub async fn build(self) -> Result<Catalog> {
        self.config.validate()?;

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CatalogError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), CatalogError>(())
        })
        .await
        .map_err(CatalogError::join)??;

        debug!("Opened catalog at {}", db_path.display());
        Ok(Catalog::new(db_path, self.config))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("plancat")
            .place_data_file("plancat.db")
            .map_err(|e| CatalogError::XdgDirectory(e.to_string()))
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
