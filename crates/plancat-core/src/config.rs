//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Default cap on the number of plans that can be selected for comparison.
pub const DEFAULT_MAX_SELECTABLE: usize = 3;

/// Smallest selection a comparison accepts.
pub const MIN_COMPARABLE: usize = 2;

/// Settings recognized by the catalog engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Maximum number of plans selectable while comparison is enabled
    #[serde(default = "default_max_selectable")]
    pub max_selectable: usize,

    /// Whether selections feed a comparison. When disabled the cap is lifted.
    #[serde(default = "default_enable_comparison")]
    pub enable_comparison: bool,
}

fn default_max_selectable() -> usize {
    DEFAULT_MAX_SELECTABLE
}

fn default_enable_comparison() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_selectable: DEFAULT_MAX_SELECTABLE,
            enable_comparison: true,
        }
    }
}

impl CatalogConfig {
    /// Sets the selection cap.
    pub fn with_max_selectable(mut self, max_selectable: usize) -> Self {
        self.max_selectable = max_selectable;
        self
    }

    /// Enables or disables comparison.
    pub fn with_comparison(mut self, enable_comparison: bool) -> Self {
        self.enable_comparison = enable_comparison;
        self
    }

    /// Rejects configurations under which no comparison could ever run.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Configuration` when comparison is enabled and the
    /// cap is below the two plans a comparison needs.
    pub fn validate(&self) -> Result<()> {
        if self.enable_comparison && self.max_selectable < MIN_COMPARABLE {
            return Err(CatalogError::Configuration {
                message: format!(
                    "max_selectable must be at least {MIN_COMPARABLE} when comparison is enabled, got {}",
                    self.max_selectable
                ),
            });
        }
        Ok(())
    }
}
