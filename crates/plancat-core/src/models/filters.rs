//! Query types accepted by the catalog engine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PlanStatus, PlanType};

/// Filter options for the catalog view.
///
/// Every `None` field means "all": the corresponding predicate is inactive.
/// Active predicates are ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Case-insensitive substring matched against name or description
    #[serde(default)]
    pub text: Option<String>,

    /// Exact plan type match
    #[serde(default)]
    pub plan_type: Option<PlanType>,

    /// Exact status match
    #[serde(default)]
    pub status: Option<PlanStatus>,
}

impl FilterQuery {
    /// A query that matches every plan.
    pub fn all() -> Self {
        Self::default()
    }

    /// Sets the free-text predicate.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Restricts the query to one plan type.
    pub fn with_type(mut self, plan_type: PlanType) -> Self {
        self.plan_type = Some(plan_type);
        self
    }

    /// Restricts the query to one status.
    pub fn with_status(mut self, status: PlanStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether no predicate is active.
    pub fn is_unfiltered(&self) -> bool {
        self.text.as_deref().map_or(true, str::is_empty)
            && self.plan_type.is_none()
            && self.status.is_none()
    }
}

/// Ordering strategies for the catalog view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// Ascending by name, locale aware
    #[default]
    Name,

    /// Ascending by base price
    Price,

    /// Descending by promotional score, newest first on ties
    Popularity,

    /// Newest first
    Date,
}

impl SortStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Name => "name",
            SortStrategy::Price => "price",
            SortStrategy::Popularity => "popularity",
            SortStrategy::Date => "date",
        }
    }
}

impl FromStr for SortStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortStrategy::Name),
            "price" => Ok(SortStrategy::Price),
            "popularity" | "popular" => Ok(SortStrategy::Popularity),
            "date" | "created" => Ok(SortStrategy::Date),
            _ => Err(format!("Invalid sort strategy: {s}")),
        }
    }
}

/// Layout of the rendered list. Only the rendering layer reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}
