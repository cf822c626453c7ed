//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Periodicity, PlanStatus, PlanType};

/// An identified, labeled attribute of a plan.
///
/// Two plans carrying a feature with the same `id` describe the same fact,
/// which is what the comparison matrix keys on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Identifier, unique within the owning plan
    pub id: String,

    /// Short label shown in lists and comparison rows
    pub label: String,

    /// Optional longer explanation
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the feature is visually emphasized
    #[serde(default)]
    pub highlighted: bool,
}

impl Feature {
    /// Creates a plain, non-highlighted feature without description.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            highlighted: false,
        }
    }

    /// Marks the feature as highlighted.
    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }

    /// Attaches a description to the feature.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A sellable catalog offering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Opaque unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Classification of the offering
    pub plan_type: PlanType,

    /// Lifecycle status
    #[serde(default)]
    pub status: PlanStatus,

    /// Price before discount, never negative
    pub base_price: f64,

    /// ISO-like currency code
    pub currency: String,

    /// Optional discount in percent, within `[0, 100]`
    #[serde(default)]
    pub discount_percent: Option<f64>,

    /// Billing period
    pub periodicity: Periodicity,

    /// Ordered feature list, unique by feature id
    #[serde(default)]
    pub features: Vec<Feature>,

    /// Free-text perks, compared by exact string equality
    #[serde(default)]
    pub benefits: Vec<String>,

    /// Number of sessions included, if the plan is session based
    #[serde(default)]
    pub included_sessions: Option<u32>,

    #[serde(default)]
    pub is_popular: bool,

    #[serde(default)]
    pub is_recommended: bool,

    #[serde(default)]
    pub is_new: bool,

    /// Manual ordering weight used by catalog pages
    #[serde(default)]
    pub display_order: u32,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Plan {
    /// Price after applying the discount, clamped at zero.
    pub fn final_price(&self) -> f64 {
        let discount = self.discount_percent.unwrap_or(0.0).clamp(0.0, 100.0);
        (self.base_price * (1.0 - discount / 100.0)).max(0.0)
    }

    /// Whether a non-zero discount applies.
    pub fn is_discounted(&self) -> bool {
        self.discount_percent.is_some_and(|d| d > 0.0)
    }

    /// Composite popularity score used by [`super::SortStrategy::Popularity`].
    ///
    /// The promotional flags are independent, so the score ranges from 0 to 6.
    pub fn popularity_score(&self) -> u8 {
        3 * u8::from(self.is_popular) + 2 * u8::from(self.is_recommended) + u8::from(self.is_new)
    }

    /// Whether the plan lists a feature with the given id.
    pub fn has_feature(&self, feature_id: &str) -> bool {
        self.features.iter().any(|f| f.id == feature_id)
    }

    /// Whether the plan lists the exact benefit string.
    pub fn has_benefit(&self, benefit: &str) -> bool {
        self.benefits.iter().any(|b| b == benefit)
    }
}
