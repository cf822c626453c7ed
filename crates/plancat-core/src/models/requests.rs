//! Request types for creating and updating plans.

use serde::{Deserialize, Serialize};

use super::{Feature, Periodicity, PlanStatus, PlanType};
use crate::error::{CatalogError, Result};

/// Everything needed to insert a plan into the store.
///
/// The store assigns timestamps. When `id` is `None` a fresh identifier is
/// generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPlan {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub plan_type: PlanType,
    #[serde(default)]
    pub status: PlanStatus,
    pub base_price: f64,
    pub currency: String,
    #[serde(default)]
    pub discount_percent: Option<f64>,
    pub periodicity: Periodicity,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub included_sessions: Option<u32>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_recommended: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub display_order: u32,
}

impl NewPlan {
    /// Minimal active plan with no features, benefits or flags.
    pub fn new(
        name: impl Into<String>,
        plan_type: PlanType,
        base_price: f64,
        periodicity: Periodicity,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            plan_type,
            status: PlanStatus::Active,
            base_price,
            currency: "EUR".to_string(),
            discount_percent: None,
            periodicity,
            features: Vec::new(),
            benefits: Vec::new(),
            included_sessions: None,
            is_popular: false,
            is_recommended: false,
            is_new: false,
            display_order: 0,
        }
    }

    /// Checks the plan invariants before anything touches the store.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidInput` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validate_non_empty("id", id)?;
        }
        validate_non_empty("name", &self.name)?;
        validate_non_empty("currency", &self.currency)?;
        validate_price(self.base_price)?;
        validate_discount(self.discount_percent)?;
        validate_features(&self.features)
    }
}

/// Partial update of an existing plan. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanUpdate {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub plan_type: Option<PlanType>,
    #[serde(default)]
    pub status: Option<PlanStatus>,
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    /// `Some(None)` removes the discount.
    #[serde(default)]
    pub discount_percent: Option<Option<f64>>,
    #[serde(default)]
    pub periodicity: Option<Periodicity>,
    #[serde(default)]
    pub features: Option<Vec<Feature>>,
    #[serde(default)]
    pub benefits: Option<Vec<String>>,
    #[serde(default)]
    pub included_sessions: Option<Option<u32>>,
    #[serde(default)]
    pub is_popular: Option<bool>,
    #[serde(default)]
    pub is_recommended: Option<bool>,
    #[serde(default)]
    pub is_new: Option<bool>,
    #[serde(default)]
    pub display_order: Option<u32>,
}

impl PlanUpdate {
    /// Validates the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidInput` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_non_empty("name", name)?;
        }
        if let Some(currency) = &self.currency {
            validate_non_empty("currency", currency)?;
        }
        if let Some(price) = self.base_price {
            validate_price(price)?;
        }
        if let Some(discount) = self.discount_percent {
            validate_discount(discount)?;
        }
        if let Some(features) = &self.features {
            validate_features(features)?;
        }
        Ok(())
    }

    /// Human-readable list of the fields this update touches.
    pub fn changed_fields(&self) -> Vec<String> {
        let mut changes = Vec::new();
        let mut mark = |present: bool, name: &str| {
            if present {
                changes.push(format!("Updated {name}"));
            }
        };
        mark(self.name.is_some(), "name");
        mark(self.description.is_some(), "description");
        mark(self.plan_type.is_some(), "type");
        mark(self.status.is_some(), "status");
        mark(self.base_price.is_some(), "base price");
        mark(self.currency.is_some(), "currency");
        mark(self.discount_percent.is_some(), "discount");
        mark(self.periodicity.is_some(), "periodicity");
        mark(self.features.is_some(), "features");
        mark(self.benefits.is_some(), "benefits");
        mark(self.included_sessions.is_some(), "included sessions");
        mark(
            self.is_popular.is_some() || self.is_recommended.is_some() || self.is_new.is_some(),
            "promotional flags",
        );
        mark(self.display_order.is_some(), "display order");
        changes
    }
}

fn validate_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::invalid_input("base_price")
            .with_reason(format!("must be a non-negative number, got {price}")));
    }
    Ok(())
}

fn validate_discount(discount: Option<f64>) -> Result<()> {
    match discount {
        Some(d) if !(0.0..=100.0).contains(&d) => Err(CatalogError::invalid_input(
            "discount_percent",
        )
        .with_reason(format!("must be between 0 and 100, got {d}"))),
        _ => Ok(()),
    }
}

fn validate_features(features: &[Feature]) -> Result<()> {
    for (index, feature) in features.iter().enumerate() {
        validate_non_empty("features.id", &feature.id)?;
        if features[..index].iter().any(|f| f.id == feature.id) {
            return Err(CatalogError::invalid_input("features")
                .with_reason(format!("duplicate feature id '{}'", feature.id)));
        }
    }
    Ok(())
}
