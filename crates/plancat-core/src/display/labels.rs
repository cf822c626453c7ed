//! Human-facing labels, badges and price formatting.
//!
//! The engine only deals in enum values; this is where they get words.

use std::fmt;

use crate::models::{Periodicity, Plan, PlanStatus, PlanType};

impl PlanType {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            PlanType::Subscription => "Subscription",
            PlanType::PunchCard => "Punch card",
            PlanType::Package => "Package",
            PlanType::PersonalTraining => "Personal training",
            PlanType::Group => "Group",
        }
    }
}

impl PlanStatus {
    /// Badge text shown next to the plan name.
    pub fn badge(&self) -> &'static str {
        match self {
            PlanStatus::Active => "Active",
            PlanStatus::Inactive => "Inactive",
            PlanStatus::Archived => "Archived",
            PlanStatus::Draft => "Draft",
        }
    }
}

impl Periodicity {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Periodicity::Monthly => "Monthly",
            Periodicity::Quarterly => "Quarterly",
            Periodicity::Annual => "Annual",
            Periodicity::OneTime => "One-time",
        }
    }
}

impl Plan {
    /// Promotional badges in fixed order: Popular, Recommended, New.
    pub fn promo_badges(&self) -> Vec<&'static str> {
        [
            (self.is_popular, "Popular"),
            (self.is_recommended, "Recommended"),
            (self.is_new, "New"),
        ]
        .into_iter()
        .filter_map(|(on, badge)| on.then_some(badge))
        .collect()
    }
}

/// A price with its optional pre-discount amount, e.g.
/// `~~165.00~~ 148.50 EUR/quarter`.
pub struct PriceTag<'a> {
    pub amount: f64,
    pub original: Option<f64>,
    pub currency: &'a str,
    pub periodicity: Periodicity,
}

impl<'a> PriceTag<'a> {
    /// The final price of `plan`, with the base price struck through when a
    /// discount applies.
    pub fn of(plan: &'a Plan) -> Self {
        Self {
            amount: plan.final_price(),
            original: plan.is_discounted().then_some(plan.base_price),
            currency: &plan.currency,
            periodicity: plan.periodicity,
        }
    }
}

impl fmt::Display for PriceTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(original) = self.original {
            write!(f, "~~{original:.2}~~ ")?;
        }
        write!(
            f,
            "{:.2} {}{}",
            self.amount,
            self.currency,
            self.periodicity.price_suffix()
        )
    }
}
