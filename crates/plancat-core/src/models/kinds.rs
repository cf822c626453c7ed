//! Classification enumerations for plans.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of plan classifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PlanType {
    /// Recurring membership
    Subscription,

    /// Prepaid bundle of sessions ("bono")
    PunchCard,

    /// Fixed bundle of services
    Package,

    /// One-to-one coaching
    PersonalTraining,

    /// Group or corporate classes
    Group,
}

impl PlanType {
    /// All variants in declaration order.
    pub const ALL: [PlanType; 5] = [
        PlanType::Subscription,
        PlanType::PunchCard,
        PlanType::Package,
        PlanType::PersonalTraining,
        PlanType::Group,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Subscription => "subscription",
            PlanType::PunchCard => "punch-card",
            PlanType::Package => "package",
            PlanType::PersonalTraining => "personal-training",
            PlanType::Group => "group",
        }
    }
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "subscription" => Ok(PlanType::Subscription),
            "punch-card" | "punchcard" => Ok(PlanType::PunchCard),
            "package" => Ok(PlanType::Package),
            "personal-training" | "pt" => Ok(PlanType::PersonalTraining),
            "group" => Ok(PlanType::Group),
            _ => Err(format!("Invalid plan type: {s}")),
        }
    }
}

/// Billing period of a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Periodicity {
    Monthly,
    Quarterly,
    Annual,
    OneTime,
}

impl Periodicity {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Monthly => "monthly",
            Periodicity::Quarterly => "quarterly",
            Periodicity::Annual => "annual",
            Periodicity::OneTime => "one-time",
        }
    }

    /// Short suffix appended to prices, e.g. `35.00 EUR/month`.
    ///
    /// One-time plans have no suffix.
    pub fn price_suffix(&self) -> &'static str {
        match self {
            Periodicity::Monthly => "/month",
            Periodicity::Quarterly => "/quarter",
            Periodicity::Annual => "/year",
            Periodicity::OneTime => "",
        }
    }
}

impl FromStr for Periodicity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "monthly" => Ok(Periodicity::Monthly),
            "quarterly" => Ok(Periodicity::Quarterly),
            "annual" | "yearly" => Ok(Periodicity::Annual),
            "one-time" | "onetime" => Ok(Periodicity::OneTime),
            _ => Err(format!("Invalid periodicity: {s}")),
        }
    }
}
