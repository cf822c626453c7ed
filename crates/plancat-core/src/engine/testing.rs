//! Fixtures shared by the engine unit tests.

use jiff::Timestamp;

use crate::models::{Periodicity, Plan, PlanStatus, PlanType};

/// Active monthly subscription with no features, benefits or flags.
///
/// Every fixture shares the same timestamps so date-based ordering only
/// differs where a test sets it explicitly.
pub(crate) fn plan(id: &str, name: &str, base_price: f64) -> Plan {
    let created = Timestamp::from_second(1_704_067_200).unwrap(); // 2024-01-01 00:00:00 UTC
    Plan {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        plan_type: PlanType::Subscription,
        status: PlanStatus::Active,
        base_price,
        currency: "EUR".to_string(),
        discount_percent: None,
        periodicity: Periodicity::Monthly,
        features: Vec::new(),
        benefits: Vec::new(),
        included_sessions: None,
        is_popular: false,
        is_recommended: false,
        is_new: false,
        display_order: 0,
        created_at: created,
        updated_at: created,
    }
}
