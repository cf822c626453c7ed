//! One-line plan summaries for the list layout.

use std::fmt;

use super::{datetime::LocalDate, labels::PriceTag};
use crate::models::Plan;

/// One-line summary of a plan, prefixed with its selection box.
pub(crate) struct PlanLine<'a> {
    plan: &'a Plan,
    selected: bool,
}

impl<'a> PlanLine<'a> {
    pub(crate) fn new(plan: &'a Plan, selected: bool) -> Self {
        Self { plan, selected }
    }
}

impl fmt::Display for PlanLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        let mark = if self.selected { "[x]" } else { "[ ]" };
        write!(
            f,
            "{mark} **{}** ({}) · {} · {} · {}",
            plan.name,
            plan.id,
            plan.plan_type.label(),
            PriceTag::of(plan),
            plan.status.badge()
        )?;
        for badge in plan.promo_badges() {
            write!(f, " · {badge}")?;
        }
        write!(f, " · since {}", LocalDate(&plan.created_at))
    }
}
