//! Filter stage: narrows a plan snapshot to the plans matching a query.

use crate::models::{FilterQuery, Plan};

/// Returns the plans satisfying every active predicate of `query`, in input
/// order.
///
/// The text predicate is a case-insensitive substring match against the name
/// or the description. An empty or absent text matches everything.
///
/// # Examples
///
/// ```rust
/// use plancat_core::{engine::filter_plans, models::FilterQuery};
///
/// let plans = Vec::new();
/// assert!(filter_plans(&plans, &FilterQuery::all()).is_empty());
/// ```
pub fn filter_plans<'a>(plans: &'a [Plan], query: &FilterQuery) -> Vec<&'a Plan> {
    let needle = query
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    plans
        .iter()
        .filter(|plan| {
            needle.as_deref().map_or(true, |n| matches_text(plan, n))
                && query.plan_type.map_or(true, |t| plan.plan_type == t)
                && query.status.map_or(true, |s| plan.status == s)
        })
        .collect()
}

fn matches_text(plan: &Plan, needle: &str) -> bool {
    plan.name.to_lowercase().contains(needle) || plan.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::testing::plan,
        models::{PlanStatus, PlanType},
    };

    fn catalog() -> Vec<Plan> {
        let mut basic = plan("p1", "Basic", 35.0);
        basic.description = "Weights room and cardio".to_string();

        let mut premium = plan("p2", "Premium", 55.0);
        premium.description = "Unlimited group CLASSES and spa".to_string();

        let mut pt = plan("p3", "PT Intensive", 450.0);
        pt.plan_type = PlanType::PersonalTraining;
        pt.description = "Twelve coached sessions".to_string();

        let mut draft = plan("p4", "Students", 24.5);
        draft.status = PlanStatus::Draft;

        vec![basic, premium, pt, draft]
    }

    fn ids(plans: &[&Plan]) -> Vec<String> {
        plans.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_unfiltered_query_returns_everything_in_order() {
        let plans = catalog();
        let query = FilterQuery {
            text: Some(String::new()),
            plan_type: None,
            status: None,
        };
        assert_eq!(ids(&filter_plans(&plans, &query)), ["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn test_text_matches_name_case_insensitively() {
        let plans = catalog();
        let result = filter_plans(&plans, &FilterQuery::all().with_text("premium"));
        assert_eq!(ids(&result), ["p2"]);
    }

    #[test]
    fn test_text_matches_description() {
        let plans = catalog();
        let result = filter_plans(&plans, &FilterQuery::all().with_text("classes"));
        assert_eq!(ids(&result), ["p2"]);

        let result = filter_plans(&plans, &FilterQuery::all().with_text("CARDIO"));
        assert_eq!(ids(&result), ["p1"]);
    }

    #[test]
    fn test_type_and_status_are_exact() {
        let plans = catalog();

        let pt_only = filter_plans(
            &plans,
            &FilterQuery::all().with_type(PlanType::PersonalTraining),
        );
        assert_eq!(ids(&pt_only), ["p3"]);

        let drafts = filter_plans(&plans, &FilterQuery::all().with_status(PlanStatus::Draft));
        assert_eq!(ids(&drafts), ["p4"]);
    }

    #[test]
    fn test_predicates_are_anded() {
        let plans = catalog();
        let query = FilterQuery::all()
            .with_text("s")
            .with_type(PlanType::Subscription)
            .with_status(PlanStatus::Active);
        // "Students" matches the text but is a draft; "PT Intensive" is not a subscription
        assert_eq!(ids(&filter_plans(&plans, &query)), ["p1", "p2"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let plans = catalog();
        let result = filter_plans(&plans, &FilterQuery::all().with_text("zumba on mars"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_is_exactly_the_matching_subset() {
        let plans = catalog();
        let query = FilterQuery::all().with_status(PlanStatus::Active);
        let result = filter_plans(&plans, &query);

        let expected: Vec<&Plan> = plans
            .iter()
            .filter(|p| p.status == PlanStatus::Active)
            .collect();
        assert_eq!(result, expected);
    }
}
