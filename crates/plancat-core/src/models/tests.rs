use std::str::FromStr;

use jiff::Timestamp;

use crate::{
    error::CatalogError,
    models::{
        Feature, FilterQuery, NewPlan, Periodicity, Plan, PlanStatus, PlanType, PlanUpdate,
        SortStrategy,
    },
};

fn create_test_plan() -> Plan {
    Plan {
        id: "plan-006".to_string(),
        name: "Quarterly".to_string(),
        description: "Quarterly commitment".to_string(),
        plan_type: PlanType::Subscription,
        status: PlanStatus::Active,
        base_price: 165.0,
        currency: "EUR".to_string(),
        discount_percent: Some(10.0),
        periodicity: Periodicity::Quarterly,
        features: vec![Feature::new("weights-room", "Weights room access")],
        benefits: vec!["Mobile app included".to_string()],
        included_sessions: None,
        is_popular: false,
        is_recommended: false,
        is_new: false,
        display_order: 6,
        created_at: Timestamp::from_second(1_706_572_800).unwrap(), // 2024-01-30 00:00:00 UTC
        updated_at: Timestamp::from_second(1_706_572_800).unwrap(),
    }
}

#[test]
fn test_final_price_applies_discount() {
    let plan = create_test_plan();
    assert!((plan.final_price() - 148.5).abs() < 1e-9);
    assert!(plan.is_discounted());
}

#[test]
fn test_final_price_without_or_zero_discount() {
    let mut plan = create_test_plan();
    plan.discount_percent = None;
    assert_eq!(plan.final_price(), 165.0);
    assert!(!plan.is_discounted());

    plan.discount_percent = Some(0.0);
    assert_eq!(plan.final_price(), 165.0);
    assert!(!plan.is_discounted());
}

#[test]
fn test_full_discount_is_free() {
    let mut plan = create_test_plan();
    plan.discount_percent = Some(100.0);
    assert_eq!(plan.final_price(), 0.0);
}

#[test]
fn test_popularity_score_weights() {
    let mut plan = create_test_plan();
    assert_eq!(plan.popularity_score(), 0);
    plan.is_new = true;
    assert_eq!(plan.popularity_score(), 1);
    plan.is_recommended = true;
    assert_eq!(plan.popularity_score(), 3);
    plan.is_popular = true;
    assert_eq!(plan.popularity_score(), 6);
}

#[test]
fn test_feature_and_benefit_lookup() {
    let plan = create_test_plan();
    assert!(plan.has_feature("weights-room"));
    assert!(!plan.has_feature("Weights room access"));
    assert!(plan.has_benefit("Mobile app included"));
    assert!(!plan.has_benefit("mobile app included"));
}

#[test]
fn test_enum_string_round_trip() {
    for plan_type in PlanType::ALL {
        assert_eq!(PlanType::from_str(plan_type.as_str()).unwrap(), plan_type);
    }
    for status in PlanStatus::ALL {
        assert_eq!(PlanStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert_eq!(PlanType::from_str("PT").unwrap(), PlanType::PersonalTraining);
    assert_eq!(SortStrategy::from_str("popular").unwrap(), SortStrategy::Popularity);
    assert!(PlanStatus::from_str("deleted").is_err());
}

#[test]
fn test_plan_json_shape() {
    let plan = create_test_plan();
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["plan_type"], "subscription");
    assert_eq!(json["periodicity"], "quarterly");
    assert_eq!(json["status"], "active");

    let back: Plan = serde_json::from_value(json).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn test_new_plan_validation() {
    let valid = NewPlan::new("Basic", PlanType::Subscription, 35.0, Periodicity::Monthly);
    assert!(valid.validate().is_ok());

    let mut blank = valid.clone();
    blank.name = "  ".to_string();
    assert!(matches!(
        blank.validate(),
        Err(CatalogError::InvalidInput { field, .. }) if field == "name"
    ));

    let mut negative = valid.clone();
    negative.base_price = -1.0;
    assert!(matches!(
        negative.validate(),
        Err(CatalogError::InvalidInput { field, .. }) if field == "base_price"
    ));

    let mut discount = valid.clone();
    discount.discount_percent = Some(120.0);
    assert!(matches!(
        discount.validate(),
        Err(CatalogError::InvalidInput { field, .. }) if field == "discount_percent"
    ));

    let mut duplicated = valid;
    duplicated.features = vec![Feature::new("spa", "Spa"), Feature::new("spa", "Spa again")];
    assert!(matches!(
        duplicated.validate(),
        Err(CatalogError::InvalidInput { field, .. }) if field == "features"
    ));
}

#[test]
fn test_plan_update_changed_fields() {
    let update = PlanUpdate {
        id: "plan-001".to_string(),
        base_price: Some(39.0),
        discount_percent: Some(None),
        is_new: Some(true),
        ..Default::default()
    };
    assert!(update.validate().is_ok());
    assert_eq!(
        update.changed_fields(),
        ["Updated base price", "Updated discount", "Updated promotional flags"]
    );

    let empty = PlanUpdate {
        id: "plan-001".to_string(),
        ..Default::default()
    };
    assert!(empty.changed_fields().is_empty());
}

#[test]
fn test_filter_query_is_unfiltered() {
    assert!(FilterQuery::all().is_unfiltered());
    assert!(FilterQuery::all().with_text("").is_unfiltered());
    assert!(!FilterQuery::all().with_text("spa").is_unfiltered());
    assert!(!FilterQuery::all().with_status(PlanStatus::Draft).is_unfiltered());
    assert!(!FilterQuery::all().with_type(PlanType::Group).is_unfiltered());
}
