//! Demo catalog used to populate an empty database.

use jiff::Timestamp;
use log::{debug, info};

use crate::{
    error::{CatalogError, Result},
    models::{Feature, NewPlan, Periodicity, PlanStatus, PlanType},
};

impl super::Database {
    /// Inserts the demo plans that are not already stored.
    ///
    /// Returns how many plans were inserted. Running it twice inserts nothing
    /// the second time.
    pub fn seed_demo(&mut self) -> Result<usize> {
        let mut inserted = 0;
        for (plan, created_at) in demo_plans()? {
            let Some(id) = plan.id.as_deref() else {
                continue;
            };
            if self.plan_exists(id)? {
                debug!("Demo plan {id} already present, skipping");
                continue;
            }
            self.create_plan_at(&plan, created_at)?;
            inserted += 1;
        }

        info!("Seeded {inserted} demo plans");
        Ok(inserted)
    }
}

/// The demo catalog with the creation time of each plan.
pub fn demo_plans() -> Result<Vec<(NewPlan, Timestamp)>> {
    let mut basic = demo(
        "plan-001",
        "Basic",
        "The right plan to start your training routine. Access to the core facilities and standard group classes.",
        PlanType::Subscription,
        Periodicity::Monthly,
        35.0,
        1,
    );
    basic.features = vec![
        Feature::new("weights-room", "Weights room access")
            .with_description("All strength machines and equipment")
            .highlighted(),
        Feature::new("cardio-zone", "Cardio zone access")
            .with_description("Treadmills, stationary bikes and ellipticals"),
        Feature::new("group-classes", "2 group classes per week")
            .with_description("Yoga, pilates, spinning"),
        Feature::new("lockers", "Changing rooms and lockers"),
    ];
    basic.benefits = vec![
        "Basic nutrition advice".to_string(),
        "Mobile app included".to_string(),
    ];

    let mut premium = demo(
        "plan-002",
        "Premium",
        "Our members' favourite. Full access to every facility, unlimited classes and exclusive perks.",
        PlanType::Subscription,
        Periodicity::Monthly,
        55.0,
        2,
    );
    premium.is_popular = true;
    premium.features = vec![
        Feature::new("weights-room", "Weights room access").highlighted(),
        Feature::new("cardio-zone", "Cardio zone access"),
        Feature::new("open-24-7", "24/7 access")
            .with_description("Every facility, around the clock")
            .highlighted(),
        Feature::new("group-classes", "Unlimited group classes")
            .with_description("Yoga, pilates, spinning, crossfit, zumba and more")
            .highlighted(),
        Feature::new("pool-spa", "Pool and spa")
            .with_description("Heated pool, jacuzzi and sauna"),
        Feature::new("pt-sessions", "1 PT session per month"),
        Feature::new("nutrition-plan", "Personal nutrition plan"),
        Feature::new("lockers", "Changing rooms and lockers"),
    ];
    premium.benefits = vec![
        "Mobile app included".to_string(),
        "Advanced progress tracking".to_string(),
        "Supplement discounts".to_string(),
        "Invitations to exclusive events".to_string(),
    ];

    let mut vip = demo(
        "plan-003",
        "VIP",
        "The most exclusive experience. Annual plan with every premium perk, unlimited personal training and luxury services.",
        PlanType::Subscription,
        Periodicity::Annual,
        950.0,
        3,
    );
    vip.is_recommended = true;
    vip.is_new = true;
    vip.features = vec![
        Feature::new("pt-sessions", "Unlimited personal training")
            .with_description("No session limit for the whole year")
            .highlighted(),
        Feature::new("vip-area", "VIP area access")
            .with_description("Exclusive lounge and premium lockers")
            .highlighted(),
        Feature::new("weights-room", "Weights room access"),
        Feature::new("cardio-zone", "Cardio zone access"),
        Feature::new("open-24-7", "24/7 access"),
        Feature::new("group-classes", "Unlimited premium classes"),
        Feature::new("pool-spa", "Full spa and wellness")
            .with_description("Massages, facial and body treatments"),
        Feature::new("nutrition-plan", "Personal nutritionist")
            .with_description("Monthly nutrition follow-up"),
        Feature::new("towels", "Towels and laundry service"),
    ];
    vip.benefits = vec![
        "Mobile app included".to_string(),
        "Priority booking for new classes".to_string(),
        "Supplement discounts".to_string(),
        "Invitations to exclusive events".to_string(),
        "Premium loyalty programme".to_string(),
    ];

    let mut pt = demo(
        "plan-004",
        "PT Intensive",
        "Three months of intensive personal training. Built for specific goals with constant follow-up.",
        PlanType::PersonalTraining,
        Periodicity::Quarterly,
        450.0,
        4,
    );
    pt.included_sessions = Some(12);
    pt.features = vec![
        Feature::new("pt-sessions", "12 PT sessions")
            .with_description("One session per week for three months")
            .highlighted(),
        Feature::new("assessment", "Initial fitness assessment")
            .with_description("Body composition and goal analysis"),
        Feature::new("training-plan", "Personal training plan"),
        Feature::new("weekly-review", "Weekly review"),
        Feature::new("nutrition-plan", "Basic nutrition plan"),
    ];
    pt.benefits = vec![
        "Facility access during the plan".to_string(),
        "Mobile app included".to_string(),
        "Monthly progress reports".to_string(),
    ];

    let mut corporate = demo(
        "plan-005",
        "Corporate Group",
        "Designed for companies promoting employee wellbeing. Corporate group classes with flexible schedules.",
        PlanType::Group,
        Periodicity::Monthly,
        25.0,
        5,
    );
    corporate.included_sessions = Some(8);
    corporate.features = vec![
        Feature::new("group-classes", "8 group classes per month")
            .with_description("Yoga, pilates, stretching, morning activation")
            .highlighted(),
        Feature::new("flexible-hours", "Flexible schedule"),
        Feature::new("on-site", "Classes on site or at the gym"),
        Feature::new("min-employees", "Minimum 10 employees")
            .with_description("Per-employee price with group discount"),
        Feature::new("reports", "Attendance reports"),
    ];
    corporate.benefits = vec![
        "Discounts on individual plans".to_string(),
        "Corporate wellness programmes".to_string(),
        "Nutrition and health talks".to_string(),
    ];

    let mut quarterly = demo(
        "plan-006",
        "Quarterly",
        "Quarterly commitment saving 10%. For members after stability and a better price.",
        PlanType::Subscription,
        Periodicity::Quarterly,
        165.0,
        6,
    );
    quarterly.discount_percent = Some(10.0);
    quarterly.features = vec![
        Feature::new("weights-room", "Weights room access").highlighted(),
        Feature::new("cardio-zone", "Cardio zone access"),
        Feature::new("group-classes", "Unlimited group classes"),
        Feature::new("auto-renewal", "No extra commitment")
            .with_description("Renews automatically every three months"),
    ];
    quarterly.benefits = vec![
        "Mobile app included".to_string(),
        "Advanced progress tracking".to_string(),
        "Discounts on extra services".to_string(),
    ];

    let mut discontinued = demo(
        "plan-007",
        "Discontinued",
        "No longer available to new members.",
        PlanType::Subscription,
        Periodicity::Monthly,
        40.0,
        99,
    );
    discontinued.status = PlanStatus::Inactive;
    discontinued.features = vec![Feature::new("weights-room", "Weights room access")
        .with_description("Existing members only")];

    let mut students = demo(
        "plan-008",
        "Students",
        "Special plan for students with a 30% discount. Under review.",
        PlanType::Subscription,
        Periodicity::Monthly,
        35.0,
        100,
    );
    students.status = PlanStatus::Draft;
    students.discount_percent = Some(30.0);
    students.features = vec![
        Feature::new("weights-room", "Weights room access")
            .with_description("Requires a valid student card"),
        Feature::new("cardio-zone", "Cardio zone access"),
    ];

    Ok(vec![
        (basic, created("2024-01-15")?),
        (premium, created("2024-01-20")?),
        (vip, created("2024-03-01")?),
        (pt, created("2024-01-25")?),
        (corporate, created("2024-02-01")?),
        (quarterly, created("2024-01-30")?),
        (discontinued, created("2023-12-01")?),
        (students, created("2024-03-10")?),
    ])
}

fn demo(
    id: &str,
    name: &str,
    description: &str,
    plan_type: PlanType,
    periodicity: Periodicity,
    base_price: f64,
    display_order: u32,
) -> NewPlan {
    let mut plan = NewPlan::new(name, plan_type, base_price, periodicity);
    plan.id = Some(id.to_string());
    plan.description = description.to_string();
    plan.display_order = display_order;
    plan
}

fn created(date: &str) -> Result<Timestamp> {
    format!("{date}T00:00:00Z")
        .parse()
        .map_err(|e| CatalogError::Configuration {
            message: format!("Invalid demo date '{date}': {e}"),
        })
}
