use plancat_core::{
    models::{Feature, NewPlan, Periodicity, PlanStatus, PlanType, PlanUpdate},
    CatalogError, Database,
};
use rusqlite::Connection;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn plan_ids(db: &Database) -> Vec<String> {
    db.list_plans().unwrap().into_iter().map(|p| p.id).collect()
}

fn new_plan(id: &str, name: &str, price: f64) -> NewPlan {
    let mut plan = NewPlan::new(name, PlanType::Subscription, price, Periodicity::Monthly);
    plan.id = Some(id.to_string());
    plan
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert!(db.list_plans().unwrap().is_empty());
}

#[test]
fn test_reopen_existing_database() {
    let (temp_file, mut db) = create_test_db();
    db.create_plan(&new_plan("plan-001", "Basic", 35.0)).unwrap();
    drop(db);

    // Schema and migrations run again on an existing file
    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(plan_ids(&db), ["plan-001"]);
}

#[test]
fn test_open_database_without_display_order_column() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let conn = Connection::open(temp_file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE plans (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                plan_type TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'active',
                base_price REAL NOT NULL,
                currency TEXT NOT NULL,
                discount_percent REAL,
                periodicity TEXT NOT NULL,
                included_sessions INTEGER,
                is_popular INTEGER NOT NULL DEFAULT 0,
                is_recommended INTEGER NOT NULL DEFAULT 0,
                is_new INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            INSERT INTO plans (id, name, plan_type, base_price, currency, periodicity, created_at, updated_at)
            VALUES ('plan-old', 'Legacy', 'subscription', 30.0, 'EUR', 'monthly',
                    '2023-06-01T00:00:00Z', '2023-06-01T00:00:00Z');",
        )
        .unwrap();
    }

    let db = Database::new(temp_file.path()).expect("Failed to migrate database");
    let plans = db.list_plans().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, "plan-old");
    assert_eq!(plans[0].display_order, 0);
    assert!(plans[0].features.is_empty());
}

#[test]
fn test_create_and_get_plan_with_children() {
    let (_temp_file, mut db) = create_test_db();

    let mut request = new_plan("plan-002", "Premium", 55.0);
    request.description = "All access".to_string();
    request.included_sessions = Some(4);
    request.is_popular = true;
    request.features = vec![
        Feature::new("open-24-7", "24/7 access").highlighted(),
        Feature::new("pool-spa", "Pool and spa").with_description("Heated pool"),
    ];
    request.benefits = vec!["Mobile app".to_string(), "Events".to_string()];

    let created = db.create_plan(&request).expect("Failed to create plan");
    assert_eq!(created.created_at, created.updated_at);

    let plan = db
        .get_plan("plan-002")
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(plan, created);
    assert_eq!(plan.features[0].id, "open-24-7");
    assert!(plan.features[0].highlighted);
    assert_eq!(plan.features[1].description.as_deref(), Some("Heated pool"));
    assert_eq!(plan.benefits, ["Mobile app", "Events"]);
    assert_eq!(plan.included_sessions, Some(4));
    assert!(plan.is_popular);
}

#[test]
fn test_create_plan_generates_id() {
    let (_temp_file, mut db) = create_test_db();
    let plan = db
        .create_plan(&NewPlan::new("Drop-in", PlanType::PunchCard, 12.0, Periodicity::OneTime))
        .unwrap();
    assert!(plan.id.starts_with("plan-"));
    assert!(db.plan_exists(&plan.id).unwrap());
}

#[test]
fn test_create_plan_rejects_duplicate_id() {
    let (_temp_file, mut db) = create_test_db();
    db.create_plan(&new_plan("plan-001", "Basic", 35.0)).unwrap();

    let result = db.create_plan(&new_plan("plan-001", "Other", 10.0));
    assert!(matches!(result, Err(CatalogError::DuplicateId { id }) if id == "plan-001"));
}

#[test]
fn test_create_plan_rejects_invalid_input() {
    let (_temp_file, mut db) = create_test_db();
    let mut request = new_plan("plan-001", "Basic", 35.0);
    request.discount_percent = Some(-5.0);

    let result = db.create_plan(&request);
    assert!(matches!(result, Err(CatalogError::InvalidInput { .. })));
    assert!(plan_ids(&db).is_empty());
}

#[test]
fn test_get_missing_plan() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_plan("nope").unwrap().is_none());
}

#[test]
fn test_list_plans_by_display_order() {
    let (_temp_file, mut db) = create_test_db();

    let mut late = new_plan("late", "Late", 10.0);
    late.display_order = 9;
    let mut first = new_plan("first", "First", 10.0);
    first.display_order = 1;
    let mut second = new_plan("second", "Second", 10.0);
    second.display_order = 1;

    db.create_plan(&late).unwrap();
    db.create_plan(&first).unwrap();
    db.create_plan(&second).unwrap();

    assert_eq!(plan_ids(&db), ["first", "second", "late"]);
}

#[test]
fn test_update_plan_partial() {
    let (_temp_file, mut db) = create_test_db();
    let mut request = new_plan("plan-001", "Basic", 35.0);
    request.discount_percent = Some(10.0);
    request.features = vec![Feature::new("weights-room", "Weights room")];
    let created = db.create_plan(&request).unwrap();

    let updated = db
        .update_plan(&PlanUpdate {
            id: "plan-001".to_string(),
            base_price: Some(39.0),
            discount_percent: Some(None),
            features: Some(vec![Feature::new("cardio-zone", "Cardio zone")]),
            ..Default::default()
        })
        .expect("Failed to update plan");

    assert_eq!(updated.name, "Basic");
    assert_eq!(updated.base_price, 39.0);
    assert_eq!(updated.discount_percent, None);
    assert!(updated.updated_at >= created.updated_at);

    let stored = db.get_plan("plan-001").unwrap().unwrap();
    assert_eq!(stored, updated);
    assert!(stored.has_feature("cardio-zone"));
    assert!(!stored.has_feature("weights-room"));
}

#[test]
fn test_update_missing_plan() {
    let (_temp_file, mut db) = create_test_db();
    let result = db.update_plan(&PlanUpdate {
        id: "ghost".to_string(),
        name: Some("Ghost".to_string()),
        ..Default::default()
    });
    assert!(matches!(result, Err(CatalogError::PlanNotFound { .. })));
}

#[test]
fn test_set_status() {
    let (_temp_file, mut db) = create_test_db();
    db.create_plan(&new_plan("plan-001", "Basic", 35.0)).unwrap();

    let archived = db.set_status("plan-001", PlanStatus::Archived).unwrap();
    assert_eq!(archived.status, PlanStatus::Archived);

    let result = db.set_status("ghost", PlanStatus::Active);
    assert!(matches!(result, Err(CatalogError::PlanNotFound { .. })));
}

#[test]
fn test_duplicate_plan() {
    let (_temp_file, mut db) = create_test_db();
    let mut request = new_plan("plan-003", "VIP", 950.0);
    request.is_recommended = true;
    request.is_new = true;
    request.features = vec![Feature::new("vip-area", "VIP area")];
    db.create_plan(&request).unwrap();

    let copy = db.duplicate_plan("plan-003", Some("plan-003b")).unwrap();
    assert_eq!(copy.id, "plan-003b");
    assert_eq!(copy.name, "VIP (copy)");
    assert_eq!(copy.status, PlanStatus::Draft);
    assert!(!copy.is_recommended && !copy.is_new);
    assert!(copy.has_feature("vip-area"));

    let generated = db.duplicate_plan("plan-003", None).unwrap();
    assert_ne!(generated.id, "plan-003");
    assert_eq!(plan_ids(&db).len(), 3);
}

#[test]
fn test_delete_plan_cascades() {
    let (_temp_file, mut db) = create_test_db();
    let mut request = new_plan("plan-001", "Basic", 35.0);
    request.features = vec![Feature::new("weights-room", "Weights room")];
    request.benefits = vec!["App".to_string()];
    db.create_plan(&request).unwrap();

    db.delete_plan("plan-001").expect("Failed to delete plan");
    assert!(db.get_plan("plan-001").unwrap().is_none());

    // Recreating the id starts from clean child tables
    let recreated = db.create_plan(&new_plan("plan-001", "Basic", 35.0)).unwrap();
    let stored = db.get_plan(&recreated.id).unwrap().unwrap();
    assert!(stored.features.is_empty());
    assert!(stored.benefits.is_empty());

    let result = db.delete_plan("ghost");
    assert!(matches!(result, Err(CatalogError::PlanNotFound { .. })));
}

#[test]
fn test_seed_demo_is_idempotent() {
    let (_temp_file, mut db) = create_test_db();
    assert_eq!(db.seed_demo().unwrap(), 8);
    assert_eq!(db.seed_demo().unwrap(), 0);

    let plans = db.list_plans().unwrap();
    assert_eq!(plans.len(), 8);
    assert_eq!(plans[0].id, "plan-001");

    let quarterly = db.get_plan("plan-006").unwrap().unwrap();
    assert!((quarterly.final_price() - 148.5).abs() < 1e-9);

    let students = db.get_plan("plan-008").unwrap().unwrap();
    assert_eq!(students.status, PlanStatus::Draft);
    assert!((students.final_price() - 24.5).abs() < 1e-9);
}

#[test]
fn test_in_memory_database() {
    let mut db = Database::in_memory().unwrap();
    db.create_plan(&new_plan("plan-001", "Basic", 35.0)).unwrap();
    assert_eq!(plan_ids(&db), ["plan-001"]);
}
