//! Plan CRUD operations and queries.

use std::str::FromStr;

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension, Row, Transaction};
use ulid::Ulid;

use crate::{
    error::{CatalogError, DatabaseResultExt, Result},
    models::{Feature, NewPlan, Plan, PlanStatus, PlanUpdate},
};

const PLAN_COLUMNS: &str = "id, name, description, plan_type, status, base_price, currency, discount_percent, periodicity, included_sessions, is_popular, is_recommended, is_new, display_order, created_at, updated_at";
const INSERT_PLAN_SQL: &str = "INSERT INTO plans (id, name, description, plan_type, status, base_price, currency, discount_percent, periodicity, included_sessions, is_popular, is_recommended, is_new, display_order, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)";
const UPDATE_PLAN_SQL: &str = "UPDATE plans SET name = ?2, description = ?3, plan_type = ?4, status = ?5, base_price = ?6, currency = ?7, discount_percent = ?8, periodicity = ?9, included_sessions = ?10, is_popular = ?11, is_recommended = ?12, is_new = ?13, display_order = ?14, updated_at = ?15 WHERE id = ?1";
const UPDATE_PLAN_STATUS_SQL: &str = "UPDATE plans SET status = ?1, updated_at = ?2 WHERE id = ?3";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

const SELECT_FEATURES_SQL: &str = "SELECT feature_id, label, description, highlighted FROM plan_features WHERE plan_id = ?1 ORDER BY position";
const INSERT_FEATURE_SQL: &str = "INSERT INTO plan_features (plan_id, position, feature_id, label, description, highlighted) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const DELETE_FEATURES_SQL: &str = "DELETE FROM plan_features WHERE plan_id = ?1";
const SELECT_BENEFITS_SQL: &str =
    "SELECT text FROM plan_benefits WHERE plan_id = ?1 ORDER BY position";
const INSERT_BENEFIT_SQL: &str =
    "INSERT INTO plan_benefits (plan_id, position, text) VALUES (?1, ?2, ?3)";
const DELETE_BENEFITS_SQL: &str = "DELETE FROM plan_benefits WHERE plan_id = ?1";

impl super::Database {
    /// Inserts a new plan with its features and benefits.
    ///
    /// A fresh id is generated when the request carries none.
    pub fn create_plan(&mut self, new_plan: &NewPlan) -> Result<Plan> {
        self.create_plan_at(new_plan, Timestamp::now())
    }

    /// Inserts a plan stamped with the given creation time.
    pub(crate) fn create_plan_at(&mut self, new_plan: &NewPlan, created_at: Timestamp) -> Result<Plan> {
        new_plan.validate()?;

        let id = new_plan.id.clone().unwrap_or_else(generate_plan_id);
        if self.plan_exists(&id)? {
            return Err(CatalogError::DuplicateId { id });
        }

        let plan = Plan {
            id,
            name: new_plan.name.clone(),
            description: new_plan.description.clone(),
            plan_type: new_plan.plan_type,
            status: new_plan.status,
            base_price: new_plan.base_price,
            currency: new_plan.currency.clone(),
            discount_percent: new_plan.discount_percent,
            periodicity: new_plan.periodicity,
            features: new_plan.features.clone(),
            benefits: new_plan.benefits.clone(),
            included_sessions: new_plan.included_sessions,
            is_popular: new_plan.is_popular,
            is_recommended: new_plan.is_recommended,
            is_new: new_plan.is_new,
            display_order: new_plan.display_order,
            created_at,
            updated_at: created_at,
        };

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                plan.id,
                plan.name,
                plan.description,
                plan.plan_type.as_str(),
                plan.status.as_str(),
                plan.base_price,
                plan.currency,
                plan.discount_percent,
                plan.periodicity.as_str(),
                plan.included_sessions,
                plan.is_popular,
                plan.is_recommended,
                plan.is_new,
                plan.display_order,
                plan.created_at.to_string(),
                plan.updated_at.to_string(),
            ],
        )
        .db_context("Failed to insert plan")?;
        write_children(&tx, &plan)?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Created plan {}", plan.id);
        Ok(plan)
    }

    /// Retrieves a plan by its ID, with features and benefits loaded.
    pub fn get_plan(&self, id: &str) -> Result<Option<Plan>> {
        let query = format!("SELECT {PLAN_COLUMNS} FROM plans WHERE id = ?1");
        let mut plan = self
            .connection
            .query_row(&query, params![id], plan_from_row)
            .optional()
            .db_context("Failed to query plan")?;

        if let Some(ref mut plan) = plan {
            self.load_children(plan)?;
        }

        Ok(plan)
    }

    /// Returns the full catalog snapshot ordered by display order, then
    /// creation time, then insertion order.
    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        let query = format!("SELECT {PLAN_COLUMNS} FROM plans ORDER BY display_order, rowid");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let mut plans = stmt
            .query_map([], plan_from_row)
            .db_context("Failed to query plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan rows")?;

        // Stored timestamps are RFC 3339 text with variable fraction digits,
        // which does not collate chronologically
        plans.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then(a.created_at.cmp(&b.created_at))
        });

        for plan in &mut plans {
            self.load_children(plan)?;
        }

        Ok(plans)
    }

    /// Whether a plan with this id exists.
    pub fn plan_exists(&self, id: &str) -> Result<bool> {
        self.connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id], |row| row.get(0))
            .db_context("Failed to check plan existence")
    }

    /// Applies a partial update and returns the stored result.
    pub fn update_plan(&mut self, update: &PlanUpdate) -> Result<Plan> {
        update.validate()?;

        let mut plan = self
            .get_plan(&update.id)?
            .ok_or_else(|| CatalogError::plan_not_found(&update.id))?;
        apply_update(&mut plan, update);
        plan.updated_at = Timestamp::now();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPDATE_PLAN_SQL,
            params![
                plan.id,
                plan.name,
                plan.description,
                plan.plan_type.as_str(),
                plan.status.as_str(),
                plan.base_price,
                plan.currency,
                plan.discount_percent,
                plan.periodicity.as_str(),
                plan.included_sessions,
                plan.is_popular,
                plan.is_recommended,
                plan.is_new,
                plan.display_order,
                plan.updated_at.to_string(),
            ],
        )
        .db_context("Failed to update plan")?;

        tx.execute(DELETE_FEATURES_SQL, params![plan.id])
            .db_context("Failed to clear plan features")?;
        tx.execute(DELETE_BENEFITS_SQL, params![plan.id])
            .db_context("Failed to clear plan benefits")?;
        write_children(&tx, &plan)?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Updated plan {}", plan.id);
        Ok(plan)
    }

    /// Moves a plan to another lifecycle status.
    pub fn set_status(&mut self, id: &str, status: PlanStatus) -> Result<Plan> {
        let rows = self
            .connection
            .execute(
                UPDATE_PLAN_STATUS_SQL,
                params![status.as_str(), Timestamp::now().to_string(), id],
            )
            .db_context("Failed to update plan status")?;

        if rows == 0 {
            return Err(CatalogError::plan_not_found(id));
        }

        self.get_plan(id)?
            .ok_or_else(|| CatalogError::plan_not_found(id))
    }

    /// Copies a plan under a new id.
    ///
    /// The copy is a draft named "<name> (copy)" with promotional flags
    /// cleared and fresh timestamps.
    pub fn duplicate_plan(&mut self, id: &str, new_id: Option<&str>) -> Result<Plan> {
        let source = self
            .get_plan(id)?
            .ok_or_else(|| CatalogError::plan_not_found(id))?;

        let copy = NewPlan {
            id: new_id.map(String::from),
            name: format!("{} (copy)", source.name),
            description: source.description,
            plan_type: source.plan_type,
            status: PlanStatus::Draft,
            base_price: source.base_price,
            currency: source.currency,
            discount_percent: source.discount_percent,
            periodicity: source.periodicity,
            features: source.features,
            benefits: source.benefits,
            included_sessions: source.included_sessions,
            is_popular: false,
            is_recommended: false,
            is_new: false,
            display_order: source.display_order,
        };

        self.create_plan(&copy)
    }

    /// Permanently deletes a plan; features and benefits cascade.
    pub fn delete_plan(&mut self, id: &str) -> Result<()> {
        let rows = self
            .connection
            .execute(DELETE_PLAN_SQL, params![id])
            .db_context("Failed to delete plan")?;

        if rows == 0 {
            return Err(CatalogError::plan_not_found(id));
        }

        debug!("Deleted plan {id}");
        Ok(())
    }

    fn load_children(&self, plan: &mut Plan) -> Result<()> {
        let mut stmt = self
            .connection
            .prepare(SELECT_FEATURES_SQL)
            .db_context("Failed to prepare feature query")?;
        plan.features = stmt
            .query_map(params![plan.id], |row| {
                Ok(Feature {
                    id: row.get(0)?,
                    label: row.get(1)?,
                    description: row.get(2)?,
                    highlighted: row.get(3)?,
                })
            })
            .db_context("Failed to query plan features")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan features")?;

        let mut stmt = self
            .connection
            .prepare(SELECT_BENEFITS_SQL)
            .db_context("Failed to prepare benefit query")?;
        plan.benefits = stmt
            .query_map(params![plan.id], |row| row.get(0))
            .db_context("Failed to query plan benefits")?
            .collect::<rusqlite::Result<Vec<String>>>()
            .db_context("Failed to read plan benefits")?;

        Ok(())
    }
}

fn generate_plan_id() -> String {
    format!("plan-{}", Ulid::new().to_string().to_lowercase())
}

fn apply_update(plan: &mut Plan, update: &PlanUpdate) {
    if let Some(name) = &update.name {
        plan.name = name.clone();
    }
    if let Some(description) = &update.description {
        plan.description = description.clone();
    }
    if let Some(plan_type) = update.plan_type {
        plan.plan_type = plan_type;
    }
    if let Some(status) = update.status {
        plan.status = status;
    }
    if let Some(base_price) = update.base_price {
        plan.base_price = base_price;
    }
    if let Some(currency) = &update.currency {
        plan.currency = currency.clone();
    }
    if let Some(discount) = update.discount_percent {
        plan.discount_percent = discount;
    }
    if let Some(periodicity) = update.periodicity {
        plan.periodicity = periodicity;
    }
    if let Some(features) = &update.features {
        plan.features = features.clone();
    }
    if let Some(benefits) = &update.benefits {
        plan.benefits = benefits.clone();
    }
    if let Some(sessions) = update.included_sessions {
        plan.included_sessions = sessions;
    }
    if let Some(popular) = update.is_popular {
        plan.is_popular = popular;
    }
    if let Some(recommended) = update.is_recommended {
        plan.is_recommended = recommended;
    }
    if let Some(new) = update.is_new {
        plan.is_new = new;
    }
    if let Some(order) = update.display_order {
        plan.display_order = order;
    }
}

fn write_children(tx: &Transaction<'_>, plan: &Plan) -> Result<()> {
    for (position, feature) in plan.features.iter().enumerate() {
        tx.execute(
            INSERT_FEATURE_SQL,
            params![
                plan.id,
                position as i64,
                feature.id,
                feature.label,
                feature.description,
                feature.highlighted,
            ],
        )
        .db_context("Failed to insert plan feature")?;
    }

    for (position, benefit) in plan.benefits.iter().enumerate() {
        tx.execute(INSERT_BENEFIT_SQL, params![plan.id, position as i64, benefit])
            .db_context("Failed to insert plan benefit")?;
    }

    Ok(())
}

fn plan_from_row(row: &Row<'_>) -> rusqlite::Result<Plan> {
    Ok(Plan {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        plan_type: parse_column(row, 3)?,
        status: parse_column(row, 4)?,
        base_price: row.get(5)?,
        currency: row.get(6)?,
        discount_percent: row.get(7)?,
        periodicity: parse_column(row, 8)?,
        included_sessions: row.get(9)?,
        is_popular: row.get(10)?,
        is_recommended: row.get(11)?,
        is_new: row.get(12)?,
        display_order: row.get(13)?,
        created_at: parse_timestamp(row, 14)?,
        updated_at: parse_timestamp(row, 15)?,
        features: Vec::new(),
        benefits: Vec::new(),
    })
}

fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>().map_err(|message| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
        )
    })
}

fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
