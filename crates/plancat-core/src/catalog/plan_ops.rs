//! Plan operations for the Catalog.

use log::info;

use super::Catalog;
use crate::{
    error::{CatalogError, Result},
    models::{NewPlan, Plan, PlanStatus, PlanUpdate},
    params::{DuplicatePlan, Id, SetStatus},
};

impl Catalog {
    /// Creates a new plan. The store validates it and assigns timestamps.
    pub async fn create_plan(&self, new_plan: &NewPlan) -> Result<Plan> {
        let new_plan = new_plan.clone();
        let plan = self
            .with_database(move |db| db.create_plan(&new_plan))
            .await?;
        info!("Created plan {} ({})", plan.id, plan.name);
        Ok(plan)
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let plan_id = params.id.clone();
        self.with_database(move |db| db.get_plan(&plan_id)).await
    }

    /// Applies a partial update to a plan.
    pub async fn update_plan(&self, update: &PlanUpdate) -> Result<Plan> {
        let update = update.clone();
        self.with_database(move |db| db.update_plan(&update)).await
    }

    /// Archives a plan. Archived plans stay in the snapshot and can be
    /// filtered by status.
    pub async fn archive_plan(&self, params: &Id) -> Result<Plan> {
        self.set_plan_status(&SetStatus {
            id: params.id.clone(),
            status: PlanStatus::Archived,
        })
        .await
    }

    /// Moves a plan to any status.
    pub async fn set_plan_status(&self, params: &SetStatus) -> Result<Plan> {
        let plan_id = params.id.clone();
        let status = params.status;
        let plan = self
            .with_database(move |db| db.set_status(&plan_id, status))
            .await?;
        info!("Plan {} is now {}", plan.id, plan.status.as_str());
        Ok(plan)
    }

    /// Copies a plan into a new draft.
    pub async fn duplicate_plan(&self, params: &DuplicatePlan) -> Result<Plan> {
        let plan_id = params.id.clone();
        let new_id = params.new_id.clone();
        self.with_database(move |db| db.duplicate_plan(&plan_id, new_id.as_deref()))
            .await
    }

    /// Permanently deletes a plan and returns what was removed.
    pub async fn delete_plan(&self, params: &Id) -> Result<Plan> {
        let plan_id = params.id.clone();
        let plan = self
            .with_database(move |db| {
                let plan = db
                    .get_plan(&plan_id)?
                    .ok_or_else(|| CatalogError::plan_not_found(&plan_id))?;
                db.delete_plan(&plan_id)?;
                Ok(plan)
            })
            .await?;
        info!("Deleted plan {}", plan.id);
        Ok(plan)
    }

    /// The full plan snapshot the engine works on.
    pub async fn snapshot(&self) -> Result<Vec<Plan>> {
        self.with_database(|db| db.list_plans()).await
    }

    /// Inserts the demo catalog, skipping ids that already exist.
    pub async fn seed_demo(&self) -> Result<usize> {
        self.with_database(|db| db.seed_demo()).await
    }
}
