//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Plan;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use plancat_core::{
///     display::CreateResult,
///     models::{Periodicity, Plan, PlanStatus, PlanType},
/// };
///
/// let plan = Plan {
///     id: "plan-001".to_string(),
///     name: "Basic".to_string(),
///     description: String::new(),
///     plan_type: PlanType::Subscription,
///     status: PlanStatus::Active,
///     base_price: 35.0,
///     currency: "EUR".to_string(),
///     discount_percent: None,
///     periodicity: Periodicity::Monthly,
///     features: vec![],
///     benefits: vec![],
///     included_sessions: None,
///     is_popular: false,
///     is_recommended: false,
///     is_new: false,
///     display_order: 0,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let result = CreateResult::new(plan);
/// println!("{}", result);
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes that were applied.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::plan;

    #[test]
    fn test_update_result_lists_changes() {
        let result = UpdateResult::with_changes(
            plan("plan-001", "Basic", 39.0),
            vec!["Updated base price".to_string()],
        );
        let output = result.to_string();
        assert!(output.starts_with("Updated plan with ID: plan-001"));
        assert!(output.contains("- Updated base price"));
        assert!(output.contains("39.00 EUR/month"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let output = UpdateResult::new(plan("plan-001", "Basic", 35.0)).to_string();
        assert!(!output.contains("Changes made:"));
    }

    #[test]
    fn test_delete_result() {
        let output = DeleteResult::new(plan("plan-007", "Discontinued", 40.0)).to_string();
        assert_eq!(output, "Deleted plan 'Discontinued' (ID: plan-007)\n");
    }
}
