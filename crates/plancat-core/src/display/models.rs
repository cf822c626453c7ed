//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay free of
//! presentation concerns.

use std::fmt;

use super::{
    datetime::LocalDateTime,
    labels::PriceTag,
};
use crate::models::{Feature, Periodicity, Plan, PlanStatus, PlanType, SortStrategy, ViewMode};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Grid => write!(f, "grid"),
            ViewMode::List => write!(f, "list"),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.highlighted {
            write!(f, "**{}**", self.label)?;
        } else {
            write!(f, "{}", self.label)?;
        }
        if let Some(description) = &self.description {
            write!(f, ": {description}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.name, self.id)?;
        writeln!(f)?;

        writeln!(f, "- Type: {}", self.plan_type.label())?;
        writeln!(f, "- Status: {}", self.status.badge())?;
        write!(f, "- Price: {}", PriceTag::of(self))?;
        match self.discount_percent {
            Some(discount) if discount > 0.0 => writeln!(f, " (-{discount}%)")?,
            _ => writeln!(f)?,
        }
        if let Some(sessions) = self.included_sessions {
            writeln!(f, "- Sessions: {sessions}")?;
        }
        let badges = self.promo_badges();
        if !badges.is_empty() {
            writeln!(f, "- Badges: {}", badges.join(", "))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if !self.features.is_empty() {
            writeln!(f, "\n## Features")?;
            writeln!(f)?;
            for feature in &self.features {
                writeln!(f, "- {feature}")?;
            }
        }

        if !self.benefits.is_empty() {
            writeln!(f, "\n## Benefits")?;
            writeln!(f)?;
            for benefit in &self.benefits {
                writeln!(f, "- {benefit}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::plan;

    #[test]
    fn test_plan_display_sections() {
        let mut p = plan("plan-002", "Premium", 55.0);
        p.is_popular = true;
        p.description = "Our members' favourite.".to_string();
        p.features = vec![
            Feature::new("open-24-7", "24/7 access").highlighted(),
            Feature::new("pool-spa", "Pool and spa").with_description("Heated pool"),
        ];
        p.benefits = vec!["Mobile app included".to_string()];

        let output = p.to_string();
        assert!(output.starts_with("# Premium (plan-002)"));
        assert!(output.contains("- Price: 55.00 EUR/month\n"));
        assert!(output.contains("- Badges: Popular"));
        assert!(output.contains("- **24/7 access**"));
        assert!(output.contains("- Pool and spa: Heated pool"));
        assert!(output.contains("## Benefits"));
    }

    #[test]
    fn test_plan_display_discount_and_sessions() {
        let mut p = plan("plan-004", "PT Intensive", 450.0);
        p.plan_type = PlanType::PersonalTraining;
        p.included_sessions = Some(12);
        p.discount_percent = Some(10.0);

        let output = p.to_string();
        assert!(output.contains("- Type: Personal training"));
        assert!(output.contains("~~450.00~~ 405.00 EUR/month (-10%)"));
        assert!(output.contains("- Sessions: 12"));
        assert!(!output.contains("## Features"));
    }
}
