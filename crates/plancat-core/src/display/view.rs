//! The rendered catalog page.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    lines::PlanLine,
    datetime::LocalDate,
    labels::PriceTag,
};
use crate::{
    engine::{CatalogViewState, ComparisonMatrix, SelectionNotice},
    models::{FilterQuery, Plan, SortStrategy, ViewMode},
};

/// Everything a browse pass derived from the view state, detached from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    /// Visible plans, filtered and sorted
    pub plans: Vec<Plan>,
    /// Size of the snapshot before filtering
    pub total: usize,
    pub query: FilterQuery,
    pub sort: SortStrategy,
    pub view_mode: ViewMode,
    /// Selected ids in selection order
    pub selected: Vec<String>,
    pub max_selectable: usize,
    pub comparison_enabled: bool,
    pub notice: Option<SelectionNotice>,
    pub comparison: Option<ComparisonMatrix>,
}

impl CatalogView {
    /// Captures what `state` shows for the snapshot `plans`.
    pub fn new(state: &CatalogViewState, plans: &[Plan]) -> Self {
        let selection = state.selection();
        Self {
            plans: state.visible(plans).into_iter().cloned().collect(),
            total: plans.len(),
            query: state.query.clone(),
            sort: state.sort,
            view_mode: state.view_mode,
            selected: selection.ids().to_vec(),
            max_selectable: selection.max_selectable(),
            comparison_enabled: selection.comparison_enabled(),
            notice: state.notice().cloned(),
            comparison: state.comparison().cloned(),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    fn fmt_filters(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_unfiltered() {
            return Ok(());
        }
        let mut parts = Vec::new();
        if let Some(text) = self.query.text.as_deref().filter(|t| !t.is_empty()) {
            parts.push(format!("text \"{text}\""));
        }
        if let Some(plan_type) = self.query.plan_type {
            parts.push(format!("type {}", plan_type.label()));
        }
        if let Some(status) = self.query.status {
            parts.push(format!("status {}", status.badge()));
        }
        if !parts.is_empty() {
            write!(f, " · filtered by {}", parts.join(", "))?;
        }
        Ok(())
    }

    fn fmt_grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| | Plan | Type | Price | Status | Badges | Created |")?;
        writeln!(f, "|---|---|---|---|---|---|---|")?;
        for plan in &self.plans {
            let mark = if self.is_selected(&plan.id) { "[x]" } else { "[ ]" };
            writeln!(
                f,
                "| {mark} | **{}** ({}) | {} | {} | {} | {} | {} |",
                plan.name.replace('|', "\\|"),
                plan.id,
                plan.plan_type.label(),
                PriceTag::of(plan),
                plan.status.badge(),
                plan.promo_badges().join(", "),
                LocalDate(&plan.created_at)
            )?;
        }
        Ok(())
    }

    fn fmt_list(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for plan in &self.plans {
            writeln!(
                f,
                "- {}",
                PlanLine::new(plan, self.is_selected(&plan.id))
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for CatalogView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan catalog")?;
        writeln!(f)?;
        write!(
            f,
            "Showing {} of {} plans · sorted by {}",
            self.plans.len(),
            self.total,
            self.sort
        )?;
        self.fmt_filters(f)?;
        writeln!(f)?;
        writeln!(f)?;

        if let Some(notice) = &self.notice {
            writeln!(f, "> **{}:** {notice}", notice.severity())?;
            writeln!(f)?;
        }

        if self.plans.is_empty() {
            writeln!(f, "No plans found.")?;
        } else {
            match self.view_mode {
                ViewMode::Grid => self.fmt_grid(f)?,
                ViewMode::List => self.fmt_list(f)?,
            }
        }

        if !self.selected.is_empty() {
            writeln!(f)?;
            if self.comparison_enabled {
                write!(f, "Selected {}/{}: ", self.selected.len(), self.max_selectable)?;
            } else {
                write!(f, "Selected {}: ", self.selected.len())?;
            }
            writeln!(f, "{}", self.selected.join(", "))?;
        }

        if let Some(matrix) = &self.comparison {
            writeln!(f, "\n## Comparison")?;
            writeln!(f)?;
            write!(f, "{matrix}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::CatalogConfig,
        engine::{testing::plan, ViewEvent},
        models::PlanType,
    };

    fn catalog() -> Vec<Plan> {
        let mut premium = plan("premium", "Premium", 55.0);
        premium.is_popular = true;
        let mut pt = plan("pt", "PT Intensive", 450.0);
        pt.plan_type = PlanType::PersonalTraining;
        vec![plan("basic", "Basic", 35.0), premium, pt]
    }

    #[test]
    fn test_view_header_and_grid() {
        let plans = catalog();
        let mut state = CatalogViewState::default();
        state.apply(ViewEvent::Toggle("premium".to_string()), &plans);

        let output = CatalogView::new(&state, &plans).to_string();
        assert!(output.contains("Showing 3 of 3 plans · sorted by name\n"));
        assert!(output.contains("| [x] | **Premium** (premium) |"));
        assert!(output.contains("| [ ] | **Basic** (basic) |"));
        assert!(output.contains("Selected 1/3: premium"));
    }

    #[test]
    fn test_view_list_with_filters_and_notice() {
        let plans = catalog();
        let mut state = CatalogViewState::default();
        state.apply(ViewEvent::SetViewMode(ViewMode::List), &plans);
        state.apply(ViewEvent::SetType(Some(PlanType::PersonalTraining)), &plans);
        state.apply(ViewEvent::Compare, &plans);

        let output = CatalogView::new(&state, &plans).to_string();
        assert!(output.contains("Showing 1 of 3 plans · sorted by name · filtered by type Personal training"));
        assert!(output.contains("> **Warning:** Nothing to compare"));
        assert!(output.contains("- [ ] **PT Intensive** (pt)"));
    }

    #[test]
    fn test_view_empty() {
        let plans = catalog();
        let mut state = CatalogViewState::default();
        state.apply(ViewEvent::SetText("zumba".to_string()), &plans);
        let view = CatalogView::new(&state, &plans);
        assert!(view.plans.is_empty());
        assert!(view.to_string().contains("No plans found."));
    }

    #[test]
    fn test_view_with_comparison_and_disabled_cap() {
        let plans = catalog();
        let mut state = CatalogViewState::new(&CatalogConfig::default().with_comparison(false));
        state.apply(ViewEvent::SelectAll, &plans);
        let output = CatalogView::new(&state, &plans).to_string();
        assert!(output.contains("Selected 3: basic, premium, pt"));

        let mut state = CatalogViewState::default();
        state.apply(ViewEvent::Toggle("basic".to_string()), &plans);
        state.apply(ViewEvent::Toggle("pt".to_string()), &plans);
        state.apply(ViewEvent::Compare, &plans);
        let view = CatalogView::new(&state, &plans);
        assert!(view.selected.is_empty());
        assert!(view.to_string().contains("## Comparison"));
    }
}
