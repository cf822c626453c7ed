//! Explicit view state for one "browse and compare" session.
//!
//! The rendering layer owns a single [`CatalogViewState`] and feeds it
//! [`ViewEvent`]s together with the current plan snapshot. Everything the
//! layer needs to draw is derived from the state by the pure engine stages.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    compare::ComparisonMatrix,
    filter::filter_plans,
    selection::{Selection, SelectionNotice},
    sort::sort_plans,
};
use crate::{
    config::CatalogConfig,
    models::{FilterQuery, Plan, PlanStatus, PlanType, SortStrategy, ViewMode},
};

/// User-initiated events the catalog view responds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum ViewEvent {
    SetText(String),
    /// `None` selects all types
    SetType(Option<PlanType>),
    /// `None` selects all statuses
    SetStatus(Option<PlanStatus>),
    SetSort(SortStrategy),
    SetViewMode(ViewMode),
    Toggle(String),
    /// Toggle-all over the currently visible plans
    SelectAll,
    ClearSelection,
    /// Opens the comparison for the current selection
    Compare,
    /// Closes the comparison and drops the selection
    Cancel,
}

/// Filter, sort, selection and comparison state of the catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogViewState {
    pub query: FilterQuery,
    pub sort: SortStrategy,
    pub view_mode: ViewMode,
    selection: Selection,
    comparison: Option<ComparisonMatrix>,
}

impl Default for CatalogViewState {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

impl CatalogViewState {
    /// Fresh state: no filters, sorted by name, nothing selected.
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            query: FilterQuery::default(),
            sort: SortStrategy::default(),
            view_mode: ViewMode::default(),
            selection: Selection::new(config),
            comparison: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The advisory to show inline, if any.
    pub fn notice(&self) -> Option<&SelectionNotice> {
        self.selection.notice()
    }

    /// The open comparison, if the last compare succeeded.
    pub fn comparison(&self) -> Option<&ComparisonMatrix> {
        self.comparison.as_ref()
    }

    /// Plans to render: the snapshot filtered by the query, then sorted.
    pub fn visible<'a>(&self, plans: &'a [Plan]) -> Vec<&'a Plan> {
        sort_plans(&filter_plans(plans, &self.query), self.sort)
    }

    /// Applies one event against the current snapshot.
    ///
    /// The snapshot is reconciled first, so events never act on ids deleted
    /// from the store.
    pub fn apply(&mut self, event: ViewEvent, plans: &[Plan]) {
        debug!("Applying view event {event:?}");
        self.reconcile(plans);

        match event {
            ViewEvent::SetText(text) => {
                self.query.text = Some(text).filter(|t| !t.is_empty());
            }
            ViewEvent::SetType(plan_type) => self.query.plan_type = plan_type,
            ViewEvent::SetStatus(status) => self.query.status = status,
            ViewEvent::SetSort(sort) => self.sort = sort,
            ViewEvent::SetViewMode(mode) => self.view_mode = mode,
            ViewEvent::Toggle(id) => {
                if plans.iter().any(|p| p.id == id) {
                    self.selection.toggle(&id);
                } else {
                    debug!("Ignoring toggle of unknown plan {id}");
                }
            }
            ViewEvent::SelectAll => {
                let visible: Vec<&str> = self
                    .visible(plans)
                    .into_iter()
                    .map(|p| p.id.as_str())
                    .collect();
                self.selection.select_all(&visible);
            }
            ViewEvent::ClearSelection => self.selection.clear(),
            ViewEvent::Compare => self.open_comparison(plans),
            ViewEvent::Cancel => {
                self.comparison = None;
                self.selection.clear();
            }
        }
    }

    /// Prunes selected ids that are gone from `plans` and closes a comparison
    /// that shows a deleted plan.
    ///
    /// Filters narrowing the view do not affect the selection. Applying it
    /// repeatedly to the same snapshot changes nothing after the first call.
    pub fn reconcile(&mut self, plans: &[Plan]) {
        self.selection
            .retain_known(plans.iter().map(|p| p.id.as_str()));

        let stale = self.comparison.as_ref().is_some_and(|matrix| {
            matrix
                .columns
                .iter()
                .any(|column| !plans.iter().any(|p| p.id == column.plan_id))
        });
        if stale {
            debug!("Closing comparison that references a deleted plan");
            self.comparison = None;
        }
    }

    fn open_comparison(&mut self, plans: &[Plan]) {
        self.comparison = None;
        let Some(ids) = self.selection.request_comparison() else {
            return;
        };

        let selected: Vec<&Plan> = ids
            .iter()
            .filter_map(|id| plans.iter().find(|p| &p.id == id))
            .collect();

        match ComparisonMatrix::build(&selected) {
            Ok(matrix) => {
                self.comparison = Some(matrix);
                self.selection.clear();
            }
            // Selected ids missing from the snapshot
            Err(notice) => debug!("Comparison rejected: {notice:?}"),
        }
    }
}
