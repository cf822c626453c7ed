//! Handlers that drive the engine over a snapshot and return display types.

use log::debug;

use super::Catalog;
use crate::{
    display::CatalogView,
    engine::{CatalogViewState, ComparisonMatrix, Selection, SelectionNotice, ViewEvent},
    error::{CatalogError, Result},
    models::Plan,
    params::{Browse, Compare, Id},
};

impl Catalog {
    /// Handle showing a single plan.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::PlanNotFound` if no plan has this id.
    pub async fn show_plan(&self, params: &Id) -> Result<Plan> {
        self.get_plan(params)
            .await?
            .ok_or_else(|| CatalogError::plan_not_found(&params.id))
    }

    /// Handle one browse pass.
    ///
    /// Loads a snapshot, replays `params` as view events on a fresh
    /// [`CatalogViewState`] and returns what the state derives: the visible
    /// plans, the selection, the active notice and an open comparison.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::PlanNotFound` if a selected id does not exist.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use plancat_core::{models::SortStrategy, params::Browse, CatalogBuilder};
    /// # async {
    /// let catalog = CatalogBuilder::new().build().await?;
    /// let params = Browse {
    ///     sort: SortStrategy::Price,
    ///     select_all: true,
    ///     compare: true,
    ///     ..Default::default()
    /// };
    /// let view = catalog.browse(&params).await?;
    /// # Result::<(), plancat_core::CatalogError>::Ok(())
    /// # };
    /// ```
    pub async fn browse(&self, params: &Browse) -> Result<CatalogView> {
        let plans = self.snapshot().await?;
        ensure_known(&plans, &params.select)?;

        let mut state = CatalogViewState::new(&self.config);
        let query = params.query();
        let mut events = vec![
            ViewEvent::SetText(query.text.unwrap_or_default()),
            ViewEvent::SetType(query.plan_type),
            ViewEvent::SetStatus(query.status),
            ViewEvent::SetSort(params.sort),
            ViewEvent::SetViewMode(params.view_mode),
        ];
        events.extend(params.select.iter().cloned().map(ViewEvent::Toggle));
        if params.select_all {
            events.push(ViewEvent::SelectAll);
        }
        if params.compare {
            events.push(ViewEvent::Compare);
        }

        for event in events {
            state.apply(event, &plans);
        }

        Ok(CatalogView::new(&state, &plans))
    }

    /// Handle comparing specific plans.
    ///
    /// The ids go through a [`Selection`] governed by this catalog's config,
    /// so the capacity and comparison switch apply. Columns follow the order
    /// of `params.ids`; repeated ids are counted once.
    ///
    /// The outer result carries store failures; the inner one the notice when
    /// the comparison cannot be built.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::PlanNotFound` if an id does not exist.
    pub async fn compare_plans(
        &self,
        params: &Compare,
    ) -> Result<std::result::Result<ComparisonMatrix, SelectionNotice>> {
        let plans = self.snapshot().await?;
        ensure_known(&plans, &params.ids)?;

        let mut selection = Selection::new(&self.config);
        for id in &params.ids {
            if selection.contains(id) {
                continue;
            }
            if !selection.toggle(id) {
                if let Some(notice) = selection.notice() {
                    return Ok(Err(notice.clone()));
                }
            }
        }

        let Some(ids) = selection.request_comparison() else {
            let notice = selection
                .notice()
                .cloned()
                .unwrap_or_else(|| SelectionNotice::insufficient(selection.len()));
            return Ok(Err(notice));
        };

        let selected: Vec<&Plan> = ids
            .iter()
            .filter_map(|id| plans.iter().find(|p| &p.id == id))
            .collect();
        debug!("Comparing {} plans", selected.len());
        Ok(ComparisonMatrix::build(&selected))
    }
}

fn ensure_known(plans: &[Plan], ids: &[String]) -> Result<()> {
    match ids.iter().find(|id| !plans.iter().any(|p| &p.id == *id)) {
        Some(missing) => Err(CatalogError::plan_not_found(missing)),
        None => Ok(()),
    }
}
