//! Selection manager: the bounded set of plans picked for comparison.
//!
//! Capacity and comparison conditions never fail an operation. The attempt is
//! ignored or partially applied and a [`SelectionNotice`] is left for the
//! rendering layer to show until the next successful operation clears it.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{CatalogConfig, MIN_COMPARABLE};

/// How prominently a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
    /// The user's action was not applied
    Warning,
    /// The action was applied, possibly in part
    Info,
}

/// Advisory produced by selection and comparison operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionNotice {
    /// A selection was refused because the cap is reached
    CapacityExceeded { max: usize },
    /// Comparison was requested with too few plans selected
    InsufficientSelection { selected: usize, required: usize },
    /// Select-all picked only the first `max` of `visible` plans
    Truncated { max: usize, visible: usize },
    /// Comparison was requested while it is switched off
    ComparisonDisabled,
}

impl SelectionNotice {
    pub(crate) fn insufficient(selected: usize) -> Self {
        Self::InsufficientSelection {
            selected,
            required: MIN_COMPARABLE,
        }
    }

    pub fn severity(&self) -> NoticeSeverity {
        match self {
            SelectionNotice::Truncated { .. } => NoticeSeverity::Info,
            SelectionNotice::CapacityExceeded { .. }
            | SelectionNotice::InsufficientSelection { .. }
            | SelectionNotice::ComparisonDisabled => NoticeSeverity::Warning,
        }
    }
}

/// Ordered set of selected plan ids.
///
/// Ids are kept in the order they were selected; comparison columns follow
/// that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    selected: Vec<String>,
    max_selectable: usize,
    enable_comparison: bool,
    notice: Option<SelectionNotice>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

impl Selection {
    /// Creates an empty selection governed by `config`.
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            selected: Vec::new(),
            max_selectable: config.max_selectable,
            enable_comparison: config.enable_comparison,
            notice: None,
        }
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn max_selectable(&self) -> usize {
        self.max_selectable
    }

    pub fn comparison_enabled(&self) -> bool {
        self.enable_comparison
    }

    /// Whether another plan could be added right now.
    pub fn is_at_capacity(&self) -> bool {
        self.enable_comparison && self.selected.len() >= self.max_selectable
    }

    /// The advisory left by the last operation, if any.
    pub fn notice(&self) -> Option<&SelectionNotice> {
        self.notice.as_ref()
    }

    /// Flips membership of `id`. Returns whether `id` is selected afterwards.
    ///
    /// Adding beyond the cap is refused with
    /// [`SelectionNotice::CapacityExceeded`].
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(index) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(index);
            self.notice = None;
            return false;
        }

        if self.is_at_capacity() {
            debug!("Refusing to select {id}: {} already selected", self.selected.len());
            self.notice = Some(SelectionNotice::CapacityExceeded {
                max: self.max_selectable,
            });
            return false;
        }

        self.selected.push(id.to_string());
        self.notice = None;
        true
    }

    /// Toggle-all over the visible ids.
    ///
    /// With comparison enabled and more visible plans than the cap, only the
    /// first `max_selectable` visible ids are selected and a
    /// [`SelectionNotice::Truncated`] notice is left. Otherwise, when every
    /// visible id is already selected the selection is cleared, and if not it
    /// becomes exactly the visible ids.
    pub fn select_all<S: AsRef<str>>(&mut self, visible_ids: &[S]) {
        if self.enable_comparison && visible_ids.len() > self.max_selectable {
            self.selected = visible_ids
                .iter()
                .take(self.max_selectable)
                .map(|id| id.as_ref().to_string())
                .collect();
            self.notice = Some(SelectionNotice::Truncated {
                max: self.max_selectable,
                visible: visible_ids.len(),
            });
            return;
        }

        let all_selected = visible_ids.iter().all(|id| self.contains(id.as_ref()));
        if all_selected {
            self.clear();
        } else {
            self.selected = visible_ids
                .iter()
                .map(|id| id.as_ref().to_string())
                .collect();
            self.notice = None;
        }
    }

    /// Empties the selection and clears any notice.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.notice = None;
    }

    /// Returns the ids to compare, in selection order.
    ///
    /// Fewer than two selected plans leave
    /// [`SelectionNotice::InsufficientSelection`] and return `None`.
    pub fn request_comparison(&mut self) -> Option<Vec<String>> {
        if !self.enable_comparison {
            self.notice = Some(SelectionNotice::ComparisonDisabled);
            return None;
        }
        if self.selected.len() < MIN_COMPARABLE {
            self.notice = Some(SelectionNotice::insufficient(self.selected.len()));
            return None;
        }
        self.notice = None;
        Some(self.selected.clone())
    }

    /// Drops ids that no longer exist in the store.
    ///
    /// Returns the number of ids removed. Running it twice with the same
    /// known ids removes nothing the second time.
    pub fn retain_known<'a, I>(&mut self, known_ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let known: HashSet<&str> = known_ids.into_iter().collect();
        let before = self.selected.len();
        self.selected.retain(|id| known.contains(id.as_str()));
        let removed = before - self.selected.len();
        if removed > 0 {
            debug!("Pruned {removed} stale ids from selection");
        }
        removed
    }
}
