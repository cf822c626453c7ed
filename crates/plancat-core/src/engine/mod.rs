//! The catalog engine: filter, sort, select and compare.
//!
//! Every stage is a pure computation over an in-memory plan snapshot. No
//! stage performs I/O, and the snapshot is never mutated.
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌───────────┐   ┌────────────┐
//! │ Snapshot │──▶│  Filter  │──▶│   Sort   │──▶│ Selection │──▶│ Comparison │
//! │ (&[Plan])│   │ (query)  │   │(strategy)│   │  (bounded)│   │  (matrix)  │
//! └──────────┘   └──────────┘   └──────────┘   └───────────┘   └────────────┘
//! ```
//!
//! [`CatalogViewState`] threads user events through the stages. Callers that
//! only need one stage can use the free functions directly.
//!
//! # Examples
//!
//! ```rust
//! use plancat_core::{
//!     engine::{CatalogViewState, ViewEvent},
//!     models::SortStrategy,
//! };
//!
//! let plans = Vec::new();
//! let mut state = CatalogViewState::default();
//! state.apply(ViewEvent::SetSort(SortStrategy::Price), &plans);
//! state.apply(ViewEvent::Compare, &plans);
//!
//! assert!(state.comparison().is_none());
//! assert!(state.notice().is_some());
//! ```

pub mod compare;
pub mod filter;
pub mod selection;
pub mod sort;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use compare::{
    ComparisonColumn, ComparisonMatrix, ComparisonRow, RowKind, ScalarField, ScalarValue,
};
pub use filter::filter_plans;
pub use selection::{NoticeSeverity, Selection, SelectionNotice};
pub use sort::{compare_names, sort_plans};
pub use view::{CatalogViewState, ViewEvent};
