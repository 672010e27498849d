//! Table state owned by the host between updates.

use crate::record::Record;

use super::key::KeySelector;
use super::selection::{SelectionSet, SelectionSummary};
use super::sort::{SortState, compute_view};

/// Sort and selection state for a table.
///
/// The engine never holds on to this; the host stores each returned value
/// and passes it back in with the next event.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState<R> {
    pub sort: SortState,
    pub selection: SelectionSet<R>,
}

impl<R> Default for TableState<R> {
    fn default() -> Self {
        Self {
            sort: SortState::none(),
            selection: SelectionSet::default(),
        }
    }
}

impl<R: Record> TableState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_selection(mut self, selection: SelectionSet<R>) -> Self {
        self.selection = selection;
        self
    }

    /// The rows of `data` in display order.
    pub fn view(&self, data: &[R]) -> Vec<R> {
        compute_view(data, &self.sort)
    }

    /// Aggregate selection flags against `view`.
    pub fn summary(&self, view: &[R]) -> SelectionSummary {
        SelectionSummary::new(view.len(), self.selection.len())
    }

    /// Check if a record is selected.
    pub fn is_selected(&self, record: &R, selector: &KeySelector<R>) -> bool {
        self.selection.contains(record, selector)
    }
}
