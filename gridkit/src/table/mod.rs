//! Table engine - sort order, row identity and selection over in-memory rows.
//!
//! The engine is a set of pure functions. A [`Table`] borrows the host's data
//! and columns for one update and turns `(state, event)` into the next state
//! or `state` into a [`TableView`]. The host keeps the [`TableState`] between
//! updates.
//!
//! # Example
//!
//! ```
//! use gridkit::table::{Column, Table, TableEvent, TableState};
//! use serde_json::{Value, json};
//!
//! let data = vec![json!({"id": 1, "name": "b"}), json!({"id": 2, "name": "a"})];
//! let columns = vec![Column::<Value>::new("name", "Name").sortable()];
//! let table = Table::new(&data, &columns);
//!
//! let state = TableState::new();
//! let state = table.dispatch(&state, &TableEvent::HeaderActivated("name".into()), |_| {});
//! let view = table.project(&state);
//! assert_eq!(view.rows[0].cells, vec!["a".to_string()]);
//! ```

mod column;
mod config;
mod events;
mod key;
mod render;
mod selection;
mod sort;
mod state;

pub use column::{CellRenderer, Column, ColumnWidth, find_column};
pub use config::{DEFAULT_EMPTY_TEXT, TableConfig};
pub use events::TableEvent;
pub use key::{DEFAULT_KEY_FIELD, KeyFn, KeySelector, RowKey, resolve};
pub use render::{HeaderCell, TableView, ViewRow};
pub use selection::{
    HeaderCheck, SelectionMode, SelectionSet, SelectionSummary, is_selected, toggle_all,
    toggle_row,
};
pub use sort::{SortDirection, SortState, activate_header, compare_for_sort, compute_view};
pub use state::TableState;

use crate::record::Record;

/// The inputs of one table update: rows, columns, display options and the
/// row key selector.
#[derive(Debug, Clone)]
pub struct Table<'a, R> {
    data: &'a [R],
    columns: &'a [Column<R>],
    config: TableConfig,
    row_key: KeySelector<R>,
}

impl<'a, R: Record> Table<'a, R> {
    pub fn new(data: &'a [R], columns: &'a [Column<R>]) -> Self {
        Self {
            data,
            columns,
            config: TableConfig::default(),
            row_key: KeySelector::default(),
        }
    }

    /// Set the display configuration.
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Set how row keys are derived.
    pub fn row_key(mut self, selector: KeySelector<R>) -> Self {
        self.row_key = selector;
        self
    }

    pub fn key_selector(&self) -> &KeySelector<R> {
        &self.row_key
    }

    /// The rows in display order under `state`.
    pub fn view(&self, state: &TableState<R>) -> Vec<R> {
        state.view(self.data)
    }
}
