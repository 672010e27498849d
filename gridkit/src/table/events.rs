//! Event handling for the table.

use log::{debug, trace};

use crate::record::Record;

use super::Table;
use super::column::find_column;
use super::selection::{SelectionMode, SelectionSet, toggle_all, toggle_row};
use super::sort::activate_header;
use super::state::TableState;

/// User interaction with the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A column header was activated.
    HeaderActivated(String),
    /// A row checkbox changed. `index` is the row's position in the current view.
    RowToggled { index: usize, checked: bool },
    /// The header checkbox changed.
    AllToggled(bool),
}

impl<R: Record> Table<'_, R> {
    /// Apply `event` to `state` and return the next state.
    ///
    /// `on_selection_change` receives the full selection whenever its
    /// membership changed. It never fires for sort changes.
    pub fn dispatch<F>(
        &self,
        state: &TableState<R>,
        event: &TableEvent,
        mut on_selection_change: F,
    ) -> TableState<R>
    where
        F: FnMut(&[R]),
    {
        if !self.config.is_interactive() {
            trace!("[table] ignoring {:?} while loading", event);
            return state.clone();
        }

        match event {
            TableEvent::HeaderActivated(key) => {
                let Some(column) = find_column(self.columns, key) else {
                    trace!("[table] header event for unknown column '{}'", key);
                    return state.clone();
                };
                let sort = activate_header(column, &state.sort);
                if sort != state.sort {
                    debug!(
                        "[table] sort {:?}/{} -> {:?}/{}",
                        state.sort.column, state.sort.direction, sort.column, sort.direction
                    );
                }
                TableState {
                    sort,
                    selection: state.selection.clone(),
                }
            }
            TableEvent::RowToggled { index, checked } => {
                if self.config.selection_mode == SelectionMode::None {
                    trace!("[table] row toggle ignored, selection disabled");
                    return state.clone();
                }
                let view = state.view(self.data);
                let Some(record) = view.get(*index) else {
                    trace!("[table] row toggle out of range: {} >= {}", index, view.len());
                    return state.clone();
                };
                let selection = match self.config.selection_mode {
                    SelectionMode::Single if *checked => {
                        SelectionSet::from_rows(vec![record.clone()])
                    }
                    _ => toggle_row(record, *checked, &state.selection, &self.row_key),
                };
                self.commit(state, selection, &mut on_selection_change)
            }
            TableEvent::AllToggled(checked) => {
                match self.config.selection_mode {
                    SelectionMode::None => {
                        trace!("[table] select-all ignored, selection disabled");
                        return state.clone();
                    }
                    SelectionMode::Single if *checked => {
                        trace!("[table] select-all ignored in single mode");
                        return state.clone();
                    }
                    _ => {}
                }
                let view = state.view(self.data);
                self.commit(state, toggle_all(*checked, &view), &mut on_selection_change)
            }
        }
    }

    fn commit<F>(
        &self,
        state: &TableState<R>,
        selection: SelectionSet<R>,
        on_selection_change: &mut F,
    ) -> TableState<R>
    where
        F: FnMut(&[R]),
    {
        if !selection.same_members(&state.selection, &self.row_key) {
            debug!(
                "[table] selection {} -> {} rows",
                state.selection.len(),
                selection.len()
            );
            on_selection_change(selection.rows());
        }
        TableState {
            sort: state.sort.clone(),
            selection,
        }
    }
}
