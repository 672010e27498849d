//! Projection of table state into a renderable view.

use crate::record::Record;
use crate::types::Size;

use super::Table;
use super::column::ColumnWidth;
use super::key::RowKey;
use super::selection::HeaderCheck;
use super::sort::SortDirection;
use super::state::TableState;

/// A header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub width: ColumnWidth,
    pub sortable: bool,
    /// Whether activating the header does anything right now.
    pub interactive: bool,
    /// Direction indicator, `None` unless this is the sort column.
    pub direction: SortDirection,
}

/// A body row in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    pub key: RowKey,
    /// Position in the view.
    pub index: usize,
    /// One text per column, in column order.
    pub cells: Vec<String>,
    pub selected: bool,
    /// Odd rows of a striped table.
    pub striped: bool,
}

/// Everything a renderer needs for one frame of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<ViewRow>,
    pub header_check: HeaderCheck,
    /// Whether checkboxes are shown and respond to input.
    pub selectable: bool,
    pub loading: bool,
    pub size: Size,
    pub bordered: bool,
    /// Set when there are no rows to show.
    pub placeholder: Option<String>,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.rows.iter().filter(|row| row.selected).count()
    }
}

impl<R: Record> Table<'_, R> {
    /// Project `state` into a view.
    pub fn project(&self, state: &TableState<R>) -> TableView {
        let view = state.view(self.data);
        let interactive = self.config.is_interactive();

        let headers = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                title: column.title.clone(),
                width: column.width,
                sortable: column.sortable,
                interactive: column.sortable && interactive,
                direction: state.sort.direction_for(&column.key),
            })
            .collect();

        let rows = view
            .iter()
            .enumerate()
            .map(|(index, record)| ViewRow {
                key: self.row_key.resolve(record, index),
                index,
                cells: self
                    .columns
                    .iter()
                    .map(|column| column.cell_text(record, index))
                    .collect(),
                selected: state.selection.contains(record, &self.row_key),
                striped: self.config.striped && index % 2 == 1,
            })
            .collect::<Vec<_>>();

        let placeholder = rows
            .is_empty()
            .then(|| self.config.empty_text.clone());

        TableView {
            headers,
            header_check: state.summary(&view).header_check(),
            rows,
            selectable: self.config.is_selectable(),
            loading: self.config.loading,
            size: self.config.size,
            bordered: self.config.bordered,
            placeholder,
        }
    }
}
