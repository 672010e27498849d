//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, Record};

/// Column width specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnWidth {
    /// Fixed width in characters.
    Fixed(u16),
    /// Flexible width with weight.
    Flex(u16),
    /// Size to content.
    Auto,
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

/// Custom cell formatter, called with `(value, record, index)`.
pub type CellRenderer<R> = Arc<dyn Fn(&FieldValue, &R, usize) -> String + Send + Sync>;

/// A table column definition.
#[derive(Clone)]
pub struct Column<R> {
    /// Field read from each record. Also the sort key.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Whether activating the header changes the sort.
    pub sortable: bool,
    /// Cell formatter; string coercion of the field when absent.
    pub render: Option<CellRenderer<R>>,
    /// Width specification.
    pub width: ColumnWidth,
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("render", &self.render.as_ref().map(|_| ".."))
            .field("width", &self.width)
            .finish()
    }
}

impl<R: Record> Column<R> {
    /// Create a new, non-sortable column with the given key and title.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            render: None,
            width: ColumnWidth::default(),
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Use a custom cell formatter.
    pub fn render(mut self, f: impl Fn(&FieldValue, &R, usize) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(f));
        self
    }

    /// Set a fixed width for this column.
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set a flex width for this column.
    pub fn flex(mut self, weight: u16) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }

    /// Set auto width for this column.
    pub fn auto(mut self) -> Self {
        self.width = ColumnWidth::Auto;
        self
    }

    /// Text for this column's cell in `record`, displayed at `index`.
    pub fn cell_text(&self, record: &R, index: usize) -> String {
        let value = record.field(&self.key).unwrap_or_default();
        match &self.render {
            Some(render) => render(&value, record, index),
            None => value.to_string(),
        }
    }
}

/// Find a column by key.
pub fn find_column<'a, R>(columns: &'a [Column<R>], key: &str) -> Option<&'a Column<R>> {
    columns.iter().find(|column| column.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_cell_text_coerces_field() {
        let column = Column::<Value>::new("age", "Age");
        assert_eq!(column.cell_text(&json!({"age": 31}), 0), "31");
        assert_eq!(column.cell_text(&json!({"age": null}), 0), "");
        assert_eq!(column.cell_text(&json!({}), 0), "");
    }

    #[test]
    fn test_cell_text_uses_renderer() {
        let column = Column::<Value>::new("name", "Name")
            .render(|value, _, index| format!("{}. {}", index + 1, value));
        assert_eq!(column.cell_text(&json!({"name": "ada"}), 2), "3. ada");
    }

    #[test]
    fn test_builder_defaults() {
        let column = Column::<Value>::new("id", "ID");
        assert!(!column.sortable);
        assert_eq!(column.width, ColumnWidth::Flex(1));
        let column = column.sortable().fixed(6);
        assert!(column.sortable);
        assert_eq!(column.width, ColumnWidth::Fixed(6));
    }

    #[test]
    fn test_find_column() {
        let columns = vec![Column::<Value>::new("a", "A"), Column::new("b", "B")];
        assert_eq!(find_column(&columns, "b").map(|c| c.title.as_str()), Some("B"));
        assert!(find_column(&columns, "c").is_none());
    }
}
