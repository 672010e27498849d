//! Table display configuration.

use serde::{Deserialize, Serialize};

use crate::types::Size;

use super::selection::SelectionMode;

/// Placeholder shown when the table has no rows.
pub const DEFAULT_EMPTY_TEXT: &str = "No data available";

/// Display options supplied by the host on every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub size: Size,
    /// Alternate row shading.
    pub striped: bool,
    pub bordered: bool,
    /// Placeholder shown when the view is empty.
    pub empty_text: String,
    /// While loading, headers and checkboxes are not interactive.
    pub loading: bool,
    pub selection_mode: SelectionMode,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            size: Size::default(),
            striped: false,
            bordered: false,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            loading: false,
            selection_mode: SelectionMode::default(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Whether header activation and checkboxes respond to input.
    pub fn is_interactive(&self) -> bool {
        !self.loading
    }

    /// Whether rows carry checkboxes that respond to input.
    pub fn is_selectable(&self) -> bool {
        self.is_interactive() && self.selection_mode != SelectionMode::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: TableConfig =
            serde_json::from_str(r#"{"striped": true, "selection_mode": "single"}"#).unwrap();
        assert!(config.striped);
        assert_eq!(config.selection_mode, SelectionMode::Single);
        assert_eq!(config.empty_text, DEFAULT_EMPTY_TEXT);
        assert_eq!(config.size, Size::Medium);
    }

    #[test]
    fn test_loading_disables_selection() {
        let config = TableConfig::new().loading(true);
        assert!(!config.is_interactive());
        assert!(!config.is_selectable());
        assert!(!TableConfig::new().selection_mode(SelectionMode::None).is_selectable());
    }
}
