//! Selection set for the table.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::record::Record;

use super::key::{KeySelector, RowKey};

/// Selection mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// No selection allowed.
    None,
    /// Single row selection (radio-button style).
    Single,
    /// Multiple rows can be selected (checkbox style).
    #[default]
    Multi,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SelectionMode::None => "none",
            SelectionMode::Single => "single",
            SelectionMode::Multi => "multi",
        })
    }
}

impl FromStr for SelectionMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(SelectionMode::None),
            "single" => Ok(SelectionMode::Single),
            "multi" | "multiple" => Ok(SelectionMode::Multi),
            _ => Err(ParseError::UnknownSelectionMode(s.to_string())),
        }
    }
}

/// The records currently selected, in the order they were selected.
///
/// Membership is by row key, so re-sorting the table never changes what is
/// selected. Keys are resolved without a position, which means a
/// [`KeySelector::Field`] whose field is missing on some rows makes those
/// rows indistinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSet<R> {
    rows: Vec<R>,
}

impl<R> Default for SelectionSet<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: Record> SelectionSet<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap rows as-is; duplicates are kept.
    pub fn from_rows(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.iter()
    }

    /// Check if a record is selected.
    pub fn contains(&self, record: &R, selector: &KeySelector<R>) -> bool {
        let key = selector.membership_key(record);
        self.rows
            .iter()
            .any(|row| selector.membership_key(row) == key)
    }

    /// Keys of every selected record.
    pub fn keys(&self, selector: &KeySelector<R>) -> HashSet<RowKey> {
        self.rows
            .iter()
            .map(|row| selector.membership_key(row))
            .collect()
    }

    /// Whether both sets select the same keys, ignoring order.
    pub fn same_members(&self, other: &Self, selector: &KeySelector<R>) -> bool {
        self.len() == other.len() && self.keys(selector) == other.keys(selector)
    }

    /// Set with `record` added (`checked`) or every row sharing its key removed.
    ///
    /// Adding a record that is already selected returns the set unchanged.
    pub fn with_row(&self, record: &R, checked: bool, selector: &KeySelector<R>) -> Self {
        let key = selector.membership_key(record);
        if checked {
            let mut rows = self.rows.clone();
            if !self.contains(record, selector) {
                rows.push(record.clone());
            }
            Self { rows }
        } else {
            Self {
                rows: self
                    .rows
                    .iter()
                    .filter(|row| selector.membership_key(row) != key)
                    .cloned()
                    .collect(),
            }
        }
    }
}

/// Next selection after a row checkbox changes.
pub fn toggle_row<R: Record>(
    record: &R,
    checked: bool,
    selection: &SelectionSet<R>,
    selector: &KeySelector<R>,
) -> SelectionSet<R> {
    selection.with_row(record, checked, selector)
}

/// Next selection after the header checkbox changes: all of `view`, or nothing.
pub fn toggle_all<R: Record>(checked: bool, view: &[R]) -> SelectionSet<R> {
    if checked {
        SelectionSet::from_rows(view.to_vec())
    } else {
        SelectionSet::new()
    }
}

/// Check if a record is selected.
pub fn is_selected<R: Record>(
    record: &R,
    selection: &SelectionSet<R>,
    selector: &KeySelector<R>,
) -> bool {
    selection.contains(record, selector)
}

/// Visual state of the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Aggregate flags derived from view and selection sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub all_selected: bool,
    pub indeterminate: bool,
}

impl SelectionSummary {
    pub fn new(view_len: usize, selected_len: usize) -> Self {
        Self {
            all_selected: view_len > 0 && selected_len == view_len,
            indeterminate: selected_len > 0 && selected_len < view_len,
        }
    }

    pub fn header_check(&self) -> HeaderCheck {
        if self.all_selected {
            HeaderCheck::Checked
        } else if self.indeterminate {
            HeaderCheck::Indeterminate
        } else {
            HeaderCheck::Unchecked
        }
    }
}
