//! Single-column sorting.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::record::{FieldValue, Record};

use super::column::Column;

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header glyph for the direction.
    pub fn indicator(self) -> Option<char> {
        match self {
            SortDirection::None => None,
            SortDirection::Ascending => Some('▲'),
            SortDirection::Descending => Some('▼'),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::None => "none",
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        })
    }
}

impl FromStr for SortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(SortDirection::None),
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ParseError::UnknownDirection(s.to_string())),
        }
    }
}

/// The active sort column and direction, or none.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// No active sort.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: SortDirection::Descending,
        }
    }

    /// Whether both a column and a direction are set.
    pub fn is_active(&self) -> bool {
        self.column.is_some() && self.direction != SortDirection::None
    }

    /// Direction shown on the header of `key`.
    pub fn direction_for(&self, key: &str) -> SortDirection {
        match &self.column {
            Some(column) if column == key => self.direction,
            _ => SortDirection::None,
        }
    }
}

/// Next sort state after the header of `column` is activated.
///
/// Non-sortable columns leave the state unchanged. A column that is not the
/// active one starts ascending; the active column cycles
/// ascending → descending → none.
pub fn activate_header<R: Record>(column: &Column<R>, state: &SortState) -> SortState {
    if !column.sortable {
        return state.clone();
    }

    match state.direction_for(&column.key) {
        SortDirection::None => SortState::ascending(column.key.clone()),
        SortDirection::Ascending => SortState::descending(column.key.clone()),
        SortDirection::Descending => SortState::none(),
    }
}

/// Ordering of two field values under `direction`. Nulls go last either way.
pub fn compare_for_sort(a: &FieldValue, b: &FieldValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.compare(b);
            if direction == SortDirection::Descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
    }
}

/// The rows of `data` in display order. The input is never reordered.
///
/// Without an active sort this is the input order. Otherwise rows are
/// stably sorted by the sort column's field; absent fields sort as null.
pub fn compute_view<R: Record>(data: &[R], state: &SortState) -> Vec<R> {
    let column = match (&state.column, state.direction) {
        (Some(column), SortDirection::Ascending | SortDirection::Descending) => column,
        _ => return data.to_vec(),
    };

    let mut keyed: Vec<(FieldValue, &R)> = data
        .iter()
        .map(|record| (record.field(column).unwrap_or_default(), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_for_sort(a, b, state.direction));

    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn ids(rows: &[Value]) -> Vec<Value> {
        rows.iter().map(|r| r["id"].clone()).collect()
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Ascending));
        assert_eq!("Descending".parse::<SortDirection>(), Ok(SortDirection::Descending));
        assert_eq!("".parse::<SortDirection>(), Ok(SortDirection::None));
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_inactive_sort_passes_through() {
        let data = vec![json!({"id": 3}), json!({"id": 1}), json!({"id": 2})];
        let half = SortState {
            column: Some("id".into()),
            direction: SortDirection::None,
        };
        assert_eq!(compute_view(&data, &half), data);
        let no_column = SortState {
            column: None,
            direction: SortDirection::Ascending,
        };
        assert_eq!(compute_view(&data, &no_column), data);
    }

    #[test]
    fn test_sort_is_stable() {
        let data = vec![
            json!({"id": 1, "g": "b"}),
            json!({"id": 2, "g": "a"}),
            json!({"id": 3, "g": "b"}),
            json!({"id": 4, "g": "a"}),
        ];
        let view = compute_view(&data, &SortState::ascending("g"));
        assert_eq!(ids(&view), vec![json!(2), json!(4), json!(1), json!(3)]);
        let view = compute_view(&data, &SortState::descending("g"));
        assert_eq!(ids(&view), vec![json!(1), json!(3), json!(2), json!(4)]);
    }

    #[test]
    fn test_nulls_sort_last_both_ways() {
        let data = vec![
            json!({"id": 1}),
            json!({"id": 2, "v": 5}),
            json!({"id": 3, "v": null}),
            json!({"id": 4, "v": 1}),
        ];
        let view = compute_view(&data, &SortState::ascending("v"));
        assert_eq!(ids(&view), vec![json!(4), json!(2), json!(1), json!(3)]);
        let view = compute_view(&data, &SortState::descending("v"));
        assert_eq!(ids(&view), vec![json!(2), json!(4), json!(1), json!(3)]);
    }

    #[test]
    fn test_compute_view_leaves_input_alone() {
        let data = vec![json!({"id": 2}), json!({"id": 1})];
        let before = data.clone();
        let _ = compute_view(&data, &SortState::ascending("id"));
        assert_eq!(data, before);
    }
}
