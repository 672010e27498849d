//! Headless engines for a labeled text field and a sortable, selectable table.
//!
//! Nothing in this crate draws. The host owns all state, feeds it back in on
//! every update, and renders whatever projection the engines hand back.

pub mod error;
pub mod field;
pub mod record;
pub mod table;
pub mod types;
pub mod validation;

pub use error::{LoadError, ParseError};
pub use record::{FieldValue, Record, records_from_json};

pub mod prelude {
    pub use crate::error::{LoadError, ParseError};
    pub use crate::field::{
        Affordance, Affordances, DisplayMode, EventResult, FieldEvent, FieldProjection,
        FieldProps, FieldResponse, FieldState, InputType,
    };
    pub use crate::record::{FieldValue, Record, records_from_json};
    pub use crate::table::{
        Column, ColumnWidth, HeaderCheck, KeySelector, RowKey, SelectionMode, SelectionSet,
        SelectionSummary, SortDirection, SortState, Table, TableConfig, TableEvent, TableState,
        TableView,
    };
    pub use crate::types::{Size, Variant};
    pub use crate::validation::{ValidationError, validate_email};
}
