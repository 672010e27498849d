//! Error types for the edges of the crate.
//!
//! The engines themselves never fail; these cover parsing host-supplied
//! names and loading records.

use thiserror::Error;

/// A host-supplied name did not match any known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown input type '{0}'")]
    UnknownInputType(String),
    #[error("unknown variant '{0}'")]
    UnknownVariant(String),
    #[error("unknown size '{0}'")]
    UnknownSize(String),
    #[error("unknown sort direction '{0}'")]
    UnknownDirection(String),
    #[error("unknown selection mode '{0}'")]
    UnknownSelectionMode(String),
}

/// Errors that can occur when loading records from JSON.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array of records, found {0}")]
    NotAnArray(&'static str),
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },
}
