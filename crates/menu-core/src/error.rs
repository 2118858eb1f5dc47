use crate::surface::Level;
use thiserror::Error;

/// Failure to turn a raw payload into menu records.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu payload is not a JSON array of records: {0}")]
    Json(#[from] serde_json::Error),
}

/// A selection that does not fit the current navigation state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("cannot select heading {0:?} before a group is selected")]
    NoGroupSelected(String),

    #[error("cannot select subheading {0:?} before a heading is selected")]
    NoHeadingSelected(String),

    #[error("no {level} labelled {label:?} under the current selection")]
    UnknownLabel { level: Level, label: String },
}
