use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDraft;

#[derive(Debug)]
pub enum CatalogError {
    // Caller-correctable: per-field messages plus the raw input echoed back
    // so a form can be re-rendered pre-filled with the attempted values.
    Validation {
        errors: HashMap<String, String>,
        values: BookDraft,
    },
    NotFound {
        message: String,
    },
    // Persisted data exists but cannot be read or parsed into the catalog.
    Corruption {
        message: String,
    },
    // The storage medium refused the write (permissions, disk full).
    WriteFailure {
        message: String,
    },
}

impl CatalogError {
    pub fn validation(errors: HashMap<String, String>, values: &BookDraft) -> CatalogError {
        CatalogError::Validation { errors, values: values.clone() }
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn corruption(message: &str) -> CatalogError {
        CatalogError::Corruption { message: message.to_string() }
    }

    pub fn write_failure(message: &str) -> CatalogError {
        CatalogError::WriteFailure { message: message.to_string() }
    }

    pub fn recoverable(&self) -> bool {
        match self {
            CatalogError::Validation { .. } => { true }
            CatalogError::NotFound { .. } => { true }
            CatalogError::Corruption { .. } => { false }
            CatalogError::WriteFailure { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::corruption(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Validation { errors, .. } => {
                write!(f, "validation failed {:?}", errors)
            }
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Corruption { message } => {
                write!(f, "{}", message)
            }
            CatalogError::WriteFailure { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// Listing order requested by the caller; Unsorted preserves catalog order.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum SortKey {
    Unsorted,
    Pages,
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pages" => SortKey::Pages,
            _ => SortKey::Unsorted,
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SortKey::Unsorted => write!(f, "unsorted"),
            SortKey::Pages => write!(f, "pages"),
        }
    }
}
