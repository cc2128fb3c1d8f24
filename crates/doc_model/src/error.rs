//! Error types for document model operations

use crate::{ElementId, ElementKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocModelError {
    #[error("Duplicate element id: {0}")]
    DuplicateElementId(ElementId),

    #[error("Cannot replace {expected} content with {actual} content")]
    KindMismatch {
        expected: ElementKind,
        actual: ElementKind,
    },

    #[error("Invalid content for element {element_id}: {reason}")]
    InvalidContent { element_id: ElementId, reason: String },

    #[error("Unknown element kind: {0}")]
    UnknownKind(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

pub type Result<T> = std::result::Result<T, DocModelError>;
