//! Error types for editing operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("Reorder out of range: source {source_index}, destination {destination_index}, length {len}")]
    IndexOutOfRange {
        source_index: usize,
        destination_index: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, EditError>;
