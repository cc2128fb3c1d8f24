//! Store - Persistence, autosave, and settings
//!
//! This crate keeps the editor's templates in a key/value backend, restores
//! them with parse-or-default semantics, debounces autosaves, and loads the
//! editor settings file.

mod error;
mod serializer;
mod storage;
mod memory_store;
mod file_store;
mod persistence;
mod autosave;
mod settings;

pub use error::*;
pub use serializer::*;
pub use storage::*;
pub use memory_store::*;
pub use file_store::*;
pub use persistence::*;
pub use autosave::*;
pub use settings::*;
