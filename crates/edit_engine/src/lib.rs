//! Edit Engine - Template document store
//!
//! This crate implements the command-based editing system for email
//! templates: atomic state transitions over the current template, the
//! element selection, and the library of saved templates.

mod command;
mod state;
mod library;
mod executor;
mod error;

pub use command::*;
pub use state::*;
pub use library::*;
pub use executor::*;
pub use error::*;
