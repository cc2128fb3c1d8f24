//! Providers - Email delivery adapters
//!
//! A provider adapter delivers rendered HTML through some transport. The
//! registry is an ordinary value owned by the caller: adapters are looked
//! up by name and one of them may be marked active.

mod error;
mod types;
mod adapter;
mod registry;
mod outbox;

pub use error::*;
pub use types::*;
pub use adapter::*;
pub use registry::*;
pub use outbox::*;
