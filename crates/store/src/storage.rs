//! Key/value storage abstraction
//!
//! The editor persists a handful of named string slots. Backends only need
//! to get, set and remove whole values; they know nothing about templates.

use crate::Result;

/// Trait for slot storage backends
///
/// Methods take `&self`; implementations use interior locking so a store
/// can be shared behind an `Arc` by the autosave task and the editor.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Whether a value is stored under `key`
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}
