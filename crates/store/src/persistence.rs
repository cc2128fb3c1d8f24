//! Template persistence over a key/value store
//!
//! Two slots are kept: the template under edit and the saved-template
//! library. Reads never fail on bad data: a missing or unparseable slot
//! yields the default value and a warning.

use crate::serializer::{
    deserialize_library_lenient, deserialize_or_else, serialize, serialize_library,
};
use crate::{KeyValueStore, Result, StorageSettings};
use doc_model::{Clock, Template};
use edit_engine::{EditorState, TemplateLibrary};
use std::sync::Arc;

/// Reads and writes editor state through a [`KeyValueStore`]
#[derive(Clone)]
pub struct TemplatePersistence {
    store: Arc<dyn KeyValueStore>,
    keys: StorageSettings,
}

impl TemplatePersistence {
    /// Persist through `store` using the default slot names
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_keys(store, StorageSettings::default())
    }

    pub fn with_keys(store: Arc<dyn KeyValueStore>, keys: StorageSettings) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &StorageSettings {
        &self.keys
    }

    /// The stored current template, if the slot holds a parseable one
    pub fn load_current_template(&self) -> Result<Option<Template>> {
        let Some(json) = self.store.get(&self.keys.current_template_key)? else {
            return Ok(None);
        };
        Ok(deserialize_or_else(&json, &self.keys.current_template_key, || None))
    }

    /// The stored library, minus any entries that no longer decode
    pub fn load_library(&self) -> Result<TemplateLibrary> {
        let Some(json) = self.store.get(&self.keys.templates_key)? else {
            return Ok(TemplateLibrary::new());
        };
        Ok(deserialize_library_lenient(&json, &self.keys.templates_key))
    }

    /// Rebuild editor state from both slots.
    ///
    /// A missing current template becomes a fresh untitled one stamped with
    /// `clock`. Selection is never persisted.
    pub fn load_state(&self, clock: &dyn Clock) -> Result<EditorState> {
        let current = self
            .load_current_template()?
            .unwrap_or_else(|| Template::new(clock.now()));
        let library = self.load_library()?;

        tracing::debug!(
            template_id = %current.id(),
            saved = library.len(),
            "restored editor state"
        );

        Ok(EditorState::from_parts(current, library, None))
    }

    /// Write the template under edit
    pub fn save_current(&self, template: &Template) -> Result<()> {
        self.store
            .set(&self.keys.current_template_key, &serialize(template))
    }

    /// Write only the saved-template library
    pub fn save_library(&self, library: &TemplateLibrary) -> Result<()> {
        self.store
            .set(&self.keys.templates_key, &serialize_library(library)?)
    }

    /// Write both slots
    pub fn persist(&self, state: &EditorState) -> Result<()> {
        self.save_current(state.current_template())?;
        self.save_library(state.templates())
    }

    /// Drop both slots
    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.keys.current_template_key)?;
        self.store.remove(&self.keys.templates_key)
    }
}

impl std::fmt::Debug for TemplatePersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplatePersistence")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}
