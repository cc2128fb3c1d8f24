//! Provider registry
//!
//! Adapters are keyed by lowercased name. At most one adapter is active;
//! removing it clears the selection.

use crate::{EmailProviderAdapter, ProviderConfig, ProviderError, Result};
use indexmap::IndexMap;

/// Registered adapters plus the active selection
#[derive(Default)]
pub struct ProviderRegistry {
    providers: IndexMap<String, Box<dyn EmailProviderAdapter>>,
    active: Option<String>,
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

#[allow(clippy::borrowed_box)]
fn as_adapter(provider: &Box<dyn EmailProviderAdapter>) -> &dyn EmailProviderAdapter {
    provider.as_ref()
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter, replacing any adapter with the same name
    pub fn register(&mut self, provider: Box<dyn EmailProviderAdapter>) {
        let name = key(provider.name());
        tracing::debug!(provider = %name, "registered email provider");
        self.providers.insert(name, provider);
    }

    /// Look up an adapter by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&dyn EmailProviderAdapter> {
        self.providers.get(&key(name)).map(as_adapter)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Box<dyn EmailProviderAdapter>> {
        self.providers.get_mut(&key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(&key(name))
    }

    /// Registered adapters in registration order
    pub fn providers(&self) -> impl Iterator<Item = &dyn EmailProviderAdapter> {
        self.providers.values().map(as_adapter)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Make the named adapter active, initializing it with `config` first
    /// when one is given.
    ///
    /// The selection is unchanged if the adapter is unknown or rejects the
    /// config.
    pub fn set_active(&mut self, name: &str, config: Option<ProviderConfig>) -> Result<()> {
        let name = key(name);
        let provider = self
            .providers
            .get_mut(&name)
            .ok_or_else(|| ProviderError::NotFound(name.clone()))?;

        if let Some(config) = config {
            provider.initialize(config)?;
        }

        tracing::info!(provider = %name, "activated email provider");
        self.active = Some(name);
        Ok(())
    }

    /// Register `provider` and make it active in one step
    pub fn register_active(
        &mut self,
        provider: Box<dyn EmailProviderAdapter>,
        config: Option<ProviderConfig>,
    ) -> Result<()> {
        let name = provider.name().to_string();
        self.register(provider);
        self.set_active(&name, config)
    }

    pub fn active(&self) -> Option<&dyn EmailProviderAdapter> {
        self.active.as_deref().and_then(|name| self.get(name))
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Remove an adapter. Returns the removed adapter, if any.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn EmailProviderAdapter>> {
        let name = key(name);
        let removed = self.providers.shift_remove(&name);
        if removed.is_some() && self.active.as_deref() == Some(name.as_str()) {
            self.active = None;
        }
        removed
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .field("active", &self.active)
            .finish()
    }
}
