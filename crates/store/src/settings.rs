//! Editor settings management
//!
//! This module provides settings persistence, loading, and updating
//! for the email builder.

use crate::{AutosaveConfig, Result};
use email_export::ExportOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default slot holding the template under edit
pub const CURRENT_TEMPLATE_KEY: &str = "emailBuilder_currentTemplate";
/// Default slot holding the saved-template library
pub const TEMPLATES_KEY: &str = "emailBuilder_templates";

const SETTINGS_FILE: &str = "settings.json";

/// Main editor settings container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorSettings {
    /// Autosave behaviour
    pub autosave: AutosaveConfig,
    /// Defaults for HTML export
    pub export: ExportOptions,
    /// Slot names in the key/value store
    pub storage: StorageSettings,
}

/// Names of the persisted slots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageSettings {
    pub current_template_key: String,
    pub templates_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            current_template_key: CURRENT_TEMPLATE_KEY.to_string(),
            templates_key: TEMPLATES_KEY.to_string(),
        }
    }
}

/// Settings manager for loading, saving, and updating editor settings
pub struct SettingsManager {
    /// Path to the settings file
    settings_path: PathBuf,
    /// Current settings (cached)
    current: EditorSettings,
}

impl SettingsManager {
    /// Create a new settings manager with the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            settings_path: data_dir.join(SETTINGS_FILE),
            current: EditorSettings::default(),
        }
    }

    /// Get the path to the settings file
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub async fn load(&mut self) -> Result<&EditorSettings> {
        self.current = if tokio::fs::try_exists(&self.settings_path).await? {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            parse_or_default(&content)
        } else {
            EditorSettings::default()
        };
        Ok(&self.current)
    }

    /// Load settings synchronously (for use during startup)
    pub fn load_sync(&mut self) -> Result<&EditorSettings> {
        self.current = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            parse_or_default(&content)
        } else {
            EditorSettings::default()
        };
        Ok(&self.current)
    }

    /// Save current settings to disk
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        tokio::fs::write(&self.settings_path, content).await?;
        Ok(())
    }

    /// Save settings synchronously
    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    /// Get current settings
    pub fn get(&self) -> &EditorSettings {
        &self.current
    }

    /// Update settings and save to disk
    pub async fn update(&mut self, settings: EditorSettings) -> Result<()> {
        self.current = settings;
        self.save().await
    }

    /// Update settings synchronously
    pub fn update_sync(&mut self, settings: EditorSettings) -> Result<()> {
        self.current = settings;
        self.save_sync()
    }

    /// Reset settings to defaults and save
    pub async fn reset(&mut self) -> Result<&EditorSettings> {
        self.current = EditorSettings::default();
        self.save().await?;
        Ok(&self.current)
    }

    /// Update only the export defaults
    pub async fn update_export(&mut self, export: ExportOptions) -> Result<()> {
        self.current.export = export;
        self.save().await
    }

    /// Update only the autosave configuration
    pub async fn update_autosave(&mut self, autosave: AutosaveConfig) -> Result<()> {
        self.current.autosave = autosave;
        self.save().await
    }
}

fn parse_or_default(content: &str) -> EditorSettings {
    match serde_json::from_str::<EditorSettings>(content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to parse settings file, using defaults: {}", e);
            EditorSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = EditorSettings::default();

        assert!(settings.autosave.enabled);
        assert_eq!(settings.autosave.debounce_ms, 1000);

        assert!(settings.export.responsive);
        assert_eq!(settings.export.container_width, 600);
        assert!(settings.export.custom_css.is_none());

        assert_eq!(settings.storage.current_template_key, "emailBuilder_currentTemplate");
        assert_eq!(settings.storage.templates_key, "emailBuilder_templates");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: EditorSettings =
            serde_json::from_str(r#"{"export": {"container_width": 720}}"#).unwrap();
        assert_eq!(settings.export.container_width, 720);
        assert!(settings.export.responsive);
        assert_eq!(settings.autosave, AutosaveConfig::default());
    }

    #[test]
    fn test_settings_manager_load_save_sync() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());

        // Load should return defaults when no file exists
        let settings = manager.load_sync().unwrap();
        assert_eq!(settings, &EditorSettings::default());

        let mut new_settings = EditorSettings::default();
        new_settings.export.custom_css = Some(".brand { color: red; }".to_string());
        new_settings.storage.templates_key = "library".to_string();
        manager.update_sync(new_settings).unwrap();

        let mut manager2 = SettingsManager::new(temp_dir.path().to_path_buf());
        let loaded = manager2.load_sync().unwrap();
        assert_eq!(loaded.export.custom_css.as_deref(), Some(".brand { color: red; }"));
        assert_eq!(loaded.storage.templates_key, "library");
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("settings.json"), "{ nope").unwrap();

        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());
        assert_eq!(manager.load_sync().unwrap(), &EditorSettings::default());
    }

    #[tokio::test]
    async fn test_settings_manager_async() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());

        manager.load().await.unwrap();

        let mut autosave = AutosaveConfig::default();
        autosave.debounce_ms = 250;
        manager.update_autosave(autosave).await.unwrap();

        let mut manager2 = SettingsManager::new(temp_dir.path().to_path_buf());
        let loaded = manager2.load().await.unwrap();
        assert_eq!(loaded.autosave.debounce_ms, 250);

        let reset = manager2.reset().await.unwrap();
        assert_eq!(reset, &EditorSettings::default());
    }
}
