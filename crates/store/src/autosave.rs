//! Debounced autosave of editor state
//!
//! Every change marks the manager dirty. A save happens once the editor has
//! been quiet for `debounce_ms`, so a burst of edits produces one write.

use crate::{Result, TemplatePersistence};
use edit_engine::EditorState;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Autosave configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutosaveConfig {
    /// Whether autosave is enabled
    pub enabled: bool,
    /// Quiet period after the last change before saving (in milliseconds)
    pub debounce_ms: u64,
    /// How often the background task checks for pending changes (in milliseconds)
    pub poll_interval_ms: u64,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: 1000,
            poll_interval_ms: 250,
        }
    }
}

impl AutosaveConfig {
    pub fn with_debounce(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    pub fn with_poll_interval(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    /// Create a config with autosave disabled
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

/// Current autosave status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutosaveStatus {
    pub enabled: bool,
    pub has_unsaved_changes: bool,
    pub is_saving: bool,
    /// Number of completed saves
    pub save_count: u64,
    pub last_error: Option<String>,
}

/// Autosave manager with debouncing and background saving
pub struct AutosaveManager {
    config: AutosaveConfig,
    persistence: TemplatePersistence,
    dirty: AtomicBool,
    /// Last time a change was reported
    last_dirty_time: Mutex<Option<Instant>>,
    is_saving: AtomicBool,
    save_count: AtomicU64,
    last_error: Mutex<Option<String>>,
    /// Bumped on every change so the background task can skip idle ticks
    change_counter: AtomicU64,
}

impl AutosaveManager {
    pub fn new(persistence: TemplatePersistence, config: AutosaveConfig) -> Self {
        Self {
            config,
            persistence,
            dirty: AtomicBool::new(false),
            last_dirty_time: Mutex::new(None),
            is_saving: AtomicBool::new(false),
            save_count: AtomicU64::new(0),
            last_error: Mutex::new(None),
            change_counter: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &AutosaveConfig {
        &self.config
    }

    pub fn persistence(&self) -> &TemplatePersistence {
        &self.persistence
    }

    /// Record a change. Restarts the debounce window.
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
        self.change_counter.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_dirty_time.lock() {
            *last = Some(Instant::now());
        }
    }

    /// Mark the state as saved
    pub fn mark_clean(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> u64 {
        self.save_count.load(Ordering::SeqCst)
    }

    pub fn status(&self) -> AutosaveStatus {
        AutosaveStatus {
            enabled: self.config.enabled,
            has_unsaved_changes: self.is_dirty(),
            is_saving: self.is_saving(),
            save_count: self.save_count(),
            last_error: self.last_error.lock().ok().and_then(|e| e.clone()),
        }
    }

    /// Check if the debounce period has passed since the last change
    fn should_save_now(&self) -> bool {
        if !self.config.enabled || !self.is_dirty() {
            return false;
        }

        let last_dirty = self.last_dirty_time.lock().ok().and_then(|t| *t);
        match last_dirty {
            Some(dirty_time) => {
                dirty_time.elapsed() >= Duration::from_millis(self.config.debounce_ms)
            }
            None => false,
        }
    }

    /// Persist `state` if dirty and the debounce period has passed.
    /// Returns true if a save was performed.
    pub fn autosave(&self, state: &EditorState) -> Result<bool> {
        if !self.should_save_now() {
            return Ok(false);
        }
        if self.is_saving.swap(true, Ordering::SeqCst) {
            return Ok(false);
        }

        let counter_before = self.change_counter.load(Ordering::SeqCst);
        let result = self.persistence.persist(state);
        self.is_saving.store(false, Ordering::SeqCst);

        let message = result.as_ref().err().map(|e| e.to_string());
        if let Ok(mut last_error) = self.last_error.lock() {
            *last_error = message;
        }
        result?;

        // A change that raced the write keeps the manager dirty
        if self.change_counter.load(Ordering::SeqCst) == counter_before {
            self.mark_clean();
        }
        self.save_count.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            template_id = %state.current_template().id(),
            "autosaved editor state"
        );
        Ok(true)
    }

    /// Persist immediately, ignoring the debounce window
    pub fn flush(&self, state: &EditorState) -> Result<()> {
        self.persistence.persist(state)?;
        self.mark_clean();
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Start the autosave background task.
    /// Returns a handle that can be used to stop the task.
    pub fn start_background_task(
        self: Arc<Self>,
        state: Arc<RwLock<EditorState>>,
    ) -> tokio::task::JoinHandle<()> {
        let manager = self;

        tokio::spawn(async move {
            let interval = Duration::from_millis(manager.config.poll_interval_ms.max(1));
            let mut saved_change_count = manager.change_counter.load(Ordering::SeqCst);

            loop {
                tokio::time::sleep(interval).await;

                if !manager.config.enabled {
                    continue;
                }

                let current_count = manager.change_counter.load(Ordering::SeqCst);
                if current_count == saved_change_count {
                    continue;
                }

                let state_guard = state.read().await;
                match manager.autosave(&state_guard) {
                    Ok(true) => saved_change_count = current_count,
                    Ok(false) => {}
                    Err(e) => tracing::warn!("Autosave failed: {}", e),
                }
            }
        })
    }
}
