//! Commands over the template document store
//!
//! Each command is a pure transition `(state, command) -> state'`. Lookups
//! by a missing id are not errors: the command reports [`Outcome::NoOp`]
//! and the returned state equals the input.

use crate::{EditError, EditorState, Result};
use doc_model::{
    Clock, Element, ElementContent, ElementId, ElementKind, StyleMap, Template, TemplateId,
};
use serde::{Deserialize, Serialize};

/// Whether a command changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NoOp,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Result of applying a command
#[derive(Debug)]
pub struct CommandResult {
    /// The state after the command
    pub state: EditorState,
    pub outcome: Outcome,
}

/// Replacement values for an element's top-level fields.
///
/// Each present field replaces the old value wholesale; nothing is merged
/// key-by-key. Callers that want to change one style keep the rest by
/// starting from the element's current map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ElementContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
}

impl ElementUpdate {
    /// Replace only the content
    pub fn content(content: ElementContent) -> Self {
        Self {
            content: Some(content),
            styles: None,
        }
    }

    /// Replace only the styles
    pub fn styles(styles: StyleMap) -> Self {
        Self {
            content: None,
            styles: Some(styles),
        }
    }

    /// Also replace the styles
    pub fn with_styles(mut self, styles: StyleMap) -> Self {
        self.styles = Some(styles);
        self
    }
}

/// An intent issued against the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TemplateCommand {
    /// Insert a default element of `kind` at `index` (appends when absent
    /// or past the end) and select it
    AddElement {
        kind: ElementKind,
        #[serde(default)]
        index: Option<usize>,
    },
    /// Replace content and/or styles of an element
    UpdateElement { id: ElementId, updates: ElementUpdate },
    RemoveElement { id: ElementId },
    /// Splice-out, splice-in move; both indices must be in range
    ReorderElements {
        source_index: usize,
        destination_index: usize,
    },
    /// Set the selection without checking that the id exists
    SelectElement { id: Option<ElementId> },
    RenameTemplate { name: String },
    /// Upsert the current template into the library
    SaveTemplate,
    /// Replace the current template with a copy of a saved one
    LoadTemplate { id: TemplateId },
    /// Replace the current template verbatim with a restored one
    LoadTemplateFromStorage { template: Template },
    CreateNewTemplate,
    /// Adopt an external template under a fresh id
    ImportTemplate { template: Template },
}

impl TemplateCommand {
    /// Apply this command to `state`, stamping edits with `clock`
    pub fn apply(&self, state: &EditorState, clock: &dyn Clock) -> Result<CommandResult> {
        let mut next = state.clone();

        let outcome = match self {
            Self::AddElement { kind, index } => {
                let element = Element::with_defaults(*kind);
                let id = element.id().clone();
                next.current_template.insert_element(*index, element);
                next.current_template.touch(clock.now());
                next.selected_element_id = Some(id);
                Outcome::Applied
            }
            Self::UpdateElement { id, updates } => match next.current_template.element_mut(id) {
                Some(element) => {
                    let content_set = match &updates.content {
                        Some(content) => element.set_content(content.clone()),
                        None => Ok(()),
                    };
                    match content_set {
                        Ok(()) => {
                            if let Some(styles) = &updates.styles {
                                element.styles = styles.clone();
                            }
                            next.current_template.touch(clock.now());
                            Outcome::Applied
                        }
                        Err(e) => {
                            tracing::debug!(element_id = %id, "update ignored: {}", e);
                            Outcome::NoOp
                        }
                    }
                }
                None => Outcome::NoOp,
            },
            Self::RemoveElement { id } => match next.current_template.remove_element(id) {
                Some(_) => {
                    next.current_template.touch(clock.now());
                    if next.selected_element_id.as_ref() == Some(id) {
                        next.selected_element_id = None;
                    }
                    Outcome::Applied
                }
                None => Outcome::NoOp,
            },
            Self::ReorderElements {
                source_index,
                destination_index,
            } => {
                let len = next.current_template.len();
                if !next
                    .current_template
                    .move_element(*source_index, *destination_index)
                {
                    return Err(EditError::IndexOutOfRange {
                        source_index: *source_index,
                        destination_index: *destination_index,
                        len,
                    });
                }
                next.current_template.touch(clock.now());
                Outcome::Applied
            }
            Self::SelectElement { id } => {
                next.selected_element_id = id.clone();
                Outcome::Applied
            }
            Self::RenameTemplate { name } => {
                next.current_template.name = name.clone();
                next.current_template.touch(clock.now());
                Outcome::Applied
            }
            Self::SaveTemplate => {
                next.templates.upsert(next.current_template.clone());
                Outcome::Applied
            }
            Self::LoadTemplate { id } => match next.templates.get(id) {
                Some(saved) => {
                    next.current_template = saved.clone();
                    next.selected_element_id = None;
                    Outcome::Applied
                }
                None => Outcome::NoOp,
            },
            Self::LoadTemplateFromStorage { template } => {
                next.current_template = template.clone();
                next.selected_element_id = None;
                Outcome::Applied
            }
            Self::CreateNewTemplate => {
                next.current_template = Template::new(clock.now());
                next.selected_element_id = None;
                Outcome::Applied
            }
            Self::ImportTemplate { template } => {
                let mut imported = template.clone();
                imported.reassign_id(TemplateId::new());
                imported.touch(clock.now());
                next.current_template = imported;
                next.selected_element_id = None;
                Outcome::Applied
            }
        };

        Ok(CommandResult {
            state: next,
            outcome,
        })
    }

    /// Get a display name for this command
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AddElement { .. } => "Add Element",
            Self::UpdateElement { .. } => "Update Element",
            Self::RemoveElement { .. } => "Remove Element",
            Self::ReorderElements { .. } => "Reorder Elements",
            Self::SelectElement { .. } => "Select Element",
            Self::RenameTemplate { .. } => "Rename Template",
            Self::SaveTemplate => "Save Template",
            Self::LoadTemplate { .. } => "Load Template",
            Self::LoadTemplateFromStorage { .. } => "Restore Template",
            Self::CreateNewTemplate => "New Template",
            Self::ImportTemplate { .. } => "Import Template",
        }
    }
}
