//! The template document

use crate::defaults::UNTITLED_TEMPLATE_NAME;
use crate::{DocModelError, Element, ElementId, Result, TemplateId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Free-form metadata attached to a template
pub type TemplateMetadata = serde_json::Map<String, serde_json::Value>;

/// An email template: ordered elements plus identity and timestamps.
///
/// Element order is render order. `updated_at` moves forward on every
/// content edit; `created_at` never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    id: TemplateId,
    /// Display name
    pub name: String,
    elements: Vec<Element>,
    created_at: Timestamp,
    updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TemplateMetadata>,
}

impl Template {
    /// Create an empty, untitled template with a fresh id
    pub fn new(now: Timestamp) -> Self {
        Self::with_id(TemplateId::new(), now)
    }

    /// Create an empty, untitled template with a known id
    pub fn with_id(id: impl Into<TemplateId>, now: Timestamp) -> Self {
        Self {
            id: id.into(),
            name: UNTITLED_TEMPLATE_NAME.to_string(),
            elements: Vec::new(),
            created_at: now,
            updated_at: now,
            metadata: None,
        }
    }

    /// Set the display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the element list
    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }

    /// Override the last-updated timestamp
    pub fn with_updated_at(mut self, updated_at: Timestamp) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    /// Give the template a new identity, decoupling it from stored copies
    pub fn reassign_id(&mut self, id: TemplateId) {
        self.id = id;
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Record an edit made at `now`. The stored timestamp always changes.
    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = now.strictly_after(self.updated_at);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Find an element by id
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Find an element by id for modification
    pub fn element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Index of the element with `id`
    pub fn position_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }

    /// Insert at `index`, or append when `index` is absent or past the end
    pub fn insert_element(&mut self, index: Option<usize>, element: Element) -> usize {
        match index {
            Some(i) if i <= self.elements.len() => {
                self.elements.insert(i, element);
                i
            }
            _ => {
                self.elements.push(element);
                self.elements.len() - 1
            }
        }
    }

    /// Remove the element with `id`, returning it if it was present
    pub fn remove_element(&mut self, id: &ElementId) -> Option<Element> {
        let pos = self.position_of(id)?;
        Some(self.elements.remove(pos))
    }

    /// Splice the element at `source` out and back in at `destination`,
    /// where `destination` indexes the shortened list. Both indices must be
    /// in range; returns false and leaves the order untouched otherwise.
    pub fn move_element(&mut self, source: usize, destination: usize) -> bool {
        let len = self.elements.len();
        if source >= len || destination >= len {
            return false;
        }
        let element = self.elements.remove(source);
        self.elements.insert(destination, element);
        true
    }

    /// Check document-level invariants: unique element ids and per-element
    /// content constraints
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.elements.len());
        for element in &self.elements {
            if !seen.insert(element.id()) {
                return Err(DocModelError::DuplicateElementId(element.id().clone()));
            }
            element.validate()?;
        }
        Ok(())
    }
}
