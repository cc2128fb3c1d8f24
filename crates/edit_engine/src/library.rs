//! Saved template snapshots

use doc_model::{Template, TemplateId};
use serde::{Deserialize, Serialize};

/// Saved templates, looked up by id.
///
/// Serializes as a plain JSON array, the format of the "saved templates"
/// storage slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateLibrary {
    templates: Vec<Template>,
}

impl TemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot, replacing any saved template with the same id
    pub fn upsert(&mut self, template: Template) {
        match self.templates.iter_mut().find(|t| t.id() == template.id()) {
            Some(existing) => *existing = template,
            None => self.templates.push(template),
        }
    }

    pub fn get(&self, id: &TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| t.id() == id)
    }

    pub fn contains(&self, id: &TemplateId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<Template> for TemplateLibrary {
    fn from_iter<I: IntoIterator<Item = Template>>(iter: I) -> Self {
        let mut library = Self::new();
        for template in iter {
            library.upsert(template);
        }
        library
    }
}
