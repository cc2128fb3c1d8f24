//! Editor state: the template under edit, the saved library, and selection

use crate::TemplateLibrary;
use doc_model::{Element, ElementId, Template, Timestamp};
use serde::{Deserialize, Serialize};

/// Everything the document store holds.
///
/// Only commands change it; see [`crate::TemplateCommand`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub(crate) current_template: Template,
    pub(crate) templates: TemplateLibrary,
    pub(crate) selected_element_id: Option<ElementId>,
}

impl EditorState {
    /// A fresh untitled template, an empty library, nothing selected
    pub fn new(now: Timestamp) -> Self {
        Self::from_parts(Template::new(now), TemplateLibrary::new(), None)
    }

    /// Assemble a state from stored parts
    pub fn from_parts(
        current_template: Template,
        templates: TemplateLibrary,
        selected_element_id: Option<ElementId>,
    ) -> Self {
        Self {
            current_template,
            templates,
            selected_element_id,
        }
    }

    pub fn current_template(&self) -> &Template {
        &self.current_template
    }

    pub fn templates(&self) -> &TemplateLibrary {
        &self.templates
    }

    pub fn selected_element_id(&self) -> Option<&ElementId> {
        self.selected_element_id.as_ref()
    }

    /// The selected element, or None when nothing is selected or the
    /// selected id no longer exists in the current template
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected_element_id
            .as_ref()
            .and_then(|id| self.current_template.element(id))
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Timestamp::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::ElementKind;

    #[test]
    fn test_initial_state() {
        let state = EditorState::default();
        assert_eq!(state.current_template().name, "Untitled Template");
        assert!(state.current_template().is_empty());
        assert!(state.templates().is_empty());
        assert!(state.selected_element_id().is_none());
    }

    #[test]
    fn test_dangling_selection_resolves_to_none() {
        let element = Element::with_defaults(ElementKind::Paragraph);
        let template = Template::new(Timestamp::now()).with_elements(vec![element.clone()]);

        let state = EditorState::from_parts(
            template.clone(),
            TemplateLibrary::new(),
            Some(element.id().clone()),
        );
        assert_eq!(state.selected_element(), Some(&element));

        let dangling = EditorState::from_parts(template, TemplateLibrary::new(), Some("gone".into()));
        assert!(dangling.selected_element_id().is_some());
        assert!(dangling.selected_element().is_none());
    }
}
