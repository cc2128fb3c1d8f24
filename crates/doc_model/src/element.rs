//! Template elements

use crate::defaults::default_styles;
use crate::{DocModelError, ElementContent, ElementId, ElementKind, Result, StyleMap};
use serde::{Deserialize, Serialize};

/// One content block in a template.
///
/// Serializes as `{"id", "type", "content", "styles"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    #[serde(flatten)]
    content: ElementContent,
    /// CSS declarations applied to the block
    #[serde(default)]
    pub styles: StyleMap,
}

impl Element {
    /// Create an element of `kind` with a fresh id and the kind's default
    /// content and styles
    pub fn with_defaults(kind: ElementKind) -> Self {
        Self {
            id: ElementId::new(),
            content: ElementContent::default_for(kind),
            styles: default_styles(kind),
        }
    }

    /// Create an element with a known id and no styles
    pub fn new(id: impl Into<ElementId>, content: ElementContent) -> Self {
        Self {
            id: id.into(),
            content,
            styles: StyleMap::new(),
        }
    }

    /// Replace the style map
    pub fn with_styles(mut self, styles: StyleMap) -> Self {
        self.styles = styles;
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    pub fn content(&self) -> &ElementContent {
        &self.content
    }

    /// Replace the content payload. The new payload must be of the same kind.
    pub fn set_content(&mut self, content: ElementContent) -> Result<()> {
        if content.kind() != self.kind() {
            return Err(DocModelError::KindMismatch {
                expected: self.kind(),
                actual: content.kind(),
            });
        }
        self.content = content;
        Ok(())
    }

    /// Look up a single style value
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    /// Check content constraints the type system cannot express
    pub fn validate(&self) -> Result<()> {
        let reason = match &self.content {
            ElementContent::Spacer(spacer) if spacer.height == 0 => Some("spacer height must be positive"),
            ElementContent::Logo(logo) if logo.max_width == 0 => Some("logo max width must be positive"),
            _ => None,
        };

        match reason {
            Some(reason) => Err(DocModelError::InvalidContent {
                element_id: self.id.clone(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{style_map, ButtonContent, HeaderContent, ParagraphContent, SpacerContent};
    use serde_json::json;

    #[test]
    fn test_with_defaults() {
        let element = Element::with_defaults(ElementKind::Header);
        assert_eq!(element.kind(), ElementKind::Header);
        assert_eq!(element.content().text(), Some("Header Text"));
        assert_eq!(element.style("fontWeight"), Some("bold"));
    }

    #[test]
    fn test_wire_shape() {
        let element = Element::new(
            "button-1",
            ElementContent::Button(ButtonContent {
                text: "Click Me".into(),
                url: "https://example.com".into(),
            }),
        )
        .with_styles(style_map([("backgroundColor", "#3b82f6")]));

        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "button-1",
                "type": "button",
                "content": {"text": "Click Me", "url": "https://example.com"},
                "styles": {"backgroundColor": "#3b82f6"}
            })
        );

        let parsed: Element = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, element);
    }

    #[test]
    fn test_missing_styles_default_to_empty() {
        let parsed: Element = serde_json::from_value(json!({
            "id": "p-1",
            "type": "paragraph",
            "content": {"text": "Existing paragraph"}
        }))
        .unwrap();
        assert!(parsed.styles.is_empty());
        assert_eq!(parsed.content().text(), Some("Existing paragraph"));
    }

    #[test]
    fn test_set_content_rejects_other_kind() {
        let mut element = Element::new("h", ElementContent::Header(HeaderContent::default()));
        let err = element
            .set_content(ElementContent::Paragraph(ParagraphContent::default()))
            .unwrap_err();
        assert!(matches!(
            err,
            DocModelError::KindMismatch {
                expected: ElementKind::Header,
                actual: ElementKind::Paragraph
            }
        ));
        assert_eq!(element.kind(), ElementKind::Header);
    }

    #[test]
    fn test_validate_spacer_height() {
        let element = Element::new("s", ElementContent::Spacer(SpacerContent { height: 0 }));
        assert!(matches!(element.validate(), Err(DocModelError::InvalidContent { .. })));
        assert!(Element::with_defaults(ElementKind::Spacer).validate().is_ok());
    }
}
