//! Default content and style tables for newly added elements
//!
//! These literals are shared with templates exported by earlier versions of
//! the builder; changing them changes what "Add element" produces.

use crate::{
    Alignment, ButtonContent, ElementKind, FooterContent, HeaderContent, HeadingLevel,
    ImageContent, LogoContent, ParagraphContent, SocialLink, SpacerContent, StyleMap,
    SubHeaderContent,
};

/// Name given to fresh templates
pub const UNTITLED_TEMPLATE_NAME: &str = "Untitled Template";

/// Spacer height in pixels when none is given
pub const SPACER_HEIGHT: u32 = 20;

/// Logo width cap in pixels when none is given
pub const LOGO_MAX_WIDTH: u32 = 200;

impl Default for HeaderContent {
    fn default() -> Self {
        Self {
            text: "Header Text".to_string(),
            level: HeadingLevel::new(1),
        }
    }
}

impl Default for SubHeaderContent {
    fn default() -> Self {
        Self {
            text: "Sub-Header Text".to_string(),
        }
    }
}

impl Default for ParagraphContent {
    fn default() -> Self {
        Self {
            text: "This is a paragraph of text. Click to edit.".to_string(),
        }
    }
}

impl Default for ButtonContent {
    fn default() -> Self {
        Self {
            text: "Click Me".to_string(),
            url: "#".to_string(),
        }
    }
}

impl Default for ImageContent {
    fn default() -> Self {
        Self {
            src: "/email-placeholder.png".to_string(),
            alt: "Image description".to_string(),
        }
    }
}

impl Default for SpacerContent {
    fn default() -> Self {
        Self { height: SPACER_HEIGHT }
    }
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            company_name: "Your Company".to_string(),
            tagline: "Your company tagline".to_string(),
            social_links: vec![
                SocialLink::new("facebook", "https://facebook.com/"),
                SocialLink::new("twitter", "https://twitter.com/"),
                SocialLink::new("instagram", "https://instagram.com/"),
            ],
        }
    }
}

impl Default for LogoContent {
    fn default() -> Self {
        Self {
            src: String::new(),
            alt: "Company Logo".to_string(),
            link: String::new(),
            max_width: LOGO_MAX_WIDTH,
            alignment: Alignment::Center,
        }
    }
}

const BASE_STYLES: [(&str, &str); 5] = [
    ("padding", "16px"),
    ("margin", "0px"),
    ("color", "var(--foreground)"),
    ("backgroundColor", "transparent"),
    ("fontFamily", "Arial, sans-serif"),
];

/// Default style declarations for a freshly added element of `kind`.
///
/// Kind-specific entries are layered over the base set; overriding a base
/// key keeps the base key's position.
pub fn default_styles(kind: ElementKind) -> StyleMap {
    let overrides: &[(&str, &str)] = match kind {
        ElementKind::Header => &[("fontSize", "24px"), ("fontWeight", "bold")],
        ElementKind::SubHeader => &[
            ("fontSize", "18px"),
            ("fontWeight", "600"),
            ("color", "#4B5563"),
            ("borderBottom", "1px solid #E5E7EB"),
            ("paddingBottom", "8px"),
        ],
        ElementKind::Paragraph => &[("fontSize", "16px")],
        ElementKind::Button => &[
            ("backgroundColor", "#3b82f6"),
            ("color", "#ffffff"),
            ("padding", "12px 24px"),
            ("borderRadius", "4px"),
            ("textAlign", "center"),
        ],
        ElementKind::Image => &[("width", "100%"), ("maxWidth", "600px")],
        ElementKind::Divider => &[("borderTop", "1px solid var(--border)"), ("padding", "0px")],
        ElementKind::Spacer => &[("padding", "0px")],
        ElementKind::Footer => &[
            ("padding", "24px 16px"),
            ("borderTop", "1px solid #E5E7EB"),
            ("textAlign", "center"),
            ("fontSize", "14px"),
            ("color", "#4B5563"),
        ],
        ElementKind::Logo => &[
            ("padding", "16px"),
            ("margin", "0 auto"),
            ("maxWidth", "200px"),
            ("height", "auto"),
        ],
    };

    let mut styles = crate::style_map(BASE_STYLES);
    for (key, value) in overrides {
        styles.insert(key.to_string(), value.to_string());
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_defaults() {
        let content = HeaderContent::default();
        assert_eq!(content.text, "Header Text");
        assert_eq!(content.level.get(), 1);

        let styles = default_styles(ElementKind::Header);
        assert_eq!(styles["fontSize"], "24px");
        assert_eq!(styles["fontWeight"], "bold");
        assert_eq!(styles["padding"], "16px");
    }

    #[test]
    fn test_sub_header_overrides_color_in_place() {
        let styles = default_styles(ElementKind::SubHeader);
        assert_eq!(styles.get_index_of("color"), Some(2));
        assert_eq!(styles["color"], "#4B5563");
        assert_eq!(styles["borderBottom"], "1px solid #E5E7EB");
    }

    #[test]
    fn test_spacer_and_divider_have_no_padding() {
        assert_eq!(default_styles(ElementKind::Spacer)["padding"], "0px");
        assert_eq!(default_styles(ElementKind::Divider)["padding"], "0px");
        assert_eq!(SpacerContent::default().height, 20);
    }

    #[test]
    fn test_button_defaults() {
        let styles = default_styles(ElementKind::Button);
        assert_eq!(styles["backgroundColor"], "#3b82f6");
        assert_eq!(styles["color"], "#ffffff");
        assert_eq!(styles["padding"], "12px 24px");
        assert_eq!(ButtonContent::default().url, "#");
    }

    #[test]
    fn test_every_kind_has_base_styles() {
        for kind in ElementKind::ALL {
            let styles = default_styles(kind);
            for (key, _) in BASE_STYLES {
                assert!(styles.contains_key(key), "{} missing {}", kind, key);
            }
        }
    }

    #[test]
    fn test_footer_defaults() {
        let footer = FooterContent::default();
        assert_eq!(footer.company_name, "Your Company");
        assert_eq!(footer.social_links.len(), 3);
        assert_eq!(footer.social_links[0].platform, "facebook");
    }
}
