//! Kind-specific content payloads
//!
//! Every element carries exactly one of these payloads. The payload *is*
//! the element's kind: there is no separate tag that could drift out of
//! sync with the content shape.

use crate::ElementKind;
use serde::{Deserialize, Serialize};

/// Heading level, always within `1..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Create a heading level, clamping into `1..=6`
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<u8> for HeadingLevel {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

/// Horizontal placement of a logo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderContent {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub level: HeadingLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubHeaderContent {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphContent {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonContent {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageContent {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Dividers carry no content; only their styles matter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DividerContent {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacerContent {
    /// Height in pixels
    #[serde(default = "default_spacer_height")]
    pub height: u32,
}

/// One social network link in a footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    #[serde(default)]
    pub company_name: String,
    /// Empty means "no tagline"
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoContent {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    /// Empty means the logo is not wrapped in a link
    #[serde(default)]
    pub link: String,
    /// Maximum rendered width in pixels
    #[serde(default = "default_logo_max_width")]
    pub max_width: u32,
    #[serde(default)]
    pub alignment: Alignment,
}

fn default_spacer_height() -> u32 {
    crate::defaults::SPACER_HEIGHT
}

fn default_logo_max_width() -> u32 {
    crate::defaults::LOGO_MAX_WIDTH
}

/// Content payload of an element, tagged by kind.
///
/// Serialized adjacently as `{"type": "<kind>", "content": {...}}`, which
/// flattens into the element object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "kebab-case")]
pub enum ElementContent {
    Header(HeaderContent),
    SubHeader(SubHeaderContent),
    Paragraph(ParagraphContent),
    Button(ButtonContent),
    Image(ImageContent),
    Divider(DividerContent),
    Spacer(SpacerContent),
    Footer(FooterContent),
    Logo(LogoContent),
}

impl ElementContent {
    /// The kind this payload belongs to
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Header(_) => ElementKind::Header,
            Self::SubHeader(_) => ElementKind::SubHeader,
            Self::Paragraph(_) => ElementKind::Paragraph,
            Self::Button(_) => ElementKind::Button,
            Self::Image(_) => ElementKind::Image,
            Self::Divider(_) => ElementKind::Divider,
            Self::Spacer(_) => ElementKind::Spacer,
            Self::Footer(_) => ElementKind::Footer,
            Self::Logo(_) => ElementKind::Logo,
        }
    }

    /// Placeholder content for a freshly added element of `kind`
    pub fn default_for(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Header => Self::Header(HeaderContent::default()),
            ElementKind::SubHeader => Self::SubHeader(SubHeaderContent::default()),
            ElementKind::Paragraph => Self::Paragraph(ParagraphContent::default()),
            ElementKind::Button => Self::Button(ButtonContent::default()),
            ElementKind::Image => Self::Image(ImageContent::default()),
            ElementKind::Divider => Self::Divider(DividerContent::default()),
            ElementKind::Spacer => Self::Spacer(SpacerContent::default()),
            ElementKind::Footer => Self::Footer(FooterContent::default()),
            ElementKind::Logo => Self::Logo(LogoContent::default()),
        }
    }

    /// Primary text of the block, for kinds that have one
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Header(c) => Some(&c.text),
            Self::SubHeader(c) => Some(&c.text),
            Self::Paragraph(c) => Some(&c.text),
            Self::Button(c) => Some(&c.text),
            Self::Footer(c) => Some(&c.company_name),
            Self::Image(_) | Self::Divider(_) | Self::Spacer(_) | Self::Logo(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_heading_level_clamps() {
        assert_eq!(HeadingLevel::new(0).get(), 1);
        assert_eq!(HeadingLevel::new(3).get(), 3);
        assert_eq!(HeadingLevel::new(9).get(), 6);

        let parsed: HeaderContent = serde_json::from_value(json!({"text": "Hi", "level": 12})).unwrap();
        assert_eq!(parsed.level.get(), 6);
    }

    #[test]
    fn test_adjacent_tagging() {
        let content = ElementContent::Button(ButtonContent {
            text: "Click Me".into(),
            url: "https://example.com".into(),
        });
        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(
            value,
            json!({"type": "button", "content": {"text": "Click Me", "url": "https://example.com"}})
        );
    }

    #[test]
    fn test_camel_case_fields() {
        let footer = FooterContent {
            company_name: "Acme".into(),
            tagline: String::new(),
            social_links: vec![SocialLink::new("twitter", "https://twitter.com/acme")],
        };
        let value = serde_json::to_value(&footer).unwrap();
        assert_eq!(value["companyName"], "Acme");
        assert_eq!(value["socialLinks"][0]["platform"], "twitter");

        let logo: LogoContent = serde_json::from_value(json!({"maxWidth": 120, "alignment": "left"})).unwrap();
        assert_eq!(logo.max_width, 120);
        assert_eq!(logo.alignment, Alignment::Left);
        assert_eq!(logo.alt, "");
        assert_eq!(logo.src, "");
    }

    #[test]
    fn test_missing_fields_decode_empty() {
        let content: ElementContent =
            serde_json::from_value(json!({"type": "header", "content": {}})).unwrap();
        match content {
            ElementContent::Header(h) => {
                assert_eq!(h.text, "");
                assert_eq!(h.level.get(), 1);
            }
            other => panic!("unexpected content: {:?}", other),
        }

        let content: ElementContent = serde_json::from_value(
            json!({"type": "footer", "content": {"companyName": "Acme", "socialLinks": []}}),
        )
        .unwrap();
        match content {
            ElementContent::Footer(f) => {
                assert_eq!(f.company_name, "Acme");
                assert_eq!(f.tagline, "");
                assert!(f.social_links.is_empty());
            }
            other => panic!("unexpected content: {:?}", other),
        }

        let content: ElementContent =
            serde_json::from_value(json!({"type": "footer", "content": {"companyName": "Acme"}})).unwrap();
        match content {
            ElementContent::Footer(f) => assert!(f.social_links.is_empty()),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_missing_numeric_fields_keep_usable_values() {
        let spacer: SpacerContent = serde_json::from_value(json!({})).unwrap();
        assert_eq!(spacer.height, 20);

        let logo: LogoContent = serde_json::from_value(json!({"src": "/logo.png"})).unwrap();
        assert_eq!(logo.max_width, 200);
        assert_eq!(logo.alignment, Alignment::Center);
        assert_eq!(logo.alt, "");
    }

    #[test]
    fn test_default_for_matches_kind() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementContent::default_for(kind).kind(), kind);
        }
    }
}
