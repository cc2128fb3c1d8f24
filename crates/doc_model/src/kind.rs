//! The closed set of element kinds

use crate::DocModelError;
use serde::{Deserialize, Serialize};

/// Kinds of content blocks that can be placed in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Header,
    SubHeader,
    Paragraph,
    Button,
    Image,
    Divider,
    Spacer,
    Footer,
    Logo,
}

impl ElementKind {
    /// Every kind, in palette order
    pub const ALL: [ElementKind; 9] = [
        ElementKind::Header,
        ElementKind::SubHeader,
        ElementKind::Paragraph,
        ElementKind::Button,
        ElementKind::Image,
        ElementKind::Divider,
        ElementKind::Spacer,
        ElementKind::Footer,
        ElementKind::Logo,
    ];

    /// The wire tag used in exported JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::SubHeader => "sub-header",
            Self::Paragraph => "paragraph",
            Self::Button => "button",
            Self::Image => "image",
            Self::Divider => "divider",
            Self::Spacer => "spacer",
            Self::Footer => "footer",
            Self::Logo => "logo",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ElementKind {
    type Err = DocModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DocModelError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tags_match_serde() {
        for kind in ElementKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("sub-header".parse::<ElementKind>().unwrap(), ElementKind::SubHeader);
        assert!(matches!(
            "carousel".parse::<ElementKind>(),
            Err(DocModelError::UnknownKind(k)) if k == "carousel"
        ));
    }
}
