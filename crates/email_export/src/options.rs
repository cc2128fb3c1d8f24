//! Export options

use serde::{Deserialize, Serialize};

/// Options for HTML export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Emit the narrow-viewport media query
    pub responsive: bool,
    /// Extra CSS appended to the embedded style block
    pub custom_css: Option<String>,
    /// Maximum width of the email container in pixels
    pub container_width: u32,
    /// Year printed in footer copyright lines; the current year when unset
    pub copyright_year: Option<i32>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            custom_css: None,
            container_width: 600,
            copyright_year: None,
        }
    }
}

impl ExportOptions {
    /// Append custom CSS to the style block
    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }

    /// Pin the footer copyright year
    pub fn with_copyright_year(mut self, year: i32) -> Self {
        self.copyright_year = Some(year);
        self
    }

    /// Enable or disable the responsive media query
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }
}
