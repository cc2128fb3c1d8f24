//! Document Model - Email template structure and element types
//!
//! This crate provides the template document model for the email builder:
//! an ordered list of typed content blocks, each carrying a kind-specific
//! content payload and an insertion-ordered map of CSS declarations.

mod error;
mod ids;
mod timestamp;
mod kind;
mod content;
pub mod style;
pub mod defaults;
mod element;
mod template;

pub use error::*;
pub use ids::*;
pub use timestamp::*;
pub use kind::*;
pub use content::*;
pub use style::{style_map, StyleMap};
pub use element::*;
pub use template::*;
