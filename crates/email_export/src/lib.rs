//! Email Export - Template to standalone HTML / JSON
//!
//! Rendering is a pure function of the template and the export options:
//! no state is kept between calls.

mod options;
mod style;
mod html;
mod json;

pub use options::*;
pub use style::{css_property_name, escape_html, inline_style};
pub use html::*;
pub use json::*;
