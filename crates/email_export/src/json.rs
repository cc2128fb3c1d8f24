//! JSON export

use doc_model::Template;

/// Serialize a template as pretty-printed JSON
pub fn render_json(template: &Template) -> String {
    serde_json::to_string_pretty(template).unwrap_or_default()
}
