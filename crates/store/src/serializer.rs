//! Template serialization
//!
//! Templates are stored and exchanged in the same JSON shape the export
//! engine produces, so an exported `.json` file can be imported again.

use crate::Result;
use doc_model::Template;
use edit_engine::TemplateLibrary;
use serde::de::DeserializeOwned;

/// Serialize a template to pretty JSON
pub fn serialize(template: &Template) -> String {
    email_export::render_json(template)
}

/// Deserialize a template from JSON without semantic validation
pub fn deserialize(json: &str) -> Result<Template> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize the saved-template library as a JSON array
pub fn serialize_library(library: &TemplateLibrary) -> Result<String> {
    Ok(serde_json::to_string(library)?)
}

/// Deserialize a saved-template library
pub fn deserialize_library(json: &str) -> Result<TemplateLibrary> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a saved-template library one template at a time.
///
/// Entries that fail to decode are logged and skipped. A slot that is not a
/// JSON array at all yields an empty library.
pub fn deserialize_library_lenient(json: &str, slot: &str) -> TemplateLibrary {
    let entries: Vec<serde_json::Value> = deserialize_or_else(json, slot, Vec::new);
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Template>(entry) {
            Ok(template) => Some(template),
            Err(e) => {
                tracing::warn!(slot, index, "Skipping unreadable saved template: {}", e);
                None
            }
        })
        .collect()
}

/// Parse `json`, or fall back to `fallback()` when it does not parse.
///
/// The failure is logged and never surfaced; a corrupt slot must not keep
/// the editor from starting.
pub fn deserialize_or_else<T, F>(json: &str, slot: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(slot, "Failed to parse stored value, using defaults: {}", e);
            fallback()
        }
    }
}

/// Parse and validate a template supplied from outside the editor.
///
/// Rejects duplicate element ids, zero spacer heights and zero logo widths.
pub fn import_template_json(json: &str) -> Result<Template> {
    let template = deserialize(json)?;
    template.validate()?;
    Ok(template)
}
