//! Element style declarations

use indexmap::IndexMap;

/// CSS property name -> CSS value, in insertion order.
///
/// Keys are stored as authored (usually camelCase such as `fontSize`);
/// the exporter converts them to CSS property names when inlining.
pub type StyleMap = IndexMap<String, String>;

/// Build a style map from borrowed pairs, preserving their order
pub fn style_map<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> StyleMap {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_map_preserves_order() {
        let styles = style_map([("padding", "16px"), ("color", "#000"), ("margin", "0px")]);
        let keys: Vec<&str> = styles.keys().map(String::as_str).collect();
        assert_eq!(keys, ["padding", "color", "margin"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut styles = style_map([("padding", "16px"), ("color", "#000")]);
        styles.insert("padding".into(), "0px".into());
        assert_eq!(styles.get_index(0), Some((&"padding".to_string(), &"0px".to_string())));
    }

    #[test]
    fn test_serializes_in_order() {
        let styles = style_map([("fontSize", "24px"), ("color", "red")]);
        assert_eq!(
            serde_json::to_string(&styles).unwrap(),
            r#"{"fontSize":"24px","color":"red"}"#
        );
    }
}
