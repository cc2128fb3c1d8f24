//! Inline style and escaping helpers

use doc_model::StyleMap;

/// Convert a style key to a CSS property name: `backgroundColor` becomes
/// `background-color`. Keys that already contain `-` are left alone.
pub fn css_property_name(key: &str) -> String {
    if key.contains('-') {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Render a style map as `prop: value; prop: value;` in insertion order
pub fn inline_style(styles: &StyleMap) -> String {
    styles
        .iter()
        .map(|(key, value)| format!("{}: {};", css_property_name(key), value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join two declaration lists with a single space
pub(crate) fn join_declarations(first: &str, second: &str) -> String {
    match (first.is_empty(), second.is_empty()) {
        (true, _) => second.to_string(),
        (_, true) => first.to_string(),
        _ => format!("{} {}", first, second),
    }
}

/// Escape text for use in HTML content or attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::style_map;

    #[test]
    fn test_css_property_name() {
        assert_eq!(css_property_name("backgroundColor"), "background-color");
        assert_eq!(css_property_name("borderBottom"), "border-bottom");
        assert_eq!(css_property_name("color"), "color");
        assert_eq!(css_property_name("font-size"), "font-size");
        assert_eq!(css_property_name("--brand-color"), "--brand-color");
    }

    #[test]
    fn test_inline_style_keeps_order() {
        let styles = style_map([("fontSize", "32px"), ("color", "#333333"), ("margin", "0px")]);
        assert_eq!(inline_style(&styles), "font-size: 32px; color: #333333; margin: 0px;");
        assert_eq!(inline_style(&StyleMap::new()), "");
    }

    #[test]
    fn test_join_declarations() {
        assert_eq!(join_declarations("", "a: b;"), "a: b;");
        assert_eq!(join_declarations("a: b;", ""), "a: b;");
        assert_eq!(join_declarations("a: b;", "c: d;"), "a: b; c: d;");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Tom & Jerry <3"), "Tom &amp; Jerry &lt;3");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
    }
}
