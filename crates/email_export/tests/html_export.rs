//! Document-level HTML export tests

use chrono::DateTime;
use doc_model::{
    style_map, ButtonContent, Element, ElementContent, ElementKind, HeaderContent, HeadingLevel,
    Template, Timestamp,
};
use email_export::{render_html, render_html_with, render_json, ExportOptions};

fn mock_now() -> Timestamp {
    Timestamp::from_datetime(DateTime::from_timestamp_millis(1_672_531_200_000).unwrap())
}

fn template() -> Template {
    Template::with_id("template-1", mock_now()).named("Test Template")
}

#[test]
fn test_button_export() {
    let button = Element::new(
        "button-1",
        ElementContent::Button(ButtonContent {
            text: "Click Me".into(),
            url: "https://example.com".into(),
        }),
    )
    .with_styles(style_map([("backgroundColor", "#3b82f6"), ("color", "#ffffff")]));

    let html = render_html(&template().with_elements(vec![button]));

    assert!(html.contains(r#"href="https://example.com""#));
    assert!(html.contains("background-color: #3b82f6"));
    assert!(html.contains("Click Me"));
}

#[test]
fn test_empty_template_has_empty_content() {
    let html = render_html(&template());

    let start = html.find(r#"<div class="content">"#).unwrap() + r#"<div class="content">"#.len();
    let rest = &html[start..];
    let close = rest.find("</div>").unwrap();
    assert!(rest[..close].trim().is_empty());
}

#[test]
fn test_document_frame() {
    let header = Element::new(
        "header-1",
        ElementContent::Header(HeaderContent {
            text: "Welcome".into(),
            level: HeadingLevel::new(1),
        }),
    )
    .with_styles(style_map([("fontSize", "32px"), ("color", "#333333")]));
    let paragraph = Element::with_defaults(ElementKind::Paragraph)
        .with_styles(style_map([("color", "#666666")]));

    let html = render_html(&template().with_elements(vec![header, paragraph]));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<title>Test Template</title>").count(), 1);
    assert!(html.contains("font-size: 32px"));
    assert!(html.contains("color: #666666"));
    assert!(html.contains("@media only screen and (max-width: 480px)"));

    let welcome = html.find("Welcome").unwrap();
    let para = html.find("This is a paragraph").unwrap();
    assert!(welcome < para);
}

#[test]
fn test_title_is_escaped() {
    let html = render_html(&template().named("News & <Offers>"));
    assert!(html.contains("<title>News &amp; &lt;Offers&gt;</title>"));
}

#[test]
fn test_custom_css_is_embedded() {
    let options = ExportOptions::default().with_custom_css(".custom-class { color: red; }");
    let html = render_html_with(&template(), &options);
    assert!(html.contains(".custom-class { color: red; }"));
}

#[test]
fn test_footer_year_is_pinned() {
    let footer = Element::with_defaults(ElementKind::Footer);
    let options = ExportOptions::default().with_copyright_year(2023);
    let html = render_html_with(&template().with_elements(vec![footer]), &options);
    assert!(html.contains("&copy; 2023 Your Company. All rights reserved."));
}

#[test]
fn test_export_is_repeatable() {
    let t = template().with_elements(vec![
        Element::with_defaults(ElementKind::Logo),
        Element::with_defaults(ElementKind::Divider),
        Element::with_defaults(ElementKind::Spacer),
    ]);
    let options = ExportOptions::default().with_copyright_year(2024);
    assert_eq!(render_html_with(&t, &options), render_html_with(&t, &options));
}

#[test]
fn test_imported_footer_without_tagline_renders_none() {
    let element: Element = serde_json::from_str(
        r#"{"id":"f1","type":"footer","content":{"companyName":"Acme","socialLinks":[]},"styles":{}}"#,
    )
    .unwrap();
    let html = render_html(&template().with_elements(vec![element]));

    assert!(html.contains("Acme"));
    assert!(!html.contains("Your company tagline"));
    assert!(!html.contains(r#"<p style="margin: 0;">"#));
    assert!(!html.contains("facebook.com"));
}

#[test]
fn test_json_export_round_trips() {
    let t = template().with_elements(vec![
        Element::with_defaults(ElementKind::Header),
        Element::with_defaults(ElementKind::Footer),
    ]);
    let json = render_json(&t);
    let parsed: Template = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, t);
    assert!(json.contains("\"createdAt\": \"2023-01-01T00:00:00.000Z\""));
}

mod props {
    use super::*;
    use proptest::prelude::*;

    fn kind_strategy() -> impl Strategy<Value = ElementKind> {
        proptest::sample::select(ElementKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_single_title_and_doctype(
            name in ".{0,40}",
            kinds in proptest::collection::vec(kind_strategy(), 0..8),
        ) {
            let elements = kinds.into_iter().map(Element::with_defaults).collect();
            let t = template().named(name.clone()).with_elements(elements);
            let html = render_html_with(&t, &ExportOptions::default().with_copyright_year(2024));

            prop_assert!(html.starts_with("<!DOCTYPE html>"));
            prop_assert_eq!(html.matches("<title>").count(), 1);
            let expected_title = format!("<title>{}</title>", email_export::escape_html(&name));
            prop_assert!(html.contains(&expected_title));
        }
    }
}
