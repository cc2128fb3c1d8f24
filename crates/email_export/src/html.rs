//! HTML export
//!
//! Produces a complete standalone document: doctype, head with title and
//! embedded baseline CSS, and a fixed-width container holding one fragment
//! per element in template order.
//!
//! Element text, URLs and image sources are interpolated as authored, not
//! escaped, so that rich text pasted into blocks survives export. Only the
//! document title is escaped.

use crate::style::{escape_html, inline_style, join_declarations};
use crate::ExportOptions;
use chrono::Datelike;
use doc_model::{Element, ElementContent, FooterContent, LogoContent, Template};

const BUTTON_PADDING: &str = "10px 20px";
const BUTTON_BACKGROUND: &str = "#3b82f6";
const BUTTON_COLOR: &str = "#ffffff";
const BUTTON_RADIUS: &str = "4px";
const BUTTON_WEIGHT: &str = "500";

const LINK_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// Render a template with default export options
pub fn render_html(template: &Template) -> String {
    render_html_with(template, &ExportOptions::default())
}

/// Render a template as a standalone HTML document
pub fn render_html_with(template: &Template, options: &ExportOptions) -> String {
    let elements_html = template
        .elements()
        .iter()
        .map(|element| render_element(element, options))
        .collect::<Vec<_>>()
        .join("\n");

    tracing::debug!(
        template_id = %template.id(),
        elements = template.len(),
        "rendered template to HTML"
    );

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
{styles}
  </style>
</head>
<body>
  <div class="email-container">
    <div class="content">
      {elements}
    </div>
  </div>
</body>
</html>"#,
        title = escape_html(&template.name),
        styles = document_styles(options),
        elements = elements_html,
    )
}

/// Baseline CSS for the embedded style block
fn document_styles(options: &ExportOptions) -> String {
    let mut css = format!(
        r#"    :root {{
      --background: #ffffff;
      --foreground: #000000;
      --border: #e5e7eb;
    }}
    body {{
      font-family: Arial, sans-serif;
      margin: 0;
      padding: 0;
      background-color: #f5f5f5;
      color: var(--foreground);
    }}
    .email-container {{
      max-width: {width}px;
      margin: 0 auto;
      background-color: var(--background);
    }}
    .content {{
      padding: 20px;
    }}"#,
        width = options.container_width,
    );

    if options.responsive {
        css.push_str(
            r#"
    @media only screen and (max-width: 480px) {
      .email-container {
        width: 100% !important;
      }
      .content {
        padding: 10px !important;
      }
    }"#,
        );
    }

    if let Some(custom) = options.custom_css.as_deref().filter(|c| !c.is_empty()) {
        css.push_str("\n    ");
        css.push_str(custom);
    }

    css
}

/// Render a single element as an HTML fragment
pub fn render_element(element: &Element, options: &ExportOptions) -> String {
    let style = inline_style(&element.styles);

    match element.content() {
        ElementContent::Header(header) => {
            let level = header.level.get();
            format!(r#"<h{level} style="{style}">{text}</h{level}>"#, text = header.text)
        }
        ElementContent::SubHeader(sub) => format!(r#"<h3 style="{}">{}</h3>"#, style, sub.text),
        ElementContent::Paragraph(p) => format!(r#"<p style="{}">{}</p>"#, style, p.text),
        ElementContent::Button(button) => {
            let get = |key: &str, fallback: &'static str| element.style(key).unwrap_or(fallback).to_string();
            let button_style = format!(
                "display: inline-block; text-decoration: none; padding: {}; background-color: {}; color: {}; border-radius: {}; font-weight: {}; text-align: center;",
                get("padding", BUTTON_PADDING),
                get("backgroundColor", BUTTON_BACKGROUND),
                get("color", BUTTON_COLOR),
                get("borderRadius", BUTTON_RADIUS),
                get("fontWeight", BUTTON_WEIGHT),
            );
            format!(
                r#"<a href="{}" style="{}">{}</a>"#,
                button.url,
                join_declarations(&style, &button_style),
                button.text
            )
        }
        ElementContent::Image(image) => format!(
            r#"<img src="{}" alt="{}" style="{}" />"#,
            image.src, image.alt, style
        ),
        ElementContent::Divider(_) => format!(r#"<hr style="{}" />"#, style),
        ElementContent::Spacer(spacer) => format!(
            r#"<div style="{}"></div>"#,
            join_declarations(&format!("height: {}px;", spacer.height), &style)
        ),
        ElementContent::Footer(footer) => render_footer(footer, &style, options),
        ElementContent::Logo(logo) => render_logo(logo, &style),
    }
}

fn render_footer(footer: &FooterContent, style: &str, options: &ExportOptions) -> String {
    let year = options
        .copyright_year
        .unwrap_or_else(|| chrono::Utc::now().year());

    let tagline = if footer.tagline.is_empty() {
        String::new()
    } else {
        format!("\n    <p style=\"margin: 0;\">{}</p>", footer.tagline)
    };

    let social = if footer.social_links.is_empty() {
        String::new()
    } else {
        let links: String = footer
            .social_links
            .iter()
            .map(|link| {
                format!(
                    r#"<a href="{}" {} style="color: inherit; text-decoration: none; display: inline-block; margin: 0 8px;">{}</a>"#,
                    link.url, LINK_ATTRS, link.platform
                )
            })
            .collect();
        format!("\n  <div style=\"margin-bottom: 16px;\">{}</div>", links)
    };

    format!(
        r#"<footer style="{style}">
  <div style="margin-bottom: 16px;">
    <h3 style="font-size: 18px; font-weight: bold; margin: 0 0 8px 0;">{company}</h3>{tagline}
  </div>{social}
  <div style="font-size: 12px; opacity: 0.8;">&copy; {year} {company}. All rights reserved.</div>
</footer>"#,
        company = footer.company_name,
    )
}

fn render_logo(logo: &LogoContent, style: &str) -> String {
    let img = format!(
        r#"<img src="{}" alt="{}" style="{}" />"#,
        logo.src,
        logo.alt,
        join_declarations(style, &format!("max-width: {}px; height: auto;", logo.max_width))
    );

    let inner = if logo.link.is_empty() {
        img
    } else {
        format!(
            r#"<a href="{}" {} style="display: inline-block;">{}</a>"#,
            logo.link, LINK_ATTRS, img
        )
    };

    format!(
        r#"<div style="text-align: {};">{}</div>"#,
        logo.alignment.as_str(),
        inner
    )
}
