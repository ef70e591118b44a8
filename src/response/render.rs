//! HTML page rendering.
//!
//! Templates are embedded at compile time; `{{field}}` placeholders are
//! replaced with HTML-escaped values.

use crate::response::record::ResponseRecord;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const NOT_FOUND_TEMPLATE: &str = include_str!("../../templates/404.html");

/// Renders response records into HTML pages.
pub trait PageRenderer: Send + Sync {
    fn render_index(&self, record: &ResponseRecord) -> String;
    fn render_not_found(&self) -> String;
}

/// Renderer backed by the embedded templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer;

impl PageRenderer for TemplateRenderer {
    fn render_index(&self, record: &ResponseRecord) -> String {
        let user_agent = record.user_agent.as_deref().unwrap_or("");
        fill(
            INDEX_TEMPLATE,
            &[
                ("ip", record.ip.as_str()),
                ("city", record.city.as_str()),
                ("region_name", record.region_name.as_str()),
                ("country", record.country.as_str()),
                ("isp", record.isp.as_str()),
                ("proxy", record.proxy.as_str()),
                ("user_agent", user_agent),
            ],
        )
    }

    fn render_not_found(&self) -> String {
        NOT_FOUND_TEMPLATE.to_string()
    }
}

/// Single pass over the template; substituted values are never rescanned.
/// Unknown placeholders are copied through unchanged.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(&escape_html(value)),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
