//! Markup escaping and `<mark>` rendering

use std::collections::BTreeMap;

/// Append `text` to `out`, escaping `&`, `<` and `>`
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Escape `&`, `<` and `>` in text content
///
/// # Example
///
/// ```
/// use hashedix_search::markup::escape;
///
/// assert_eq!(escape("salt & <pepper>"), "salt &amp; &lt;pepper&gt;");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Escape text for use inside a double-quoted attribute value
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            _ => escape_into(&mut out, c.encode_utf8(&mut [0; 4])),
        }
    }
    out
}

/// Wrap already-escaped content in a `<mark>` element.
///
/// Attributes are rendered in key order as ` key="value"`.
pub fn render_match(out: &mut String, content: &str, attributes: Option<&BTreeMap<String, String>>) {
    out.push_str("<mark");
    for (key, value) in attributes.into_iter().flatten() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
    out.push('>');
    out.push_str(content);
    out.push_str("</mark>");
}
