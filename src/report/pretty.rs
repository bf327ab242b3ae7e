//! Re-parse rendered report markup and re-indent it.
//!
//! The template output is well-formed XHTML, so it is parsed back into a
//! tree and serialized with one space of indentation per nesting level.

use crate::utils::error::ReportError;
use roxmltree::{Document, Node, NodeType};

const INDENT: &str = " ";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

// Text inside these is emitted verbatim
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Pretty-print HTML markup
///
/// **Public** - used by generate_report
///
/// # Errors
/// * `ReportError::Markup` - the markup is not well-formed
pub fn prettify_html(html: &str) -> Result<String, ReportError> {
    let (doctype, markup) = split_doctype(html);
    let document = Document::parse(markup).map_err(|e| ReportError::Markup(e.to_string()))?;

    let mut out = String::with_capacity(html.len());
    if let Some(doctype) = doctype {
        out.push_str(doctype);
        out.push('\n');
    }
    write_element(document.root_element(), 0, &mut out);

    Ok(out)
}

/// Split off a leading `<!DOCTYPE ...>`, which the XML parser rejects
///
/// **Private** - internal helper for prettify_html
fn split_doctype(html: &str) -> (Option<&str>, &str) {
    let trimmed = html.trim_start();
    let has_doctype = trimmed
        .get(..9)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("<!doctype"));

    if has_doctype {
        if let Some(end) = trimmed.find('>') {
            return (Some(&trimmed[..=end]), &trimmed[end + 1..]);
        }
    }

    (None, html)
}

fn write_element(node: Node, depth: usize, out: &mut String) {
    let pad = INDENT.repeat(depth);
    let name = node.tag_name().name();
    let raw = RAW_TEXT_ELEMENTS.contains(&name);

    let mut open = format!("<{}", name);
    for attr in node.attributes() {
        open.push_str(&format!(" {}=\"{}\"", attr.name(), escape_attr(attr.value())));
    }

    let children: Vec<Node> = node.children().filter(is_significant).collect();

    if children.is_empty() {
        if VOID_ELEMENTS.contains(&name) {
            out.push_str(&format!("{}{}/>\n", pad, open));
        } else {
            out.push_str(&format!("{}{}></{}>\n", pad, open, name));
        }
        return;
    }

    // Single-line text stays on the element's line
    if let [only] = children.as_slice() {
        let text = only.text().unwrap_or_default().trim();
        if only.is_text() && !text.contains('\n') {
            let text = if raw { text.to_string() } else { escape_text(text) };
            out.push_str(&format!("{}{}>{}</{}>\n", pad, open, text, name));
            return;
        }
    }

    out.push_str(&format!("{}{}>\n", pad, open));
    for child in children {
        write_node(child, depth + 1, raw, out);
    }
    out.push_str(&format!("{}</{}>\n", pad, name));
}

fn write_node(node: Node, depth: usize, raw: bool, out: &mut String) {
    let pad = INDENT.repeat(depth);

    match node.node_type() {
        NodeType::Element => write_element(node, depth, out),
        NodeType::Text => {
            let lines = node
                .text()
                .unwrap_or_default()
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty());

            for line in lines {
                let line = if raw { line.to_string() } else { escape_text(line) };
                out.push_str(&format!("{}{}\n", pad, line));
            }
        }
        NodeType::Comment => {
            out.push_str(&format!("{}<!--{}-->\n", pad, node.text().unwrap_or_default()));
        }
        _ => {}
    }
}

fn is_significant(node: &Node) -> bool {
    match node.node_type() {
        NodeType::Element | NodeType::Comment => true,
        NodeType::Text => node.text().is_some_and(|t| !t.trim().is_empty()),
        _ => false,
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
