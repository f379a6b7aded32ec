//! HTML serialization of the render tree.

use super::tree::{Element, RenderNode};
use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};

/// Elements written without an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serializes render nodes to an HTML string.
pub fn to_html(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &RenderNode, out: &mut String) {
    match node {
        RenderNode::Element(element) => write_element(element, out),
        RenderNode::Text { value } => {
            encode_text_to_string(value, out);
        }
        RenderNode::Comment { value } => {
            out.push_str("<!--");
            out.push_str(&escape_comment(value));
            out.push_str("-->");
        }
        RenderNode::Raw { value } => out.push_str(value),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        encode_double_quoted_attribute_to_string(value, out);
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }

    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

/// Neutralizes sequences that would end or nest the comment early.
fn escape_comment(value: &str) -> String {
    let mut escaped = value
        .replace("<!--", "&lt;!--")
        .replace("--!>", "--!&gt;")
        .replace("-->", "--&gt;");

    if escaped.starts_with('>') {
        escaped.replace_range(..1, "&gt;");
    } else if escaped.starts_with("->") {
        escaped.replace_range(1..2, "&gt;");
    }
    if escaped.ends_with("<!-") {
        let at = escaped.len() - 3;
        escaped.replace_range(at..at + 1, "&lt;");
    }
    escaped
}
