//! XHTML serialization of parsed HTML trees.
//!
//! EPUB content documents must be well-formed XML, so void elements are
//! self-closed and text is escaped for XML. Comments, doctypes and
//! processing instructions are dropped, as are event-handler attributes
//! and attribute names that are not valid XML names.

use ego_tree::NodeRef;
use scraper::Node;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Serialize the children of `node` as an XHTML fragment.
pub fn serialize_children(node: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    for child in node.children() {
        write_node(child, &mut out);
    }
    out
}

fn write_node(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(element) => {
            let name = element.name();
            out.push('<');
            out.push_str(name);
            // Namespaced attributes share local names, e.g. `href` and `xlink:href`.
            let mut written: Vec<&str> = Vec::new();
            for (key, value) in element.attrs() {
                if !is_safe_attribute(key, value) || written.contains(&key) {
                    continue;
                }
                written.push(key);
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                out.push_str(&escape_attribute(value));
                out.push('"');
            }

            if VOID_ELEMENTS.contains(&name) {
                out.push_str("/>");
                return;
            }

            out.push('>');
            for child in node.children() {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        Node::Document | Node::Fragment => {
            for child in node.children() {
                write_node(child, out);
            }
        }
        _ => {}
    }
}

fn is_safe_attribute(key: &str, value: &str) -> bool {
    if key.len() > 2 && key.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("on")) {
        return false;
    }
    if matches!(key, "href" | "src")
        && value
            .trim_start()
            .get(..11)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript:"))
    {
        return false;
    }
    is_xml_name(key)
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

/// Escape text content for XML.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a double-quoted XML attribute value.
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
