//! HTML Serialization
//!
//! Renders a virtual tree to markup. Used for server output and snapshots,
//! the reconciler consumes the tree directly.

use crate::{Node, NodeData};

/// Void elements (no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Raw text elements (no escaping for content)
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Check if a tag never has an end tag
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

impl Node {
    /// Serialize the node and its descendants (outerHTML)
    ///
    /// Event bindings are not serialized; keys and markers are dropped too.
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        serialize_node(self, &mut output);
        tracing::trace!("Serialized {} bytes of markup", output.len());
        output
    }

    /// Serialize only the children (innerHTML)
    pub fn inner_html(&self) -> String {
        let mut output = String::new();
        for child in &self.children {
            serialize_node(child, &mut output);
        }
        output
    }
}

fn serialize_node(node: &Node, output: &mut String) {
    match &node.data {
        NodeData::Element(elem) => {
            let tag = elem.tag.as_str();

            output.push('<');
            output.push_str(tag);

            if let Some(class) = &elem.static_class {
                output.push_str(" class=\"");
                escape_attr(class, output);
                output.push('"');
            }

            for attr in &elem.attrs {
                output.push(' ');
                output.push_str(&attr.name);
                if !attr.value.is_empty() {
                    output.push_str("=\"");
                    escape_attr(&attr.value, output);
                    output.push('"');
                }
            }

            if is_void_element(tag) {
                output.push_str(" />");
                return;
            }
            output.push('>');

            if RAW_TEXT_ELEMENTS.contains(&tag) {
                for child in &node.children {
                    if let NodeData::Text(text) = &child.data {
                        output.push_str(text);
                    }
                }
            } else {
                for child in &node.children {
                    serialize_node(child, output);
                }
            }

            output.push_str("</");
            output.push_str(tag);
            output.push('>');
        }
        NodeData::Text(text) => escape_text(text, output),
        NodeData::Comment(text) => {
            output.push_str("<!--");
            output.push_str(text);
            output.push_str("-->");
        }
    }
}

/// Escape text content for HTML
pub fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value
pub fn escape_attr(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}
