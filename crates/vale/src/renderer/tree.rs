//! Render tree produced from the mdast before serialization.

use serde::Serialize;

/// A node of the HTML-shaped render tree.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderNode {
    /// An HTML element.
    Element(Element),
    /// Text content, escaped on serialization.
    Text {
        /// The unescaped text.
        value: String,
    },
    /// An HTML comment.
    Comment {
        /// The comment body, between `<!--` and `-->`.
        value: String,
    },
    /// Raw HTML written as-is.
    Raw {
        /// The HTML.
        value: String,
    },
}

impl RenderNode {
    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        RenderNode::Text {
            value: value.into(),
        }
    }

    /// Creates a comment node.
    pub fn comment(value: impl Into<String>) -> Self {
        RenderNode::Comment {
            value: value.into(),
        }
    }

    /// Creates a raw HTML node.
    pub fn raw(value: impl Into<String>) -> Self {
        RenderNode::Raw {
            value: value.into(),
        }
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            RenderNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns true for an element with the given tag name.
    pub fn is_element(&self, tag: &str) -> bool {
        self.as_element().is_some_and(|element| element.tag == tag)
    }
}

impl From<Element> for RenderNode {
    fn from(element: Element) -> Self {
        RenderNode::Element(element)
    }
}

/// An HTML element with ordered, unique attributes.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Element {
    /// Tag name (e.g., "p", "code").
    pub tag: String,
    /// Attributes in insertion order.
    pub attributes: Vec<(String, String)>,
    /// Child nodes.
    pub children: Vec<RenderNode>,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing an existing value for the same key.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Appends one child.
    pub fn with_child(mut self, child: impl Into<RenderNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns the value of an attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_keep_insertion_order_and_stay_unique() {
        let mut element = Element::new("div")
            .with_attribute("class", "a")
            .with_attribute("data-component", "Note");
        element.set_attribute("class", "b");

        assert_eq!(
            element.attributes,
            vec![
                ("class".to_string(), "b".to_string()),
                ("data-component".to_string(), "Note".to_string()),
            ]
        );
        assert_eq!(element.attribute("class"), Some("b"));
        assert_eq!(element.attribute("id"), None);
    }

    #[test]
    fn serializes_with_type_tag() {
        let node: RenderNode = Element::new("p").with_child(RenderNode::text("hi")).into();
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["type"], "element");
        assert_eq!(json["tag"], "p");
        assert_eq!(json["children"][0]["type"], "text");
        assert_eq!(json["children"][0]["value"], "hi");
    }
}
