//! Virtual Node
//!
//! One element, text or comment of a rendered tree. Nodes are built
//! bottom-up with the `with_*` methods and frozen once they are wrapped
//! in a [`NodeRef`].

use std::sync::Arc;

use crate::NodeRef;

/// Kind discriminator of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Text,
    Comment,
}

/// Virtual node
///
/// Equality is structural: two nodes are equal when they have the same
/// kind, content, markers and children, whatever their identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node-specific data
    pub data: NodeData,
    /// Children in document order
    pub children: Vec<NodeRef>,
    /// Reconciler key (`__static__N` for memoized roots)
    pub key: Option<String>,
    /// Root of a memoized static subtree
    pub is_static: bool,
    /// Root of a subtree rendered only on the first pass
    pub is_once: bool,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            data,
            children: Vec::new(),
            key: None,
            is_static: false,
            is_once: false,
        }
    }

    /// Create a new element node
    pub fn element(tag: impl Into<String>) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a new comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Comment(content.into()))
    }

    /// Node kind
    #[inline]
    pub fn kind(&self) -> NodeKind {
        match &self.data {
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
            NodeData::Comment(_) => NodeKind::Comment,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Tag name of an element
    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag.as_str())
    }

    /// Attribute lookup on an element
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element().and_then(|e| e.get_attr(name))
    }

    /// Children in document order
    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Append a child
    pub fn with_child(mut self, child: impl Into<NodeRef>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children, keeping their order
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NodeRef>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Set an attribute (no-op on text and comment nodes)
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Some(element) = self.as_element_mut() {
            element.set_attr(name, value);
        }
        self
    }

    /// Set the literal class list
    pub fn with_static_class(mut self, class: impl Into<String>) -> Self {
        if let Some(element) = self.as_element_mut() {
            element.static_class = Some(class.into());
        }
        self
    }

    /// Bind a named handler to an event
    pub fn with_event(mut self, event: impl Into<String>, handler: impl Into<String>) -> Self {
        if let Some(element) = self.as_element_mut() {
            element.events.push(EventBinding {
                event: event.into(),
                handler: handler.into(),
            });
        }
        self
    }

    /// Mark the element as verbatim content (`<pre>` blocks of code)
    pub fn with_pre(mut self) -> Self {
        if let Some(element) = self.as_element_mut() {
            element.pre = true;
        }
        self
    }

    /// Set the reconciler key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Copy of this node where every descendant gets a fresh identity
    pub fn deep_clone(&self) -> Node {
        Node {
            data: self.data.clone(),
            children: self
                .children
                .iter()
                .map(|child| Arc::new(child.deep_clone()))
                .collect(),
            key: self.key.clone(),
            is_static: self.is_static,
            is_once: self.is_once,
        }
    }

    /// Copy of this node that shares its children with the original
    pub fn shallow_clone(&self) -> Node {
        self.clone()
    }

    /// Number of nodes in this subtree, including itself
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(|c| c.subtree_len()).sum::<usize>()
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.data {
            NodeData::Text(t) => out.push_str(t),
            NodeData::Element(_) => {
                for child in &self.children {
                    child.collect_text(out);
                }
            }
            NodeData::Comment(_) => {}
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Tag name, or component name for child components
    pub tag: String,
    /// Attributes in declaration order
    pub attrs: Vec<Attribute>,
    /// Literal class list
    pub static_class: Option<String>,
    /// Event bindings
    pub events: Vec<EventBinding>,
    /// Verbatim content, children are not compiled
    pub pre: bool,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            static_class: None,
            events: Vec::new(),
            pre: false,
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        // Replace in place to keep declaration order
        for attr in self.attrs.iter_mut() {
            if attr.name == name {
                attr.value = value;
                return;
            }
        }
        self.attrs.push(Attribute { name, value });
    }
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Event binding descriptor
///
/// Handlers are referenced by name; the host resolves them when patching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBinding {
    pub event: String,
    pub handler: String,
}
