//! Declarative Templates
//!
//! Render logic as data: a tree of element, text, field, static, once and
//! list instructions that the composer walks in declaration order.

use std::sync::Arc;

use fos_vdom::{Node, NodeRef};

use crate::{RenderError, RenderLogic, RenderScope, Result, StaticEntry};

/// Template instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// Element with its own child instructions
    Element(ElementTemplate),
    /// Literal text
    Text(String),
    /// Comment
    Comment(String),
    /// Text of a render-data field
    Field(String),
    /// Static placeholder
    Static(StaticEntry),
    /// Subtree rendered on the first pass only
    Once { index: usize, body: Box<Template> },
    /// Body repeated for every item of a list field
    List { field: String, body: Vec<Template> },
}

impl Template {
    pub fn element(tag: impl Into<String>) -> ElementTemplate {
        ElementTemplate::new(tag)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Template::Text(content.into())
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Template::Comment(content.into())
    }

    pub fn field(name: impl Into<String>) -> Self {
        Template::Field(name.into())
    }

    /// Placeholder sharing the cached static subtree
    pub fn static_shared(index: usize) -> Self {
        Template::Static(StaticEntry::shared(index))
    }

    /// Placeholder taking a copy of the cached static subtree
    pub fn static_copied(index: usize) -> Self {
        Template::Static(StaticEntry::copied(index))
    }

    pub fn once(index: usize, body: impl Into<Template>) -> Self {
        Template::Once {
            index,
            body: Box::new(body.into()),
        }
    }

    pub fn list(field: impl Into<String>, body: Vec<Template>) -> Self {
        Template::List {
            field: field.into(),
            body,
        }
    }

    /// Append the nodes this instruction produces to `out`
    fn emit(&self, scope: &mut RenderScope<'_>, out: &mut Vec<NodeRef>) -> Result<()> {
        match self {
            Template::Element(element) => out.push(Arc::new(element.instantiate(scope)?)),
            Template::Text(text) => out.push(Arc::new(Node::text(text.as_str()))),
            Template::Comment(text) => out.push(Arc::new(Node::comment(text.as_str()))),
            Template::Field(field) => out.push(Arc::new(scope.text_node(field)?)),
            Template::Static(entry) => out.push(scope.static_entry(*entry)?),
            Template::Once { index, body } => {
                out.push(scope.once(*index, |scope| body.render_single(scope))?)
            }
            Template::List { field, body } => {
                scope.each(field, |scope, _| {
                    for instruction in body {
                        instruction.emit(scope, out)?;
                    }
                    Ok(())
                })?;
            }
        }
        Ok(())
    }

    /// Render an instruction that must yield exactly one node
    fn render_single(&self, scope: &mut RenderScope<'_>) -> Result<Node> {
        let mut out = Vec::with_capacity(1);
        self.emit(scope, &mut out)?;
        if out.len() != 1 {
            return Err(RenderError::InvalidRoot { count: out.len() });
        }
        let Some(root) = out.pop() else {
            return Err(RenderError::InvalidRoot { count: 0 });
        };
        // A cached root is still referenced by the cache
        Ok(Arc::try_unwrap(root).unwrap_or_else(|shared| shared.shallow_clone()))
    }
}

impl RenderLogic for Template {
    fn render(&self, scope: &mut RenderScope<'_>) -> Result<Node> {
        self.render_single(scope)
    }
}

/// Element instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTemplate {
    pub tag: String,
    pub static_class: Option<String>,
    pub attrs: Vec<(String, String)>,
    pub pre: bool,
    pub children: Vec<Template>,
}

impl ElementTemplate {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            static_class: None,
            attrs: Vec::new(),
            pre: false,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.static_class = Some(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn pre(mut self) -> Self {
        self.pre = true;
        self
    }

    pub fn child(mut self, child: impl Into<Template>) -> Self {
        self.children.push(child.into());
        self
    }

    fn instantiate(&self, scope: &mut RenderScope<'_>) -> Result<Node> {
        let mut node = Node::element(self.tag.as_str());
        if let Some(class) = &self.static_class {
            node = node.with_static_class(class.as_str());
        }
        for (name, value) in &self.attrs {
            node = node.with_attr(name.as_str(), value.as_str());
        }
        if self.pre {
            node = node.with_pre();
        }

        let mut children = Vec::with_capacity(self.children.len());
        for child in &self.children {
            child.emit(scope, &mut children)?;
        }
        node.children = children;
        Ok(node)
    }
}

impl From<ElementTemplate> for Template {
    fn from(element: ElementTemplate) -> Self {
        Template::Element(element)
    }
}
