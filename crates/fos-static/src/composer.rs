//! Render Composer
//!
//! Runs a component's render logic for one pass and assembles the tree.
//! Static placeholders go through the instance's [`StaticCache`]; dynamic
//! expressions read the render data. Any fault aborts the whole pass, so a
//! caller never sees a half-built tree.

use std::sync::Arc;

use fos_vdom::{Node, NodeRef};

use crate::{
    CompiledComponent, OnceCache, RenderConfig, RenderData, RenderError, RenderInstanceState,
    Result, StaticCache, StaticEntry, Value,
};

/// Compiled render logic of a component
pub trait RenderLogic: Send + Sync {
    /// Produce the root node for one render pass
    fn render(&self, scope: &mut RenderScope<'_>) -> Result<Node>;
}

/// Runtime helpers available to render logic during one pass
pub struct RenderScope<'a> {
    component: &'a CompiledComponent,
    cache: &'a mut StaticCache,
    once: &'a mut OnceCache,
    /// Data frames, innermost list item last
    frames: Vec<&'a RenderData>,
    /// Positions inside enclosing lists, innermost last
    positions: Vec<usize>,
}

impl<'a> RenderScope<'a> {
    /// Create an element node
    pub fn element(&self, tag: impl Into<String>) -> Node {
        Node::element(tag)
    }

    /// Create a literal text node
    pub fn text(&self, content: impl Into<String>) -> Node {
        Node::text(content)
    }

    /// Create a comment node
    pub fn comment(&self, content: impl Into<String>) -> Node {
        Node::comment(content)
    }

    /// Static subtree at `index`, from cache when already built
    pub fn static_tree(&mut self, index: usize, reuse_copy: bool) -> Result<NodeRef> {
        self.static_entry(StaticEntry { index, reuse_copy })
    }

    /// Static subtree for a placeholder
    pub fn static_entry(&mut self, entry: StaticEntry) -> Result<NodeRef> {
        let component = self.component;
        self.cache
            .get_or_build(component.statics(), entry, component.config())
    }

    /// Look up a field, innermost list item first
    pub fn value(&self, field: &str) -> Result<&'a Value> {
        self.frames
            .iter()
            .rev()
            .copied()
            .find_map(|frame: &'a RenderData| frame.get(field))
            .ok_or_else(|| RenderError::MissingField {
                field: field.to_string(),
            })
    }

    /// Text form of a scalar field
    pub fn text_of(&self, field: &str) -> Result<String> {
        self.value(field)?
            .to_text()
            .ok_or_else(|| RenderError::TypeMismatch {
                field: field.to_string(),
                expected: "a scalar",
            })
    }

    /// Text node holding a scalar field
    pub fn text_node(&self, field: &str) -> Result<Node> {
        self.text_of(field).map(Node::text)
    }

    /// Boolean field
    pub fn flag(&self, field: &str) -> Result<bool> {
        match self.value(field)? {
            Value::Bool(b) => Ok(*b),
            _ => Err(RenderError::TypeMismatch {
                field: field.to_string(),
                expected: "a boolean",
            }),
        }
    }

    /// Visit every item of a list field with the item's fields in scope
    pub fn each<F>(&mut self, field: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&mut Self, usize) -> Result<()>,
    {
        let items = self.value(field)?.as_list().ok_or_else(|| RenderError::TypeMismatch {
            field: field.to_string(),
            expected: "a list",
        })?;

        for (position, item) in items.iter().enumerate() {
            self.frames.push(item);
            self.positions.push(position);
            let result = f(self, position);
            self.positions.pop();
            self.frames.pop();
            result?;
        }
        Ok(())
    }

    /// Render one node per item of a list field
    pub fn list<F>(&mut self, field: &str, mut f: F) -> Result<Vec<NodeRef>>
    where
        F: FnMut(&mut Self, usize) -> Result<Node>,
    {
        let mut out = Vec::new();
        self.each(field, |scope, position| {
            out.push(Arc::new(f(scope, position)?));
            Ok(())
        })?;
        Ok(out)
    }

    /// Subtree rendered on the first pass only
    ///
    /// Inside lists the key carries the position in every enclosing list,
    /// so each item of each nested list keeps its own copy.
    pub fn once<F>(&mut self, index: usize, f: F) -> Result<NodeRef>
    where
        F: FnOnce(&mut Self) -> Result<Node>,
    {
        let key = self
            .positions
            .iter()
            .fold(format!("__once__{index}"), |key, position| format!("{key}_{position}"));
        if let Some(node) = self.once.hit(&key) {
            return Ok(node);
        }

        let mut node = f(self)?;
        node.is_static = true;
        node.is_once = true;
        node.key = Some(key.clone());
        let node = Arc::new(node);
        tracing::trace!("Rendered once subtree {}", key);
        self.once.insert(key, Arc::clone(&node));
        Ok(node)
    }

    /// Configuration of the component being rendered
    pub fn config(&self) -> &RenderConfig {
        self.component.config()
    }
}

/// Run one render pass for an instance
///
/// Static subtrees built during an aborted pass stay cached, builders are
/// pure so they remain valid for the next pass. Once subtrees read render
/// data, so the ones an aborted pass rendered are dropped.
pub fn render(state: &mut RenderInstanceState, data: &RenderData) -> Result<NodeRef> {
    let component = Arc::clone(state.component());
    let pass = state.renders() + 1;
    tracing::debug!("Render pass {} of {}", pass, component.name());

    let mut scope = RenderScope {
        component: &component,
        cache: &mut state.statics,
        once: &mut state.once,
        frames: vec![data],
        positions: Vec::new(),
    };

    let root = match component.logic().render(&mut scope) {
        Ok(root) => root,
        Err(err) => {
            state.once.rollback();
            tracing::debug!("Render pass {} of {} aborted: {}", pass, component.name(), err);
            return Err(err);
        }
    };

    state.finish_pass();
    Ok(Arc::new(root))
}
