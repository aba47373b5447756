//! Static Builder Table
//!
//! Ordered table of builders, one per static subtree of a compiled
//! component. A builder takes no render-time input and returns a freshly
//! constructed subtree; positions are fixed for the lifetime of the
//! component, so compiled render code refers to them by index.

use std::fmt;

use fos_vdom::Node;

use crate::{RenderError, Result};

/// Boxed static builder
pub type StaticBuilder = Box<dyn Fn(&mut BuildContext<'_>) -> Result<Node> + Send + Sync>;

/// A static placeholder in compiled render code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticEntry {
    /// Position in the builder table
    pub index: usize,
    /// Placeholder needs its own copy (it sits in a list or appears twice)
    pub reuse_copy: bool,
}

impl StaticEntry {
    /// Placeholder that may share the cached subtree
    pub const fn shared(index: usize) -> Self {
        Self { index, reuse_copy: false }
    }

    /// Placeholder that needs a private copy of the cached subtree
    pub const fn copied(index: usize) -> Self {
        Self { index, reuse_copy: true }
    }
}

/// Ordered collection of static builders
#[derive(Default)]
pub struct StaticBuilderTable {
    builders: Vec<StaticBuilder>,
}

impl StaticBuilderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a builder, returning its index
    pub fn push<F>(&mut self, builder: F) -> usize
    where
        F: Fn(&mut BuildContext<'_>) -> Result<Node> + Send + Sync + 'static,
    {
        self.builders.push(Box::new(builder));
        self.builders.len() - 1
    }

    /// Builder-style append
    pub fn with<F>(mut self, builder: F) -> Self
    where
        F: Fn(&mut BuildContext<'_>) -> Result<Node> + Send + Sync + 'static,
    {
        self.push(builder);
        self
    }

    /// Number of builders
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Run the builder at `index`, allowing at most `max_depth` nested fragments
    pub fn build(&self, index: usize, max_depth: usize) -> Result<Node> {
        let mut cx = BuildContext {
            table: self,
            stack: Vec::new(),
            max_depth,
        };
        cx.nested(index)
    }
}

impl fmt::Debug for StaticBuilderTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticBuilderTable")
            .field("len", &self.builders.len())
            .finish()
    }
}

/// Context handed to a running builder
///
/// Gives access to the rest of the table for nested static fragments and
/// nothing else; builders never see render-time data.
pub struct BuildContext<'a> {
    table: &'a StaticBuilderTable,
    /// Indices currently being built, outermost first
    stack: Vec<usize>,
    max_depth: usize,
}

impl BuildContext<'_> {
    /// Build another static fragment inline
    pub fn nested(&mut self, index: usize) -> Result<Node> {
        let table = self.table;
        let builder = table.builders.get(index).ok_or(RenderError::StaticIndexOutOfRange {
            index,
            len: table.len(),
        })?;

        if self.stack.contains(&index) {
            return Err(RenderError::StaticCycle { index });
        }
        if self.stack.len() >= self.max_depth {
            return Err(RenderError::StaticDepthExceeded { depth: self.max_depth });
        }

        self.stack.push(index);
        let result = builder(self);
        self.stack.pop();
        result
    }

    /// Current nesting depth (1 inside a top-level builder)
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_positions() {
        let mut table = StaticBuilderTable::new();
        assert_eq!(table.push(|_| Ok(Node::element("h1"))), 0);
        assert_eq!(table.push(|_| Ok(Node::element("h2"))), 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.build(1, 8).unwrap().tag(), Some("h2"));
    }

    #[test]
    fn test_out_of_range_index() {
        let table = StaticBuilderTable::new().with(|_| Ok(Node::element("h1")));
        assert_eq!(
            table.build(3, 8),
            Err(RenderError::StaticIndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_nested_fragment() {
        let table = StaticBuilderTable::new()
            .with(|cx| Ok(Node::element("blockquote").with_child(cx.nested(1)?)))
            .with(|cx| {
                assert_eq!(cx.depth(), 2);
                Ok(Node::element("p").with_child(Node::text("inner")))
            });

        let node = table.build(0, 8).unwrap();
        assert_eq!(node.to_html(), "<blockquote><p>inner</p></blockquote>");
    }

    #[test]
    fn test_cycle_detected() {
        let table = StaticBuilderTable::new()
            .with(|cx| Ok(Node::element("div").with_child(cx.nested(1)?)))
            .with(|cx| Ok(Node::element("div").with_child(cx.nested(0)?)));

        assert_eq!(table.build(0, 8), Err(RenderError::StaticCycle { index: 0 }));
    }

    #[test]
    fn test_depth_limit() {
        let mut table = StaticBuilderTable::new();
        for i in 0..4 {
            table.push(move |cx| {
                if i == 3 {
                    Ok(Node::text("leaf"))
                } else {
                    Ok(Node::element("div").with_child(cx.nested(i + 1)?))
                }
            });
        }

        assert!(table.build(0, 4).is_ok());
        assert_eq!(
            table.build(0, 3),
            Err(RenderError::StaticDepthExceeded { depth: 3 })
        );
    }
}
