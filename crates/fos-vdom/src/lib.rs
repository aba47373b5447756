//! fOS VDOM - Virtual node tree
//!
//! The tree a component render pass hands to the reconciler.
//! Parents own their children; a child slot holds an `Arc<Node>` so that
//! memoized static subtrees can be attached without copying them.

mod node;
mod serialize;

pub use node::{Attribute, ElementData, EventBinding, Node, NodeData, NodeKind};
pub use serialize::{escape_attr, escape_text, is_void_element};

use std::sync::Arc;

/// Shared handle to a node
pub type NodeRef = Arc<Node>;

/// Check whether two handles point at the very same node (identity, not shape)
#[inline]
pub fn same_node(a: &NodeRef, b: &NodeRef) -> bool {
    Arc::ptr_eq(a, b)
}
