//! fOS Static - Static subtree memoization
//!
//! Compiled components split their view into static subtrees, built by a
//! [`StaticBuilderTable`], and render logic that places them among the
//! dynamic parts. Each mounted instance owns a [`RenderInstanceState`]
//! whose cache builds every static subtree at most once.
//!
//! # Example
//! ```rust
//! use std::sync::Arc;
//! use fos_static::{CompiledComponent, RenderData, StaticBuilderTable};
//! use fos_vdom::Node;
//!
//! let statics = StaticBuilderTable::new()
//!     .with(|_| Ok(Node::element("h1").with_child(Node::text("Title"))));
//! let component = Arc::new(CompiledComponent::from_fn("page", statics, |scope| {
//!     Ok(scope
//!         .element("div")
//!         .with_child(scope.static_tree(0, false)?)
//!         .with_child(scope.text_node("body")?))
//! }));
//!
//! let mut state = fos_static::create_instance_state(&component);
//! let data = RenderData::new().with("body", "Hello");
//! let tree = fos_static::render(&mut state, &data).unwrap();
//! assert_eq!(tree.to_html(), "<div><h1>Title</h1>Hello</div>");
//! fos_static::destroy_instance_state(state);
//! ```

mod cache;
mod component;
mod composer;
mod config;
mod data;
mod error;
mod state;
mod statics;
mod template;

pub use cache::{CacheStats, OnceCache, StaticCache, StaticSlot};
pub use component::{CompiledComponent, FnLogic};
pub use composer::{render, RenderLogic, RenderScope};
pub use config::{CloneDepth, RenderConfig};
pub use data::{RenderData, Value};
pub use error::{RenderError, Result};
pub use state::RenderInstanceState;
pub use statics::{BuildContext, StaticBuilder, StaticBuilderTable, StaticEntry};
pub use template::{ElementTemplate, Template};

use std::sync::Arc;

/// Mount: create the state for a new instance of `component`
pub fn create_instance_state(component: &Arc<CompiledComponent>) -> RenderInstanceState {
    tracing::debug!(
        "Mounting {} ({} static builders)",
        component.name(),
        component.statics().len()
    );
    RenderInstanceState::new(Arc::clone(component))
}

/// Unmount: release the instance state and every subtree it cached
pub fn destroy_instance_state(state: RenderInstanceState) {
    let stats = state.stats();
    tracing::debug!(
        "Unmounting {} after {} renders: {} builds, {} hits, {} copies",
        state.component().name(),
        state.renders(),
        stats.builds,
        stats.hits,
        stats.clones
    );
    drop(state);
}
