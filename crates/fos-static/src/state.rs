//! Render Instance State
//!
//! Everything one mounted component instance keeps between render passes.
//! Created at mount, filled lazily as static indices are first requested,
//! dropped at unmount.

use std::fmt;
use std::sync::Arc;

use crate::{CacheStats, CompiledComponent, OnceCache, StaticCache};

/// Per-instance render state
pub struct RenderInstanceState {
    component: Arc<CompiledComponent>,
    pub(crate) statics: StaticCache,
    pub(crate) once: OnceCache,
    renders: u64,
    first_render_complete: bool,
}

impl RenderInstanceState {
    /// Fresh state for one instance of `component`
    pub fn new(component: Arc<CompiledComponent>) -> Self {
        let statics = StaticCache::with_slots(component.statics().len());
        Self {
            component,
            statics,
            once: OnceCache::new(),
            renders: 0,
            first_render_complete: false,
        }
    }

    pub fn component(&self) -> &Arc<CompiledComponent> {
        &self.component
    }

    /// Static subtree cache
    pub fn cache(&self) -> &StaticCache {
        &self.statics
    }

    /// Once-rendered subtrees
    pub fn once_cache(&self) -> &OnceCache {
        &self.once
    }

    /// Completed render passes
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Whether the first render pass has completed
    pub fn first_render_complete(&self) -> bool {
        self.first_render_complete
    }

    pub fn stats(&self) -> CacheStats {
        self.statics.stats()
    }

    /// Forget all memoized subtrees
    pub fn clear(&mut self) {
        self.statics.clear();
        self.once.clear();
    }

    pub(crate) fn finish_pass(&mut self) {
        self.once.commit();
        self.renders += 1;
        self.first_render_complete = true;
    }
}

impl fmt::Debug for RenderInstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderInstanceState")
            .field("component", &self.component.name())
            .field("statics", &self.statics.stats())
            .field("once", &self.once.len())
            .field("renders", &self.renders)
            .field("first_render_complete", &self.first_render_complete)
            .finish()
    }
}
