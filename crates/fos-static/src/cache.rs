//! Static Cache
//!
//! Per-instance memoization of static subtrees. Indices are dense and known
//! when the component is compiled, so the cache is a fixed slot array
//! indexed directly rather than a hash map.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use fos_vdom::{Node, NodeRef};

use crate::{CloneDepth, RenderConfig, RenderError, Result, StaticBuilderTable, StaticEntry};

/// A cached static subtree
#[derive(Debug, Clone)]
pub struct StaticSlot {
    /// The subtree as first built
    pub node: NodeRef,
    /// Served from cache at least once since it was built
    pub reused: bool,
}

/// Slot array of built static subtrees
#[derive(Debug, Default)]
pub struct StaticCache {
    slots: Vec<Option<StaticSlot>>,
    builds: u64,
    hits: u64,
    clones: u64,
}

impl StaticCache {
    /// Create an empty cache sized to a builder table
    pub fn with_slots(len: usize) -> Self {
        Self {
            slots: vec![None; len],
            ..Self::default()
        }
    }

    /// Return the subtree for `entry`, building it on first request
    ///
    /// The first request always returns the stored subtree itself. Later
    /// requests share it, or hand out a copy when `entry.reuse_copy` is set.
    pub fn get_or_build(
        &mut self,
        table: &StaticBuilderTable,
        entry: StaticEntry,
        config: &RenderConfig,
    ) -> Result<NodeRef> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(entry.index)
            .ok_or(RenderError::StaticIndexOutOfRange { index: entry.index, len })?;

        if let Some(cached) = slot.as_mut() {
            cached.reused = true;
            self.hits += 1;
            if !entry.reuse_copy {
                tracing::trace!("Static {} served from cache", entry.index);
                return Ok(Arc::clone(&cached.node));
            }
            self.clones += 1;
            tracing::trace!("Static {} copied from cache ({:?})", entry.index, config.clone_depth);
            let copy = match config.clone_depth {
                CloneDepth::Deep => cached.node.deep_clone(),
                CloneDepth::Shallow => cached.node.shallow_clone(),
            };
            return Ok(Arc::new(copy));
        }

        let mut node = table.build(entry.index, config.max_static_depth)?;
        mark_static(&mut node, entry.index);
        let node = Arc::new(node);
        *slot = Some(StaticSlot {
            node: Arc::clone(&node),
            reused: false,
        });
        self.builds += 1;
        tracing::debug!("Built static {} ({} nodes)", entry.index, node.subtree_len());
        Ok(node)
    }

    /// Cached slot at `index`, if built
    pub fn slot(&self, index: usize) -> Option<&StaticSlot> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Check if `index` has been built
    pub fn is_cached(&self, index: usize) -> bool {
        self.slot(index).is_some()
    }

    /// Number of slots (builder table length)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop every cached subtree; the next request rebuilds
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        tracing::debug!("Static cache cleared ({} slots)", self.slots.len());
    }

    /// Stats
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            slots: self.slots.len(),
            cached: self.slots.iter().filter(|s| s.is_some()).count(),
            builds: self.builds,
            hits: self.hits,
            clones: self.clones,
        }
    }
}

/// Mark a freshly built subtree root as static
fn mark_static(node: &mut Node, index: usize) {
    node.is_static = true;
    node.key = Some(format!("__static__{index}"));
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Slot count (builder table length)
    pub slots: usize,
    /// Slots currently holding a subtree
    pub cached: usize,
    /// Builder invocations
    pub builds: u64,
    /// Requests served from cache
    pub hits: u64,
    /// Copies handed out for `reuse_copy` placeholders
    pub clones: u64,
}

/// Subtrees rendered on the first pass only, keyed by their once key
///
/// Keys are tracked per pass. A successful pass evicts every entry it did
/// not reach, so positions of a list that shrank are rendered afresh when
/// the list grows again. An aborted pass forgets the entries it inserted.
#[derive(Debug, Default)]
pub struct OnceCache {
    entries: HashMap<String, NodeRef>,
    /// Keys reached during the current pass
    touched: HashSet<String>,
    /// Keys first inserted during the current pass
    inserted: Vec<String>,
}

impl OnceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a subtree without counting it as reached
    pub fn get(&self, key: &str) -> Option<&NodeRef> {
        self.entries.get(key)
    }

    /// Look up a subtree and keep it alive for the current pass
    pub fn hit(&mut self, key: &str) -> Option<NodeRef> {
        let node = Arc::clone(self.entries.get(key)?);
        self.touched.insert(key.to_string());
        Some(node)
    }

    pub fn insert(&mut self, key: String, node: NodeRef) {
        self.touched.insert(key.clone());
        if self.entries.insert(key.clone(), node).is_none() {
            self.inserted.push(key);
        }
    }

    /// Close a successful pass, dropping every entry it did not reach
    pub fn commit(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| self.touched.contains(key));
        self.touched.clear();
        self.inserted.clear();

        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::debug!("Evicted {} once subtrees", evicted);
        }
        evicted
    }

    /// Close an aborted pass, dropping the entries it inserted
    pub fn rollback(&mut self) {
        for key in self.inserted.drain(..) {
            self.entries.remove(&key);
        }
        self.touched.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.touched.clear();
        self.inserted.clear();
    }
}
