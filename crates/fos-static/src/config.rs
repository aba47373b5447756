//! Render Configuration

use serde::Deserialize;

/// How a cached static subtree is copied when a placeholder asks for a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloneDepth {
    /// Every node of the copy gets a fresh identity
    #[default]
    Deep,
    /// Only the root is fresh, descendants are shared with the cached tree
    Shallow,
}

/// Render configuration options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Copy depth for `reuse_copy` placeholders
    pub clone_depth: CloneDepth,

    /// Maximum nesting of static builders calling other builders
    pub max_static_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clone_depth: CloneDepth::Deep,
            max_static_depth: 64,
        }
    }
}
