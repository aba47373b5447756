//! Render faults
//!
//! Every variant is a contract violation between compiled render code, its
//! static table and the data it is fed. None of them is recoverable inside
//! a render pass.

/// Render error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Static index {index} out of range for builder table of length {len}")]
    StaticIndexOutOfRange { index: usize, len: usize },

    #[error("Static builder {index} reaches itself through nested fragments")]
    StaticCycle { index: usize },

    #[error("Static fragments nested deeper than {depth}")]
    StaticDepthExceeded { depth: usize },

    #[error("Render data is missing field `{field}`")]
    MissingField { field: String },

    #[error("Render data field `{field}` is not {expected}")]
    TypeMismatch { field: String, expected: &'static str },

    #[error("Template root produced {count} nodes, expected exactly one")]
    InvalidRoot { count: usize },
}

/// Result alias for render operations
pub type Result<T> = std::result::Result<T, RenderError>;
