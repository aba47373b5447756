//! fOS Docs - Compiled documentation pages
//!
//! Pages arrive from the markdown compiler as a render function plus a
//! table of static builders. This crate holds them in that form so they
//! can be mounted like any other component.

mod highlight;
mod page;

pub use highlight::{code_block, Token};
pub use page::{appendix_a, APPENDIX_A_FILE, APPENDIX_A_STATICS};
