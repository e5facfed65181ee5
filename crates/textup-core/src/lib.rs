//! textup-core - markup tree and rendering
//!
//! This crate provides the generic markup tree that `textup` targets:
//! leaf nodes carrying a terminal value and parent nodes carrying a tag
//! plus ordered children. Every node renders itself to a markup string.
//!
//! # Architecture
//!
//! ```text
//! TextNode values ──convert──▶ ┌─────────────┐
//!                              │             │
//!                              │ Markup tree │ ──render──▶ Markup String
//! Hand-built trees ───────────▶│             │
//!                              └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use textup_core::{LeafNode, MarkupNode, ParentNode};
//!
//! let tree = ParentNode::new(
//!     "p",
//!     vec![
//!         MarkupNode::text("Hello, "),
//!         MarkupNode::Leaf(LeafNode::element("b", "world")),
//!     ],
//! );
//!
//! assert_eq!(tree.render().unwrap(), "<p>Hello, <b>world</b></p>");
//! ```

mod ast;
mod render;

pub use ast::{Attributes, LeafNode, MarkupNode, ParentNode};
pub use render::render_attributes;

/// Error raised when a node violates its shape contract at render time.
///
/// Rendering is never retried or degraded; the caller must fix the tree
/// before rendering again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// A leaf node was rendered without a value
    #[error("missing value")]
    MissingValue,

    /// A parent node was rendered without a tag
    #[error("missing tag")]
    MissingTag,

    /// A parent node was rendered without a children sequence
    #[error("missing children")]
    MissingChildren,
}

pub type Result<T> = std::result::Result<T, StructuralError>;
