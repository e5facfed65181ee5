//! # textup
//!
//! Convert inline text nodes to a markup tree and render it.
//!
//! A `TextNode` is the intermediate representation an inline Markdown
//! lexer produces: one span of source text plus its semantic role
//! (plain/bold/italic/code/link/image) and an optional URL. This crate
//! maps each text node to a markup leaf and assembles leaves into a
//! renderable tree.
//!
//! ## Design
//!
//! The crate does no parsing itself. Any lexer that produces `TextNode`
//! values can drive it, and the only two calls a driver needs are
//! [`text_node_to_markup_node`] and `MarkupNode::render`. This keeps
//! the pipeline parser agnostic and purely synchronous: nodes are
//! immutable once built and rendering never mutates, so disjoint (or
//! even shared) trees can be rendered from multiple threads.
//!
//! ## Example
//!
//! ```rust
//! use textup::{render_inline, TextNode, TextType};
//!
//! let nodes = vec![
//!     TextNode::new("Hello, ", TextType::Text),
//!     TextNode::new("world", TextType::Bold),
//! ];
//!
//! let markup = render_inline(&nodes, "p").unwrap();
//! assert_eq!(markup, "<p>Hello, <b>world</b></p>");
//! ```

mod convert;
mod text;

pub use convert::{render_inline, text_node_to_markup_node};
pub use text::{TextNode, TextType};
pub use textup_core::{Attributes, LeafNode, MarkupNode, ParentNode, StructuralError};

/// Error type for textup operations
#[derive(Debug, thiserror::Error)]
pub enum TextupError {
    /// A type tag outside the closed enumeration, e.g. from a
    /// deserialized input
    #[error("unsupported text type: {0}")]
    UnsupportedType(String),

    /// A node violated its shape contract at render time
    #[error(transparent)]
    Structural(#[from] StructuralError),
}

pub type Result<T> = std::result::Result<T, TextupError>;
