//! Text node to markup node conversion.
//!
//! Maps each `TextNode` to the markup leaf its role calls for, and
//! assembles converted leaves into a renderable tree.

use textup_core::{LeafNode, MarkupNode, ParentNode};

use crate::text::{TextNode, TextType};
use crate::Result;

/// Convert a text node to the markup leaf its type calls for.
///
/// Pure and total over the closed `TextType` enumeration. Plain text
/// becomes an untagged leaf; links carry an `href` attribute; images
/// always render an empty value with the text demoted to `alt`. An
/// absent URL passes through as an empty attribute value; the producing
/// lexer is responsible for supplying one.
///
/// Returns `Result` so drivers handle a single error channel together
/// with rendering; with the enum matched exhaustively every arm
/// succeeds, and unknown type tags fail earlier, in
/// [`TextType::from_str`](std::str::FromStr).
pub fn text_node_to_markup_node(node: &TextNode) -> Result<MarkupNode> {
    let leaf = match node.text_type {
        TextType::Text => LeafNode::text(&node.text),
        TextType::Bold => LeafNode::element("b", &node.text),
        TextType::Italic => LeafNode::element("i", &node.text),
        TextType::Code => LeafNode::element("code", &node.text),
        TextType::Link => {
            let mut leaf = LeafNode::element("a", &node.text);
            leaf.set_attr("href", node.url.as_deref().unwrap_or(""));
            leaf
        }
        TextType::Image => {
            let mut leaf = LeafNode::element("img", "");
            leaf.set_attr("src", node.url.as_deref().unwrap_or(""));
            leaf.set_attr("alt", &node.text);
            leaf
        }
    };
    Ok(MarkupNode::Leaf(leaf))
}

/// Convert a sequence of text nodes, wrap them in a parent element with
/// the given tag, and render the result.
///
/// This is the whole pipeline in one call for drivers that hold a run
/// of inline nodes, e.g. the spans of one paragraph.
pub fn render_inline(nodes: &[TextNode], tag: &str) -> Result<String> {
    let mut children = Vec::with_capacity(nodes.len());
    for node in nodes {
        children.push(text_node_to_markup_node(node)?);
    }
    Ok(ParentNode::new(tag, children).render()?)
}
