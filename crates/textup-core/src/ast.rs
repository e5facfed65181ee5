//! Markup tree nodes
//!
//! This module defines the node shapes for the markup tree: a leaf with
//! a terminal value and no children, and a parent with a tag and an
//! ordered children sequence. Children are moved into their parent at
//! construction, so a node can never be attached to two parents and the
//! tree stays acyclic by construction.

use indexmap::IndexMap;

/// Ordered attribute mapping serialized into an element's opening tag.
///
/// Insertion order is preserved, which keeps attribute serialization
/// deterministic. Updating an existing name keeps its original position.
pub type Attributes = IndexMap<String, String>;

/// A node in the markup tree.
///
/// Rendering dispatches over the variant rather than over a class
/// hierarchy, so each shape carries only the fields it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    /// Terminal node with a value and no children
    Leaf(LeafNode),
    /// Element with a tag and ordered children
    Parent(ParentNode),
}

/// A leaf node: tag optional, value required at render time.
///
/// A leaf without a tag renders as its bare value, which is how plain
/// text is represented in the tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeafNode {
    /// Element tag name (e.g. "p", "b"); `None` for raw text
    pub tag: Option<String>,

    /// Text content; must be present when rendering (empty is valid)
    pub value: Option<String>,

    /// Attributes serialized into the opening tag
    pub attributes: Option<Attributes>,
}

/// A parent node: tag and children required at render time.
///
/// `children: None` is distinct from an empty children vector; the
/// former is a structural error, the latter renders an empty-bodied
/// element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParentNode {
    /// Element tag name; must be present when rendering
    pub tag: Option<String>,

    /// Ordered child nodes; must be present when rendering
    pub children: Option<Vec<MarkupNode>>,

    /// Attributes serialized into the opening tag
    pub attributes: Option<Attributes>,
}

impl LeafNode {
    /// Create a leaf with an optional tag
    pub fn new(tag: Option<&str>, value: &str) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.to_string()),
            attributes: None,
        }
    }

    /// Create an untagged leaf that renders as raw text
    pub fn text(value: &str) -> Self {
        Self::new(None, value)
    }

    /// Create a tagged leaf
    pub fn element(tag: &str, value: &str) -> Self {
        Self::new(Some(tag), value)
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.as_ref()?.get(name).map(String::as_str)
    }

    /// Set an attribute, preserving the position of an existing name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name.to_string(), value.to_string());
    }
}

impl ParentNode {
    /// Create a parent, taking ownership of its children
    pub fn new(tag: &str, children: Vec<MarkupNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: None,
        }
    }

    /// Append a child node
    pub fn add_child(&mut self, child: MarkupNode) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.as_ref()?.get(name).map(String::as_str)
    }

    /// Set an attribute, preserving the position of an existing name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name.to_string(), value.to_string());
    }
}

impl MarkupNode {
    /// Create an untagged leaf that renders as raw text
    pub fn text(value: &str) -> Self {
        MarkupNode::Leaf(LeafNode::text(value))
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, MarkupNode::Leaf(_))
    }

    /// Check if this is a parent node
    pub fn is_parent(&self) -> bool {
        matches!(self, MarkupNode::Parent(_))
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            MarkupNode::Leaf(leaf) => leaf.tag.as_deref(),
            MarkupNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            MarkupNode::Leaf(leaf) => leaf.attr(name),
            MarkupNode::Parent(parent) => parent.attr(name),
        }
    }
}

impl From<LeafNode> for MarkupNode {
    fn from(leaf: LeafNode) -> Self {
        MarkupNode::Leaf(leaf)
    }
}

impl From<ParentNode> for MarkupNode {
    fn from(parent: ParentNode) -> Self {
        MarkupNode::Parent(parent)
    }
}
