//! Markup tree rendering
//!
//! Renders nodes to markup text. Rendering is pure and read-only: it
//! walks the tree depth-first, left to right, concatenating children
//! with no separators. Attribute values pass through verbatim; this
//! renderer does no escaping or whitespace normalization.

use crate::ast::{Attributes, LeafNode, MarkupNode, ParentNode};
use crate::{Result, StructuralError};

impl MarkupNode {
    /// Render this node and its subtree to a markup string
    pub fn render(&self) -> Result<String> {
        match self {
            MarkupNode::Leaf(leaf) => leaf.render(),
            MarkupNode::Parent(parent) => parent.render(),
        }
    }
}

impl LeafNode {
    /// Render this leaf to a markup string.
    ///
    /// An untagged leaf renders as its bare value. Fails with
    /// [`StructuralError::MissingValue`] when the value is absent; an
    /// empty string is a valid value.
    pub fn render(&self) -> Result<String> {
        let value = self.value.as_deref().ok_or(StructuralError::MissingValue)?;

        let Some(tag) = self.tag.as_deref() else {
            return Ok(value.to_string());
        };

        let attrs = render_attributes(self.attributes.as_ref());
        Ok(format!("<{tag}{attrs}>{value}</{tag}>"))
    }
}

impl ParentNode {
    /// Render this element and its children to a markup string.
    ///
    /// Fails with [`StructuralError::MissingTag`] when the tag is
    /// absent and [`StructuralError::MissingChildren`] when the
    /// children sequence is absent. An empty children sequence is valid
    /// and renders an empty-bodied element.
    pub fn render(&self) -> Result<String> {
        let tag = self.tag.as_deref().ok_or(StructuralError::MissingTag)?;
        let children = self
            .children
            .as_deref()
            .ok_or(StructuralError::MissingChildren)?;

        let mut out = String::with_capacity(16 + children.len() * 16);
        out.push('<');
        out.push_str(tag);
        out.push_str(&render_attributes(self.attributes.as_ref()));
        out.push('>');

        for child in children {
            out.push_str(&child.render()?);
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(out)
    }
}

/// Serialize attributes for an opening tag.
///
/// Returns an empty string for an absent or empty mapping; otherwise
/// each entry, in insertion order, contributes a leading space, the
/// name, `="`, the value verbatim, and a closing `"`.
pub fn render_attributes(attributes: Option<&Attributes>) -> String {
    let Some(attrs) = attributes else {
        return String::new();
    };

    let mut out = String::new();
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_no_tag_is_identity() {
        let node = LeafNode::text("Just some text");
        assert_eq!(node.render().unwrap(), "Just some text");
    }

    #[test]
    fn test_leaf_no_tag_empty_value() {
        let node = LeafNode::text("");
        assert_eq!(node.render().unwrap(), "");
    }

    #[test]
    fn test_leaf_paragraph() {
        let node = LeafNode::element("p", "Hello, world!");
        assert_eq!(node.render().unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_leaf_missing_value() {
        let node = LeafNode {
            tag: Some("p".to_string()),
            value: None,
            attributes: None,
        };
        assert_eq!(node.render(), Err(StructuralError::MissingValue));

        let untagged = LeafNode {
            tag: None,
            value: None,
            attributes: None,
        };
        assert_eq!(untagged.render(), Err(StructuralError::MissingValue));
    }

    #[test]
    fn test_leaf_with_attributes() {
        let mut node = LeafNode::element("a", "Click me!");
        node.set_attr("href", "https://example.com");
        node.set_attr("class", "button");
        assert_eq!(
            node.render().unwrap(),
            "<a href=\"https://example.com\" class=\"button\">Click me!</a>"
        );
    }

    #[test]
    fn test_parent_missing_tag() {
        let node = ParentNode {
            tag: None,
            children: Some(vec![]),
            attributes: None,
        };
        assert_eq!(node.render(), Err(StructuralError::MissingTag));
    }

    #[test]
    fn test_parent_missing_children() {
        let node = ParentNode {
            tag: Some("div".to_string()),
            children: None,
            attributes: None,
        };
        assert_eq!(node.render(), Err(StructuralError::MissingChildren));
    }

    #[test]
    fn test_parent_empty_children() {
        let node = ParentNode::new("div", vec![]);
        assert_eq!(node.render().unwrap(), "<div></div>");
    }

    #[test]
    fn test_parent_with_child() {
        let node = ParentNode::new(
            "div",
            vec![MarkupNode::Leaf(LeafNode::element("span", "child"))],
        );
        assert_eq!(node.render().unwrap(), "<div><span>child</span></div>");
    }

    #[test]
    fn test_attribute_insertion_order() {
        let mut node = ParentNode::new(
            "div",
            vec![MarkupNode::Leaf(LeafNode::element("span", "child"))],
        );
        node.set_attr("class", "container");
        node.set_attr("id", "main");
        assert_eq!(
            node.render().unwrap(),
            "<div class=\"container\" id=\"main\"><span>child</span></div>"
        );
    }

    #[test]
    fn test_attribute_values_unescaped() {
        let mut node = LeafNode::element("div", "content");
        node.set_attr("data-test", "value\"with\"quotes");
        node.set_attr("class", "my-class");
        assert_eq!(
            node.render().unwrap(),
            "<div data-test=\"value\"with\"quotes\" class=\"my-class\">content</div>"
        );
    }

    #[test]
    fn test_nested_tree_depth_first() {
        let grandchild = MarkupNode::Leaf(LeafNode::element("b", "grandchild"));
        let span = MarkupNode::Parent(ParentNode::new("span", vec![grandchild.clone()]));
        let div = ParentNode::new("div", vec![span, grandchild]);
        assert_eq!(
            div.render().unwrap(),
            "<div><span><b>grandchild</b></span><b>grandchild</b></div>"
        );
    }

    #[test]
    fn test_render_does_not_mutate() {
        let node = ParentNode::new("p", vec![MarkupNode::text("once")]);
        let copy = node.clone();
        let _ = node.render().unwrap();
        assert_eq!(node, copy);
    }

    #[test]
    fn test_render_attributes_absent_and_empty() {
        assert_eq!(render_attributes(None), "");
        assert_eq!(render_attributes(Some(&Attributes::new())), "");
    }

    #[test]
    fn test_render_attributes_spacing() {
        let mut attrs = Attributes::new();
        attrs.insert("href".to_string(), "https://example.com".to_string());
        attrs.insert("target".to_string(), "_blank".to_string());
        assert_eq!(
            render_attributes(Some(&attrs)),
            " href=\"https://example.com\" target=\"_blank\""
        );
    }
}
