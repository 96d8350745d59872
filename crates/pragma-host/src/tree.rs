//! Declarative element trees written as JSON.
//!
//! A tree node is either a text string or an object:
//!
//! ```json
//! { "element": "label", "props": { "htmlFor": "name" }, "children": ["Name"] }
//! ```
//!
//! Capitalized element names are composite components, everything else is a
//! primitive tag.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use pragma::{translate, Element, HostBuilder, PropertyBag};

use crate::error::TreeError;
use crate::tag::is_component_name;

/// A node in a declarative tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Primitive text child
    Text(String),
    /// Element with props and children
    Element(ElementNode),
}

impl<'de> Deserialize<'de> for TreeNode {
    // Dispatch on the JSON shape so element errors name the offending field.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(text) => Ok(Self::Text(text)),
            value @ Value::Object(_) => ElementNode::deserialize(value)
                .map(Self::Element)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected text or an element object, found {other}"
            ))),
        }
    }
}

/// An element in a declarative tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementNode {
    /// Tag or component name
    pub element: String,

    /// Props; missing or `null` means no props
    #[serde(default)]
    pub props: Option<PropertyBag<Value>>,

    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl ElementNode {
    /// Resolve the element name to a tag or component reference.
    pub fn to_element(&self) -> Element<String> {
        if is_component_name(&self.element) {
            Element::Component(self.element.clone())
        } else {
            Element::Tag(self.element.clone())
        }
    }
}

/// Parse a tree from JSON. The root must be an element.
pub fn load_tree(source: &str) -> Result<ElementNode, TreeError> {
    match serde_json::from_str::<TreeNode>(source)? {
        TreeNode::Element(root) => Ok(root),
        TreeNode::Text(_) => Err(TreeError::TextRoot),
    }
}

/// Translate an element and its subtree against `host`.
///
/// Children are translated first, in order, then handed to the parent's
/// translation, the same order nested literal-tree calls evaluate in.
pub fn render_element<B>(host: &B, node: &ElementNode) -> Result<B::Node, B::Error>
where
    B: HostBuilder<Component = String, Value = Value>,
    B::Child: From<String> + From<B::Node>,
{
    let children = node
        .children
        .iter()
        .map(|child| render_tree(host, child))
        .collect::<Result<Vec<_>, _>>()?;

    translate(host, node.to_element(), node.props.clone(), children)
}

/// Translate any tree node into a host child.
pub fn render_tree<B>(host: &B, node: &TreeNode) -> Result<B::Child, B::Error>
where
    B: HostBuilder<Component = String, Value = Value>,
    B::Child: From<String> + From<B::Node>,
{
    match node {
        TreeNode::Text(text) => Ok(<B::Child>::from(text.clone())),
        TreeNode::Element(element) => render_element(host, element).map(Into::into),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_nested_tree() {
        let root = load_tree(
            r#"{
                "element": "form",
                "props": { "className": "login" },
                "children": [
                    { "element": "label", "props": { "htmlFor": "user" }, "children": ["User"] },
                    { "element": "TextField", "props": { "value": "" } },
                    "plain text"
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(root.element, "form");
        assert_eq!(root.children.len(), 3);
        assert!(matches!(&root.children[2], TreeNode::Text(t) if t == "plain text"));

        let TreeNode::Element(field) = &root.children[1] else {
            panic!("expected element");
        };
        assert!(field.to_element().is_composite());
        assert_eq!(field.props.as_ref().unwrap().get("value"), Some(&json!("")));
    }

    #[test]
    fn props_default_to_none() {
        let root = load_tree(r#"{ "element": "br" }"#).unwrap();

        assert!(root.props.is_none());
        assert!(root.children.is_empty());
    }

    #[test]
    fn null_props_are_none() {
        let root = load_tree(r#"{ "element": "div", "props": null }"#).unwrap();

        assert!(root.props.is_none());
    }

    #[test]
    fn preserves_prop_order() {
        let root = load_tree(r#"{ "element": "a", "props": { "z": 1, "a": 2, "m": 3 } }"#).unwrap();

        let keys: Vec<_> = root.props.unwrap().into_keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn rejects_text_root() {
        let result = load_tree(r#""just text""#);

        assert!(matches!(result, Err(TreeError::TextRoot)));
    }

    #[test]
    fn rejects_invalid_json() {
        let result = load_tree(r#"{ "element": "#);

        assert!(matches!(result, Err(TreeError::Json(_))));
    }

    #[test]
    fn names_misspelled_fields() {
        let err = load_tree(r#"{ "elemnt": "div" }"#).unwrap_err();

        assert!(err.to_string().contains("unknown field `elemnt`"));
    }

    #[test]
    fn names_misspelled_fields_in_children() {
        let err = load_tree(r#"{ "element": "ul", "children": [{ "element": "li", "prop": {} }] }"#)
            .unwrap_err();

        assert!(err.to_string().contains("unknown field `prop`"));
    }

    #[test]
    fn rejects_non_node_children() {
        let err = load_tree(r#"{ "element": "p", "children": [42] }"#).unwrap_err();

        assert!(err
            .to_string()
            .contains("expected text or an element object, found 42"));
    }

    #[test]
    fn primitive_tag_resolution() {
        let node = ElementNode {
            element: "input".to_string(),
            props: None,
            children: Vec::new(),
        };

        assert_eq!(node.to_element(), Element::Tag("input".to_string()));
    }
}
