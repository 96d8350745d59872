//! Host that renders nodes to static HTML markup.
//!
//! Handlers cannot run in static markup, so events are rendered as
//! `data-on-<event>` attributes naming the handler. `ref` becomes `data-ref`
//! and `val` sets the `value` attribute.

use serde_json::Value;

use pragma::{Element, HostBuilder, HostNode, PropertyBag};

use crate::error::HostError;
use crate::tag::{is_void, to_custom_tag, validate_tag};

/// Host producing [`MarkupNode`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupHost;

impl MarkupHost {
    pub fn new() -> Self {
        Self
    }
}

/// An element being rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupNode {
    tag: String,
    attrs: Vec<(String, Option<String>)>,
    content: String,
}

/// A child appended to a markup node.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupChild {
    Text(String),
    Node(MarkupNode),
}

impl From<String> for MarkupChild {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<MarkupNode> for MarkupChild {
    fn from(node: MarkupNode) -> Self {
        Self::Node(node)
    }
}

impl MarkupNode {
    /// Render the node and its children.
    pub fn to_html(&self) -> String {
        let attrs: String = self
            .attrs
            .iter()
            .map(|(name, value)| match value {
                Some(value) => format!(r#" {}="{}""#, name, html_escape(value)),
                None => format!(" {name}"),
            })
            .collect();

        if is_void(&self.tag) {
            format!("<{}{}>", self.tag, attrs)
        } else {
            format!("<{tag}{attrs}>{content}</{tag}>", tag = self.tag, content = self.content)
        }
    }

    /// Set an attribute, replacing an earlier value of the same name.
    fn set_attr(&mut self, name: String, value: Option<String>) {
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Set an attribute from a prop value. `false` and `null` render nothing.
    fn set_value_attr(&mut self, name: String, value: &Value) {
        match value {
            Value::Null | Value::Bool(false) => {}
            Value::Bool(true) => self.set_attr(name, None),
            other => self.set_attr(name, Some(value_text(other))),
        }
    }
}

/// Text form of a JSON value used as an attribute value.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Human-readable JSON type name, for error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Escape HTML special characters including single quotes.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

impl HostBuilder for MarkupHost {
    type Component = String;
    type Value = Value;
    type Child = MarkupChild;
    type Error = HostError;
    type Node = MarkupNode;

    fn create(
        &self,
        element: &Element<String>,
        props: PropertyBag<Value>,
    ) -> Result<MarkupNode, HostError> {
        let tag = match element {
            Element::Tag(tag) => tag.clone(),
            Element::Component(name) => to_custom_tag(name),
        };
        validate_tag(&tag)?;

        let mut node = MarkupNode {
            tag,
            attrs: Vec::with_capacity(props.len()),
            content: String::new(),
        };
        for (name, value) in &props {
            validate_attr_name(name)?;
            node.set_value_attr(name.clone(), value);
        }

        Ok(node)
    }
}

fn validate_attr_name(name: &str) -> Result<(), HostError> {
    // Same character set as tags.
    validate_tag(name).map_err(|_| {
        tracing::debug!(attribute = name, "Rejected attribute name");
        HostError::InvalidAttribute(name.to_string())
    })
}

impl HostNode for MarkupNode {
    type Value = Value;
    type Child = MarkupChild;
    type Error = HostError;

    fn on(mut self, name: &str, handler: Value) -> Result<Self, HostError> {
        let handler = match handler {
            Value::String(handler) => handler,
            other => {
                tracing::debug!(event = name, "Rejected non-string handler");
                return Err(HostError::InvalidHandler {
                    event: name.to_string(),
                    found: type_name(&other),
                });
            }
        };

        let attr = format!("data-on-{name}");
        validate_attr_name(&attr)?;
        self.set_attr(attr, Some(handler));
        Ok(self)
    }

    fn bind_ref(mut self, value: Value) -> Result<Self, HostError> {
        self.set_value_attr("data-ref".to_string(), &value);
        Ok(self)
    }

    fn val(mut self, value: Value) -> Result<Self, HostError> {
        self.set_value_attr("value".to_string(), &value);
        Ok(self)
    }

    fn append(mut self, child: MarkupChild) -> Result<Self, HostError> {
        if is_void(&self.tag) {
            return Err(HostError::VoidElementChild(self.tag));
        }

        match child {
            MarkupChild::Text(text) => self.content.push_str(&html_escape(&text)),
            MarkupChild::Node(node) => self.content.push_str(&node.to_html()),
        }
        Ok(self)
    }
}
