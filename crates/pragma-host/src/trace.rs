//! Host that records construction calls instead of building UI nodes.

use serde::Serialize;
use serde_json::Value;

use pragma::{Element, HostBuilder, HostNode, PropertyBag};

use crate::error::HostError;
use crate::tag::validate_tag;

/// Host that records every call it receives on the node it builds.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceHost;

impl TraceHost {
    pub fn new() -> Self {
        Self
    }
}

/// A recorded node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceNode {
    /// Tag or component name
    pub element: String,

    /// Whether the element is a composite component
    pub component: bool,

    /// Props passed to `create`
    pub props: PropertyBag<Value>,

    /// Calls in the order they were made, starting with `create`
    pub calls: Vec<TraceCall>,
}

/// A single builder call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum TraceCall {
    Create,
    On { event: String, handler: Value },
    Ref { value: Value },
    Val { value: Value },
    Append { child: TraceChild },
}

/// A child appended to a recorded node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TraceChild {
    Text(String),
    Node(TraceNode),
}

impl From<String> for TraceChild {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<TraceNode> for TraceChild {
    fn from(node: TraceNode) -> Self {
        Self::Node(node)
    }
}

impl TraceNode {
    /// Short names of the recorded calls, e.g. `["create", "on", "append"]`.
    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls
            .iter()
            .map(|call| match call {
                TraceCall::Create => "create",
                TraceCall::On { .. } => "on",
                TraceCall::Ref { .. } => "ref",
                TraceCall::Val { .. } => "val",
                TraceCall::Append { .. } => "append",
            })
            .collect()
    }

    fn push(mut self, call: TraceCall) -> Result<Self, HostError> {
        self.calls.push(call);
        Ok(self)
    }
}

impl HostBuilder for TraceHost {
    type Component = String;
    type Value = Value;
    type Child = TraceChild;
    type Error = HostError;
    type Node = TraceNode;

    fn create(
        &self,
        element: &Element<String>,
        props: PropertyBag<Value>,
    ) -> Result<TraceNode, HostError> {
        let (name, component) = match element {
            Element::Tag(tag) => {
                validate_tag(tag)?;
                (tag.clone(), false)
            }
            Element::Component(name) => (name.clone(), true),
        };

        Ok(TraceNode {
            element: name,
            component,
            props,
            calls: vec![TraceCall::Create],
        })
    }
}

impl HostNode for TraceNode {
    type Value = Value;
    type Child = TraceChild;
    type Error = HostError;

    fn on(self, name: &str, handler: Value) -> Result<Self, HostError> {
        self.push(TraceCall::On {
            event: name.to_string(),
            handler,
        })
    }

    fn bind_ref(self, value: Value) -> Result<Self, HostError> {
        self.push(TraceCall::Ref { value })
    }

    fn val(self, value: Value) -> Result<Self, HostError> {
        self.push(TraceCall::Val { value })
    }

    fn append(self, child: TraceChild) -> Result<Self, HostError> {
        self.push(TraceCall::Append { child })
    }
}
