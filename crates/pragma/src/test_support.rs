//! Recording host used by the unit tests.

use crate::element::Element;
use crate::host::{HostBuilder, HostNode};
use crate::props::PropertyBag;

#[derive(Debug, Clone, PartialEq)]
pub struct Failure(pub String);

/// Host that logs every call as a string, optionally failing on one call kind.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub fail_on: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedNode {
    pub props: PropertyBag<String>,
    pub calls: Vec<String>,
    fail_on: Option<&'static str>,
}

impl RecordedNode {
    fn record(mut self, kind: &str, call: String) -> Result<Self, Failure> {
        if self.fail_on == Some(kind) {
            return Err(Failure(call));
        }
        self.calls.push(call);
        Ok(self)
    }
}

impl HostBuilder for RecordingHost {
    type Component = &'static str;
    type Value = String;
    type Child = String;
    type Error = Failure;
    type Node = RecordedNode;

    fn create(
        &self,
        element: &Element<Self::Component>,
        props: PropertyBag<String>,
    ) -> Result<RecordedNode, Failure> {
        let name = match element {
            Element::Tag(tag) => tag.clone(),
            Element::Component(component) => format!("<{component}>"),
        };
        let node = RecordedNode {
            props,
            calls: Vec::new(),
            fail_on: self.fail_on,
        };
        node.record("create", format!("create({name})"))
    }
}

impl HostNode for RecordedNode {
    type Value = String;
    type Child = String;
    type Error = Failure;

    fn on(self, name: &str, handler: String) -> Result<Self, Failure> {
        self.record("on", format!("on({name}, {handler})"))
    }

    fn bind_ref(self, value: String) -> Result<Self, Failure> {
        self.record("ref", format!("ref({value})"))
    }

    fn val(self, value: String) -> Result<Self, Failure> {
        self.record("val", format!("val({value})"))
    }

    fn append(self, child: String) -> Result<Self, Failure> {
        self.record("append", format!("append({child})"))
    }
}

pub fn bag(entries: &[(&str, &str)]) -> PropertyBag<String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
