//! Trait definitions for the host UI-component API.

use crate::element::Element;
use crate::props::PropertyBag;

/// Host capability that allocates nodes.
pub trait HostBuilder {
    /// Composite component reference type
    type Component;

    /// Prop value type; event handlers are values too
    type Value;

    /// Child type accepted by `append`
    type Child;

    /// Error raised by any host call
    type Error;

    /// Node produced by `create`
    type Node: HostNode<Value = Self::Value, Child = Self::Child, Error = Self::Error>;

    /// Construct a node for `element` with its final property bag.
    fn create(
        &self,
        element: &Element<Self::Component>,
        props: PropertyBag<Self::Value>,
    ) -> Result<Self::Node, Self::Error>;
}

/// Chainable node returned by a [`HostBuilder`].
///
/// Each call consumes the node and hands it back, mirroring method chaining
/// on the host side.
pub trait HostNode: Sized {
    type Value;
    type Child;
    type Error;

    /// Register `handler` for the event `name`.
    fn on(self, name: &str, handler: Self::Value) -> Result<Self, Self::Error>;

    /// Apply a `ref` value.
    fn bind_ref(self, value: Self::Value) -> Result<Self, Self::Error>;

    /// Apply a `val` value.
    fn val(self, value: Self::Value) -> Result<Self, Self::Error>;

    /// Append a child.
    fn append(self, child: Self::Child) -> Result<Self, Self::Error>;
}
