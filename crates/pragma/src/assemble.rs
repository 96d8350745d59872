//! Replaying a translated element against the host builder.

use crate::element::Element;
use crate::events::EventBinding;
use crate::host::{HostBuilder, HostNode};
use crate::props::PropertyBag;
use crate::special::SpecialProps;

/// Construct a node and apply events, special props and children.
///
/// Calls happen in a fixed order: `create`, one `on` per event, `ref`,
/// `val`, then one `append` per child. The first host error aborts the
/// remaining calls and is returned as is.
pub fn assemble<B, I>(
    builder: &B,
    element: &Element<B::Component>,
    props: PropertyBag<B::Value>,
    events: Vec<EventBinding<B::Value>>,
    special: SpecialProps<B::Value>,
    children: I,
) -> Result<B::Node, B::Error>
where
    B: HostBuilder,
    I: IntoIterator<Item = B::Child>,
{
    let mut node = builder.create(element, props)?;

    for event in events {
        node = node.on(&event.name, event.handler)?;
    }

    if let Some(r) = special.r#ref {
        node = node.bind_ref(r.value)?;
    }

    if let Some(val) = special.val {
        node = node.val(val.value)?;
    }

    for child in children {
        node = node.append(child)?;
    }

    Ok(node)
}
