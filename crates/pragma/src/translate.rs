//! Translation entry point.

use std::collections::HashSet;

use crate::assemble::assemble;
use crate::element::Element;
use crate::events::{extract_events, EventBinding};
use crate::host::HostBuilder;
use crate::props::{PropertyBag, BUILDER_KEY};
use crate::rename::extract_renamed;
use crate::sanitize::{merge_renamed, tidy_props};
use crate::special::{extract_special, SpecialProps};

/// Host-independent result of classifying a property bag.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationPlan<V> {
    /// Bag passed to `create`: claimed props removed, rename targets merged
    pub props: PropertyBag<V>,

    /// Events to register, in bag order
    pub events: Vec<EventBinding<V>>,

    /// `ref`/`val` slots
    pub special: SpecialProps<V>,
}

/// Classify `props` for an element.
///
/// All extractors read the same unmodified bag; the cleaned bag is built
/// from their claimed names afterwards.
pub fn plan<V: Clone>(props: &PropertyBag<V>, is_composite: bool) -> TranslationPlan<V> {
    let events = extract_events(props, is_composite);
    let special = extract_special(props, is_composite);
    let renamed = extract_renamed(props);

    let mut omit: HashSet<&str> = HashSet::new();
    omit.insert(BUILDER_KEY);
    for event in &events {
        omit.insert(&event.original_prop_name);
    }
    for prop in &renamed {
        omit.insert(prop.original_prop_name);
    }
    for name in special.original_prop_names() {
        omit.insert(name);
    }

    let tidy = tidy_props(props, &omit);
    let props = merge_renamed(tidy, renamed);

    TranslationPlan {
        props,
        events,
        special,
    }
}

/// Translate an element, its props and children into host builder calls.
///
/// `props` of `None` behaves like an empty bag. Host errors are returned
/// unmodified; no partially built node is rolled back.
pub fn translate<B, I>(
    builder: &B,
    element: Element<B::Component>,
    props: Option<PropertyBag<B::Value>>,
    children: I,
) -> Result<B::Node, B::Error>
where
    B: HostBuilder,
    B::Value: Clone,
    I: IntoIterator<Item = B::Child>,
{
    let props = props.unwrap_or_default();
    let TranslationPlan {
        props,
        events,
        special,
    } = plan(&props, element.is_composite());

    tracing::trace!(
        tag = ?element.as_tag(),
        props = props.len(),
        events = events.len(),
        has_ref = special.r#ref.is_some(),
        has_val = special.val.is_some(),
        "translating element"
    );

    assemble(builder, &element, props, events, special, children)
}
