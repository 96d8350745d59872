//! Extraction of event handler props (`onClick`, `onChange`, ...).

use regex::Regex;
use std::sync::LazyLock;

use crate::props::PropertyBag;

/// Event props are "on" followed by an uppercase letter.
static EVENT_PROP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^on[A-Z]").expect("Invalid event prop regex"));

/// An event handler pulled out of a property bag.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBinding<V> {
    /// Event name passed to the host (e.g. "click")
    pub name: String,

    /// Handler value, handed to the host untouched
    pub handler: V,

    /// Prop name the handler was given under (e.g. "onClick")
    pub original_prop_name: String,
}

/// Check whether a prop name denotes an event handler.
pub fn is_event_prop(name: &str) -> bool {
    EVENT_PROP_RE.is_match(name)
}

/// Derive the host event name from an event prop name.
///
/// Drops the "on" prefix and lowercases the whole remainder, so
/// `onDoubleClick` becomes `doubleclick`.
fn event_name(prop_name: &str) -> String {
    prop_name
        .strip_prefix("on")
        .unwrap_or(prop_name)
        .to_lowercase()
}

/// Extract event bindings from props, in bag order.
///
/// Composite components never get builder-level events; their `on*` props
/// stay ordinary props.
pub fn extract_events<V: Clone>(props: &PropertyBag<V>, is_composite: bool) -> Vec<EventBinding<V>> {
    if is_composite {
        return Vec::new();
    }

    props
        .iter()
        .filter(|(name, _)| is_event_prop(name))
        .map(|(name, handler)| EventBinding {
            name: event_name(name),
            handler: handler.clone(),
            original_prop_name: name.clone(),
        })
        .collect()
}
