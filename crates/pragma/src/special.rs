//! Props that become dedicated builder calls instead of attributes.

use crate::props::PropertyBag;

/// Prop applied through `ref()`.
pub const REF_PROP: &str = "ref";

/// Prop applied through `val()` on primitive elements.
pub const VALUE_PROP: &str = "value";

/// A special prop found in a bag.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialProp<V> {
    pub value: V,
    pub original_prop_name: &'static str,
}

/// The `ref` and `val` slots, each filled when its prop was present.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialProps<V> {
    pub r#ref: Option<SpecialProp<V>>,
    pub val: Option<SpecialProp<V>>,
}

impl<V> Default for SpecialProps<V> {
    fn default() -> Self {
        Self { r#ref: None, val: None }
    }
}

impl<V> SpecialProps<V> {
    /// Names of the props claimed by filled slots.
    pub fn original_prop_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.r#ref
            .iter()
            .chain(self.val.iter())
            .map(|prop| prop.original_prop_name)
    }

    pub fn is_empty(&self) -> bool {
        self.r#ref.is_none() && self.val.is_none()
    }
}

/// Extract the special props.
///
/// `ref` is always claimed. `value` is only claimed for primitive elements;
/// composite components keep it as an ordinary prop.
pub fn extract_special<V: Clone>(props: &PropertyBag<V>, is_component: bool) -> SpecialProps<V> {
    let claim = |name: &'static str| {
        props.get(name).map(|value| SpecialProp {
            value: value.clone(),
            original_prop_name: name,
        })
    };

    SpecialProps {
        r#ref: claim(REF_PROP),
        val: if is_component { None } else { claim(VALUE_PROP) },
    }
}
