//! Props whose names differ from the attribute the host expects.

use crate::props::PropertyBag;

/// Maps a prop name to the attribute name used by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameRule {
    /// Name used in the declarative tree
    pub prop_name: &'static str,
    /// Name passed to the host
    pub attr_name: &'static str,
}

/// Renamed props, applied in this order.
pub const RENAMED_PROPS: &[RenameRule] = &[
    RenameRule {
        prop_name: "className",
        attr_name: "class",
    },
    RenameRule {
        prop_name: "htmlFor",
        attr_name: "for",
    },
];

/// A renamed prop found in a bag.
#[derive(Debug, Clone, PartialEq)]
pub struct RenamedProp<V> {
    /// Target attribute name
    pub name: &'static str,
    pub value: V,
    /// Prop name the value was given under
    pub original_prop_name: &'static str,
}

/// Extract renamed props, in rename table order.
///
/// A rule matches on key presence alone; falsy values still count.
pub fn extract_renamed<V: Clone>(props: &PropertyBag<V>) -> Vec<RenamedProp<V>> {
    RENAMED_PROPS
        .iter()
        .filter_map(|rule| {
            props.get(rule.prop_name).map(|value| RenamedProp {
                name: rule.attr_name,
                value: value.clone(),
                original_prop_name: rule.prop_name,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::is_event_prop;

    fn bag(entries: &[(&str, &'static str)]) -> PropertyBag<&'static str> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn renames_class_name() {
        let props = bag(&[("className", "x")]);

        let renamed = extract_renamed(&props);

        assert_eq!(
            renamed,
            vec![RenamedProp {
                name: "class",
                value: "x",
                original_prop_name: "className",
            }]
        );
    }

    #[test]
    fn follows_table_order_not_bag_order() {
        let props = bag(&[("htmlFor", "y"), ("className", "x")]);

        let names: Vec<_> = extract_renamed(&props).into_iter().map(|r| r.name).collect();

        assert_eq!(names, vec!["class", "for"]);
    }

    #[test]
    fn matches_on_presence_not_truthiness() {
        let props = bag(&[("className", "")]);

        let renamed = extract_renamed(&props);

        assert_eq!(renamed.len(), 1);
        assert_eq!(renamed[0].value, "");
    }

    #[test]
    fn ignores_target_names() {
        let props = bag(&[("class", "x"), ("for", "y")]);

        assert!(extract_renamed(&props).is_empty());
    }

    #[test]
    fn rule_names_never_look_like_events() {
        for rule in RENAMED_PROPS {
            assert!(!is_event_prop(rule.prop_name));
            assert!(!is_event_prop(rule.attr_name));
        }
    }
}
