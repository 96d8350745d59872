//! Building the cleaned property bag handed to the host.

use std::collections::HashSet;

use crate::props::PropertyBag;
use crate::rename::RenamedProp;

/// Return a copy of `props` without the names in `omit`.
///
/// The input bag is left untouched. Names missing from the bag are ignored.
pub fn tidy_props<V: Clone>(props: &PropertyBag<V>, omit: &HashSet<&str>) -> PropertyBag<V> {
    props
        .iter()
        .filter(|(name, _)| !omit.contains(name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Merge renamed props into a cleaned bag under their target names.
///
/// Targets overwrite existing entries of the same name in place; new
/// targets are appended.
pub fn merge_renamed<V>(mut props: PropertyBag<V>, renamed: Vec<RenamedProp<V>>) -> PropertyBag<V> {
    for prop in renamed {
        props.insert(prop.name.to_string(), prop.value);
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bag(entries: &[(&str, &'static str)]) -> PropertyBag<&'static str> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn omits_named_props() {
        let props = bag(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let omit = HashSet::from(["a", "c"]);

        let tidy = tidy_props(&props, &omit);

        assert_eq!(tidy, bag(&[("b", "2")]));
    }

    #[test]
    fn does_not_mutate_input() {
        let props = bag(&[("a", "1"), ("b", "2")]);
        let omit = HashSet::from(["a"]);

        let _ = tidy_props(&props, &omit);

        assert_eq!(props, bag(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn absent_names_are_a_no_op() {
        let props = bag(&[("id", "z"), ("title", "t")]);
        let omit = HashSet::from(["$$", "onClick", "ref"]);

        let tidy = tidy_props(&props, &omit);

        assert_eq!(tidy, props);
    }

    #[test]
    fn preserves_order_of_remaining_props() {
        let props = bag(&[("z", "1"), ("drop", "x"), ("a", "2"), ("m", "3")]);
        let omit = HashSet::from(["drop"]);

        let keys: Vec<_> = tidy_props(&props, &omit).into_keys().collect();

        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn rename_target_overwrites_existing_entry() {
        let props = bag(&[("class", "old"), ("id", "z")]);
        let renamed = vec![RenamedProp {
            name: "class",
            value: "new",
            original_prop_name: "className",
        }];

        let merged = merge_renamed(props, renamed);

        assert_eq!(merged, bag(&[("class", "new"), ("id", "z")]));
        assert_eq!(merged.get_index(0), Some((&"class".to_string(), &"new")));
    }

    #[test]
    fn new_rename_targets_are_appended() {
        let props = bag(&[("id", "z")]);
        let renamed = vec![
            RenamedProp {
                name: "class",
                value: "c",
                original_prop_name: "className",
            },
            RenamedProp {
                name: "for",
                value: "f",
                original_prop_name: "htmlFor",
            },
        ];

        let keys: Vec<_> = merge_renamed(props, renamed).into_keys().collect();

        assert_eq!(keys, vec!["id", "class", "for"]);
    }
}
