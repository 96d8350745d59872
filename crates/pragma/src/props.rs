//! Property bags passed alongside an element.

use indexmap::IndexMap;

/// Key under which a caller may stash the builder capability in a bag.
///
/// The builder itself is always injected explicitly, but the key is still
/// stripped from every bag before construction.
pub const BUILDER_KEY: &str = "$$";

/// Insertion-ordered mapping from prop name to value.
pub type PropertyBag<V> = IndexMap<String, V>;
