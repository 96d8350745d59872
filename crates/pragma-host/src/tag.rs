//! Tag name helpers shared by the hosts.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::HostError;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9-]*$").expect("Invalid tag regex"));

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Reject tag names that cannot appear in markup.
pub fn validate_tag(tag: &str) -> Result<(), HostError> {
    if TAG_RE.is_match(tag) {
        Ok(())
    } else {
        tracing::debug!(tag, "Rejected element tag");
        Err(HostError::InvalidTag(tag.to_string()))
    }
}

/// Check whether a tag is a void element.
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Check whether a tree element name refers to a composite component.
///
/// Follows the JSX convention: capitalized names are components.
pub fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Convert a PascalCase component name to a custom element tag.
///
/// Custom elements need a hyphen, so single-word names get an `x-` prefix.
pub fn to_custom_tag(name: &str) -> String {
    let mut tag = String::with_capacity(name.len() + 2);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                tag.push('-');
            }
            tag.push(c.to_ascii_lowercase());
        } else {
            tag.push(c);
        }
    }

    if tag.contains('-') {
        tag
    } else {
        format!("x-{tag}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_tags() {
        assert!(validate_tag("div").is_ok());
        assert!(validate_tag("my-widget").is_ok());
        assert!(validate_tag("h1").is_ok());
        assert_eq!(validate_tag(""), Err(HostError::InvalidTag(String::new())));
        assert!(validate_tag("1div").is_err());
        assert!(validate_tag("div onclick").is_err());
        assert!(validate_tag("<script>").is_err());
    }

    #[test]
    fn detects_component_names() {
        assert!(is_component_name("Button"));
        assert!(is_component_name("DatePicker"));
        assert!(!is_component_name("div"));
        assert!(!is_component_name(""));
    }

    #[test]
    fn converts_to_custom_tag() {
        assert_eq!(to_custom_tag("DatePicker"), "date-picker");
        assert_eq!(to_custom_tag("Button"), "x-button");
    }

    #[test]
    fn void_elements() {
        assert!(is_void("input"));
        assert!(is_void("BR"));
        assert!(!is_void("div"));
    }
}
