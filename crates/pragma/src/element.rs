//! Element references.

/// The thing being constructed: a primitive tag or a composite component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element<C> {
    /// Primitive element tag (e.g. "div")
    Tag(String),
    /// Reference to a composite component
    Component(C),
}

impl<C> Element<C> {
    /// Create a primitive element from its tag name.
    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into())
    }

    /// True for composite components, false for primitive tags.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Component(_))
    }

    /// Tag name, if this is a primitive element.
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Self::Tag(name) => Some(name),
            Self::Component(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_not_composite() {
        let el: Element<()> = Element::tag("div");

        assert!(!el.is_composite());
        assert_eq!(el.as_tag(), Some("div"));
    }

    #[test]
    fn component_is_composite() {
        let el = Element::Component("DatePicker");

        assert!(el.is_composite());
        assert_eq!(el.as_tag(), None);
    }
}
