//! Error types for hosts and tree loading.

/// Errors raised by the reference hosts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    #[error("Invalid element tag: {0:?}")]
    InvalidTag(String),

    #[error("Invalid attribute name: {0:?}")]
    InvalidAttribute(String),

    #[error("Invalid handler for '{event}' event: expected a handler name, found {found}")]
    InvalidHandler { event: String, found: &'static str },

    #[error("Void element <{0}> cannot have children")]
    VoidElementChild(String),
}

/// Errors that can occur when loading a tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tree root must be an element, found text")]
    TextRoot,
}
