//! Reference hosts and JSON tree front-end for the pragma translator.
//!
//! Provides a tracing host that records construction calls, a markup host
//! that renders static HTML, and a loader for declarative trees written as
//! JSON.

pub mod error;
pub mod markup;
pub mod tag;
pub mod trace;
pub mod tree;

pub use error::{HostError, TreeError};
pub use markup::{MarkupChild, MarkupHost, MarkupNode};
pub use trace::{TraceCall, TraceChild, TraceHost, TraceNode};
pub use tree::{load_tree, render_element, render_tree, ElementNode, TreeNode};
