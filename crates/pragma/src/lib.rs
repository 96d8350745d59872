//! Structural translation from declarative element trees to builder calls.
//!
//! This crate takes an element (a primitive tag or a composite component), a
//! property bag and a list of children, and replays them against a
//! builder-style host API: one `create` call with a cleaned property bag,
//! followed by event registrations, `ref`/`val` calls and child appends.

pub mod assemble;
pub mod element;
pub mod events;
pub mod host;
pub mod props;
pub mod rename;
pub mod sanitize;
pub mod special;
pub mod translate;

#[cfg(test)]
mod test_support;

pub use assemble::assemble;
pub use element::Element;
pub use events::{extract_events, EventBinding};
pub use host::{HostBuilder, HostNode};
pub use props::{PropertyBag, BUILDER_KEY};
pub use rename::{extract_renamed, RenameRule, RenamedProp, RENAMED_PROPS};
pub use sanitize::{merge_renamed, tidy_props};
pub use special::{extract_special, SpecialProp, SpecialProps};
pub use translate::{plan, translate, TranslationPlan};
