//! In-page fuzzy search widget.
//!
//! A toggleable panel that lazily loads the site's JSON document index once,
//! queries it on every keystroke and renders ranked, highlighted matches.
//! All decision logic lives in `aviala-search`; this component only wires
//! browser events and renders the resulting panel description.

mod interactions;
mod loader;
#[cfg(test)]
mod tests;
mod view;

pub use loader::IndexState;
pub use view::{Props, SearchWidget};
