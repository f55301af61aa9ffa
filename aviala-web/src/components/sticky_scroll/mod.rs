//! Scroll-driven visual state for the stacked home-page sections.
//!
//! The container recomputes its state on every scroll event; CSS classes
//! (`first`/`homeScroll` on the header, `active` on sections,
//! `visible`/`hidden` on the footer) are the only channel to the stylesheet.

mod interactions;
#[cfg(test)]
mod tests;
mod view;

pub use view::{Props, StickyScroll};
