//! Scroll-position state for the sticky-scroll layout.
//!
//! Header mode, per-section activity and footer visibility are independent
//! derivations of the container's scroll offset. The web crate maps them to
//! the stylesheet contract: `first` / `homeScroll` on the header, `active`
//! on sections, `visible` / `hidden` on the footer.

use serde::{Deserialize, Serialize};

/// Header presentation: within the first half-viewport, or scrolled past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    First,
    Scrolled,
}

impl HeaderMode {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Scrolled => "homeScroll",
        }
    }
}

/// Measured geometry of one section, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMetrics {
    pub top: f64,
    pub height: f64,
}

/// Layout knobs for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Index of the section whose visibility drives the footer.
    pub footer_section: usize,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { footer_section: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    pub header: HeaderMode,
    pub active: Vec<bool>,
    pub footer_visible: bool,
}

impl ScrollState {
    /// Explicit initial state applied before the first scroll callback:
    /// first section active, header in first mode, footer hidden.
    #[must_use]
    pub fn bootstrap(section_count: usize) -> Self {
        let mut active = vec![false; section_count];
        if let Some(first) = active.first_mut() {
            *first = true;
        }
        Self {
            header: HeaderMode::First,
            active,
            footer_visible: false,
        }
    }

    #[must_use]
    pub fn is_active(&self, section: usize) -> bool {
        self.active.get(section).copied().unwrap_or(false)
    }
}

/// Recompute the full state for a scroll offset.
///
/// A section is active while the offset falls within
/// `[top - viewport/3, top + height - viewport/3)`.
#[must_use]
pub fn compute(
    offset: f64,
    viewport: f64,
    sections: &[SectionMetrics],
    config: &ScrollConfig,
) -> ScrollState {
    let header = if offset < viewport / 2.0 {
        HeaderMode::First
    } else {
        HeaderMode::Scrolled
    };

    let active: Vec<bool> = sections
        .iter()
        .map(|s| offset >= s.top - viewport / 3.0 && offset < s.top + s.height - viewport / 3.0)
        .collect();

    let footer_visible = active.get(config.footer_section).copied().unwrap_or(false);

    ScrollState {
        header,
        active,
        footer_visible,
    }
}
