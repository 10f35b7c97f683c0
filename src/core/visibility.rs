//! Active-section tracking
//!
//! The browser observer reports batches of visibility changes; this module
//! turns a batch into the next [`UiState`] without touching the DOM, so the
//! logic runs the same in tests and in the browser.

use crate::core::sections::SectionRegistry;
use crate::core::ui_state::UiState;

/// Visible fraction at which a section becomes the active one
pub const ACTIVE_SECTION_THRESHOLD: f64 = 0.3;

/// One observed visibility change for a section element
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityEntry {
    /// Element id of the observed section
    pub id: String,
    /// Whether the element intersects the viewport at all
    pub is_intersecting: bool,
    /// Visible fraction of the element, 0.0..=1.0
    pub intersection_ratio: f64,
}

impl VisibilityEntry {
    pub fn new(id: impl Into<String>, is_intersecting: bool, intersection_ratio: f64) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
            intersection_ratio,
        }
    }

    /// Entry for a section that just crossed `ratio` while entering view
    pub fn entering(id: impl Into<String>, ratio: f64) -> Self {
        Self::new(id, true, ratio)
    }

    /// Entry for a section that left the viewport
    pub fn leaving(id: impl Into<String>) -> Self {
        Self::new(id, false, 0.0)
    }

    /// True when the section is in view at or above `threshold`
    pub fn has_entered(&self, threshold: f64) -> bool {
        self.is_intersecting && self.intersection_ratio >= threshold
    }
}

/// Compute the state after one observer batch.
///
/// Entries below the threshold and ids missing from the registry are ignored.
/// When several sections qualify, the one latest in registry order wins.
/// Section id and theme are always written together.
pub fn apply_visibility_batch(
    entries: &[VisibilityEntry],
    registry: &SectionRegistry,
    state: &UiState,
) -> UiState {
    let mut next = state.clone();

    let winner = entries
        .iter()
        .filter(|entry| entry.has_entered(ACTIVE_SECTION_THRESHOLD))
        .filter_map(|entry| registry.position(&entry.id).map(|pos| (pos, entry)))
        .max_by_key(|(pos, _)| *pos);

    if let Some((pos, _)) = winner {
        let section = registry.entries()[pos];
        next.activate(section.id, section.theme);
    }

    next
}
