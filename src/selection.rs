//! Format and quality selection
//!
//! Small state machine over the current format family and quality label.
//! Transitions are explicit methods; [`SelectionState::current_selection`]
//! is a pure query and never mutates. The quality invariant (a set label
//! always names an option of the active family) is maintained by resetting
//! the label on every family change.

use crate::media::catalog::{FormatOption, MediaFormat};

/// The current user choice: a format family plus an optional quality
/// label. `None` quality means nothing is selected yet; a download cannot
/// start in that state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    format: MediaFormat,
    quality: Option<String>,
}

impl SelectionState {
    /// Initial state: video family, no quality.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&self) -> MediaFormat {
        self.format
    }

    pub fn quality(&self) -> Option<&str> {
        self.quality.as_deref()
    }

    /// Switch the format family, resetting the quality unconditionally,
    /// even when the family does not change.
    pub fn select_format(&mut self, format: MediaFormat) {
        self.format = format;
        self.quality = None;
    }

    /// Set the quality label. Precondition: the label belongs to an option
    /// of the current family (the caller offers only valid labels; see
    /// [`crate::app::Controller::select_quality`] for the guarded entry).
    pub fn select_quality(&mut self, label: impl Into<String>) {
        self.quality = Some(label.into());
    }

    /// Auto-assign the first option of the current family, in catalog
    /// order, when no quality is set. Idempotent: an already-set quality
    /// is never overwritten. Invoked on format-change and post-resolution
    /// events, never from a query.
    pub fn ensure_quality(&mut self, catalog: &[FormatOption]) {
        if self.quality.is_some() {
            return;
        }
        if let Some(first) = catalog.iter().find(|o| o.format == self.format) {
            self.quality = Some(first.quality.to_string());
        }
    }

    /// The option matching (format, quality), or `None` when no quality is
    /// set or nothing in the catalog matches.
    pub fn current_selection(&self, catalog: &[FormatOption]) -> Option<FormatOption> {
        let quality = self.quality.as_deref()?;
        catalog
            .iter()
            .find(|o| o.format == self.format && o.quality == quality)
            .copied()
    }
}
