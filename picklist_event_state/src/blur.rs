// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred focus-boundary detection.
//!
//! When the text input of a combobox loses focus, the platform has not yet
//! moved focus to whatever the user clicked. Checking synchronously would
//! close the popover while the user is clicking an option inside it. So the
//! check is split in two:
//!
//! 1. [`BlurCheck::on_blur`] arms a pending check. The host schedules a
//!    callback for the next frame.
//! 2. [`BlurCheck::settle`] runs on that frame with the [`FocusRegions`] that
//!    now contain the active element, and reports whether focus left.
//!
//! ```
//! use picklist_event_state::blur::{BlurCheck, BlurOutcome, FocusRegions};
//!
//! let mut check = BlurCheck::new();
//!
//! // Blur, then focus lands on an option in the popover.
//! check.on_blur();
//! assert_eq!(check.settle(FocusRegions::POPOVER), Some(BlurOutcome::Stayed));
//!
//! // Blur, then focus lands somewhere else on the page.
//! check.on_blur();
//! assert_eq!(check.settle(FocusRegions::empty()), Some(BlurOutcome::Left));
//!
//! // Nothing pending, nothing to report.
//! assert_eq!(check.settle(FocusRegions::empty()), None);
//! ```

use bitflags::bitflags;

bitflags! {
    /// Parts of a widget that may hold focus.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct FocusRegions: u8 {
        /// The text input.
        const INPUT = 1 << 0;
        /// The popover list.
        const POPOVER = 1 << 1;
        /// The button that toggles the popover.
        const TOGGLE_BUTTON = 1 << 2;
    }
}

/// Result of a settled blur check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlurOutcome {
    /// Focus is still inside one of the watched regions.
    Stayed,
    /// Focus left every watched region.
    Left,
}

/// Two-phase blur check.
#[derive(Clone, Debug)]
pub struct BlurCheck {
    /// Regions that count as "inside the widget".
    pub watched: FocusRegions,
    pending: bool,
}

impl BlurCheck {
    /// Watch all of [`FocusRegions`].
    pub fn new() -> Self {
        Self::watching(FocusRegions::all())
    }

    /// Watch only the given regions.
    pub fn watching(watched: FocusRegions) -> Self {
        Self {
            watched,
            pending: false,
        }
    }

    /// Arm the check. The host must call [`BlurCheck::settle`] once focus has
    /// moved.
    pub fn on_blur(&mut self) {
        self.pending = true;
    }

    /// Disarm a pending check, for example when focus returns before it ran.
    pub fn on_focus(&mut self) {
        self.pending = false;
    }

    /// Whether a check is armed.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Run the armed check against the regions holding focus now.
    ///
    /// Returns `None` if no check was armed.
    pub fn settle(&mut self, active: FocusRegions) -> Option<BlurOutcome> {
        if !core::mem::take(&mut self.pending) {
            return None;
        }
        if active.intersects(self.watched) {
            Some(BlurOutcome::Stayed)
        } else {
            Some(BlurOutcome::Left)
        }
    }
}

impl Default for BlurCheck {
    fn default() -> Self {
        Self::new()
    }
}
