// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Self-clearing live-region text.
//!
//! Assertive screen-reader announcements such as "Finland removed" must not
//! linger, or they would be read again on the next update. An [`Announcer`]
//! keeps the text until a fixed delay has passed since it was set. Setting new
//! text restarts the delay, so a stale clear never wipes a fresh message.

/// Delay after which announcement text is cleared, in milliseconds.
pub const DEFAULT_CLEAR_DELAY: u64 = 1000;

/// Holder for announcement text with an auto-clear deadline.
#[derive(Clone, Debug)]
pub struct Announcer<T> {
    /// Milliseconds between [`Announcer::announce`] and the automatic clear.
    pub clear_delay: u64,
    text: Option<T>,
    clear_at: Option<u64>,
}

impl<T> Announcer<T> {
    /// Create an announcer using [`DEFAULT_CLEAR_DELAY`].
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_CLEAR_DELAY)
    }

    /// Create an announcer with a custom clear delay.
    pub fn with_delay(clear_delay: u64) -> Self {
        Self {
            clear_delay,
            text: None,
            clear_at: None,
        }
    }

    /// Set the text at time `now`, superseding any pending clear.
    pub fn announce(&mut self, text: T, now: u64) {
        self.text = Some(text);
        self.clear_at = Some(now.saturating_add(self.clear_delay));
    }

    /// Clear the text if its deadline has passed.
    ///
    /// Returns `true` if the text was cleared by this call.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.clear_at {
            Some(at) if now >= at => {
                self.clear_at = None;
                self.text = None;
                true
            }
            _ => false,
        }
    }

    /// The text currently announced.
    pub fn text(&self) -> Option<&T> {
        self.text.as_ref()
    }

    /// When the text will clear, if it is set.
    pub fn deadline(&self) -> Option<u64> {
        self.clear_at
    }

    /// Clear immediately, for example when the widget is torn down.
    pub fn cancel(&mut self) {
        self.text = None;
        self.clear_at = None;
    }
}

impl<T> Default for Announcer<T> {
    fn default() -> Self {
        Self::new()
    }
}
