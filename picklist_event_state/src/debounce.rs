// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced notifications.
//!
//! A [`Debouncer`] sits between an input stream and a notification callback.
//! Without an interval every value passes straight through. With one, each
//! value replaces the pending one and restarts the wait; the value is
//! released by [`Debouncer::poll`] once the wait has elapsed.
//!
//! ```
//! use picklist_event_state::debounce::Debouncer;
//!
//! let mut debouncer = Debouncer::new(Some(300));
//! assert_eq!(debouncer.push("f", 1000), None);
//! assert_eq!(debouncer.push("fi", 1100), None);
//!
//! assert_eq!(debouncer.poll(1300), None); // 200ms since the last input
//! assert_eq!(debouncer.poll(1400), Some("fi"));
//! assert_eq!(debouncer.poll(2000), None);
//!
//! let mut immediate = Debouncer::new(None);
//! assert_eq!(immediate.push("fi", 0), Some("fi"));
//! ```

/// Trailing-edge debouncer driven by a millisecond clock.
#[derive(Clone, Debug)]
pub struct Debouncer<V> {
    /// Quiet interval in milliseconds, or `None` to pass values through.
    pub wait: Option<u64>,
    pending: Option<Pending<V>>,
}

#[derive(Clone, Debug)]
struct Pending<V> {
    value: V,
    deadline: u64,
}

impl<V> Debouncer<V> {
    /// Create a debouncer with the given interval.
    pub fn new(wait: Option<u64>) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Feed a new value at time `now`.
    ///
    /// Returns the value right away when no interval is configured.
    /// Otherwise stores it, superseding any pending value, and returns `None`.
    pub fn push(&mut self, value: V, now: u64) -> Option<V> {
        match self.wait {
            None => Some(value),
            Some(wait) => {
                self.pending = Some(Pending {
                    value,
                    deadline: now.saturating_add(wait),
                });
                None
            }
        }
    }

    /// Release the pending value if its deadline has passed.
    pub fn poll(&mut self, now: u64) -> Option<V> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// When the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Whether a value is waiting to be released.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without releasing it.
    ///
    /// Returns `true` if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

impl<V> Default for Debouncer<V> {
    fn default() -> Self {
        Self::new(None)
    }
}
