// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picklist Nav: keyboard navigation over a filtered list.
//!
//! List widgets track the keyboard-highlighted entry (the *focused
//! descendant*) by id rather than by index, because the visible list is
//! re-filtered on every keystroke. This crate turns arrow-key intents into a
//! new focused id:
//!
//! - [`NavKey`] is the small set of keys list widgets react to.
//! - [`step`] computes the next focused id for a [`Direction`] with mandatory
//!   wrap-around.
//! - [`FocusedDescendant`] stores the current id and applies [`step`].
//!
//! Widgets that let users turn their query into a new entry pass that
//! synthetic entry's id as `addition`. It is addressable *after* the last real
//! entry when moving forward, and *before* the first one when moving
//! backward.
//!
//! ## Minimal example
//!
//! ```rust
//! use picklist_nav::{Direction, FocusedDescendant};
//!
//! let ids = ["alpha", "beta", "gamma"];
//! let mut focus = FocusedDescendant::new();
//!
//! assert_eq!(focus.step(&ids, None, Direction::Next), Some(&"alpha"));
//! assert_eq!(focus.step(&ids, None, Direction::Prev), Some(&"gamma"));
//!
//! // With a free-text entry available, moving past the end lands on it.
//! let addition = "delta";
//! assert_eq!(focus.step(&ids, Some(&addition), Direction::Next), Some(&"delta"));
//! assert_eq!(focus.step(&ids, Some(&addition), Direction::Next), Some(&"alpha"));
//! ```
//!
//! The core types are generic over the id type `K`; widgets typically use
//! `String`.
//!
//! This crate is `no_std`.

#![no_std]

/// Keys that drive list navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Move focus forward, opening the popover if needed.
    ArrowDown,
    /// Move focus backward, opening the popover if needed.
    ArrowUp,
    /// Commit the focused entry.
    Enter,
    /// Clear the query, close, and drop focus.
    Escape,
}

impl NavKey {
    /// The movement this key requests, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowDown => Some(Direction::Next),
            Self::ArrowUp => Some(Direction::Prev),
            Self::Enter | Self::Escape => None,
        }
    }
}

/// Direction of a focus move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the end of the list.
    Next,
    /// Toward the start of the list.
    Prev,
}

/// What a focused id refers to in the current list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A real entry at this index.
    Item(usize),
    /// The synthetic free-text entry.
    Addition,
}

/// Compute the id that should receive focus after moving in `direction`.
///
/// `items` are the ids of the visible entries in order, `focused` the
/// current focus, and `addition` the id of the synthetic free-text entry
/// when it is offered.
///
/// - Forward: onto `addition` from the last entry (or from anywhere when the
///   list is empty), otherwise `(index + 1) mod len`, starting at the first
///   entry when nothing real is focused.
/// - Backward: onto `addition` from no focus or the first entry (or from
///   anywhere when the list is empty), otherwise `(index - 1 + len) mod len`,
///   starting at the last entry when nothing real is focused.
///
/// Returns `None` only when there is nothing to focus at all.
pub fn step<K>(
    items: &[K],
    focused: Option<&K>,
    addition: Option<&K>,
    direction: Direction,
) -> Option<K>
where
    K: PartialEq + Clone,
{
    let len = items.len();
    let index = focused.and_then(|f| items.iter().position(|k| k == f));

    if let Some(addition) = addition {
        let onto_addition = match direction {
            Direction::Next => len == 0 || index == Some(len - 1),
            Direction::Prev => len == 0 || focused.is_none() || index == Some(0),
        };
        if onto_addition {
            return Some(addition.clone());
        }
    }

    if len == 0 {
        return None;
    }

    let next = match (direction, index) {
        (Direction::Next, Some(i)) => (i + 1) % len,
        (Direction::Next, None) => 0,
        (Direction::Prev, Some(i)) => (i + len - 1) % len,
        (Direction::Prev, None) => len - 1,
    };
    Some(items[next].clone())
}

/// The keyboard-highlighted entry of a list, tracked by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusedDescendant<K> {
    focused: Option<K>,
}

impl<K> Default for FocusedDescendant<K> {
    fn default() -> Self {
        Self { focused: None }
    }
}

impl<K: PartialEq + Clone> FocusedDescendant<K> {
    /// Start without focus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused id.
    pub fn get(&self) -> Option<&K> {
        self.focused.as_ref()
    }

    /// Focus `id` directly, for example after a pointer click.
    pub fn set(&mut self, id: K) {
        self.focused = Some(id);
    }

    /// Drop focus.
    pub fn clear(&mut self) {
        self.focused = None;
    }

    /// Move focus, see [`step`]. Focus is left untouched when there is
    /// nothing to move to.
    pub fn step(&mut self, items: &[K], addition: Option<&K>, direction: Direction) -> Option<&K> {
        if let Some(next) = step(items, self.focused.as_ref(), addition, direction) {
            self.focused = Some(next);
        }
        self.focused.as_ref()
    }

    /// Resolve the focused id against the current list.
    ///
    /// Returns `None` when nothing is focused or the focused id is neither
    /// visible nor the offered `addition`.
    pub fn resolve(&self, items: &[K], addition: Option<&K>) -> Option<Target> {
        let focused = self.focused.as_ref()?;
        if let Some(i) = items.iter().position(|k| k == focused) {
            return Some(Target::Item(i));
        }
        (addition == Some(focused)).then_some(Target::Addition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [u32; 3] = [10, 20, 30];

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(step(&IDS, Some(&30), None, Direction::Next), Some(10));
        assert_eq!(step(&IDS, Some(&10), None, Direction::Prev), Some(30));
        assert_eq!(step(&IDS, Some(&10), None, Direction::Next), Some(20));
        assert_eq!(step(&IDS, Some(&20), None, Direction::Prev), Some(10));
    }

    #[test]
    fn unfocused_starts_at_the_ends() {
        assert_eq!(step(&IDS, None, None, Direction::Next), Some(10));
        assert_eq!(step(&IDS, None, None, Direction::Prev), Some(30));
        // A stale id behaves like no focus.
        assert_eq!(step(&IDS, Some(&99), None, Direction::Next), Some(10));
    }

    #[test]
    fn empty_list_is_a_noop() {
        let empty: [u32; 0] = [];
        assert_eq!(step(&empty, None, None, Direction::Next), None);
        assert_eq!(step(&empty, Some(&1), None, Direction::Prev), None);

        let mut focus = FocusedDescendant::new();
        assert_eq!(focus.step(&empty, None, Direction::Next), None);
        focus.set(7);
        assert_eq!(focus.step(&empty, None, Direction::Prev), Some(&7));
    }

    #[test]
    fn addition_follows_last_entry() {
        assert_eq!(step(&IDS, Some(&30), Some(&99), Direction::Next), Some(99));
        // From the addition, forward wraps to the first entry.
        assert_eq!(step(&IDS, Some(&99), Some(&99), Direction::Next), Some(10));
        // Not at the end: regular movement.
        assert_eq!(step(&IDS, Some(&10), Some(&99), Direction::Next), Some(20));
    }

    #[test]
    fn addition_precedes_first_entry() {
        assert_eq!(step(&IDS, None, Some(&99), Direction::Prev), Some(99));
        assert_eq!(step(&IDS, Some(&10), Some(&99), Direction::Prev), Some(99));
        // From the addition, backward goes to the last entry.
        assert_eq!(step(&IDS, Some(&99), Some(&99), Direction::Prev), Some(30));
    }

    #[test]
    fn addition_is_the_only_target_in_empty_list() {
        let empty: [u32; 0] = [];
        assert_eq!(step(&empty, None, Some(&5), Direction::Next), Some(5));
        assert_eq!(step(&empty, Some(&5), Some(&5), Direction::Prev), Some(5));
    }

    #[test]
    fn never_leaves_bounds() {
        for len in 0..5_usize {
            let ids: [usize; 5] = [0, 1, 2, 3, 4];
            let items = &ids[..len];
            let mut focus = FocusedDescendant::new();
            for n in 0..12 {
                let dir = if n % 3 == 0 {
                    Direction::Prev
                } else {
                    Direction::Next
                };
                if let Some(id) = focus.step(items, None, dir) {
                    assert!(items.contains(id), "{id} escaped a list of {len}");
                }
            }
        }
    }

    #[test]
    fn resolve_distinguishes_items_and_addition() {
        let mut focus = FocusedDescendant::new();
        assert_eq!(focus.resolve(&IDS, Some(&99)), None);
        focus.set(20);
        assert_eq!(focus.resolve(&IDS, Some(&99)), Some(Target::Item(1)));
        focus.set(99);
        assert_eq!(focus.resolve(&IDS, Some(&99)), Some(Target::Addition));
        assert_eq!(focus.resolve(&IDS, None), None);
    }

    #[test]
    fn keys_map_to_directions() {
        assert_eq!(NavKey::ArrowDown.direction(), Some(Direction::Next));
        assert_eq!(NavKey::ArrowUp.direction(), Some(Direction::Prev));
        assert_eq!(NavKey::Enter.direction(), None);
        assert_eq!(NavKey::Escape.direction(), None);
    }
}
