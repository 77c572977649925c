// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picklist Filter: narrowing a list of selectable entries by a query.
//!
//! The engine is deliberately small. It never decides *what* matches; the
//! caller supplies a predicate and the engine applies it to each entry in
//! order, collecting the ones that pass:
//!
//! - [`filter`] returns the matching entries as a new vector.
//! - [`filter_indices`] returns their positions in the input instead, for
//!   hosts that keep entries elsewhere.
//! - [`label_contains`] is the stock predicate: a case-insensitive substring
//!   match on the entry's [`Labeled::label_text`].
//!
//! Output always preserves input order and is a subsequence of the input.
//! Nothing matching yields an empty vector. Panics raised by a predicate are
//! not caught.
//!
//! ## Minimal example
//!
//! ```rust
//! use picklist_filter::{filter, label_contains, Labeled};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Fruit(&'static str);
//!
//! impl Labeled for Fruit {
//!     fn label_text(&self) -> &str {
//!         self.0
//!     }
//! }
//!
//! let fruits = [Fruit("Apple"), Fruit("Banana"), Fruit("Pineapple")];
//! let hits = filter(&fruits, "APP", label_contains);
//! assert_eq!(hits, vec![Fruit("Apple"), Fruit("Pineapple")]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Entries that carry a human-readable label.
///
/// The label is what users type against, so [`label_contains`] matches on it.
pub trait Labeled {
    /// The text shown for this entry in a list.
    fn label_text(&self) -> &str;
}

impl<T: Labeled + ?Sized> Labeled for &T {
    fn label_text(&self) -> &str {
        (**self).label_text()
    }
}

/// Return the entries of `items` that satisfy `predicate`, in input order.
///
/// The predicate is invoked exactly once per entry, front to back.
pub fn filter<T, P>(items: &[T], query: &str, mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, &str) -> bool,
{
    items
        .iter()
        .filter(|item| predicate(item, query))
        .cloned()
        .collect()
}

/// Like [`filter`], but return positions into `items` rather than clones.
pub fn filter_indices<T, P>(items: &[T], query: &str, mut predicate: P) -> Vec<usize>
where
    P: FnMut(&T, &str) -> bool,
{
    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| predicate(item, query).then_some(i))
        .collect()
}

/// Case-insensitive substring match of `query` within the entry's label.
///
/// An empty query matches everything.
pub fn label_contains<T: Labeled + ?Sized>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    item.label_text()
        .to_lowercase()
        .contains(query.to_lowercase().as_str())
}
