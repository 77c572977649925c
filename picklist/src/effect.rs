// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effects returned to the host from event handling.

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use picklist_selection::Item;

/// Something the host should do or report after an event was handled.
///
/// `V` is the widget's selection value: `Vec<Item>` for a multi-select,
/// `Item` for a dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect<V> {
    /// The selection changed (or, when controlled, would change) to this
    /// value.
    SelectionChanged(V),
    /// The user selected or deselected the item with this id.
    ItemSelected(String),
    /// The remove-all button was pressed.
    RemovedAll,
    /// The visible list was re-filtered.
    FilterChanged(Vec<Item>),
    /// Debounced notification of the query text.
    QueryChanged(String),
    /// The input lost focus.
    Blurred,
    /// Call back with the focused regions on the next frame.
    ScheduleSettle,
    /// Move focus back to the text input.
    FocusInput,
}

/// Effects of a single event, in the order they should be delivered.
pub type Effects<V> = SmallVec<[Effect<V>; 4]>;
