// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picklist Selection: canonical selection state for list widgets.
//!
//! A [`SelectionController`] owns the selected value of one widget instance.
//! Whether that value is owned by the widget or by its consumer is decided
//! once, at construction, through [`ControlMode`]:
//!
//! - **Uncontrolled**: commits such as [`toggle`](MultiSelection::toggle)
//!   update the stored value and report the new value.
//! - **Controlled**: commits only *report* the value the selection would
//!   have; the stored value changes solely through
//!   [`reconcile_external`](SelectionController::reconcile_external).
//!
//! The same controller serves single selection ([`SingleSelection`], value
//! `Option<Item>`) and multi selection ([`MultiSelection`], value
//! `Vec<Item>` in selection order).
//!
//! ## Minimal example
//!
//! ```rust
//! use picklist_selection::{Item, MultiSelection};
//!
//! let locked = Item::new("fi", "Finland").with_disabled(true);
//! let mut selection = MultiSelection::initialize(None, Some(vec![locked]));
//!
//! let change = selection.toggle(&Item::new("se", "Sweden")).unwrap();
//! assert!(change.applied);
//! assert_eq!(selection.value().len(), 2);
//!
//! // Bulk removal never drops disabled items.
//! let change = selection.remove_all();
//! assert_eq!(change.value.len(), 1);
//! assert_eq!(change.value[0].id(), "fi");
//! ```
//!
//! Multi-selects with free-text addition filter over a pool that includes the
//! custom items still selected; see [`computed_items`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod item;
mod pool;

pub use controller::{
    Change, ControlMode, MultiSelection, SelectionController, SingleSelection, reconcile, toggled,
};
pub use item::Item;
pub use pool::{SelectionError, computed_items, user_added, validate_collection};
