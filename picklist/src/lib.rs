// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picklist: headless state for Dropdown and MultiSelect widgets.
//!
//! Each widget is a plain struct holding all of its interaction state, fed
//! one event at a time. Handling an event updates the state and returns a
//! list of [`Effect`]s for the host to act on: report a selection change,
//! move focus back to the input, schedule a focus check for the next frame,
//! and so on. Nothing here renders, so the whole interaction model can be
//! unit tested without a UI harness.
//!
//! - [`MultiSelect`]: filterable combobox with chips, bulk removal, and
//!   optional free-text addition.
//! - [`Dropdown`]: single-select listbox.
//!
//! Both are built from the lower-level crates: `picklist_filter` narrows the
//! list, `picklist_nav` moves the focused descendant, `picklist_selection`
//! reconciles controlled and uncontrolled values, and `picklist_event_state`
//! provides the debounce, announcement, and blur-settle timers.
//!
//! ## Minimal example
//!
//! ```rust
//! use picklist::{
//!     Effect, IdGenerator, Item, MultiSelect, MultiSelectConfig, MultiSelectEvent, NavKey,
//! };
//!
//! let mut ids = IdGenerator::new("form");
//! let config = MultiSelectConfig::new(vec![
//!     Item::new("fi", "Finland"),
//!     Item::new("se", "Sweden"),
//! ]);
//! let mut countries = MultiSelect::new(config, &mut ids);
//!
//! countries.handle(MultiSelectEvent::Input("swe".into()), 0);
//! countries.handle(MultiSelectEvent::Key(NavKey::ArrowDown), 10);
//! assert_eq!(countries.active_descendant().as_deref(), Some("form-1-se"));
//!
//! let effects = countries.handle(MultiSelectEvent::Key(NavKey::Enter), 20);
//! assert!(effects.contains(&Effect::ItemSelected("se".into())));
//! assert_eq!(countries.selected_items()[0].label_text, "Sweden");
//! ```
//!
//! ## Time and focus
//!
//! Widgets never start timers. Every event carries the host's clock in
//! milliseconds, and hosts send [`MultiSelectEvent::Tick`] from their frame
//! loop so debounced query notifications and chip-removal announcements can
//! expire. A blur returns [`Effect::ScheduleSettle`]; the host answers one
//! frame later with [`MultiSelectEvent::FocusSettled`] and the
//! [`FocusRegions`] that now contain focus.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dropdown;
mod effect;
mod id;
mod multi_select;

pub use dropdown::{Dropdown, DropdownConfig, DropdownEvent};
pub use effect::{Effect, Effects};
pub use id::{IdGenerator, WidgetId};
pub use multi_select::{
    FilterFn, Labels, MultiSelect, MultiSelectConfig, MultiSelectEvent, OptionView,
};

pub use picklist_event_state::blur::FocusRegions;
pub use picklist_nav::NavKey;
pub use picklist_selection::Item;
