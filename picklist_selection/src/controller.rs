// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection controller shared by single and multi selection.

use alloc::vec::Vec;

use log::debug;

use crate::Item;

/// Where the canonical selection lives, resolved once at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlMode<V> {
    /// The owning consumer supplies the value; local commits only notify.
    Controlled(V),
    /// The controller owns the value, starting from the given initial value.
    Uncontrolled(V),
}

impl<V: Default> ControlMode<V> {
    /// Resolve the initial mode from an optional controlled value and an
    /// optional default.
    ///
    /// Priority is fixed: a controlled value wins, then the default, then the
    /// empty value.
    pub fn resolve(controlled: Option<V>, default: Option<V>) -> Self {
        match controlled {
            Some(value) => Self::Controlled(value),
            None => Self::Uncontrolled(default.unwrap_or_default()),
        }
    }
}

/// Reconcile a prior value against an optional external (controlled) value.
///
/// Returns the external value when it is present and differs from `prior`,
/// otherwise `prior` unchanged. Applying the same external value twice is a
/// no-op.
pub fn reconcile<V: PartialEq>(prior: V, external: Option<V>) -> V {
    match external {
        Some(value) if value != prior => value,
        _ => prior,
    }
}

/// Outcome of a committed selection change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change<V> {
    /// The new selection value, to be reported through the change callback.
    pub value: V,
    /// `true` if the controller stored `value`; `false` when controlled, in
    /// which case the caller is expected to feed back a new controlled value.
    pub applied: bool,
}

/// Canonical selection state of one widget instance.
///
/// `V` is the cardinality: `Option<Item>` for single selection
/// ([`SingleSelection`]) and `Vec<Item>` for multi selection
/// ([`MultiSelection`]).
#[derive(Clone, Debug)]
pub struct SelectionController<V> {
    value: V,
    controlled: bool,
}

/// Single-select controller, as used by dropdowns.
pub type SingleSelection = SelectionController<Option<Item>>;

/// Multi-select controller; the vector keeps selection order.
pub type MultiSelection = SelectionController<Vec<Item>>;

impl<V: Clone + PartialEq> SelectionController<V> {
    /// Create a controller from a resolved [`ControlMode`].
    pub fn new(mode: ControlMode<V>) -> Self {
        match mode {
            ControlMode::Controlled(value) => Self {
                value,
                controlled: true,
            },
            ControlMode::Uncontrolled(value) => Self {
                value,
                controlled: false,
            },
        }
    }

    /// Current selection.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Whether the value is owned by the consumer.
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Overwrite the selection with a new controlled value.
    ///
    /// Returns `true` if the stored value changed. Uncontrolled controllers
    /// ignore this call.
    pub fn reconcile_external(&mut self, value: V) -> bool {
        if !self.controlled {
            debug!("ignoring external value for an uncontrolled selection");
            return false;
        }
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    fn commit(&mut self, next: V) -> Change<V> {
        if self.controlled {
            debug!("controlled selection: reporting change without applying it");
            return Change {
                value: next,
                applied: false,
            };
        }
        self.value = next.clone();
        Change {
            value: next,
            applied: true,
        }
    }
}

impl<V: Clone + PartialEq + Default> SelectionController<V> {
    /// Create a controller from an optional controlled value and an optional
    /// default, see [`ControlMode::resolve`].
    pub fn initialize(controlled: Option<V>, default: Option<V>) -> Self {
        Self::new(ControlMode::resolve(controlled, default))
    }
}

impl SelectionController<Option<Item>> {
    /// Select `item`, replacing the previous selection.
    ///
    /// Returns `None` without touching anything when `item` is disabled.
    pub fn toggle(&mut self, item: &Item) -> Option<Change<Option<Item>>> {
        if item.disabled {
            return None;
        }
        Some(self.commit(Some(item.clone())))
    }

    /// Id of the selected item, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.value.as_ref().map(Item::id)
    }
}

impl SelectionController<Vec<Item>> {
    /// Whether an item with `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.value.iter().any(|i| i.unique_item_id == id)
    }

    /// Remove `item` if it is selected, otherwise append it.
    ///
    /// Returns `None` without touching anything when `item` is disabled.
    pub fn toggle(&mut self, item: &Item) -> Option<Change<Vec<Item>>> {
        if item.disabled {
            return None;
        }
        let next = toggled(&self.value, item);
        Some(self.commit(next))
    }

    /// Drop every selected item that is not flagged disabled.
    ///
    /// Disabled items survive; the returned change carries the remainder.
    pub fn remove_all(&mut self) -> Change<Vec<Item>> {
        let next = self.value.iter().filter(|i| i.disabled).cloned().collect();
        self.commit(next)
    }
}

/// Multi-selection toggle as a pure function.
///
/// Removes the entry matching `item` by id while keeping the order of the
/// rest, or appends `item` when no entry matches.
pub fn toggled(selected: &[Item], item: &Item) -> Vec<Item> {
    if selected.iter().any(|s| s.unique_item_id == item.unique_item_id) {
        selected
            .iter()
            .filter(|s| s.unique_item_id != item.unique_item_id)
            .cloned()
            .collect()
    } else {
        let mut next = Vec::with_capacity(selected.len() + 1);
        next.extend_from_slice(selected);
        next.push(item.clone());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn a() -> Item {
        Item::new("a", "Alpha")
    }
    fn b() -> Item {
        Item::new("b", "Beta")
    }
    fn c() -> Item {
        Item::new("c", "Gamma")
    }
    fn locked() -> Item {
        Item::new("x", "Locked").with_disabled(true)
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(Item::id).collect()
    }

    #[test]
    fn resolve_priority_controlled_then_default_then_empty() {
        assert_eq!(
            ControlMode::resolve(Some(vec![a()]), Some(vec![b()])),
            ControlMode::Controlled(vec![a()])
        );
        assert_eq!(
            ControlMode::resolve(None, Some(vec![b()])),
            ControlMode::Uncontrolled(vec![b()])
        );
        assert_eq!(
            ControlMode::<Vec<Item>>::resolve(None, None),
            ControlMode::Uncontrolled(Vec::new())
        );
    }

    #[test]
    fn reconcile_is_idempotent() {
        let prior = vec![a()];
        let once = reconcile(prior.clone(), Some(vec![b()]));
        assert_eq!(once, vec![b()]);
        let twice = reconcile(once.clone(), Some(vec![b()]));
        assert_eq!(twice, once);
        assert_eq!(reconcile(prior.clone(), None), prior);
    }

    #[test]
    fn reconcile_external_only_when_controlled() {
        let mut controlled = MultiSelection::initialize(Some(vec![a()]), None);
        assert!(controlled.reconcile_external(vec![b()]));
        assert!(!controlled.reconcile_external(vec![b()]));
        assert_eq!(ids(controlled.value()), ["b"]);

        let mut owned = MultiSelection::initialize(None, Some(vec![a()]));
        assert!(!owned.reconcile_external(vec![b()]));
        assert_eq!(ids(owned.value()), ["a"]);
    }

    #[test]
    fn multi_toggle_appends_then_removes_preserving_order() {
        let mut sel = MultiSelection::initialize(None, Some(vec![a(), b()]));
        let change = sel.toggle(&c()).unwrap();
        assert!(change.applied);
        assert_eq!(ids(&change.value), ["a", "b", "c"]);

        sel.toggle(&a());
        assert_eq!(ids(sel.value()), ["b", "c"]);
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let start = vec![b()];
        let mut sel = MultiSelection::initialize(None, Some(start.clone()));
        sel.toggle(&a());
        sel.toggle(&a());
        assert_eq!(sel.value(), &start);
    }

    #[test]
    fn disabled_toggle_is_noop() {
        let mut sel = MultiSelection::initialize(None, Some(vec![locked()]));
        assert!(sel.toggle(&locked()).is_none());
        assert_eq!(ids(sel.value()), ["x"]);

        let mut single = SingleSelection::initialize(None, None);
        assert!(single.toggle(&locked()).is_none());
        assert_eq!(single.value(), &None);
    }

    #[test]
    fn enabled_copy_of_preseeded_item_can_be_toggled_off() {
        // The guard looks at the flag of the instance the user acted on.
        let mut sel = MultiSelection::initialize(None, Some(vec![locked()]));
        let unlocked = locked().with_disabled(false);
        sel.toggle(&unlocked);
        assert!(sel.value().is_empty());
    }

    #[test]
    fn remove_all_keeps_disabled_and_readding_appends() {
        let mut sel = MultiSelection::initialize(None, Some(vec![a(), locked(), b()]));
        let change = sel.remove_all();
        assert!(change.applied);
        assert_eq!(ids(&change.value), ["x"]);

        sel.toggle(&b());
        sel.toggle(&a());
        assert_eq!(ids(sel.value()), ["x", "b", "a"]);
    }

    #[test]
    fn controlled_toggle_reports_without_mutating() {
        let mut sel = MultiSelection::initialize(Some(vec![b()]), None);
        let change = sel.toggle(&a()).unwrap();
        assert!(!change.applied);
        assert_eq!(ids(&change.value), ["b", "a"]);
        assert_eq!(ids(sel.value()), ["b"]);

        // The consumer feeds the value back; only then does it show up.
        assert!(sel.reconcile_external(change.value));
        assert_eq!(ids(sel.value()), ["b", "a"]);
    }

    #[test]
    fn controlled_remove_all_reports_without_mutating() {
        let mut sel = MultiSelection::initialize(Some(vec![a(), locked()]), None);
        let change = sel.remove_all();
        assert!(!change.applied);
        assert_eq!(ids(&change.value), ["x"]);
        assert_eq!(ids(sel.value()), ["a", "x"]);
    }

    #[test]
    fn single_toggle_replaces() {
        let mut sel = SingleSelection::initialize(None, Some(Some(a())));
        assert_eq!(sel.selected_id(), Some("a"));
        let change = sel.toggle(&b()).unwrap();
        assert_eq!(change.value, Some(b()));
        assert_eq!(sel.selected_id(), Some("b"));
    }

    #[test]
    fn single_controlled_only_notifies() {
        let mut sel = SingleSelection::initialize(Some(Some(a())), None);
        let change = sel.toggle(&b()).unwrap();
        assert!(!change.applied);
        assert_eq!(sel.selected_id(), Some("a"));
    }

    #[test]
    fn toggled_matches_by_id() {
        let renamed = Item::new("a", "Alpha (renamed)");
        assert!(toggled(&[a(), b()], &renamed).iter().all(|i| i.id() != "a"));
    }
}
