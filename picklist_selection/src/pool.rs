// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pool of items a multi-select filters over, and collection checks.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use thiserror::Error;

use crate::Item;

/// Problems with a caller-supplied item collection.
///
/// Widgets tolerate these and only log them; hosts that want to reject bad
/// input up front can call [`validate_collection`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Two items share the same `unique_item_id`.
    #[error("duplicate item id `{id}`")]
    DuplicateItemId {
        /// The repeated id.
        id: String,
    },
    /// The collection has no items at all.
    #[error("item collection is empty")]
    EmptyCollection,
}

/// Check that `items` is non-empty and that ids are unique.
///
/// Reports the first duplicate in collection order.
pub fn validate_collection(items: &[Item]) -> Result<(), SelectionError> {
    if items.is_empty() {
        return Err(SelectionError::EmptyCollection);
    }
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id()) {
            return Err(SelectionError::DuplicateItemId {
                id: item.unique_item_id.clone(),
            });
        }
    }
    Ok(())
}

/// Selected items that the caller never listed, such as free-text additions.
pub fn user_added(collection: &[Item], selected: &[Item]) -> Vec<Item> {
    let known: HashSet<&str> = collection.iter().map(Item::id).collect();
    selected
        .iter()
        .filter(|s| !known.contains(s.id()))
        .cloned()
        .collect()
}

/// The collection followed by the [`user_added`] items still selected.
///
/// Custom items stay filterable while selected and leave the pool once
/// deselected.
pub fn computed_items(collection: &[Item], selected: &[Item]) -> Vec<Item> {
    let mut pool = Vec::with_capacity(collection.len());
    pool.extend_from_slice(collection);
    pool.extend(user_added(collection, selected));
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn validate_flags_duplicates_and_empty() {
        assert_eq!(validate_collection(&[]), Err(SelectionError::EmptyCollection));
        let dup = [Item::new("a", "A"), Item::new("b", "B"), Item::new("a", "A2")];
        assert_eq!(
            validate_collection(&dup),
            Err(SelectionError::DuplicateItemId { id: "a".into() })
        );
        assert_eq!(validate_collection(&dup[..2]), Ok(()));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = SelectionError::DuplicateItemId { id: "fi".into() };
        assert_eq!(err.to_string(), "duplicate item id `fi`");
    }

    #[test]
    fn pool_carries_selected_custom_items_only() {
        let collection = vec![Item::new("a", "Alpha"), Item::new("b", "Beta")];
        let custom = Item::custom("Zeta");
        let selected = vec![Item::new("b", "Beta"), custom.clone()];

        let pool = computed_items(&collection, &selected);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool[2], custom);

        // Once deselected, the custom item is gone from the pool.
        let pool = computed_items(&collection, &selected[..1]);
        assert_eq!(pool, collection);
    }

    #[test]
    fn user_added_ignores_listed_items() {
        let collection = vec![Item::new("a", "Alpha")];
        let selected = vec![Item::new("a", "Alpha"), Item::custom("new")];
        let added = user_added(&collection, &selected);
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].id(), "new");
    }
}
