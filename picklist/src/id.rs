// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget and option identifiers.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Stable identifier of one widget instance.
///
/// Accessibility wiring (`aria-activedescendant`, `aria-owns`, live regions)
/// refers to elements by ids derived from this one, so it must not change
/// across re-renders.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(String);

impl WidgetId {
    /// Wrap an explicit id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the option element for `unique_item_id`: `{widget}-{item}`.
    pub fn option_id(&self, unique_item_id: &str) -> String {
        format!("{}-{}", self.0, unique_item_id)
    }

    /// Id of the popover list.
    pub fn popover_id(&self) -> String {
        format!("{}-popover", self.0)
    }

    /// Id of the assertive live region announcing chip removals.
    pub fn chip_removal_announce_id(&self) -> String {
        format!("{}-chip-removal-announce", self.0)
    }

    /// Id of the polite live region announcing the filtered count.
    pub fn filtered_items_length_id(&self) -> String {
        format!("{}-filteredItems-length", self.0)
    }

    /// Id of the visible label element.
    pub fn label_id(&self) -> String {
        format!("{}-label", self.0)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands out widget ids for instances created without an explicit one.
///
/// Hosts keep one generator (for example per document) and pass it to widget
/// constructors; each instance draws its id once, at construction.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    prefix: String,
    next: u64,
}

impl IdGenerator {
    /// Create a generator producing `{prefix}-1`, `{prefix}-2`, ….
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Draw a fresh id.
    pub fn next_id(&mut self) -> WidgetId {
        let id = WidgetId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }

    /// Use `explicit` when given, otherwise draw a fresh id.
    pub fn resolve(&mut self, explicit: Option<&str>) -> WidgetId {
        match explicit {
            Some(id) => WidgetId::new(id),
            None => self.next_id(),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("picklist")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let mut ids = IdGenerator::new("w");
        assert_eq!(ids.next_id().as_str(), "w-1");
        assert_eq!(ids.next_id().as_str(), "w-2");
    }

    #[test]
    fn explicit_id_wins_and_does_not_consume() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.resolve(Some("country")).as_str(), "country");
        assert_eq!(ids.resolve(None).as_str(), "picklist-1");
    }

    #[test]
    fn derived_ids() {
        let id = WidgetId::new("country");
        assert_eq!(id.option_id("fi"), "country-fi");
        assert_eq!(id.popover_id(), "country-popover");
        assert_eq!(id.chip_removal_announce_id(), "country-chip-removal-announce");
        assert_eq!(id.filtered_items_length_id(), "country-filteredItems-length");
        assert_eq!(id.label_id(), "country-label");
    }
}
