// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selectable entries.

use alloc::string::String;

use picklist_filter::Labeled;

/// One selectable entry of a list widget.
///
/// Identity is [`Item::unique_item_id`]; ids must be unique within the
/// collection handed to a single widget. Controllers clone items into their
/// selection but never modify the caller's copies.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Unique id within the owning collection.
    pub unique_item_id: String,
    /// Label shown in the list and matched by the default filter.
    pub label_text: String,
    /// Optional shorter label used for chips; falls back to `label_text`.
    pub chip_text: Option<String>,
    /// Selection disabled for the user.
    ///
    /// A disabled item may still be part of a selection (for example when
    /// pre-seeded by the caller), but toggle requests carrying this flag are
    /// ignored and [`remove_all`](crate::MultiSelection::remove_all) keeps it.
    pub disabled: bool,
}

impl Item {
    /// Create an enabled item without chip text.
    pub fn new(unique_item_id: impl Into<String>, label_text: impl Into<String>) -> Self {
        Self {
            unique_item_id: unique_item_id.into(),
            label_text: label_text.into(),
            chip_text: None,
            disabled: false,
        }
    }

    /// Synthesize a caller-unlisted item from free text typed by the user.
    ///
    /// The id is the lower-cased query and the label is the query verbatim.
    pub fn custom(query: &str) -> Self {
        Self::new(query.to_lowercase(), query)
    }

    /// Set the chip text.
    #[must_use]
    pub fn with_chip_text(mut self, chip_text: impl Into<String>) -> Self {
        self.chip_text = Some(chip_text.into());
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Shorthand for [`Item::unique_item_id`].
    pub fn id(&self) -> &str {
        &self.unique_item_id
    }

    /// Text to show when the item is rendered as a chip.
    pub fn chip_label(&self) -> &str {
        self.chip_text.as_deref().unwrap_or(&self.label_text)
    }
}

impl Labeled for Item {
    fn label_text(&self) -> &str {
        &self.label_text
    }
}
