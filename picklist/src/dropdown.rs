// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-select listbox.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, trace, warn};

use picklist_nav::{FocusedDescendant, NavKey, Target};
use picklist_selection::{Item, SelectionError, SingleSelection, validate_collection};

use crate::{Effect, Effects, IdGenerator, WidgetId};

/// Construction-time configuration of a [`Dropdown`].
#[derive(Clone, Debug, Default)]
pub struct DropdownConfig {
    /// Explicit widget id; drawn from an [`IdGenerator`] when `None`.
    pub id: Option<String>,
    /// The options.
    pub items: Vec<Item>,
    /// Controlled value (an item id).
    pub value: Option<String>,
    /// Initial value of an uncontrolled dropdown (an item id).
    pub default_value: Option<String>,
    /// Label of the dropdown.
    pub label_text: String,
    /// Shown on the button when nothing is selected.
    pub visual_placeholder: Option<String>,
    /// Always show the placeholder, using the dropdown as an action menu.
    pub always_show_visual_placeholder: bool,
    /// Id of the button; defaults to `{id}_button`.
    pub button_id: Option<String>,
    /// Disable all interaction.
    pub disabled: bool,
}

impl DropdownConfig {
    /// Configuration over `items` with everything else defaulted.
    pub fn new(label_text: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            label_text: label_text.into(),
            items,
            ..Self::default()
        }
    }
}

/// Input delivered to [`Dropdown::handle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The button was clicked.
    ButtonClick,
    /// A navigation key was pressed on the button or in the list.
    Key(NavKey),
    /// An option was clicked.
    ItemClick(String),
    /// A click landed outside the popover.
    ClickOutside,
}

/// Headless dropdown state.
#[derive(Clone, Debug)]
pub struct Dropdown {
    id: WidgetId,
    config: DropdownConfig,
    selection: SingleSelection,
    open: bool,
    focus: FocusedDescendant<String>,
}

fn check_items(label_text: &str, items: &[Item]) {
    match validate_collection(items) {
        Ok(()) => {}
        Err(SelectionError::EmptyCollection) => {
            warn!("Dropdown '{label_text}' does not contain items");
        }
        Err(err) => warn!("Dropdown '{label_text}': {err}"),
    }
}

fn lookup(items: &[Item], id: Option<&str>) -> Option<Item> {
    let id = id?;
    let found = items.iter().find(|i| i.unique_item_id == id).cloned();
    if found.is_none() {
        warn!("Dropdown value '{id}' does not match any item");
    }
    found
}

impl Dropdown {
    /// Create a dropdown from `config`, drawing an id from `ids` if needed.
    pub fn new(config: DropdownConfig, ids: &mut IdGenerator) -> Self {
        let id = ids.resolve(config.id.as_deref());
        check_items(&config.label_text, &config.items);
        let controlled = config
            .value
            .as_deref()
            .map(|v| lookup(&config.items, Some(v)));
        let default = config
            .default_value
            .as_deref()
            .map(|v| lookup(&config.items, Some(v)));
        Self {
            id,
            selection: SingleSelection::initialize(controlled, default),
            open: false,
            focus: FocusedDescendant::new(),
            config,
        }
    }

    /// Process one event.
    pub fn handle(&mut self, event: DropdownEvent) -> Effects<Item> {
        let mut effects = Effects::new();
        if self.config.disabled {
            trace!("Dropdown {}: disabled, ignoring {event:?}", self.id);
            return effects;
        }
        match event {
            DropdownEvent::ButtonClick => {
                if self.open {
                    self.close();
                } else {
                    self.open();
                }
            }
            DropdownEvent::Key(key) => self.on_key(key, &mut effects),
            DropdownEvent::ItemClick(item_id) => {
                let item = self
                    .config
                    .items
                    .iter()
                    .find(|i| i.unique_item_id == item_id)
                    .cloned();
                if let Some(item) = item {
                    self.commit(&item, &mut effects);
                }
            }
            DropdownEvent::ClickOutside => self.close(),
        }
        effects
    }

    fn on_key(&mut self, key: NavKey, effects: &mut Effects<Item>) {
        if !self.open {
            // Any navigation key on the closed button opens the list.
            if key != NavKey::Escape {
                self.open();
            }
            return;
        }
        let ids = self.item_ids();
        if let Some(direction) = key.direction() {
            self.focus.step(&ids, None, direction);
            return;
        }
        match key {
            NavKey::Enter => {
                if let Some(Target::Item(index)) = self.focus.resolve(&ids, None) {
                    let item = self.config.items[index].clone();
                    self.commit(&item, effects);
                }
            }
            NavKey::Escape => self.close(),
            NavKey::ArrowDown | NavKey::ArrowUp => {}
        }
    }

    fn commit(&mut self, item: &Item, effects: &mut Effects<Item>) {
        match self.selection.toggle(item) {
            Some(change) => {
                if let Some(value) = change.value {
                    effects.push(Effect::SelectionChanged(value));
                }
                self.close();
            }
            None => debug!("Dropdown {}: item '{}' is disabled", self.id, item.unique_item_id),
        }
    }

    fn open(&mut self) {
        if self.config.items.is_empty() {
            return;
        }
        self.open = true;
        // Focus starts on the selected option, or the first one.
        let start = self
            .selection
            .selected_id()
            .filter(|id| self.config.items.iter().any(|i| i.unique_item_id == *id))
            .map(String::from)
            .or_else(|| self.config.items.first().map(|i| i.unique_item_id.clone()));
        if let Some(start) = start {
            self.focus.set(start);
        }
        debug!("Dropdown {}: opened", self.id);
    }

    fn close(&mut self) {
        if self.open {
            debug!("Dropdown {}: closed", self.id);
        }
        self.open = false;
        self.focus.clear();
    }

    /// Feed a new controlled value (an item id). Returns `true` if it changed.
    pub fn set_value(&mut self, value: Option<&str>) -> bool {
        let item = lookup(&self.config.items, value);
        self.selection.reconcile_external(item)
    }

    /// Replace the options.
    ///
    /// Focus on an option that is gone moves to the first option while the
    /// list is open.
    pub fn set_items(&mut self, items: Vec<Item>) {
        check_items(&self.config.label_text, &items);
        self.config.items = items;
        if self.config.items.is_empty() {
            self.close();
            return;
        }
        let ids = self.item_ids();
        if self.focus.resolve(&ids, None).is_none() {
            let first = self.open.then(|| ids.into_iter().next()).flatten();
            self.focus.clear();
            if let Some(first) = first {
                self.focus.set(first);
            }
        }
    }

    fn item_ids(&self) -> Vec<String> {
        self.config
            .items
            .iter()
            .map(|i| i.unique_item_id.clone())
            .collect()
    }

    /// The widget id.
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// Id of the button element.
    pub fn button_id(&self) -> String {
        self.config
            .button_id
            .clone()
            .unwrap_or_else(|| format!("{}_button", self.id))
    }

    /// Whether the dropdown has anything to render.
    pub fn is_renderable(&self) -> bool {
        !self.config.items.is_empty()
    }

    /// Whether the list is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the value is owned by the consumer.
    pub fn is_controlled(&self) -> bool {
        self.selection.is_controlled()
    }

    /// The selected item.
    pub fn selected(&self) -> Option<&Item> {
        self.selection.value().as_ref()
    }

    /// Id of the focused option, if any.
    pub fn focused_id(&self) -> Option<&str> {
        self.focus.get().map(String::as_str)
    }

    /// Value for `aria-activedescendant`.
    pub fn active_descendant(&self) -> Option<String> {
        self.focused_id().map(|f| self.id.option_id(f))
    }

    /// Text for the button face.
    pub fn display_text(&self) -> Option<&str> {
        if self.config.always_show_visual_placeholder {
            return self.config.visual_placeholder.as_deref();
        }
        match self.selected() {
            Some(item) => Some(item.label_text.as_str()),
            None => self.config.visual_placeholder.as_deref(),
        }
    }

    /// The options.
    pub fn items(&self) -> &[Item] {
        &self.config.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn items() -> Vec<Item> {
        vec![
            Item::new("a", "Alpha"),
            Item::new("b", "Beta").with_disabled(true),
            Item::new("c", "Gamma"),
        ]
    }

    fn dropdown(config: DropdownConfig) -> Dropdown {
        Dropdown::new(config, &mut IdGenerator::new("dd"))
    }

    #[test]
    fn value_priority_controlled_over_default() {
        let mut config = DropdownConfig::new("Letter", items());
        config.value = Some("c".to_string());
        config.default_value = Some("a".to_string());
        let dd = dropdown(config);
        assert!(dd.is_controlled());
        assert_eq!(dd.selected().map(Item::id), Some("c"));

        let mut config = DropdownConfig::new("Letter", items());
        config.default_value = Some("a".to_string());
        let dd = dropdown(config);
        assert!(!dd.is_controlled());
        assert_eq!(dd.selected().map(Item::id), Some("a"));

        let dd = dropdown(DropdownConfig::new("Letter", items()));
        assert_eq!(dd.selected(), None);
    }

    #[test]
    fn open_focuses_selected_then_navigation_wraps() {
        let mut config = DropdownConfig::new("Letter", items());
        config.default_value = Some("c".to_string());
        let mut dd = dropdown(config);
        dd.handle(DropdownEvent::ButtonClick);
        assert!(dd.is_open());
        assert_eq!(dd.focused_id(), Some("c"));
        assert_eq!(dd.active_descendant().as_deref(), Some("dd-1-c"));

        dd.handle(DropdownEvent::Key(NavKey::ArrowDown));
        assert_eq!(dd.focused_id(), Some("a"));
        dd.handle(DropdownEvent::Key(NavKey::ArrowUp));
        assert_eq!(dd.focused_id(), Some("c"));
    }

    #[test]
    fn enter_commits_and_closes() {
        let mut dd = dropdown(DropdownConfig::new("Letter", items()));
        dd.handle(DropdownEvent::Key(NavKey::ArrowDown));
        assert!(dd.is_open());
        assert_eq!(dd.focused_id(), Some("a"));
        let effects = dd.handle(DropdownEvent::Key(NavKey::Enter));
        assert_eq!(
            effects.as_slice(),
            &[Effect::SelectionChanged(Item::new("a", "Alpha"))]
        );
        assert!(!dd.is_open());
        assert_eq!(dd.display_text(), Some("Alpha"));
    }

    #[test]
    fn disabled_option_cannot_be_chosen() {
        let mut dd = dropdown(DropdownConfig::new("Letter", items()));
        dd.handle(DropdownEvent::ButtonClick);
        let effects = dd.handle(DropdownEvent::ItemClick("b".to_string()));
        assert!(effects.is_empty());
        assert!(dd.is_open());
        assert_eq!(dd.selected(), None);
    }

    #[test]
    fn controlled_dropdown_reports_but_waits_for_value() {
        let mut config = DropdownConfig::new("Letter", items());
        config.value = Some("a".to_string());
        let mut dd = dropdown(config);
        let effects = dd.handle(DropdownEvent::ItemClick("c".to_string()));
        assert_eq!(
            effects.as_slice(),
            &[Effect::SelectionChanged(Item::new("c", "Gamma"))]
        );
        assert_eq!(dd.selected().map(Item::id), Some("a"));
        assert!(dd.set_value(Some("c")));
        assert!(!dd.set_value(Some("c")));
        assert_eq!(dd.selected().map(Item::id), Some("c"));
    }

    #[test]
    fn escape_and_click_outside_close() {
        let mut dd = dropdown(DropdownConfig::new("Letter", items()));
        dd.handle(DropdownEvent::ButtonClick);
        dd.handle(DropdownEvent::Key(NavKey::Escape));
        assert!(!dd.is_open());
        assert_eq!(dd.focused_id(), None);
        dd.handle(DropdownEvent::ButtonClick);
        dd.handle(DropdownEvent::ClickOutside);
        assert!(!dd.is_open());
    }

    #[test]
    fn placeholder_rules() {
        let mut config = DropdownConfig::new("Letter", items());
        config.visual_placeholder = Some("Choose".to_string());
        config.default_value = Some("a".to_string());
        let dd = dropdown(config.clone());
        assert_eq!(dd.display_text(), Some("Alpha"));

        config.always_show_visual_placeholder = true;
        let dd = dropdown(config.clone());
        assert_eq!(dd.display_text(), Some("Choose"));

        config.always_show_visual_placeholder = false;
        config.default_value = None;
        let dd = dropdown(config);
        assert_eq!(dd.display_text(), Some("Choose"));
    }

    #[test]
    fn shrinking_items_moves_focus_off_removed_option() {
        let mut dd = dropdown(DropdownConfig::new("Letter", items()));
        dd.handle(DropdownEvent::ButtonClick);
        dd.handle(DropdownEvent::Key(NavKey::ArrowDown));
        assert_eq!(dd.focused_id(), Some("b"));

        dd.set_items(vec![Item::new("a", "Alpha")]);
        assert_eq!(dd.focused_id(), Some("a"));
        assert_eq!(dd.active_descendant().as_deref(), Some("dd-1-a"));
        let effects = dd.handle(DropdownEvent::Key(NavKey::Enter));
        assert_eq!(
            effects.as_slice(),
            &[Effect::SelectionChanged(Item::new("a", "Alpha"))]
        );
    }

    #[test]
    fn replacing_items_keeps_surviving_focus() {
        let mut dd = dropdown(DropdownConfig::new("Letter", items()));
        dd.handle(DropdownEvent::ButtonClick);
        dd.handle(DropdownEvent::Key(NavKey::ArrowUp));
        assert_eq!(dd.focused_id(), Some("c"));
        dd.set_items(vec![Item::new("c", "Gamma"), Item::new("d", "Delta")]);
        assert_eq!(dd.focused_id(), Some("c"));

        dd.set_items(Vec::new());
        assert!(!dd.is_open());
        assert_eq!(dd.focused_id(), None);
    }

    #[test]
    fn empty_dropdown_is_inert() {
        let mut dd = dropdown(DropdownConfig::new("Nothing", Vec::new()));
        assert!(!dd.is_renderable());
        dd.handle(DropdownEvent::ButtonClick);
        dd.handle(DropdownEvent::Key(NavKey::ArrowDown));
        assert!(!dd.is_open());
        assert!(dd.handle(DropdownEvent::Key(NavKey::Enter)).is_empty());
    }

    #[test]
    fn disabled_dropdown_ignores_events() {
        let mut config = DropdownConfig::new("Letter", items());
        config.disabled = true;
        let mut dd = dropdown(config);
        dd.handle(DropdownEvent::ButtonClick);
        assert!(!dd.is_open());
    }

    #[test]
    fn ids() {
        let mut config = DropdownConfig::new("Letter", items());
        config.id = Some("letter".to_string());
        let dd = dropdown(config.clone());
        assert_eq!(dd.button_id(), "letter_button");
        config.button_id = Some("custom".to_string());
        assert_eq!(dropdown(config).button_id(), "custom");
    }
}
