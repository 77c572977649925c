// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filterable multi-select combobox.
//!
//! The popover lifecycle is `Closed → Open → Closed`:
//!
//! - Opened by focusing the input, typing, arrow keys, or the toggle button.
//! - Closed by Escape, a click outside the widget (other than on the toggle
//!   button), the toggle button, or a blur whose settle check finds focus
//!   outside the input, popover, and toggle button.
//!
//! Selecting items never closes the popover.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace, warn};

use picklist_event_state::announce::Announcer;
use picklist_event_state::blur::{BlurCheck, BlurOutcome, FocusRegions};
use picklist_event_state::debounce::Debouncer;
use picklist_filter::{filter, label_contains};
use picklist_nav::{FocusedDescendant, NavKey, Target};
use picklist_selection::{Item, MultiSelection, computed_items, user_added, validate_collection};

use crate::{Effect, Effects, IdGenerator, WidgetId};

/// Filter predicate deciding whether an item matches the query.
///
/// Shared so configs stay cheap to clone; closures may capture state such as
/// a match mode.
pub type FilterFn = Rc<dyn Fn(&Item, &str) -> bool>;

/// Screen-reader and placeholder texts of a multi-select.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Labels {
    /// Visible label of the input.
    pub label_text: String,
    /// Shown in the popover when nothing matches and addition is off.
    pub no_items_text: String,
    /// Appended to the selected count, e.g. `" selected"`.
    pub aria_selected_amount_text: String,
    /// Appended to the filtered count, e.g. `" options available"`.
    pub aria_options_available_text: String,
    /// Appended to a chip's label when it is removed, e.g. `"removed"`.
    pub aria_option_chip_removed_text: String,
}

/// Construction-time configuration of a [`MultiSelect`].
#[derive(Clone)]
pub struct MultiSelectConfig {
    /// Explicit widget id; drawn from an [`IdGenerator`] when `None`.
    pub id: Option<String>,
    /// The caller's item collection.
    pub items: Vec<Item>,
    /// Controlled selection. When set, the widget never changes its own
    /// selection; feed updates through [`MultiSelect::set_selected_items`].
    pub selected_items: Option<Vec<Item>>,
    /// Initial selection of an uncontrolled widget.
    pub default_selected_items: Option<Vec<Item>>,
    /// Predicate used to filter the list while typing.
    pub filter: FilterFn,
    /// Let users add their query as a new item.
    pub allow_item_addition: bool,
    /// Debounce interval for [`Effect::QueryChanged`], in milliseconds.
    pub debounce: Option<u64>,
    /// Disable all interaction.
    pub disabled: bool,
    /// Texts.
    pub labels: Labels,
}

impl Default for MultiSelectConfig {
    fn default() -> Self {
        Self {
            id: None,
            items: Vec::new(),
            selected_items: None,
            default_selected_items: None,
            filter: Rc::new(label_contains::<Item>),
            allow_item_addition: false,
            debounce: None,
            disabled: false,
            labels: Labels::default(),
        }
    }
}

impl fmt::Debug for MultiSelectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSelectConfig")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("selected_items", &self.selected_items)
            .field("default_selected_items", &self.default_selected_items)
            .field("allow_item_addition", &self.allow_item_addition)
            .field("debounce", &self.debounce)
            .field("disabled", &self.disabled)
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

impl MultiSelectConfig {
    /// Configuration over `items` with everything else defaulted.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Set an explicit widget id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Make the selection controlled, starting at `selected`.
    #[must_use]
    pub fn with_selected_items(mut self, selected: Vec<Item>) -> Self {
        self.selected_items = Some(selected);
        self
    }

    /// Set the initial selection of an uncontrolled widget.
    #[must_use]
    pub fn with_default_selected_items(mut self, selected: Vec<Item>) -> Self {
        self.default_selected_items = Some(selected);
        self
    }

    /// Replace the filter predicate.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Fn(&Item, &str) -> bool + 'static) -> Self {
        self.filter = Rc::new(filter);
        self
    }

    /// Enable or disable free-text item addition.
    #[must_use]
    pub fn with_item_addition(mut self, allow: bool) -> Self {
        self.allow_item_addition = allow;
        self
    }

    /// Debounce query notifications by `millis`.
    #[must_use]
    pub fn with_debounce(mut self, millis: u64) -> Self {
        self.debounce = Some(millis);
        self
    }

    /// Disable the widget.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the texts.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }
}

/// Input delivered to [`MultiSelect::handle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MultiSelectEvent {
    /// The input gained focus.
    Focus,
    /// The input text changed.
    Input(String),
    /// A navigation key was pressed in the input or popover.
    Key(NavKey),
    /// An option in the popover was clicked.
    ItemClick(String),
    /// The "add custom item" suggestion was clicked.
    AdditionClick,
    /// A chip was clicked (removing its item).
    ChipClick(String),
    /// The toggle button was clicked.
    ToggleButtonClick {
        /// Whether the input held focus at the time.
        input_focused: bool,
    },
    /// The remove-all button was clicked.
    RemoveAllClick,
    /// A click landed outside the popover.
    ClickOutside {
        /// Whether the click was on the toggle button.
        on_toggle_button: bool,
    },
    /// The input lost focus.
    Blur,
    /// Answer to [`Effect::ScheduleSettle`]: the regions holding focus now.
    FocusSettled(FocusRegions),
    /// Clock tick for debounce and announcement timers.
    Tick,
}

/// An option row as the popover should render it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView<'a> {
    /// Element id, `{widget}-{item}`.
    pub id: String,
    /// The item.
    pub item: &'a Item,
    /// Whether the item is selected.
    pub checked: bool,
    /// Whether the item is the focused descendant.
    pub has_keyboard_focus: bool,
}

/// Headless multi-select state.
#[derive(Clone, Debug)]
pub struct MultiSelect {
    id: WidgetId,
    config: MultiSelectConfig,
    selection: MultiSelection,
    query: String,
    filtered: Vec<Item>,
    popover_open: bool,
    show_options_available_text: bool,
    focus: FocusedDescendant<String>,
    debouncer: Debouncer<String>,
    announcer: Announcer<String>,
    blur: BlurCheck,
}

impl MultiSelect {
    /// Create a widget from `config`, drawing an id from `ids` if needed.
    pub fn new(config: MultiSelectConfig, ids: &mut IdGenerator) -> Self {
        let id = ids.resolve(config.id.as_deref());
        if let Err(err) = validate_collection(&config.items) {
            warn!("MultiSelect '{}': {err}", config.labels.label_text);
        }
        let selection = MultiSelection::initialize(
            config.selected_items.clone(),
            config.default_selected_items.clone(),
        );
        Self {
            id,
            filtered: config.items.clone(),
            selection,
            query: String::new(),
            popover_open: false,
            show_options_available_text: false,
            focus: FocusedDescendant::new(),
            debouncer: Debouncer::new(config.debounce),
            announcer: Announcer::new(),
            blur: BlurCheck::new(),
            config,
        }
    }

    /// Process one event at time `now` (milliseconds).
    pub fn handle(&mut self, event: MultiSelectEvent, now: u64) -> Effects<Vec<Item>> {
        let mut effects = Effects::new();
        if self.config.disabled && event != MultiSelectEvent::Tick {
            trace!("MultiSelect {}: disabled, ignoring {event:?}", self.id);
            return effects;
        }
        match event {
            MultiSelectEvent::Focus => {
                self.blur.on_focus();
                self.open();
                self.show_options_available_text = true;
            }
            MultiSelectEvent::Input(value) => self.on_input(value, now, &mut effects),
            MultiSelectEvent::Key(key) => self.on_key(key, &mut effects),
            MultiSelectEvent::ItemClick(item_id) => {
                if let Some(item) = self.filtered.iter().find(|i| i.unique_item_id == item_id) {
                    let item = item.clone();
                    self.toggle(&item, &mut effects);
                }
            }
            MultiSelectEvent::AdditionClick => {
                if let Some(item) = self.addition_suggestion() {
                    self.toggle(&item, &mut effects);
                    self.focus.set(item.unique_item_id);
                }
            }
            MultiSelectEvent::ChipClick(item_id) => {
                let chip = self
                    .selection
                    .value()
                    .iter()
                    .find(|i| i.unique_item_id == item_id)
                    .cloned();
                if let Some(item) = chip.filter(|i| !i.disabled) {
                    let text = format!(
                        "{} {}",
                        item.chip_label(),
                        self.config.labels.aria_option_chip_removed_text
                    );
                    self.announcer.announce(text, now);
                    self.toggle(&item, &mut effects);
                }
            }
            MultiSelectEvent::ToggleButtonClick { input_focused } => {
                if input_focused {
                    self.popover_open = !self.popover_open;
                    self.show_options_available_text = !self.show_options_available_text;
                    debug!("MultiSelect {}: popover open = {}", self.id, self.popover_open);
                } else {
                    effects.push(Effect::FocusInput);
                }
            }
            MultiSelectEvent::RemoveAllClick => {
                effects.push(Effect::RemovedAll);
                let change = self.selection.remove_all();
                effects.push(Effect::SelectionChanged(change.value));
                effects.push(Effect::FocusInput);
            }
            MultiSelectEvent::ClickOutside { on_toggle_button } => {
                if !on_toggle_button {
                    self.close();
                }
            }
            MultiSelectEvent::Blur => {
                self.blur.on_blur();
                effects.push(Effect::Blurred);
                effects.push(Effect::ScheduleSettle);
            }
            MultiSelectEvent::FocusSettled(regions) => {
                if self.blur.settle(regions) == Some(BlurOutcome::Left) {
                    self.reset();
                    self.show_options_available_text = false;
                }
            }
            MultiSelectEvent::Tick => {}
        }
        // Timers advance on every event, not only on ticks.
        if let Some(query) = self.debouncer.poll(now) {
            effects.push(Effect::QueryChanged(query));
        }
        self.announcer.poll(now);
        effects
    }

    fn on_input(&mut self, value: String, now: u64, effects: &mut Effects<Vec<Item>>) {
        self.query = value.clone();
        self.open();
        self.filtered = self.refilter();
        // Focus left behind by an earlier query must not survive into this one.
        let addition = self.addition_id();
        let stale = self.focus.get().is_some_and(|focused| {
            addition.as_ref() != Some(focused)
                && !self.filtered.iter().any(|i| &i.unique_item_id == focused)
        });
        if stale {
            self.focus.clear();
        }
        effects.push(Effect::FilterChanged(self.filtered.clone()));
        if let Some(query) = self.debouncer.push(value, now) {
            effects.push(Effect::QueryChanged(query));
        }
    }

    fn on_key(&mut self, key: NavKey, effects: &mut Effects<Vec<Item>>) {
        let ids: Vec<String> = self
            .filtered
            .iter()
            .map(|i| i.unique_item_id.clone())
            .collect();
        let addition = self.addition_id();
        if let Some(direction) = key.direction() {
            self.open();
            self.focus.step(&ids, addition.as_ref(), direction);
            return;
        }
        match key {
            NavKey::Enter => {
                let item = match self.focus.resolve(&ids, addition.as_ref()) {
                    Some(Target::Item(index)) => Some(self.filtered[index].clone()),
                    Some(Target::Addition) => Some(Item::custom(&self.query)),
                    // Focus may still sit on a custom item added from this query.
                    None => self
                        .focus
                        .get()
                        .filter(|focused| **focused == self.query.to_lowercase())
                        .and_then(|focused| {
                            user_added(&self.config.items, self.selection.value())
                                .into_iter()
                                .find(|i| &i.unique_item_id == focused)
                        }),
                };
                if let Some(item) = item {
                    self.toggle(&item, effects);
                }
            }
            NavKey::Escape => self.reset(),
            NavKey::ArrowDown | NavKey::ArrowUp => {}
        }
    }

    fn toggle(&mut self, item: &Item, effects: &mut Effects<Vec<Item>>) {
        let Some(change) = self.selection.toggle(item) else {
            debug!("MultiSelect {}: item '{}' is disabled", self.id, item.unique_item_id);
            return;
        };
        effects.push(Effect::ItemSelected(item.unique_item_id.clone()));
        effects.push(Effect::SelectionChanged(change.value));
    }

    fn open(&mut self) {
        if !self.popover_open {
            debug!("MultiSelect {}: popover opened", self.id);
            self.popover_open = true;
        }
    }

    fn close(&mut self) {
        if self.popover_open {
            debug!("MultiSelect {}: popover closed", self.id);
            self.popover_open = false;
        }
    }

    /// Clear the query, show the full collection, close, and drop focus.
    fn reset(&mut self) {
        self.query.clear();
        self.filtered = self.config.items.clone();
        self.close();
        self.focus.clear();
    }

    fn addition_id(&self) -> Option<String> {
        if !self.config.allow_item_addition || self.query.is_empty() {
            return None;
        }
        let id = self.query.to_lowercase();
        let exists = self
            .config
            .items
            .iter()
            .chain(self.selection.value())
            .any(|i| i.unique_item_id == id);
        (!exists).then_some(id)
    }

    /// Replace the caller's item collection.
    ///
    /// The visible list is re-filtered with the current query.
    pub fn set_items(&mut self, items: Vec<Item>) {
        if let Err(err) = validate_collection(&items) {
            warn!("MultiSelect '{}': {err}", self.config.labels.label_text);
        }
        self.config.items = items;
        self.filtered = if self.query.is_empty() {
            self.config.items.clone()
        } else {
            self.refilter()
        };
    }

    fn refilter(&self) -> Vec<Item> {
        filter(&self.computed_items(), &self.query, &*self.config.filter)
    }

    /// Feed a new controlled selection. Returns `true` if it changed.
    pub fn set_selected_items(&mut self, selected: Vec<Item>) -> bool {
        self.selection.reconcile_external(selected)
    }

    /// The widget id.
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Items currently visible in the popover.
    pub fn filtered_items(&self) -> &[Item] {
        &self.filtered
    }

    /// The collection plus selected custom items.
    pub fn computed_items(&self) -> Vec<Item> {
        computed_items(&self.config.items, self.selection.value())
    }

    /// Selected items, in selection order.
    pub fn selected_items(&self) -> &[Item] {
        self.selection.value()
    }

    /// Whether the selection is owned by the consumer.
    pub fn is_controlled(&self) -> bool {
        self.selection.is_controlled()
    }

    /// Whether the popover is shown.
    pub fn is_open(&self) -> bool {
        self.popover_open
    }

    /// Whether the widget is disabled.
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Id of the focused descendant item, if any.
    pub fn focused_id(&self) -> Option<&str> {
        self.focus.get().map(String::as_str)
    }

    /// Value for `aria-activedescendant`.
    pub fn active_descendant(&self) -> Option<String> {
        self.focused_id().map(|f| self.id.option_id(f))
    }

    /// Option rows for the popover.
    pub fn options(&self) -> Vec<OptionView<'_>> {
        self.filtered
            .iter()
            .map(|item| OptionView {
                id: self.id.option_id(&item.unique_item_id),
                item,
                checked: self.selection.contains(&item.unique_item_id),
                has_keyboard_focus: self.focused_id() == Some(item.unique_item_id.as_str()),
            })
            .collect()
    }

    /// The "add custom item" suggestion, when offered.
    pub fn addition_suggestion(&self) -> Option<Item> {
        self.addition_id().map(|_| Item::custom(&self.query))
    }

    /// Whether the popover should show the "no items" text.
    pub fn shows_no_items_text(&self) -> bool {
        self.filtered.is_empty() && !self.config.allow_item_addition
    }

    /// Chips for the selected items; all disabled when the widget is.
    pub fn chips(&self) -> Vec<Item> {
        self.selection
            .value()
            .iter()
            .map(|item| {
                if self.config.disabled {
                    item.clone().with_disabled(true)
                } else {
                    item.clone()
                }
            })
            .collect()
    }

    /// Whether the remove-all button has anything to remove.
    pub fn can_remove_all(&self) -> bool {
        !self.config.disabled && self.selection.value().iter().any(|i| !i.disabled)
    }

    /// Polite live-region text with the selected count, while announced.
    pub fn selected_amount_text(&self) -> Option<String> {
        self.show_options_available_text.then(|| {
            format!(
                "{}{}",
                self.selection.value().len(),
                self.config.labels.aria_selected_amount_text
            )
        })
    }

    /// Polite live-region text with the filtered count, while announced.
    pub fn options_available_text(&self) -> Option<String> {
        self.show_options_available_text.then(|| {
            format!(
                "{}{}",
                self.filtered.len(),
                self.config.labels.aria_options_available_text
            )
        })
    }

    /// Assertive live-region text for the last chip removal.
    pub fn chip_removal_text(&self) -> Option<&str> {
        self.announcer.text().map(String::as_str)
    }

    /// The configuration the widget was built with, with current items.
    pub fn config(&self) -> &MultiSelectConfig {
        &self.config
    }
}
