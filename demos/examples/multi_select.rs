// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted MultiSelect session.
//!
//! This example drives a multi-select the way a host UI would:
//! - keystrokes and clicks go in as `MultiSelectEvent`s with a clock value,
//! - effects come out and are "delivered" by printing them,
//! - a blur is answered one frame later with the regions holding focus.
//!
//! Run:
//! - `cargo run -p picklist_demos --example multi_select`

use picklist::{
    Effect, FocusRegions, IdGenerator, Item, Labels, MultiSelect, MultiSelectConfig,
    MultiSelectEvent, NavKey,
};

fn deliver(widget: &MultiSelect, effects: &[Effect<Vec<Item>>]) {
    for effect in effects {
        match effect {
            Effect::SelectionChanged(items) => {
                let labels: Vec<&str> = items.iter().map(Item::chip_label).collect();
                println!("  onItemSelectionsChange({labels:?})");
            }
            Effect::ScheduleSettle => println!("  (settle requested for next frame)"),
            other => println!("  {other:?}"),
        }
    }
    let options: Vec<String> = widget
        .options()
        .iter()
        .map(|o| {
            format!(
                "{}{}{}",
                if o.has_keyboard_focus { ">" } else { " " },
                if o.checked { "[x] " } else { "[ ] " },
                o.item.label_text
            )
        })
        .collect();
    if widget.is_open() {
        println!("  popover: {options:?}");
        if let Some(suggestion) = widget.addition_suggestion() {
            println!("  suggestion: add \"{}\"", suggestion.label_text);
        }
    }
}

fn main() {
    picklist_demos::init_logging();

    let mut ids = IdGenerator::new("demo");
    let config = MultiSelectConfig::new(vec![
        Item::new("fi", "Finland").with_chip_text("FI"),
        Item::new("se", "Sweden").with_chip_text("SE"),
        Item::new("no", "Norway").with_chip_text("NO"),
        Item::new("dk", "Denmark").with_chip_text("DK"),
        Item::new("is", "Iceland").with_chip_text("IS").with_disabled(true),
    ])
    .with_default_selected_items(vec![
        Item::new("is", "Iceland").with_chip_text("IS").with_disabled(true),
    ])
    .with_item_addition(true)
    .with_debounce(250)
    .with_labels(Labels {
        label_text: "Countries".into(),
        no_items_text: "No countries".into(),
        aria_selected_amount_text: " selected".into(),
        aria_options_available_text: " options available".into(),
        aria_option_chip_removed_text: "removed".into(),
    });
    let mut widget = MultiSelect::new(config, &mut ids);

    let script = [
        (0, MultiSelectEvent::Focus),
        (100, MultiSelectEvent::Input("n".into())),
        (180, MultiSelectEvent::Input("nor".into())),
        (200, MultiSelectEvent::Key(NavKey::ArrowDown)),
        (220, MultiSelectEvent::Key(NavKey::Enter)),
        (500, MultiSelectEvent::Tick),
        (600, MultiSelectEvent::Input("Faroe".into())),
        (650, MultiSelectEvent::Key(NavKey::ArrowDown)),
        (700, MultiSelectEvent::Key(NavKey::Enter)),
        (800, MultiSelectEvent::ChipClick("no".into())),
        (900, MultiSelectEvent::Key(NavKey::Escape)),
        (1000, MultiSelectEvent::RemoveAllClick),
        (1100, MultiSelectEvent::Blur),
        (1116, MultiSelectEvent::FocusSettled(FocusRegions::empty())),
        (2000, MultiSelectEvent::Tick),
    ];

    for (now, event) in script {
        println!("t={now:>5} {event:?}");
        let effects = widget.handle(event, now);
        deliver(&widget, &effects);
        if let Some(text) = widget.chip_removal_text() {
            println!("  live region: {text:?}");
        }
    }

    let chips: Vec<&str> = widget.selected_items().iter().map(Item::chip_label).collect();
    println!("final selection: {chips:?}");
}
