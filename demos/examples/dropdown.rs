// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A controlled Dropdown whose owner echoes every change back.
//!
//! Run:
//! - `cargo run -p picklist_demos --example dropdown`

use picklist::{Dropdown, DropdownConfig, DropdownEvent, Effect, IdGenerator, Item, NavKey};
use picklist_filter::{filter, label_contains};

fn main() {
    picklist_demos::init_logging();

    let languages = vec![
        Item::new("fi", "Suomi"),
        Item::new("sv", "Svenska"),
        Item::new("en", "English"),
        Item::new("se", "Sámegiella").with_disabled(true),
    ];
    // Owners can still narrow the option set themselves before handing it over.
    let offered = filter(&languages, "s", label_contains);

    let mut ids = IdGenerator::new("settings");
    let mut config = DropdownConfig::new("Language", offered);
    config.value = Some("fi".into());
    config.visual_placeholder = Some("Choose a language".into());
    let mut dropdown = Dropdown::new(config, &mut ids);

    // The owner's copy of the value.
    let mut value: Option<String> = Some("fi".into());

    let script = [
        DropdownEvent::ButtonClick,
        DropdownEvent::Key(NavKey::ArrowDown),
        DropdownEvent::Key(NavKey::Enter),
        DropdownEvent::ButtonClick,
        DropdownEvent::ItemClick("se".into()),
        DropdownEvent::Key(NavKey::Escape),
    ];

    for event in script {
        println!("{event:?}");
        for effect in dropdown.handle(event) {
            if let Effect::SelectionChanged(item) = effect {
                println!("  onChange({:?})", item.unique_item_id);
                value = Some(item.unique_item_id);
            }
        }
        // Controlled: the new value only shows once the owner passes it back.
        dropdown.set_value(value.as_deref());
        println!(
            "  button: {:?}, open: {}, focused: {:?}",
            dropdown.display_text(),
            dropdown.is_open(),
            dropdown.active_descendant()
        );
    }
}
