// Property-based tests using proptest
// Random toolbar configurations mixing valid, unknown, blank and separator keys

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{create_header, keys, options_with, probe_registry};
use proptest::prelude::*;
use richbar::command::EditorCommand;
use richbar::header::normalize_key;
use richbar::menu::MenuRegistry;
use richbar::menu::registry::tag_for;

const POOL: &[&str] = &[
    "bold",
    " italic ",
    "not-a-real-key",
    "",
    "   ",
    "|",
    "divider",
    "table",
    "ai",
    "broken",
    "heading",
    "nope ",
];

/// Keys that should survive construction, after trimming and aliasing
fn expected_keys(entries: &[&str], registry: &MenuRegistry) -> Vec<String> {
    entries
        .iter()
        .filter_map(|raw| normalize_key(raw))
        .filter(|key| registry.contains(&tag_for(key)))
        // Fails in on_create without AI options; broken fails in its factory
        .filter(|key| *key != "ai" && *key != "broken")
        .map(str::to_string)
        .collect()
}

// Property: widget count and order match the filtered configuration
proptest! {
    #[test]
    fn widgets_match_filtered_configuration(
        entries in prop::collection::vec(prop::sample::select(POOL), 0..40)
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let expected = expected_keys(&entries, &probe_registry(0, &log));
        let (_engine, header) = create_header(probe_registry(0, &log), &options_with(&entries));

        if entries.is_empty() {
            prop_assert_eq!(header.len(), richbar::header::DEFAULT_TOOLBAR_KEYS.len());
        } else {
            prop_assert_eq!(keys(&header), expected);
        }
        prop_assert!(header.len() <= entries.len().max(richbar::header::DEFAULT_TOOLBAR_KEYS.len()));
    }
}

// Property: every transaction reaches every probe exactly once, in order
proptest! {
    #[test]
    fn fan_out_is_complete(probes in 1usize..8, transactions in 1usize..5) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let names: Vec<String> = (0..probes).map(|n| format!("probe-{}", n)).collect();
        let entries: Vec<&str> = names.iter().map(String::as_str).collect();
        let (mut engine, mut header) = create_header(probe_registry(probes, &log), &options_with(&entries));
        log.borrow_mut().clear();

        for _ in 0..transactions {
            prop_assert!(engine.apply(EditorCommand::toggle_mark("bold"), &mut header));
        }

        let calls = log.borrow();
        prop_assert_eq!(calls.len(), probes * transactions);
        for (i, call) in calls.iter().enumerate() {
            prop_assert_eq!(call, &format!("tx:probe-{}:false", i % probes));
        }
    }
}
