// tests/header_test.rs - Integration tests for toolbar construction and fan-out

mod common;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use common::{CallLog, create_header, keys, options_with, probe_registry};
use richbar::command::EditorCommand;
use richbar::config::EditorOptions;
use richbar::engine::{EditorEngine, EditorEvents, ScratchEngine};
use richbar::header::{DEFAULT_TOOLBAR_KEYS, Header, HeaderState, ToolbarEntry};
use richbar::i18n::Translator;
use richbar::menu::{CustomMenu, MenuButton, MenuRegistry};
use richbar::tooltip::TOOLTIP_THEME;

fn new_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

#[test]
fn test_partial_failure_keeps_order() {
    let (_engine, header) = create_header(
        MenuRegistry::with_builtins(),
        &options_with(&["bold", "not-a-real-key", "italic"]),
    );

    assert_eq!(keys(&header), vec!["bold", "italic"]);
    assert_eq!(header.state(), HeaderState::Active);
}

#[test]
fn test_failing_factory_does_not_affect_neighbours() {
    let log = new_log();
    let (_engine, header) = create_header(
        probe_registry(2, &log),
        &options_with(&["probe-0", "broken", "probe-1"]),
    );

    assert_eq!(keys(&header), vec!["probe-0", "probe-1"]);
    assert_eq!(*log.borrow(), vec!["create:probe-0", "create:probe-1"]);
}

#[test]
fn test_unconfigured_ai_is_dropped() {
    let (_engine, header) = create_header(
        MenuRegistry::with_builtins(),
        &options_with(&["ai", "bold"]),
    );
    assert_eq!(keys(&header), vec!["bold"]);
}

#[test]
fn test_divider_alias_produces_same_kind() {
    let (_engine, header) = create_header(
        MenuRegistry::with_builtins(),
        &options_with(&["|", "divider", " | "]),
    );

    let buttons = header.menu_buttons();
    assert_eq!(buttons.len(), 3);
    for button in buttons {
        assert!(button.is_divider());
        assert_eq!(button.element().tag, "toolbar-divider");
        assert!(button.element().tooltip.is_none());
    }
}

#[test]
fn test_every_labelled_entry_gets_one_tooltip() {
    let (engine, header) = create_header(
        MenuRegistry::with_builtins(),
        &options_with(&["bold", "table"]),
    );

    for button in header.menu_buttons() {
        let tooltip = button.element().tooltip.as_ref().expect("tooltip");
        assert_eq!(tooltip.theme, TOOLTIP_THEME);
        assert!(tooltip.arrow);
        assert_eq!(tooltip.append_to, engine.container_id());
    }
    let tips: Vec<&str> = header
        .menu_buttons()
        .iter()
        .map(|b| b.element().tooltip.as_ref().unwrap().content.as_str())
        .collect();
    assert_eq!(tips, vec!["Bold", "Table"]);
}

#[test]
fn test_empty_translation_omits_tooltip() {
    let mut translator = Translator::default();
    let mut en = HashMap::new();
    en.insert("bold".to_string(), String::new());
    let mut overrides = HashMap::new();
    overrides.insert("en".to_string(), en);
    translator.extend(&overrides);

    let engine = ScratchEngine::new();
    let mut header = Header::new(MenuRegistry::with_builtins(), translator);
    engine.create(&mut header, &options_with(&["bold", "italic"]));

    let buttons = header.menu_buttons();
    assert!(buttons[0].element().tooltip.is_none());
    assert!(buttons[1].element().tooltip.is_some());
}

#[test]
fn test_custom_without_tip_has_no_tooltip() {
    let options = EditorOptions {
        toolbar_keys: Some(vec![ToolbarEntry::from(CustomMenu::new().text("Go"))]),
        ..Default::default()
    };
    let (_engine, header) = create_header(MenuRegistry::with_builtins(), &options);

    assert_eq!(header.len(), 1);
    assert!(header.menu_buttons()[0].element().tooltip.is_none());
}

#[test]
fn test_custom_on_create_hook_sees_button_and_editor() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_in_hook = Rc::clone(&seen);
    let menu = CustomMenu::new()
        .id("save")
        .on_create(move |button, editor| {
            button.element_mut().add_class("hooked");
            seen_in_hook
                .borrow_mut()
                .push(format!("{}@{}", button.key(), editor.container_id()));
        });
    let options = EditorOptions {
        toolbar_keys: Some(vec![ToolbarEntry::from(menu)]),
        ..Default::default()
    };
    let (engine, header) = create_header(MenuRegistry::with_builtins(), &options);

    assert!(header.menu_buttons()[0].element().has_class("hooked"));
    assert_eq!(
        *seen.borrow(),
        vec![format!("custom@{}", engine.container_id())]
    );
}

#[test]
fn test_custom_click_runs_through_engine() {
    let menu = CustomMenu::new()
        .text("Sign")
        .on_click(|_| Some(EditorCommand::InsertText("-- signed".to_string())));
    let options = EditorOptions {
        toolbar_keys: Some(vec![ToolbarEntry::from(menu)]),
        ..Default::default()
    };
    let (mut engine, mut header) = create_header(MenuRegistry::with_builtins(), &options);

    let command = header.activate(0, &engine).expect("command");
    assert!(engine.apply(command, &mut header));
    assert_eq!(engine.text.to_string(), "-- signed");
}

#[test]
fn test_fan_out_reaches_every_button_once_in_order() {
    let log = new_log();
    let (mut engine, mut header) = create_header(
        probe_registry(3, &log),
        &options_with(&["probe-0", "probe-1", "probe-2"]),
    );
    log.borrow_mut().clear();

    engine.apply(EditorCommand::InsertText("x".to_string()), &mut header);
    engine.apply(EditorCommand::toggle_mark("bold"), &mut header);

    assert_eq!(
        *log.borrow(),
        vec![
            "tx:probe-0:true",
            "tx:probe-1:true",
            "tx:probe-2:true",
            "tx:probe-0:false",
            "tx:probe-1:false",
            "tx:probe-2:false",
        ]
    );
}

#[test]
fn test_transactions_update_button_state() {
    let (mut engine, mut header) = create_header(
        MenuRegistry::with_builtins(),
        &options_with(&["bold", "italic", "fullscreen"]),
    );

    engine.apply(EditorCommand::toggle_mark("italic"), &mut header);
    engine.apply(EditorCommand::ToggleFullscreen, &mut header);

    let active: Vec<bool> = header.menu_buttons().iter().map(|b| b.is_active()).collect();
    assert_eq!(active, vec![false, true, true]);
}

#[test]
fn test_default_fallback_matches_default_layout() {
    for options in [
        EditorOptions::default(),
        EditorOptions {
            toolbar_keys: Some(Vec::new()),
            ..Default::default()
        },
    ] {
        let (_engine, mut header) = create_header(MenuRegistry::with_builtins(), &options);
        header.mount();

        assert_eq!(keys(&header), DEFAULT_TOOLBAR_KEYS);
        for button in header.menu_buttons() {
            if button.is_divider() {
                assert!(button.element().tooltip.is_none());
            } else {
                assert!(button.element().tooltip.is_some(), "{}", button.key());
            }
        }
        let container = &header.containers()[0];
        assert_eq!(container.children.len(), DEFAULT_TOOLBAR_KEYS.len());
    }
}

#[test]
fn test_header_is_an_editor_listener() {
    fn assert_listener<T: EditorEvents>(_: &T) {}
    let header = Header::default();
    assert_listener(&header);
}

#[test]
fn test_buttons_reflect_editor_state_at_creation() {
    let mut engine = ScratchEngine::new();
    engine.state_mut().marks.insert("italic".to_string());
    let mut header = Header::default();
    engine.create(&mut header, &options_with(&["bold", "italic"]));

    let active: Vec<bool> = header.menu_buttons().iter().map(|b| b.is_active()).collect();
    assert_eq!(active, vec![false, true]);
}
