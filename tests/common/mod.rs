// Common test utilities for toolbar construction and event fan-out

use std::cell::RefCell;
use std::rc::Rc;

use richbar::config::EditorOptions;
use richbar::engine::{CreateEvent, ScratchEngine, TransactionEvent};
use richbar::header::{Header, ToolbarEntry};
use richbar::i18n::Translator;
use richbar::menu::registry::tag_for;
use richbar::menu::{MenuButton, MenuElement, MenuError, MenuRegistry};

/// Shared record of lifecycle calls, in the order they happened
pub type CallLog = Rc<RefCell<Vec<String>>>;

/// Button that records every lifecycle call into a shared log
pub struct ProbeButton {
    element: MenuElement,
    key: String,
    log: CallLog,
}

impl ProbeButton {
    pub fn new(key: &str, log: CallLog) -> Self {
        Self {
            element: MenuElement::new(tag_for(key)),
            key: key.to_string(),
            log,
        }
    }
}

impl MenuButton for ProbeButton {
    fn key(&self) -> &str {
        &self.key
    }

    fn element(&self) -> &MenuElement {
        &self.element
    }

    fn element_mut(&mut self) -> &mut MenuElement {
        &mut self.element
    }

    fn label(&self) -> String {
        self.key.clone()
    }

    fn on_create(
        &mut self,
        _event: &CreateEvent<'_>,
        _options: &EditorOptions,
    ) -> Result<(), MenuError> {
        self.log.borrow_mut().push(format!("create:{}", self.key));
        Ok(())
    }

    fn on_transaction(&mut self, event: &TransactionEvent<'_>) {
        self.log
            .borrow_mut()
            .push(format!("tx:{}:{}", self.key, event.doc_changed));
    }
}

/// Built-in registry plus probe buttons under `toolbar-probe-<n>`, and a
/// `toolbar-broken` kind whose factory always fails
#[allow(dead_code)]
pub fn probe_registry(probes: usize, log: &CallLog) -> MenuRegistry {
    let mut registry = MenuRegistry::with_builtins();
    for n in 0..probes {
        let key = format!("probe-{}", n);
        let log = Rc::clone(log);
        registry
            .define(tag_for(&key), move || {
                Ok(Box::new(ProbeButton::new(&key, Rc::clone(&log))) as Box<dyn MenuButton>)
            })
            .unwrap();
    }
    registry
        .define("toolbar-broken", || {
            Err(MenuError::Construction {
                key: "broken".to_string(),
                reason: "factory always fails".to_string(),
            })
        })
        .unwrap();
    registry
}

#[allow(dead_code)]
pub fn options_with(keys: &[&str]) -> EditorOptions {
    EditorOptions {
        toolbar_keys: Some(keys.iter().map(|k| ToolbarEntry::from(*k)).collect()),
        ..Default::default()
    }
}

/// Header built from `options` against a fresh engine
#[allow(dead_code)]
pub fn create_header(registry: MenuRegistry, options: &EditorOptions) -> (ScratchEngine, Header) {
    let engine = ScratchEngine::new();
    let mut header = Header::new(registry, Translator::default());
    engine.create(&mut header, options);
    (engine, header)
}

#[allow(dead_code)]
pub fn keys(header: &Header) -> Vec<String> {
    header
        .menu_buttons()
        .iter()
        .map(|b| b.key().to_string())
        .collect()
}
