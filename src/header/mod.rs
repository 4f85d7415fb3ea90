// header/mod.rs - Toolbar controller: builds buttons and fans out editor events

pub mod entry;

pub use entry::{DEFAULT_TOOLBAR_KEYS, SEPARATOR_TOKEN, ToolbarEntry, normalize_key};

use log::{debug, error, warn};

use crate::command::EditorCommand;
use crate::config::EditorOptions;
use crate::engine::{CreateEvent, EditorEngine, EditorEvents, TransactionEvent};
use crate::i18n::Translator;
use crate::menu::builtin::DIVIDER_KEY;
use crate::menu::registry::tag_for;
use crate::menu::{CustomMenu, MENU_ITEM_CLASS, MenuButton, MenuError, MenuRegistry};
use crate::tooltip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    /// Constructed; no buttons yet
    Uninitialized,
    /// Buttons built from the creation event
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Flex,
}

/// Row holding the mounted buttons, by index into the header's button list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuContainer {
    pub display: Display,
    pub wrap: bool,
    pub children: Vec<usize>,
}

/// The editor toolbar
pub struct Header {
    registry: MenuRegistry,
    translator: Translator,
    menu_buttons: Vec<Box<dyn MenuButton>>,
    containers: Vec<MenuContainer>,
    state: HeaderState,
}

impl Default for Header {
    fn default() -> Self {
        Self::new(MenuRegistry::with_builtins(), Translator::default())
    }
}

impl Header {
    pub fn new(registry: MenuRegistry, translator: Translator) -> Self {
        Self {
            registry,
            translator,
            menu_buttons: Vec::new(),
            containers: Vec::new(),
            state: HeaderState::Uninitialized,
        }
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    pub fn menu_buttons(&self) -> &[Box<dyn MenuButton>] {
        &self.menu_buttons
    }

    pub fn len(&self) -> usize {
        self.menu_buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menu_buttons.is_empty()
    }

    /// Containers attached by `mount`, oldest first
    pub fn containers(&self) -> &[MenuContainer] {
        &self.containers
    }

    /// Attach a flex-wrapping container holding every button in order.
    ///
    /// Called once by the surface that shows the header; a second call
    /// attaches a second container.
    pub fn mount(&mut self) {
        self.containers.push(MenuContainer {
            display: Display::Flex,
            wrap: true,
            children: (0..self.menu_buttons.len()).collect(),
        });
    }

    /// Command produced by clicking button `index`
    pub fn activate(&mut self, index: usize, editor: &dyn EditorEngine) -> Option<EditorCommand> {
        let button = self.menu_buttons.get_mut(index)?;
        if !button.is_enabled() {
            return None;
        }
        button.activate(editor)
    }

    fn build(&mut self, event: &CreateEvent<'_>, options: &EditorOptions) {
        for entry in options.toolbar_entries() {
            let Some(key) = entry.key() else {
                continue;
            };
            let result = match &entry {
                ToolbarEntry::Custom(menu) => self.create_custom(menu, event, options),
                _ => self.create_builtin(key, event, options),
            };

            match result {
                Ok(button) => {
                    debug!("toolbar entry '{}' created", button.key());
                    self.menu_buttons.push(button);
                }
                Err(err) => error!("Can not create toolbar by key: {}: {}", key, err),
            }
        }
    }

    fn create_builtin(
        &self,
        key: &str,
        event: &CreateEvent<'_>,
        options: &EditorOptions,
    ) -> Result<Box<dyn MenuButton>, MenuError> {
        let mut button = self.registry.create(&tag_for(key))?;
        button.element_mut().add_class(MENU_ITEM_CLASS);
        button.on_create(event, options)?;

        if key != DIVIDER_KEY {
            let tip = self.translator.t(key);
            tooltip::attach(button.element_mut(), &tip, event.editor.container_id());
        }
        Ok(button)
    }

    fn create_custom(
        &self,
        menu: &CustomMenu,
        event: &CreateEvent<'_>,
        options: &EditorOptions,
    ) -> Result<Box<dyn MenuButton>, MenuError> {
        let mut button = self.registry.create(&tag_for("custom"))?;
        let element = button.element_mut();
        element.add_class(MENU_ITEM_CLASS);
        if let Some(id) = &menu.id {
            element.set_id(id);
        }
        if let Some(class_name) = &menu.class_name {
            element.add_class(class_name);
        }
        button.on_create(event, options)?;
        button.on_config(menu)?;

        if let Some(tip) = &menu.tip {
            let tip = self.translator.t(tip);
            tooltip::attach(button.element_mut(), &tip, event.editor.container_id());
        }

        if let Some(hook) = &menu.on_create {
            hook(button.as_mut(), event.editor);
        }
        Ok(button)
    }
}

impl EditorEvents for Header {
    /// Build the toolbar from `options`. Runs once per header.
    fn on_create(&mut self, event: &CreateEvent<'_>, options: &EditorOptions) {
        if self.state == HeaderState::Active {
            warn!("toolbar already initialized; ignoring repeated creation event");
            return;
        }
        self.build(event, options);
        self.state = HeaderState::Active;
    }

    /// Forward the transaction to every button, in order
    fn on_transaction(&mut self, event: &TransactionEvent<'_>) {
        for button in self.menu_buttons.iter_mut() {
            button.on_transaction(event);
        }
    }
}
