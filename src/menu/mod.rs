// menu/mod.rs - Menu button capability shared by every toolbar entry

pub mod builtin;
pub mod custom;
pub mod registry;

pub use custom::{CustomButton, CustomMenu};
pub use registry::{MenuFactory, MenuRegistry, TAG_PREFIX};

use thiserror::Error;

use crate::command::EditorCommand;
use crate::config::EditorOptions;
use crate::engine::{CreateEvent, EditorEngine, TransactionEvent};
use crate::tooltip::Tooltip;

/// Class every button mounted by the header carries
pub const MENU_ITEM_CLASS: &str = "menu-item";

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("No menu registered under tag: {0}")]
    UnknownKey(String),
    #[error("A menu is already registered under tag: {0}")]
    AlreadyDefined(String),
    #[error("Menu '{key}' is not configured: {reason}")]
    Unconfigured { key: String, reason: String },
    #[error("Menu '{0}' does not accept a custom menu configuration")]
    NotConfigurable(String),
    #[error("Failed to build menu '{key}': {reason}")]
    Construction { key: String, reason: String },
}

/// Element data for a rendered button: the terminal stand-in for a DOM node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub tooltip: Option<Tooltip>,
}

impl MenuElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }
}

/// A self-rendering, state-reactive toolbar entry
pub trait MenuButton {
    /// Toolbar key this button was created for
    fn key(&self) -> &str;

    fn element(&self) -> &MenuElement;

    fn element_mut(&mut self) -> &mut MenuElement;

    /// Text drawn for the button
    fn label(&self) -> String;

    fn on_create(
        &mut self,
        _event: &CreateEvent<'_>,
        _options: &EditorOptions,
    ) -> Result<(), MenuError> {
        Ok(())
    }

    fn on_transaction(&mut self, event: &TransactionEvent<'_>);

    /// Apply a custom menu descriptor. Only custom buttons accept one.
    fn on_config(&mut self, _menu: &CustomMenu) -> Result<(), MenuError> {
        Err(MenuError::NotConfigurable(self.key().to_string()))
    }

    fn is_active(&self) -> bool {
        false
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn is_divider(&self) -> bool {
        false
    }

    /// Command produced by clicking the button, if any
    fn activate(&mut self, _editor: &dyn EditorEngine) -> Option<EditorCommand> {
        None
    }
}
