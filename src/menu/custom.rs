// menu/custom.rs - User-described toolbar entries

use std::fmt;
use std::rc::Rc;

use serde::Deserialize;
use unicode_segmentation::UnicodeSegmentation;

use super::registry::tag_for;
use super::{MenuButton, MenuElement, MenuError};
use crate::command::EditorCommand;
use crate::engine::{EditorEngine, TransactionEvent};

/// Labels longer than this are cut to keep the toolbar row compact
const MAX_LABEL_GRAPHEMES: usize = 16;

const CUSTOM_KEY: &str = "custom";

/// Called once the custom button is built, with the button and the editor
pub type OnCreateHook = Rc<dyn Fn(&mut dyn MenuButton, &dyn EditorEngine)>;

/// Called when the custom button is clicked
pub type OnClickHook = Rc<dyn Fn(&dyn EditorEngine) -> Option<EditorCommand>>;

/// Descriptor for a custom toolbar entry
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CustomMenu {
    pub id: Option<String>,
    #[serde(alias = "className")]
    pub class_name: Option<String>,
    /// Translation key or literal tooltip text
    pub tip: Option<String>,
    pub icon: Option<String>,
    pub text: Option<String>,
    #[serde(skip)]
    pub on_create: Option<OnCreateHook>,
    #[serde(skip)]
    pub on_click: Option<OnClickHook>,
}

impl CustomMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class_name(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    pub fn tip(mut self, tip: &str) -> Self {
        self.tip = Some(tip.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn on_create(mut self, hook: impl Fn(&mut dyn MenuButton, &dyn EditorEngine) + 'static) -> Self {
        self.on_create = Some(Rc::new(hook));
        self
    }

    pub fn on_click(
        mut self,
        hook: impl Fn(&dyn EditorEngine) -> Option<EditorCommand> + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(hook));
        self
    }

    /// Name used when reporting problems with this entry
    pub fn display_key(&self) -> &str {
        self.id.as_deref().unwrap_or(CUSTOM_KEY)
    }
}

impl fmt::Debug for CustomMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomMenu")
            .field("id", &self.id)
            .field("class_name", &self.class_name)
            .field("tip", &self.tip)
            .field("icon", &self.icon)
            .field("text", &self.text)
            .field("on_create", &self.on_create.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Button driven by a `CustomMenu` descriptor
pub struct CustomButton {
    element: MenuElement,
    label: String,
    on_click: Option<OnClickHook>,
}

impl CustomButton {
    pub fn new() -> Self {
        Self {
            element: MenuElement::new(tag_for(CUSTOM_KEY)),
            label: "?".to_string(),
            on_click: None,
        }
    }
}

impl Default for CustomButton {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuButton for CustomButton {
    fn key(&self) -> &str {
        CUSTOM_KEY
    }

    fn element(&self) -> &MenuElement {
        &self.element
    }

    fn element_mut(&mut self) -> &mut MenuElement {
        &mut self.element
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn on_transaction(&mut self, _event: &TransactionEvent<'_>) {}

    fn on_config(&mut self, menu: &CustomMenu) -> Result<(), MenuError> {
        if let Some(label) = menu
            .text
            .as_deref()
            .or(menu.icon.as_deref())
            .map(str::trim)
            .filter(|l| !l.is_empty())
        {
            self.label = label.graphemes(true).take(MAX_LABEL_GRAPHEMES).collect();
        }
        self.on_click = menu.on_click.clone();
        Ok(())
    }

    fn activate(&mut self, editor: &dyn EditorEngine) -> Option<EditorCommand> {
        self.on_click.as_ref().and_then(|hook| hook(editor))
    }
}
