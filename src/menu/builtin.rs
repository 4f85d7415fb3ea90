// menu/builtin.rs - Built-in toolbar buttons

use super::registry::tag_for;
use super::{MenuButton, MenuElement, MenuError, MenuFactory};
use crate::command::EditorCommand;
use crate::config::EditorOptions;
use crate::engine::{CreateEvent, EditorEngine, EditorState, TransactionEvent};

/// Key of the non-interactive separator
pub const DIVIDER_KEY: &str = "divider";

const DIVIDER_GLYPH: &str = "│";

/// Button reflecting a single mark or node, toggled on click
pub struct ToggleButton {
    element: MenuElement,
    key: &'static str,
    glyph: &'static str,
    name: &'static str,
    node: bool,
    active: bool,
}

impl ToggleButton {
    pub fn mark(key: &'static str, glyph: &'static str, name: &'static str) -> Self {
        Self {
            element: MenuElement::new(tag_for(key)),
            key,
            glyph,
            name,
            node: false,
            active: false,
        }
    }

    pub fn node(key: &'static str, glyph: &'static str, name: &'static str) -> Self {
        Self {
            node: true,
            ..Self::mark(key, glyph, name)
        }
    }
}

impl MenuButton for ToggleButton {
    fn key(&self) -> &str {
        self.key
    }

    fn element(&self) -> &MenuElement {
        &self.element
    }

    fn element_mut(&mut self) -> &mut MenuElement {
        &mut self.element
    }

    fn label(&self) -> String {
        self.glyph.to_string()
    }

    fn on_create(
        &mut self,
        event: &CreateEvent<'_>,
        _options: &EditorOptions,
    ) -> Result<(), MenuError> {
        self.active = event.editor.state().is_active(self.name);
        Ok(())
    }

    fn on_transaction(&mut self, event: &TransactionEvent<'_>) {
        self.active = event.state().is_active(self.name);
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, _editor: &dyn EditorEngine) -> Option<EditorCommand> {
        Some(if self.node {
            EditorCommand::toggle_node(self.name)
        } else {
            EditorCommand::toggle_mark(self.name)
        })
    }
}

type StatePredicate = fn(&EditorState) -> bool;

/// Button issuing a fixed command
pub struct ActionButton {
    element: MenuElement,
    key: &'static str,
    glyph: &'static str,
    command: EditorCommand,
    enabled_when: StatePredicate,
    active_when: StatePredicate,
    enabled: bool,
    active: bool,
}

impl ActionButton {
    pub fn new(key: &'static str, glyph: &'static str, command: EditorCommand) -> Self {
        Self {
            element: MenuElement::new(tag_for(key)),
            key,
            glyph,
            command,
            enabled_when: |_| true,
            active_when: |_| false,
            enabled: true,
            active: false,
        }
    }

    pub fn enabled_when(mut self, predicate: StatePredicate) -> Self {
        self.enabled_when = predicate;
        self
    }

    pub fn active_when(mut self, predicate: StatePredicate) -> Self {
        self.active_when = predicate;
        self
    }

    fn refresh(&mut self, state: &EditorState) {
        self.enabled = (self.enabled_when)(state);
        self.active = (self.active_when)(state);
    }
}

impl MenuButton for ActionButton {
    fn key(&self) -> &str {
        self.key
    }

    fn element(&self) -> &MenuElement {
        &self.element
    }

    fn element_mut(&mut self) -> &mut MenuElement {
        &mut self.element
    }

    fn label(&self) -> String {
        self.glyph.to_string()
    }

    fn on_create(
        &mut self,
        event: &CreateEvent<'_>,
        _options: &EditorOptions,
    ) -> Result<(), MenuError> {
        self.refresh(event.editor.state());
        Ok(())
    }

    fn on_transaction(&mut self, event: &TransactionEvent<'_>) {
        self.refresh(event.state());
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn activate(&mut self, _editor: &dyn EditorEngine) -> Option<EditorCommand> {
        self.enabled.then(|| self.command.clone())
    }
}

/// Dropdown-style button showing an attribute value; a click moves to the
/// next option
pub struct SelectButton {
    element: MenuElement,
    key: &'static str,
    glyph: &'static str,
    attribute: &'static str,
    options: Vec<String>,
    current: Option<String>,
}

impl SelectButton {
    pub fn new(
        key: &'static str,
        glyph: &'static str,
        attribute: &'static str,
        options: &[&str],
    ) -> Self {
        Self {
            element: MenuElement::new(tag_for(key)),
            key,
            glyph,
            attribute,
            options: options.iter().map(|o| o.to_string()).collect(),
            current: None,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    fn value(&self) -> Option<&str> {
        self.current
            .as_deref()
            .or_else(|| self.options.first().map(String::as_str))
    }
}

impl MenuButton for SelectButton {
    fn key(&self) -> &str {
        self.key
    }

    fn element(&self) -> &MenuElement {
        &self.element
    }

    fn element_mut(&mut self) -> &mut MenuElement {
        &mut self.element
    }

    fn label(&self) -> String {
        match self.value() {
            Some(value) => format!("{} {}▾", self.glyph, value),
            None => self.glyph.to_string(),
        }
    }

    fn on_create(
        &mut self,
        event: &CreateEvent<'_>,
        options: &EditorOptions,
    ) -> Result<(), MenuError> {
        self.current = event
            .editor
            .state()
            .attribute(self.attribute)
            .map(str::to_string);
        let configured = match self.key {
            "font-family" => options.font_families.as_ref(),
            "font-size" => options.font_sizes.as_ref(),
            _ => None,
        };
        if let Some(values) = configured {
            if values.is_empty() {
                return Err(MenuError::Construction {
                    key: self.key.to_string(),
                    reason: "option list is empty".to_string(),
                });
            }
            self.options = values.clone();
        }
        Ok(())
    }

    fn on_transaction(&mut self, event: &TransactionEvent<'_>) {
        self.current = event.state().attribute(self.attribute).map(str::to_string);
    }

    fn activate(&mut self, _editor: &dyn EditorEngine) -> Option<EditorCommand> {
        if self.options.is_empty() {
            return None;
        }
        let index = self
            .value()
            .and_then(|v| self.options.iter().position(|o| o == v))
            .unwrap_or(0);
        let next = &self.options[(index + 1) % self.options.len()];
        Some(EditorCommand::set_attribute(self.attribute, next))
    }
}

/// Visual separator between button groups
pub struct Divider {
    element: MenuElement,
}

impl Divider {
    pub fn new() -> Self {
        Self {
            element: MenuElement::new(tag_for(DIVIDER_KEY)),
        }
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuButton for Divider {
    fn key(&self) -> &str {
        DIVIDER_KEY
    }

    fn element(&self) -> &MenuElement {
        &self.element
    }

    fn element_mut(&mut self) -> &mut MenuElement {
        &mut self.element
    }

    fn label(&self) -> String {
        DIVIDER_GLYPH.to_string()
    }

    fn on_transaction(&mut self, _event: &TransactionEvent<'_>) {}

    fn is_enabled(&self) -> bool {
        false
    }

    fn is_divider(&self) -> bool {
        true
    }
}

/// AI assistant entry; only usable when a model is configured
pub struct AiButton {
    element: MenuElement,
    model: Option<String>,
}

impl AiButton {
    pub fn new() -> Self {
        Self {
            element: MenuElement::new(tag_for("ai")),
            model: None,
        }
    }
}

impl Default for AiButton {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuButton for AiButton {
    fn key(&self) -> &str {
        "ai"
    }

    fn element(&self) -> &MenuElement {
        &self.element
    }

    fn element_mut(&mut self) -> &mut MenuElement {
        &mut self.element
    }

    fn label(&self) -> String {
        "AI".to_string()
    }

    fn on_create(
        &mut self,
        _event: &CreateEvent<'_>,
        options: &EditorOptions,
    ) -> Result<(), MenuError> {
        let ai = options.ai.as_ref().ok_or_else(|| MenuError::Unconfigured {
            key: "ai".to_string(),
            reason: "no AI model configured".to_string(),
        })?;
        self.model = Some(ai.model.clone());
        Ok(())
    }

    fn on_transaction(&mut self, _event: &TransactionEvent<'_>) {}

    fn activate(&mut self, _editor: &dyn EditorEngine) -> Option<EditorCommand> {
        self.model
            .clone()
            .map(|model| EditorCommand::AiAssist { model })
    }
}

fn boxed<B, F>(make: F) -> MenuFactory
where
    B: MenuButton + 'static,
    F: Fn() -> B + 'static,
{
    Box::new(move || Ok(Box::new(make()) as Box<dyn MenuButton>))
}

/// Factories for every built-in key, in registration order
pub fn factories() -> Vec<(&'static str, MenuFactory)> {
    vec![
        ("undo", boxed(|| {
            ActionButton::new("undo", "↶", EditorCommand::Undo).enabled_when(|s| s.can_undo)
        })),
        ("redo", boxed(|| {
            ActionButton::new("redo", "↷", EditorCommand::Redo).enabled_when(|s| s.can_redo)
        })),
        ("brush", boxed(|| {
            ActionButton::new("brush", "✎", EditorCommand::TogglePainter)
                .active_when(|s| s.painter)
        })),
        ("container", boxed(|| ToggleButton::node("container", "▣", "container"))),
        ("eraser", boxed(|| ActionButton::new("eraser", "⌫", EditorCommand::UnsetAllMarks))),
        ("heading", boxed(|| {
            SelectButton::new(
                "heading",
                "H",
                "heading",
                &["paragraph", "h1", "h2", "h3", "h4", "h5", "h6"],
            )
        })),
        ("font-family", boxed(|| {
            SelectButton::new(
                "font-family",
                "F",
                "font-family",
                &["default", "serif", "sans-serif", "monospace"],
            )
        })),
        ("font-size", boxed(|| {
            SelectButton::new(
                "font-size",
                "Sz",
                "font-size",
                &["default", "12", "14", "16", "18", "24", "32"],
            )
        })),
        ("bold", boxed(|| ToggleButton::mark("bold", "B", "bold"))),
        ("italic", boxed(|| ToggleButton::mark("italic", "I", "italic"))),
        ("underline", boxed(|| ToggleButton::mark("underline", "U", "underline"))),
        ("strike", boxed(|| ToggleButton::mark("strike", "S", "strike"))),
        ("link", boxed(|| ToggleButton::mark("link", "Ln", "link"))),
        ("code", boxed(|| ToggleButton::mark("code", "</>", "code"))),
        ("subscript", boxed(|| ToggleButton::mark("subscript", "x₂", "subscript"))),
        ("superscript", boxed(|| ToggleButton::mark("superscript", "x²", "superscript"))),
        ("highlight", boxed(|| {
            SelectButton::new(
                "highlight",
                "Hl",
                "highlight",
                &["none", "yellow", "green", "cyan", "pink"],
            )
        })),
        ("font-color", boxed(|| {
            SelectButton::new(
                "font-color",
                "A",
                "color",
                &["default", "red", "orange", "green", "blue", "purple"],
            )
        })),
        (DIVIDER_KEY, boxed(Divider::new)),
        ("bullet-list", boxed(|| ToggleButton::node("bullet-list", "•", "bullet-list"))),
        ("ordered-list", boxed(|| ToggleButton::node("ordered-list", "1.", "ordered-list"))),
        ("indent-decrease", boxed(|| {
            ActionButton::new("indent-decrease", "⇤", EditorCommand::Outdent)
        })),
        ("indent-increase", boxed(|| {
            ActionButton::new("indent-increase", "⇥", EditorCommand::Indent)
        })),
        ("align", boxed(|| {
            SelectButton::new(
                "align",
                "≡",
                "text-align",
                &["left", "center", "right", "justify"],
            )
        })),
        ("todo", boxed(|| ToggleButton::node("todo", "☐", "task-list"))),
        ("line-height", boxed(|| {
            SelectButton::new(
                "line-height",
                "↕",
                "line-height",
                &["default", "1.0", "1.5", "2.0", "2.5", "3.0"],
            )
        })),
        ("break", boxed(|| {
            ActionButton::new("break", "↵", EditorCommand::InsertNode("hard-break".to_string()))
        })),
        ("quote", boxed(|| ToggleButton::node("quote", "❝", "blockquote"))),
        ("image", boxed(|| {
            ActionButton::new("image", "Img", EditorCommand::InsertNode("image".to_string()))
        })),
        ("video", boxed(|| {
            ActionButton::new("video", "Vid", EditorCommand::InsertNode("video".to_string()))
        })),
        ("code-block", boxed(|| ToggleButton::node("code-block", "{}", "code-block"))),
        ("hr", boxed(|| {
            ActionButton::new(
                "hr",
                "―",
                EditorCommand::InsertNode("horizontal-rule".to_string()),
            )
        })),
        ("table", boxed(|| {
            ActionButton::new("table", "▦", EditorCommand::InsertTable { rows: 3, cols: 3 })
        })),
        ("attachment", boxed(|| {
            ActionButton::new(
                "attachment",
                "Att",
                EditorCommand::InsertNode("attachment".to_string()),
            )
        })),
        ("fullscreen", boxed(|| {
            ActionButton::new("fullscreen", "⛶", EditorCommand::ToggleFullscreen)
                .active_when(|s| s.fullscreen)
        })),
        ("printer", boxed(|| ActionButton::new("printer", "⎙", EditorCommand::Print))),
        ("emoji", boxed(|| {
            ActionButton::new("emoji", "☺", EditorCommand::InsertText("☺".to_string()))
        })),
        ("ai", boxed(AiButton::new)),
    ]
}
