// app.rs - Ties the editing engine, the toolbar and pointer input together

use log::debug;
use ratatui::layout::Rect;

use crate::command::EditorCommand;
use crate::config::EditorOptions;
use crate::engine::{EditorEngine, ScratchEngine};
use crate::header::Header;
use crate::i18n::Translator;
use crate::menu::MenuRegistry;
use crate::ui::widgets::header_bar;

pub struct App {
    pub engine: ScratchEngine,
    pub header: Header,
    pub options: EditorOptions,
    /// Button under the pointer
    pub hovered: Option<usize>,
    /// Where the header was last drawn, for hit testing
    pub header_area: Rect,
    pub status_message: Option<String>,
}

impl App {
    /// Create the engine, deliver its creation event to a fresh header and
    /// mount the header
    pub fn new(options: EditorOptions) -> Self {
        let mut translator = Translator::new(options.locale());
        translator.extend(&options.i18n);

        let engine = ScratchEngine::new();
        let mut header = Header::new(MenuRegistry::with_builtins(), translator);
        engine.create(&mut header, &options);
        header.mount();
        engine.dispatch(&mut header);

        Self {
            engine,
            header,
            options,
            hovered: None,
            header_area: Rect::default(),
            status_message: None,
        }
    }

    /// Run `command` on the engine and notify the header when it applied
    pub fn run(&mut self, command: EditorCommand) -> bool {
        debug!("running {:?}", command);
        self.engine.apply(command, &mut self.header)
    }

    pub fn insert_char(&mut self, c: char) {
        self.run(EditorCommand::InsertText(c.to_string()));
    }

    /// Track the pointer; returns true when the hovered button changed
    pub fn hover(&mut self, column: u16, row: u16) -> bool {
        let hovered = header_bar::hit_test(&self.header, self.header_area, column, row);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// Activate the button under the pointer, if any
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        let Some(index) = header_bar::hit_test(&self.header, self.header_area, column, row) else {
            return false;
        };
        let key = self.header.menu_buttons()[index].key().to_string();
        match self.header.activate(index, &self.engine) {
            Some(command) => {
                let applied = self.run(command);
                self.status_message = Some(if applied {
                    format!("{} applied", key)
                } else {
                    format!("{}: nothing to do", key)
                });
            }
            None => self.status_message = Some(format!("{} is unavailable", key)),
        }
        true
    }

    /// One line per mounted button: key, label and tooltip text
    pub fn dump(&self) -> Vec<String> {
        self.header
            .menu_buttons()
            .iter()
            .map(|button| {
                let tip = button
                    .element()
                    .tooltip
                    .as_ref()
                    .map(|t| t.content.as_str())
                    .unwrap_or("-");
                format!("{:<16} {:<14} {}", button.key(), button.label(), tip)
            })
            .collect()
    }

    pub fn container_id(&self) -> &str {
        self.engine.container_id()
    }
}
