// engine/scratch.rs - Minimal editing engine driving the toolbar shell

use log::{debug, info};
use ropey::Rope;

use super::{CreateEvent, EditorEngine, EditorEvents, EditorState, TransactionEvent};
use crate::command::EditorCommand;
use crate::config::EditorOptions;

pub const DEFAULT_CONTAINER_ID: &str = "richbar-container";

/// Plain-text engine that tracks the selection state toolbar buttons read.
///
/// There is no document tree and no history: marks, nodes and attributes
/// describe the single insertion point at the end of the text.
pub struct ScratchEngine {
    pub text: Rope,
    state: EditorState,
    container_id: String,
    pub version: usize,
}

impl Default for ScratchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScratchEngine {
    pub fn new() -> Self {
        Self {
            text: Rope::new(),
            state: EditorState::default(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            version: 0,
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: Rope::from_str(text),
            ..Self::new()
        }
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    /// Deliver the creation event to `listener`
    pub fn create(&self, listener: &mut dyn EditorEvents, options: &EditorOptions) {
        let event = CreateEvent { editor: self };
        listener.on_create(&event, options);
    }

    /// Execute `command` and, if anything changed, deliver a transaction
    /// event to `listener`. Returns whether a transaction was dispatched.
    pub fn apply(&mut self, command: EditorCommand, listener: &mut dyn EditorEvents) -> bool {
        let before = self.version;
        if !self.execute(command) {
            return false;
        }
        let event = TransactionEvent {
            editor: &*self,
            doc_changed: self.version != before,
        };
        listener.on_transaction(&event);
        true
    }

    /// Deliver a transaction event without running a command
    pub fn dispatch(&self, listener: &mut dyn EditorEvents) {
        let event = TransactionEvent {
            editor: self,
            doc_changed: false,
        };
        listener.on_transaction(&event);
    }

    fn insert(&mut self, text: &str) {
        let end = self.text.len_chars();
        self.text.insert(end, text);
        self.version += 1;
    }

    fn toggle(set: &mut std::collections::BTreeSet<String>, name: String) {
        if !set.remove(&name) {
            set.insert(name);
        }
    }

    fn indent_level(&self) -> usize {
        self.state
            .attribute("indent")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }
}

impl EditorEngine for ScratchEngine {
    fn state(&self) -> &EditorState {
        &self.state
    }

    fn container_id(&self) -> &str {
        &self.container_id
    }

    fn execute(&mut self, command: EditorCommand) -> bool {
        debug!("executing {:?}", command);
        match command {
            EditorCommand::ToggleMark(name) => Self::toggle(&mut self.state.marks, name),
            EditorCommand::ToggleNode(name) => Self::toggle(&mut self.state.nodes, name),
            EditorCommand::SetAttribute { name, value } => {
                self.state.attributes.insert(name, value);
            }
            EditorCommand::UnsetAllMarks => {
                if self.state.marks.is_empty() {
                    return false;
                }
                self.state.marks.clear();
            }
            EditorCommand::InsertText(text) => self.insert(&text),
            EditorCommand::InsertNode(name) => match name.as_str() {
                "hard-break" => self.insert("\n"),
                "horizontal-rule" => self.insert("\n---\n"),
                other => self.insert(&format!("[{}]", other)),
            },
            EditorCommand::InsertTable { rows, cols } => {
                self.insert(&format!("[table {}x{}]", rows, cols))
            }
            EditorCommand::Indent => {
                let level = self.indent_level() + 1;
                self.state
                    .attributes
                    .insert("indent".to_string(), level.to_string());
            }
            EditorCommand::Outdent => {
                let level = self.indent_level();
                if level == 0 {
                    return false;
                }
                self.state
                    .attributes
                    .insert("indent".to_string(), (level - 1).to_string());
            }
            EditorCommand::ToggleFullscreen => self.state.fullscreen = !self.state.fullscreen,
            EditorCommand::TogglePainter => self.state.painter = !self.state.painter,
            EditorCommand::Undo | EditorCommand::Redo => {
                debug!("scratch engine keeps no history");
                return false;
            }
            EditorCommand::Print => {
                info!("print requested ({} chars)", self.text.len_chars());
                return false;
            }
            EditorCommand::AiAssist { model } => {
                info!("AI assist requested with model {}", model);
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        created: usize,
        transactions: usize,
        doc_changes: usize,
    }

    impl EditorEvents for Counter {
        fn on_create(&mut self, _event: &CreateEvent<'_>, _options: &EditorOptions) {
            self.created += 1;
        }

        fn on_transaction(&mut self, event: &TransactionEvent<'_>) {
            self.transactions += 1;
            if event.doc_changed {
                self.doc_changes += 1;
            }
        }
    }

    #[test]
    fn test_toggle_mark_twice_restores_state() {
        let mut engine = ScratchEngine::new();
        assert!(engine.execute(EditorCommand::toggle_mark("bold")));
        assert!(engine.state().is_active("bold"));
        assert!(engine.execute(EditorCommand::toggle_mark("bold")));
        assert!(!engine.state().is_active("bold"));
    }

    #[test]
    fn test_apply_dispatches_transaction_only_on_change() {
        let mut engine = ScratchEngine::new();
        let mut counter = Counter::default();

        assert!(engine.apply(EditorCommand::toggle_mark("italic"), &mut counter));
        assert!(!engine.apply(EditorCommand::Undo, &mut counter));
        assert!(engine.apply(EditorCommand::InsertText("hi".to_string()), &mut counter));

        assert_eq!(counter.transactions, 2);
        assert_eq!(counter.doc_changes, 1);
        assert_eq!(engine.text.to_string(), "hi");
    }

    #[test]
    fn test_create_event_reaches_listener() {
        let engine = ScratchEngine::new();
        let mut counter = Counter::default();
        engine.create(&mut counter, &EditorOptions::default());
        assert_eq!(counter.created, 1);
    }

    #[test]
    fn test_outdent_stops_at_zero() {
        let mut engine = ScratchEngine::new();
        assert!(!engine.execute(EditorCommand::Outdent));
        assert!(engine.execute(EditorCommand::Indent));
        assert_eq!(engine.state().attribute("indent"), Some("1"));
        assert!(engine.execute(EditorCommand::Outdent));
        assert_eq!(engine.state().attribute("indent"), Some("0"));
    }

    #[test]
    fn test_insert_nodes() {
        let mut engine = ScratchEngine::with_text("a");
        engine.execute(EditorCommand::InsertNode("hard-break".to_string()));
        engine.execute(EditorCommand::InsertTable { rows: 2, cols: 3 });
        assert_eq!(engine.text.to_string(), "a\n[table 2x3]");
    }
}
