// engine/mod.rs - Contract between the toolbar and the document editing engine

pub mod scratch;

pub use scratch::ScratchEngine;

use std::collections::{BTreeMap, BTreeSet};

use crate::command::EditorCommand;
use crate::config::EditorOptions;

/// Selection-dependent state that menu buttons read on every transaction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    /// Marks active at the selection (bold, italic, link...)
    pub marks: BTreeSet<String>,
    /// Block nodes wrapping the selection (bullet-list, blockquote...)
    pub nodes: BTreeSet<String>,
    /// Attribute values at the selection (heading, text-align, color...)
    pub attributes: BTreeMap<String, String>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub fullscreen: bool,
    pub painter: bool,
}

impl EditorState {
    /// True when `name` is an active mark or node
    pub fn is_active(&self, name: &str) -> bool {
        self.marks.contains(name) || self.nodes.contains(name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// The editing engine as seen by the toolbar
pub trait EditorEngine {
    fn state(&self) -> &EditorState;

    /// Id of the nearest container element; tooltips are rendered inside it
    fn container_id(&self) -> &str;

    /// Run a command. Returns true when the state or document changed.
    fn execute(&mut self, command: EditorCommand) -> bool;
}

/// Fired once, right after the engine is created
pub struct CreateEvent<'a> {
    pub editor: &'a dyn EditorEngine,
}

/// Fired after every state-affecting change
pub struct TransactionEvent<'a> {
    pub editor: &'a dyn EditorEngine,
    pub doc_changed: bool,
}

impl TransactionEvent<'_> {
    pub fn state(&self) -> &EditorState {
        self.editor.state()
    }
}

/// Listener for the engine's lifecycle callbacks
pub trait EditorEvents {
    fn on_create(&mut self, event: &CreateEvent<'_>, options: &EditorOptions);
    fn on_transaction(&mut self, event: &TransactionEvent<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_checks_marks_and_nodes() {
        let mut state = EditorState::default();
        state.marks.insert("bold".to_string());
        state.nodes.insert("blockquote".to_string());

        assert!(state.is_active("bold"));
        assert!(state.is_active("blockquote"));
        assert!(!state.is_active("italic"));
    }

    #[test]
    fn test_attribute_lookup() {
        let mut state = EditorState::default();
        state
            .attributes
            .insert("text-align".to_string(), "center".to_string());

        assert_eq!(state.attribute("text-align"), Some("center"));
        assert_eq!(state.attribute("heading"), None);
    }
}
