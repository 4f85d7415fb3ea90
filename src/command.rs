// command.rs - Commands a toolbar button asks the editing engine to run

/// What activating a menu button asks the engine to do
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    Undo,
    Redo,
    ToggleMark(String),
    ToggleNode(String),
    SetAttribute { name: String, value: String },
    InsertNode(String),
    InsertTable { rows: usize, cols: usize },
    InsertText(String),
    UnsetAllMarks,
    Indent,
    Outdent,
    Print,
    ToggleFullscreen,
    TogglePainter,
    AiAssist { model: String },
}

impl EditorCommand {
    pub fn toggle_mark(name: &str) -> Self {
        EditorCommand::ToggleMark(name.to_string())
    }

    pub fn toggle_node(name: &str) -> Self {
        EditorCommand::ToggleNode(name.to_string())
    }

    pub fn set_attribute(name: &str, value: &str) -> Self {
        EditorCommand::SetAttribute {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_variants() {
        assert_eq!(EditorCommand::Undo, EditorCommand::Undo);
        assert_ne!(EditorCommand::Undo, EditorCommand::Redo);
        let cmd = EditorCommand::toggle_mark("bold");
        if let EditorCommand::ToggleMark(name) = cmd {
            assert_eq!(name, "bold");
        } else {
            panic!("Expected ToggleMark");
        }
    }

    #[test]
    fn test_set_attribute_helper() {
        assert_eq!(
            EditorCommand::set_attribute("text-align", "center"),
            EditorCommand::SetAttribute {
                name: "text-align".to_string(),
                value: "center".to_string(),
            }
        );
    }
}
