// header/entry.rs - Toolbar configuration entries

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::menu::CustomMenu;
use crate::menu::builtin::DIVIDER_KEY;

/// Literal token accepted as an alias for the divider key
pub const SEPARATOR_TOKEN: &str = "|";

/// Layout used when no toolbar keys are configured
pub const DEFAULT_TOOLBAR_KEYS: &[&str] = &[
    "undo",
    "redo",
    "brush",
    "eraser",
    "divider",
    "heading",
    "font-family",
    "font-size",
    "divider",
    "bold",
    "italic",
    "underline",
    "strike",
    "link",
    "code",
    "subscript",
    "superscript",
    "hr",
    "todo",
    "emoji",
    "divider",
    "highlight",
    "font-color",
    "divider",
    "align",
    "line-height",
    "divider",
    "bullet-list",
    "ordered-list",
    "indent-decrease",
    "indent-increase",
    "break",
    "divider",
    "image",
    "video",
    "attachment",
    "quote",
    "container",
    "code-block",
    "table",
    "divider",
    "printer",
    "fullscreen",
];

/// One toolbar entry: a built-in key or a custom menu descriptor.
/// Anything else in the list (`null`, `false`, numbers) is kept as
/// `Skip` so a single odd value does not reject the whole file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ToolbarEntry {
    Key(String),
    Custom(CustomMenu),
    Skip(IgnoredAny),
}

impl ToolbarEntry {
    /// Key this entry is built and reported under; `None` for entries
    /// that are skipped
    pub fn key(&self) -> Option<&str> {
        match self {
            ToolbarEntry::Key(raw) => normalize_key(raw),
            ToolbarEntry::Custom(menu) => Some(menu.display_key()),
            ToolbarEntry::Skip(_) => None,
        }
    }
}

impl From<&str> for ToolbarEntry {
    fn from(key: &str) -> Self {
        ToolbarEntry::Key(key.to_string())
    }
}

impl From<String> for ToolbarEntry {
    fn from(key: String) -> Self {
        ToolbarEntry::Key(key)
    }
}

impl From<CustomMenu> for ToolbarEntry {
    fn from(menu: CustomMenu) -> Self {
        ToolbarEntry::Custom(menu)
    }
}

/// Trim `raw` and map the separator token to the divider key.
/// Returns `None` for blank keys.
pub fn normalize_key(raw: &str) -> Option<&str> {
    match raw.trim() {
        "" => None,
        SEPARATOR_TOKEN => Some(DIVIDER_KEY),
        key => Some(key),
    }
}
