// tooltip.rs - Hover tooltips attached to toolbar buttons

use crate::menu::MenuElement;

/// Visual theme every toolbar tooltip uses
pub const TOOLTIP_THEME: &str = "richbar-tip";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    Top,
    #[default]
    Bottom,
}

/// Tooltip shown while the pointer rests on a button
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub content: String,
    /// Container the tooltip is rendered inside
    pub append_to: String,
    pub theme: &'static str,
    pub arrow: bool,
    pub placement: Placement,
}

/// Attach a tooltip with `content` to `element`, rendered inside `container`.
///
/// Returns false, leaving the element untouched, when `content` is empty.
pub fn attach(element: &mut MenuElement, content: &str, container: &str) -> bool {
    if content.is_empty() {
        return false;
    }
    element.tooltip = Some(Tooltip {
        content: content.to_string(),
        append_to: container.to_string(),
        theme: TOOLTIP_THEME,
        arrow: true,
        placement: Placement::Bottom,
    });
    true
}
