// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};

use crate::engine::EditorState;
use crate::ui::theme::Theme;

/// Status bar showing the selection state and the last toolbar message
pub struct StatusBar<'a> {
    pub state: &'a EditorState,
    pub message: Option<&'a str>,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a EditorState, message: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            state,
            message,
            theme,
        }
    }

    fn describe_state(&self) -> String {
        let mut parts: Vec<String> = self
            .state
            .marks
            .iter()
            .chain(self.state.nodes.iter())
            .cloned()
            .collect();
        parts.extend(
            self.state
                .attributes
                .iter()
                .map(|(name, value)| format!("{}={}", name, value)),
        );
        if self.state.fullscreen {
            parts.push("fullscreen".to_string());
        }
        if self.state.painter {
            parts.push("painter".to_string());
        }
        if parts.is_empty() {
            "plain".to_string()
        } else {
            parts.join(" ")
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = match self.message {
            Some(msg) => format!(" {} | {}", self.describe_state(), msg),
            None => format!(" {}", self.describe_state()),
        };

        buf.set_style(
            area,
            Style::default()
                .bg(self.theme.ui.status_bar_bg)
                .fg(self.theme.ui.status_bar_fg),
        );
        let line_widget = Line::from(status).style(
            Style::default()
                .bg(self.theme.ui.status_bar_bg)
                .fg(self.theme.ui.status_bar_fg),
        );

        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}
