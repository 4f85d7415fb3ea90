// ui/renderer.rs - Ratatui-based renderer for the toolbar shell

use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::Stdout;

use crate::app::App;
use crate::engine::EditorEngine;
use crate::ui::theme::Theme;
use crate::ui::widgets::document_pane::DocumentPane;
use crate::ui::widgets::header_bar::{self, HeaderBar};
use crate::ui::widgets::status_bar::StatusBar;
use crate::ui::widgets::tooltip::TooltipPopup;

/// Ratatui-based renderer for the toolbar shell
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl TuiRenderer {
    pub fn new(theme: Theme) -> Result<Self, std::io::Error> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal, theme })
    }

    /// Draw the header, document and status bar
    pub fn draw(&mut self, app: &mut App) -> Result<(), std::io::Error> {
        let theme = &self.theme;
        self.terminal.draw(|f| draw_app(f, app, theme))?;
        Ok(())
    }
}

/// Lay out and draw one frame. Records where the header landed so pointer
/// events can be hit-tested against it.
pub fn draw_app(f: &mut Frame, app: &mut App, theme: &Theme) {
    let size = f.size();
    let header_height = header_bar::required_height(&app.header, size.width)
        .max(1)
        .min(size.height.saturating_sub(2).max(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Toolbar rows
            Constraint::Min(1),                // Document
            Constraint::Length(1),             // Status bar (1 line)
        ])
        .split(size);

    app.header_area = chunks[0];
    f.render_widget(
        HeaderBar::new(&app.header, theme).hovered(app.hovered),
        chunks[0],
    );
    f.render_widget(DocumentPane::new(&app.engine.text, theme), chunks[1]);

    f.render_widget(
        StatusBar::new(app.engine.state(), app.status_message.as_deref(), theme),
        chunks[2],
    );

    // Tooltip overlay for the hovered button, kept inside the frame
    if let Some(index) = app.hovered {
        let anchor = header_bar::layout_items(&app.header, chunks[0])
            .into_iter()
            .find(|(i, _)| *i == index)
            .map(|(_, rect)| rect);
        let tooltip = app.header.menu_buttons()[index].element().tooltip.as_ref();
        if let (Some(anchor), Some(tooltip)) = (anchor, tooltip) {
            let mut popup = TooltipPopup::new(tooltip, theme);
            let area = popup.calculate_position(anchor, size);
            f.render_widget(popup, area);
        }
    }
}
