// ui/widgets/header_bar.rs - Toolbar row widget with flex-wrap layout

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};

use crate::header::Header;
use crate::menu::MenuButton;
use crate::ui::theme::Theme;

/// Blank columns on each side of a label
const PADDING: u16 = 1;

/// Draws the first mounted container of a header
pub struct HeaderBar<'a> {
    pub header: &'a Header,
    pub theme: &'a Theme,
    pub hovered: Option<usize>,
}

impl<'a> HeaderBar<'a> {
    pub fn new(header: &'a Header, theme: &'a Theme) -> Self {
        Self {
            header,
            theme,
            hovered: None,
        }
    }

    pub fn hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }

    fn button_style(&self, index: usize, button: &dyn MenuButton) -> Style {
        let toolbar = &self.theme.toolbar;
        let base = Style::default().bg(toolbar.background);
        if button.is_divider() {
            return base.fg(toolbar.divider_fg);
        }
        let style = if button.is_active() {
            Style::default()
                .bg(toolbar.active_bg)
                .fg(toolbar.active_fg)
                .add_modifier(Modifier::BOLD)
        } else if !button.is_enabled() {
            base.fg(toolbar.disabled_fg)
        } else {
            base.fg(toolbar.button_fg)
        };
        if self.hovered == Some(index) && button.is_enabled() {
            style.bg(toolbar.hover_bg)
        } else {
            style
        }
    }
}

fn item_width(button: &dyn MenuButton) -> u16 {
    Line::from(button.label()).width() as u16 + PADDING * 2
}

/// Place every button of the mounted container, wrapping onto new rows
/// when the current row is full. Buttons that fall below `area` get an
/// empty rect.
pub fn layout_items(header: &Header, area: Rect) -> Vec<(usize, Rect)> {
    let Some(container) = header.containers().first() else {
        return Vec::new();
    };
    let buttons = header.menu_buttons();

    let mut placed = Vec::with_capacity(container.children.len());
    let mut x = area.x;
    let mut y = area.y;
    for &index in &container.children {
        let Some(button) = buttons.get(index) else {
            continue;
        };
        let width = item_width(button.as_ref()).min(area.width);
        if x > area.x && x + width > area.right() {
            if !container.wrap {
                break;
            }
            x = area.x;
            y += 1;
        }
        let rect = if y < area.bottom() {
            Rect::new(x, y, width, 1)
        } else {
            Rect::default()
        };
        placed.push((index, rect));
        x += width;
    }
    placed
}

/// Rows needed to show every button at `width` columns
pub fn required_height(header: &Header, width: u16) -> u16 {
    let area = Rect::new(0, 0, width, u16::MAX);
    layout_items(header, area)
        .iter()
        .map(|(_, rect)| rect.y + 1)
        .max()
        .unwrap_or(0)
}

/// Index of the button under the given cell
pub fn hit_test(header: &Header, area: Rect, column: u16, row: u16) -> Option<usize> {
    layout_items(header, area)
        .into_iter()
        .find(|(_, rect)| {
            rect.width > 0
                && column >= rect.x
                && column < rect.right()
                && row >= rect.y
                && row < rect.bottom()
        })
        .map(|(index, _)| index)
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.toolbar.background));

        let buttons = self.header.menu_buttons();
        for (index, rect) in layout_items(self.header, area) {
            if rect.width == 0 {
                continue;
            }
            let button = buttons[index].as_ref();
            let text = format!(" {} ", button.label());
            let line = Line::from(text).style(self.button_style(index, button));
            buf.set_line(rect.x, rect.y, &line, rect.width);
        }
    }
}
