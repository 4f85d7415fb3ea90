// ui/widgets/tooltip.rs - Floating tooltip for the hovered toolbar button

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::tooltip::{Placement, Tooltip};
use crate::ui::theme::Theme;

const ARROW_UP: &str = "▲";
const ARROW_DOWN: &str = "▼";

/// Tooltip popup anchored to a button rect
pub struct TooltipPopup<'a> {
    pub tooltip: &'a Tooltip,
    pub theme: &'a Theme,
    /// Side of the anchor the popup ended up on
    placement: Placement,
}

impl<'a> TooltipPopup<'a> {
    pub fn new(tooltip: &'a Tooltip, theme: &'a Theme) -> Self {
        Self {
            tooltip,
            theme,
            placement: tooltip.placement,
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    fn arrow_rows(&self) -> u16 {
        u16::from(self.tooltip.arrow)
    }

    /// Area for the popup: below the anchor (above for `Placement::Top`),
    /// centered on it and kept inside `bounds`. The arrow takes one row.
    /// Records the side actually used so the arrow faces the anchor.
    pub fn calculate_position(&mut self, anchor: Rect, bounds: Rect) -> Rect {
        let content_width = Line::from(self.tooltip.content.as_str()).width() as u16;
        let width = (content_width + 4).min(bounds.width); // Text + borders + padding
        let height = (3 + self.arrow_rows()).min(bounds.height);

        let center = anchor.x + anchor.width / 2;
        let mut x = center.saturating_sub(width / 2).max(bounds.x);
        if x + width > bounds.right() {
            x = bounds.right().saturating_sub(width);
        }

        let below = anchor.bottom();
        let fits_below = below + height <= bounds.bottom();
        let (placement, y) = match self.tooltip.placement {
            Placement::Bottom if fits_below => (Placement::Bottom, below),
            Placement::Top if anchor.y >= bounds.y + height => (Placement::Top, anchor.y - height),
            _ if fits_below => (Placement::Bottom, below),
            _ => (Placement::Top, anchor.y.saturating_sub(height).max(bounds.y)),
        };
        self.placement = placement;

        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl Widget for TooltipPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let toolbar = &self.theme.toolbar;
        let arrow_rows = self.arrow_rows().min(area.height);
        let points_up = self.placement == Placement::Bottom;

        let (arrow_y, box_area) = if points_up {
            (
                area.y,
                Rect {
                    y: area.y + arrow_rows,
                    height: area.height - arrow_rows,
                    ..area
                },
            )
        } else {
            (
                area.bottom().saturating_sub(1),
                Rect {
                    height: area.height - arrow_rows,
                    ..area
                },
            )
        };

        if arrow_rows > 0 {
            let glyph = if points_up { ARROW_UP } else { ARROW_DOWN };
            buf.set_string(
                area.x + area.width / 2,
                arrow_y,
                glyph,
                Style::default().fg(toolbar.tooltip_border),
            );
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(toolbar.tooltip_border))
            .style(Style::default().bg(toolbar.tooltip_bg));

        Paragraph::new(Line::from(self.tooltip.content.as_str()))
            .style(Style::default().fg(toolbar.tooltip_fg))
            .block(block)
            .alignment(Alignment::Center)
            .render(box_area, buf);
    }
}
