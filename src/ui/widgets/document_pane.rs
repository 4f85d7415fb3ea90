// ui/widgets/document_pane.rs - Plain view of the document text

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};
use ropey::Rope;

use crate::ui::theme::Theme;

/// Shows the tail of the document so the insertion point stays visible
pub struct DocumentPane<'a> {
    pub text: &'a Rope,
    pub theme: &'a Theme,
}

impl<'a> DocumentPane<'a> {
    pub fn new(text: &'a Rope, theme: &'a Theme) -> Self {
        Self { text, theme }
    }
}

impl Widget for DocumentPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(self.theme.general.background)
            .fg(self.theme.general.foreground);
        buf.set_style(area, style);

        let line_count = self.text.len_lines();
        let first = line_count.saturating_sub(area.height as usize);
        for (row, line_idx) in (first..line_count).enumerate() {
            let line = self.text.line(line_idx).to_string();
            let line = Line::from(line.trim_end_matches(['\n', '\r']).to_string()).style(style);
            buf.set_line(area.x, area.y + row as u16, &line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_last_lines_when_text_overflows() {
        let text = Rope::from_str("one\ntwo\nthree");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        DocumentPane::new(&text, &theme).render(area, &mut buf);

        assert_eq!(buf.get(0, 0).symbol(), "t");
        assert_eq!(buf.get(1, 0).symbol(), "w");
        assert_eq!(buf.get(2, 1).symbol(), "r");
    }
}
