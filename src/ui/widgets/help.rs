use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::config::Colors;

/// Help modal widget
pub struct HelpModal<'a> {
    colors: &'a Colors,
}

impl<'a> HelpModal<'a> {
    pub fn new(colors: &'a Colors) -> Self {
        Self { colors }
    }
}

impl<'a> Widget for HelpModal<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear background
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.colors.style_accent())
            .title(Span::styled(
                "termfolio - a portfolio for the terminal",
                self.colors.style_heading(),
            ))
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        block.render(area, buf);

        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  One long page, six sections. The bar on top follows your",
                self.colors.style_muted(),
            )),
            Line::from(Span::styled(
                "  reading position and gets out of the way while you scroll.",
                self.colors.style_muted(),
            )),
            Line::from(""),
            Line::from(Span::styled("Scrolling", self.colors.style_heading())),
            format_binding("j/k", "Scroll down/up", self.colors),
            format_binding("J/K", "Scroll fast (5 lines)", self.colors),
            format_binding("C-d/C-u", "Half page down/up", self.colors),
            format_binding("g/G", "Jump to top/bottom", self.colors),
            Line::from(""),
            Line::from(Span::styled("Sections", self.colors.style_heading())),
            format_binding("1-6", "Jump to section", self.colors),
            format_binding("Tab/S-Tab", "Next/previous section", self.colors),
            format_binding("t", "Back to the top", self.colors),
            format_binding("m", "Open the section drawer", self.colors),
            format_binding("Enter", "Choose drawer entry", self.colors),
            format_binding("Esc", "Close drawer or help", self.colors),
            Line::from(""),
            Line::from(Span::styled("Actions", self.colors.style_heading())),
            format_binding("y", "Copy email address", self.colors),
            format_binding("q", "Quit", self.colors),
            Line::from(""),
            Line::from(Span::styled(
                "Press ? or Esc to close",
                self.colors.style_muted(),
            )),
        ];

        let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });

        paragraph.render(inner, buf);
    }
}

fn format_binding<'a>(key: &'a str, desc: &'a str, colors: &'a Colors) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), colors.style_heading()),
        Span::raw("  "),
        Span::styled(desc, colors.style_text()),
    ])
}
