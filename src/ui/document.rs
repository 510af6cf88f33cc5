//! Document layout.
//!
//! Flattens the portfolio content into one scrollable column of styled
//! lines and records where each section starts, in the distance units
//! the nav controller works with. Rebuilt whenever the content or the
//! terminal size changes; scrolling itself never triggers a rebuild.

use chrono::Datelike;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::config::Colors;
use crate::content::Content;
use crate::nav::SectionBounds;

/// Distance units per terminal row. Sixteen keeps the nav tuning in a
/// familiar scale: the 80-unit scroll threshold is five rows.
pub const ROW_UNITS: f32 = 16.0;

/// Widest text column; reads poorly beyond this even on wide terminals.
const MAX_COLUMN: usize = 76;

pub fn units_from_rows(rows: usize) -> f32 {
    rows as f32 * ROW_UNITS
}

pub fn rows_from_units(units: f32) -> usize {
    (units / ROW_UNITS).round().max(0.0) as usize
}

/// The laid-out page: every line of every section, top to bottom, plus
/// the measured extent of each section.
pub struct Document {
    lines: Vec<Line<'static>>,
    bounds: Vec<SectionBounds>,
}

impl Document {
    /// Lay the content out for a terminal of the given size. `typed` is
    /// the currently revealed part of the hero tagline; the hero keeps a
    /// fixed height while it types, so bounds stay stable.
    pub fn build(
        content: &Content,
        width: u16,
        viewport_rows: u16,
        typed: &str,
        colors: &Colors,
    ) -> Self {
        let mut b = Builder::new(width, colors);

        b.section("hero", |b| b.hero(content, typed, viewport_rows));
        b.section("about", |b| b.about(content));
        b.section("why-me", |b| b.why_me(content));
        b.section("experience", |b| b.experience(content));
        b.section("projects", |b| b.projects(content));
        b.section("contact", |b| b.contact(content));
        b.footer(content);

        Self {
            lines: b.lines,
            bounds: b.bounds,
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn bounds(&self) -> &[SectionBounds] {
        &self.bounds
    }

    pub fn height_rows(&self) -> usize {
        self.lines.len()
    }

    pub fn height_units(&self) -> f32 {
        units_from_rows(self.lines.len())
    }
}

/// Renders the visible slice of a document at a row offset.
pub struct DocView<'a> {
    document: &'a Document,
    offset_rows: usize,
}

impl<'a> DocView<'a> {
    pub fn new(document: &'a Document, offset_rows: usize) -> Self {
        Self {
            document,
            offset_rows,
        }
    }
}

impl Widget for DocView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.document.lines();
        for row in 0..area.height {
            let Some(line) = lines.get(self.offset_rows + row as usize) else {
                break;
            };
            buf.set_line(area.x, area.y + row, line, area.width);
        }
    }
}

struct Builder<'a> {
    lines: Vec<Line<'static>>,
    bounds: Vec<SectionBounds>,
    colors: &'a Colors,
    width: u16,
    column: usize,
    margin: usize,
}

impl<'a> Builder<'a> {
    fn new(width: u16, colors: &'a Colors) -> Self {
        let column = (width as usize).saturating_sub(4).clamp(16, MAX_COLUMN);
        let margin = (width as usize).saturating_sub(column) / 2;
        Self {
            lines: Vec::new(),
            bounds: Vec::new(),
            colors,
            width,
            column,
            margin,
        }
    }

    /// Run one section builder and record the rows it produced.
    fn section(&mut self, id: &str, build: impl FnOnce(&mut Self)) {
        let start = self.lines.len();
        build(self);
        self.bounds.push(SectionBounds {
            section_id: id.to_string(),
            top_offset: units_from_rows(start),
            height: units_from_rows(self.lines.len() - start),
        });
    }

    fn blank(&mut self, n: usize) {
        for _ in 0..n {
            self.lines.push(Line::default());
        }
    }

    /// One line at the column margin.
    fn line(&mut self, spans: Vec<Span<'static>>) {
        let mut all = Vec::with_capacity(spans.len() + 1);
        all.push(Span::raw(" ".repeat(self.margin)));
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    /// One line centered across the full terminal width.
    fn centered(&mut self, spans: Vec<Span<'static>>) {
        let used: usize = spans.iter().map(|s| s.content.as_ref().width()).sum();
        let pad = (self.width as usize).saturating_sub(used) / 2;
        let mut all = Vec::with_capacity(spans.len() + 1);
        all.push(Span::raw(" ".repeat(pad)));
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    /// Wrapped paragraph in one style, optionally indented inside the
    /// column.
    fn paragraph(&mut self, text: &str, style: Style, indent: usize) {
        let width = self.column.saturating_sub(indent).max(8);
        for wrapped in textwrap::wrap(text, width) {
            self.line(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(wrapped.to_string(), style),
            ]);
        }
    }

    fn heading(&mut self, label: &str) {
        self.line(vec![Span::styled(
            label.to_string(),
            self.colors.style_heading(),
        )]);
        self.line(vec![Span::styled(
            "─".repeat(label.width() + 2),
            self.colors.style_border(),
        )]);
        self.blank(1);
    }

    fn chips(&mut self, technologies: &[&str], indent: usize) {
        self.paragraph(&technologies.join(" · "), self.colors.style_chip(), indent);
    }

    fn hero(&mut self, content: &Content, typed: &str, viewport_rows: u16) {
        let p = &content.profile;
        let block = [
            vec![Span::styled("Hi, I'm".to_string(), self.colors.style_muted())],
            vec![Span::styled(p.name.to_string(), self.colors.style_brand())],
            vec![
                Span::styled(typed.to_string(), self.colors.style_text()),
                Span::styled("▌".to_string(), self.colors.style_accent()),
            ],
            vec![],
            vec![Span::styled(p.subtitle.to_string(), self.colors.style_text())],
            vec![Span::styled(p.location.to_string(), self.colors.style_muted())],
            vec![],
            vec![Span::styled(
                "scroll with j/k · press ? for keys".to_string(),
                self.colors.style_muted(),
            )],
        ];

        // Fill the whole first screen, content vertically centered.
        let rows = (viewport_rows as usize).max(block.len() + 2);
        let top_pad = (rows - block.len()) / 2;
        let bottom_pad = rows - top_pad - block.len();
        self.blank(top_pad);
        for spans in block {
            if spans.is_empty() {
                self.blank(1);
            } else {
                self.centered(spans);
            }
        }
        self.blank(bottom_pad);
    }

    fn about(&mut self, content: &Content) {
        self.heading("About");
        for (i, story) in content.story.iter().enumerate() {
            if i > 0 {
                self.blank(1);
            }
            self.paragraph(story, self.colors.style_text(), 0);
        }
        self.blank(2);
    }

    fn why_me(&mut self, content: &Content) {
        self.heading("Why Me");
        for feature in content.features {
            self.line(vec![
                Span::styled(format!("{:>3} ", feature.icon), self.colors.style_accent()),
                Span::styled(
                    feature.title.to_string(),
                    self.colors.style_text().add_modifier(Modifier::BOLD),
                ),
            ]);
            self.paragraph(feature.blurb, self.colors.style_muted(), 4);
            self.blank(1);
        }
        self.blank(1);
    }

    fn experience(&mut self, content: &Content) {
        self.heading("Experience");
        for job in content.experience {
            self.line(vec![Span::styled(
                job.role.to_string(),
                self.colors.style_accent(),
            )]);
            self.line(vec![Span::styled(
                format!("{} · {}", job.company, job.period),
                self.colors.style_muted(),
            )]);
            self.blank(1);
            self.paragraph(job.summary, self.colors.style_text(), 0);
            self.chips(job.technologies, 0);
            self.blank(2);
        }
    }

    fn projects(&mut self, content: &Content) {
        self.heading("Projects");
        for project in content.projects {
            let mut title = vec![Span::styled(
                project.name.to_string(),
                self.colors.style_accent(),
            )];
            if project.live_url.is_some() {
                title.push(Span::styled(" ↗".to_string(), self.colors.style_link()));
            }
            self.line(title);
            self.paragraph(project.blurb, self.colors.style_text(), 0);
            self.chips(project.technologies, 0);
            if let Some(url) = project.live_url {
                self.line(vec![Span::styled(url.to_string(), self.colors.style_link())]);
            }
            self.blank(2);
        }
    }

    fn contact(&mut self, content: &Content) {
        self.heading(content.contact.heading);
        self.paragraph(content.contact.blurb, self.colors.style_text(), 0);
        self.blank(1);
        self.line(vec![
            Span::styled("email  ".to_string(), self.colors.style_muted()),
            Span::styled(
                content.profile.email.to_string(),
                self.colors.style_link(),
            ),
        ]);
        for social in content.contact.social {
            self.line(vec![
                Span::styled(format!("{:<7}", social.name), self.colors.style_muted()),
                Span::styled(social.url.to_string(), self.colors.style_link()),
            ]);
        }
        self.blank(1);
        self.line(vec![Span::styled(
            "press y to copy the email address".to_string(),
            self.colors.style_muted(),
        )]);
        self.blank(2);
    }

    fn footer(&mut self, content: &Content) {
        self.blank(1);
        self.centered(vec![Span::styled(
            "─".repeat(self.column.min(32)),
            self.colors.style_border(),
        )]);
        let year = chrono::Utc::now().year();
        self.centered(vec![Span::styled(
            format!("© {} {} · built for the terminal", year, content.profile.name),
            self.colors.style_muted(),
        )]);
        self.blank(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(width: u16, rows: u16) -> Document {
        Document::build(
            &Content::default(),
            width,
            rows,
            "Backend Developer",
            &Colors::dark(),
        )
    }

    #[test]
    fn records_bounds_for_every_section_in_order() {
        let doc = build(80, 24);
        let ids: Vec<&str> = doc.bounds().iter().map(|b| b.section_id.as_str()).collect();
        assert_eq!(
            ids,
            ["hero", "about", "why-me", "experience", "projects", "contact"]
        );
    }

    #[test]
    fn bounds_start_at_zero_and_ascend_without_gaps() {
        let doc = build(80, 24);
        let bounds = doc.bounds();
        assert_eq!(bounds[0].top_offset, 0.0);
        for pair in bounds.windows(2) {
            assert_eq!(pair[0].top_offset + pair[0].height, pair[1].top_offset);
        }
        for b in bounds {
            assert!(b.height > 0.0, "section '{}' is empty", b.section_id);
        }
    }

    #[test]
    fn hero_fills_the_first_screen() {
        let doc = build(80, 40);
        assert!(doc.bounds()[0].height >= units_from_rows(40));
    }

    #[test]
    fn document_extends_past_the_last_section() {
        // The footer lives below the contact band.
        let doc = build(80, 24);
        let last = doc.bounds().last().unwrap();
        assert!(doc.height_units() > last.top_offset + last.height);
    }

    #[test]
    fn survives_a_narrow_terminal() {
        let doc = build(22, 10);
        assert_eq!(doc.bounds().len(), 6);
        assert!(doc.height_rows() > 0);
    }

    #[test]
    fn row_unit_conversions_round_trip() {
        assert_eq!(units_from_rows(5), 80.0);
        assert_eq!(rows_from_units(80.0), 5);
        assert_eq!(rows_from_units(0.0), 0);
    }

    fn buffer_text(buf: &Buffer, area: Rect) -> String {
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(cell) = buf.cell((area.x + x, area.y + y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn view_renders_the_requested_slice() {
        let doc = build(60, 20);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        DocView::new(&doc, 0).render(area, &mut buf);
        assert!(buffer_text(&buf, area).contains("Jerome Edward Guban"));

        // Past the end of the document nothing is drawn.
        let mut buf = Buffer::empty(area);
        DocView::new(&doc, doc.height_rows() + 100).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
