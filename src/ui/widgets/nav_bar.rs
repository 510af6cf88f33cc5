//! Top navigation bar.
//!
//! Two rows drawn over the document: brand and section pills (or a
//! burger when they do not fit), plus a reading-progress line once the
//! page is scrolled. Rendering records hit zones in the state so mouse
//! clicks can be resolved later; a hidden bar records none, so clicks
//! fall through to the page.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::StatefulWidget;
use unicode_width::UnicodeWidthStr;

use crate::config::Colors;
use crate::nav::{NavState, Section};

/// What a click on the bar landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Brand,
    Item(usize),
    Menu,
}

/// Hit zones recorded by the last render.
#[derive(Default)]
pub struct NavBarState {
    brand_zone: Option<Rect>,
    item_zones: Vec<(usize, Rect)>,
    menu_zone: Option<Rect>,
}

impl NavBarState {
    pub fn hit(&self, x: u16, y: u16) -> Option<NavHit> {
        let pos = Position::new(x, y);
        if let Some(zone) = self.brand_zone {
            if zone.contains(pos) {
                return Some(NavHit::Brand);
            }
        }
        for (index, zone) in &self.item_zones {
            if zone.contains(pos) {
                return Some(NavHit::Item(*index));
            }
        }
        if let Some(zone) = self.menu_zone {
            if zone.contains(pos) {
                return Some(NavHit::Menu);
            }
        }
        None
    }

    fn clear(&mut self) {
        self.brand_zone = None;
        self.item_zones.clear();
        self.menu_zone = None;
    }
}

/// Nav bar widget
pub struct NavBar<'a> {
    colors: &'a Colors,
    sections: &'a [Section],
    nav: &'a NavState,
    brand: &'a str,
    compact: bool,
}

impl<'a> NavBar<'a> {
    pub fn new(colors: &'a Colors, sections: &'a [Section], nav: &'a NavState) -> Self {
        Self {
            colors,
            sections,
            nav,
            brand: "~",
            compact: false,
        }
    }

    pub fn brand(mut self, brand: &'a str) -> Self {
        self.brand = brand;
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    fn pill_width(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.label.width() + 2)
            .sum::<usize>()
            + self.sections.len().saturating_sub(1)
    }
}

impl<'a> StatefulWidget for NavBar<'a> {
    type State = NavBarState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.clear();
        if self.nav.hidden || area.height == 0 || area.width < 4 {
            return;
        }

        // Opaque backdrop once scrolled; transparent while at the top.
        if self.nav.past_threshold {
            let blank = Line::from(Span::styled(
                " ".repeat(area.width as usize),
                self.colors.style_bar(),
            ));
            for y in area.y..area.y + area.height {
                buf.set_line(area.x, y, &blank, area.width);
            }
        }

        let row = area.y;
        let brand_text = format!(" {} ", self.brand);
        let brand_width = brand_text.width() as u16;
        buf.set_line(
            area.x,
            row,
            &Line::from(Span::styled(brand_text, self.colors.style_brand())),
            area.width,
        );
        state.brand_zone = Some(Rect::new(area.x, row, brand_width.min(area.width), 1));

        let pills = self.pill_width() as u16;
        let burger = self.compact || brand_width + pills + 3 > area.width;

        if burger {
            let glyph = if self.nav.menu_open { " ✕ " } else { " ☰ " };
            let x = area.right().saturating_sub(4);
            buf.set_line(
                x,
                row,
                &Line::from(Span::styled(glyph, self.colors.style_accent())),
                area.right() - x,
            );
            state.menu_zone = Some(Rect::new(x, row, 3, 1));
        } else {
            let mut x = area.right() - pills - 1;
            for (index, section) in self.sections.iter().enumerate() {
                let text = format!(" {} ", section.label);
                let width = text.width() as u16;
                let style = if section.id == self.nav.active_section {
                    self.colors.style_pill_active()
                } else {
                    self.colors.style_text()
                };
                buf.set_line(x, row, &Line::from(Span::styled(text, style)), width);
                state.item_zones.push((index, Rect::new(x, row, width, 1)));
                x += width + 1;
            }
        }

        // Reading progress on the second row, only once scrolled.
        if area.height >= 2 && self.nav.past_threshold {
            let filled = (self.nav.progress * area.width as f32).round() as usize;
            let filled = filled.min(area.width as usize);
            let line = Line::from(vec![
                Span::styled("━".repeat(filled), self.colors.style_progress()),
                Span::styled(
                    "─".repeat(area.width as usize - filled),
                    self.colors.style_border(),
                ),
            ]);
            buf.set_line(area.x, row + 1, &line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("hero", "Home"),
            Section::new("about", "About"),
            Section::new("projects", "Projects"),
        ]
    }

    fn nav(past: bool, hidden: bool, progress: f32) -> NavState {
        NavState {
            past_threshold: past,
            hidden,
            active_section: "about".to_string(),
            progress,
            menu_open: false,
        }
    }

    fn render(bar: NavBar, area: Rect) -> (Buffer, NavBarState) {
        let mut buf = Buffer::empty(area);
        let mut state = NavBarState::default();
        bar.render(area, &mut buf, &mut state);
        (buf, state)
    }

    fn row_text(buf: &Buffer, area: Rect, y: u16) -> String {
        (0..area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn records_a_zone_per_section() {
        let colors = Colors::dark();
        let secs = sections();
        let state = nav(true, false, 0.5);
        let area = Rect::new(0, 0, 80, 2);
        let (_, bar_state) = render(NavBar::new(&colors, &secs, &state).brand("jg"), area);

        assert_eq!(bar_state.item_zones.len(), 3);
        for (index, zone) in &bar_state.item_zones {
            assert_eq!(
                bar_state.hit(zone.x + 1, zone.y),
                Some(NavHit::Item(*index))
            );
        }
        let brand = bar_state.brand_zone.unwrap();
        assert_eq!(bar_state.hit(brand.x, brand.y), Some(NavHit::Brand));
        assert_eq!(bar_state.hit(40, 1), None);
    }

    #[test]
    fn hidden_bar_draws_nothing_and_swallows_no_clicks() {
        let colors = Colors::dark();
        let secs = sections();
        let state = nav(true, true, 0.5);
        let area = Rect::new(0, 0, 80, 2);
        let (buf, bar_state) = render(NavBar::new(&colors, &secs, &state), area);

        assert_eq!(buf, Buffer::empty(area));
        assert_eq!(bar_state.hit(2, 0), None);
    }

    #[test]
    fn compact_mode_shows_a_burger_instead_of_pills() {
        let colors = Colors::dark();
        let secs = sections();
        let state = nav(true, false, 0.0);
        let area = Rect::new(0, 0, 40, 2);
        let (buf, bar_state) =
            render(NavBar::new(&colors, &secs, &state).compact(true), area);

        assert!(bar_state.item_zones.is_empty());
        let burger = bar_state.menu_zone.unwrap();
        assert_eq!(bar_state.hit(burger.x + 1, burger.y), Some(NavHit::Menu));
        assert!(row_text(&buf, area, 0).contains('☰'));
    }

    #[test]
    fn falls_back_to_burger_when_pills_do_not_fit() {
        let colors = Colors::dark();
        let secs = sections();
        let state = nav(false, false, 0.0);
        // Too narrow for three pills plus brand.
        let area = Rect::new(0, 0, 24, 2);
        let (_, bar_state) = render(NavBar::new(&colors, &secs, &state).brand("jg"), area);

        assert!(bar_state.item_zones.is_empty());
        assert!(bar_state.menu_zone.is_some());
    }

    #[test]
    fn progress_line_tracks_the_fraction_read() {
        let colors = Colors::dark();
        let secs = sections();
        let area = Rect::new(0, 0, 40, 2);

        let state = nav(true, false, 0.5);
        let (buf, _) = render(NavBar::new(&colors, &secs, &state), area);
        let filled = row_text(&buf, area, 1).matches('━').count();
        assert_eq!(filled, 20);

        // At the top the gauge is not drawn at all.
        let state = nav(false, false, 0.0);
        let (buf, _) = render(NavBar::new(&colors, &secs, &state), area);
        assert_eq!(row_text(&buf, area, 1).matches('─').count(), 0);
    }
}
