//! Section drawer.
//!
//! Compact-width replacement for the nav pills: a small overlay under
//! the burger listing every section. Keyboard-first (j/k plus Enter)
//! but clicks on rows work too.

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, StatefulWidget, Widget};
use unicode_width::UnicodeWidthStr;

use super::action::Action;
use crate::config::Colors;
use crate::event::KeyInput;
use crate::nav::Section;

#[derive(Default)]
pub struct DrawerState {
    selected: usize,
    len: usize,
    area: Rect,
}

impl DrawerState {
    /// Reset the cursor onto the active section when the drawer opens.
    pub fn open_at(&mut self, active: usize, len: usize) {
        self.len = len;
        self.selected = active.min(len.saturating_sub(1));
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Action {
        if KeyInput::is_down(key) {
            self.selected = (self.selected + 1).min(self.len.saturating_sub(1));
            Action::None
        } else if KeyInput::is_up(key) {
            self.selected = self.selected.saturating_sub(1);
            Action::None
        } else if KeyInput::is_enter(key) {
            Action::NavItem(self.selected)
        } else if KeyInput::is_escape(key) || KeyInput::is_menu(key) {
            Action::ToggleMenu
        } else {
            Action::Ignored
        }
    }

    /// Whether the point lies anywhere on the drawer. Clicks outside
    /// close it.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.contains(Position::new(x, y))
    }

    /// Which row a click landed on, if any.
    pub fn hit(&self, x: u16, y: u16) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        let row = y.checked_sub(self.area.y + 1)? as usize;
        if row < self.len && x > self.area.x && x + 1 < self.area.right() {
            Some(row)
        } else {
            None
        }
    }
}

/// Section drawer widget
pub struct Drawer<'a> {
    colors: &'a Colors,
    sections: &'a [Section],
    active: usize,
}

impl<'a> Drawer<'a> {
    pub fn new(colors: &'a Colors, sections: &'a [Section], active: usize) -> Self {
        Self {
            colors,
            sections,
            active,
        }
    }

    /// Outer size needed to list every section.
    pub fn size(sections: &[Section]) -> (u16, u16) {
        let label = sections.iter().map(|s| s.label.width()).max().unwrap_or(0);
        (label as u16 + 8, sections.len() as u16 + 2)
    }
}

impl<'a> StatefulWidget for Drawer<'a> {
    type State = DrawerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.area = area;
        state.len = self.sections.len();

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.colors.style_accent())
            .title(Span::styled("sections", self.colors.style_muted()));
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, section) in self.sections.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }

            let marker = if i == self.active { "● " } else { "  " };
            let style = if i == state.selected {
                self.colors.style_pill_active()
            } else {
                self.colors.style_text()
            };
            let line = Line::from(vec![
                Span::styled(marker.to_string(), self.colors.style_accent()),
                Span::styled(format!(" {} ", section.label), style),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sections() -> Vec<Section> {
        vec![
            Section::new("hero", "Home"),
            Section::new("about", "About"),
            Section::new("projects", "Projects"),
        ]
    }

    #[test]
    fn cursor_starts_on_the_active_section_and_clamps() {
        let mut state = DrawerState::default();
        state.open_at(2, 3);
        assert_eq!(state.selected(), 2);

        state.handle_key(&key(KeyCode::Char('j')));
        assert_eq!(state.selected(), 2);

        state.handle_key(&key(KeyCode::Char('k')));
        state.handle_key(&key(KeyCode::Char('k')));
        state.handle_key(&key(KeyCode::Char('k')));
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn enter_chooses_and_escape_closes() {
        let mut state = DrawerState::default();
        state.open_at(0, 3);
        state.handle_key(&key(KeyCode::Char('j')));
        assert_eq!(state.handle_key(&key(KeyCode::Enter)), Action::NavItem(1));
        assert_eq!(state.handle_key(&key(KeyCode::Esc)), Action::ToggleMenu);
        assert_eq!(state.handle_key(&key(KeyCode::Char('m'))), Action::ToggleMenu);
        assert_eq!(state.handle_key(&key(KeyCode::Char('x'))), Action::Ignored);
    }

    #[test]
    fn clicks_resolve_to_rows_inside_the_frame() {
        let secs = sections();
        let colors = Colors::dark();
        let area = Rect::new(50, 2, 16, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        let mut state = DrawerState::default();
        state.open_at(1, 3);
        Drawer::new(&colors, &secs, 1).render(area, &mut buf, &mut state);

        assert_eq!(state.hit(52, 3), Some(0));
        assert_eq!(state.hit(52, 5), Some(2));
        // Border rows and outside points are not rows.
        assert_eq!(state.hit(52, 2), None);
        assert_eq!(state.hit(10, 3), None);
        assert!(state.contains(50, 2));
        assert!(!state.contains(49, 2));
    }
}
