use anyhow::Result;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use crate::config::Config;
use crate::content::Content;
use crate::event::KeyInput;
use crate::nav::{NavController, NavError, NavState, ScrollCommand, Scroller, Section};
use crate::ui::{
    anchored_right, centered_rect, document, Action, AppLayout, DocView, Document, Drawer,
    DrawerState, HelpModal, NavBar, NavBarState, NavHit, Typewriter,
};

/// Rows per mouse wheel notch.
const WHEEL_ROWS: i16 = 3;

/// Main application state
pub struct App {
    // Core
    pub running: bool,
    pub config: Config,
    content: Content,
    sections: Vec<Section>,
    brand: String,

    // Navigation
    nav: NavController,
    scroller: Scroller,
    nav_state: NavState,

    // Page
    document: Document,
    typewriter: Typewriter,

    // UI
    pub show_help: bool,
    layout: AppLayout,
    last_size: (u16, u16),
    nav_bar_state: NavBarState,
    drawer_state: DrawerState,
}

impl App {
    pub fn new(
        config: Config,
        start_section: Option<String>,
        width: u16,
        height: u16,
    ) -> Result<Self> {
        let content = Content::default();
        let sections = content.sections();
        let brand = content
            .profile
            .name
            .split_whitespace()
            .next()
            .unwrap_or("~")
            .to_lowercase();

        let nav = NavController::new(content.registry(), config.nav);
        let typewriter = Typewriter::new(content.profile.title);
        let viewport_rows = height.saturating_sub(1);
        let document = Document::build(
            &content,
            width,
            viewport_rows,
            typewriter.visible(),
            &config.colors,
        );

        let mut app = Self {
            running: true,
            config,
            content,
            sections,
            brand,
            nav,
            scroller: Scroller::new(),
            nav_state: NavState {
                past_threshold: false,
                hidden: false,
                active_section: String::new(),
                progress: 0.0,
                menu_open: false,
            },
            document,
            typewriter,
            show_help: false,
            layout: AppLayout::default(),
            last_size: (width, height),
            nav_bar_state: NavBarState::default(),
            drawer_state: DrawerState::default(),
        };

        app.sync_geometry();

        // Deep-link straight to a section, without the smooth scroll.
        if let Some(id) = start_section {
            match app.nav.on_nav_item_click(&id, app.scroller.seq()) {
                Ok(ScrollCommand::ScrollTo { target_offset }) => {
                    // Skipping the intro: finish the hero tagline too.
                    app.typewriter.skip_to_end();
                    app.rebuild_document();
                    app.scroller.jump_to(target_offset);
                    app.push_sample();
                }
                Err(err) => log::warn!("--section {}: {}", id, err),
            }
            app.nav_state = app.nav.state();
        }

        Ok(app)
    }

    fn viewport_rows(&self) -> u16 {
        self.last_size.1.saturating_sub(1)
    }

    /// Re-measure everything after the content or terminal changed.
    fn sync_geometry(&mut self) {
        self.scroller.set_geometry(
            document::units_from_rows(self.viewport_rows() as usize),
            self.document.height_units(),
        );
        self.nav.set_bounds(self.document.bounds());
        self.push_sample();
    }

    fn rebuild_document(&mut self) {
        self.document = Document::build(
            &self.content,
            self.last_size.0,
            self.viewport_rows(),
            self.typewriter.visible(),
            &self.config.colors,
        );
        self.sync_geometry();
    }

    /// Feed the controller the current scroll position.
    fn push_sample(&mut self) {
        let sample = self.scroller.sample();
        self.nav_state = self.nav.on_scroll(&sample);
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.last_size = (width, height);
        self.rebuild_document();
    }

    pub fn handle_tick(&mut self) {
        if self.scroller.tick() {
            self.push_sample();
        }
        if !self.typewriter.is_done() && self.typewriter.tick() {
            // The hero keeps its height while typing, so this only
            // repaints; bounds stay where they were.
            self.rebuild_document();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Help modal takes priority
        if self.show_help {
            if KeyInput::is_help(&key) || KeyInput::is_escape(&key) {
                self.show_help = false;
            }
            return Ok(());
        }

        if KeyInput::is_quit(&key) {
            self.running = false;
            return Ok(());
        }

        // Open drawer sees keys first; unhandled ones fall through
        if self.nav_state.menu_open {
            match self.drawer_state.handle_key(&key) {
                Action::Ignored => {}
                action => return self.dispatch(action),
            }
        }

        let action = if KeyInput::is_help(&key) {
            Action::ToggleHelp
        } else if KeyInput::is_down(&key) {
            Action::ScrollLines(1)
        } else if KeyInput::is_up(&key) {
            Action::ScrollLines(-1)
        } else if KeyInput::is_fast_down(&key) {
            Action::ScrollLines(5)
        } else if KeyInput::is_fast_up(&key) {
            Action::ScrollLines(-5)
        } else if KeyInput::is_page_down(&key) {
            Action::ScrollPages(1)
        } else if KeyInput::is_page_up(&key) {
            Action::ScrollPages(-1)
        } else if KeyInput::is_top(&key) {
            Action::JumpTop
        } else if KeyInput::is_bottom(&key) {
            Action::JumpBottom
        } else if KeyInput::is_tab(&key) {
            Action::NextSection
        } else if KeyInput::is_shift_tab(&key) {
            Action::PrevSection
        } else if KeyInput::is_menu(&key) {
            Action::ToggleMenu
        } else if KeyInput::is_back_to_top(&key) {
            Action::BackToTop
        } else if KeyInput::is_yank(&key) {
            Action::YankEmail
        } else if let Some(index) = KeyInput::section_digit(&key) {
            Action::NavItem(index)
        } else {
            Action::Ignored
        };

        self.dispatch(action)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.dispatch(Action::ScrollLines(WHEEL_ROWS)),
            MouseEventKind::ScrollUp => self.dispatch(Action::ScrollLines(-WHEEL_ROWS)),
            MouseEventKind::Down(MouseButton::Left) => {
                let (x, y) = (mouse.column, mouse.row);

                if self.nav_state.menu_open {
                    let action = match self.drawer_state.hit(x, y) {
                        Some(index) => Action::NavItem(index),
                        // Anywhere off the drawer closes it.
                        None if !self.drawer_state.contains(x, y) => Action::ToggleMenu,
                        None => Action::None,
                    };
                    return self.dispatch(action);
                }

                let action = match self.nav_bar_state.hit(x, y) {
                    Some(NavHit::Brand) => Action::BackToTop,
                    Some(NavHit::Item(index)) => Action::NavItem(index),
                    Some(NavHit::Menu) => Action::ToggleMenu,
                    None => Action::None,
                };
                self.dispatch(action)
            }
            _ => Ok(()),
        }
    }

    /// Dispatch an action from a widget or key map
    fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::None | Action::Ignored => {}

            Action::Quit => {
                self.running = false;
            }

            Action::ToggleHelp => {
                self.show_help = !self.show_help;
            }

            Action::ToggleMenu => {
                self.nav_state = self.nav.toggle_menu();
                if self.nav_state.menu_open {
                    self.drawer_state
                        .open_at(self.nav.active_index(), self.sections.len());
                }
            }

            Action::NavItem(index) => {
                self.go_to_section(index);
            }

            Action::BackToTop => {
                self.go_to_section(0);
            }

            Action::NextSection => {
                let last = self.sections.len().saturating_sub(1);
                self.go_to_section((self.nav.active_index() + 1).min(last));
            }

            Action::PrevSection => {
                self.go_to_section(self.nav.active_index().saturating_sub(1));
            }

            Action::ScrollLines(rows) => {
                self.scroller.scroll_by(rows as f32 * document::ROW_UNITS);
                self.push_sample();
            }

            Action::ScrollPages(pages) => {
                let half = document::units_from_rows(self.viewport_rows() as usize) / 2.0;
                self.scroller.scroll_by(pages as f32 * half);
                self.push_sample();
            }

            Action::JumpTop => {
                self.scroller.jump_to(0.0);
                self.push_sample();
            }

            Action::JumpBottom => {
                self.scroller.jump_to_end();
                self.push_sample();
            }

            Action::YankEmail => {
                self.yank_email();
            }
        }

        Ok(())
    }

    /// Activate a section: optimistic active state now, smooth scroll
    /// to catch up.
    fn go_to_section(&mut self, index: usize) {
        let Some(section) = self.sections.get(index) else {
            log::debug!("no section at index {}", index);
            return;
        };
        let id = section.id.clone();

        match self.nav.on_nav_item_click(&id, self.scroller.seq()) {
            Ok(ScrollCommand::ScrollTo { target_offset }) => {
                self.scroller.animate_to(target_offset);
            }
            Err(NavError::StaleBounds(id)) => {
                log::debug!("section '{}' has no bounds yet, not scrolling", id);
            }
            Err(err @ NavError::UnknownSection(_)) => {
                log::warn!("{}", err);
            }
        }
        self.nav_state = self.nav.state();
    }

    fn yank_email(&mut self) {
        let email = self.content.profile.email;
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(err) = clipboard.set_text(email) {
                    log::warn!("could not copy '{}': {}", email, err);
                } else {
                    log::info!("copied {} to clipboard", email);
                }
            }
            Err(err) => log::warn!("clipboard unavailable: {}", err),
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let colors = &self.config.colors;
        let areas = self.layout.compute(area);

        let offset_rows = document::rows_from_units(self.scroller.offset());
        frame.render_widget(DocView::new(&self.document, offset_rows), areas.document);

        // Bar is drawn over the document, it occupies no layout space.
        let bar = NavBar::new(colors, &self.sections, &self.nav_state)
            .brand(&self.brand)
            .compact(self.layout.is_compact(area.width));
        frame.render_stateful_widget(bar, areas.bar, &mut self.nav_bar_state);

        self.render_status_bar(frame, areas.status_bar);

        if self.nav_state.menu_open {
            let (width, height) = Drawer::size(&self.sections);
            let drawer_area = anchored_right(width, height, self.layout.bar_rows, areas.document);
            let drawer = Drawer::new(colors, &self.sections, self.nav.active_index());
            frame.render_stateful_widget(drawer, drawer_area, &mut self.drawer_state);
        }

        if self.show_help {
            let help_area = centered_rect(60, 80, area);
            frame.render_widget(HelpModal::new(colors), help_area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let colors = &self.config.colors;
        let total_width = area.width as usize;

        let active_label = self
            .sections
            .get(self.nav.active_index())
            .map(|s| s.label.as_str())
            .unwrap_or("");
        let left_content = format!(" {} · {}", self.content.profile.name, active_label);
        let right_content = format!(
            "{:>3.0}% · ? help · q quit ",
            self.nav_state.progress * 100.0
        );

        let left_width = left_content.chars().count();
        let right_width = right_content.chars().count();
        let padding = total_width.saturating_sub(left_width + right_width);

        let line = Line::from(vec![
            Span::styled(left_content, colors.style_status_bar()),
            Span::styled(" ".repeat(padding), colors.style_status_bar()),
            Span::styled(right_content, colors.style_status_bar()),
        ]);
        frame.render_widget(line, area);
    }
}
