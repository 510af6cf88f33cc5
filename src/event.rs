use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Application events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal key press
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal was resized (columns, rows)
    Resize(u16, u16),
    /// Tick for animations
    Tick,
}

/// Event handler that runs in a separate thread
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        // Poll terminal input; quiet periods become ticks that drive
        // the typewriter and smooth scrolling.
        thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                if let Ok(event) = event::read() {
                    let app_event = match event {
                        Event::Key(key) => AppEvent::Key(key),
                        Event::Mouse(mouse) => AppEvent::Mouse(mouse),
                        Event::Resize(width, height) => AppEvent::Resize(width, height),
                        _ => continue,
                    };
                    if event_tx.send(app_event).is_err() {
                        break;
                    }
                }
            } else if event_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}

/// Key input helper
pub struct KeyInput;

impl KeyInput {
    pub fn is_quit(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    pub fn is_down(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('j') | KeyCode::Down)
            && key.modifiers == KeyModifiers::NONE
    }

    pub fn is_up(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('k') | KeyCode::Up)
            && key.modifiers == KeyModifiers::NONE
    }

    pub fn is_fast_down(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('J') && key.modifiers == KeyModifiers::SHIFT
    }

    pub fn is_fast_up(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('K') && key.modifiers == KeyModifiers::SHIFT
    }

    pub fn is_page_down(key: &KeyEvent) -> bool {
        key.code == KeyCode::PageDown
            || (key.code == KeyCode::Char('d') && key.modifiers == KeyModifiers::CONTROL)
    }

    pub fn is_page_up(key: &KeyEvent) -> bool {
        key.code == KeyCode::PageUp
            || (key.code == KeyCode::Char('u') && key.modifiers == KeyModifiers::CONTROL)
    }

    pub fn is_top(key: &KeyEvent) -> bool {
        key.code == KeyCode::Home
            || (key.code == KeyCode::Char('g') && key.modifiers == KeyModifiers::NONE)
    }

    pub fn is_bottom(key: &KeyEvent) -> bool {
        key.code == KeyCode::End
            || (key.code == KeyCode::Char('G') && key.modifiers == KeyModifiers::SHIFT)
    }

    pub fn is_tab(key: &KeyEvent) -> bool {
        key.code == KeyCode::Tab && key.modifiers == KeyModifiers::NONE
    }

    pub fn is_shift_tab(key: &KeyEvent) -> bool {
        key.code == KeyCode::BackTab
            || (key.code == KeyCode::Tab && key.modifiers == KeyModifiers::SHIFT)
    }

    pub fn is_enter(key: &KeyEvent) -> bool {
        key.code == KeyCode::Enter
    }

    pub fn is_escape(key: &KeyEvent) -> bool {
        key.code == KeyCode::Esc
    }

    pub fn is_help(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('?')
    }

    pub fn is_menu(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('m') && key.modifiers == KeyModifiers::NONE
    }

    pub fn is_back_to_top(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('t') && key.modifiers == KeyModifiers::NONE
    }

    pub fn is_yank(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('y') && key.modifiers == KeyModifiers::NONE
    }

    /// Digits jump straight to a section, 1-based.
    pub fn section_digit(key: &KeyEvent) -> Option<usize> {
        match key.code {
            KeyCode::Char(c @ '1'..='9') if key.modifiers == KeyModifiers::NONE => {
                Some(c as usize - '1' as usize)
            }
            _ => None,
        }
    }
}
