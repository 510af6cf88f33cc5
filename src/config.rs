use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

use crate::theme::ThemeMode;

/// Application configuration
pub struct Config {
    pub colors: Colors,
    pub nav: NavTuning,
    pub timing: Timing,
    pub theme: ThemeMode,
}

impl Default for Config {
    fn default() -> Self {
        let theme = ThemeMode::detect();
        Self {
            colors: Colors::for_theme(theme),
            nav: NavTuning::default(),
            timing: Timing::default(),
            theme,
        }
    }
}

/// Navigation tuning, all distances in document units (16 per row).
///
/// The defaults are deliberate: the threshold sits below the near-top
/// band so the "always show near top" rule overlaps the hide rule
/// instead of leaving a gap, and the reading offset compensates for the
/// bar plus a comfortable reading position rather than the bare top of
/// the viewport.
#[derive(Debug, Clone, Copy)]
pub struct NavTuning {
    /// Above this offset the bar leaves its resting state.
    pub scroll_threshold: f32,
    /// Below this offset the first section is active unconditionally.
    pub near_top: f32,
    /// Within this much of the document end the last section is active.
    pub bottom_slack: f32,
    /// Added to the offset to find the line the user is reading.
    pub reading_offset: f32,
    /// Subtracted from a section top when scrolling to it, so the
    /// heading lands below the bar instead of underneath it.
    pub scroll_to_offset: f32,
}

impl Default for NavTuning {
    fn default() -> Self {
        Self {
            scroll_threshold: 80.0,
            near_top: 100.0,
            bottom_slack: 100.0,
            reading_offset: 200.0,
            scroll_to_offset: 80.0,
        }
    }
}

/// Color palette - adapts to theme
pub struct Colors {
    pub accent: Color,
    pub accent_alt: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub bar_bg: Color,
    pub pill_active_fg: Color,
    pub progress: Color,
    pub status_bar: Color,
    pub status_bar_text: Color,
    pub link: Color,
    pub chip: Color,
}

impl Colors {
    /// Create colors for the given theme
    pub fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme (Catppuccin Mocha inspired)
    pub fn dark() -> Self {
        Self {
            accent: Color::Rgb(137, 180, 250),     // Blue
            accent_alt: Color::Rgb(203, 166, 247), // Mauve
            text: Color::Rgb(205, 214, 244),       // Text
            muted: Color::Rgb(108, 112, 134),      // Overlay0
            border: Color::Rgb(69, 71, 90),        // Surface1
            bar_bg: Color::Rgb(24, 24, 37),        // Mantle
            pill_active_fg: Color::Rgb(17, 17, 27), // Crust
            progress: Color::Rgb(203, 166, 247),   // Mauve
            status_bar: Color::Rgb(49, 50, 68),    // Surface0
            status_bar_text: Color::Rgb(205, 214, 244), // Text
            link: Color::Rgb(137, 220, 235),       // Sky
            chip: Color::Rgb(250, 179, 135),       // Peach
        }
    }

    /// Light theme (high contrast for light backgrounds)
    pub fn light() -> Self {
        Self {
            accent: Color::Rgb(0, 60, 180),        // Dark blue
            accent_alt: Color::Rgb(90, 20, 180),   // Dark purple
            text: Color::Rgb(10, 10, 15),          // Almost black
            muted: Color::Rgb(60, 60, 70),         // Dark gray (not light!)
            border: Color::Rgb(150, 155, 170),     // Visible border
            bar_bg: Color::Rgb(228, 232, 240),     // Light surface
            pill_active_fg: Color::Rgb(245, 248, 255), // Near white
            progress: Color::Rgb(90, 20, 180),     // Dark purple
            status_bar: Color::Rgb(220, 225, 235), // Light surface
            status_bar_text: Color::Rgb(10, 10, 15), // Almost black
            link: Color::Rgb(0, 90, 160),          // Dark cyan
            chip: Color::Rgb(160, 80, 0),          // Dark orange
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::for_theme(ThemeMode::detect())
    }
}

impl Colors {
    pub fn style_text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn style_muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn style_heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn style_accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn style_brand(&self) -> Style {
        Style::default()
            .fg(self.accent_alt)
            .add_modifier(Modifier::BOLD)
    }

    pub fn style_border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn style_bar(&self) -> Style {
        Style::default().bg(self.bar_bg)
    }

    pub fn style_pill_active(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(self.pill_active_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn style_progress(&self) -> Style {
        Style::default().fg(self.progress)
    }

    pub fn style_status_bar(&self) -> Style {
        Style::default()
            .bg(self.status_bar)
            .fg(self.status_bar_text)
    }

    pub fn style_link(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn style_chip(&self) -> Style {
        Style::default().fg(self.chip)
    }
}

pub struct Timing {
    pub tick_rate: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(50), // 20 fps is plenty for a text page
        }
    }
}
