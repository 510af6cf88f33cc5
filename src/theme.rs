//! Terminal theme detection
//!
//! Picks a light or dark palette to match the terminal the page is
//! rendered in. Detection methods in order of reliability:
//! 1. TERMFOLIO_THEME environment variable (explicit override)
//! 2. OSC 11 terminal query (asks the terminal for its background color)
//! 3. COLORFGBG environment variable (set by some terminals)
//! 4. Terminal-specific hints (iTerm2, Kitty, VS Code, Terminal.app)

use std::io::{IsTerminal, Read, Write};
use std::time::Duration;

/// Theme mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Detect theme mode from the terminal environment
    pub fn detect() -> Self {
        Self::explicit_override()
            .or_else(Self::query_terminal_background)
            .or_else(Self::from_colorfgbg)
            .or_else(Self::from_terminal_hints)
            // Dark is the safe default for terminals
            .unwrap_or(Self::Dark)
    }

    /// Check TERMFOLIO_THEME environment variable
    fn explicit_override() -> Option<Self> {
        match std::env::var("TERMFOLIO_THEME").ok()?.to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Check COLORFGBG environment variable (format: "fg;bg")
    fn from_colorfgbg() -> Option<Self> {
        let colorfgbg = std::env::var("COLORFGBG").ok()?;
        let bg: u8 = colorfgbg.split(';').last()?.parse().ok()?;
        // ANSI backgrounds 0-6 and 8 are dark, 7 and 9+ are light
        if bg > 8 || bg == 7 {
            Some(Self::Light)
        } else {
            None
        }
    }

    /// Check terminal-specific environment hints
    fn from_terminal_hints() -> Option<Self> {
        // iTerm2 names the active profile
        if let Ok(profile) = std::env::var("ITERM_PROFILE") {
            let lower = profile.to_lowercase();
            if lower.contains("light") {
                return Some(Self::Light);
            }
            if lower.contains("dark") {
                return Some(Self::Dark);
            }
        }

        // Kitty and VS Code expose a theme name
        for var in ["KITTY_THEME", "VSCODE_TERMINAL_THEME"] {
            if let Ok(theme) = std::env::var(var) {
                if theme.to_lowercase().contains("light") {
                    return Some(Self::Light);
                }
            }
        }

        #[cfg(target_os = "macos")]
        {
            if let Some(theme) = Self::from_macos_terminal() {
                return Some(theme);
            }
        }

        None
    }

    /// Detect theme from the Terminal.app profile name
    #[cfg(target_os = "macos")]
    fn from_macos_terminal() -> Option<Self> {
        if std::env::var("TERM_PROGRAM").ok()? != "Apple_Terminal" {
            return None;
        }

        let output = std::process::Command::new("defaults")
            .args(["read", "com.apple.Terminal", "Default Window Settings"])
            .output()
            .ok()?;

        let profile = String::from_utf8_lossy(&output.stdout)
            .trim()
            .to_lowercase();

        // Stock Terminal.app profiles with light backgrounds
        const LIGHT_PROFILES: &[&str] = &["basic", "novel", "ocean", "grass", "silver aerogel"];
        if LIGHT_PROFILES.contains(&profile.as_str()) || profile.contains("light") {
            Some(Self::Light)
        } else {
            None
        }
    }

    /// Query terminal background color using OSC 11 escape sequence
    #[cfg(unix)]
    fn query_terminal_background() -> Option<Self> {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            return None;
        }

        // Raw mode is required to read the response byte stream
        let original = nix::sys::termios::tcgetattr(&stdin).ok()?;
        let mut raw = original.clone();
        nix::sys::termios::cfmakeraw(&mut raw);
        raw.local_flags.insert(nix::sys::termios::LocalFlags::ISIG);
        nix::sys::termios::tcsetattr(&stdin, nix::sys::termios::SetArg::TCSANOW, &raw).ok()?;

        // BEL terminator has wider terminal support than ST
        let _ = std::io::stdout().write_all(b"\x1b]11;?\x07");
        let _ = std::io::stdout().flush();

        let response = Self::read_osc_response(&stdin, Duration::from_millis(300));

        let _ = nix::sys::termios::tcsetattr(&stdin, nix::sys::termios::SetArg::TCSANOW, &original);

        Self::parse_osc11_response(&response)
    }

    /// Windows: OSC 11 query not supported, skip this detection method
    #[cfg(not(unix))]
    fn query_terminal_background() -> Option<Self> {
        None
    }

    /// Read OSC response from terminal with timeout (Unix only)
    #[cfg(unix)]
    fn read_osc_response(stdin: &std::io::Stdin, timeout: Duration) -> String {
        use std::os::fd::{AsRawFd, BorrowedFd};

        let mut response = Vec::new();
        let mut buf = [0u8; 1];
        let deadline = std::time::Instant::now() + timeout;

        let stdin_fd = stdin.as_raw_fd();
        let borrowed_fd = unsafe { BorrowedFd::borrow_raw(stdin_fd) };
        let mut poll_fds = [nix::poll::PollFd::new(borrowed_fd, nix::poll::PollFlags::POLLIN)];

        while std::time::Instant::now() < deadline {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            let timeout_ms = remaining.as_millis().min(u16::MAX as u128) as u16;

            if nix::poll::poll(&mut poll_fds, nix::poll::PollTimeout::from(timeout_ms)).unwrap_or(0) > 0 {
                if std::io::stdin().read(&mut buf).unwrap_or(0) == 1 {
                    response.push(buf[0]);
                    // Terminators: BEL (\x07) or ST (\x1b\)
                    if buf[0] == 0x07 || response.ends_with(b"\x1b\\") {
                        break;
                    }
                }
            } else {
                break;
            }
        }

        String::from_utf8_lossy(&response).into_owned()
    }

    /// Parse OSC 11 response to determine theme
    /// Response format: \x1b]11;rgb:RRRR/GGGG/BBBB\x07
    fn parse_osc11_response(response: &str) -> Option<Self> {
        let rgb_start = response.find("rgb:")?;
        let rgb_part = &response[rgb_start + 4..];
        let rgb_end = rgb_part.find(|c| c == '\x07' || c == '\x1b').unwrap_or(rgb_part.len());

        let parts: Vec<&str> = rgb_part[..rgb_end].split('/').collect();
        if parts.len() != 3 {
            return None;
        }

        // Components can be 2 or 4 hex digits
        let r = u16::from_str_radix(parts[0], 16).ok()?;
        let g = u16::from_str_radix(parts[1], 16).ok()?;
        let b = u16::from_str_radix(parts[2], 16).ok()?;

        let (r, g, b) = if parts[0].len() > 2 {
            ((r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8)
        } else {
            (r as u8, g as u8, b as u8)
        };

        // Relative luminance (ITU-R BT.709), threshold at ~50%
        let luminance = 0.2126 * (r as f64) + 0.7152 * (g as f64) + 0.0722 * (b as f64);

        if luminance > 128.0 {
            Some(Self::Light)
        } else {
            Some(Self::Dark)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_osc11_response_4digit() {
        let response = "\x1b]11;rgb:ffff/ffff/ffff\x07";
        assert_eq!(ThemeMode::parse_osc11_response(response), Some(ThemeMode::Light));

        let response = "\x1b]11;rgb:0000/0000/0000\x07";
        assert_eq!(ThemeMode::parse_osc11_response(response), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_parse_osc11_response_2digit() {
        let response = "\x1b]11;rgb:ff/ff/ff\x07";
        assert_eq!(ThemeMode::parse_osc11_response(response), Some(ThemeMode::Light));

        let response = "\x1b]11;rgb:00/00/00\x07";
        assert_eq!(ThemeMode::parse_osc11_response(response), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_parse_osc11_st_terminator() {
        let response = "\x1b]11;rgb:f0f0/f0f0/f0f0\x1b\\";
        assert_eq!(ThemeMode::parse_osc11_response(response), Some(ThemeMode::Light));
    }

    #[test]
    fn test_parse_osc11_invalid() {
        assert_eq!(ThemeMode::parse_osc11_response("invalid"), None);
        assert_eq!(ThemeMode::parse_osc11_response(""), None);
    }
}
