//! Colors for text the REPL itself prints
//!
//! Simulator output is never styled. Styling is switched off entirely when
//! stdout is not a terminal, so piped sessions and tests see plain text.

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

pub struct Theme {
    pub error: Color,   // Red
    pub muted: Color,   // Grey
    pub success: Color, // Green
}

pub const DEFAULT_THEME: Theme = Theme {
    error: Color::Rgb {
        r: 243,
        g: 139,
        b: 168,
    },
    muted: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    },
    success: Color::Rgb {
        r: 166,
        g: 227,
        b: 161,
    },
};

/// A [`Theme`] plus whether to apply it at all
#[derive(Clone, Copy)]
pub struct Palette {
    theme: &'static Theme,
    enabled: bool,
}

impl Palette {
    /// No escape sequences, ever
    pub const PLAIN: Palette = Palette {
        theme: &DEFAULT_THEME,
        enabled: false,
    };

    /// Colored only if stdout is a terminal
    pub fn for_stdout() -> Self {
        Palette {
            theme: &DEFAULT_THEME,
            enabled: std::io::stdout().is_tty(),
        }
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, self.theme.error)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, self.theme.muted)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, self.theme.success)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Palette")
            .field("enabled", &self.enabled)
            .finish()
    }
}
