pub mod display;

use crate::core::GapStatus;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
    /// Use unicode status glyphs instead of ASCII tags
    pub unicode: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, unicode: bool) -> Self {
        Self { color, unicode }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (ASCII-only, no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            unicode: false,
        }
    }
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    /// Render `text` in the color associated with a gap status.
    fn status(&self, status: GapStatus, text: &str) -> String;
    fn status_icon(&self, status: GapStatus) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn colorize(&self, text: &str, paint: impl FnOnce(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        self.colorize(text, |t| t.blue().bold())
    }

    fn bold(&self, text: &str) -> String {
        self.colorize(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.colorize(text, |t| t.dimmed())
    }

    fn warning(&self, text: &str) -> String {
        self.colorize(text, |t| t.yellow())
    }

    fn status(&self, status: GapStatus, text: &str) -> String {
        let (r, g, b) = hex_to_rgb(display::gap_status_color(status));
        self.colorize(text, |t| t.truecolor(r, g, b).bold())
    }

    fn status_icon(&self, status: GapStatus) -> String {
        let (glyph, fallback) = status_glyph(status);
        if self.config.unicode {
            glyph.to_string()
        } else {
            fallback.to_string()
        }
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn status(&self, _status: GapStatus, text: &str) -> String {
        text.to_string()
    }

    fn status_icon(&self, status: GapStatus) -> String {
        status_glyph(status).1.to_string()
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

fn status_glyph(status: GapStatus) -> (&'static str, &'static str) {
    match status {
        GapStatus::Adequate => ("✓", "[OK]"),
        GapStatus::Marginal => ("⚠", "[WARN]"),
        GapStatus::Inadequate => ("✗", "[FAIL]"),
    }
}

/// `"#22c55e"` -> `(34, 197, 94)`. Malformed input renders white.
fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let digits = hex.trim_start_matches('#');
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(255)
    };
    (channel(0), channel(2), channel(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_parse() {
        assert_eq!(ColorMode::parse("ALWAYS"), Some(ColorMode::Always));
        assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
        assert_eq!(ColorMode::parse("sometimes"), None);
    }

    #[test]
    fn test_hex_to_rgb_matches_status_palette() {
        assert_eq!(hex_to_rgb("#22c55e"), (0x22, 0xc5, 0x5e));
        assert_eq!(hex_to_rgb("#ef4444"), (239, 68, 68));
        assert_eq!(hex_to_rgb("#zz"), (255, 255, 255));
    }

    #[test]
    fn test_plain_formatter_is_ascii() {
        let formatter = PlainFormatter;
        assert_eq!(formatter.status_icon(GapStatus::Inadequate), "[FAIL]");
        assert_eq!(formatter.status(GapStatus::Adequate, "Adequate"), "Adequate");
    }

    #[test]
    fn test_colored_formatter_without_color_passes_text_through() {
        let formatter = ColoredFormatter::new(FormattingConfig::new(ColorMode::Never, true));
        assert_eq!(formatter.header("Summary"), "Summary");
        assert_eq!(formatter.status_icon(GapStatus::Adequate), "✓");
    }
}
