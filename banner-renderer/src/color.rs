//! ANSI colour variables (`AnsiColor.<Name>`, `AnsiBackground.<Name>`).
//!
//! With colour disabled every name still resolves, to an empty string, so a
//! coloured banner renders as plain text instead of failing.

use std::collections::BTreeMap;

use colored::Color;

const RESET: &str = "\x1b[0m";

const COLORS: &[(&str, Color)] = &[
    ("Black", Color::Black),
    ("Red", Color::Red),
    ("Green", Color::Green),
    ("Yellow", Color::Yellow),
    ("Blue", Color::Blue),
    ("Magenta", Color::Magenta),
    ("Cyan", Color::Cyan),
    ("White", Color::White),
    ("BrightBlack", Color::BrightBlack),
    ("BrightRed", Color::BrightRed),
    ("BrightGreen", Color::BrightGreen),
    ("BrightYellow", Color::BrightYellow),
    ("BrightBlue", Color::BrightBlue),
    ("BrightMagenta", Color::BrightMagenta),
    ("BrightCyan", Color::BrightCyan),
    ("BrightWhite", Color::BrightWhite),
];

/// Foreground and background escape tables keyed by colour name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub foreground: BTreeMap<&'static str, String>,
    pub background: BTreeMap<&'static str, String>,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        let code = |sgr: String| if enabled { format!("\x1b[{sgr}m") } else { String::new() };
        let reset = if enabled { RESET.to_string() } else { String::new() };

        let mut foreground = BTreeMap::new();
        let mut background = BTreeMap::new();
        foreground.insert("Default", reset.clone());
        background.insert("Default", reset);
        for (name, color) in COLORS {
            foreground.insert(*name, code(color.to_fg_str().to_string()));
            background.insert(*name, code(color.to_bg_str().to_string()));
        }
        Palette { foreground, background }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_palette_emits_sgr_codes() {
        let p = Palette::new(true);
        assert_eq!(p.foreground["Red"], "\x1b[31m");
        assert_eq!(p.background["Red"], "\x1b[41m");
        assert_eq!(p.foreground["BrightBlue"], "\x1b[94m");
        assert_eq!(p.foreground["Default"], "\x1b[0m");
    }

    #[test]
    fn disabled_palette_is_all_empty() {
        let p = Palette::new(false);
        assert_eq!(p.foreground.len(), COLORS.len() + 1);
        assert!(p.foreground.values().chain(p.background.values()).all(String::is_empty));
    }
}
