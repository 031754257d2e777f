#![forbid(unsafe_code)]

//! Terminal colors and their SGR escape sequences.

use std::fmt::Write as _;

/// A terminal color.
///
/// `Ansi` values 0–15 map to the classic 16-color SGR codes; 16–255 use the
/// 256-color palette form. `Rgb` emits 24-bit truecolor sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Palette color (0–255).
    Ansi(u8),
    /// 24-bit truecolor.
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Self = Self::Ansi(0);
    pub const RED: Self = Self::Ansi(1);
    pub const GREEN: Self = Self::Ansi(2);
    pub const YELLOW: Self = Self::Ansi(3);
    pub const BLUE: Self = Self::Ansi(4);
    pub const MAGENTA: Self = Self::Ansi(5);
    pub const CYAN: Self = Self::Ansi(6);
    pub const WHITE: Self = Self::Ansi(7);

    /// Construct a truecolor value.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// SGR sequence selecting this color as the foreground.
    #[must_use]
    pub fn fg_sequence(self) -> String {
        let mut out = String::with_capacity(16);
        match self {
            Self::Ansi(n @ 0..=7) => {
                let _ = write!(out, "\x1b[{}m", 30 + u16::from(n));
            }
            Self::Ansi(n @ 8..=15) => {
                let _ = write!(out, "\x1b[{}m", 90 + u16::from(n - 8));
            }
            Self::Ansi(n) => {
                let _ = write!(out, "\x1b[38;5;{n}m");
            }
            Self::Rgb(r, g, b) => {
                let _ = write!(out, "\x1b[38;2;{r};{g};{b}m");
            }
        }
        out
    }

    /// SGR sequence selecting this color as the background.
    #[must_use]
    pub fn bg_sequence(self) -> String {
        let mut out = String::with_capacity(16);
        match self {
            Self::Ansi(n @ 0..=7) => {
                let _ = write!(out, "\x1b[{}m", 40 + u16::from(n));
            }
            Self::Ansi(n @ 8..=15) => {
                let _ = write!(out, "\x1b[{}m", 100 + u16::from(n - 8));
            }
            Self::Ansi(n) => {
                let _ = write!(out, "\x1b[48;5;{n}m");
            }
            Self::Rgb(r, g, b) => {
                let _ = write!(out, "\x1b[48;2;{r};{g};{b}m");
            }
        }
        out
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_ansi_foreground() {
        assert_eq!(Color::RED.fg_sequence(), "\x1b[31m");
        assert_eq!(Color::BLACK.fg_sequence(), "\x1b[30m");
    }

    #[test]
    fn bright_ansi_uses_90_range() {
        assert_eq!(Color::Ansi(9).fg_sequence(), "\x1b[91m");
        assert_eq!(Color::Ansi(15).bg_sequence(), "\x1b[107m");
    }

    #[test]
    fn palette_colors_use_256_form() {
        assert_eq!(Color::Ansi(208).fg_sequence(), "\x1b[38;5;208m");
        assert_eq!(Color::Ansi(17).bg_sequence(), "\x1b[48;5;17m");
    }

    #[test]
    fn rgb_emits_truecolor() {
        assert_eq!(Color::rgb(255, 0, 128).fg_sequence(), "\x1b[38;2;255;0;128m");
        assert_eq!(Color::rgb(1, 2, 3).bg_sequence(), "\x1b[48;2;1;2;3m");
    }

    #[test]
    fn tuple_conversion() {
        let c: Color = (10, 20, 30).into();
        assert_eq!(c, Color::Rgb(10, 20, 30));
    }
}
