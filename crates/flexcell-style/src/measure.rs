#![forbid(unsafe_code)]

//! Display-width measurement and shaping helpers.
//!
//! All width math here is in terminal cells: ANSI escape sequences count as
//! zero columns, East Asian wide glyphs count as two. Wrapping and
//! truncation operate on grapheme clusters so emoji and ZWJ sequences are
//! never split.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A run of either printable text or a single ANSI escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Text(&'a str),
    Escape(&'a str),
}

/// Iterator splitting a string into printable runs and escape sequences.
pub(crate) struct Segments<'a> {
    rest: &'a str,
}

pub(crate) fn segments(s: &str) -> Segments<'_> {
    Segments { rest: s }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        if let Some(stripped) = self.rest.strip_prefix('\x1b') {
            let len = 1 + escape_len(stripped);
            let (esc, rest) = self.rest.split_at(len);
            self.rest = rest;
            return Some(Segment::Escape(esc));
        }
        let end = self.rest.find('\x1b').unwrap_or(self.rest.len());
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Segment::Text(text))
    }
}

/// Length in bytes of the escape body following an ESC byte.
fn escape_len(body: &str) -> usize {
    let mut chars = body.char_indices();
    match chars.next() {
        // CSI: parameters and intermediates end at a final byte 0x40..=0x7e.
        Some((_, '[')) => {
            for (i, c) in chars {
                if ('\x40'..='\x7e').contains(&c) {
                    return i + c.len_utf8();
                }
            }
            body.len()
        }
        // OSC: terminated by BEL or ST (ESC \).
        Some((_, ']')) => {
            let mut prev_esc = false;
            for (i, c) in chars {
                if c == '\x07' {
                    return i + 1;
                }
                if prev_esc && c == '\\' {
                    return i + 1;
                }
                prev_esc = c == '\x1b';
            }
            body.len()
        }
        Some((i, c)) => i + c.len_utf8(),
        None => 0,
    }
}

/// Display width of a single line, ignoring escape sequences.
#[must_use]
pub fn visible_width(line: &str) -> usize {
    segments(line)
        .map(|seg| match seg {
            Segment::Text(t) => t.width(),
            Segment::Escape(_) => 0,
        })
        .sum()
}

/// Widest visible line in a multi-line block.
#[must_use]
pub fn max_line_width(block: &str) -> usize {
    block.lines().map(visible_width).max().unwrap_or(0)
}

/// Number of lines in a rendered block. An empty string is one (empty) line.
#[must_use]
pub fn line_count(block: &str) -> usize {
    block.split('\n').count()
}

/// Greedy word wrap to `width` columns, breaking over-long words at grapheme
/// boundaries. Existing newlines are preserved. `width == 0` is a no-op.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + text.len() / width.max(1));
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        wrap_line(line, width, &mut out);
    }
    out
}

fn wrap_line(line: &str, width: usize, out: &mut String) {
    let mut col = 0usize;
    let mut first = true;
    for word in line.split_whitespace() {
        let w = visible_width(word);
        if first {
            first = false;
        } else if col + 1 + w <= width {
            out.push(' ');
            col += 1;
        } else {
            out.push('\n');
            col = 0;
        }
        if w <= width {
            out.push_str(word);
            col += w;
        } else {
            col = break_word(word, width, col, out);
        }
    }
}

/// Emit a word wider than `width`, splitting at grapheme boundaries.
/// Returns the column position after the final fragment.
fn break_word(word: &str, width: usize, mut col: usize, out: &mut String) -> usize {
    for g in word.graphemes(true) {
        let gw = g.width();
        if col + gw > width && col > 0 {
            out.push('\n');
            col = 0;
        }
        out.push_str(g);
        col += gw;
    }
    col
}

/// Truncate every line of `block` to at most `max` display columns.
///
/// Escape sequences are copied through verbatim so styling (and its reset)
/// survives truncation. A wide grapheme that would straddle the limit is
/// replaced by space padding up to the limit, so truncating a line that was
/// at least `max` columns wide always yields exactly `max` columns.
#[must_use]
pub fn truncate_width(block: &str, max: usize) -> String {
    let mut out = String::with_capacity(block.len());
    for (i, line) in block.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut col = 0usize;
        let mut clipped = false;
        for seg in segments(line) {
            match seg {
                Segment::Escape(esc) => out.push_str(esc),
                Segment::Text(text) => {
                    if clipped {
                        continue;
                    }
                    for g in text.graphemes(true) {
                        let gw = g.width();
                        if col + gw > max {
                            clipped = true;
                            break;
                        }
                        out.push_str(g);
                        col += gw;
                    }
                }
            }
        }
        if clipped {
            for _ in col..max {
                out.push(' ');
            }
        }
    }
    out
}

/// Keep at most the first `max` lines of `block`.
#[must_use]
pub fn truncate_height(block: &str, max: usize) -> String {
    let mut out = String::with_capacity(block.len());
    for (i, line) in block.split('\n').take(max).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_sgr_sequences() {
        assert_eq!(visible_width("hi"), 2);
        assert_eq!(visible_width("\x1b[1mhi\x1b[0m"), 2);
        assert_eq!(visible_width("\x1b[38;2;1;2;3mabc\x1b[0m"), 3);
    }

    #[test]
    fn width_counts_wide_glyphs() {
        assert_eq!(visible_width("日本"), 4);
        assert_eq!(visible_width("a日b"), 4);
    }

    #[test]
    fn width_ignores_osc_sequences() {
        assert_eq!(visible_width("\x1b]0;title\x07hi"), 2);
    }

    #[test]
    fn max_line_width_over_block() {
        assert_eq!(max_line_width("a\nabc\nab"), 3);
        assert_eq!(max_line_width(""), 0);
    }

    #[test]
    fn wrap_at_word_boundaries() {
        assert_eq!(wrap_text("hello world foo bar", 10), "hello\nworld foo\nbar");
    }

    #[test]
    fn wrap_breaks_long_words() {
        let wrapped = wrap_text("abcdefghij", 4);
        assert_eq!(wrapped, "abcd\nefgh\nij");
    }

    #[test]
    fn wrap_preserves_existing_newlines() {
        assert_eq!(wrap_text("ab\ncd", 10), "ab\ncd");
    }

    #[test]
    fn wrap_zero_width_is_noop() {
        assert_eq!(wrap_text("hello world", 0), "hello world");
    }

    #[test]
    fn wrap_never_splits_graphemes() {
        // Family emoji is one grapheme cluster.
        let fam = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}";
        let wrapped = wrap_text(&format!("a{fam}"), 2);
        assert!(wrapped.contains(fam));
    }

    #[test]
    fn truncate_width_keeps_escapes() {
        let s = "\x1b[31mabcdef\x1b[0m";
        let t = truncate_width(s, 3);
        assert_eq!(t, "\x1b[31mabc\x1b[0m");
        assert_eq!(visible_width(&t), 3);
    }

    #[test]
    fn truncate_width_pads_straddling_wide_glyph() {
        // "日" is two columns; a glyph that would straddle the limit is
        // swapped for padding so the line stays exactly `max` wide.
        assert_eq!(truncate_width("ab日日", 3), "ab ");
        assert_eq!(truncate_width("日日", 3), "日 ");
        assert_eq!(truncate_width("日", 1), " ");
    }

    #[test]
    fn truncate_width_pads_straddle_after_escapes() {
        let t = truncate_width("\x1b[31m日日\x1b[0m", 3);
        assert_eq!(t, "\x1b[31m日\x1b[0m ");
        assert_eq!(visible_width(&t), 3);
    }

    #[test]
    fn truncate_height_keeps_first_lines() {
        assert_eq!(truncate_height("a\nb\nc", 2), "a\nb");
        assert_eq!(truncate_height("a", 3), "a");
    }

    #[test]
    fn line_count_counts_trailing_empty() {
        assert_eq!(line_count("a\nb"), 2);
        assert_eq!(line_count(""), 1);
    }
}
