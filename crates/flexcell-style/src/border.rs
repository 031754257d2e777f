#![forbid(unsafe_code)]

//! Border glyph sets and edge selection.

/// Glyphs used to draw a box border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Border {
    /// Horizontal glyph for the top edge.
    pub top: char,
    /// Horizontal glyph for the bottom edge.
    pub bottom: char,
    /// Vertical glyph for the left edge.
    pub left: char,
    /// Vertical glyph for the right edge.
    pub right: char,
    /// Top-left corner glyph.
    pub top_left: char,
    /// Top-right corner glyph.
    pub top_right: char,
    /// Bottom-left corner glyph.
    pub bottom_left: char,
    /// Bottom-right corner glyph.
    pub bottom_right: char,
}

impl Border {
    /// Single-line box drawing border.
    pub const NORMAL: Self = Self {
        top: '─',
        bottom: '─',
        left: '│',
        right: '│',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
    };

    /// Rounded corners (╭, ╮, ╯, ╰).
    pub const ROUNDED: Self = Self {
        top: '─',
        bottom: '─',
        left: '│',
        right: '│',
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
    };

    /// Heavy single-line border.
    pub const THICK: Self = Self {
        top: '━',
        bottom: '━',
        left: '┃',
        right: '┃',
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
    };

    /// Double-line border (║, ═).
    pub const DOUBLE: Self = Self {
        top: '═',
        bottom: '═',
        left: '║',
        right: '║',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
    };

    /// ASCII fallback border (+, -, |).
    pub const ASCII: Self = Self {
        top: '-',
        bottom: '-',
        left: '|',
        right: '|',
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
    };

    /// Invisible border that still consumes space.
    pub const HIDDEN: Self = Self {
        top: ' ',
        bottom: ' ',
        left: ' ',
        right: ' ',
        top_left: ' ',
        top_right: ' ',
        bottom_left: ' ',
        bottom_right: ' ',
    };
}

impl Default for Border {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Which border edges are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderEdges {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl BorderEdges {
    /// All four edges.
    pub const ALL: Self = Self {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    /// No edges.
    pub const NONE: Self = Self {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    /// True if any edge is enabled.
    #[inline]
    #[must_use]
    pub const fn any(self) -> bool {
        self.top || self.right || self.bottom || self.left
    }

    /// Columns consumed by the vertical edges.
    #[inline]
    #[must_use]
    pub const fn horizontal_size(self) -> u16 {
        self.left as u16 + self.right as u16
    }

    /// Rows consumed by the horizontal edges.
    #[inline]
    #[must_use]
    pub const fn vertical_size(self) -> u16 {
        self.top as u16 + self.bottom as u16
    }
}

impl Default for BorderEdges {
    fn default() -> Self {
        Self::ALL
    }
}
