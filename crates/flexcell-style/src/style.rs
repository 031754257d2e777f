#![forbid(unsafe_code)]

//! The box-model [`Style`] type.
//!
//! A `Style` is a value: cheap to copy, combined with [`Style::inherit`],
//! and applied with [`Style::render`]. Every property records whether it was
//! explicitly set, which is what lets inheritance fill gaps without ever
//! overriding a local decision.

use bitflags::bitflags;
use tracing::{instrument, trace};

use crate::border::{Border, BorderEdges};
use crate::color::Color;
use crate::measure::{max_line_width, truncate_height, truncate_width, visible_width, wrap_text};

bitflags! {
    /// Which style properties are explicitly set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Props: u32 {
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const STRIKETHROUGH = 1 << 6;

        const FOREGROUND = 1 << 7;
        const BACKGROUND = 1 << 8;

        const WIDTH = 1 << 9;
        const HEIGHT = 1 << 10;
        const MAX_WIDTH = 1 << 11;
        const MAX_HEIGHT = 1 << 12;

        const ALIGN_HORIZONTAL = 1 << 13;
        const ALIGN_VERTICAL = 1 << 14;

        const PADDING_TOP = 1 << 15;
        const PADDING_RIGHT = 1 << 16;
        const PADDING_BOTTOM = 1 << 17;
        const PADDING_LEFT = 1 << 18;

        const MARGIN_TOP = 1 << 19;
        const MARGIN_RIGHT = 1 << 20;
        const MARGIN_BOTTOM = 1 << 21;
        const MARGIN_LEFT = 1 << 22;

        const BORDER_STYLE = 1 << 23;
        const BORDER_TOP = 1 << 24;
        const BORDER_RIGHT = 1 << 25;
        const BORDER_BOTTOM = 1 << 26;
        const BORDER_LEFT = 1 << 27;
        const BORDER_FOREGROUND = 1 << 28;
        const BORDER_BACKGROUND = 1 << 29;

        const PADDING = Self::PADDING_TOP.bits()
            | Self::PADDING_RIGHT.bits()
            | Self::PADDING_BOTTOM.bits()
            | Self::PADDING_LEFT.bits();
        const MARGINS = Self::MARGIN_TOP.bits()
            | Self::MARGIN_RIGHT.bits()
            | Self::MARGIN_BOTTOM.bits()
            | Self::MARGIN_LEFT.bits();
    }
}

bitflags! {
    /// Boolean attribute values (the payload behind the attribute props).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attrs: u8 {
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
    }
}

/// Attribute props paired with their value bits, for inheritance.
const ATTR_PROPS: [(Props, Attrs); 7] = [
    (Props::BOLD, Attrs::BOLD),
    (Props::FAINT, Attrs::FAINT),
    (Props::ITALIC, Attrs::ITALIC),
    (Props::UNDERLINE, Attrs::UNDERLINE),
    (Props::BLINK, Attrs::BLINK),
    (Props::REVERSE, Attrs::REVERSE),
    (Props::STRIKETHROUGH, Attrs::STRIKETHROUGH),
];

/// Per-side sizes for padding and margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    #[inline]
    #[must_use]
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Combined left + right size.
    #[inline]
    #[must_use]
    pub const fn horizontal(self) -> u16 {
        self.left + self.right
    }

    /// Combined top + bottom size.
    #[inline]
    #[must_use]
    pub const fn vertical(self) -> u16 {
        self.top + self.bottom
    }
}

impl From<u16> for Sides {
    /// Uniform size on all sides.
    fn from(n: u16) -> Self {
        Self::new(n, n, n, n)
    }
}

impl From<(u16, u16)> for Sides {
    /// CSS shorthand: (vertical, horizontal).
    fn from((v, h): (u16, u16)) -> Self {
        Self::new(v, h, v, h)
    }
}

impl From<(u16, u16, u16, u16)> for Sides {
    /// CSS shorthand: (top, right, bottom, left).
    fn from((t, r, b, l): (u16, u16, u16, u16)) -> Self {
        Self::new(t, r, b, l)
    }
}

/// Alignment of content along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Left / top.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Right / bottom.
    End,
}

impl Align {
    /// Fraction of the slack placed before the content.
    #[inline]
    #[must_use]
    pub const fn factor(self) -> f32 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }
}

/// A box-model style for terminal text.
///
/// # Example
/// ```
/// use flexcell_style::{Border, Color, Style};
///
/// let style = Style::new()
///     .bold()
///     .fg(Color::CYAN)
///     .border(Border::ROUNDED)
///     .padding(1);
/// let block = style.render("hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    props: Props,
    attrs: Attrs,

    fg: Option<Color>,
    bg: Option<Color>,

    width: u16,
    height: u16,
    max_width: u16,
    max_height: u16,

    align_horizontal: Align,
    align_vertical: Align,

    padding: Sides,
    margin: Sides,

    border: Border,
    border_edges: BorderEdges,
    border_fg: Option<Color>,
    border_bg: Option<Color>,
}

impl Style {
    /// An empty style with nothing explicitly set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Attributes ────────────────────────────────────────────────────

    #[must_use]
    pub fn bold(self) -> Self {
        self.set_attr(Props::BOLD, Attrs::BOLD, true)
    }

    #[must_use]
    pub fn faint(self) -> Self {
        self.set_attr(Props::FAINT, Attrs::FAINT, true)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.set_attr(Props::ITALIC, Attrs::ITALIC, true)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.set_attr(Props::UNDERLINE, Attrs::UNDERLINE, true)
    }

    #[must_use]
    pub fn blink(self) -> Self {
        self.set_attr(Props::BLINK, Attrs::BLINK, true)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.set_attr(Props::REVERSE, Attrs::REVERSE, true)
    }

    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.set_attr(Props::STRIKETHROUGH, Attrs::STRIKETHROUGH, true)
    }

    fn set_attr(mut self, prop: Props, attr: Attrs, value: bool) -> Self {
        self.props.insert(prop);
        self.attrs.set(attr, value);
        self
    }

    // ── Colors ────────────────────────────────────────────────────────

    /// Set the foreground (text) color.
    #[must_use]
    pub fn fg(mut self, color: Color) -> Self {
        self.props.insert(Props::FOREGROUND);
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn bg(mut self, color: Color) -> Self {
        self.props.insert(Props::BACKGROUND);
        self.bg = Some(color);
        self
    }

    // ── Dimensions ────────────────────────────────────────────────────

    /// Set the target content width in columns.
    #[must_use]
    pub fn width(mut self, w: u16) -> Self {
        self.props.insert(Props::WIDTH);
        self.width = w;
        self
    }

    /// Set the target content height in lines.
    #[must_use]
    pub fn height(mut self, h: u16) -> Self {
        self.props.insert(Props::HEIGHT);
        self.height = h;
        self
    }

    /// Cap the rendered block at `w` columns.
    #[must_use]
    pub fn max_width(mut self, w: u16) -> Self {
        self.props.insert(Props::MAX_WIDTH);
        self.max_width = w;
        self
    }

    /// Cap the rendered block at `h` lines.
    #[must_use]
    pub fn max_height(mut self, h: u16) -> Self {
        self.props.insert(Props::MAX_HEIGHT);
        self.max_height = h;
        self
    }

    #[must_use]
    pub fn unset_width(mut self) -> Self {
        self.props.remove(Props::WIDTH);
        self.width = 0;
        self
    }

    #[must_use]
    pub fn unset_height(mut self) -> Self {
        self.props.remove(Props::HEIGHT);
        self.height = 0;
        self
    }

    #[must_use]
    pub fn unset_max_width(mut self) -> Self {
        self.props.remove(Props::MAX_WIDTH);
        self.max_width = 0;
        self
    }

    #[must_use]
    pub fn unset_max_height(mut self) -> Self {
        self.props.remove(Props::MAX_HEIGHT);
        self.max_height = 0;
        self
    }

    /// The explicitly set content width, if any.
    #[must_use]
    pub fn get_width(&self) -> Option<u16> {
        self.props.contains(Props::WIDTH).then_some(self.width)
    }

    /// The explicitly set content height, if any.
    #[must_use]
    pub fn get_height(&self) -> Option<u16> {
        self.props.contains(Props::HEIGHT).then_some(self.height)
    }

    /// The explicitly set maximum width, if any.
    #[must_use]
    pub fn get_max_width(&self) -> Option<u16> {
        self.props
            .contains(Props::MAX_WIDTH)
            .then_some(self.max_width)
    }

    /// The explicitly set maximum height, if any.
    #[must_use]
    pub fn get_max_height(&self) -> Option<u16> {
        self.props
            .contains(Props::MAX_HEIGHT)
            .then_some(self.max_height)
    }

    // ── Alignment ─────────────────────────────────────────────────────

    /// Horizontal alignment of content within the target width.
    #[must_use]
    pub fn align_horizontal(mut self, align: Align) -> Self {
        self.props.insert(Props::ALIGN_HORIZONTAL);
        self.align_horizontal = align;
        self
    }

    /// Vertical alignment of content within the target height.
    #[must_use]
    pub fn align_vertical(mut self, align: Align) -> Self {
        self.props.insert(Props::ALIGN_VERTICAL);
        self.align_vertical = align;
        self
    }

    // ── Padding and margins ───────────────────────────────────────────

    /// Set padding (inner spacing) using CSS-style shorthand.
    #[must_use]
    pub fn padding(mut self, sides: impl Into<Sides>) -> Self {
        self.props.insert(Props::PADDING);
        self.padding = sides.into();
        self
    }

    /// Set margins (outer spacing) using CSS-style shorthand.
    #[must_use]
    pub fn margin(mut self, sides: impl Into<Sides>) -> Self {
        self.props.insert(Props::MARGINS);
        self.margin = sides.into();
        self
    }

    #[must_use]
    pub fn unset_padding(mut self) -> Self {
        self.props.remove(Props::PADDING);
        self.padding = Sides::default();
        self
    }

    #[must_use]
    pub fn unset_margins(mut self) -> Self {
        self.props.remove(Props::MARGINS);
        self.margin = Sides::default();
        self
    }

    /// Combined left + right margin.
    #[must_use]
    pub fn horizontal_margins(&self) -> u16 {
        self.margin.horizontal()
    }

    /// Combined top + bottom margin.
    #[must_use]
    pub fn vertical_margins(&self) -> u16 {
        self.margin.vertical()
    }

    // ── Borders ───────────────────────────────────────────────────────

    /// Set the border glyph set. All four edges are drawn unless
    /// individually disabled.
    #[must_use]
    pub fn border(mut self, border: Border) -> Self {
        self.props.insert(Props::BORDER_STYLE);
        self.border = border;
        self
    }

    #[must_use]
    pub fn border_top(mut self, enabled: bool) -> Self {
        self.props.insert(Props::BORDER_TOP);
        self.border_edges.top = enabled;
        self
    }

    #[must_use]
    pub fn border_right(mut self, enabled: bool) -> Self {
        self.props.insert(Props::BORDER_RIGHT);
        self.border_edges.right = enabled;
        self
    }

    #[must_use]
    pub fn border_bottom(mut self, enabled: bool) -> Self {
        self.props.insert(Props::BORDER_BOTTOM);
        self.border_edges.bottom = enabled;
        self
    }

    #[must_use]
    pub fn border_left(mut self, enabled: bool) -> Self {
        self.props.insert(Props::BORDER_LEFT);
        self.border_edges.left = enabled;
        self
    }

    /// Color applied to border glyphs.
    #[must_use]
    pub fn border_fg(mut self, color: Color) -> Self {
        self.props.insert(Props::BORDER_FOREGROUND);
        self.border_fg = Some(color);
        self
    }

    /// Background color applied behind border glyphs.
    #[must_use]
    pub fn border_bg(mut self, color: Color) -> Self {
        self.props.insert(Props::BORDER_BACKGROUND);
        self.border_bg = Some(color);
        self
    }

    #[must_use]
    pub fn unset_border(mut self) -> Self {
        self.props.remove(
            Props::BORDER_STYLE
                | Props::BORDER_TOP
                | Props::BORDER_RIGHT
                | Props::BORDER_BOTTOM
                | Props::BORDER_LEFT,
        );
        self.border = Border::default();
        self.border_edges = BorderEdges::default();
        self
    }

    /// Edges that will actually be drawn: none unless a border style is set.
    fn effective_edges(&self) -> BorderEdges {
        if self.props.contains(Props::BORDER_STYLE) {
            self.border_edges
        } else {
            BorderEdges::NONE
        }
    }

    /// Columns consumed by enabled vertical border edges.
    #[must_use]
    pub fn horizontal_border_size(&self) -> u16 {
        self.effective_edges().horizontal_size()
    }

    /// Rows consumed by enabled horizontal border edges.
    #[must_use]
    pub fn vertical_border_size(&self) -> u16 {
        self.effective_edges().vertical_size()
    }

    // ── Introspection ─────────────────────────────────────────────────

    /// The explicitly set foreground color, if any.
    #[must_use]
    pub fn get_fg(&self) -> Option<Color> {
        self.fg
    }

    /// The explicitly set background color, if any.
    #[must_use]
    pub fn get_bg(&self) -> Option<Color> {
        self.bg
    }

    /// The current attribute values.
    #[must_use]
    pub fn attrs(&self) -> Attrs {
        self.attrs
    }

    /// True if the given property is explicitly set.
    #[must_use]
    pub fn is_set(&self, prop: Props) -> bool {
        self.props.contains(prop)
    }

    /// True if nothing is explicitly set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    // ── Inheritance ───────────────────────────────────────────────────

    /// Overlay an ancestor's explicitly set properties onto this style.
    ///
    /// Properties already set locally always win. Margins and padding are
    /// never inherited: they describe the ancestor's own box, not a
    /// cascading default.
    #[instrument(skip(self, ancestor), level = "trace")]
    #[must_use]
    pub fn inherit(mut self, ancestor: &Style) -> Self {
        trace!("inheriting ancestor style");

        for (prop, attr) in ATTR_PROPS {
            if ancestor.props.contains(prop) && !self.props.contains(prop) {
                self.props.insert(prop);
                self.attrs.set(attr, ancestor.attrs.contains(attr));
            }
        }

        if ancestor.props.contains(Props::FOREGROUND) && !self.props.contains(Props::FOREGROUND) {
            self.props.insert(Props::FOREGROUND);
            self.fg = ancestor.fg;
        }
        if ancestor.props.contains(Props::BACKGROUND) && !self.props.contains(Props::BACKGROUND) {
            self.props.insert(Props::BACKGROUND);
            self.bg = ancestor.bg;
        }

        if ancestor.props.contains(Props::WIDTH) && !self.props.contains(Props::WIDTH) {
            self.props.insert(Props::WIDTH);
            self.width = ancestor.width;
        }
        if ancestor.props.contains(Props::HEIGHT) && !self.props.contains(Props::HEIGHT) {
            self.props.insert(Props::HEIGHT);
            self.height = ancestor.height;
        }
        if ancestor.props.contains(Props::MAX_WIDTH) && !self.props.contains(Props::MAX_WIDTH) {
            self.props.insert(Props::MAX_WIDTH);
            self.max_width = ancestor.max_width;
        }
        if ancestor.props.contains(Props::MAX_HEIGHT) && !self.props.contains(Props::MAX_HEIGHT) {
            self.props.insert(Props::MAX_HEIGHT);
            self.max_height = ancestor.max_height;
        }

        if ancestor.props.contains(Props::ALIGN_HORIZONTAL)
            && !self.props.contains(Props::ALIGN_HORIZONTAL)
        {
            self.props.insert(Props::ALIGN_HORIZONTAL);
            self.align_horizontal = ancestor.align_horizontal;
        }
        if ancestor.props.contains(Props::ALIGN_VERTICAL)
            && !self.props.contains(Props::ALIGN_VERTICAL)
        {
            self.props.insert(Props::ALIGN_VERTICAL);
            self.align_vertical = ancestor.align_vertical;
        }

        if ancestor.props.contains(Props::BORDER_STYLE) && !self.props.contains(Props::BORDER_STYLE)
        {
            self.props.insert(Props::BORDER_STYLE);
            self.border = ancestor.border;
        }
        for prop in [
            Props::BORDER_TOP,
            Props::BORDER_RIGHT,
            Props::BORDER_BOTTOM,
            Props::BORDER_LEFT,
        ] {
            if ancestor.props.contains(prop) && !self.props.contains(prop) {
                self.props.insert(prop);
                match prop {
                    Props::BORDER_TOP => self.border_edges.top = ancestor.border_edges.top,
                    Props::BORDER_RIGHT => self.border_edges.right = ancestor.border_edges.right,
                    Props::BORDER_BOTTOM => self.border_edges.bottom = ancestor.border_edges.bottom,
                    _ => self.border_edges.left = ancestor.border_edges.left,
                }
            }
        }
        if ancestor.props.contains(Props::BORDER_FOREGROUND)
            && !self.props.contains(Props::BORDER_FOREGROUND)
        {
            self.props.insert(Props::BORDER_FOREGROUND);
            self.border_fg = ancestor.border_fg;
        }
        if ancestor.props.contains(Props::BORDER_BACKGROUND)
            && !self.props.contains(Props::BORDER_BACKGROUND)
        {
            self.props.insert(Props::BORDER_BACKGROUND);
            self.border_bg = ancestor.border_bg;
        }

        self
    }

    // ── Rendering ─────────────────────────────────────────────────────

    /// Render `text` as a styled block.
    ///
    /// Pipeline order: wrap to the target width, apply SGR attributes and
    /// colors per line, pad (inner spacing), extend to the target height,
    /// pad every line to the target width, draw borders, add margins, then
    /// truncate to the maximum width and height.
    #[instrument(skip(self, text), level = "trace")]
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut s = text.replace("\r\n", "\n");
        if s.contains('\r') {
            // A bare CR moves the cursor yet measures zero columns.
            s = s.replace('\r', "");
        }
        if s.contains('\t') {
            s = s.replace('\t', "    ");
        }

        if self.props.contains(Props::WIDTH) && self.width > 0 {
            let wrap_at = usize::from(self.width)
                .saturating_sub(usize::from(self.padding.horizontal()))
                .max(1);
            s = wrap_text(&s, wrap_at);
        }

        let sgr = self.sgr_prefix();
        if !sgr.is_empty() {
            let styled: Vec<String> = s
                .split('\n')
                .map(|line| format!("{sgr}{line}\x1b[0m"))
                .collect();
            s = styled.join("\n");
        }

        s = self.apply_padding(&s);
        if self.props.contains(Props::HEIGHT) && self.height > 0 {
            s = self.apply_height(&s);
        }
        if self.props.contains(Props::WIDTH) && self.width > 0 {
            s = self.apply_width(&s);
        }
        s = self.apply_border(&s);
        s = self.apply_margin(&s);

        if self.props.contains(Props::MAX_WIDTH) && self.max_width > 0 {
            s = truncate_width(&s, usize::from(self.max_width));
        }
        if self.props.contains(Props::MAX_HEIGHT) && self.max_height > 0 {
            s = truncate_height(&s, usize::from(self.max_height));
        }

        s
    }

    /// SGR prefix for attributes and colors, empty when none apply.
    fn sgr_prefix(&self) -> String {
        let mut out = String::new();
        const SGR: [(Attrs, &str); 7] = [
            (Attrs::BOLD, "\x1b[1m"),
            (Attrs::FAINT, "\x1b[2m"),
            (Attrs::ITALIC, "\x1b[3m"),
            (Attrs::UNDERLINE, "\x1b[4m"),
            (Attrs::BLINK, "\x1b[5m"),
            (Attrs::REVERSE, "\x1b[7m"),
            (Attrs::STRIKETHROUGH, "\x1b[9m"),
        ];
        for (attr, seq) in SGR {
            if self.attrs.contains(attr) {
                out.push_str(seq);
            }
        }
        if let Some(fg) = self.fg {
            out.push_str(&fg.fg_sequence());
        }
        if let Some(bg) = self.bg {
            out.push_str(&bg.bg_sequence());
        }
        out
    }

    /// Spaces styled with the background color when one is set.
    fn styled_spaces(&self, n: usize) -> String {
        if n == 0 {
            return String::new();
        }
        match self.bg {
            Some(bg) => format!("{}{}\x1b[0m", bg.bg_sequence(), " ".repeat(n)),
            None => " ".repeat(n),
        }
    }

    fn apply_padding(&self, s: &str) -> String {
        let pad = self.padding;
        if pad == Sides::default() {
            return s.to_string();
        }

        let left_pad = self.styled_spaces(usize::from(pad.left));
        let right_pad = self.styled_spaces(usize::from(pad.right));

        let mut max_width = 0usize;
        let mut out = String::with_capacity(s.len() + s.len() / 2);
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&left_pad);
            out.push_str(line);
            out.push_str(&right_pad);
            max_width = max_width
                .max(usize::from(pad.left) + visible_width(line) + usize::from(pad.right));
        }

        if pad.top > 0 || pad.bottom > 0 {
            let blank = self.styled_spaces(max_width);
            let mut framed = String::with_capacity(
                out.len() + (usize::from(pad.top) + usize::from(pad.bottom)) * (blank.len() + 1),
            );
            for _ in 0..pad.top {
                framed.push_str(&blank);
                framed.push('\n');
            }
            framed.push_str(&out);
            for _ in 0..pad.bottom {
                framed.push('\n');
                framed.push_str(&blank);
            }
            out = framed;
        }

        out
    }

    /// Extend the block to `height` lines, distributing blanks per the
    /// vertical alignment.
    fn apply_height(&self, s: &str) -> String {
        let lines: Vec<&str> = s.split('\n').collect();
        let target = usize::from(self.height);
        if lines.len() >= target {
            return s.to_string();
        }

        let blank = " ".repeat(max_line_width(s));
        let extra = target - lines.len();
        let top = (extra as f32 * self.align_vertical.factor()).round() as usize;
        let bottom = extra - top;

        let mut out = String::with_capacity(s.len() + extra * (blank.len() + 1));
        for _ in 0..top {
            out.push_str(&blank);
            out.push('\n');
        }
        out.push_str(s);
        for _ in 0..bottom {
            out.push('\n');
            out.push_str(&blank);
        }
        out
    }

    /// Pad every line to `width` columns per the horizontal alignment.
    /// Lines already at or beyond the target are left alone.
    fn apply_width(&self, s: &str) -> String {
        let target = usize::from(self.width);
        let factor = self.align_horizontal.factor();

        let mut out = String::with_capacity(s.len() + s.len() / 2);
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let w = visible_width(line);
            if w >= target {
                out.push_str(line);
                continue;
            }
            let extra = target - w;
            let left = (extra as f32 * factor).round() as usize;
            out.push_str(&self.styled_spaces(left));
            out.push_str(line);
            out.push_str(&self.styled_spaces(extra - left));
        }
        out
    }

    fn apply_border(&self, s: &str) -> String {
        let edges = self.effective_edges();
        if !edges.any() {
            return s.to_string();
        }

        let b = self.border;
        let run = max_line_width(s);

        let mut deco = String::new();
        if let Some(fg) = self.border_fg {
            deco.push_str(&fg.fg_sequence());
        }
        if let Some(bg) = self.border_bg {
            deco.push_str(&bg.bg_sequence());
        }
        let styled = |text: &str| -> String {
            if deco.is_empty() {
                text.to_string()
            } else {
                format!("{deco}{text}\x1b[0m")
            }
        };

        let horizontal_run = |glyph: char| -> String {
            let mut run_str = String::with_capacity(run * glyph.len_utf8());
            for _ in 0..run {
                run_str.push(glyph);
            }
            run_str
        };

        let left = if edges.left {
            styled(&b.left.to_string())
        } else {
            String::new()
        };
        let right = if edges.right {
            styled(&b.right.to_string())
        } else {
            String::new()
        };

        let mut out = String::with_capacity(s.len() * 2);
        if edges.top {
            let mut line = String::new();
            if edges.left {
                line.push(b.top_left);
            }
            line.push_str(&horizontal_run(b.top));
            if edges.right {
                line.push(b.top_right);
            }
            out.push_str(&styled(&line));
            out.push('\n');
        }
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&left);
            out.push_str(line);
            out.push_str(&right);
        }
        if edges.bottom {
            let mut line = String::new();
            if edges.left {
                line.push(b.bottom_left);
            }
            line.push_str(&horizontal_run(b.bottom));
            if edges.right {
                line.push(b.bottom_right);
            }
            out.push('\n');
            out.push_str(&styled(&line));
        }
        out
    }

    fn apply_margin(&self, s: &str) -> String {
        let m = self.margin;
        if m == Sides::default() {
            return s.to_string();
        }

        let left = " ".repeat(usize::from(m.left));
        let right = " ".repeat(usize::from(m.right));

        let mut max_width = 0usize;
        let mut out = String::with_capacity(s.len() + s.len() / 2);
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&left);
            out.push_str(line);
            out.push_str(&right);
            max_width =
                max_width.max(usize::from(m.left) + visible_width(line) + usize::from(m.right));
        }

        if m.top > 0 || m.bottom > 0 {
            let blank = " ".repeat(max_width);
            let mut framed = String::with_capacity(
                out.len() + (usize::from(m.top) + usize::from(m.bottom)) * (blank.len() + 1),
            );
            for _ in 0..m.top {
                framed.push_str(&blank);
                framed.push('\n');
            }
            framed.push_str(&out);
            for _ in 0..m.bottom {
                framed.push('\n');
                framed.push_str(&blank);
            }
            out = framed;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{line_count, visible_width};

    fn footprint(block: &str) -> (usize, usize) {
        let cols = block.split('\n').map(visible_width).max().unwrap_or(0);
        (cols, line_count(block))
    }

    #[test]
    fn default_is_empty() {
        let s = Style::new();
        assert!(s.is_empty());
        assert_eq!(s.get_width(), None);
        assert_eq!(s.horizontal_margins(), 0);
        assert_eq!(s.horizontal_border_size(), 0);
    }

    #[test]
    fn builders_record_explicit_set() {
        let s = Style::new().width(10).max_height(4).fg(Color::RED);
        assert!(s.is_set(Props::WIDTH));
        assert!(s.is_set(Props::MAX_HEIGHT));
        assert!(s.is_set(Props::FOREGROUND));
        assert!(!s.is_set(Props::HEIGHT));
        assert_eq!(s.get_width(), Some(10));
        assert_eq!(s.get_max_height(), Some(4));
    }

    #[test]
    fn unset_clears_prop_and_value() {
        let s = Style::new().width(10).unset_width();
        assert!(!s.is_set(Props::WIDTH));
        assert_eq!(s.get_width(), None);
    }

    #[test]
    fn margins_and_border_overhead() {
        let s = Style::new().margin((1, 2)).border(Border::NORMAL);
        assert_eq!(s.horizontal_margins(), 4);
        assert_eq!(s.vertical_margins(), 2);
        assert_eq!(s.horizontal_border_size(), 2);
        assert_eq!(s.vertical_border_size(), 2);
    }

    #[test]
    fn border_size_zero_without_border_style() {
        // Edge toggles alone draw nothing until a glyph set is chosen.
        let s = Style::new().border_top(true).border_left(true);
        assert_eq!(s.horizontal_border_size(), 0);
        assert_eq!(s.vertical_border_size(), 0);
    }

    #[test]
    fn partial_border_sizes() {
        let s = Style::new()
            .border(Border::NORMAL)
            .border_right(false)
            .border_bottom(false);
        assert_eq!(s.horizontal_border_size(), 1);
        assert_eq!(s.vertical_border_size(), 1);
    }

    #[test]
    fn render_plain_text_unchanged() {
        assert_eq!(Style::new().render("hi"), "hi");
        assert_eq!(Style::new().render("a\nb"), "a\nb");
    }

    #[test]
    fn render_normalizes_crlf_and_tabs() {
        assert_eq!(Style::new().render("a\r\nb"), "a\nb");
        assert_eq!(Style::new().render("a\tb"), "a    b");
    }

    #[test]
    fn render_pads_to_width_and_height() {
        let block = Style::new().width(5).height(3).render("hi");
        assert_eq!(block, "hi   \n     \n     ");
    }

    #[test]
    fn render_wraps_at_width() {
        let block = Style::new().width(5).render("hello world");
        assert_eq!(block, "hello\nworld");
    }

    #[test]
    fn render_center_alignment() {
        let block = Style::new()
            .width(6)
            .align_horizontal(Align::Center)
            .render("ab");
        assert_eq!(block, "  ab  ");
    }

    #[test]
    fn render_border_adds_frame() {
        let block = Style::new().border(Border::ASCII).width(3).render("ab");
        assert_eq!(block, "+---+\n|ab |\n+---+");
    }

    #[test]
    fn render_margin_adds_whitespace() {
        let block = Style::new().margin(1).render("x");
        assert_eq!(block, "   \n x \n   ");
    }

    #[test]
    fn render_padding_respects_background_free_case() {
        let block = Style::new().padding((0, 1)).render("x");
        assert_eq!(block, " x ");
    }

    #[test]
    fn render_truncates_to_max() {
        let block = Style::new().max_width(2).max_height(1).render("abcd\nefgh");
        assert_eq!(block, "ab");
    }

    #[test]
    fn render_footprint_with_full_chrome() {
        // width/height target the content box; margins and borders stack
        // outside it; max_* caps the outer footprint.
        let style = Style::new()
            .border(Border::NORMAL)
            .margin(1)
            .width(6)
            .height(2)
            .max_width(10)
            .max_height(6);
        let block = style.render("hi");
        assert_eq!(footprint(&block), (10, 6));
    }

    #[test]
    fn render_wide_glyph_keeps_forced_footprint() {
        // A two-column glyph cannot fit a one-column box; the forced caps
        // still produce exactly the requested footprint.
        let style = Style::new().width(1).height(1).max_width(1).max_height(1);
        assert_eq!(style.render("日"), " ");

        let style = Style::new().width(3).height(2).max_width(3).max_height(2);
        let block = style.render("日本語");
        assert_eq!(footprint(&block), (3, 2));
    }

    #[test]
    fn render_normalizes_carriage_returns() {
        assert_eq!(Style::new().render("a\r\nb"), "a\nb");

        let style = Style::new().width(4).height(1).max_width(4).max_height(1);
        let block = style.render("ab\rcd");
        assert!(!block.contains('\r'));
        assert_eq!(block, "abcd");
    }

    #[test]
    fn render_sgr_wraps_every_line() {
        let block = Style::new().bold().render("a\nb");
        assert_eq!(block, "\x1b[1ma\x1b[0m\n\x1b[1mb\x1b[0m");
    }

    #[test]
    fn render_colors_before_text() {
        let block = Style::new().fg(Color::RED).bg(Color::BLUE).render("x");
        assert_eq!(block, "\x1b[31m\x1b[44mx\x1b[0m");
    }

    #[test]
    fn inherit_fills_gaps_only() {
        let ancestor = Style::new().fg(Color::RED).bold().width(9);
        let local = Style::new().fg(Color::GREEN);

        let merged = local.inherit(&ancestor);
        // Local explicit fg wins; bold and width flow down.
        assert_eq!(merged.fg, Some(Color::GREEN));
        assert!(merged.attrs.contains(Attrs::BOLD));
        assert_eq!(merged.get_width(), Some(9));
    }

    #[test]
    fn inherit_skips_margins_and_padding() {
        let ancestor = Style::new().margin(2).padding(1).fg(Color::RED);
        let merged = Style::new().inherit(&ancestor);
        assert_eq!(merged.horizontal_margins(), 0);
        assert!(!merged.is_set(Props::PADDING_LEFT));
        assert_eq!(merged.fg, Some(Color::RED));
    }

    #[test]
    fn inherit_empty_ancestor_is_identity() {
        let local = Style::new().bold().width(3).margin(1);
        assert_eq!(local.inherit(&Style::new()), local);
    }

    #[test]
    fn inherit_order_first_ancestor_sticks() {
        // Once an inherited property is filled in, later ancestors cannot
        // displace it.
        let a = Style::new().fg(Color::RED);
        let b = Style::new().fg(Color::BLUE).bold();
        let merged = Style::new().inherit(&a).inherit(&b);
        assert_eq!(merged.fg, Some(Color::RED));
        assert!(merged.attrs.contains(Attrs::BOLD));
    }

    #[test]
    fn sides_shorthands() {
        assert_eq!(Sides::from(2), Sides::new(2, 2, 2, 2));
        assert_eq!(Sides::from((1, 2)), Sides::new(1, 2, 1, 2));
        assert_eq!(Sides::from((1, 2, 3, 4)), Sides::new(1, 2, 3, 4));
    }
}
