#![forbid(unsafe_code)]

//! The flexbox [`Cell`]: one rectangular unit in a box layout.
//!
//! A cell never sizes itself. The owning container decides its outer
//! footprint (via [`Cell::set_size`]) from the weight ratios and minimum
//! height the cell carries; the cell's job is to know how much of that
//! footprint its style chrome consumes and to render content into exactly
//! the assigned rectangle.

use flexcell_style::Style;
use tracing::{instrument, trace};

/// A single cell in a flexbox row or column.
///
/// The `ratio_x`/`ratio_y` weights and `min_height` are bookkeeping for the
/// container's distribution pass; the cell stores and exposes them but never
/// interprets them. `width`/`height` are the *outer* footprint, chrome
/// included.
///
/// # Example
/// ```
/// use flexcell_layout::Cell;
/// use flexcell_style::{Border, Style};
///
/// let mut cell = Cell::new(1, 1)
///     .with_content("hi")
///     .with_style(Style::new().border(Border::NORMAL));
/// cell.set_size(10, 4);
/// let block = cell.render(&[]);
/// assert_eq!(block.lines().count(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cell {
    id: String,
    style: Style,
    ratio_x: u16,
    ratio_y: u16,
    min_height: u16,
    width: u16,
    height: u16,
    content: String,
}

impl Cell {
    /// Create a cell with the given horizontal and vertical weight ratios.
    ///
    /// The style starts empty and the footprint at zero; the container
    /// assigns real dimensions during its layout pass.
    #[must_use]
    pub fn new(ratio_x: u16, ratio_y: u16) -> Self {
        Self {
            ratio_x,
            ratio_y,
            ..Self::default()
        }
    }

    // ── Configuration ─────────────────────────────────────────────────

    /// Set the cell's identifier. Containers fall back to the positional
    /// index when this is left empty.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Replace the raw content. Accepted verbatim; wide characters and
    /// escape sequences are the render path's concern.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Set the minimum-height hint honored by the container's distribution
    /// pass. Does not change the assigned height.
    pub fn set_min_height(&mut self, min_height: u16) {
        self.min_height = min_height;
    }

    /// Replace the style, stripping any width/max-width/height/max-height
    /// the caller set.
    ///
    /// The cell is the sole authority on its own size: dimensions are
    /// re-derived from the assigned footprint at render time, so a
    /// caller-preset size constraint would be a second, conflicting source
    /// of truth.
    pub fn set_style(&mut self, style: Style) {
        self.style = style
            .unset_width()
            .unset_max_width()
            .unset_height()
            .unset_max_height();
    }

    /// Builder form of [`Cell::set_id`].
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Builder form of [`Cell::set_content`].
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    /// Builder form of [`Cell::set_min_height`].
    #[must_use]
    pub fn with_min_height(mut self, min_height: u16) -> Self {
        self.set_min_height(min_height);
        self
    }

    /// Builder form of [`Cell::set_style`].
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.set_style(style);
        self
    }

    /// Assign the outer footprint. Called by the owning container after its
    /// distribution pass; layout recomputation (e.g. a terminal resize) may
    /// reassign any number of times.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    // ── Accessors ─────────────────────────────────────────────────────

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw content, no styling applied.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// An independent copy of the current style. Mutating the returned
    /// value never affects the cell.
    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    #[must_use]
    pub fn ratio_x(&self) -> u16 {
        self.ratio_x
    }

    #[must_use]
    pub fn ratio_y(&self) -> u16 {
        self.ratio_y
    }

    #[must_use]
    pub fn min_height(&self) -> u16 {
        self.min_height
    }

    /// Assigned outer width, style chrome included.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Assigned outer height, style chrome included.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    // ── Sizing ────────────────────────────────────────────────────────

    /// Columns the style's margins and border edges consume.
    fn extra_width(&self) -> u16 {
        self.style.horizontal_margins() + self.style.horizontal_border_size()
    }

    /// Rows the style's margins and border edges consume.
    fn extra_height(&self) -> u16 {
        self.style.vertical_margins() + self.style.vertical_border_size()
    }

    /// Columns left for content. Saturates at zero when the chrome alone
    /// exceeds the assigned footprint.
    fn content_width(&self) -> u16 {
        self.width.saturating_sub(self.extra_width())
    }

    /// Rows left for content, saturating like [`Cell::content_width`].
    fn content_height(&self) -> u16 {
        self.height.saturating_sub(self.extra_height())
    }

    // ── Rendering ─────────────────────────────────────────────────────

    /// Render the cell into a text block of exactly `width × height`.
    ///
    /// Each style in `inherited` is folded into the cell's own style in
    /// order; earlier ancestors fill gaps first, and properties the cell
    /// set explicitly are never overridden. The merge persists: a later
    /// render with different ancestors starts from the merged style.
    #[instrument(skip(self, inherited), level = "trace", fields(id = %self.id))]
    pub fn render(&mut self, inherited: &[Style]) -> String {
        for ancestor in inherited {
            self.style = self.style.inherit(ancestor);
        }
        trace!(
            width = self.width,
            height = self.height,
            content_width = self.content_width(),
            content_height = self.content_height(),
            "rendering cell"
        );

        self.style
            .width(self.content_width())
            .max_width(self.width)
            .height(self.content_height())
            .max_height(self.height)
            .render(&self.content)
    }
}
