#![forbid(unsafe_code)]

//! Box-model styling for terminal text.
//!
//! This crate provides:
//! - [`Style`] — a value type combining colors, text attributes, padding,
//!   margins, borders, and size constraints, with gap-filling inheritance
//! - [`Border`] glyph sets and per-edge selection
//! - [`Color`] for SGR color sequences
//! - Display-width helpers that treat escape sequences as zero columns

/// Border glyph sets and edge selection.
pub mod border;
/// Terminal colors and SGR sequences.
pub mod color;
/// Display-width measurement, wrapping, and truncation.
pub mod measure;
/// The box-model style type.
pub mod style;

pub use border::{Border, BorderEdges};
pub use color::Color;
pub use measure::{
    line_count, max_line_width, truncate_height, truncate_width, visible_width, wrap_text,
};
pub use style::{Align, Attrs, Props, Sides, Style};
