#![forbid(unsafe_code)]

//! Flexbox cell for terminal layouts.
//!
//! A [`Cell`] is the leaf of a flexible-box layout: a container distributes
//! outer width and height across sibling cells by their weight ratios, and
//! each cell renders its content into exactly the assigned footprint,
//! accounting for the margins and borders its style consumes.

/// The flexbox cell.
pub mod cell;

pub use cell::Cell;
pub use flexcell_style::{Align, Border, BorderEdges, Color, Sides, Style};
