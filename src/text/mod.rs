//! # Text Layout
//!
//! Greedy word wrapping against measured glyph widths, and dynamic font
//! sizing that shrinks text until a wrapped block fits its balloon.

pub mod fit;
pub mod wrap;

pub use fit::{FitResult, fit};
pub use wrap::wrap;

use crate::font::ResolvedFont;

/// Total pixel height of a wrapped block: `line_height * count` plus
/// `spacing` between consecutive lines.
pub fn block_height(font: &ResolvedFont, line_count: usize, line_spacing: u32) -> u32 {
    if line_count == 0 {
        return 0;
    }
    font.line_height() * line_count as u32 + line_spacing * (line_count as u32 - 1)
}

/// Widest line of a wrapped block in pixels.
pub fn block_width(font: &ResolvedFont, lines: &[String]) -> u32 {
    lines.iter().map(|line| font.measure(line)).max().unwrap_or(0)
}
