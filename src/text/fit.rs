//! Dynamic font sizing: shrink until wrapped text fits its box.

use crate::font::{FontResolver, FontRole, ResolvedFont};

use super::{block_height, wrap};

/// Outcome of a fitting pass.
pub struct FitResult {
    pub font: ResolvedFont,
    /// Size the search settled on.
    pub size: u32,
    /// Text wrapped at the chosen size.
    pub lines: Vec<String>,
    /// True when even the floor size overflows the box. The floor is
    /// accepted anyway — oversized text beats dropped dialogue.
    pub overflowed: bool,
}

/// Shrink the font in steps of 2 from `start_size` until the wrapped
/// block fits `box_w` x `box_h`, or the floor size is reached.
///
/// Monotonic: for fixed text, role, and width, a smaller box never
/// yields a larger chosen size.
pub fn fit(
    text: &str,
    role: FontRole,
    start_size: u32,
    box_w: u32,
    box_h: u32,
    min_size: u32,
    line_spacing: u32,
    resolver: &mut FontResolver,
) -> FitResult {
    let floor = min_size.max(1).min(start_size.max(1));
    let mut size = start_size.max(1);

    loop {
        let font = resolver.resolve(role, size);
        let lines = wrap(text, &font, box_w);
        let height = block_height(&font, lines.len(), line_spacing);

        if height <= box_h {
            return FitResult { font, size, lines, overflowed: false };
        }
        if size <= floor {
            log::debug!(
                "text block {height}px overflows {box_h}px box at floor size {size}; accepting"
            );
            return FitResult { font, size, lines, overflowed: true };
        }
        size = size.saturating_sub(2).max(floor);
    }
}
