//! Lettering: painting wrapped text into balloon interiors.

use image::{Rgba, RgbaImage};

use crate::font::ResolvedFont;
use crate::geometry::Rect;
use crate::raster::blend_pixel;
use crate::text::block_height;

/// Letter a wrapped block centered inside `area`. Lines are centered
/// horizontally; the block is centered vertically. Lines that would run
/// past the bottom of the area are dropped rather than painted over the
/// balloon edge.
pub fn letter_block(
    img: &mut RgbaImage,
    area: Rect,
    lines: &[String],
    font: &ResolvedFont,
    line_spacing: u32,
    color: Rgba<u8>,
) {
    let total = block_height(font, lines.len(), line_spacing) as i32;
    let mut y = area.y + ((area.h as i32 - total) / 2).max(0);
    let step = (font.line_height() + line_spacing) as i32;

    for line in lines {
        if y + font.line_height() as i32 > area.bottom() + 2 {
            log::debug!("dropping overflowing line {line:?}");
            break;
        }
        let line_w = font.measure(line) as i32;
        let x = area.x + (area.w as i32 - line_w) / 2;
        font.rasterize(line, |gx, gy, coverage| {
            blend_pixel(img, x + gx, y + gy, color, coverage);
        });
        y += step;
    }
}

/// Letter a sound effect: drop shadow, then an outline ring, then the
/// fill. No silhouette — the glyphs themselves carry the weight.
pub fn letter_sfx(
    img: &mut RgbaImage,
    area: Rect,
    lines: &[String],
    font: &ResolvedFont,
    line_spacing: u32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    outline_width: u32,
    shadow: Rgba<u8>,
) {
    const SHADOW_OFFSET: i32 = 3;

    let total = block_height(font, lines.len(), line_spacing) as i32;
    let mut y = area.y + ((area.h as i32 - total) / 2).max(0);
    let step = (font.line_height() + line_spacing) as i32;
    let ow = outline_width as i32;

    for line in lines {
        let line_w = font.measure(line) as i32;
        let x = area.x + (area.w as i32 - line_w) / 2;

        font.rasterize(line, |gx, gy, coverage| {
            blend_pixel(img, x + gx + SHADOW_OFFSET, y + gy + SHADOW_OFFSET, shadow, coverage);
        });
        if ow > 0 {
            font.rasterize(line, |gx, gy, coverage| {
                if coverage < 0.5 {
                    return;
                }
                for dy in -ow..=ow {
                    for dx in -ow..=ow {
                        if dx * dx + dy * dy <= ow * ow {
                            blend_pixel(img, x + gx + dx, y + gy + dy, outline, 1.0);
                        }
                    }
                }
            });
        }
        font.rasterize(line, |gx, gy, coverage| {
            blend_pixel(img, x + gx, y + gy, fill, coverage);
        });
        y += step;
    }
}
