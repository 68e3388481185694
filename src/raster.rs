//! Raster drawing primitives.
//!
//! Everything the balloon renderer needs to paint silhouettes onto an
//! [`RgbaImage`]: alpha-blended pixels, filled/stroked ellipses and
//! rounded rects, scanline-filled polygons, thick and dashed lines.
//! All routines are deterministic per-pixel tests or fixed-step walks —
//! identical inputs paint identical pixels.

use image::{Rgba, RgbaImage};

use crate::geometry::Rect;

/// Blend `color` onto the image at (x, y) with the given coverage.
/// Out-of-bounds coordinates are ignored. The canvas stays opaque.
pub fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let a = (coverage * color[3] as f32 / 255.0).clamp(0.0, 1.0);
    if a <= 0.0 {
        return;
    }
    let px = img.get_pixel_mut(x as u32, y as u32);
    for c in 0..3 {
        px[c] = (color[c] as f32 * a + px[c] as f32 * (1.0 - a)).round() as u8;
    }
    px[3] = 255;
}

/// Fill an axis-aligned rectangle.
pub fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            blend_pixel(img, x, y, color, 1.0);
        }
    }
}

/// Stroke a rectangle border of `width` pixels drawn inward from `rect`.
pub fn stroke_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>, width: u32) {
    let w = width as i32;
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            let inside_inner = x >= rect.x + w
                && x < rect.right() - w
                && y >= rect.y + w
                && y < rect.bottom() - w;
            if !inside_inner {
                blend_pixel(img, x, y, color, 1.0);
            }
        }
    }
}

/// Normalized ellipse distance: <= 1.0 means inside.
fn ellipse_dist(x: f32, y: f32, cx: f32, cy: f32, rx: f32, ry: f32) -> f32 {
    if rx <= 0.0 || ry <= 0.0 {
        return f32::INFINITY;
    }
    let dx = (x - cx) / rx;
    let dy = (y - cy) / ry;
    dx * dx + dy * dy
}

/// Fill the ellipse inscribed in `rect`, then stroke its outline.
pub fn draw_ellipse(img: &mut RgbaImage, rect: Rect, fill: Rgba<u8>, outline: Rgba<u8>, width: u32) {
    let cx = rect.x as f32 + rect.w as f32 / 2.0;
    let cy = rect.y as f32 + rect.h as f32 / 2.0;
    let rx = rect.w as f32 / 2.0;
    let ry = rect.h as f32 / 2.0;
    let w = width as f32;
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
            if ellipse_dist(fx, fy, cx, cy, rx, ry) <= 1.0 {
                let inner = ellipse_dist(fx, fy, cx, cy, (rx - w).max(0.5), (ry - w).max(0.5));
                let color = if inner > 1.0 { outline } else { fill };
                blend_pixel(img, x, y, color, 1.0);
            }
        }
    }
}

/// Fill a circle centered at (cx, cy), then stroke its outline.
pub fn draw_circle(
    img: &mut RgbaImage,
    cx: i32,
    cy: i32,
    radius: u32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    width: u32,
) {
    let r = radius as i32;
    let rect = Rect::new(cx - r, cy - r, radius * 2, radius * 2);
    draw_ellipse(img, rect, fill, outline, width);
}

/// Signed squared distance test for a rounded rectangle.
fn inside_rounded(x: f32, y: f32, rect: Rect, radius: f32) -> bool {
    let half_w = rect.w as f32 / 2.0;
    let half_h = rect.h as f32 / 2.0;
    let r = radius.min(half_w).min(half_h).max(0.0);
    let cx = rect.x as f32 + half_w;
    let cy = rect.y as f32 + half_h;
    let dx = ((x - cx).abs() - (half_w - r)).max(0.0);
    let dy = ((y - cy).abs() - (half_h - r)).max(0.0);
    dx * dx + dy * dy <= r * r
}

/// Fill a rounded rectangle, then stroke its outline.
pub fn draw_rounded_rect(
    img: &mut RgbaImage,
    rect: Rect,
    radius: u32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    width: u32,
) {
    if rect.w == 0 || rect.h == 0 {
        return;
    }
    let w = width as i32;
    let inner = Rect::new(
        rect.x + w,
        rect.y + w,
        rect.w.saturating_sub(2 * width),
        rect.h.saturating_sub(2 * width),
    );
    let inner_radius = (radius as f32 - w as f32).max(0.0);
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
            if inside_rounded(fx, fy, rect, radius as f32) {
                let color = if width > 0 && !inside_rounded(fx, fy, inner, inner_radius) {
                    outline
                } else {
                    fill
                };
                blend_pixel(img, x, y, color, 1.0);
            }
        }
    }
}

/// Fill only a rounded rectangle body, no outline.
pub fn fill_rounded_rect(img: &mut RgbaImage, rect: Rect, radius: u32, fill: Rgba<u8>) {
    draw_rounded_rect(img, rect, radius, fill, fill, 0);
}

/// Fill a closed polygon with even-odd scanline filling, then stroke
/// its edges.
pub fn draw_polygon(
    img: &mut RgbaImage,
    points: &[(f32, f32)],
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    width: u32,
) {
    if points.len() < 3 {
        return;
    }
    let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min).floor() as i32;
    let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max).ceil() as i32;

    for y in min_y..=max_y {
        let scan = y as f32 + 0.5;
        let mut crossings = Vec::new();
        for i in 0..points.len() {
            let (x0, y0) = points[i];
            let (x1, y1) = points[(i + 1) % points.len()];
            if (y0 <= scan && scan < y1) || (y1 <= scan && scan < y0) {
                let t = (scan - y0) / (y1 - y0);
                crossings.push(x0 + t * (x1 - x0));
            }
        }
        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for pair in crossings.chunks(2) {
            if let [start, end] = pair {
                for x in start.round() as i32..end.round() as i32 {
                    blend_pixel(img, x, y, fill, 1.0);
                }
            }
        }
    }

    for i in 0..points.len() {
        let (x0, y0) = points[i];
        let (x1, y1) = points[(i + 1) % points.len()];
        draw_line(img, x0, y0, x1, y1, outline, width);
    }
}

/// Draw a thick line by stamping discs along fixed half-pixel steps.
pub fn draw_line(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    color: Rgba<u8>,
    width: u32,
) {
    let length = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
    let steps = (length * 2.0).ceil().max(1.0) as u32;
    let radius = (width as f32 / 2.0).max(0.5);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let px = x0 + t * (x1 - x0);
        let py = y0 + t * (y1 - y0);
        stamp_disc(img, px, py, radius, color);
    }
}

fn stamp_disc(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    let r = radius.ceil() as i32;
    for dy in -r..=r {
        for dx in -r..=r {
            let d = ((dx * dx + dy * dy) as f32).sqrt();
            if d <= radius {
                blend_pixel(img, cx.round() as i32 + dx, cy.round() as i32 + dy, color, 1.0);
            }
        }
    }
}

/// Draw a dashed line: `dash` pixels on, `gap` pixels off.
pub fn draw_dashed_line(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    color: Rgba<u8>,
    width: u32,
    dash: f32,
    gap: f32,
) {
    let length = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
    if length <= 0.0 || dash <= 0.0 {
        return;
    }
    let (ux, uy) = ((x1 - x0) / length, (y1 - y0) / length);
    let period = dash + gap.max(0.0);
    let mut pos = 0.0f32;
    while pos < length {
        let end = (pos + dash).min(length);
        draw_line(
            img,
            x0 + ux * pos,
            y0 + uy * pos,
            x0 + ux * end,
            y0 + uy * end,
            color,
            width,
        );
        pos += period;
    }
}
