//! Balloon silhouette shapes.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::raster;

use super::BalloonStyle;

/// The silhouette drawn behind a balloon's text.
///
/// Every variant paints within the balloon's bounding rect; the choice
/// of shape never changes layout, only pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalloonShape {
    /// Classic speech ellipse.
    #[default]
    Ellipse,
    /// Caption box with rounded corners.
    RoundedRect,
    /// Thought cloud: an ellipse ringed by perimeter bumps.
    Cloud,
    /// Shout burst: a 16-point star.
    Jagged,
    /// Whispered speech: rounded rect with a dashed outline.
    Whisper,
}

impl BalloonShape {
    /// Paint this silhouette into `rect` using the style's fill and
    /// outline. Deterministic: identical inputs paint identical pixels.
    pub fn draw(self, img: &mut RgbaImage, rect: Rect, style: &BalloonStyle) {
        match self {
            BalloonShape::Ellipse => {
                raster::draw_ellipse(img, rect, style.fill, style.outline, style.outline_width);
            }
            BalloonShape::RoundedRect => {
                raster::draw_rounded_rect(
                    img,
                    rect,
                    style.corner_radius,
                    style.fill,
                    style.outline,
                    style.outline_width,
                );
            }
            BalloonShape::Cloud => draw_cloud(img, rect, style),
            BalloonShape::Jagged => draw_jagged(img, rect, style),
            BalloonShape::Whisper => draw_whisper(img, rect, style),
        }
    }
}

/// Thought cloud: eight bumps spaced evenly around an inset ellipse,
/// overdrawn by the body so only their outer halves remain.
fn draw_cloud(img: &mut RgbaImage, rect: Rect, style: &BalloonStyle) {
    let (cx, cy) = rect.center();
    let rx = rect.w as f32 / 2.0;
    let ry = rect.h as f32 / 2.0;
    let bump_r = (rx.min(ry) * 0.3).max(4.0) as u32;
    let body = Rect::new(
        rect.x + bump_r as i32 / 2,
        rect.y + bump_r as i32 / 2,
        rect.w.saturating_sub(bump_r),
        rect.h.saturating_sub(bump_r),
    );

    for i in 0..8 {
        let angle = i as f32 * std::f32::consts::TAU / 8.0;
        let bx = cx as f32 + (rx - bump_r as f32) * angle.cos();
        let by = cy as f32 + (ry - bump_r as f32) * angle.sin();
        raster::draw_circle(
            img,
            bx.round() as i32,
            by.round() as i32,
            bump_r,
            style.fill,
            style.outline,
            style.outline_width,
        );
    }
    raster::draw_ellipse(img, body, style.fill, style.fill, 0);
}

/// Shout burst: 16 vertices alternating between the full radius and 70%
/// of it. The vertical radius is pulled in to 80% so the spikes clear
/// the text block above and below.
fn draw_jagged(img: &mut RgbaImage, rect: Rect, style: &BalloonStyle) {
    let (cx, cy) = rect.center();
    // Inset by the stroke radius so the outline stays inside the rect.
    let inset = style.outline_width as f32 / 2.0 + 0.5;
    let rx = (rect.w as f32 / 2.0 - inset).max(1.0);
    let ry = (rect.h as f32 / 2.0 * 0.8 - inset).max(1.0);

    let points: Vec<(f32, f32)> = (0..16)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / 16.0;
            let reach = if i % 2 == 0 { 1.0 } else { 0.7 };
            (
                cx as f32 + rx * reach * angle.cos(),
                cy as f32 + ry * reach * angle.sin(),
            )
        })
        .collect();

    raster::draw_polygon(img, &points, style.fill, style.outline, style.outline_width);
}

/// Whisper balloon: filled rounded rect traced by a dashed outline,
/// 8px dashes with 4px gaps.
fn draw_whisper(img: &mut RgbaImage, rect: Rect, style: &BalloonStyle) {
    const DASH: f32 = 8.0;
    const GAP: f32 = 4.0;

    raster::fill_rounded_rect(img, rect, style.corner_radius, style.fill);

    let r = style
        .corner_radius
        .min(rect.w / 2)
        .min(rect.h / 2) as f32;
    let (x0, y0) = (rect.x as f32, rect.y as f32);
    let (x1, y1) = (rect.right() as f32 - 1.0, rect.bottom() as f32 - 1.0);
    let w = style.outline_width;

    // Straight edges, inset by the corner radius
    raster::draw_dashed_line(img, x0 + r, y0, x1 - r, y0, style.outline, w, DASH, GAP);
    raster::draw_dashed_line(img, x0 + r, y1, x1 - r, y1, style.outline, w, DASH, GAP);
    raster::draw_dashed_line(img, x0, y0 + r, x0, y1 - r, style.outline, w, DASH, GAP);
    raster::draw_dashed_line(img, x1, y0 + r, x1, y1 - r, style.outline, w, DASH, GAP);

    // Corner arcs, dashed by walking fixed angle steps
    let corners = [
        (x1 - r, y1 - r, 0.0),                        // bottom-right
        (x0 + r, y1 - r, std::f32::consts::FRAC_PI_2), // bottom-left
        (x0 + r, y0 + r, std::f32::consts::PI),        // top-left
        (x1 - r, y0 + r, 3.0 * std::f32::consts::FRAC_PI_2), // top-right
    ];
    for (ccx, ccy, start) in corners {
        let arc_len = r * std::f32::consts::FRAC_PI_2;
        let mut pos = 0.0f32;
        while pos < arc_len {
            let end = (pos + DASH).min(arc_len);
            let a0 = start + pos / r.max(1.0);
            let a1 = start + end / r.max(1.0);
            raster::draw_line(
                img,
                ccx + r * a0.cos(),
                ccy + r * a0.sin(),
                ccx + r * a1.cos(),
                ccy + r * a1.sin(),
                style.outline,
                w,
            );
            pos += DASH + GAP;
        }
    }
}
