//! Balloon tails: the pointer from a balloon toward its speaker.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::geometry::{Anchor, Rect};
use crate::raster;

use super::BalloonStyle;

/// How a balloon points at its speaker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailKind {
    /// Solid triangle, the standard speech tail.
    #[default]
    Triangle,
    /// Chain of three shrinking circles, for thought balloons.
    CircleChain,
    /// Short dashed line, for whispers.
    Dashed,
    /// No tail at all (captions, sound effects).
    None,
}

/// Draw the style's tail on the `anchor` side of `rect`, pointing away
/// from the balloon. The tail overlaps the silhouette edge by a couple
/// of pixels so no seam shows.
pub fn draw_tail(img: &mut RgbaImage, rect: Rect, anchor: Anchor, style: &BalloonStyle) {
    let (cx, cy) = rect.center();
    // Base point on the anchored edge, unit direction pointing outward.
    let (bx, by, dx, dy) = match anchor {
        Anchor::Bottom => (cx as f32, rect.bottom() as f32 - 2.0, 0.0f32, 1.0f32),
        Anchor::Top => (cx as f32, rect.y as f32 + 2.0, 0.0, -1.0),
        Anchor::Left => (rect.x as f32 + 2.0, cy as f32, -1.0, 0.0),
        Anchor::Right => (rect.right() as f32 - 2.0, cy as f32, 1.0, 0.0),
    };
    let size = style.tail_size as f32;

    match style.tail {
        TailKind::None => {}
        TailKind::Triangle => {
            // Base perpendicular to the outward direction, tip skewed a
            // third of the way along the base so the tail leans.
            let (px, py) = (-dy, dx);
            let half = size / 2.0;
            let points = [
                (bx - px * half, by - py * half),
                (bx + px * half, by + py * half),
                (bx + dx * size + px * half / 3.0, by + dy * size + py * half / 3.0),
            ];
            raster::draw_polygon(img, &points, style.fill, style.outline, style.outline_width);
        }
        TailKind::CircleChain => {
            // Three circles shrinking away from the balloon.
            let scale = size / 30.0;
            for (offset, radius) in [(15.0, 12.0), (25.0, 8.0), (35.0, 5.0)] {
                raster::draw_circle(
                    img,
                    (bx + dx * offset * scale).round() as i32,
                    (by + dy * offset * scale).round() as i32,
                    (radius * scale).max(2.0) as u32,
                    style.fill,
                    style.outline,
                    style.outline_width.min(2),
                );
            }
        }
        TailKind::Dashed => {
            let len = size.max(20.0);
            raster::draw_dashed_line(
                img,
                bx,
                by,
                bx + dx * len,
                by + dy * len,
                style.outline,
                style.outline_width.max(1),
                5.0,
                3.0,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::BalloonKind;
    use image::Rgba;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn paints_below(kind: TailKind, style_kind: BalloonKind) -> bool {
        let mut img = RgbaImage::from_pixel(200, 200, WHITE);
        let rect = Rect::new(50, 30, 100, 60);
        let mut style = BalloonStyle::for_kind(style_kind);
        style.tail = kind;
        draw_tail(&mut img, rect, Anchor::Bottom, &style);
        (0..200).any(|x| {
            (rect.bottom() as u32 + 1..200).any(|y| *img.get_pixel(x, y) != WHITE)
        })
    }

    #[test]
    fn test_triangle_extends_past_edge() {
        assert!(paints_below(TailKind::Triangle, BalloonKind::Speech));
    }

    #[test]
    fn test_circle_chain_extends_past_edge() {
        assert!(paints_below(TailKind::CircleChain, BalloonKind::Thought));
    }

    #[test]
    fn test_dashed_extends_past_edge() {
        assert!(paints_below(TailKind::Dashed, BalloonKind::Speech));
    }

    #[test]
    fn test_none_paints_nothing() {
        assert!(!paints_below(TailKind::None, BalloonKind::Narration));
    }

    #[test]
    fn test_anchor_controls_direction() {
        let mut img = RgbaImage::from_pixel(200, 200, WHITE);
        let rect = Rect::new(60, 60, 80, 60);
        let style = BalloonStyle::for_kind(BalloonKind::Speech);
        draw_tail(&mut img, rect, Anchor::Right, &style);
        let right_of = (rect.right() as u32 + 1..200)
            .any(|x| (0..200).any(|y| *img.get_pixel(x, y) != WHITE));
        let left_of = (0..rect.x as u32)
            .any(|x| (0..200).any(|y| *img.get_pixel(x, y) != WHITE));
        assert!(right_of && !left_of);
    }
}
