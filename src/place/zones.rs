//! Coarse placement zones: a priority-weighted grid over the panel.

use crate::dialogue::BalloonKind;
use crate::geometry::{Anchor, Rect};

/// One named region of a panel with a placement priority in [0, 1].
/// Higher priority means more desirable for balloons; the panel's
/// center scores lowest so artwork stays visible.
#[derive(Debug, Clone)]
pub struct Zone {
    pub name: &'static str,
    pub rect: Rect,
    pub priority: f32,
}

impl Zone {
    /// Tail anchor implied by the zone's position: balloons at the top
    /// point down toward speakers, side balloons point inward.
    pub fn anchor(&self) -> Anchor {
        if self.name.contains("top") {
            Anchor::Bottom
        } else if self.name.contains("bottom") {
            Anchor::Top
        } else if self.name.ends_with("left") {
            Anchor::Right
        } else if self.name.ends_with("right") {
            Anchor::Left
        } else {
            Anchor::Bottom
        }
    }
}

/// Build the zone grid for a panel. Normal panels get a 3x3 grid; very
/// wide panels (aspect > 2) degrade to three full-height columns and
/// very tall ones (aspect < 0.6) to three full-width rows, since the
/// middle band of a strip is all artwork. Every panel additionally gets
/// four thin edge bands as overflow zones.
pub fn standard_zones(panel_w: u32, panel_h: u32) -> Vec<Zone> {
    let aspect = panel_w as f32 / panel_h.max(1) as f32;
    let (w, h) = (panel_w as i32, panel_h as i32);

    let mut zones = if aspect > 2.0 {
        let cw = panel_w / 3;
        vec![
            Zone { name: "mid_left", rect: Rect::new(0, 0, cw, panel_h), priority: 0.9 },
            Zone { name: "mid_center", rect: Rect::new(w / 3, 0, cw, panel_h), priority: 0.3 },
            Zone { name: "mid_right", rect: Rect::new(2 * w / 3, 0, cw, panel_h), priority: 0.9 },
        ]
    } else if aspect < 0.6 {
        let ch = panel_h / 3;
        vec![
            Zone { name: "top_center", rect: Rect::new(0, 0, panel_w, ch), priority: 0.95 },
            Zone { name: "mid_center", rect: Rect::new(0, h / 3, panel_w, ch), priority: 0.3 },
            Zone { name: "bottom_center", rect: Rect::new(0, 2 * h / 3, panel_w, ch), priority: 0.9 },
        ]
    } else {
        let cw = panel_w / 3;
        let ch = panel_h / 3;
        let cell = |col: i32, row: i32| Rect::new(col * w / 3, row * h / 3, cw, ch);
        vec![
            Zone { name: "top_left", rect: cell(0, 0), priority: 0.95 },
            Zone { name: "top_center", rect: cell(1, 0), priority: 0.8 },
            Zone { name: "top_right", rect: cell(2, 0), priority: 0.95 },
            Zone { name: "mid_left", rect: cell(0, 1), priority: 0.8 },
            Zone { name: "mid_center", rect: cell(1, 1), priority: 0.2 },
            Zone { name: "mid_right", rect: cell(2, 1), priority: 0.8 },
            Zone { name: "bottom_left", rect: cell(0, 2), priority: 0.9 },
            Zone { name: "bottom_center", rect: cell(1, 2), priority: 0.9 },
            Zone { name: "bottom_right", rect: cell(2, 2), priority: 0.9 },
        ]
    };
    zones.extend(edge_zones(panel_w, panel_h));
    zones
}

/// Thin bands along all four panel edges, present regardless of aspect
/// ratio. Useful overflow positions once the grid zones fill up.
fn edge_zones(panel_w: u32, panel_h: u32) -> Vec<Zone> {
    let band = (panel_w.min(panel_h) * 3 / 100).max(20);
    let (w, h) = (panel_w as i32, panel_h as i32);
    let b = band as i32;
    let span_w = panel_w.saturating_sub(2 * band).max(1);
    let span_h = panel_h.saturating_sub(2 * band).max(1);
    vec![
        Zone { name: "edge_top", rect: Rect::new(b, b / 2, span_w, band), priority: 0.8 },
        Zone { name: "edge_left", rect: Rect::new(b / 2, b, band, span_h), priority: 0.8 },
        Zone { name: "edge_right", rect: Rect::new(w - b * 3 / 2, b, band, span_h), priority: 0.8 },
        Zone { name: "edge_bottom", rect: Rect::new(b, h - b * 3 / 2, span_w, band), priority: 0.8 },
    ]
}

/// Per-kind zone affinity added onto the zone's base priority when
/// ranking candidates. Captions hug the horizontal center bands, sound
/// effects want the middle of the action, speech favors the corners.
pub fn kind_bonus(kind: BalloonKind, zone_name: &str) -> f32 {
    match kind {
        BalloonKind::Narration => match zone_name {
            "top_center" => 0.3,
            "bottom_center" => 0.25,
            _ => 0.0,
        },
        BalloonKind::SoundEffect => match zone_name {
            "mid_center" => 0.9,
            _ => 0.0,
        },
        BalloonKind::Speech | BalloonKind::Emphasis => match zone_name {
            "top_left" | "top_right" | "bottom_left" | "bottom_right" => 0.1,
            _ => 0.0,
        },
        BalloonKind::Thought => match zone_name {
            "top_left" | "top_right" => 0.15,
            _ => 0.0,
        },
    }
}
