//! # Placement
//!
//! Decides where each balloon goes inside its panel. Placement is
//! content-aware when a [`CharacterDetector`] finds regions to avoid,
//! and falls back to a priority-weighted zone grid otherwise. Collisions
//! between balloons are resolved afterwards by [`CollisionResolver`].

pub mod collision;
pub mod content;
pub mod zones;

pub use collision::CollisionResolver;
pub use content::{CharacterDetector, NoopDetector};
pub use zones::{Zone, standard_zones};

use image::RgbaImage;

use crate::dialogue::BalloonKind;
use crate::geometry::{Anchor, Rect};

/// A proposed balloon position with the tail anchor it implies.
#[derive(Debug, Clone, Copy)]
pub struct Proposal {
    pub rect: Rect,
    pub anchor: Anchor,
}

/// Per-panel placement state. Character detection runs once at
/// construction; each [`propose`](Self::propose) call then picks the
/// best remaining position for one balloon.
pub struct PanelPlacer {
    panel_w: u32,
    panel_h: u32,
    regions: Vec<Rect>,
    zones: Vec<Zone>,
    used_zones: Vec<&'static str>,
}

impl PanelPlacer {
    pub fn new(panel: &RgbaImage, detector: &dyn CharacterDetector) -> Self {
        let regions = detector.detect(panel);
        if !regions.is_empty() {
            log::debug!("detector found {} region(s) to avoid", regions.len());
        }
        Self {
            panel_w: panel.width(),
            panel_h: panel.height(),
            regions,
            zones: standard_zones(panel.width(), panel.height()),
            used_zones: Vec::new(),
        }
    }

    /// Propose a position for a balloon of the given size. Content-aware
    /// spots win when regions were detected; otherwise the best unused
    /// zone is taken. An explicit `hint` overrides the derived anchor.
    pub fn propose(
        &mut self,
        kind: BalloonKind,
        balloon_w: u32,
        balloon_h: u32,
        hint: Option<Anchor>,
    ) -> Proposal {
        let derived = self
            .propose_content_aware(balloon_w, balloon_h)
            .unwrap_or_else(|| self.propose_from_zones(kind, balloon_w, balloon_h));
        Proposal {
            rect: derived.rect,
            anchor: hint.unwrap_or(derived.anchor),
        }
    }

    fn propose_content_aware(&self, balloon_w: u32, balloon_h: u32) -> Option<Proposal> {
        let spots = content::safe_spots(
            &self.regions,
            self.panel_w,
            self.panel_h,
            balloon_w,
            balloon_h,
        );
        let best = spots.first()?;
        let region = self.nearest_region(&best.rect)?;
        Some(Proposal {
            rect: best.rect,
            anchor: anchor_toward(&best.rect, &region),
        })
    }

    fn propose_from_zones(&mut self, kind: BalloonKind, balloon_w: u32, balloon_h: u32) -> Proposal {
        let mut ranked: Vec<&Zone> = self.zones.iter().collect();
        ranked.sort_by(|a, b| {
            let sa = a.priority + zones::kind_bonus(kind, a.name);
            let sb = b.priority + zones::kind_bonus(kind, b.name);
            sb.partial_cmp(&sa).unwrap_or(std::cmp::Ordering::Equal)
        });

        let zone = ranked
            .iter()
            .find(|z| !self.used_zones.contains(&z.name))
            .or(ranked.first())
            .copied()
            .expect("zone grid is never empty");

        self.used_zones.push(zone.name);
        let (zcx, zcy) = zone.rect.center();
        let rect = Rect::new(
            zcx - balloon_w as i32 / 2,
            zcy - balloon_h as i32 / 2,
            balloon_w,
            balloon_h,
        )
        .clamped_within(self.panel_w, self.panel_h, 5);
        Proposal { rect, anchor: zone.anchor() }
    }

    fn nearest_region(&self, rect: &Rect) -> Option<Rect> {
        let (cx, cy) = rect.center();
        self.regions
            .iter()
            .min_by_key(|r| {
                let (rx, ry) = r.center();
                let (dx, dy) = ((rx - cx) as i64, (ry - cy) as i64);
                dx * dx + dy * dy
            })
            .copied()
    }
}

/// Anchor that makes a balloon's tail point toward `region`. Picks the
/// dominant axis of separation between the two centers.
fn anchor_toward(balloon: &Rect, region: &Rect) -> Anchor {
    let (bx, by) = balloon.center();
    let (rx, ry) = region.center();
    let (dx, dy) = (rx - bx, ry - by);
    if dy.abs() >= dx.abs() {
        if dy >= 0 { Anchor::Bottom } else { Anchor::Top }
    } else if dx >= 0 {
        Anchor::Right
    } else {
        Anchor::Left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDetector(Vec<Rect>);

    impl CharacterDetector for FixedDetector {
        fn detect(&self, _panel: &RgbaImage) -> Vec<Rect> {
            self.0.clone()
        }
    }

    fn blank_panel() -> RgbaImage {
        RgbaImage::new(600, 600)
    }

    #[test]
    fn test_noop_detector_falls_back_to_zones() {
        let panel = blank_panel();
        let mut placer = PanelPlacer::new(&panel, &NoopDetector);
        let p = placer.propose(BalloonKind::Speech, 150, 80, None);
        let bounds = Rect::new(0, 0, 600, 600);
        assert!(bounds.contains(&p.rect));
    }

    #[test]
    fn test_successive_proposals_take_different_zones() {
        let panel = blank_panel();
        let mut placer = PanelPlacer::new(&panel, &NoopDetector);
        let a = placer.propose(BalloonKind::Speech, 120, 60, None);
        let b = placer.propose(BalloonKind::Speech, 120, 60, None);
        assert_ne!((a.rect.x, a.rect.y), (b.rect.x, b.rect.y));
    }

    #[test]
    fn test_detected_region_is_avoided() {
        let region = Rect::new(250, 250, 100, 200);
        let panel = blank_panel();
        let mut placer = PanelPlacer::new(&panel, &FixedDetector(vec![region]));
        let p = placer.propose(BalloonKind::Speech, 140, 70, None);
        assert!(!p.rect.intersects(&region), "balloon {:?} covers the character", p.rect);
    }

    #[test]
    fn test_anchor_points_toward_region() {
        let region = Rect::new(250, 300, 100, 200);
        let panel = blank_panel();
        let mut placer = PanelPlacer::new(&panel, &FixedDetector(vec![region]));
        let p = placer.propose(BalloonKind::Speech, 140, 70, None);
        // Best spot sits above the region, so the tail points down.
        assert_eq!(p.anchor, Anchor::Bottom);
    }

    #[test]
    fn test_hint_overrides_anchor() {
        let panel = blank_panel();
        let mut placer = PanelPlacer::new(&panel, &NoopDetector);
        let p = placer.propose(BalloonKind::Speech, 120, 60, Some(Anchor::Left));
        assert_eq!(p.anchor, Anchor::Left);
    }

    #[test]
    fn test_sound_effect_lands_center() {
        let panel = blank_panel();
        let mut placer = PanelPlacer::new(&panel, &NoopDetector);
        let p = placer.propose(BalloonKind::SoundEffect, 100, 60, None);
        let (cx, cy) = p.rect.center();
        assert!((cx - 300).abs() < 120 && (cy - 300).abs() < 120);
    }
}
