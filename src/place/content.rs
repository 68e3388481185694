//! Content-aware placement: keeping balloons off the characters.

use image::RgbaImage;

use crate::geometry::Rect;

/// Locates character (or other must-not-cover) regions in panel
/// artwork. Implementations must be cheap enough to run once per panel.
///
/// The default [`NoopDetector`] finds nothing, which degrades placement
/// to the coarse zone grid. Plug in a real detector (edge density,
/// saliency, an ML model behind this trait) to get content-aware
/// placement.
pub trait CharacterDetector: Send + Sync {
    fn detect(&self, panel: &RgbaImage) -> Vec<Rect>;
}

/// Detector that never finds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDetector;

impl CharacterDetector for NoopDetector {
    fn detect(&self, _panel: &RgbaImage) -> Vec<Rect> {
        Vec::new()
    }
}

/// A candidate balloon position derived from a character region.
#[derive(Debug, Clone)]
pub struct SafeSpot {
    pub rect: Rect,
    pub score: f32,
}

/// Propose balloon positions flanking each detected region: above is
/// best, beside is good, below is a last resort. Candidates overlapping
/// a different region are penalized rather than discarded so a crowded
/// panel still yields something.
pub fn safe_spots(
    regions: &[Rect],
    panel_w: u32,
    panel_h: u32,
    balloon_w: u32,
    balloon_h: u32,
) -> Vec<SafeSpot> {
    const GAP: i32 = 10;
    let mut spots = Vec::new();

    for (i, region) in regions.iter().enumerate() {
        let (rcx, _) = region.center();
        let bw = balloon_w as i32;
        let candidates = [
            // Above the region, centered on it
            (Rect::new(rcx - bw / 2, region.y - balloon_h as i32 - GAP, balloon_w, balloon_h), 0.4),
            // Flanking left and right, top-aligned
            (Rect::new(region.x - bw - GAP, region.y, balloon_w, balloon_h), 0.3),
            (Rect::new(region.right() + GAP, region.y, balloon_w, balloon_h), 0.3),
            // Below, as a last resort
            (Rect::new(rcx - bw / 2, region.bottom() + GAP, balloon_w, balloon_h), 0.1),
        ];

        for (candidate, base) in candidates {
            let clamped = candidate.clamped_within(panel_w, panel_h, 5);
            let mut score = 0.5 + base;
            for (j, other) in regions.iter().enumerate() {
                if i != j && clamped.intersects(other) {
                    score -= 0.5;
                }
            }
            // Clamping that moved the candidate onto its own region is
            // worth less too.
            if clamped.intersects(region) {
                score -= 0.5;
            }
            spots.push(SafeSpot { rect: clamped, score });
        }
    }

    spots.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    spots
}
