//! Collision resolution between balloons sharing a panel.
//!
//! Balloons are committed one at a time in dialogue order; each new
//! candidate is nudged until it clears everything already committed,
//! with a size-scaled breathing margin so balloons never sit flush
//! against each other.

use crate::geometry::Rect;

/// Offsets tried around a colliding candidate, nearest first.
const NUDGES: [(i32, i32); 12] = [
    (0, -60),
    (0, 60),
    (80, 0),
    (-80, 0),
    (80, -60),
    (-80, -60),
    (80, 60),
    (-80, 60),
    (0, -120),
    (0, 120),
    (160, 0),
    (-160, 0),
];

/// Tracks committed balloon rects within one panel and finds clear
/// positions for newcomers.
pub struct CollisionResolver {
    panel_w: u32,
    panel_h: u32,
    placed: Vec<Rect>,
    exhausted: usize,
}

impl CollisionResolver {
    pub fn new(panel_w: u32, panel_h: u32) -> Self {
        Self { panel_w, panel_h, placed: Vec::new(), exhausted: 0 }
    }

    /// Rects committed so far, in commit order.
    pub fn placed(&self) -> &[Rect] {
        &self.placed
    }

    /// How many balloons had to be committed overlapping because every
    /// candidate position was taken.
    pub fn exhausted(&self) -> usize {
        self.exhausted
    }

    /// Breathing room required between two balloons: at least 40x30
    /// pixels, growing to 10% of their combined size for big balloons.
    fn gaps(a: &Rect, b: &Rect) -> (i32, i32) {
        let gx = (((a.w + b.w) as f32 * 0.1) as i32).max(40);
        let gy = (((a.h + b.h) as f32 * 0.1) as i32).max(30);
        (gx, gy)
    }

    fn clear(&self, candidate: &Rect) -> bool {
        self.placed.iter().all(|p| {
            let (gx, gy) = Self::gaps(candidate, p);
            !candidate.intersects_with_margin(p, gx, gy)
        })
    }

    fn in_panel(&self, candidate: &Rect) -> bool {
        Rect::new(0, 0, self.panel_w, self.panel_h).contains(candidate)
    }

    /// Find a clear position for `candidate`, commit it, and return the
    /// final rect. Search order: the candidate itself, nearby nudges,
    /// then corner and edge-midpoint emergency positions. If everything
    /// is taken the candidate is committed overlapping (and counted in
    /// [`exhausted`](Self::exhausted)) — dropping dialogue is worse than
    /// crowding it.
    pub fn resolve(&mut self, candidate: Rect) -> Rect {
        let candidate = candidate.clamped_within(self.panel_w, self.panel_h, 5);
        if self.clear(&candidate) && self.in_panel(&candidate) {
            self.placed.push(candidate);
            return candidate;
        }

        for (dx, dy) in NUDGES {
            let nudged = Rect::new(candidate.x + dx, candidate.y + dy, candidate.w, candidate.h)
                .clamped_within(self.panel_w, self.panel_h, 5);
            if self.clear(&nudged) && self.in_panel(&nudged) {
                self.placed.push(nudged);
                return nudged;
            }
        }

        for spot in self.emergency_positions(candidate.w, candidate.h) {
            if self.clear(&spot) && self.in_panel(&spot) {
                log::debug!("balloon pushed to emergency position ({}, {})", spot.x, spot.y);
                self.placed.push(spot);
                return spot;
            }
        }

        log::warn!("collision search exhausted; committing overlapping balloon");
        self.exhausted += 1;
        self.placed.push(candidate);
        candidate
    }

    /// Corners first, then edge midpoints, all inset 10px.
    fn emergency_positions(&self, w: u32, h: u32) -> Vec<Rect> {
        let (pw, ph) = (self.panel_w as i32, self.panel_h as i32);
        let (bw, bh) = (w as i32, h as i32);
        [
            (10, 10),
            (pw - bw - 10, 10),
            (10, ph - bh - 10),
            (pw - bw - 10, ph - bh - 10),
            ((pw - bw) / 2, 10),
            ((pw - bw) / 2, ph - bh - 10),
            (10, (ph - bh) / 2),
            (pw - bw - 10, (ph - bh) / 2),
        ]
        .into_iter()
        .map(|(x, y)| Rect::new(x, y, w, h).clamped_within(self.panel_w, self.panel_h, 5))
        .collect()
    }
}
