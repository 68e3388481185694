//! Shared geometry types for panel and balloon placement.
//!
//! All placement math works on axis-aligned [`Rect`]s in panel or page
//! pixel space. Positions are signed so candidate rects may temporarily
//! sit outside the panel while being nudged back in.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with a signed origin and unsigned size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    /// Center point, rounded toward the origin.
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w as i32 / 2, self.y + self.h as i32 / 2)
    }

    /// Strict intersection test (touching edges do not count).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Intersection test with an extra gap required between the rects.
    ///
    /// Two rects "collide" if they come within `gap_x`/`gap_y` pixels of
    /// each other on the respective axis.
    pub fn intersects_with_margin(&self, other: &Rect, gap_x: i32, gap_y: i32) -> bool {
        !(self.right() + gap_x < other.x
            || other.right() + gap_x < self.x
            || self.bottom() + gap_y < other.y
            || other.bottom() + gap_y < self.y)
    }

    /// Whether `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Move the origin so the rect fits within `bounds_w` x `bounds_h`,
    /// keeping at least `margin` pixels from every edge when possible.
    pub fn clamped_within(&self, bounds_w: u32, bounds_h: u32, margin: i32) -> Rect {
        let max_x = bounds_w as i32 - self.w as i32 - margin;
        let max_y = bounds_h as i32 - self.h as i32 - margin;
        Rect {
            x: self.x.min(max_x).max(margin),
            y: self.y.min(max_y).max(margin),
            w: self.w,
            h: self.h,
        }
    }
}

/// The side of a balloon its tail points toward, or the named side of a
/// placement zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}
