//! # Page Layout
//!
//! Carves a page into panel slots. Counts with a registered template get
//! a hand-tuned asymmetric arrangement; everything else falls back to a
//! uniform grid. Layout is pure arithmetic — the same count and page
//! size always produce the same slots.

pub mod compose;

pub use compose::{Page, compose};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::VignetteError;

/// Largest panel count a single page will hold.
pub const MAX_PANELS: usize = 12;

/// One panel's pixel rectangle on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSlot {
    pub index: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A template: one `[x, y, w, h]` ratio rect per panel, all in [0, 1]
/// relative to the page's content area. Gutters are baked into the
/// ratios.
type Template = Vec<[f32; 4]>;

/// Hand-tuned templates keyed by panel count, with a uniform grid for
/// any count without one.
///
/// ## Example
///
/// ```
/// use vignette::layout::TemplateRegistry;
///
/// let registry = TemplateRegistry::builtin();
/// let slots = registry.layout(6, 1600, 2400).unwrap();
/// assert_eq!(slots.len(), 6);
/// ```
pub struct TemplateRegistry {
    templates: HashMap<usize, Template>,
}

impl TemplateRegistry {
    /// Registry with the built-in 3, 4, and 6 panel templates.
    pub fn builtin() -> Self {
        let mut templates = HashMap::new();
        // Full-width establishing strip over two panels
        templates.insert(3, vec![
            [0.0, 0.0, 1.0, 0.42],
            [0.0, 0.44, 0.48, 0.56],
            [0.52, 0.44, 0.48, 0.56],
        ]);
        // Off-center 2x2
        templates.insert(4, vec![
            [0.0, 0.0, 0.55, 0.48],
            [0.57, 0.0, 0.43, 0.48],
            [0.0, 0.52, 0.43, 0.48],
            [0.45, 0.52, 0.55, 0.48],
        ]);
        // Three rows of two, widths alternating for rhythm
        templates.insert(6, vec![
            [0.0, 0.0, 0.62, 0.32],
            [0.64, 0.0, 0.36, 0.32],
            [0.0, 0.34, 0.36, 0.30],
            [0.38, 0.34, 0.62, 0.30],
            [0.0, 0.66, 0.49, 0.34],
            [0.51, 0.66, 0.49, 0.34],
        ]);
        Self { templates }
    }

    /// Register (or replace) a template for a panel count. The template
    /// must hold exactly `count` rects with all ratios inside [0, 1].
    pub fn register(&mut self, count: usize, template: Template) -> Result<(), VignetteError> {
        if count == 0 || template.len() != count {
            return Err(VignetteError::InvalidPanelCount(count));
        }
        for [x, y, w, h] in &template {
            let ok = (0.0..=1.0).contains(x)
                && (0.0..=1.0).contains(y)
                && *w > 0.0
                && *h > 0.0
                && x + w <= 1.001
                && y + h <= 1.001;
            if !ok {
                return Err(VignetteError::PanelMismatch(format!(
                    "template rect [{x}, {y}, {w}, {h}] is outside the unit square"
                )));
            }
        }
        self.templates.insert(count, template);
        Ok(())
    }

    /// Lay out `panel_count` slots on a `page_w` x `page_h` page.
    pub fn layout(
        &self,
        panel_count: usize,
        page_w: u32,
        page_h: u32,
    ) -> Result<Vec<PanelSlot>, VignetteError> {
        if panel_count == 0 || panel_count > MAX_PANELS {
            return Err(VignetteError::InvalidPanelCount(panel_count));
        }
        if page_w == 0 || page_h == 0 {
            return Err(VignetteError::InvalidPageSize(page_w, page_h));
        }

        let margin = (page_w.min(page_h) as f32 * 0.02) as u32;
        let content_w = page_w.saturating_sub(2 * margin);
        let content_h = page_h.saturating_sub(2 * margin);

        let slots = match self.templates.get(&panel_count) {
            Some(template) => template
                .iter()
                .enumerate()
                .map(|(index, [rx, ry, rw, rh])| PanelSlot {
                    index,
                    x: margin + (rx * content_w as f32) as u32,
                    y: margin + (ry * content_h as f32) as u32,
                    width: (rw * content_w as f32) as u32,
                    height: (rh * content_h as f32) as u32,
                })
                .collect(),
            None => uniform_grid(panel_count, margin, content_w, content_h),
        };
        // A page too small to give every panel at least one pixel is as
        // unusable as a zero-sized one.
        if slots.iter().any(|s| s.width == 0 || s.height == 0) {
            return Err(VignetteError::InvalidPageSize(page_w, page_h));
        }
        Ok(slots)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Grid fallback: two columns up to four panels, three beyond.
fn uniform_grid(count: usize, margin: u32, content_w: u32, content_h: u32) -> Vec<PanelSlot> {
    let cols = if count <= 2 {
        count
    } else if count <= 4 {
        2
    } else {
        3
    };
    let rows = count.div_ceil(cols);
    let gutter = margin.max(4);
    let cell_w = content_w.saturating_sub(gutter * (cols as u32 - 1)) / cols as u32;
    let cell_h = content_h.saturating_sub(gutter * (rows as u32 - 1)) / rows as u32;

    (0..count)
        .map(|index| {
            let col = (index % cols) as u32;
            let row = (index / cols) as u32;
            PanelSlot {
                index,
                x: margin + col * (cell_w + gutter),
                y: margin + row * (cell_h + gutter),
                width: cell_w,
                height: cell_h,
            }
        })
        .collect()
}

/// Lay out with the built-in templates.
pub fn layout(
    panel_count: usize,
    page_w: u32,
    page_h: u32,
) -> Result<Vec<PanelSlot>, VignetteError> {
    TemplateRegistry::builtin().layout(panel_count, page_w, page_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use pretty_assertions::assert_eq;

    fn slot_rect(s: &PanelSlot) -> Rect {
        Rect::new(s.x as i32, s.y as i32, s.width, s.height)
    }

    fn assert_disjoint_and_contained(slots: &[PanelSlot], page_w: u32, page_h: u32) {
        let page = Rect::new(0, 0, page_w, page_h);
        for s in slots {
            assert!(page.contains(&slot_rect(s)), "slot {s:?} escapes the page");
            assert!(s.width > 0 && s.height > 0);
        }
        for a in slots {
            for b in slots {
                if a.index != b.index {
                    assert!(
                        !slot_rect(a).intersects(&slot_rect(b)),
                        "slots {} and {} overlap",
                        a.index,
                        b.index
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_panels_rejected() {
        assert!(matches!(layout(0, 1000, 1000), Err(VignetteError::InvalidPanelCount(0))));
    }

    #[test]
    fn test_too_many_panels_rejected() {
        assert!(matches!(layout(13, 1000, 1000), Err(VignetteError::InvalidPanelCount(13))));
    }

    #[test]
    fn test_zero_page_rejected() {
        assert!(matches!(layout(4, 0, 1000), Err(VignetteError::InvalidPageSize(0, 1000))));
    }

    #[test]
    fn test_tiny_page_rejected_without_panic() {
        // Gutters alone would eat these pages whole; no panel can get a
        // pixel, so the page size is rejected rather than underflowing.
        for count in 1..=MAX_PANELS {
            for (w, h) in [(6u32, 6u32), (3, 3), (1, 8)] {
                match layout(count, w, h) {
                    Ok(slots) => {
                        assert!(slots.iter().all(|s| s.width > 0 && s.height > 0));
                    }
                    Err(VignetteError::InvalidPageSize(ew, eh)) => {
                        assert_eq!((ew, eh), (w, h));
                    }
                    Err(other) => panic!("unexpected error for {count} panels: {other}"),
                }
            }
        }
    }

    #[test]
    fn test_every_count_lays_out_cleanly() {
        for count in 1..=MAX_PANELS {
            let slots = layout(count, 1600, 2400).unwrap();
            assert_eq!(slots.len(), count);
            assert_eq!(slots.iter().map(|s| s.index).collect::<Vec<_>>(), (0..count).collect::<Vec<_>>());
            assert_disjoint_and_contained(&slots, 1600, 2400);
        }
    }

    #[test]
    fn test_six_panel_template_is_asymmetric() {
        let slots = layout(6, 1600, 2400).unwrap();
        // Row one: wide panel next to narrow
        assert!(slots[0].width > slots[1].width);
        // Row two flips the rhythm
        assert!(slots[2].width < slots[3].width);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let a = layout(6, 1234, 987).unwrap();
        let b = layout(6, 1234, 987).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_template_registration() {
        let mut registry = TemplateRegistry::builtin();
        registry
            .register(2, vec![[0.0, 0.0, 1.0, 0.48], [0.0, 0.52, 1.0, 0.48]])
            .unwrap();
        let slots = registry.layout(2, 1000, 1000).unwrap();
        assert_eq!(slots[0].width, slots[1].width);
        assert_disjoint_and_contained(&slots, 1000, 1000);
    }

    #[test]
    fn test_bad_template_rejected() {
        let mut registry = TemplateRegistry::builtin();
        assert!(registry.register(2, vec![[0.0, 0.0, 1.5, 0.5], [0.0, 0.5, 1.0, 0.5]]).is_err());
        assert!(registry.register(3, vec![[0.0, 0.0, 1.0, 1.0]]).is_err());
    }

    #[test]
    fn test_slots_serialize_stably() {
        let slots = layout(6, 1600, 2400).unwrap();
        let a = serde_json::to_string(&slots).unwrap();
        let b = serde_json::to_string(&layout(6, 1600, 2400).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
