//! Page composition: pasting panel images into their slots.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::error::VignetteError;
use crate::geometry::Rect;
use crate::raster;

use super::PanelSlot;

const PAGE_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BORDER_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const BORDER_WIDTH: u32 = 3;

/// A finished page: the rendered image plus the slots it was built from,
/// so callers can map page coordinates back to panels.
#[derive(Debug)]
pub struct Page {
    pub image: RgbaImage,
    pub slots: Vec<PanelSlot>,
}

/// Paste `panels` into `slots` on a white page and ink the borders.
///
/// Panels are stretched to their slot's exact size, aspect ratio not
/// preserved; upstream is expected to render panels near their slot's
/// aspect. Panel count must match slot count.
pub fn compose(
    slots: &[PanelSlot],
    panels: &[RgbaImage],
    page_w: u32,
    page_h: u32,
) -> Result<Page, VignetteError> {
    if slots.len() != panels.len() {
        return Err(VignetteError::PanelMismatch(format!(
            "{} slots but {} panel images",
            slots.len(),
            panels.len()
        )));
    }
    if page_w == 0 || page_h == 0 {
        return Err(VignetteError::InvalidPageSize(page_w, page_h));
    }

    let mut page = RgbaImage::from_pixel(page_w, page_h, PAGE_BACKGROUND);

    for (slot, panel) in slots.iter().zip(panels) {
        let sized = if panel.width() == slot.width && panel.height() == slot.height {
            panel.clone()
        } else {
            imageops::resize(panel, slot.width, slot.height, FilterType::Lanczos3)
        };
        imageops::overlay(&mut page, &sized, slot.x as i64, slot.y as i64);
        raster::stroke_rect(
            &mut page,
            Rect::new(slot.x as i32, slot.y as i32, slot.width, slot.height),
            BORDER_COLOR,
            BORDER_WIDTH,
        );
    }

    Ok(Page { image: page, slots: slots.to_vec() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;

    fn solid(w: u32, h: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(w, h, color)
    }

    #[test]
    fn test_compose_matches_target_size() {
        let slots = layout(4, 800, 1200).unwrap();
        let panels: Vec<RgbaImage> =
            (0..4).map(|_| solid(512, 512, Rgba([100, 150, 200, 255]))).collect();
        let page = compose(&slots, &panels, 800, 1200).unwrap();
        assert_eq!(page.image.dimensions(), (800, 1200));
    }

    #[test]
    fn test_mismatched_counts_rejected() {
        let slots = layout(4, 800, 1200).unwrap();
        let panels = vec![solid(64, 64, Rgba([0, 0, 0, 255])); 3];
        assert!(matches!(
            compose(&slots, &panels, 800, 1200),
            Err(VignetteError::PanelMismatch(_))
        ));
    }

    #[test]
    fn test_panel_interior_shows_panel_color() {
        let slots = layout(1, 600, 600).unwrap();
        let red = Rgba([200, 30, 30, 255]);
        let page = compose(&slots, &[solid(100, 100, red)], 600, 600).unwrap();
        let slot = &page.slots[0];
        let (cx, cy) = (slot.x + slot.width / 2, slot.y + slot.height / 2);
        assert_eq!(*page.image.get_pixel(cx, cy), red);
    }

    #[test]
    fn test_borders_are_inked() {
        let slots = layout(1, 600, 600).unwrap();
        let page = compose(&slots, &[solid(64, 64, Rgba([250, 250, 250, 255]))], 600, 600).unwrap();
        let slot = &page.slots[0];
        assert_eq!(*page.image.get_pixel(slot.x, slot.y), BORDER_COLOR);
        assert_eq!(
            *page.image.get_pixel(slot.x + slot.width - 1, slot.y + slot.height - 1),
            BORDER_COLOR
        );
    }

    #[test]
    fn test_background_outside_slots_is_white() {
        let slots = layout(2, 600, 600).unwrap();
        let panels = vec![solid(64, 64, Rgba([0, 0, 0, 255])); 2];
        let page = compose(&slots, &panels, 600, 600).unwrap();
        assert_eq!(*page.image.get_pixel(0, 0), PAGE_BACKGROUND);
    }
}
