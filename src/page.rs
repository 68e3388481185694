//! # Page Assembly
//!
//! The top of the pipeline: takes panel artwork plus dialogue, letters
//! and places balloons per panel, and composes everything into one page.
//!
//! Balloon drawing goes through the [`BalloonRenderer`] trait so tests
//! (and alternative backends) can observe or replace the actual
//! painting; [`RasterBalloonRenderer`] is the default.

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::balloon::{BalloonShape, BalloonStyle};
use crate::dialogue::DialogueLine;
use crate::error::VignetteError;
use crate::font::{FontResolver, ResolvedFont};
use crate::geometry::{Anchor, Rect};
use crate::layout::{Page, TemplateRegistry, compose};
use crate::place::{CharacterDetector, CollisionResolver, NoopDetector, PanelPlacer};
use crate::text::{block_width, fit};

/// Smallest font size the sizer will shrink to.
const MIN_FONT_SIZE: u32 = 12;
/// A balloon may take at most this fraction of its panel's width.
const MAX_WIDTH_FRACTION: f32 = 0.35;
/// And at most this fraction of its panel's height.
const MAX_HEIGHT_FRACTION: f32 = 0.3;

/// One panel's inputs: artwork plus the dialogue spoken in it.
pub struct PanelInput {
    pub image: RgbaImage,
    pub dialogue: Vec<DialogueLine>,
}

impl PanelInput {
    /// Panel with no dialogue at all.
    pub fn art_only(image: RgbaImage) -> Self {
        Self { image, dialogue: Vec::new() }
    }

    pub fn new(image: RgbaImage, dialogue: Vec<DialogueLine>) -> Self {
        Self { image, dialogue }
    }
}

/// A fully decided balloon, ready to paint: wrapped lines, final rect in
/// panel coordinates, tail anchor, style, and the resolved font.
pub struct PlacedBalloon {
    pub lines: Vec<String>,
    pub rect: Rect,
    pub anchor: Anchor,
    pub style: BalloonStyle,
    pub font: ResolvedFont,
}

/// Paints placed balloons onto panel canvases.
pub trait BalloonRenderer: Send + Sync {
    fn draw(&self, canvas: &mut RgbaImage, balloon: &PlacedBalloon);
}

/// Default renderer: silhouette, tail, and lettering via the raster
/// primitives.
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterBalloonRenderer;

impl BalloonRenderer for RasterBalloonRenderer {
    fn draw(&self, canvas: &mut RgbaImage, balloon: &PlacedBalloon) {
        balloon.style.render(
            canvas,
            balloon.rect,
            balloon.anchor,
            &balloon.lines,
            &balloon.font,
        );
    }
}

/// Assembles finished comic pages from panel inputs.
///
/// ## Example
///
/// ```no_run
/// use image::RgbaImage;
/// use vignette::dialogue::DialogueLine;
/// use vignette::page::{PageAssembler, PanelInput};
///
/// let panels = vec![
///     PanelInput::new(RgbaImage::new(512, 512), vec![DialogueLine::speech("Hello!")]),
///     PanelInput::art_only(RgbaImage::new(512, 512)),
/// ];
/// let page = PageAssembler::new().assemble(panels, 1600, 2400).unwrap();
/// page.image.save("page.png").unwrap();
/// ```
pub struct PageAssembler {
    resolver: FontResolver,
    detector: Box<dyn CharacterDetector>,
    renderer: Box<dyn BalloonRenderer>,
    registry: TemplateRegistry,
}

impl PageAssembler {
    pub fn new() -> Self {
        Self {
            resolver: FontResolver::new(),
            detector: Box::new(NoopDetector),
            renderer: Box::new(RasterBalloonRenderer),
            registry: TemplateRegistry::builtin(),
        }
    }

    /// Swap in a character detector for content-aware placement.
    pub fn with_detector(mut self, detector: Box<dyn CharacterDetector>) -> Self {
        self.detector = detector;
        self
    }

    /// Swap in a balloon renderer.
    pub fn with_renderer(mut self, renderer: Box<dyn BalloonRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Use a pre-configured font resolver (registered TTF fonts).
    pub fn with_resolver(mut self, resolver: FontResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Use a custom layout template registry.
    pub fn with_registry(mut self, registry: TemplateRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Assemble one page. Panels are resized to their slots, decorated
    /// with balloons, and composed with inked borders. Identical inputs
    /// produce identical pages.
    pub fn assemble(
        &mut self,
        panels: Vec<PanelInput>,
        page_w: u32,
        page_h: u32,
    ) -> Result<Page, VignetteError> {
        let slots = self.registry.layout(panels.len(), page_w, page_h)?;

        let mut decorated = Vec::with_capacity(panels.len());
        for (slot, panel) in slots.iter().zip(panels) {
            let mut canvas =
                if panel.image.width() == slot.width && panel.image.height() == slot.height {
                    panel.image
                } else {
                    imageops::resize(&panel.image, slot.width, slot.height, FilterType::Lanczos3)
                };
            self.decorate(&mut canvas, &panel.dialogue);
            decorated.push(canvas);
        }

        compose(&slots, &decorated, page_w, page_h)
    }

    /// Letter and place every balloon for one panel, in dialogue order.
    fn decorate(&mut self, canvas: &mut RgbaImage, dialogue: &[DialogueLine]) {
        if dialogue.is_empty() {
            return;
        }
        let (pw, ph) = canvas.dimensions();
        let mut placer = PanelPlacer::new(canvas, self.detector.as_ref());
        let mut collider = CollisionResolver::new(pw, ph);

        for line in dialogue {
            let text = line.display_text();
            if text.trim().is_empty() {
                log::debug!("skipping blank dialogue line");
                continue;
            }
            let style = BalloonStyle::for_kind(line.kind).apply_emotion(line.emotion);

            let pad = style.padding;
            let text_w_cap = ((pw as f32 * MAX_WIDTH_FRACTION) as u32)
                .saturating_sub(2 * pad)
                .max(40);
            let text_h_cap = ((ph as f32 * MAX_HEIGHT_FRACTION) as u32)
                .saturating_sub(2 * pad)
                .max(20);

            let fitted = fit(
                &text,
                style.font_role,
                style.font_size,
                text_w_cap,
                text_h_cap,
                MIN_FONT_SIZE,
                style.line_spacing,
                &mut self.resolver,
            );
            if fitted.overflowed {
                log::warn!("dialogue overflows its balloon even at minimum size: {text:?}");
            }

            let text_w = block_width(&fitted.font, &fitted.lines);
            let text_h =
                crate::text::block_height(&fitted.font, fitted.lines.len(), style.line_spacing);
            let (bw, bh) = balloon_extent(&style, text_w, text_h);

            let proposal = placer.propose(line.kind, bw, bh, line.anchor_hint);
            let rect = collider.resolve(proposal.rect);

            let placed = PlacedBalloon {
                lines: fitted.lines,
                rect,
                anchor: proposal.anchor,
                style,
                font: fitted.font,
            };
            self.renderer.draw(canvas, &placed);
        }

        if collider.exhausted() > 0 {
            log::warn!(
                "{} balloon(s) committed overlapping in a crowded panel",
                collider.exhausted()
            );
        }
    }
}

impl Default for PageAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Balloon size for a text block. Curved silhouettes need slack beyond
/// the padding so the block stays inside the inscribed shape.
fn balloon_extent(style: &BalloonStyle, text_w: u32, text_h: u32) -> (u32, u32) {
    let slack = match style.silhouette {
        Some(BalloonShape::Ellipse | BalloonShape::Cloud | BalloonShape::Jagged) => 1.35,
        _ => 1.0,
    };
    let w = (text_w as f32 * slack) as u32 + 2 * style.padding;
    let h = (text_h as f32 * slack) as u32 + 2 * style.padding;
    (w.max(60), h.max(40))
}
