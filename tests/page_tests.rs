//! # Page Assembly Tests
//!
//! End-to-end coverage of the pipeline: layout, balloon decoration, and
//! composition. A counting renderer stands in for the raster backend
//! where the test cares about *which* balloons get drawn rather than
//! their pixels.

use std::sync::{Arc, Mutex};

use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use vignette::dialogue::{BalloonKind, DialogueLine, Emotion};
use vignette::geometry::Rect;
use vignette::layout::{self, TemplateRegistry};
use vignette::page::{BalloonRenderer, PageAssembler, PanelInput, PlacedBalloon};

#[derive(Debug, Clone, Copy, PartialEq)]
enum DrawTag {
    Silhouetted,
    Bare,
}

/// Renderer that records every draw call instead of painting. Clones
/// share the same call log.
#[derive(Default, Clone)]
struct CountingRenderer {
    calls: Arc<Mutex<Vec<(Rect, DrawTag)>>>,
}

impl CountingRenderer {
    fn calls(&self) -> Vec<(Rect, DrawTag)> {
        self.calls.lock().unwrap().clone()
    }
}

impl BalloonRenderer for CountingRenderer {
    fn draw(&self, _canvas: &mut RgbaImage, balloon: &PlacedBalloon) {
        let tag = if balloon.style.silhouette.is_some() {
            DrawTag::Silhouetted
        } else {
            DrawTag::Bare
        };
        self.calls.lock().unwrap().push((balloon.rect, tag));
    }
}

fn solid_panel() -> RgbaImage {
    RgbaImage::from_pixel(512, 512, Rgba([120, 120, 140, 255]))
}

fn two_line_panel() -> PanelInput {
    PanelInput::new(
        solid_panel(),
        vec![
            DialogueLine::spoken_by("Mina", "We should not be here."),
            DialogueLine::speech("Too late for that now."),
        ],
    )
}

#[test]
fn test_six_panels_two_lines_each_draws_twelve_balloons() {
    let counter = CountingRenderer::default();
    let panels: Vec<PanelInput> = (0..6).map(|_| two_line_panel()).collect();

    let page = PageAssembler::new()
        .with_renderer(Box::new(counter.clone()))
        .assemble(panels, 1600, 2400)
        .unwrap();

    assert_eq!(page.slots.len(), 6);
    assert_eq!(counter.calls().len(), 12);
}

#[test]
fn test_blank_dialogue_draws_no_balloons() {
    let counter = CountingRenderer::default();
    let panels = vec![PanelInput::new(
        solid_panel(),
        vec![DialogueLine::speech(""), DialogueLine::speech("   ")],
    )];

    PageAssembler::new()
        .with_renderer(Box::new(counter.clone()))
        .assemble(panels, 800, 800)
        .unwrap();

    assert_eq!(counter.calls().len(), 0);
}

#[test]
fn test_balloons_stay_inside_their_panels() {
    let counter = CountingRenderer::default();
    let panels: Vec<PanelInput> = (0..6).map(|_| two_line_panel()).collect();

    let page = PageAssembler::new()
        .with_renderer(Box::new(counter.clone()))
        .assemble(panels, 1600, 2400)
        .unwrap();

    // Balloon rects are in panel-local coordinates; each must fit its slot.
    for (rect, _) in counter.calls() {
        let fits_some_slot = page
            .slots
            .iter()
            .any(|s| Rect::new(0, 0, s.width, s.height).contains(&rect));
        assert!(fits_some_slot, "balloon {rect:?} does not fit any panel slot");
    }
}

#[test]
fn test_sound_effects_render_bare() {
    let counter = CountingRenderer::default();
    let panels = vec![PanelInput::new(
        solid_panel(),
        vec![
            DialogueLine::speech("KRAKOOM").kind(BalloonKind::SoundEffect),
            DialogueLine::speech("What was that?"),
        ],
    )];

    PageAssembler::new()
        .with_renderer(Box::new(counter.clone()))
        .assemble(panels, 800, 800)
        .unwrap();

    let calls = counter.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().any(|(_, tag)| *tag == DrawTag::Bare));
    assert!(calls.iter().any(|(_, tag)| *tag == DrawTag::Silhouetted));
}

#[test]
fn test_page_size_matches_target() {
    for (w, h) in [(800u32, 1200u32), (1600, 2400), (1000, 1000)] {
        let panels: Vec<PanelInput> =
            (0..4).map(|_| PanelInput::art_only(solid_panel())).collect();
        let page = PageAssembler::new().assemble(panels, w, h).unwrap();
        assert_eq!(page.image.dimensions(), (w, h));
    }
}

#[test]
fn test_assembly_is_idempotent() {
    let build = || {
        let panels: Vec<PanelInput> = (0..6).map(|_| two_line_panel()).collect();
        PageAssembler::new().assemble(panels, 1200, 1800).unwrap()
    };
    let a = build();
    let b = build();
    assert_eq!(a.image.as_raw(), b.image.as_raw(), "identical inputs must render identical pages");
    assert_eq!(
        serde_json::to_string(&a.slots).unwrap(),
        serde_json::to_string(&b.slots).unwrap()
    );
}

#[test]
fn test_all_kinds_and_emotions_render() {
    let dialogue = vec![
        DialogueLine::spoken_by("Jo", "Quiet now.").emotion(Emotion::Whispering),
        DialogueLine::speech("RUN!").kind(BalloonKind::Emphasis).emotion(Emotion::Shouting),
        DialogueLine::speech("Is this wise?").kind(BalloonKind::Thought),
        DialogueLine::speech("Meanwhile, uptown...").kind(BalloonKind::Narration),
    ];
    let page = PageAssembler::new()
        .assemble(vec![PanelInput::new(solid_panel(), dialogue)], 900, 900)
        .unwrap();
    assert_eq!(page.image.dimensions(), (900, 900));
}

#[test]
fn test_custom_template_flows_through_assembly() {
    let mut registry = TemplateRegistry::builtin();
    registry
        .register(2, vec![[0.0, 0.0, 1.0, 0.48], [0.0, 0.52, 1.0, 0.48]])
        .unwrap();

    let panels: Vec<PanelInput> = (0..2).map(|_| PanelInput::art_only(solid_panel())).collect();
    let page = PageAssembler::new()
        .with_registry(registry)
        .assemble(panels, 1000, 1500)
        .unwrap();

    assert_eq!(page.slots.len(), 2);
    assert_eq!(page.slots[0].width, page.slots[1].width);
}

#[test]
fn test_six_slot_layout_covers_page_without_overlap() {
    for (w, h) in [(1600u32, 2400u32), (1200, 1200), (2480, 3508)] {
        let slots = layout::layout(6, w, h).unwrap();
        let page = Rect::new(0, 0, w, h);
        for a in &slots {
            let ra = Rect::new(a.x as i32, a.y as i32, a.width, a.height);
            assert!(page.contains(&ra));
            for b in &slots {
                if a.index == b.index {
                    continue;
                }
                let rb = Rect::new(b.x as i32, b.y as i32, b.width, b.height);
                assert!(!ra.intersects(&rb), "slots {} and {} overlap at {w}x{h}", a.index, b.index);
            }
        }
    }
}
