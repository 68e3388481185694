//! # Balloons
//!
//! Visual styling and rendering of dialogue balloons: silhouette shapes,
//! tails, and lettering. A [`BalloonStyle`] bundles everything needed to
//! paint one balloon; defaults per [`BalloonKind`] match house comic
//! conventions (white ellipse speech, cloud thoughts, parchment
//! captions, jagged shouts, bare shadowed sound effects).

pub mod lettering;
pub mod shape;
pub mod tail;

pub use shape::BalloonShape;
pub use tail::TailKind;

use image::{Rgba, RgbaImage};

use crate::dialogue::{BalloonKind, Emotion};
use crate::font::{FontRole, ResolvedFont};
use crate::geometry::{Anchor, Rect};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Everything needed to paint one balloon: silhouette, tail, padding,
/// and lettering parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct BalloonStyle {
    /// Silhouette to draw behind the text, or `None` for bare lettering.
    pub silhouette: Option<BalloonShape>,
    pub fill: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub outline_width: u32,
    /// Corner radius for rounded-rect and whisper silhouettes.
    pub corner_radius: u32,
    pub tail: TailKind,
    /// Tail reach in pixels from the balloon edge.
    pub tail_size: u32,
    /// Padding between the silhouette edge and the text block.
    pub padding: u32,
    pub font_role: FontRole,
    /// Starting font size; the sizer may shrink from here.
    pub font_size: u32,
    pub line_spacing: u32,
    pub text_color: Rgba<u8>,
    /// Ring color and width stamped around sound-effect glyphs.
    pub glyph_outline: Option<(Rgba<u8>, u32)>,
    /// Drop-shadow color for sound-effect glyphs.
    pub shadow: Option<Rgba<u8>>,
}

impl BalloonStyle {
    /// House default style for a balloon kind.
    pub fn for_kind(kind: BalloonKind) -> Self {
        let base = Self {
            silhouette: Some(BalloonShape::Ellipse),
            fill: WHITE,
            outline: BLACK,
            outline_width: 3,
            corner_radius: 10,
            tail: TailKind::Triangle,
            tail_size: 20,
            padding: 12,
            font_role: FontRole::Speech,
            font_size: FontRole::Speech.default_size(),
            line_spacing: 6,
            text_color: BLACK,
            glyph_outline: None,
            shadow: None,
        };
        match kind {
            BalloonKind::Speech => base,
            BalloonKind::Thought => Self {
                silhouette: Some(BalloonShape::Cloud),
                fill: Rgba([248, 248, 255, 255]),
                outline: Rgba([70, 130, 180, 255]),
                outline_width: 2,
                tail: TailKind::CircleChain,
                tail_size: 30,
                font_role: FontRole::Thought,
                font_size: FontRole::Thought.default_size(),
                ..base
            },
            BalloonKind::Narration => Self {
                silhouette: Some(BalloonShape::RoundedRect),
                fill: Rgba([255, 250, 205, 255]),
                outline: Rgba([218, 165, 32, 255]),
                outline_width: 2,
                tail: TailKind::None,
                padding: 10,
                font_role: FontRole::Narration,
                font_size: FontRole::Narration.default_size(),
                ..base
            },
            BalloonKind::Emphasis => Self {
                silhouette: Some(BalloonShape::Jagged),
                outline: Rgba([200, 0, 0, 255]),
                outline_width: 4,
                tail_size: 25,
                padding: 16,
                font_role: FontRole::Emphasis,
                font_size: FontRole::Emphasis.default_size(),
                ..base
            },
            BalloonKind::SoundEffect => Self {
                silhouette: None,
                tail: TailKind::None,
                padding: 8,
                font_role: FontRole::SoundEffect,
                font_size: FontRole::SoundEffect.default_size(),
                text_color: Rgba([255, 215, 0, 255]),
                glyph_outline: Some((BLACK, 2)),
                shadow: Some(Rgba([60, 60, 60, 255])),
                ..base
            },
        }
    }

    /// Preset for whispered speech: faint dashed rounded rect with a
    /// dashed tail. A full style, not an emotion tweak.
    pub fn whisper() -> Self {
        Self {
            silhouette: Some(BalloonShape::Whisper),
            fill: Rgba([245, 245, 245, 255]),
            outline: Rgba([128, 128, 128, 255]),
            outline_width: 1,
            corner_radius: 15,
            tail: TailKind::Dashed,
            ..Self::for_kind(BalloonKind::Speech)
        }
    }

    /// Apply an emotion's scalar adjustments. Emotions scale sizes and
    /// recolor strokes but never swap the silhouette or tail.
    pub fn apply_emotion(mut self, emotion: Emotion) -> Self {
        match emotion {
            Emotion::Neutral | Emotion::Thoughtful | Emotion::Sad => {}
            Emotion::Shouting => {
                self.font_size = (self.font_size as f32 * 1.2).round() as u32;
                self.outline_width += 1;
            }
            Emotion::Whispering => {
                self.font_size = ((self.font_size as f32 * 0.9).round() as u32).max(1);
                self.outline_width = 1;
                self.fill = Rgba([245, 245, 245, 255]);
                self.outline = Rgba([128, 128, 128, 255]);
            }
            Emotion::Angry => {
                self.outline = Rgba([200, 0, 0, 255]);
                self.outline_width += 1;
            }
            Emotion::Excited => {
                self.font_size = (self.font_size as f32 * 1.1).round() as u32;
            }
        }
        self
    }

    /// Full balloon paint: silhouette, tail, then lettering inside the
    /// padded interior.
    pub fn render(
        &self,
        img: &mut RgbaImage,
        rect: Rect,
        anchor: Anchor,
        lines: &[String],
        font: &ResolvedFont,
    ) {
        if let Some(shape) = self.silhouette {
            // Tail first so the silhouette covers its base.
            tail::draw_tail(img, rect, anchor, self);
            shape.draw(img, rect, self);
        }

        let pad = self.padding as i32;
        let interior = Rect::new(
            rect.x + pad,
            rect.y + pad,
            rect.w.saturating_sub(2 * self.padding),
            rect.h.saturating_sub(2 * self.padding),
        );
        if self.glyph_outline.is_some() || self.shadow.is_some() {
            let (outline, ow) = self.glyph_outline.unwrap_or((BLACK, 0));
            let shadow = self.shadow.unwrap_or(Rgba([60, 60, 60, 255]));
            lettering::letter_sfx(
                img,
                interior,
                lines,
                font,
                self.line_spacing,
                self.text_color,
                outline,
                ow,
                shadow,
            );
        } else {
            lettering::letter_block(img, interior, lines, font, self.line_spacing, self.text_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontResolver;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_for_kind_defaults() {
        let speech = BalloonStyle::for_kind(BalloonKind::Speech);
        assert_eq!(speech.silhouette, Some(BalloonShape::Ellipse));
        assert_eq!(speech.tail, TailKind::Triangle);
        assert_eq!(speech.font_size, 24);

        let narration = BalloonStyle::for_kind(BalloonKind::Narration);
        assert_eq!(narration.silhouette, Some(BalloonShape::RoundedRect));
        assert_eq!(narration.tail, TailKind::None);

        let sfx = BalloonStyle::for_kind(BalloonKind::SoundEffect);
        assert_eq!(sfx.silhouette, None);
        assert!(sfx.shadow.is_some());
    }

    #[test]
    fn test_shouting_scales_up() {
        let style = BalloonStyle::for_kind(BalloonKind::Speech).apply_emotion(Emotion::Shouting);
        assert_eq!(style.font_size, 29); // 24 * 1.2 rounded
        assert_eq!(style.outline_width, 4);
        // Shape untouched
        assert_eq!(style.silhouette, Some(BalloonShape::Ellipse));
        assert_eq!(style.tail, TailKind::Triangle);
    }

    #[test]
    fn test_whispering_scales_down_without_shape_change() {
        let style = BalloonStyle::for_kind(BalloonKind::Speech).apply_emotion(Emotion::Whispering);
        assert_eq!(style.font_size, 22); // 24 * 0.9 rounded
        assert_eq!(style.silhouette, Some(BalloonShape::Ellipse));
        assert_eq!(style.tail, TailKind::Triangle);
    }

    #[test]
    fn test_neutral_is_identity() {
        let base = BalloonStyle::for_kind(BalloonKind::Thought);
        let same = base.clone().apply_emotion(Emotion::Neutral);
        assert_eq!(base, same);
    }

    #[test]
    fn test_render_paints_balloon_and_text() {
        let mut resolver = FontResolver::new();
        let style = BalloonStyle::for_kind(BalloonKind::Speech);
        let font = resolver.resolve(style.font_role, style.font_size);
        let mut img = RgbaImage::from_pixel(300, 200, Rgba([10, 120, 10, 255]));
        style.render(
            &mut img,
            Rect::new(40, 30, 200, 100),
            Anchor::Bottom,
            &["HELLO".to_string()],
            &font,
        );
        assert!(img.pixels().any(|p| *p == style.fill), "fill missing");
        assert!(img.pixels().any(|p| *p == style.text_color), "text missing");
    }
}
