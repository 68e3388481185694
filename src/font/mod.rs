//! # Font Resolution
//!
//! Maps abstract font roles to concrete rasterizable fonts.
//!
//! Callers may register TTF/OTF data per role; anything unregistered
//! falls back to the built-in Spleen bitmap family at the nearest
//! supported pixel size. Resolution never fails — a page always letters,
//! possibly in the fallback face.
//!
//! The contract is visual identity, not object identity: two
//! `ResolvedFont`s for the same role and size measure and rasterize
//! identically, whether or not they came out of the cache.

use ab_glyph::{Font, FontArc, ScaleFont};
use spleen_font::{FONT_6X12, FONT_8X16, FONT_12X24, PSF2Font};
use std::collections::HashMap;

/// Abstract font role, one per balloon kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Speech,
    Thought,
    Narration,
    SoundEffect,
    Emphasis,
}

impl FontRole {
    /// Default pixel size for this role.
    pub fn default_size(self) -> u32 {
        match self {
            FontRole::Speech => 24,
            FontRole::Thought => 20,
            FontRole::Narration => 18,
            FontRole::SoundEffect => 32,
            FontRole::Emphasis => 28,
        }
    }
}

/// A built-in Spleen bitmap face at one of the supported cell sizes,
/// optionally integer-upscaled.
#[derive(Debug, Clone, Copy)]
struct BitmapFace {
    data: &'static [u8],
    char_w: u32,
    char_h: u32,
    scale: u32,
}

impl BitmapFace {
    /// Pick the nearest supported Spleen size for a requested pixel
    /// height. Sizes above 24px use the 12x24 face with integer scaling.
    fn nearest(size: u32) -> Self {
        if size <= 14 {
            Self { data: FONT_6X12, char_w: 6, char_h: 12, scale: 1 }
        } else if size <= 20 {
            Self { data: FONT_8X16, char_w: 8, char_h: 16, scale: 1 }
        } else {
            // Round to the nearest multiple of 24
            let scale = ((size + 12) / 24).max(1);
            Self { data: FONT_12X24, char_w: 12, char_h: 24, scale }
        }
    }
}

/// The rasterizable backing of a resolved font.
#[derive(Clone)]
enum FontFace {
    /// Registered TTF/OTF outlines, rendered anti-aliased via ab_glyph.
    Outline(FontArc),
    /// Built-in Spleen bitmap fallback, rendered 1-bit.
    Bitmap(BitmapFace),
}

/// A concrete font at a concrete size: measures and rasterizes text lines.
#[derive(Clone)]
pub struct ResolvedFont {
    face: FontFace,
    size: u32,
}

impl ResolvedFont {
    /// Nominal pixel size this font was resolved at.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Height of one rendered text line in pixels.
    pub fn line_height(&self) -> u32 {
        match &self.face {
            FontFace::Outline(font) => {
                let scaled = font.as_scaled(self.size as f32);
                (scaled.ascent() - scaled.descent()).ceil().max(1.0) as u32
            }
            FontFace::Bitmap(face) => face.char_h * face.scale,
        }
    }

    /// Advance width of a text line in pixels.
    pub fn measure(&self, text: &str) -> u32 {
        match &self.face {
            FontFace::Outline(font) => {
                let scaled = font.as_scaled(self.size as f32);
                let mut caret = 0.0f32;
                for ch in text.chars() {
                    caret += scaled.h_advance(font.glyph_id(ch));
                }
                caret.ceil().max(0.0) as u32
            }
            FontFace::Bitmap(face) => {
                let cell = face.char_w * face.scale;
                text.chars().count() as u32 * cell
            }
        }
    }

    /// Rasterize one line of text, invoking `plot(x, y, coverage)` for
    /// each covered pixel. Coordinates are relative to the line's
    /// top-left corner; coverage is in [0, 1] (always 1.0 for the
    /// bitmap fallback).
    pub fn rasterize(&self, text: &str, mut plot: impl FnMut(i32, i32, f32)) {
        match &self.face {
            FontFace::Outline(font) => {
                let px = self.size as f32;
                let scaled = font.as_scaled(px);
                let baseline = scaled.ascent();
                let mut caret = 0.0f32;
                for ch in text.chars() {
                    let id = font.glyph_id(ch);
                    let glyph = id.with_scale_and_position(px, ab_glyph::point(caret, baseline));
                    caret += scaled.h_advance(id);
                    if let Some(outlined) = font.outline_glyph(glyph) {
                        let bounds = outlined.px_bounds();
                        outlined.draw(|gx, gy, coverage| {
                            plot(
                                gx as i32 + bounds.min.x as i32,
                                gy as i32 + bounds.min.y as i32,
                                coverage,
                            );
                        });
                    }
                }
            }
            FontFace::Bitmap(face) => {
                let Ok(mut psf) = PSF2Font::new(face.data) else {
                    return;
                };
                let cell_w = (face.char_w * face.scale) as i32;
                let scale = face.scale as i32;
                let mut pen_x = 0i32;
                for ch in text.chars() {
                    let utf8 = ch.to_string();
                    if let Some(glyph) = psf.glyph_for_utf8(utf8.as_bytes()) {
                        for (row_y, row) in glyph.enumerate() {
                            for (col_x, on) in row.enumerate() {
                                if !on {
                                    continue;
                                }
                                // Stamp a scale x scale block per source pixel
                                for sy in 0..scale {
                                    for sx in 0..scale {
                                        plot(
                                            pen_x + col_x as i32 * scale + sx,
                                            row_y as i32 * scale + sy,
                                            1.0,
                                        );
                                    }
                                }
                            }
                        }
                    }
                    // Unknown glyphs still advance the pen
                    pen_x += cell_w;
                }
            }
        }
    }
}

/// Resolves font roles to rasterizable fonts with guaranteed fallback.
///
/// ## Example
///
/// ```
/// use vignette::font::{FontResolver, FontRole};
///
/// let mut resolver = FontResolver::new();
/// let font = resolver.resolve(FontRole::Speech, 24);
/// assert!(font.line_height() > 0);
/// ```
pub struct FontResolver {
    registered: HashMap<FontRole, FontArc>,
    cache: HashMap<(FontRole, u32), ResolvedFont>,
}

impl FontResolver {
    pub fn new() -> Self {
        Self {
            registered: HashMap::new(),
            cache: HashMap::new(),
        }
    }

    /// Register TTF/OTF data for a role. Invalid font data is rejected;
    /// the role then keeps its bitmap fallback.
    pub fn with_font_bytes(mut self, role: FontRole, bytes: Vec<u8>) -> Self {
        match FontArc::try_from_vec(bytes) {
            Ok(font) => {
                self.registered.insert(role, font);
                self.cache.retain(|(r, _), _| *r != role);
            }
            Err(e) => {
                log::warn!("rejecting font data for {role:?}: {e}; keeping bitmap fallback");
            }
        }
        self
    }

    /// Register an already-parsed font for a role.
    pub fn with_font(mut self, role: FontRole, font: FontArc) -> Self {
        self.registered.insert(role, font);
        self.cache.retain(|(r, _), _| *r != role);
        self
    }

    /// Resolve a role at a pixel size. Never fails: unregistered roles
    /// (or a size of 0, bumped to 1) fall back to the built-in bitmap
    /// family at the nearest supported size.
    pub fn resolve(&mut self, role: FontRole, size: u32) -> ResolvedFont {
        let size = size.max(1);
        if let Some(cached) = self.cache.get(&(role, size)) {
            return cached.clone();
        }
        let face = match self.registered.get(&role) {
            Some(font) => FontFace::Outline(font.clone()),
            None => {
                log::debug!("no font registered for {role:?}; using built-in fallback");
                FontFace::Bitmap(BitmapFace::nearest(size))
            }
        };
        let resolved = ResolvedFont { face, size };
        self.cache.insert((role, size), resolved.clone());
        resolved
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_never_fails() {
        let mut resolver = FontResolver::new();
        for role in [
            FontRole::Speech,
            FontRole::Thought,
            FontRole::Narration,
            FontRole::SoundEffect,
            FontRole::Emphasis,
        ] {
            let font = resolver.resolve(role, role.default_size());
            assert!(font.line_height() > 0);
            assert!(font.measure("hello") > 0);
        }
    }

    #[test]
    fn test_nearest_bitmap_sizes() {
        assert_eq!(BitmapFace::nearest(12).char_h, 12);
        assert_eq!(BitmapFace::nearest(16).char_h, 16);
        assert_eq!(BitmapFace::nearest(24).char_h, 24);
        let big = BitmapFace::nearest(48);
        assert_eq!(big.char_h * big.scale, 48);
    }

    #[test]
    fn test_zero_size_bumped() {
        let mut resolver = FontResolver::new();
        let font = resolver.resolve(FontRole::Speech, 0);
        assert!(font.line_height() > 0);
    }

    #[test]
    fn test_measure_scales_with_length() {
        let mut resolver = FontResolver::new();
        let font = resolver.resolve(FontRole::Speech, 24);
        assert!(font.measure("abcdef") > font.measure("abc"));
        assert_eq!(font.measure(""), 0);
    }

    #[test]
    fn test_cache_preserves_visual_identity() {
        let mut resolver = FontResolver::new();
        let a = resolver.resolve(FontRole::Speech, 24);
        let b = resolver.resolve(FontRole::Speech, 24);
        assert_eq!(a.measure("same text"), b.measure("same text"));
        assert_eq!(a.line_height(), b.line_height());
    }

    #[test]
    fn test_rasterize_produces_pixels() {
        let mut resolver = FontResolver::new();
        let font = resolver.resolve(FontRole::Speech, 24);
        let mut count = 0usize;
        font.rasterize("A", |_, _, coverage| {
            if coverage > 0.0 {
                count += 1;
            }
        });
        assert!(count > 0, "rasterizing 'A' should cover pixels");
    }

    #[test]
    fn test_rasterize_stays_within_line_box() {
        let mut resolver = FontResolver::new();
        let font = resolver.resolve(FontRole::Speech, 24);
        let width = font.measure("Hi") as i32;
        let height = font.line_height() as i32;
        font.rasterize("Hi", |x, y, _| {
            assert!(x >= 0 && x < width + 1, "x {x} outside line width {width}");
            assert!(y >= -1 && y <= height, "y {y} outside line height {height}");
        });
    }

    #[test]
    fn test_invalid_font_bytes_fall_back() {
        let mut resolver = FontResolver::new().with_font_bytes(FontRole::Speech, vec![0, 1, 2, 3]);
        let font = resolver.resolve(FontRole::Speech, 24);
        // Bitmap fallback has fixed-width cells
        assert_eq!(font.measure("ab"), font.measure("cd"));
    }
}
