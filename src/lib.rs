//! # Vignette - Comic Page Layout & Typography
//!
//! Vignette turns rendered panel artwork plus dialogue into finished
//! comic pages. It provides:
//!
//! - **Layout**: panel slot templates with an asymmetric six-panel
//!   default and a uniform-grid fallback
//! - **Typography**: word wrapping and dynamic font sizing against real
//!   glyph metrics, with a built-in bitmap fallback font
//! - **Balloons**: speech, thought, narration, shout, and sound-effect
//!   styles with shaped silhouettes and tails
//! - **Placement**: zone heuristics, optional content-aware character
//!   avoidance, and collision resolution between balloons
//!
//! ## Quick Start
//!
//! ```no_run
//! use image::RgbaImage;
//! use vignette::dialogue::{BalloonKind, DialogueLine};
//! use vignette::page::{PageAssembler, PanelInput};
//!
//! let panels = vec![
//!     PanelInput::new(
//!         RgbaImage::new(512, 512),
//!         vec![DialogueLine::spoken_by("Mina", "We made it.")],
//!     ),
//!     PanelInput::new(
//!         RgbaImage::new(512, 512),
//!         vec![DialogueLine::speech("CRASH").kind(BalloonKind::SoundEffect)],
//!     ),
//! ];
//!
//! let page = PageAssembler::new().assemble(panels, 1600, 2400)?;
//! page.image.save("page.png").unwrap();
//! # Ok::<(), vignette::error::VignetteError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`page`] | Page assembly pipeline |
//! | [`layout`] | Panel slot templates and page composition |
//! | [`balloon`] | Balloon styles, shapes, tails, lettering |
//! | [`place`] | Balloon placement and collision resolution |
//! | [`text`] | Word wrapping and dynamic sizing |
//! | [`font`] | Font roles and resolution with fallback |
//! | [`dialogue`] | Dialogue data model |
//! | [`geometry`] | Rects and anchors |
//! | [`raster`] | Low-level drawing primitives |
//! | [`error`] | Error types |

pub mod balloon;
pub mod dialogue;
pub mod error;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod page;
pub mod place;
pub mod raster;
pub mod text;

// Re-exports for convenience
pub use dialogue::{BalloonKind, DialogueLine, Emotion};
pub use error::VignetteError;
pub use layout::{Page, PanelSlot};
pub use page::{PageAssembler, PanelInput};
