//! # Error Types
//!
//! This module defines error types used throughout the vignette library.
//!
//! Most degraded conditions (missing fonts, text overflow, crowded panels)
//! are handled in place and logged rather than surfaced here; only
//! genuinely invalid inputs produce an error.

use thiserror::Error;

/// Main error type for vignette operations
#[derive(Debug, Error)]
pub enum VignetteError {
    /// A page cannot be laid out for this panel count
    #[error("invalid panel count: {0} (must be at least 1)")]
    InvalidPanelCount(usize),

    /// Target page dimensions are unusable
    #[error("invalid page dimensions: {0}x{1} (both must be positive)")]
    InvalidPageSize(u32, u32),

    /// Panel images and slots do not line up
    #[error("panel mismatch: {0}")]
    PanelMismatch(String),

    /// Balloon rendering error
    #[error("render error: {0}")]
    Render(String),

    /// Font loading error
    #[error("font error: {0}")]
    Font(String),
}
