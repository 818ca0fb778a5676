//! Pointer to pitch coordinate mapping
//!
//! Converts a raw click position on the capture surface into the normalized
//! pitch grid.
//!
//! ## Coordinate Systems
//!
//! **Client Coordinates** (pointer input):
//! - pixels, same origin as the surface rectangle's `left` / `top`
//!
//! **Pitch Coordinates** (events):
//! - X: 0 = left edge of the surface, 100 = right edge (attacking goal side)
//! - Y: 0 = top edge, 100 = bottom edge
//!
//! The mapper is a pure transform. A missing or degenerate surface, or a
//! disabled recorder, yields `None` rather than an error.

use serde::{Deserialize, Serialize};

use crate::models::{PitchPoint, PITCH_MAX};

/// Bounding rectangle of the capture surface, in client pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// A zero-sized or non-finite rect cannot produce percentages
    pub fn is_usable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Raw pointer position in client pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerInput {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Map a pointer event onto the pitch grid.
///
/// Returns `None` when recording is disabled or the surface rect is missing
/// or unusable. Clicks that land outside the rect are clamped onto its edge.
pub fn to_pitch_point(
    pointer: PointerInput,
    surface: Option<&SurfaceRect>,
    recording: bool,
) -> Option<PitchPoint> {
    if !recording {
        return None;
    }
    let rect = surface.filter(|r| r.is_usable())?;
    if !pointer.client_x.is_finite() || !pointer.client_y.is_finite() {
        return None;
    }

    let x = (pointer.client_x - rect.left) / rect.width * PITCH_MAX;
    let y = (pointer.client_y - rect.top) / rect.height * PITCH_MAX;
    Some(PitchPoint::new(x, y))
}
