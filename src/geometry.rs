//! Coordinate mathematics for the annotation canvas.
//!
//! Annotations are persisted as percentages of the image size so they stay
//! correctly placed at any rendered resolution. This module contains the
//! pure conversions between canvas pixel space and percentage space,
//! extracted for testability.

use crate::constants::{MAX_CANVAS_HEIGHT, MAX_CANVAS_WIDTH};

/// Dimensions of the rendered canvas, in pixels.
///
/// Only valid once the background image has loaded; construction rejects
/// non-positive sizes so percentage math never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    /// Create a canvas size. Returns `None` for non-positive dimensions.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        if width > 0.0 && height > 0.0 {
            Some(Self { width, height })
        } else {
            None
        }
    }

    /// Compute the display canvas for a source image, scaling down (never
    /// up) to fit the maximum display box while preserving aspect ratio.
    pub fn fit(natural_width: u32, natural_height: u32) -> Option<Self> {
        if natural_width == 0 || natural_height == 0 {
            return None;
        }
        let (nw, nh) = (natural_width as f32, natural_height as f32);
        let scale = (MAX_CANVAS_WIDTH / nw)
            .min(MAX_CANVAS_HEIGHT / nh)
            .min(1.0);
        Self::new(nw * scale, nh * scale)
    }

    /// Ratio of canvas width to the source image's natural width.
    ///
    /// Informational only. Coordinate math always re-derives from the
    /// current canvas dimensions rather than accumulating scale state.
    pub fn scale_factor(&self, natural_width: u32) -> f32 {
        self.width / natural_width as f32
    }
}

/// Convert a canvas-pixel position to percentage coordinates (0-100).
pub fn pixel_to_percent(px: f32, py: f32, canvas: CanvasSize) -> (f32, f32) {
    (px / canvas.width * 100.0, py / canvas.height * 100.0)
}

/// Convert percentage coordinates (0-100) to canvas-pixel position.
pub fn percent_to_pixel(x_pct: f32, y_pct: f32, canvas: CanvasSize) -> (f32, f32) {
    (x_pct / 100.0 * canvas.width, y_pct / 100.0 * canvas.height)
}

/// An axis-aligned rectangle in canvas-pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalize two drag corners into a top-left anchored rectangle with
    /// positive width and height.
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1.min(x2),
            y: y1.min(y2),
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
        }
    }

    /// Check if a point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// Convert to percentage coordinates against the given canvas.
    pub fn to_percent(&self, canvas: CanvasSize) -> (f32, f32, f32, f32) {
        let (x, y) = pixel_to_percent(self.x, self.y, canvas);
        (
            x,
            y,
            self.width / canvas.width * 100.0,
            self.height / canvas.height * 100.0,
        )
    }

    /// Project a percentage-space rectangle onto the given canvas.
    pub fn from_percent(
        x_pct: f32,
        y_pct: f32,
        w_pct: f32,
        h_pct: f32,
        canvas: CanvasSize,
    ) -> Self {
        let (x, y) = percent_to_pixel(x_pct, y_pct, canvas);
        Self {
            x,
            y,
            width: w_pct / 100.0 * canvas.width,
            height: h_pct / 100.0 * canvas.height,
        }
    }
}
