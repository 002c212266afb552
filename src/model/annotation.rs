//! Canvas-native annotation model.

use uuid::Uuid;

/// A bounding-box annotation in canvas-native form.
///
/// Coordinates are floating-point percentages (0-100) of the image width
/// and height, never pixels, so annotations stay resolution-independent
/// across any rendered canvas size. The nested `bbox` wire shape used by
/// the server lives in [`crate::wire`]; it never enters the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasAnnotation {
    /// Opaque unique identifier. Client-generated for new manual boxes,
    /// server-assigned for existing ones.
    pub id: String,
    /// Left edge, percent of image width.
    pub x: f32,
    /// Top edge, percent of image height.
    pub y: f32,
    /// Width, percent of image width. Positive after creation.
    pub width: f32,
    /// Height, percent of image height. Positive after creation.
    pub height: f32,
    /// Label from the e-waste taxonomy.
    pub category: String,
    /// Detector confidence in [0,1]. Present only for AI-generated boxes.
    pub confidence: Option<f32>,
    /// True for boxes produced by the upstream detector.
    pub ai_generated: bool,
    /// True once a human has confirmed the box, or immediately for
    /// hand-drawn boxes.
    pub verified: bool,
}

impl CanvasAnnotation {
    /// Create a freshly hand-drawn box. Manual boxes are verified by
    /// construction and carry no confidence score.
    pub fn manual(x: f32, y: f32, width: f32, height: f32, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            x,
            y,
            width,
            height,
            category: category.into(),
            confidence: None,
            ai_generated: false,
            verified: true,
        }
    }
}
