//! Global constants for the ecotag annotation core.

/// Minimum drag extent (pixels, per axis) for a drawn box to be kept.
/// Anything smaller is treated as an accidental click and discarded.
pub const MIN_BOX_SIZE_PX: f32 = 10.0;

/// Maximum rendered canvas width. Source images larger than this are
/// scaled down to fit while preserving aspect ratio.
pub const MAX_CANVAS_WIDTH: f32 = 800.0;

/// Maximum rendered canvas height.
pub const MAX_CANVAS_HEIGHT: f32 = 600.0;

/// RGBA stroke color for AI-generated boxes.
pub const AI_BOX_COLOR: [f32; 4] = [0.23, 0.51, 0.96, 1.0];

/// RGBA stroke color for manually drawn boxes.
pub const MANUAL_BOX_COLOR: [f32; 4] = [0.13, 0.77, 0.37, 1.0];

/// RGBA override color for the selected box.
pub const SELECTED_BOX_COLOR: [f32; 4] = [0.96, 0.62, 0.04, 1.0];

/// RGBA color for the dashed in-progress preview rectangle.
pub const PREVIEW_BOX_COLOR: [f32; 4] = [0.94, 0.27, 0.27, 1.0];

/// Opacity applied to boxes that have not been verified yet.
pub const UNVERIFIED_ALPHA: f32 = 0.5;

/// Fill opacity for committed boxes (stroke stays at the box alpha).
pub const BOX_FILL_ALPHA: f32 = 0.15;
