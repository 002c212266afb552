//! Pointer gesture state machine for box drawing.

use crate::constants::MIN_BOX_SIZE_PX;
use crate::geometry::PixelRect;

/// State of the current pointer gesture, in canvas-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging out a new box from `start` to `current`.
    Drawing {
        start: (f32, f32),
        current: (f32, f32),
    },
}

impl GestureState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, GestureState::Drawing { .. })
    }

    /// Begin a drag at the given point.
    pub fn start(&mut self, x: f32, y: f32) {
        *self = GestureState::Drawing {
            start: (x, y),
            current: (x, y),
        };
    }

    /// Update the live endpoint while dragging. No-op when idle.
    pub fn update(&mut self, x: f32, y: f32) {
        if let GestureState::Drawing { current, .. } = self {
            *current = (x, y);
        }
    }

    /// Finish the drag and return the normalized rectangle, or `None` if
    /// either axis is below the minimum size (an accidental click).
    /// Returns to idle either way.
    pub fn finish(&mut self) -> Option<PixelRect> {
        let GestureState::Drawing { start, current } = *self else {
            return None;
        };
        *self = GestureState::Idle;

        let dx = (current.0 - start.0).abs();
        let dy = (current.1 - start.1).abs();
        if dx < MIN_BOX_SIZE_PX || dy < MIN_BOX_SIZE_PX {
            log::debug!("discarding sub-minimum drag ({dx:.1}x{dy:.1} px)");
            return None;
        }

        Some(PixelRect::from_corners(
            start.0, start.1, current.0, current.1,
        ))
    }

    /// Abort the in-progress drag (pointer left the canvas, task changed,
    /// or the canvas unmounted). Nothing is persisted.
    pub fn cancel(&mut self) {
        *self = GestureState::Idle;
    }

    /// The live rectangle to preview while dragging.
    pub fn preview(&self) -> Option<PixelRect> {
        match self {
            GestureState::Idle => None,
            GestureState::Drawing { start, current } => Some(PixelRect::from_corners(
                start.0, start.1, current.0, current.1,
            )),
        }
    }
}
