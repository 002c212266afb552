//! Interactive canvas: pointer gestures, rendering, and the editor lock.

mod editor;
mod gesture;
mod lock;
mod render;

pub use editor::{AnnotationCanvas, ImageState};
pub use gesture::GestureState;
pub use lock::EditorLock;
pub use render::{DrawCommand, RenderInput, render_pass};
