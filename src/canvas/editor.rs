//! Interactive annotation canvas component.
//!
//! Owns everything visual about the open task: the loaded image, pointer
//! gesture, selection, AI-visibility toggle, and the shared
//! current-category control for newly drawn boxes. Annotation data itself
//! lives in the [`AnnotationStore`]; the canvas only reads and mutates it
//! through pointer handling.

use crate::geometry::CanvasSize;
use crate::model::CategorySet;
use crate::store::AnnotationStore;

use super::gesture::GestureState;
use super::lock::EditorLock;
use super::render::{DrawCommand, RenderInput, render_pass};

/// Background image state. Editing is disabled until an image is ready,
/// since without canvas dimensions the coordinate math is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageState {
    /// No image requested or still in flight; canvas shows a placeholder.
    NotLoaded,
    /// Decode failed; canvas shows a placeholder instead of crashing.
    Failed,
    /// Image decoded, canvas sized to fit the display box.
    Ready {
        canvas: CanvasSize,
        natural: (u32, u32),
    },
}

/// The interactive canvas component.
pub struct AnnotationCanvas {
    _lock: EditorLock,
    categories: CategorySet,
    current_category: String,
    image: ImageState,
    gesture: GestureState,
    selected_id: Option<String>,
    show_ai: bool,
    read_only: bool,
    needs_render: bool,
}

impl AnnotationCanvas {
    /// Mount the canvas, acquiring the exclusive editor lock. Returns
    /// `None` while another canvas instance is live.
    pub fn mount(categories: CategorySet) -> Option<Self> {
        let lock = EditorLock::acquire()?;
        let current_category = categories.default_label().unwrap_or_default().to_string();
        Some(Self {
            _lock: lock,
            categories,
            current_category,
            image: ImageState::NotLoaded,
            gesture: GestureState::Idle,
            selected_id: None,
            show_ai: true,
            read_only: false,
            needs_render: true,
        })
    }

    /// Decode fetched image bytes and size the canvas to fit the display
    /// box. A decode failure leaves the canvas in the placeholder state.
    pub fn load_image(&mut self, bytes: &[u8]) {
        self.image = match image::load_from_memory(bytes) {
            Ok(img) => {
                let natural = (img.width(), img.height());
                match CanvasSize::fit(natural.0, natural.1) {
                    Some(canvas) => {
                        log::info!(
                            "image loaded: {}x{} displayed at {:.0}x{:.0}",
                            natural.0,
                            natural.1,
                            canvas.width,
                            canvas.height
                        );
                        ImageState::Ready { canvas, natural }
                    }
                    None => ImageState::Failed,
                }
            }
            Err(err) => {
                log::warn!("image decode failed: {err}");
                ImageState::Failed
            }
        };
        self.gesture.cancel();
        self.selected_id = None;
        self.needs_render = true;
    }

    /// Reset for a new task: drop the image, gesture, and selection.
    pub fn reset(&mut self) {
        self.image = ImageState::NotLoaded;
        self.gesture.cancel();
        self.selected_id = None;
        self.needs_render = true;
    }

    pub fn image_state(&self) -> ImageState {
        self.image
    }

    /// Whether pointer input is currently accepted.
    pub fn is_editable(&self) -> bool {
        !self.read_only && matches!(self.image, ImageState::Ready { .. })
    }

    /// Force the canvas into read-only mode; pointer handlers become
    /// no-ops and any in-progress drag is dropped.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
        if read_only {
            self.gesture.cancel();
            self.needs_render = true;
        }
    }

    pub fn show_ai(&self) -> bool {
        self.show_ai
    }

    /// Toggle AI-generated box visibility. Render-only: the store is
    /// untouched.
    pub fn set_show_ai(&mut self, show: bool) {
        if self.show_ai != show {
            self.show_ai = show;
            self.needs_render = true;
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn current_category(&self) -> &str {
        &self.current_category
    }

    /// Set the shared category applied to all newly drawn boxes. Labels
    /// outside the taxonomy are rejected.
    pub fn set_current_category(&mut self, label: &str) -> bool {
        if self.categories.contains(label) {
            self.current_category = label.to_string();
            true
        } else {
            log::debug!("ignoring unknown category {label:?}");
            false
        }
    }

    /// Pointer pressed. A hit on an existing box (first match in list
    /// order wins) selects it; a press on empty canvas starts a drag.
    pub fn pointer_down(&mut self, px: f32, py: f32, store: &AnnotationStore) {
        let Some(canvas) = self.ready_canvas() else {
            return;
        };
        if self.read_only {
            return;
        }

        let hit = store.annotations().iter().find(|ann| {
            if ann.ai_generated && !self.show_ai {
                return false;
            }
            crate::geometry::PixelRect::from_percent(ann.x, ann.y, ann.width, ann.height, canvas)
                .contains(px, py)
        });

        match hit {
            Some(ann) => {
                self.selected_id = Some(ann.id.clone());
            }
            None => {
                self.selected_id = None;
                self.gesture.start(px, py);
            }
        }
        self.needs_render = true;
    }

    /// Pointer moved while pressed.
    pub fn pointer_move(&mut self, px: f32, py: f32) {
        if self.gesture.is_drawing() {
            self.gesture.update(px, py);
            self.needs_render = true;
        }
    }

    /// Pointer released. Commits the drag to the store unless it was below
    /// the minimum size.
    pub fn pointer_up(&mut self, store: &mut AnnotationStore) {
        let Some(canvas) = self.ready_canvas() else {
            return;
        };
        if let Some(rect) = self.gesture.finish() {
            let (x, y, w, h) = rect.to_percent(canvas);
            let id = store.add(x, y, w, h, self.current_category.clone()).id.clone();
            self.selected_id = Some(id);
        }
        self.needs_render = true;
    }

    /// Pointer left the canvas: abort any in-progress drag.
    pub fn pointer_leave(&mut self) {
        if self.gesture.is_drawing() {
            self.gesture.cancel();
            self.needs_render = true;
        }
    }

    /// Mark the canvas for redraw after an external store mutation
    /// (category edit, verify, delete from a side panel).
    pub fn invalidate(&mut self) {
        self.needs_render = true;
    }

    /// Rebuild the display list if anything visual changed since the last
    /// call. Returns `None` when the previous frame is still valid or no
    /// image is ready.
    pub fn render_if_needed(&mut self, store: &AnnotationStore) -> Option<Vec<DrawCommand>> {
        if !self.needs_render {
            return None;
        }
        let canvas = self.ready_canvas()?;
        self.needs_render = false;
        Some(render_pass(&RenderInput {
            annotations: store.annotations(),
            selected_id: self.selected_id.as_deref(),
            show_ai: self.show_ai,
            gesture: &self.gesture,
            canvas,
        }))
    }

    fn ready_canvas(&self) -> Option<CanvasSize> {
        match self.image {
            ImageState::Ready { canvas, .. } => Some(canvas),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CanvasAnnotation;

    // A tiny valid PNG (1x1 transparent pixel) for decode tests.
    const ONE_PX_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0B, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x60,
        0x00, 0x02, 0x00, 0x00, 0x05, 0x00, 0x01, 0x7A, 0x5E, 0xAB, 0x3F, 0x00, 0x00, 0x00, 0x00,
        0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    fn ai_box() -> CanvasAnnotation {
        CanvasAnnotation {
            id: "srv-1".into(),
            x: 10.0,
            y: 10.0,
            width: 20.0,
            height: 20.0,
            category: "laptop".into(),
            confidence: Some(0.8),
            ai_generated: true,
            verified: false,
        }
    }

    #[test]
    fn test_canvas_lifecycle_and_pointer_flow() {
        // Single test covers the lock-holding canvas end to end; parallel
        // tests would contend on the editor singleton otherwise.
        let mut store = AnnotationStore::new();
        store.load(vec![ai_box()], "");

        let mut canvas = AnnotationCanvas::mount(CategorySet::default()).unwrap();
        assert!(AnnotationCanvas::mount(CategorySet::default()).is_none());

        // Not editable before an image loads; handlers are no-ops.
        assert!(!canvas.is_editable());
        canvas.pointer_down(100.0, 100.0, &store);
        canvas.pointer_up(&mut store);
        assert_eq!(store.len(), 1);
        assert!(canvas.render_if_needed(&store).is_none());

        // Bad bytes leave the placeholder state.
        canvas.load_image(b"not an image");
        assert_eq!(canvas.image_state(), ImageState::Failed);
        assert!(!canvas.is_editable());

        // A real image makes the canvas editable.
        canvas.load_image(ONE_PX_PNG);
        assert!(matches!(canvas.image_state(), ImageState::Ready { .. }));
        assert!(canvas.is_editable());

        // Force a known canvas size for deterministic coordinates.
        canvas.image = ImageState::Ready {
            canvas: CanvasSize::new(800.0, 600.0).unwrap(),
            natural: (800, 600),
        };

        // Click inside the AI box's pixel rect (80,60)-(240,180): selects,
        // draws nothing.
        canvas.pointer_down(100.0, 100.0, &store);
        assert_eq!(canvas.selected_id(), Some("srv-1"));
        canvas.pointer_up(&mut store);
        assert_eq!(store.len(), 1);

        // Drag on empty canvas creates a manual box at the right percents.
        canvas.set_current_category("battery");
        canvas.pointer_down(400.0, 300.0, &store);
        canvas.pointer_move(500.0, 400.0);
        canvas.pointer_up(&mut store);
        assert_eq!(store.len(), 2);
        let added = &store.annotations()[1];
        assert_eq!(added.category, "battery");
        assert!(!added.ai_generated);
        assert!(added.verified);
        assert!((added.x - 50.0).abs() < 0.01);
        assert!((added.width - 12.5).abs() < 0.01);

        // Sub-threshold drag adds nothing.
        canvas.pointer_down(300.0, 500.0, &store);
        canvas.pointer_move(305.0, 505.0);
        canvas.pointer_up(&mut store);
        assert_eq!(store.len(), 2);

        // Pointer leaving aborts the drag.
        canvas.pointer_down(300.0, 500.0, &store);
        canvas.pointer_move(400.0, 550.0);
        canvas.pointer_leave();
        canvas.pointer_up(&mut store);
        assert_eq!(store.len(), 2);

        // Hidden AI boxes are not hit-testable.
        canvas.set_show_ai(false);
        canvas.pointer_down(100.0, 100.0, &store);
        assert!(canvas.selected_id().is_none());
        assert!(canvas.gesture.is_drawing());
        canvas.pointer_leave();

        // Read-only mode turns handlers into no-ops.
        canvas.set_read_only(true);
        canvas.pointer_down(400.0, 300.0, &store);
        assert!(!canvas.gesture.is_drawing());

        // Render caching: one rebuild per change.
        canvas.invalidate();
        assert!(canvas.render_if_needed(&store).is_some());
        assert!(canvas.render_if_needed(&store).is_none());

        // Unknown categories are rejected.
        canvas.set_read_only(false);
        assert!(!canvas.set_current_category("bicycle"));
        assert_eq!(canvas.current_category(), "battery");
    }
}
