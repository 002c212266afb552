//! Display-list render pass for the annotation canvas.
//!
//! The pass turns the current working state into an ordered list of draw
//! commands: background image, committed boxes with label chips, then the
//! dashed preview for an in-progress drag. Callers rebuild the list only
//! when annotations, selection, AI visibility, or the gesture change.

use crate::constants::{
    AI_BOX_COLOR, BOX_FILL_ALPHA, MANUAL_BOX_COLOR, PREVIEW_BOX_COLOR, SELECTED_BOX_COLOR,
    UNVERIFIED_ALPHA,
};
use crate::geometry::{CanvasSize, PixelRect};
use crate::model::CanvasAnnotation;

use super::gesture::GestureState;

/// One drawing primitive, in canvas-pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Background image scaled to the full canvas.
    Image { width: f32, height: f32 },
    /// Filled and stroked rectangle for a committed box.
    Rect {
        rect: PixelRect,
        color: [f32; 4],
        fill_alpha: f32,
    },
    /// Dashed outline for the in-progress preview box.
    DashedRect { rect: PixelRect, color: [f32; 4] },
    /// Label chip anchored above a box's top-left corner.
    Label {
        x: f32,
        y: f32,
        text: String,
        color: [f32; 4],
    },
}

/// Visual inputs that drive a render pass.
pub struct RenderInput<'a> {
    pub annotations: &'a [CanvasAnnotation],
    pub selected_id: Option<&'a str>,
    pub show_ai: bool,
    pub gesture: &'a GestureState,
    pub canvas: CanvasSize,
}

/// Build the display list for the current state.
pub fn render_pass(input: &RenderInput<'_>) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(input.annotations.len() * 2 + 2);
    commands.push(DrawCommand::Image {
        width: input.canvas.width,
        height: input.canvas.height,
    });

    for ann in input.annotations {
        if ann.ai_generated && !input.show_ai {
            continue;
        }

        let selected = input.selected_id == Some(ann.id.as_str());
        let base = if selected {
            SELECTED_BOX_COLOR
        } else if ann.ai_generated {
            AI_BOX_COLOR
        } else {
            MANUAL_BOX_COLOR
        };
        let alpha = if ann.verified { 1.0 } else { UNVERIFIED_ALPHA };
        let color = [base[0], base[1], base[2], base[3] * alpha];

        let rect = PixelRect::from_percent(ann.x, ann.y, ann.width, ann.height, input.canvas);
        commands.push(DrawCommand::Rect {
            rect,
            color,
            fill_alpha: BOX_FILL_ALPHA * alpha,
        });
        commands.push(DrawCommand::Label {
            x: rect.x,
            y: rect.y,
            text: label_text(ann),
            color,
        });
    }

    if let Some(rect) = input.gesture.preview() {
        commands.push(DrawCommand::DashedRect {
            rect,
            color: PREVIEW_BOX_COLOR,
        });
    }

    commands
}

/// Chip text: category name, plus confidence percentage when present.
fn label_text(ann: &CanvasAnnotation) -> String {
    match ann.confidence {
        Some(c) => format!("{} {:.0}%", ann.category, c * 100.0),
        None => ann.category.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn canvas() -> CanvasSize {
        CanvasSize::new(800.0, 600.0).unwrap()
    }

    fn rect_count(commands: &[DrawCommand]) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }

    #[test]
    fn test_background_image_drawn_first() {
        let anns = [ai_box()];
        let commands = render_pass(&RenderInput {
            annotations: &anns,
            selected_id: None,
            show_ai: true,
            gesture: &GestureState::Idle,
            canvas: canvas(),
        });
        assert!(matches!(commands[0], DrawCommand::Image { .. }));
    }

    #[test]
    fn test_ai_toggle_hides_boxes_without_touching_store() {
        let anns = [ai_box()];
        let shown = render_pass(&RenderInput {
            annotations: &anns,
            selected_id: None,
            show_ai: true,
            gesture: &GestureState::Idle,
            canvas: canvas(),
        });
        let hidden = render_pass(&RenderInput {
            annotations: &anns,
            selected_id: None,
            show_ai: false,
            gesture: &GestureState::Idle,
            canvas: canvas(),
        });
        assert_eq!(rect_count(&shown), 1);
        assert_eq!(rect_count(&hidden), 0);
        // The annotation list itself is untouched by visibility.
        assert_eq!(anns.len(), 1);
    }

    #[test]
    fn test_unverified_ai_box_renders_translucent() {
        let anns = [ai_box()];
        let commands = render_pass(&RenderInput {
            annotations: &anns,
            selected_id: None,
            show_ai: true,
            gesture: &GestureState::Idle,
            canvas: canvas(),
        });
        let Some(DrawCommand::Rect { color, .. }) = commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Rect { .. }))
        else {
            panic!("expected a rect command");
        };
        assert!((color[3] - UNVERIFIED_ALPHA).abs() < 0.001);
    }

    #[test]
    fn test_selection_overrides_provenance_color() {
        let anns = [ai_box()];
        let commands = render_pass(&RenderInput {
            annotations: &anns,
            selected_id: Some("srv-1"),
            show_ai: true,
            gesture: &GestureState::Idle,
            canvas: canvas(),
        });
        let Some(DrawCommand::Rect { color, .. }) = commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Rect { .. }))
        else {
            panic!("expected a rect command");
        };
        assert_eq!(color[0], SELECTED_BOX_COLOR[0]);
        assert_eq!(color[1], SELECTED_BOX_COLOR[1]);
    }

    #[test]
    fn test_label_includes_confidence_percent() {
        let anns = [ai_box()];
        let commands = render_pass(&RenderInput {
            annotations: &anns,
            selected_id: None,
            show_ai: true,
            gesture: &GestureState::Idle,
            canvas: canvas(),
        });
        let Some(DrawCommand::Label { text, .. }) = commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Label { .. }))
        else {
            panic!("expected a label command");
        };
        assert_eq!(text, "laptop 80%");
    }

    #[test]
    fn test_preview_rendered_on_top_while_drawing() {
        let mut gesture = GestureState::default();
        gesture.start(100.0, 100.0);
        gesture.update(200.0, 180.0);
        let commands = render_pass(&RenderInput {
            annotations: &[],
            selected_id: None,
            show_ai: true,
            gesture: &gesture,
            canvas: canvas(),
        });
        assert!(matches!(
            commands.last(),
            Some(DrawCommand::DashedRect { .. })
        ));
    }

    #[test]
    fn test_boxes_project_to_current_canvas_size() {
        let anns = [ai_box()]; // 10% on an 800x600 canvas = (80, 60)
        let commands = render_pass(&RenderInput {
            annotations: &anns,
            selected_id: None,
            show_ai: true,
            gesture: &GestureState::Idle,
            canvas: canvas(),
        });
        let Some(DrawCommand::Rect { rect, .. }) = commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Rect { .. }))
        else {
            panic!("expected a rect command");
        };
        assert!((rect.x - 80.0).abs() < 0.001);
        assert!((rect.y - 60.0).abs() < 0.001);
        assert!((rect.width - 160.0).abs() < 0.001);
        assert!((rect.height - 120.0).abs() < 0.001);
    }
}
