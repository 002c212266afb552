//! Wire format for persisted annotations.
//!
//! The server nests coordinates under a `bbox` sub-object while the canvas
//! works with flattened fields. Both shapes are explicit types and the
//! conversions below are the only place they meet: the store never holds
//! the wire shape and the gateway never receives the flattened one.

use serde::{Deserialize, Serialize};

use crate::model::CanvasAnnotation;

/// Coordinates as they appear on the wire, percent of image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireBbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A persisted annotation as transmitted to and from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireAnnotation {
    pub id: String,
    pub category: String,
    pub bbox: WireBbox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    pub is_ai_generated: bool,
    pub verified: bool,
}

/// Flatten a wire annotation into canvas-native form.
///
/// Confidence only makes sense for detector output, so it is dropped for
/// manual boxes even if nonconforming server data carries one.
pub fn to_canvas(wire: &WireAnnotation) -> CanvasAnnotation {
    CanvasAnnotation {
        id: wire.id.clone(),
        x: wire.bbox.x,
        y: wire.bbox.y,
        width: wire.bbox.width,
        height: wire.bbox.height,
        category: wire.category.clone(),
        confidence: if wire.is_ai_generated {
            wire.confidence
        } else {
            None
        },
        ai_generated: wire.is_ai_generated,
        verified: wire.verified,
    }
}

/// Nest a canvas annotation back into wire form.
pub fn to_wire(ann: &CanvasAnnotation) -> WireAnnotation {
    WireAnnotation {
        id: ann.id.clone(),
        category: ann.category.clone(),
        bbox: WireBbox {
            x: ann.x,
            y: ann.y,
            width: ann.width,
            height: ann.height,
        },
        confidence: if ann.ai_generated {
            ann.confidence
        } else {
            None
        },
        is_ai_generated: ann.ai_generated,
        verified: ann.verified,
    }
}

/// Flatten a whole task's annotation list.
pub fn to_canvas_list(wire: &[WireAnnotation]) -> Vec<CanvasAnnotation> {
    wire.iter().map(to_canvas).collect()
}

/// Nest a whole working list for transmission.
pub fn to_wire_list(annotations: &[CanvasAnnotation]) -> Vec<WireAnnotation> {
    annotations.iter().map(to_wire).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai_wire() -> WireAnnotation {
        WireAnnotation {
            id: "srv-42".into(),
            category: "laptop".into(),
            bbox: WireBbox {
                x: 10.0,
                y: 10.0,
                width: 20.0,
                height: 20.0,
            },
            confidence: Some(0.8),
            is_ai_generated: true,
            verified: false,
        }
    }

    #[test]
    fn test_wire_round_trip_preserves_every_field() {
        let wire = ai_wire();
        let back = to_wire(&to_canvas(&wire));
        assert_eq!(back, wire);
    }

    #[test]
    fn test_manual_round_trip() {
        let wire = WireAnnotation {
            id: "local-1".into(),
            category: "battery".into(),
            bbox: WireBbox {
                x: 1.5,
                y: 2.5,
                width: 3.5,
                height: 4.5,
            },
            confidence: None,
            is_ai_generated: false,
            verified: true,
        };
        assert_eq!(to_wire(&to_canvas(&wire)), wire);
    }

    #[test]
    fn test_confidence_dropped_for_manual_boxes() {
        let mut wire = ai_wire();
        wire.is_ai_generated = false;
        // Nonconforming server data: confidence without AI provenance.
        let canvas = to_canvas(&wire);
        assert!(canvas.confidence.is_none());
    }

    #[test]
    fn test_bbox_nested_on_the_wire() {
        let json = serde_json::to_value(ai_wire()).unwrap();
        assert!(json.get("bbox").is_some());
        assert!(json.get("x").is_none());
        assert_eq!(json["bbox"]["width"], 20.0);
    }

    #[test]
    fn test_absent_confidence_omitted_from_json() {
        let mut wire = ai_wire();
        wire.confidence = None;
        let json = serde_json::to_string(&wire).unwrap();
        assert!(!json.contains("confidence"));
    }

    #[test]
    fn test_deserializes_without_confidence_field() {
        let json = r#"{
            "id": "a",
            "category": "mouse",
            "bbox": {"x": 0.0, "y": 0.0, "width": 5.0, "height": 5.0},
            "is_ai_generated": false,
            "verified": true
        }"#;
        let wire: WireAnnotation = serde_json::from_str(json).unwrap();
        assert!(wire.confidence.is_none());
    }
}
