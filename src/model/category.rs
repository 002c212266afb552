//! E-waste category taxonomy.
//!
//! The taxonomy is a flat list of string labels shared with the server-side
//! enum. It is treated as configuration: the default set below matches the
//! server, but deployments can supply their own list through [`AppConfig`].
//!
//! [`AppConfig`]: crate::config::AppConfig

use serde::{Deserialize, Serialize};

/// Default e-waste object classes, in the order they appear in dropdowns.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "smartphone",
    "laptop",
    "tablet",
    "desktop_computer",
    "monitor",
    "keyboard",
    "mouse",
    "printer",
    "television",
    "camera",
    "headphones",
    "speakers",
    "game_console",
    "router",
    "cables",
    "battery",
    "charger",
    "circuit_board",
    "hard_drive",
    "memory_card",
    "other_electronic",
];

/// Ordered set of category labels valid for annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    /// Create a category set from an explicit label list.
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Check whether a label belongs to the taxonomy.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// First label in the list, the default for newly drawn boxes.
    pub fn default_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }

    /// Iterate labels in dropdown order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Stable display color for a label (RGBA), derived from its position
    /// using the golden angle for good hue distribution.
    pub fn color_for(&self, label: &str) -> [f32; 4] {
        let idx = self
            .labels
            .iter()
            .position(|l| l == label)
            .unwrap_or(self.labels.len());
        let hue = (idx as f32 * 137.5) % 360.0;
        let (r, g, b) = hsv_to_rgb(hue, 0.7, 0.9);
        [r, g, b, 1.0]
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect())
    }
}

/// Convert HSV to RGB (h in degrees, s and v in 0-1).
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}
