//! Data models for the ecotag annotation core.

mod annotation;
mod category;
mod task;

pub use annotation::CanvasAnnotation;
pub use category::{CategorySet, DEFAULT_CATEGORIES};
pub use task::{AnnotationTask, Dataset, TaskStatus, TaskUpdate};
