//! Annotation task and dataset wire types.

use serde::{Deserialize, Serialize};

use crate::wire::WireAnnotation;

/// Lifecycle status of an annotation task.
///
/// The core only ever writes back `Pending`, `InProgress`, or `Completed`;
/// `Reviewed` and `Rejected` arrive from the external review workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Reviewed,
    Rejected,
}

impl TaskStatus {
    /// Whether this status counts toward dataset completion progress.
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Reviewed)
    }

    /// Compute the status to persist on save.
    ///
    /// An explicit complete action wins; otherwise a non-empty annotation
    /// list means work has started.
    pub fn for_save(mark_completed: bool, annotation_count: usize) -> Self {
        if mark_completed {
            TaskStatus::Completed
        } else if annotation_count > 0 {
            TaskStatus::InProgress
        } else {
            TaskStatus::Pending
        }
    }
}

/// One image within a dataset awaiting bounding-box labeling.
///
/// Created server-side when images are added to a dataset; the core reads
/// it, edits its in-memory annotation list, and writes it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationTask {
    pub id: String,
    pub dataset_id: String,
    /// URL the canvas loads the image from. May already be rewritten to go
    /// through a proxy; the core requests it opaquely.
    pub image_url: String,
    #[serde(default)]
    pub original_filename: Option<String>,
    pub status: TaskStatus,
    /// Persisted annotations in wire format (`bbox`-nested coordinates).
    #[serde(default)]
    pub annotations: Vec<WireAnnotation>,
    #[serde(default)]
    pub notes: String,
}

/// Fields written back to the gateway when saving a task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskUpdate {
    pub annotations: Vec<WireAnnotation>,
    pub status: TaskStatus,
    pub notes: String,
}

/// An ordered collection of annotation tasks (collaborator-owned).
///
/// The aggregate counts are recomputed server-side after each task save;
/// the core never maintains them itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub total_images: u32,
    #[serde(default)]
    pub annotated_images: u32,
}
