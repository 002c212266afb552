//! Task navigation and persistence orchestration.
//!
//! The navigator owns the session: the ordered task list fetched from the
//! gateway, the current index, and the working [`AnnotationStore`] for the
//! open task. It is the only component that moves annotation state across
//! the gateway boundary, transforming between wire and canvas shapes on
//! the way through.
//!
//! Saves are sequential by construction: every save is awaited before the
//! navigator issues another write or moves on, so a task's writes can
//! never interleave out of order at the server.

use thiserror::Error;

use crate::gateway::{GatewayError, TaskGateway};
use crate::model::{AnnotationTask, TaskStatus, TaskUpdate};
use crate::store::AnnotationStore;
use crate::wire;

/// Errors surfaced by the navigator.
#[derive(Debug, Error)]
pub enum NavigatorError {
    /// Gateway call failed. For the initial task-list fetch this is a
    /// blocking error: no partial list is ever exposed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Task index outside the fetched list.
    #[error("task index {index} out of range (dataset has {len} tasks)")]
    OutOfRange { index: usize, len: usize },

    /// The dataset has no annotation tasks.
    #[error("dataset has no annotation tasks")]
    Empty,
}

/// Sequences through a dataset's annotation tasks, loading and saving the
/// active task's annotations through the gateway.
pub struct TaskNavigator<G: TaskGateway> {
    gateway: G,
    dataset_id: String,
    tasks: Vec<AnnotationTask>,
    current_index: usize,
    store: AnnotationStore,
    last_save_error: Option<String>,
}

impl<G: TaskGateway> TaskNavigator<G> {
    /// Fetch the dataset's ordered task list and open the first task.
    ///
    /// A fetch failure here is blocking: the navigator is not constructed
    /// and the caller should offer a retry.
    pub async fn open(gateway: G, dataset_id: impl Into<String>) -> Result<Self, NavigatorError> {
        let dataset_id = dataset_id.into();
        let tasks = gateway.list_tasks(&dataset_id).await?;
        if tasks.is_empty() {
            return Err(NavigatorError::Empty);
        }
        log::info!("opened dataset {dataset_id}: {} tasks", tasks.len());

        let mut nav = Self {
            gateway,
            dataset_id,
            tasks,
            current_index: 0,
            store: AnnotationStore::new(),
            last_save_error: None,
        };
        nav.seed_store();
        Ok(nav)
    }

    /// Jump to the task at `index` and seed the store with its
    /// annotations and notes.
    pub fn load_task(&mut self, index: usize) -> Result<&AnnotationTask, NavigatorError> {
        if index >= self.tasks.len() {
            return Err(NavigatorError::OutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        self.current_index = index;
        self.seed_store();
        Ok(&self.tasks[index])
    }

    /// Persist the working state. Status is derived from the complete flag
    /// and the annotation count; annotations cross the boundary in wire
    /// form. On success the dirty baseline resets to the saved state.
    pub async fn save(&mut self, mark_completed: bool) -> Result<(), NavigatorError> {
        let task_id = self.tasks[self.current_index].id.clone();
        let update = TaskUpdate {
            annotations: wire::to_wire_list(self.store.annotations()),
            status: TaskStatus::for_save(mark_completed, self.store.len()),
            notes: self.store.notes().to_string(),
        };

        log::info!(
            "saving task {task_id}: {} annotations, status {:?}",
            update.annotations.len(),
            update.status
        );
        let saved = self.gateway.update_task(&task_id, &update).await?;

        self.tasks[self.current_index] = saved;
        self.store.mark_saved();
        self.last_save_error = None;
        Ok(())
    }

    /// Advance to the next task, best-effort saving unsaved edits first.
    ///
    /// A failed save is recorded as a non-blocking warning and navigation
    /// proceeds; losing the warning would strand the user, losing the
    /// session would not. At the last task this is a no-op.
    pub async fn next(&mut self) -> usize {
        self.save_if_dirty().await;
        if self.current_index + 1 < self.tasks.len() {
            self.current_index += 1;
            self.seed_store();
        }
        self.current_index
    }

    /// Retreat to the previous task, best-effort saving first. At the
    /// first task this is a no-op.
    pub async fn previous(&mut self) -> usize {
        self.save_if_dirty().await;
        if self.current_index > 0 {
            self.current_index -= 1;
            self.seed_store();
        }
        self.current_index
    }

    /// Mark the current task completed and move on to the next one,
    /// unless this is the last task.
    pub async fn complete(&mut self) -> Result<usize, NavigatorError> {
        self.save(true).await?;
        Ok(self.next().await)
    }

    /// Re-fetch the task list to pick up server-side status changes.
    /// Keeps the current position clamped to the new list length.
    pub async fn refresh(&mut self) -> Result<(), NavigatorError> {
        let tasks = self.gateway.list_tasks(&self.dataset_id).await?;
        if tasks.is_empty() {
            return Err(NavigatorError::Empty);
        }
        self.tasks = tasks;
        self.current_index = self.current_index.min(self.tasks.len() - 1);
        Ok(())
    }

    /// Completion percentage across the fetched task list, derived from
    /// each task's status.
    pub fn progress(&self) -> f32 {
        let done = self.tasks.iter().filter(|t| t.status.is_done()).count();
        done as f32 / self.tasks.len() as f32 * 100.0
    }

    pub fn current_task(&self) -> &AnnotationTask {
        &self.tasks[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn tasks(&self) -> &[AnnotationTask] {
        &self.tasks
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AnnotationStore {
        &mut self.store
    }

    /// The retained warning from the most recent failed best-effort save,
    /// cleared by the next successful save.
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    async fn save_if_dirty(&mut self) {
        if !self.store.is_dirty() {
            return;
        }
        if let Err(err) = self.save(false).await {
            log::warn!("best-effort save before navigation failed: {err}");
            self.last_save_error = Some(err.to_string());
        }
    }

    fn seed_store(&mut self) {
        let task = &self.tasks[self.current_index];
        self.store
            .load(wire::to_canvas_list(&task.annotations), task.notes.clone());
    }
}
