//! External persistence gateway for annotation tasks.
//!
//! The core talks to durable storage only through the narrow
//! [`TaskGateway`] contract; the REST implementation lives in
//! [`http`].

mod http;

use thiserror::Error;

use crate::model::{AnnotationTask, TaskUpdate};

pub use http::HttpTaskGateway;

/// Errors from the task gateway layer.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Fetch/update operations the annotation core needs from the server.
///
/// Implementations must return task lists in a stable order across calls
/// for the same dataset; the navigator uses that order as its navigation
/// sequence.
#[allow(async_fn_in_trait)]
pub trait TaskGateway {
    /// List the dataset's annotation tasks in stable order.
    async fn list_tasks(&self, dataset_id: &str) -> Result<Vec<AnnotationTask>, GatewayError>;

    /// Persist a task's annotations, status, and notes. The server
    /// recomputes dataset aggregate counts as a side effect.
    async fn update_task(
        &self,
        task_id: &str,
        update: &TaskUpdate,
    ) -> Result<AnnotationTask, GatewayError>;

    /// Claim a task for the current annotator (collaborator-owned flow).
    async fn assign_task(&self, task_id: &str) -> Result<AnnotationTask, GatewayError>;

    /// Fetch image bytes from a task's (possibly proxy-rewritten) URL.
    /// The URL is requested opaquely; any proxying happened upstream.
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, GatewayError>;
}
