//! REST implementation of the task gateway using [`reqwest`].

use serde::de::DeserializeOwned;

use crate::model::{AnnotationTask, TaskUpdate};

use super::{GatewayError, TaskGateway};

/// HTTP client for the annotation platform's REST API.
pub struct HttpTaskGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskGateway {
    /// Create a gateway for the given API base URL, e.g.
    /// `https://api.example.org/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a gateway reusing an existing [`reqwest::Client`] (useful
    /// for connection pooling).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(GatewayError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}

impl TaskGateway for HttpTaskGateway {
    async fn list_tasks(&self, dataset_id: &str) -> Result<Vec<AnnotationTask>, GatewayError> {
        let response = self
            .client
            .get(format!(
                "{}/datasets/{dataset_id}/annotation-tasks",
                self.base_url
            ))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn update_task(
        &self,
        task_id: &str,
        update: &TaskUpdate,
    ) -> Result<AnnotationTask, GatewayError> {
        let response = self
            .client
            .put(format!("{}/annotation-tasks/{task_id}", self.base_url))
            .json(update)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn assign_task(&self, task_id: &str) -> Result<AnnotationTask, GatewayError> {
        let response = self
            .client
            .post(format!(
                "{}/annotation-tasks/{task_id}/assign",
                self.base_url
            ))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, GatewayError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            Err(GatewayError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}
