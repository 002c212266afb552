//! ecotag - bounding-box annotation core for e-waste detection training data.
//!
//! Sequences through a dataset's annotation tasks, renders each task's
//! image and bounding boxes on an interactive canvas, reconciles AI and
//! manual annotations, and syncs the result back through a REST gateway.

pub mod canvas;
pub mod config;
pub mod constants;
pub mod gateway;
pub mod geometry;
pub mod model;
pub mod navigator;
pub mod store;
pub mod wire;

pub use canvas::AnnotationCanvas;
pub use gateway::{HttpTaskGateway, TaskGateway};
pub use navigator::TaskNavigator;
pub use store::AnnotationStore;
