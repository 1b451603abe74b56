use axum::Json;

use crate::message::{ModelStatus, ServiceStatus};

pub async fn health_handler() -> Json<ServiceStatus> {
    Json(ServiceStatus::current())
}

pub async fn model_status_handler() -> Json<ModelStatus> {
    Json(ModelStatus::current())
}
