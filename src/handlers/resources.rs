//! Resource directory handler

use axum::Json;

use crate::models::{resource, ResourceCategory};

pub async fn list() -> Json<Vec<ResourceCategory>> {
    Json(resource::directory())
}
