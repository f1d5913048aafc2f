use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub const SERVICE_NAME: &str = "hotel-booking";

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub service: String,
    pub count: usize,
}

// GET /
pub async fn service_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: SERVICE_NAME.to_string(),
        count: state.store.count(),
    })
}
