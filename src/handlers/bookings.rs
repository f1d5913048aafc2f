use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::errors::AppError;
use crate::models::{Booking, NewBooking};
use crate::state::AppState;

// GET /booking
pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    Json(state.store.list())
}

// POST /booking
//
// Answers 200 with every booking, not just the new one; existing clients rely
// on that shape.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewBooking>, JsonRejection>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let Json(candidate) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable booking request");
        AppError::from(rejection)
    })?;

    candidate.validate().map_err(|errors| {
        tracing::debug!(error = %errors, "booking request failed validation");
        AppError::from(errors)
    })?;

    let bookings = state.store.create(candidate)?;
    Ok(Json(bookings))
}
