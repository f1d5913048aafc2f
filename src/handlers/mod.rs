pub mod bookings;
pub mod health;
pub mod status;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(status::service_status))
        .route("/health", get(health::health))
        .route(
            "/booking",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
