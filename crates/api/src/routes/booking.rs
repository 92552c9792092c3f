use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots/:id", get(handlers::booking::get_slot))
        .route("/api/slots/:id/reserve", post(handlers::booking::reserve_slot))
}
