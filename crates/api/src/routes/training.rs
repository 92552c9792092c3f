use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/trainings", get(handlers::training::list_trainings))
        .route("/api/trainings", post(handlers::training::create_training))
}
