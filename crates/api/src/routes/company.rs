use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/companies", get(handlers::company::list_companies))
        .route("/api/companies", post(handlers::company::create_company))
        .route("/api/companies/:id", get(handlers::company::get_company))
        .route("/api/companies/:id", put(handlers::company::update_company))
        .route(
            "/api/companies/:id",
            delete(handlers::company::delete_company),
        )
}
