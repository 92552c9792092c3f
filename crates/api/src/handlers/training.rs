use axum::{Json, extract::State};
use eyre::Result;
use std::sync::Arc;
use slotbook_core::{
    errors::BookingError,
    models::training::{CreateTrainingRequest, TrainingResponse},
};

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn list_trainings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<TrainingResponse>>, AppError> {
    let db_trainings = slotbook_db::repositories::training::list_trainings(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    let trainings = db_trainings
        .into_iter()
        .map(|training| TrainingResponse {
            id: training.id,
            name: training.name,
        })
        .collect();

    Ok(Json(trainings))
}

#[axum::debug_handler]
pub async fn create_training(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateTrainingRequest>,
) -> Result<Json<TrainingResponse>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Training name must not be empty".to_string(),
        )));
    }

    let db_training =
        slotbook_db::repositories::training::create_training(&state.db_pool, &payload.name)
            .await
            .map_err(BookingError::Database)?;

    Ok(Json(TrainingResponse {
        id: db_training.id,
        name: db_training.name,
    }))
}
