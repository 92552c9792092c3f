use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use eyre::Result;
use std::sync::Arc;
use slotbook_core::{
    errors::BookingError,
    models::slot::{ReservationOutcome, ReserveSlotRequest, ReserveSlotResponse, SlotResponse},
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn get_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SlotResponse>, AppError> {
    let db_slot = slotbook_db::repositories::slot::get_slot_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Slot with ID {} not found", id)))?;

    Ok(Json(SlotResponse {
        id: db_slot.id,
        time: db_slot.time,
        student: db_slot.student_id,
    }))
}

/// Reserves a slot for a student.
///
/// The repository performs the claim as an atomic compare-and-set, so the
/// handler only translates the outcome: a fresh reservation is 200, an
/// occupied slot is 409 with the outcome in the body (the domain treats it
/// as an outcome, not an error), and an unknown slot is 404.
#[axum::debug_handler]
pub async fn reserve_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReserveSlotRequest>,
) -> Result<(StatusCode, Json<ReserveSlotResponse>), AppError> {
    let outcome = slotbook_db::repositories::slot::reserve_slot(
        &state.db_pool,
        id,
        payload.student_id,
    )
    .await
    .map_err(BookingError::Database)?;

    let status = match outcome {
        ReservationOutcome::Reserved => StatusCode::OK,
        ReservationOutcome::AlreadyReserved => StatusCode::CONFLICT,
        ReservationOutcome::NotFound => {
            return Err(AppError(BookingError::NotFound(format!(
                "Slot with ID {} not found",
                id
            ))));
        }
    };

    let response = ReserveSlotResponse {
        slot_id: id,
        outcome,
    };

    Ok((status, Json(response)))
}
