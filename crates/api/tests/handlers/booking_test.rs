use axum::{Json, http::StatusCode};
use mockall::predicate;
use pretty_assertions::assert_eq;
use slotbook_core::{
    errors::BookingError,
    models::slot::{ReservationOutcome, ReserveSlotResponse},
};
use uuid::Uuid;

use crate::test_utils::TestContext;
use slotbook_api::middleware::error_handling::AppError;

// Runs the reservation handler logic against the mock slot repository
async fn test_reserve_slot_wrapper(
    ctx: &mut TestContext,
    slot_id: Uuid,
    student_id: Uuid,
) -> Result<(StatusCode, Json<ReserveSlotResponse>), AppError> {
    let outcome = ctx.slot_repo.reserve_slot(slot_id, student_id).await?;

    let status = match outcome {
        ReservationOutcome::Reserved => StatusCode::OK,
        ReservationOutcome::AlreadyReserved => StatusCode::CONFLICT,
        ReservationOutcome::NotFound => {
            return Err(AppError(BookingError::NotFound(format!(
                "Slot with ID {} not found",
                slot_id
            ))));
        }
    };

    Ok((status, Json(ReserveSlotResponse { slot_id, outcome })))
}

#[tokio::test]
async fn test_reserve_free_slot() {
    let mut ctx = TestContext::new();
    let slot_id = Uuid::new_v4();
    let student_id = Uuid::new_v4();

    ctx.slot_repo
        .expect_reserve_slot()
        .with(predicate::eq(slot_id), predicate::eq(student_id))
        .times(1)
        .returning(|_, _| Ok(ReservationOutcome::Reserved));

    let (status, Json(response)) = test_reserve_slot_wrapper(&mut ctx, slot_id, student_id)
        .await
        .expect("Reservation should succeed");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.slot_id, slot_id);
    assert_eq!(response.outcome, ReservationOutcome::Reserved);
}

#[tokio::test]
async fn test_reserve_taken_slot_is_conflict_outcome() {
    let mut ctx = TestContext::new();
    let slot_id = Uuid::new_v4();

    ctx.slot_repo
        .expect_reserve_slot()
        .returning(|_, _| Ok(ReservationOutcome::AlreadyReserved));

    // An occupied slot is reported as an outcome with a 409 status, not as
    // a hard error
    let (status, Json(response)) = test_reserve_slot_wrapper(&mut ctx, slot_id, Uuid::new_v4())
        .await
        .expect("Already-reserved should still produce a response");

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(response.outcome, ReservationOutcome::AlreadyReserved);
}

#[tokio::test]
async fn test_reserve_unknown_slot_is_not_found() {
    let mut ctx = TestContext::new();

    ctx.slot_repo
        .expect_reserve_slot()
        .returning(|_, _| Ok(ReservationOutcome::NotFound));

    let err = test_reserve_slot_wrapper(&mut ctx, Uuid::new_v4(), Uuid::new_v4())
        .await
        .expect_err("Unknown slot should not resolve");

    assert!(matches!(err, AppError(BookingError::NotFound(_))));
}

#[tokio::test]
async fn test_reserve_database_failure_maps_to_app_error() {
    let mut ctx = TestContext::new();

    ctx.slot_repo
        .expect_reserve_slot()
        .returning(|_, _| Err(eyre::eyre!("connection reset")));

    let err = test_reserve_slot_wrapper(&mut ctx, Uuid::new_v4(), Uuid::new_v4())
        .await
        .expect_err("Database failure should surface");

    assert!(matches!(err, AppError(BookingError::Database(_))));
}
