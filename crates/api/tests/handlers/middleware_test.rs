use axum::{body, http::StatusCode, response::IntoResponse};
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::errors::BookingError;

use slotbook_api::middleware::error_handling::AppError;

#[rstest]
#[case(BookingError::NotFound("missing".to_string()), StatusCode::NOT_FOUND)]
#[case(BookingError::Validation("bad input".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::TimeFormat("bad time".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::InvalidWindow("bad window".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::Database(eyre::eyre!("db down")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] err: BookingError, #[case] expected: StatusCode) {
    let response = AppError(err).into_response();
    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_error_body_is_json() {
    let response =
        AppError(BookingError::NotFound("Slot not found".to_string())).into_response();

    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let json: serde_json::Value =
        serde_json::from_slice(&bytes).expect("Error body should be JSON");

    assert_eq!(json["error"], "Resource not found: Slot not found");
}

#[test]
fn test_from_booking_error() {
    let err: AppError = BookingError::Validation("bad".to_string()).into();
    assert!(matches!(err, AppError(BookingError::Validation(_))));
}

#[test]
fn test_from_eyre_report() {
    let err: AppError = eyre::eyre!("boom").into();
    assert!(matches!(err, AppError(BookingError::Database(_))));
}
