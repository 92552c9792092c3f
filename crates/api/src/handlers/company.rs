use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use eyre::Result;
use std::sync::Arc;
use slotbook_core::{
    errors::BookingError,
    models::{
        company::{
            CreateCompanyRequest, CreateCompanyResponse, DeleteCompanyResponse,
            GetCompanyResponse, UpdateCompanyRequest, UpdateCompanyResponse,
        },
        slot::SlotResponse,
        training::TrainingResponse,
    },
    schedule::generate_slots,
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Creates a company and generates its slot timetable.
///
/// The timetable is produced in full from the process-wide slot window and
/// persisted as one batch, then the requested trainings are attached. Slots
/// are generated exactly once here; later edits never regenerate them.
#[axum::debug_handler]
pub async fn create_company(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<Json<CreateCompanyResponse>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Company name must not be empty".to_string(),
        )));
    }

    // Create company in database
    let db_company = slotbook_db::repositories::company::create_company(
        &state.db_pool,
        &payload.name,
    )
    .await
    .map_err(BookingError::Database)?;

    // Generate the timetable and persist it as a single batch
    let times: Vec<String> = generate_slots(&state.slot_window)
        .into_iter()
        .map(|t| t.format())
        .collect();

    let slots = slotbook_db::repositories::slot::create_slots(
        &state.db_pool,
        db_company.id,
        &times,
    )
    .await
    .map_err(BookingError::Database)?;

    // Attach trainings if provided
    if !payload.training_ids.is_empty() {
        slotbook_db::repositories::training::set_company_trainings(
            &state.db_pool,
            db_company.id,
            &payload.training_ids,
        )
        .await
        .map_err(BookingError::Database)?;
    }

    let response = CreateCompanyResponse {
        id: db_company.id,
        name: db_company.name,
        created_at: db_company.created_at,
        slot_count: slots.len(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn list_companies(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<CreateCompanyResponse>>, AppError> {
    let db_companies = slotbook_db::repositories::company::list_companies(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    let mut companies = Vec::with_capacity(db_companies.len());
    for company in db_companies {
        let slots = slotbook_db::repositories::slot::get_slots_by_company_id(
            &state.db_pool,
            company.id,
        )
        .await
        .map_err(BookingError::Database)?;

        companies.push(CreateCompanyResponse {
            id: company.id,
            name: company.name,
            created_at: company.created_at,
            slot_count: slots.len(),
        });
    }

    Ok(Json(companies))
}

#[axum::debug_handler]
pub async fn get_company(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetCompanyResponse>, AppError> {
    // Get company from database
    let db_company = slotbook_db::repositories::company::get_company_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Company with ID {} not found", id)))?;

    // Get slots and trainings for company
    let slots = slotbook_db::repositories::slot::get_slots_by_company_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    let trainings =
        slotbook_db::repositories::training::get_trainings_by_company_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?;

    let response = GetCompanyResponse {
        id: db_company.id,
        name: db_company.name,
        created_at: db_company.created_at,
        slots: slots
            .into_iter()
            .map(|slot| SlotResponse {
                id: slot.id,
                time: slot.time,
                student: slot.student_id,
            })
            .collect(),
        trainings: trainings
            .into_iter()
            .map(|training| TrainingResponse {
                id: training.id,
                name: training.name,
            })
            .collect(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn update_company(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCompanyRequest>,
) -> Result<Json<UpdateCompanyResponse>, AppError> {
    // Update company name if provided
    if payload.name.is_some() {
        slotbook_db::repositories::company::update_company(
            &state.db_pool,
            id,
            payload.name.as_deref(),
        )
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Company with ID {} not found", id)))?;
    } else {
        // Nothing to rename; still fail loudly on an unknown company
        slotbook_db::repositories::company::get_company_by_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| BookingError::NotFound(format!("Company with ID {} not found", id)))?;
    }

    // Replace training associations if provided
    if let Some(training_ids) = &payload.training_ids {
        slotbook_db::repositories::training::set_company_trainings(
            &state.db_pool,
            id,
            training_ids,
        )
        .await
        .map_err(BookingError::Database)?;
    }

    let response = UpdateCompanyResponse {
        id,
        updated_at: Utc::now(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn delete_company(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteCompanyResponse>, AppError> {
    let deleted = slotbook_db::repositories::company::delete_company(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    if !deleted {
        return Err(AppError(BookingError::NotFound(format!(
            "Company with ID {} not found",
            id
        ))));
    }

    Ok(Json(DeleteCompanyResponse { id, deleted }))
}
