use axum::Json;
use chrono::Utc;
use mockall::predicate;
use pretty_assertions::assert_eq;
use slotbook_core::{
    errors::BookingError,
    models::{
        company::{CreateCompanyRequest, CreateCompanyResponse, GetCompanyResponse},
        slot::SlotResponse,
        training::TrainingResponse,
    },
    schedule::generate_slots,
};
use slotbook_db::models::{DbCompany, DbSlot, DbTraining};
use uuid::Uuid;

use crate::test_utils::TestContext;
use slotbook_api::middleware::error_handling::AppError;

// Test wrappers that run the handler logic against mock repositories
async fn test_get_company_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
) -> Result<Json<GetCompanyResponse>, AppError> {
    let db_company = ctx
        .company_repo
        .get_company_by_id(id)
        .await?
        .ok_or_else(|| AppError(BookingError::NotFound(format!(
            "Company with ID {} not found",
            id
        ))))?;

    let slots = ctx.slot_repo.get_slots_by_company_id(id).await?;
    let trainings = ctx.training_repo.get_trainings_by_company_id(id).await?;

    Ok(Json(GetCompanyResponse {
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
    }))
}

async fn test_create_company_wrapper(
    ctx: &mut TestContext,
    request: CreateCompanyRequest,
) -> Result<Json<CreateCompanyResponse>, AppError> {
    // Create static str for mockall
    let name: &'static str = Box::leak(request.name.clone().into_boxed_str());
    let db_company = ctx.company_repo.create_company(name).await?;

    // Generate the timetable and persist it as one batch
    let times: Vec<String> = generate_slots(&ctx.slot_window)
        .into_iter()
        .map(|t| t.format())
        .collect();
    let slots = ctx.slot_repo.create_slots(db_company.id, times).await?;

    if !request.training_ids.is_empty() {
        ctx.training_repo
            .set_company_trainings(db_company.id, request.training_ids.clone())
            .await?;
    }

    Ok(Json(CreateCompanyResponse {
        id: db_company.id,
        name: db_company.name,
        created_at: db_company.created_at,
        slot_count: slots.len(),
    }))
}

fn db_company(id: Uuid, name: &str) -> DbCompany {
    DbCompany {
        id,
        name: name.to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_create_company_generates_full_timetable() {
    let mut ctx = TestContext::new();
    let company_id = Uuid::new_v4();

    ctx.company_repo
        .expect_create_company()
        .with(predicate::eq("Acme"))
        .returning(move |name| Ok(db_company(company_id, name)));

    // The default window 14:00-16:45 at 15 minutes yields 11 slots,
    // 14:00 through 16:30
    ctx.slot_repo
        .expect_create_slots()
        .withf(move |id, times| {
            *id == company_id
                && times.len() == 11
                && times.first().map(String::as_str) == Some("14:00")
                && times.last().map(String::as_str) == Some("16:30")
        })
        .returning(|company_id, times| {
            Ok(times
                .into_iter()
                .map(|time| DbSlot {
                    id: Uuid::new_v4(),
                    company_id,
                    time,
                    student_id: None,
                    created_at: Utc::now(),
                })
                .collect())
        });

    let request = CreateCompanyRequest {
        name: "Acme".to_string(),
        training_ids: vec![],
    };

    let Json(response) = test_create_company_wrapper(&mut ctx, request)
        .await
        .expect("Create company should succeed");

    assert_eq!(response.id, company_id);
    assert_eq!(response.name, "Acme");
    assert_eq!(response.slot_count, 11);
}

#[tokio::test]
async fn test_create_company_attaches_trainings() {
    let mut ctx = TestContext::new();
    let company_id = Uuid::new_v4();
    let training_ids = vec![Uuid::new_v4(), Uuid::new_v4()];

    ctx.company_repo
        .expect_create_company()
        .returning(move |name| Ok(db_company(company_id, name)));
    ctx.slot_repo
        .expect_create_slots()
        .returning(|_, _| Ok(vec![]));

    let expected_ids = training_ids.clone();
    ctx.training_repo
        .expect_set_company_trainings()
        .withf(move |id, ids| *id == company_id && *ids == expected_ids)
        .times(1)
        .returning(|_, _| Ok(()));

    let request = CreateCompanyRequest {
        name: "Acme".to_string(),
        training_ids,
    };

    let Json(response) = test_create_company_wrapper(&mut ctx, request)
        .await
        .expect("Create company should succeed");

    assert_eq!(response.id, company_id);
    assert_eq!(response.slot_count, 0);
}

#[tokio::test]
async fn test_get_company_returns_slots_and_trainings() {
    let mut ctx = TestContext::new();
    let company_id = Uuid::new_v4();
    let student_id = Uuid::new_v4();

    ctx.company_repo
        .expect_get_company_by_id()
        .with(predicate::eq(company_id))
        .returning(move |id| Ok(Some(db_company(id, "Acme"))));

    ctx.slot_repo
        .expect_get_slots_by_company_id()
        .with(predicate::eq(company_id))
        .returning(move |company_id| {
            Ok(vec![
                DbSlot {
                    id: Uuid::new_v4(),
                    company_id,
                    time: "14:00".to_string(),
                    student_id: Some(student_id),
                    created_at: Utc::now(),
                },
                DbSlot {
                    id: Uuid::new_v4(),
                    company_id,
                    time: "14:15".to_string(),
                    student_id: None,
                    created_at: Utc::now(),
                },
            ])
        });

    ctx.training_repo
        .expect_get_trainings_by_company_id()
        .with(predicate::eq(company_id))
        .returning(|_| {
            Ok(vec![DbTraining {
                id: Uuid::new_v4(),
                name: "First Aid".to_string(),
                created_at: Utc::now(),
            }])
        });

    let Json(response) = test_get_company_wrapper(&mut ctx, company_id)
        .await
        .expect("Get company should succeed");

    assert_eq!(response.name, "Acme");
    assert_eq!(response.slots.len(), 2);
    assert_eq!(response.slots[0].time, "14:00");
    assert_eq!(response.slots[0].student, Some(student_id));
    assert_eq!(response.slots[1].student, None);
    assert_eq!(response.trainings.len(), 1);
    assert_eq!(response.trainings[0].name, "First Aid");
}

#[tokio::test]
async fn test_get_company_not_found() {
    let mut ctx = TestContext::new();
    let company_id = Uuid::new_v4();

    ctx.company_repo
        .expect_get_company_by_id()
        .with(predicate::eq(company_id))
        .returning(|_| Ok(None));

    let err = test_get_company_wrapper(&mut ctx, company_id)
        .await
        .expect_err("Unknown company should not resolve");

    assert!(matches!(err, AppError(BookingError::NotFound(_))));
}

#[tokio::test]
async fn test_state_carries_slot_window() {
    // build_state spawns sqlx pool maintenance tasks, so it needs a
    // runtime even though the pool is lazy
    let ctx = TestContext::new();
    let state = ctx.build_state();

    assert_eq!(state.slot_window.slot_count(), 11);
}
