use crate::models::DbSlot;
use eyre::Result;
use slotbook_core::models::slot::ReservationOutcome;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts a company's generated slot times as one batch.
///
/// Generation and persistence are kept separate: the caller generates the
/// full timetable first and this function stores it with a single
/// statement, so a company never ends up with half a timetable.
pub async fn create_slots(
    pool: &Pool<Postgres>,
    company_id: Uuid,
    times: &[String],
) -> Result<Vec<DbSlot>> {
    if times.is_empty() {
        return Ok(Vec::new());
    }

    tracing::debug!("Creating {} slots for company {}", times.len(), company_id);

    let slots = sqlx::query_as::<_, DbSlot>(
        r#"
        INSERT INTO slots (id, company_id, time)
        SELECT gen_random_uuid(), $1, t.time
        FROM UNNEST($2::text[]) WITH ORDINALITY AS t(time, ord)
        ORDER BY t.ord
        RETURNING id, company_id, time, student_id, created_at
        "#,
    )
    .bind(company_id)
    .bind(times)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

pub async fn get_slots_by_company_id(
    pool: &Pool<Postgres>,
    company_id: Uuid,
) -> Result<Vec<DbSlot>> {
    // Times are zero-padded HH:MM, so lexicographic order is time order.
    let slots = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, company_id, time, student_id, created_at
        FROM slots
        WHERE company_id = $1
        ORDER BY time ASC
        "#,
    )
    .bind(company_id)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

pub async fn get_slot_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSlot>> {
    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, company_id, time, student_id, created_at
        FROM slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(slot)
}

/// Reserves a slot for a student.
///
/// The write is a single compare-and-set: the `UPDATE` only matches while
/// `student_id` is still NULL, so of two concurrent reservation attempts
/// exactly one wins and the other observes the slot as taken. An occupied
/// slot reports [`ReservationOutcome::AlreadyReserved`] with the original
/// student left in place; an unknown slot id reports
/// [`ReservationOutcome::NotFound`].
pub async fn reserve_slot(
    pool: &Pool<Postgres>,
    slot_id: Uuid,
    student_id: Uuid,
) -> Result<ReservationOutcome> {
    let updated = sqlx::query(
        r#"
        UPDATE slots
        SET student_id = $2
        WHERE id = $1 AND student_id IS NULL
        "#,
    )
    .bind(slot_id)
    .bind(student_id)
    .execute(pool)
    .await?;

    if updated.rows_affected() > 0 {
        tracing::debug!("Slot {} reserved for student {}", slot_id, student_id);
        return Ok(ReservationOutcome::Reserved);
    }

    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM slots WHERE id = $1)
        "#,
    )
    .bind(slot_id)
    .fetch_one(pool)
    .await?;

    if exists {
        Ok(ReservationOutcome::AlreadyReserved)
    } else {
        Ok(ReservationOutcome::NotFound)
    }
}
