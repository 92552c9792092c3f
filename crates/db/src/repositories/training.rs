use crate::models::DbTraining;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_training(pool: &Pool<Postgres>, name: &str) -> Result<DbTraining> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let training = sqlx::query_as::<_, DbTraining>(
        r#"
        INSERT INTO trainings (id, name, created_at)
        VALUES ($1, $2, $3)
        RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(training)
}

pub async fn list_trainings(pool: &Pool<Postgres>) -> Result<Vec<DbTraining>> {
    let trainings = sqlx::query_as::<_, DbTraining>(
        r#"
        SELECT id, name, created_at
        FROM trainings
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(trainings)
}

pub async fn get_trainings_by_company_id(
    pool: &Pool<Postgres>,
    company_id: Uuid,
) -> Result<Vec<DbTraining>> {
    let trainings = sqlx::query_as::<_, DbTraining>(
        r#"
        SELECT t.id, t.name, t.created_at
        FROM trainings t
        JOIN company_trainings ct ON ct.training_id = t.id
        WHERE ct.company_id = $1
        ORDER BY t.name ASC
        "#,
    )
    .bind(company_id)
    .fetch_all(pool)
    .await?;

    Ok(trainings)
}

/// Replaces a company's training associations with the given set.
pub async fn set_company_trainings(
    pool: &Pool<Postgres>,
    company_id: Uuid,
    training_ids: &[Uuid],
) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM company_trainings WHERE company_id = $1")
        .bind(company_id)
        .execute(&mut *tx)
        .await?;

    if !training_ids.is_empty() {
        sqlx::query(
            r#"
            INSERT INTO company_trainings (company_id, training_id)
            SELECT $1, t.training_id
            FROM UNNEST($2::uuid[]) AS t(training_id)
            "#,
        )
        .bind(company_id)
        .bind(training_ids)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}
