use crate::models::DbCompany;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_company(pool: &Pool<Postgres>, name: &str) -> Result<DbCompany> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating company: id={}, name={}", id, name);

    let company = sqlx::query_as::<_, DbCompany>(
        r#"
        INSERT INTO companies (id, name, created_at)
        VALUES ($1, $2, $3)
        RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(company)
}

pub async fn list_companies(pool: &Pool<Postgres>) -> Result<Vec<DbCompany>> {
    let companies = sqlx::query_as::<_, DbCompany>(
        r#"
        SELECT id, name, created_at
        FROM companies
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(companies)
}

pub async fn get_company_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbCompany>> {
    let company = sqlx::query_as::<_, DbCompany>(
        r#"
        SELECT id, name, created_at
        FROM companies
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(company)
}

pub async fn update_company(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
) -> Result<Option<DbCompany>> {
    let company = sqlx::query_as::<_, DbCompany>(
        r#"
        UPDATE companies
        SET name = COALESCE($2, name)
        WHERE id = $1
        RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(company)
}

/// Deletes a company together with its slots and training associations.
///
/// Returns `false` when no company with the given id exists.
pub async fn delete_company(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM company_trainings WHERE company_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM slots WHERE company_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let deleted = sqlx::query("DELETE FROM companies WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(deleted.rows_affected() > 0)
}
