use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create companies table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS companies (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            company_id UUID NOT NULL REFERENCES companies(id),
            time VARCHAR(16) NOT NULL,
            student_id UUID NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create trainings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS trainings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create company_trainings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS company_trainings (
            company_id UUID NOT NULL REFERENCES companies(id),
            training_id UUID NOT NULL REFERENCES trainings(id),
            PRIMARY KEY (company_id, training_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement at a time: prepared statements do not
    // accept multiple commands
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_slots_company_id ON slots(company_id)",
        "CREATE INDEX IF NOT EXISTS idx_slots_student_id ON slots(student_id)",
        "CREATE INDEX IF NOT EXISTS idx_company_trainings_company_id ON company_trainings(company_id)",
        "CREATE INDEX IF NOT EXISTS idx_company_trainings_training_id ON company_trainings(training_id)",
    ];
    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
