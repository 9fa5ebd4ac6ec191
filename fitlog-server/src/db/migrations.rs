//! Schema bootstrap

use sqlx::PgPool;

/// Create the users table when absent. Safe to run on every startup.
///
/// Username requiredness lives here as store constraints rather than in
/// the create handler; a create with no usable username fails at the
/// insert, which is exactly the documented failure response. The log is
/// an embedded JSONB array so an append stays a single-statement update.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            username TEXT NOT NULL CHECK (username <> ''),
            log JSONB NOT NULL DEFAULT '[]'::jsonb,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
