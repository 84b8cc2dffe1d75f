use sqlx::PgPool;

#[derive(sqlx::FromRow)]
pub struct ChurchRow {
    pub id: String,
    pub name: String,
    pub contact_email: String,
    pub status: String,
    pub plan: String,
    #[allow(dead_code)]
    pub api_token: String,
    pub created_at: i64,
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<ChurchRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM churches WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_token(pool: &PgPool, token: &str) -> Result<Option<ChurchRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM churches WHERE api_token = $1")
        .bind(token)
        .fetch_optional(pool)
        .await
}

pub async fn email_exists(pool: &PgPool, contact_email: &str) -> Result<bool, sqlx::Error> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM churches WHERE contact_email = $1")
            .bind(contact_email)
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

pub async fn list(pool: &PgPool) -> Result<Vec<ChurchRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM churches ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn update_status(pool: &PgPool, id: &str, status: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE churches SET status = $1 WHERE id = $2")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn update_plan(pool: &PgPool, id: &str, plan: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE churches SET plan = $1 WHERE id = $2")
        .bind(plan)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
