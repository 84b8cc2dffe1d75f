use shared::models::{CheckIn, CheckInCreate, CheckInUpdate};
use sqlx::PgPool;

pub async fn create(
    pool: &PgPool,
    church_id: &str,
    id: i64,
    convert_id: i64,
    payload: &CheckInCreate,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO check_ins
            (id, church_id, convert_id, method, note, follow_up_at, completed, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        "#,
    )
    .bind(id)
    .bind(church_id)
    .bind(convert_id)
    .bind(&payload.method)
    .bind(&payload.note)
    .bind(payload.follow_up_at)
    .bind(payload.completed)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(
    pool: &PgPool,
    church_id: &str,
    id: i64,
) -> Result<Option<CheckIn>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM check_ins WHERE church_id = $1 AND id = $2")
        .bind(church_id)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_for_convert(
    pool: &PgPool,
    church_id: &str,
    convert_id: i64,
) -> Result<Vec<CheckIn>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM check_ins WHERE church_id = $1 AND convert_id = $2 ORDER BY created_at DESC",
    )
    .bind(church_id)
    .bind(convert_id)
    .fetch_all(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    church_id: &str,
    id: i64,
    payload: &CheckInUpdate,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE check_ins SET
            method = COALESCE($1, method),
            note = COALESCE($2, note),
            follow_up_at = COALESCE($3, follow_up_at),
            completed = COALESCE($4, completed),
            updated_at = $5
        WHERE church_id = $6 AND id = $7
        "#,
    )
    .bind(&payload.method)
    .bind(&payload.note)
    .bind(payload.follow_up_at)
    .bind(payload.completed)
    .bind(now)
    .bind(church_id)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, church_id: &str, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM check_ins WHERE church_id = $1 AND id = $2")
        .bind(church_id)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
