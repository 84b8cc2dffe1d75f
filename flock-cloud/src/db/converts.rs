use shared::models::{Convert, ConvertCreate, ConvertUpdate};
use sqlx::PgPool;

pub async fn create(
    pool: &PgPool,
    church_id: &str,
    id: i64,
    payload: &ConvertCreate,
    now: i64,
) -> Result<(), sqlx::Error> {
    let custom_responses = payload
        .custom_responses
        .clone()
        .unwrap_or_else(|| serde_json::json!({}));

    sqlx::query(
        r#"
        INSERT INTO converts
            (id, church_id, first_name, last_name, phone, email, gender, age_group,
             address, prayer_request, custom_responses, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
        "#,
    )
    .bind(id)
    .bind(church_id)
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.phone)
    .bind(&payload.email)
    .bind(&payload.gender)
    .bind(&payload.age_group)
    .bind(&payload.address)
    .bind(&payload.prayer_request)
    .bind(custom_responses)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(
    pool: &PgPool,
    church_id: &str,
    id: i64,
) -> Result<Option<Convert>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM converts WHERE church_id = $1 AND id = $2")
        .bind(church_id)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, church_id: &str) -> Result<Vec<Convert>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM converts WHERE church_id = $1 ORDER BY created_at DESC")
        .bind(church_id)
        .fetch_all(pool)
        .await
}

pub async fn update(
    pool: &PgPool,
    church_id: &str,
    id: i64,
    payload: &ConvertUpdate,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE converts SET
            first_name = COALESCE($1, first_name),
            last_name = COALESCE($2, last_name),
            phone = COALESCE($3, phone),
            email = COALESCE($4, email),
            gender = COALESCE($5, gender),
            age_group = COALESCE($6, age_group),
            address = COALESCE($7, address),
            prayer_request = COALESCE($8, prayer_request),
            custom_responses = COALESCE($9, custom_responses),
            updated_at = $10
        WHERE church_id = $11 AND id = $12
        "#,
    )
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.phone)
    .bind(&payload.email)
    .bind(&payload.gender)
    .bind(&payload.age_group)
    .bind(&payload.address)
    .bind(&payload.prayer_request)
    .bind(&payload.custom_responses)
    .bind(now)
    .bind(church_id)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, church_id: &str, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM converts WHERE church_id = $1 AND id = $2")
        .bind(church_id)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
