use shared::models::{Member, MemberCreate, MemberUpdate};
use sqlx::PgPool;

pub async fn create(
    pool: &PgPool,
    church_id: &str,
    id: i64,
    payload: &MemberCreate,
    now: i64,
) -> Result<(), sqlx::Error> {
    let custom_responses = payload
        .custom_responses
        .clone()
        .unwrap_or_else(|| serde_json::json!({}));

    sqlx::query(
        r#"
        INSERT INTO members
            (id, church_id, first_name, last_name, phone, email, address, date_of_birth,
             member_since, ministry, custom_responses, is_active, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, TRUE, $12, $12)
        "#,
    )
    .bind(id)
    .bind(church_id)
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.phone)
    .bind(&payload.email)
    .bind(&payload.address)
    .bind(&payload.date_of_birth)
    .bind(&payload.member_since)
    .bind(&payload.ministry)
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
) -> Result<Option<Member>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM members WHERE church_id = $1 AND id = $2")
        .bind(church_id)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, church_id: &str) -> Result<Vec<Member>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM members WHERE church_id = $1 ORDER BY last_name, first_name",
    )
    .bind(church_id)
    .fetch_all(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    church_id: &str,
    id: i64,
    payload: &MemberUpdate,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE members SET
            first_name = COALESCE($1, first_name),
            last_name = COALESCE($2, last_name),
            phone = COALESCE($3, phone),
            email = COALESCE($4, email),
            address = COALESCE($5, address),
            date_of_birth = COALESCE($6, date_of_birth),
            member_since = COALESCE($7, member_since),
            ministry = COALESCE($8, ministry),
            custom_responses = COALESCE($9, custom_responses),
            is_active = COALESCE($10, is_active),
            updated_at = $11
        WHERE church_id = $12 AND id = $13
        "#,
    )
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.phone)
    .bind(&payload.email)
    .bind(&payload.address)
    .bind(&payload.date_of_birth)
    .bind(&payload.member_since)
    .bind(&payload.ministry)
    .bind(&payload.custom_responses)
    .bind(payload.is_active)
    .bind(now)
    .bind(church_id)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, church_id: &str, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM members WHERE church_id = $1 AND id = $2")
        .bind(church_id)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
