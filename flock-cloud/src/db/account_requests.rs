use sqlx::PgPool;

#[derive(sqlx::FromRow)]
pub struct AccountRequestRow {
    pub id: i64,
    pub ministry_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub message: Option<String>,
    pub status: String,
    pub created_at: i64,
    pub decided_at: Option<i64>,
}

pub async fn create(
    pool: &PgPool,
    id: i64,
    ministry_name: &str,
    contact_name: &str,
    contact_email: &str,
    message: Option<&str>,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO account_requests (id, ministry_name, contact_name, contact_email, message, status, created_at)
         VALUES ($1, $2, $3, $4, $5, 'pending', $6)",
    )
    .bind(id)
    .bind(ministry_name)
    .bind(contact_name)
    .bind(contact_email)
    .bind(message)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(
    pool: &PgPool,
    id: i64,
) -> Result<Option<AccountRequestRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM account_requests WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Pending sign-up already open for this email?
pub async fn pending_exists_for_email(
    pool: &PgPool,
    contact_email: &str,
) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM account_requests WHERE contact_email = $1 AND status = 'pending'",
    )
    .bind(contact_email)
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}

pub async fn list(
    pool: &PgPool,
    status: Option<&str>,
) -> Result<Vec<AccountRequestRow>, sqlx::Error> {
    match status {
        Some(status) => {
            sqlx::query_as(
                "SELECT * FROM account_requests WHERE status = $1 ORDER BY created_at DESC",
            )
            .bind(status)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as("SELECT * FROM account_requests ORDER BY created_at DESC")
                .fetch_all(pool)
                .await
        }
    }
}

/// Approve a pending request and provision its church in one transaction.
/// Returns false (and writes nothing) if the request was not pending.
pub async fn approve_and_provision(
    pool: &PgPool,
    request_id: i64,
    church_id: &str,
    name: &str,
    contact_email: &str,
    plan: &str,
    api_token: &str,
    now: i64,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "UPDATE account_requests SET status = 'approved', decided_at = $1
         WHERE id = $2 AND status = 'pending'",
    )
    .bind(now)
    .bind(request_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    sqlx::query(
        "INSERT INTO churches (id, name, contact_email, status, plan, api_token, created_at)
         VALUES ($1, $2, $3, 'active', $4, $5, $6)",
    )
    .bind(church_id)
    .bind(name)
    .bind(contact_email)
    .bind(plan)
    .bind(api_token)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(true)
}

/// Mark a pending request decided. Returns false if it was already decided
/// (or does not exist) so the caller can reject double decisions.
pub async fn decide(
    pool: &PgPool,
    id: i64,
    status: &str,
    now: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE account_requests SET status = $1, decided_at = $2
         WHERE id = $3 AND status = 'pending'",
    )
    .bind(status)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
