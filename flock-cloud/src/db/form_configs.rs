//! Form configuration storage
//!
//! One row per (church, form type). The field list and custom fields
//! are stored as JSONB; an absent row (or an empty field list) means
//! the church is still on the built-in defaults.

use shared::forms::{CustomField, FormConfig, FormFieldConfig, FormType};
use sqlx::PgPool;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(sqlx::FromRow)]
struct FormConfigRow {
    form_type: String,
    title: String,
    hero_title: String,
    description: String,
    field_config: serde_json::Value,
    custom_fields: serde_json::Value,
}

impl FormConfigRow {
    fn into_config(self) -> Result<FormConfig, BoxError> {
        let form_type: FormType = self
            .form_type
            .parse()
            .map_err(|_| format!("unknown form type in storage: {}", self.form_type))?;
        let field_config: Vec<FormFieldConfig> = serde_json::from_value(self.field_config)?;
        let custom_fields: Vec<CustomField> = serde_json::from_value(self.custom_fields)?;

        Ok(FormConfig {
            form_type,
            title: self.title,
            hero_title: self.hero_title,
            description: self.description,
            field_config,
            custom_fields,
        })
    }
}

pub async fn find(
    pool: &PgPool,
    church_id: &str,
    form_type: FormType,
) -> Result<Option<FormConfig>, BoxError> {
    let row: Option<FormConfigRow> = sqlx::query_as(
        "SELECT form_type, title, hero_title, description, field_config, custom_fields
         FROM form_configurations WHERE church_id = $1 AND form_type = $2",
    )
    .bind(church_id)
    .bind(form_type.as_str())
    .fetch_optional(pool)
    .await?;

    row.map(FormConfigRow::into_config).transpose()
}

pub async fn list(pool: &PgPool, church_id: &str) -> Result<Vec<FormConfig>, BoxError> {
    let rows: Vec<FormConfigRow> = sqlx::query_as(
        "SELECT form_type, title, hero_title, description, field_config, custom_fields
         FROM form_configurations WHERE church_id = $1 ORDER BY form_type",
    )
    .bind(church_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(FormConfigRow::into_config).collect()
}

/// Last write wins: a save replaces the stored row wholesale.
pub async fn upsert(
    pool: &PgPool,
    church_id: &str,
    config: &FormConfig,
    now: i64,
) -> Result<(), BoxError> {
    let field_config = serde_json::to_value(&config.field_config)?;
    let custom_fields = serde_json::to_value(&config.custom_fields)?;

    sqlx::query(
        r#"
        INSERT INTO form_configurations
            (church_id, form_type, title, hero_title, description, field_config, custom_fields, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (church_id, form_type)
        DO UPDATE SET title = EXCLUDED.title,
                      hero_title = EXCLUDED.hero_title,
                      description = EXCLUDED.description,
                      field_config = EXCLUDED.field_config,
                      custom_fields = EXCLUDED.custom_fields,
                      updated_at = EXCLUDED.updated_at
        "#,
    )
    .bind(church_id)
    .bind(config.form_type.as_str())
    .bind(&config.title)
    .bind(&config.hero_title)
    .bind(&config.description)
    .bind(field_config)
    .bind(custom_fields)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Drop the stored override so the form falls back to defaults.
pub async fn delete(
    pool: &PgPool,
    church_id: &str,
    form_type: FormType,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM form_configurations WHERE church_id = $1 AND form_type = $2")
        .bind(church_id)
        .bind(form_type.as_str())
        .execute(pool)
        .await?;
    Ok(())
}
