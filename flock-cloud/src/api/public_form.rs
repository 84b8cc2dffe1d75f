//! Public intake form endpoints (no auth)
//!
//! GET  /api/public/forms/{church_id}/{form_type}             — effective config for the renderer
//! POST /api/public/forms/{church_id}/{form_type}/submissions — intake submission
//!
//! Required-field enforcement happens here, against the effective
//! configuration at submission time, not in the engine.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{Map, Value};
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::forms::{FormType, PublicFormView, resolve};
use shared::models::{ChurchStatus, ConvertCreate, MemberCreate};
use shared::util::{now_millis, snowflake_id};

use crate::db;
use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;

use super::form_config::parse_form_type;

async fn effective_view(
    state: &AppState,
    church_id: &str,
    form_type: FormType,
) -> Result<PublicFormView, ServiceError> {
    let church = db::churches::find_by_id(&state.pool, church_id)
        .await?
        .ok_or_else(|| ServiceError::from(AppError::new(ErrorCode::ChurchNotFound)))?;

    if church.status.parse::<ChurchStatus>() != Ok(ChurchStatus::Active) {
        return Err(AppError::new(ErrorCode::ChurchSuspended).into());
    }

    let persisted = db::form_configs::find(&state.pool, church_id, form_type).await?;
    Ok(resolve(form_type, persisted.as_ref()).public_view())
}

pub async fn get_form(
    State(state): State<AppState>,
    Path((church_id, form_type)): Path<(String, String)>,
) -> ServiceResult<Json<PublicFormView>> {
    let form_type = parse_form_type(&form_type)?;
    let view = effective_view(&state, &church_id, form_type).await?;
    Ok(Json(view))
}

fn answer_text(answers: &Map<String, Value>, key: &str) -> Option<String> {
    match answers.get(key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_answered(answers: &Map<String, Value>, key: &str) -> bool {
    match answers.get(key) {
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Bool(_)) | Some(Value::Number(_)) => true,
        _ => false,
    }
}

/// Enforce required standard + custom fields against the effective config.
fn check_required(view: &PublicFormView, answers: &Map<String, Value>) -> Result<(), AppError> {
    for field in view.fields.iter().filter(|f| f.required) {
        if !is_answered(answers, &field.key) {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                format!("{} is required", field.label),
            )
            .with_detail("key", field.key.clone()));
        }
    }
    for custom in view.custom_fields.iter().filter(|c| c.required) {
        if !is_answered(answers, &custom.id) {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                format!("{} is required", custom.label),
            )
            .with_detail("key", custom.id.clone()));
        }
    }
    Ok(())
}

/// Answers to church-authored custom fields, keyed by custom field id
fn custom_responses(view: &PublicFormView, answers: &Map<String, Value>) -> Value {
    let mut out = Map::new();
    for custom in &view.custom_fields {
        if let Some(value) = answers.get(&custom.id) {
            out.insert(custom.id.clone(), value.clone());
        }
    }
    Value::Object(out)
}

pub async fn submit(
    State(state): State<AppState>,
    Path((church_id, form_type)): Path<(String, String)>,
    Json(answers): Json<Map<String, Value>>,
) -> ServiceResult<Json<ApiResponse<Value>>> {
    let form_type = parse_form_type(&form_type)?;
    let view = effective_view(&state, &church_id, form_type).await?;

    check_required(&view, &answers).map_err(ServiceError::from)?;

    let id = snowflake_id();
    let now = now_millis();
    let custom = custom_responses(&view, &answers);

    match form_type {
        FormType::Convert => {
            let payload = ConvertCreate {
                first_name: answer_text(&answers, "firstName").unwrap_or_default(),
                last_name: answer_text(&answers, "lastName").unwrap_or_default(),
                phone: answer_text(&answers, "phone"),
                email: answer_text(&answers, "email"),
                gender: answer_text(&answers, "gender"),
                age_group: answer_text(&answers, "ageGroup"),
                address: answer_text(&answers, "address"),
                prayer_request: answer_text(&answers, "prayerRequest"),
                custom_responses: Some(custom),
            };
            db::converts::create(&state.pool, &church_id, id, &payload, now).await?;
        }
        FormType::NewMember | FormType::Member => {
            // Standard keys without a dedicated member column
            // (previousChurch, baptized) ride along in custom_responses.
            let mut custom = custom;
            if let Value::Object(map) = &mut custom {
                for key in ["previousChurch", "baptized"] {
                    if let Some(v) = answers.get(key) {
                        map.insert(key.to_string(), v.clone());
                    }
                }
            }
            let payload = MemberCreate {
                first_name: answer_text(&answers, "firstName").unwrap_or_default(),
                last_name: answer_text(&answers, "lastName").unwrap_or_default(),
                phone: answer_text(&answers, "phone"),
                email: answer_text(&answers, "email"),
                address: answer_text(&answers, "address"),
                date_of_birth: answer_text(&answers, "dateOfBirth"),
                member_since: answer_text(&answers, "memberSince"),
                ministry: answer_text(&answers, "ministry"),
                custom_responses: Some(custom),
            };
            db::members::create(&state.pool, &church_id, id, &payload, now).await?;
        }
    }

    tracing::info!(church_id = %church_id, form_type = %form_type, "Intake submission stored");

    Ok(Json(ApiResponse::success(
        serde_json::json!({ "id": id.to_string() }),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::forms::{CustomField, CustomFieldType, FormFieldConfig};

    fn view_with(fields: Vec<FormFieldConfig>, custom_fields: Vec<CustomField>) -> PublicFormView {
        PublicFormView {
            form_type: FormType::Convert,
            title: "Share Your Decision".into(),
            hero_title: String::new(),
            description: String::new(),
            fields,
            custom_fields,
        }
    }

    #[test]
    fn missing_required_standard_field_is_rejected() {
        let view = view_with(
            vec![
                FormFieldConfig::locked("firstName", "First Name"),
                FormFieldConfig::new("phone", "Phone").required(),
            ],
            vec![],
        );
        let mut answers = Map::new();
        answers.insert("firstName".into(), Value::String("Ana".into()));

        let err = check_required(&view, &answers).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "Phone is required");
    }

    #[test]
    fn whitespace_answer_does_not_satisfy_required() {
        let view = view_with(vec![FormFieldConfig::locked("firstName", "First Name")], vec![]);
        let mut answers = Map::new();
        answers.insert("firstName".into(), Value::String("   ".into()));

        assert!(check_required(&view, &answers).is_err());
    }

    #[test]
    fn required_custom_field_accepts_boolean_answer() {
        let view = view_with(
            vec![],
            vec![CustomField {
                id: "7001".into(),
                label: "First visit?".into(),
                field_type: CustomFieldType::YesNo,
                required: true,
                options: vec![],
            }],
        );
        let mut answers = Map::new();
        answers.insert("7001".into(), Value::Bool(false));

        assert!(check_required(&view, &answers).is_ok());
    }

    #[test]
    fn custom_responses_keeps_only_known_custom_field_ids() {
        let view = view_with(
            vec![],
            vec![CustomField {
                id: "7001".into(),
                label: "Campus".into(),
                field_type: CustomFieldType::Text,
                required: false,
                options: vec![],
            }],
        );
        let mut answers = Map::new();
        answers.insert("7001".into(), Value::String("North".into()));
        answers.insert("unknown".into(), Value::String("dropped".into()));

        let out = custom_responses(&view, &answers);
        assert_eq!(out, serde_json::json!({ "7001": "North" }));
    }
}
