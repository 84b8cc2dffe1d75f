//! Save-time validation for persisted configurations
//!
//! The editor deliberately allows transient states (empty labels,
//! optionless dropdowns). The persistence boundary rejects the states
//! that would corrupt the rendered form: locked keys dropped or
//! duplicated, duplicate keys in general, and required custom fields
//! with no label to render.

use crate::error::{AppError, AppResult};

use super::defaults::default_fields_for;
use super::{CustomFieldType, FormConfig};

/// Validate a configuration before it is stored verbatim.
///
/// An empty `field_config` is legal (it means "defaults"), so the
/// locked-key check only applies to non-empty overrides.
pub fn validate_config(config: &FormConfig) -> AppResult<()> {
    if !config.field_config.is_empty() {
        let mut seen = std::collections::HashSet::new();
        for field in &config.field_config {
            if !seen.insert(field.key.as_str()) {
                return Err(AppError::locked_field(field.key.clone())
                    .with_detail("reason", "duplicate"));
            }
        }
        for default in default_fields_for(config.form_type) {
            if default.locked && !seen.contains(default.key.as_str()) {
                return Err(
                    AppError::locked_field(default.key).with_detail("reason", "missing")
                );
            }
        }
        for field in &config.field_config {
            if field.locked && (!field.visible || !field.required) {
                return Err(AppError::locked_field(field.key.clone())
                    .with_detail("reason", "flags"));
            }
        }
    }

    for custom in &config.custom_fields {
        if custom.required && custom.label.trim().is_empty() {
            return Err(AppError::new(crate::error::ErrorCode::CustomFieldInvalid)
                .with_detail("id", custom.id.clone())
                .with_detail("reason", "required field has no label"));
        }
        if custom.required
            && custom.field_type == CustomFieldType::Dropdown
            && custom.options.iter().all(|o| o.trim().is_empty())
        {
            return Err(AppError::new(crate::error::ErrorCode::CustomFieldInvalid)
                .with_detail("id", custom.id.clone())
                .with_detail("reason", "required dropdown has no options"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::forms::{CustomField, FormFieldConfig, FormType, default_fields_for};

    fn config_with_fields(fields: Vec<FormFieldConfig>) -> FormConfig {
        FormConfig {
            form_type: FormType::Convert,
            title: String::new(),
            hero_title: String::new(),
            description: String::new(),
            field_config: fields,
            custom_fields: vec![],
        }
    }

    #[test]
    fn default_field_list_passes() {
        let config = config_with_fields(default_fields_for(FormType::Convert));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_field_list_passes() {
        let config = config_with_fields(vec![]);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn dropped_locked_key_rejected() {
        let mut fields = default_fields_for(FormType::Convert);
        fields.retain(|f| f.key != "lastName");
        let err = validate_config(&config_with_fields(fields)).unwrap_err();
        assert_eq!(err.code, ErrorCode::LockedFieldViolation);
    }

    #[test]
    fn duplicated_key_rejected() {
        let mut fields = default_fields_for(FormType::Convert);
        fields.push(FormFieldConfig::locked("firstName", "First Name"));
        let err = validate_config(&config_with_fields(fields)).unwrap_err();
        assert_eq!(err.code, ErrorCode::LockedFieldViolation);
    }

    #[test]
    fn locked_field_with_broken_flags_rejected() {
        let mut fields = default_fields_for(FormType::Convert);
        fields[0].visible = false;
        let err = validate_config(&config_with_fields(fields)).unwrap_err();
        assert_eq!(err.code, ErrorCode::LockedFieldViolation);
    }

    #[test]
    fn reordered_locked_keys_pass() {
        let mut fields = default_fields_for(FormType::Convert);
        fields.reverse();
        assert!(validate_config(&config_with_fields(fields)).is_ok());
    }

    #[test]
    fn required_custom_field_needs_label() {
        let mut config = config_with_fields(vec![]);
        let mut field = CustomField::blank();
        field.required = true;
        config.custom_fields.push(field);
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomFieldInvalid);
    }

    #[test]
    fn optional_unlabeled_custom_field_is_tolerated() {
        let mut config = config_with_fields(vec![]);
        config.custom_fields.push(CustomField::blank());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn required_dropdown_needs_a_real_option() {
        let mut config = config_with_fields(vec![]);
        let mut field = CustomField::blank();
        field.label = "Campus".into();
        field.required = true;
        field.field_type = CustomFieldType::Dropdown;
        field.options = vec!["".into(), "  ".into()];
        config.custom_fields.push(field);
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomFieldInvalid);

        config.custom_fields[0].options = vec!["North".into()];
        assert!(validate_config(&config).is_ok());
    }
}
