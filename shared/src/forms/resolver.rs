//! Configuration merge resolver
//!
//! Computes the effective editable state for a (church, form type)
//! pair from the persisted override, falling back to the static
//! defaults when no override exists or its lists are empty. Reapplied
//! whenever the persisted config changes (after a save, or when the
//! active form-type tab switches) so stale drafts are never shown.

use serde::{Deserialize, Serialize};

use super::defaults::default_fields_for;
use super::{CustomField, FormConfig, FormFieldConfig, FormType};

/// Effective configuration, ready for the editor or the renderer
///
/// `title`/`hero_title`/`description` are `Some` only when a non-empty
/// override is persisted; the per-form-type placeholder is supplied
/// separately and never substituted into stored values.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFormConfig {
    pub form_type: FormType,
    pub title: Option<String>,
    pub hero_title: Option<String>,
    pub description: Option<String>,
    pub field_config: Vec<FormFieldConfig>,
    pub custom_fields: Vec<CustomField>,
}

/// Resolve the effective configuration from a persisted override
pub fn resolve(form_type: FormType, persisted: Option<&FormConfig>) -> ResolvedFormConfig {
    let field_config = match persisted {
        Some(config) if !config.field_config.is_empty() => config.field_config.clone(),
        _ => default_fields_for(form_type),
    };
    let custom_fields = persisted
        .map(|c| c.custom_fields.clone())
        .unwrap_or_default();

    ResolvedFormConfig {
        form_type,
        title: persisted.and_then(|c| non_empty(&c.title)),
        hero_title: persisted.and_then(|c| non_empty(&c.hero_title)),
        description: persisted.and_then(|c| non_empty(&c.description)),
        field_config,
        custom_fields,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| s.to_string())
}

impl ResolvedFormConfig {
    /// Title with the placeholder applied (render-facing)
    pub fn title_or_placeholder(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or_else(|| self.form_type.title_placeholder())
    }

    /// Shape the configuration for the public form renderer: hidden
    /// fields dropped, placeholders applied.
    pub fn public_view(&self) -> PublicFormView {
        PublicFormView {
            form_type: self.form_type,
            title: self.title_or_placeholder().to_string(),
            hero_title: self
                .hero_title
                .clone()
                .unwrap_or_else(|| self.form_type.hero_placeholder().to_string()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| self.form_type.description_placeholder().to_string()),
            fields: self
                .field_config
                .iter()
                .filter(|f| f.visible)
                .cloned()
                .collect(),
            custom_fields: self.custom_fields.clone(),
        }
    }
}

/// What the public intake form renderer consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicFormView {
    pub form_type: FormType,
    pub title: String,
    pub hero_title: String,
    pub description: String,
    /// Visible fields only, in configured order
    pub fields: Vec<FormFieldConfig>,
    pub custom_fields: Vec<CustomField>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::CustomFieldType;

    fn persisted(form_type: FormType, fields: Vec<FormFieldConfig>) -> FormConfig {
        FormConfig {
            form_type,
            title: String::new(),
            hero_title: String::new(),
            description: String::new(),
            field_config: fields,
            custom_fields: vec![],
        }
    }

    #[test]
    fn missing_config_resolves_to_defaults() {
        let resolved = resolve(FormType::Convert, None);
        assert_eq!(resolved.field_config, default_fields_for(FormType::Convert));
        assert!(resolved.custom_fields.is_empty());
        assert_eq!(resolved.title, None);
        assert_eq!(resolved.title_or_placeholder(), "Share Your Decision");
    }

    #[test]
    fn empty_field_config_falls_back_to_defaults() {
        let config = persisted(FormType::Member, vec![]);
        let resolved = resolve(FormType::Member, Some(&config));
        assert_eq!(resolved.field_config, default_fields_for(FormType::Member));
    }

    #[test]
    fn non_empty_field_config_is_used_verbatim() {
        let fields = vec![
            FormFieldConfig::locked("lastName", "Surname"),
            FormFieldConfig::locked("firstName", "Given Name"),
            FormFieldConfig::new("email", "Email").hidden(),
        ];
        let config = persisted(FormType::Convert, fields.clone());
        let resolved = resolve(FormType::Convert, Some(&config));
        // No merge with defaults: reordered, relabeled, shortened list survives.
        assert_eq!(resolved.field_config, fields);
    }

    #[test]
    fn blank_title_resolves_to_none_whitespace_included() {
        let mut config = persisted(FormType::Convert, vec![]);
        config.title = "   ".into();
        config.hero_title = "Rejoice".into();
        let resolved = resolve(FormType::Convert, Some(&config));
        assert_eq!(resolved.title, None);
        assert_eq!(resolved.hero_title.as_deref(), Some("Rejoice"));
    }

    #[test]
    fn public_view_filters_hidden_and_applies_placeholders() {
        let fields = vec![
            FormFieldConfig::locked("firstName", "First Name"),
            FormFieldConfig::locked("lastName", "Last Name"),
            FormFieldConfig::new("email", "Email").hidden(),
            FormFieldConfig::new("phone", "Phone"),
        ];
        let mut config = persisted(FormType::NewMember, fields);
        config.custom_fields.push(CustomField {
            id: "c1".into(),
            label: "Campus".into(),
            field_type: CustomFieldType::Dropdown,
            required: false,
            options: vec!["North".into()],
        });

        let view = resolve(FormType::NewMember, Some(&config)).public_view();
        let keys: Vec<&str> = view.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["firstName", "lastName", "phone"]);
        assert_eq!(view.title, FormType::NewMember.title_placeholder());
        assert_eq!(view.custom_fields.len(), 1);
    }
}
