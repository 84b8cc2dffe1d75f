//! Form configuration engine
//!
//! Per-church, per-form-type configuration of the public intake forms:
//! which standard fields appear, their order, labels and
//! visible/required flags, plus church-authored custom fields. A
//! locked subset of fields (identity fields) is structurally mandatory
//! and cannot be hidden or made optional.
//!
//! The engine is pure in-memory state: [`defaults`] supplies the
//! canonical field sets, [`resolver`] computes the effective
//! configuration from a persisted override (or its absence),
//! [`editor`] applies reorder/toggle/custom-field mutations to a
//! draft, and [`validate`] performs the save-time checks the
//! persistence boundary enforces.

pub mod defaults;
pub mod editor;
pub mod resolver;
pub mod validate;

pub use defaults::default_fields_for;
pub use editor::{CustomFieldPatch, FormConfigEditor};
pub use resolver::{PublicFormView, ResolvedFormConfig, resolve};
pub use validate::validate_config;

use serde::{Deserialize, Serialize};

/// The three public intake forms a church can configure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    Convert,
    NewMember,
    Member,
}

impl FormType {
    pub const ALL: [FormType; 3] = [FormType::Convert, FormType::NewMember, FormType::Member];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Convert => "convert",
            FormType::NewMember => "new_member",
            FormType::Member => "member",
        }
    }
}

impl std::fmt::Display for FormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FormType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "convert" => Ok(FormType::Convert),
            "new_member" => Ok(FormType::NewMember),
            "member" => Ok(FormType::Member),
            _ => Err(()),
        }
    }
}

/// One standard field entry on a form
///
/// `locked` is immutable per field definition: locked fields are
/// always visible and always required, and visibility/required
/// toggles on them are silently absorbed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFieldConfig {
    /// Stable identifier, unique within a form type's field list
    pub key: String,
    /// Church-editable display text
    pub label: String,
    pub visible: bool,
    pub required: bool,
    pub locked: bool,
}

impl FormFieldConfig {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            visible: true,
            required: false,
            locked: false,
        }
    }

    pub fn locked(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            visible: true,
            required: true,
            locked: true,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Type tag for church-authored custom fields
///
/// Closed variant so renderers and validators can exhaustively match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomFieldType {
    Text,
    Dropdown,
    YesNo,
}

/// Church-authored additional question on a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Unique string id, generated at creation time
    pub id: String,
    /// Free text; may be empty while authoring
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: CustomFieldType,
    pub required: bool,
    /// Meaningful only when `field_type` is `Dropdown`
    #[serde(default)]
    pub options: Vec<String>,
}

impl CustomField {
    /// A freshly created custom field: text type, empty label, optional
    pub fn blank() -> Self {
        Self {
            id: crate::util::custom_field_id(),
            label: String::new(),
            field_type: CustomFieldType::Text,
            required: false,
            options: Vec::new(),
        }
    }
}

/// Persisted configuration aggregate for one (church, form type) pair
///
/// Empty `title`/`hero_title`/`description` strings mean "unset, fall
/// back to the form type's canonical placeholder". An empty
/// `field_config` means "use the default field set".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    pub form_type: FormType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub hero_title: String,
    #[serde(default)]
    pub description: String,
    pub field_config: Vec<FormFieldConfig>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_type_round_trips_through_serde() {
        for ft in FormType::ALL {
            let json = serde_json::to_string(&ft).unwrap();
            let back: FormType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ft);
        }
        assert_eq!(
            serde_json::to_string(&FormType::NewMember).unwrap(),
            "\"new_member\""
        );
    }

    #[test]
    fn form_type_from_str_rejects_unknown() {
        assert_eq!("convert".parse::<FormType>(), Ok(FormType::Convert));
        assert!("visitor".parse::<FormType>().is_err());
    }

    #[test]
    fn custom_field_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&CustomFieldType::YesNo).unwrap(),
            "\"yes_no\""
        );
    }

    #[test]
    fn custom_field_serializes_type_key() {
        let field = CustomField {
            id: "1".into(),
            label: "Campus".into(),
            field_type: CustomFieldType::Dropdown,
            required: true,
            options: vec!["North".into(), "South".into()],
        };
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "dropdown");
        assert_eq!(json["options"][1], "South");
    }

    #[test]
    fn form_config_wire_shape_is_camel_case() {
        let config = FormConfig {
            form_type: FormType::Convert,
            title: "Share Your Decision".into(),
            hero_title: String::new(),
            description: String::new(),
            field_config: vec![FormFieldConfig::locked("firstName", "First Name")],
            custom_fields: vec![],
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["formType"], "convert");
        assert!(json.get("fieldConfig").is_some());
        assert!(json.get("customFields").is_some());
        assert!(json.get("heroTitle").is_some());
    }

    #[test]
    fn blank_custom_field_defaults() {
        let field = CustomField::blank();
        assert!(field.label.is_empty());
        assert_eq!(field.field_type, CustomFieldType::Text);
        assert!(!field.required);
        assert!(field.options.is_empty());
        assert!(!field.id.is_empty());
    }
}
