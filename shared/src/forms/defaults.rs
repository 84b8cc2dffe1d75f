//! Canonical default field sets and placeholder strings per form type
//!
//! Defaults are built fresh on every call so in-memory edits in one
//! editing session never leak into another session's defaults.

use super::{FormFieldConfig, FormType};

/// Canonical default field list for a form type
///
/// Every returned list has unique keys, and `firstName`/`lastName`
/// locked (always visible, always required).
pub fn default_fields_for(form_type: FormType) -> Vec<FormFieldConfig> {
    match form_type {
        FormType::Convert => vec![
            FormFieldConfig::locked("firstName", "First Name"),
            FormFieldConfig::locked("lastName", "Last Name"),
            FormFieldConfig::new("phone", "Phone Number").required(),
            FormFieldConfig::new("email", "Email Address"),
            FormFieldConfig::new("gender", "Gender"),
            FormFieldConfig::new("ageGroup", "Age Group"),
            FormFieldConfig::new("address", "Home Address"),
            FormFieldConfig::new("prayerRequest", "Prayer Request"),
        ],
        FormType::NewMember => vec![
            FormFieldConfig::locked("firstName", "First Name"),
            FormFieldConfig::locked("lastName", "Last Name"),
            FormFieldConfig::new("phone", "Phone Number").required(),
            FormFieldConfig::new("email", "Email Address"),
            FormFieldConfig::new("address", "Home Address"),
            FormFieldConfig::new("dateOfBirth", "Date of Birth"),
            FormFieldConfig::new("previousChurch", "Previous Church"),
            FormFieldConfig::new("baptized", "Have You Been Baptized?"),
        ],
        FormType::Member => vec![
            FormFieldConfig::locked("firstName", "First Name"),
            FormFieldConfig::locked("lastName", "Last Name"),
            FormFieldConfig::new("phone", "Phone Number"),
            FormFieldConfig::new("email", "Email Address"),
            FormFieldConfig::new("address", "Home Address"),
            FormFieldConfig::new("dateOfBirth", "Date of Birth"),
            FormFieldConfig::new("memberSince", "Member Since"),
            FormFieldConfig::new("ministry", "Ministry Involvement"),
        ],
    }
}

impl FormType {
    /// Canonical title placeholder, shown when no override is saved
    pub fn title_placeholder(&self) -> &'static str {
        match self {
            FormType::Convert => "Share Your Decision",
            FormType::NewMember => "Join Our Family",
            FormType::Member => "Member Information",
        }
    }

    /// Canonical hero title placeholder
    pub fn hero_placeholder(&self) -> &'static str {
        match self {
            FormType::Convert => "We Celebrate With You",
            FormType::NewMember => "Welcome Home",
            FormType::Member => "Keep Your Details Current",
        }
    }

    /// Canonical description placeholder
    pub fn description_placeholder(&self) -> &'static str {
        match self {
            FormType::Convert => {
                "Tell us about the decision you made today so we can walk with you."
            }
            FormType::NewMember => {
                "We are glad you are here. Share a few details so we can welcome you well."
            }
            FormType::Member => "Update your contact details and ministry involvement.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_keys_are_unique_per_form_type() {
        for ft in FormType::ALL {
            let fields = default_fields_for(ft);
            let keys: HashSet<&str> = fields.iter().map(|f| f.key.as_str()).collect();
            assert_eq!(keys.len(), fields.len(), "duplicate key in {ft} defaults");
        }
    }

    #[test]
    fn locked_defaults_are_visible_and_required() {
        for ft in FormType::ALL {
            for field in default_fields_for(ft) {
                if field.locked {
                    assert!(field.visible, "{ft}/{} locked but hidden", field.key);
                    assert!(field.required, "{ft}/{} locked but optional", field.key);
                }
            }
        }
    }

    #[test]
    fn identity_fields_are_locked_everywhere() {
        for ft in FormType::ALL {
            let fields = default_fields_for(ft);
            for key in ["firstName", "lastName"] {
                let field = fields
                    .iter()
                    .find(|f| f.key == key)
                    .unwrap_or_else(|| panic!("{ft} missing {key}"));
                assert!(field.locked);
            }
        }
    }

    #[test]
    fn defaults_return_fresh_copies() {
        let mut first = default_fields_for(FormType::Convert);
        first[3].visible = false;
        first[3].label = "scribbled".into();
        let second = default_fields_for(FormType::Convert);
        assert!(second[3].visible);
        assert_eq!(second[3].label, "Email Address");
    }

    #[test]
    fn convert_title_placeholder_is_canonical() {
        assert_eq!(FormType::Convert.title_placeholder(), "Share Your Decision");
    }
}
